pub(crate) mod history_service;
pub(crate) mod history_traits;

pub use history_service::PriceHistoryService;
pub use history_traits::PriceHistoryServiceTrait;
