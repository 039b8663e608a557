pub(crate) mod basket_model;
pub(crate) mod basket_service;
pub(crate) mod basket_traits;

pub use basket_model::{BasketItem, BasketLineResult, BasketOptimization};
pub use basket_service::BasketService;
pub use basket_traits::BasketServiceTrait;
