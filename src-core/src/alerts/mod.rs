pub(crate) mod alerts_errors;
pub(crate) mod alerts_model;
pub(crate) mod alerts_repository;
pub(crate) mod alerts_service;
pub(crate) mod alerts_traits;

// Re-export the public interface
pub use alerts_errors::UserError;
pub use alerts_model::{PriceAlert, TriggeredAlert, User};
pub use alerts_repository::UserRegistry;
pub use alerts_service::AlertService;
pub use alerts_traits::AlertServiceTrait;
