pub(crate) mod discounts_model;
pub(crate) mod discounts_resolver;
pub(crate) mod discounts_service;
pub(crate) mod discounts_traits;

// Re-export the public interface
pub use discounts_model::StoreDiscount;
pub use discounts_resolver::{best_discount, effective_price};
pub use discounts_service::DiscountService;
pub use discounts_traits::DiscountServiceTrait;
