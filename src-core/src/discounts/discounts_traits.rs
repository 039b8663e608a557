use chrono::NaiveDate;

use super::discounts_model::StoreDiscount;
use crate::errors::Result;

/// Trait defining the contract for cross-store discount queries.
pub trait DiscountServiceTrait: Send + Sync {
    /// All discounts, from every store, active on the date.
    fn discounts_on(&self, date: NaiveDate) -> Result<Vec<StoreDiscount>>;

    /// Active discounts sorted descending by percentage, capped at the top 10.
    fn best_discounts(&self, date: NaiveDate) -> Result<Vec<StoreDiscount>>;

    /// Discounts whose campaign starts exactly on the date.
    fn new_discounts(&self, date: NaiveDate) -> Result<Vec<StoreDiscount>>;

    /// Highest active discount per distinct product name, sorted descending,
    /// capped at the top 10.
    fn best_discount_per_product(&self, date: NaiveDate) -> Result<Vec<StoreDiscount>>;
}
