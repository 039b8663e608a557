use chrono::NaiveDate;

use super::basket_model::{BasketItem, BasketOptimization};
use crate::errors::Result;

/// Trait defining the contract for basket optimization.
pub trait BasketServiceTrait: Send + Sync {
    /// Splits the basket across stores so each line is bought where its
    /// discounted unit price is lowest on the given date.
    fn optimize(&self, items: &[BasketItem], date: NaiveDate) -> Result<BasketOptimization>;
}
