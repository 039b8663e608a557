use chrono::NaiveDate;

use super::recommendations_model::BestValueProduct;
use crate::errors::Result;

/// Trait defining the contract for best-value recommendations.
pub trait RecommendationServiceTrait: Send + Sync {
    /// Matching products across all stores, cheapest normalized value first.
    fn best_value(&self, product_name: &str, date: NaiveDate) -> Result<Vec<BestValueProduct>>;
}
