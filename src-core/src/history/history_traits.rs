use crate::catalog::PriceHistoryEntry;
use crate::errors::Result;

/// Trait defining the contract for price timeline queries.
pub trait PriceHistoryServiceTrait: Send + Sync {
    /// Effective-price change points for the product across every store,
    /// sorted by store name then date. Only genuine changes are emitted.
    fn price_history(
        &self,
        product_name: &str,
        brand: Option<&str>,
    ) -> Result<Vec<PriceHistoryEntry>>;
}
