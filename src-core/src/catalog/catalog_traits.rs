use chrono::NaiveDate;

use super::catalog_model::{Discount, Product};
use crate::errors::Result;

/// Trait defining the contract for catalog data access.
///
/// Implementations resolve a (store, date) query to the latest snapshot
/// dated on or before the query date; a store with no snapshot yet yields
/// empty data, never an error.
pub trait CatalogRepositoryTrait: Send + Sync {
    /// Distinct store names known to the catalog.
    fn stores(&self) -> Vec<String>;

    /// Distinct snapshot dates across all stores, ascending.
    fn snapshot_dates(&self) -> Vec<NaiveDate>;

    /// Products from the nearest prior snapshot for the store.
    fn load_products(&self, store: &str, date: NaiveDate) -> Result<Vec<Product>>;

    /// Discounts from the nearest prior discount snapshot for the store.
    fn load_discounts(&self, store: &str, date: NaiveDate) -> Result<Vec<Discount>>;

    /// Union of all dated discount snapshots for the store.
    fn load_all_discounts(&self, store: &str) -> Result<Vec<Discount>>;
}

/// Trait defining the contract for product catalog queries.
pub trait CatalogServiceTrait: Send + Sync {
    fn get_stores(&self) -> Vec<String>;
    fn get_products(&self, store: &str, date: NaiveDate) -> Result<Vec<Product>>;
    fn get_product_by_id(
        &self,
        product_id: &str,
        store: &str,
        date: NaiveDate,
    ) -> Result<Option<Product>>;
}
