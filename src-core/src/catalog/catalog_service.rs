use std::sync::Arc;

use chrono::NaiveDate;

use super::catalog_model::Product;
use super::catalog_traits::{CatalogRepositoryTrait, CatalogServiceTrait};
use crate::errors::Result;

/// Product catalog queries for a single store/date.
pub struct CatalogService {
    repository: Arc<dyn CatalogRepositoryTrait>,
}

impl CatalogService {
    pub fn new(repository: Arc<dyn CatalogRepositoryTrait>) -> Self {
        CatalogService { repository }
    }
}

impl CatalogServiceTrait for CatalogService {
    fn get_stores(&self) -> Vec<String> {
        self.repository.stores()
    }

    fn get_products(&self, store: &str, date: NaiveDate) -> Result<Vec<Product>> {
        self.repository.load_products(store, date)
    }

    fn get_product_by_id(
        &self,
        product_id: &str,
        store: &str,
        date: NaiveDate,
    ) -> Result<Option<Product>> {
        let products = self.repository.load_products(store, date)?;
        Ok(products.into_iter().find(|p| p.product_id == product_id))
    }
}
