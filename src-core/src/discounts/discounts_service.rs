use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;

use super::discounts_model::StoreDiscount;
use super::discounts_traits::DiscountServiceTrait;
use crate::catalog::CatalogRepositoryTrait;
use crate::constants::TOP_DISCOUNTS_LIMIT;
use crate::errors::Result;

/// Cross-store discount queries: discounts valid on a date, top rankings,
/// and newly started campaigns.
pub struct DiscountService {
    catalog: Arc<dyn CatalogRepositoryTrait>,
}

impl DiscountService {
    pub fn new(catalog: Arc<dyn CatalogRepositoryTrait>) -> Self {
        DiscountService { catalog }
    }

    /// Every store's full discount history filtered to records active on
    /// `date`, in store order. No dedup across snapshot files.
    fn active_discounts(&self, date: NaiveDate) -> Result<Vec<StoreDiscount>> {
        let mut active = Vec::new();
        for store in self.catalog.stores() {
            for discount in self.catalog.load_all_discounts(&store)? {
                if discount.is_active_on(date) {
                    active.push(StoreDiscount {
                        store: store.clone(),
                        discount,
                    });
                }
            }
        }
        Ok(active)
    }
}

impl DiscountServiceTrait for DiscountService {
    fn discounts_on(&self, date: NaiveDate) -> Result<Vec<StoreDiscount>> {
        self.active_discounts(date)
    }

    fn best_discounts(&self, date: NaiveDate) -> Result<Vec<StoreDiscount>> {
        let mut active = self.active_discounts(date)?;
        active.sort_by(|a, b| {
            b.discount
                .percentage_of_discount
                .total_cmp(&a.discount.percentage_of_discount)
        });
        active.truncate(TOP_DISCOUNTS_LIMIT);
        Ok(active)
    }

    fn new_discounts(&self, date: NaiveDate) -> Result<Vec<StoreDiscount>> {
        let mut new = Vec::new();
        for store in self.catalog.stores() {
            for discount in self.catalog.load_all_discounts(&store)? {
                if discount.from_date == date {
                    new.push(StoreDiscount {
                        store: store.clone(),
                        discount,
                    });
                }
            }
        }
        Ok(new)
    }

    fn best_discount_per_product(&self, date: NaiveDate) -> Result<Vec<StoreDiscount>> {
        // Keyed by lowercased product name so grouping follows the same
        // normalization as matching. BTreeMap keeps ties deterministic.
        let mut best_by_name: BTreeMap<String, StoreDiscount> = BTreeMap::new();
        for candidate in self.active_discounts(date)? {
            let key = candidate.discount.product_name.to_lowercase();
            match best_by_name.get(&key) {
                Some(current)
                    if current.discount.percentage_of_discount
                        >= candidate.discount.percentage_of_discount => {}
                _ => {
                    best_by_name.insert(key, candidate);
                }
            }
        }

        let mut best: Vec<StoreDiscount> = best_by_name.into_values().collect();
        best.sort_by(|a, b| {
            b.discount
                .percentage_of_discount
                .total_cmp(&a.discount.percentage_of_discount)
        });
        best.truncate(TOP_DISCOUNTS_LIMIT);
        Ok(best)
    }
}
