use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use chrono::{Days, NaiveDate};

use super::history_traits::PriceHistoryServiceTrait;
use crate::catalog::{CatalogRepositoryTrait, PriceHistoryEntry, Product};
use crate::constants::PRICE_EPSILON;
use crate::discounts::effective_price;
use crate::errors::Result;
use crate::utils::{brand_matches, name_matches};

/// Reconstructs per-store effective-price timelines from overlapping
/// snapshot and discount data.
pub struct PriceHistoryService {
    catalog: Arc<dyn CatalogRepositoryTrait>,
}

impl PriceHistoryService {
    pub fn new(catalog: Arc<dyn CatalogRepositoryTrait>) -> Self {
        PriceHistoryService { catalog }
    }

    fn store_timeline(
        &self,
        store: &str,
        product_name: &str,
        brand: Option<&str>,
    ) -> Result<Vec<PriceHistoryEntry>> {
        // Base price per snapshot date; later snapshots overwrite.
        let mut price_by_date: BTreeMap<NaiveDate, Product> = BTreeMap::new();
        for date in self.catalog.snapshot_dates() {
            for product in self.catalog.load_products(store, date)? {
                if name_matches(&product.product_name, product_name)
                    && brand_matches(brand, &product.brand)
                {
                    price_by_date.insert(date, product);
                }
            }
        }

        let discounts = self.catalog.load_all_discounts(store)?;

        // Candidate change points: every known snapshot date, every
        // matching discount start, and the day after every matching
        // discount end (the expiry itself is a price change).
        let mut change_dates: BTreeSet<NaiveDate> = price_by_date.keys().copied().collect();
        for discount in &discounts {
            if name_matches(&discount.product_name, product_name)
                && brand_matches(brand, &discount.brand)
            {
                change_dates.insert(discount.from_date);
                if let Some(day_after) = discount.to_date.checked_add_days(Days::new(1)) {
                    change_dates.insert(day_after);
                }
            }
        }

        let mut timeline = Vec::new();
        let mut last_price: Option<f64> = None;
        for date in change_dates {
            // Base price from the latest snapshot on or before this date;
            // before the first snapshot there is nothing to report.
            let Some((_, product)) = price_by_date.range(..=date).next_back() else {
                continue;
            };
            let price = effective_price(product.price, &discounts, product_name, brand, date);
            let changed = match last_price {
                Some(last) => (price - last).abs() > PRICE_EPSILON,
                None => true,
            };
            if changed {
                timeline.push(PriceHistoryEntry {
                    product_id: product.product_id.clone(),
                    store_name: store.to_string(),
                    date,
                    price,
                    currency: product.currency.clone(),
                });
                last_price = Some(price);
            }
        }
        Ok(timeline)
    }
}

impl PriceHistoryServiceTrait for PriceHistoryService {
    fn price_history(
        &self,
        product_name: &str,
        brand: Option<&str>,
    ) -> Result<Vec<PriceHistoryEntry>> {
        let mut history = Vec::new();
        for store in self.catalog.stores() {
            history.extend(self.store_timeline(&store, product_name, brand)?);
        }
        history.sort_by(|a, b| (&a.store_name, a.date).cmp(&(&b.store_name, b.date)));
        Ok(history)
    }
}
