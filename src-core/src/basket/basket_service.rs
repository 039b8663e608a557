use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;

use super::basket_model::{BasketItem, BasketLineResult, BasketOptimization};
use super::basket_traits::BasketServiceTrait;
use crate::catalog::CatalogRepositoryTrait;
use crate::discounts::effective_price;
use crate::errors::Result;
use crate::utils::{brand_matches, name_matches, round2};

/// The winning candidate for one basket line.
struct LineWinner {
    store: String,
    unit_price: f64,
    product_id: String,
    product_brand: String,
}

/// Picks the cheapest store per basket line after applying the best
/// applicable discount, and aggregates per-store and overall totals.
pub struct BasketService {
    catalog: Arc<dyn CatalogRepositoryTrait>,
}

impl BasketService {
    pub fn new(catalog: Arc<dyn CatalogRepositoryTrait>) -> Self {
        BasketService { catalog }
    }

    /// Cheapest store for one line. The first product matching the line in
    /// a store's catalog is that store's sole candidate; a later store only
    /// wins on a strictly lower discounted unit price.
    fn find_winner(
        &self,
        stores: &[String],
        item: &BasketItem,
        date: NaiveDate,
    ) -> Result<Option<LineWinner>> {
        let brand_filter = item.brand.as_deref();
        let mut winner: Option<LineWinner> = None;

        for store in stores {
            let products = self.catalog.load_products(store, date)?;
            let discounts = self.catalog.load_discounts(store, date)?;

            let Some(product) = products.iter().find(|p| {
                name_matches(&p.product_name, &item.product_name)
                    && brand_matches(brand_filter, &p.brand)
            }) else {
                continue;
            };

            let unit_price = effective_price(
                product.price,
                &discounts,
                &product.product_name,
                brand_filter,
                date,
            );

            let improves = match &winner {
                Some(current) => unit_price < current.unit_price,
                None => true,
            };
            if improves {
                winner = Some(LineWinner {
                    store: store.clone(),
                    unit_price,
                    product_id: product.product_id.clone(),
                    product_brand: product.brand.clone(),
                });
            }
        }
        Ok(winner)
    }
}

impl BasketServiceTrait for BasketService {
    fn optimize(&self, items: &[BasketItem], date: NaiveDate) -> Result<BasketOptimization> {
        let stores = self.catalog.stores();
        let mut result_items = Vec::new();
        let mut store_totals: HashMap<String, f64> = HashMap::new();
        let mut overall_total = 0.0;

        for item in items {
            // A line no store can satisfy is dropped, not an error.
            let Some(winner) = self.find_winner(&stores, item, date)? else {
                continue;
            };

            let total = round2(winner.unit_price * item.quantity);
            let brand = match item.brand.as_deref() {
                Some(b) if !b.is_empty() => b.to_string(),
                _ => winner.product_brand,
            };
            result_items.push(BasketLineResult {
                product_name: item.product_name.clone(),
                product_id: winner.product_id,
                store: winner.store.clone(),
                price: round2(winner.unit_price),
                quantity: item.quantity,
                total,
                brand,
            });

            let store_total = store_totals.entry(winner.store).or_insert(0.0);
            *store_total = round2(*store_total + total);
            overall_total += total;
        }

        Ok(BasketOptimization {
            items: result_items,
            store_totals,
            overall_total: round2(overall_total),
        })
    }
}
