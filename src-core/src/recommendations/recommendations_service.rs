use std::sync::Arc;

use chrono::NaiveDate;
use log::warn;

use super::recommendations_model::BestValueProduct;
use super::recommendations_traits::RecommendationServiceTrait;
use crate::catalog::{CatalogRepositoryTrait, Product};
use crate::discounts::best_discount;
use crate::errors::Result;
use crate::utils::{name_matches, round2};

/// Ranks matching products across stores by effective price per standard
/// quantity, so differently sized packages compare fairly.
pub struct RecommendationService {
    catalog: Arc<dyn CatalogRepositoryTrait>,
}

impl RecommendationService {
    pub fn new(catalog: Arc<dyn CatalogRepositoryTrait>) -> Self {
        RecommendationService { catalog }
    }
}

/// Normalized value and its label for a package. kg and l scale to 100g /
/// 100ml equivalents; unrecognized units fall back to per-package-unit.
fn value_per_unit(price: f64, product: &Product) -> (f64, String) {
    let quantity = product.package_quantity;
    match product.package_unit.to_lowercase().as_str() {
        "kg" => (price / (quantity * 10.0), "per 100g".to_string()),
        "g" => (price / (quantity / 100.0), "per 100g".to_string()),
        "l" => (price / (quantity * 10.0), "per 100ml".to_string()),
        "ml" => (price / (quantity / 100.0), "per 100ml".to_string()),
        unit => (price / quantity, format!("per 1 {}", unit)),
    }
}

impl RecommendationServiceTrait for RecommendationService {
    fn best_value(&self, product_name: &str, date: NaiveDate) -> Result<Vec<BestValueProduct>> {
        let mut results = Vec::new();
        for store in self.catalog.stores() {
            let products = self.catalog.load_products(&store, date)?;
            let discounts = self.catalog.load_all_discounts(&store)?;
            for product in products {
                if !name_matches(&product.product_name, product_name) {
                    continue;
                }
                if product.package_quantity <= 0.0 {
                    warn!(
                        "Product {} in store {} has non-positive package quantity; \
                         excluded from value ranking",
                        product.product_id, store
                    );
                    continue;
                }
                let discount_percent = best_discount(&discounts, product_name, None, date);
                let final_price =
                    product.price - (product.price * discount_percent / 100.0);
                let (value, label) = value_per_unit(final_price, &product);
                results.push(BestValueProduct {
                    value_per_unit: round2(value),
                    value_per_unit_label: label,
                    final_price: round2(final_price),
                    discount_percent,
                    base_price: product.price,
                    store: store.clone(),
                    product_id: product.product_id,
                    product_name: product.product_name,
                    brand: product.brand,
                    package_quantity: product.package_quantity,
                    package_unit: product.package_unit,
                    currency: product.currency,
                });
            }
        }
        results.sort_by(|a, b| a.value_per_unit.total_cmp(&b.value_per_unit));
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(quantity: f64, unit: &str) -> Product {
        Product {
            product_id: "P001".to_string(),
            product_name: "branza".to_string(),
            product_category: "lactate".to_string(),
            brand: "Hochland".to_string(),
            package_quantity: quantity,
            package_unit: unit.to_string(),
            price: 5.0,
            currency: "RON".to_string(),
        }
    }

    #[test]
    fn test_kilograms_normalize_to_100g() {
        let (value, label) = value_per_unit(5.0, &product(2.0, "kg"));
        assert!((value - 0.25).abs() < 1e-9);
        assert_eq!(label, "per 100g");
    }

    #[test]
    fn test_grams_normalize_to_100g() {
        let (value, label) = value_per_unit(5.0, &product(500.0, "g"));
        assert!((value - 1.0).abs() < 1e-9);
        assert_eq!(label, "per 100g");
    }

    #[test]
    fn test_liters_and_milliliters_normalize_to_100ml() {
        let (value, label) = value_per_unit(5.0, &product(1.0, "l"));
        assert!((value - 0.5).abs() < 1e-9);
        assert_eq!(label, "per 100ml");

        let (value, label) = value_per_unit(5.0, &product(250.0, "ml"));
        assert!((value - 2.0).abs() < 1e-9);
        assert_eq!(label, "per 100ml");
    }

    #[test]
    fn test_other_units_stay_per_unit() {
        let (value, label) = value_per_unit(5.0, &product(10.0, "buc"));
        assert!((value - 0.5).abs() < 1e-9);
        assert_eq!(label, "per 1 buc");
    }
}
