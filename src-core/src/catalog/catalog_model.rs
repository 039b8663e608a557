use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One product row of a dated store snapshot. Immutable once loaded;
/// identified by (store, snapshot date, product id).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: String,
    pub product_name: String,
    pub product_category: String,
    pub brand: String,
    pub package_quantity: f64,
    pub package_unit: String,
    pub price: f64,
    pub currency: String,
}

/// A discount campaign for a product, valid over an inclusive date interval.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discount {
    pub product_id: String,
    pub product_name: String,
    pub brand: String,
    pub package_quantity: f64,
    pub package_unit: String,
    pub product_category: String,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub percentage_of_discount: f64,
}

impl Discount {
    /// Whether the discount is active on `date`. Records with an inverted
    /// interval (`from_date > to_date`) never match.
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.from_date <= self.to_date && self.from_date <= date && date <= self.to_date
    }
}

/// A derived price-change point for a product in one store. Never stored;
/// produced by the price timeline builder.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceHistoryEntry {
    pub product_id: String,
    pub store_name: String,
    pub date: NaiveDate,
    pub price: f64,
    pub currency: String,
}
