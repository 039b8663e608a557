use serde::{Deserialize, Serialize};

/// A product ranked by its effective price per standard quantity
/// (100g, 100ml, or one unit).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestValueProduct {
    /// Effective price per 100g/100ml/unit, rounded to 2 decimals.
    pub value_per_unit: f64,
    pub value_per_unit_label: String,
    /// Effective price for the whole package, rounded to 2 decimals.
    pub final_price: f64,
    pub discount_percent: f64,
    pub base_price: f64,
    pub store: String,
    pub product_id: String,
    pub product_name: String,
    pub brand: String,
    pub package_quantity: f64,
    pub package_unit: String,
    pub currency: String,
}
