use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One requested line of a shopping basket.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasketItem {
    pub product_name: String,
    pub quantity: f64,
    /// Optional: restrict the line to a single brand.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
}

/// Where to buy one basket line and at what price.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasketLineResult {
    pub product_name: String,
    pub product_id: String,
    pub store: String,
    /// Discounted unit price, rounded to 2 decimals.
    pub price: f64,
    pub quantity: f64,
    /// Line total (unit price x quantity), rounded to 2 decimals.
    pub total: f64,
    pub brand: String,
}

/// Result of optimizing a basket across stores.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasketOptimization {
    pub items: Vec<BasketLineResult>,
    pub store_totals: HashMap<String, f64>,
    pub overall_total: f64,
}
