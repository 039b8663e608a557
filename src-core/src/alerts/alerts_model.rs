use serde::{Deserialize, Serialize};

/// A registered user of the alerting feature.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,
    pub name: String,
    pub email: String,
}

/// A target price watched on behalf of a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceAlert {
    pub product_name: String,
    /// Optional: restrict the alert to a single brand.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    pub target_price: f64,
}

/// An alert whose product reached the target price in some store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggeredAlert {
    pub store: String,
    pub product_name: String,
    pub brand: String,
    pub base_price: f64,
    pub discount_percent: f64,
    /// Effective price, rounded to 2 decimals.
    pub final_price: f64,
    pub target_price: f64,
    pub currency: String,
    /// Simulated delivery note; no real email is sent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<String>,
}
