use serde::{Deserialize, Serialize};

use crate::catalog::Discount;

/// A discount paired with the store offering it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreDiscount {
    pub store: String,
    pub discount: Discount,
}
