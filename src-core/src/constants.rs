/// Date format used in snapshot file names and query parameters.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Suffix marking discount snapshot files (`{store}_discounts_{date}.csv`).
pub const DISCOUNT_FILE_MARKER: &str = "_discounts_";

/// Minimum effective-price movement that counts as a price change.
pub const PRICE_EPSILON: f64 = 1e-4;

/// Cap applied to "best discounts" style rankings.
pub const TOP_DISCOUNTS_LIMIT: usize = 10;

/// File names for the persisted user/alert registry.
pub const USERS_FILE: &str = "users.json";
pub const ALERTS_FILE: &str = "alerts.json";
