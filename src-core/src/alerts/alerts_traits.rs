use chrono::NaiveDate;

use super::alerts_model::{PriceAlert, TriggeredAlert, User};
use crate::errors::Result;

/// Trait defining the contract for user and price-alert operations.
pub trait AlertServiceTrait: Send + Sync {
    /// Registers a user after validating id, name and email; duplicate ids
    /// and emails are rejected.
    fn register_user(&self, user: User) -> Result<()>;

    fn get_user(&self, user_id: &str) -> Option<User>;

    /// Adds or replaces the user's alert for a product (and brand).
    fn set_alert(&self, user_id: &str, alert: PriceAlert) -> Result<()>;

    fn get_alerts(&self, user_id: &str) -> Vec<PriceAlert>;

    /// Alerts whose product is at or below the target price somewhere on
    /// the date. An unknown user simply has no alerts.
    fn check_alerts(&self, user_id: &str, date: NaiveDate) -> Result<Vec<TriggeredAlert>>;
}
