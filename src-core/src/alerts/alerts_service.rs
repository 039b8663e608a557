use std::sync::Arc;

use chrono::NaiveDate;
use lazy_static::lazy_static;
use log::info;
use regex::Regex;

use super::alerts_errors::UserError;
use super::alerts_model::{PriceAlert, TriggeredAlert, User};
use super::alerts_repository::UserRegistry;
use super::alerts_traits::AlertServiceTrait;
use crate::catalog::CatalogRepositoryTrait;
use crate::discounts::best_discount;
use crate::errors::Result;
use crate::utils::{brand_matches, name_matches, round2};

lazy_static! {
    static ref EMAIL_PATTERN: Regex =
        Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+$").unwrap();
}

/// User registration and price-alert management on top of the registry,
/// plus the alert trigger scan over the catalog.
pub struct AlertService {
    registry: Arc<UserRegistry>,
    catalog: Arc<dyn CatalogRepositoryTrait>,
}

impl AlertService {
    pub fn new(registry: Arc<UserRegistry>, catalog: Arc<dyn CatalogRepositoryTrait>) -> Self {
        AlertService { registry, catalog }
    }
}

fn validate_user(user: &User) -> std::result::Result<(), UserError> {
    if user.user_id.is_empty() {
        return Err(UserError::MissingField("userId".to_string()));
    }
    if user.name.is_empty() {
        return Err(UserError::MissingField("name".to_string()));
    }
    if user.email.is_empty() {
        return Err(UserError::MissingField("email".to_string()));
    }
    if !EMAIL_PATTERN.is_match(&user.email) {
        return Err(UserError::InvalidEmail(user.email.clone()));
    }
    Ok(())
}

impl AlertServiceTrait for AlertService {
    fn register_user(&self, user: User) -> Result<()> {
        validate_user(&user)?;
        self.registry.add_user(user)?;
        Ok(())
    }

    fn get_user(&self, user_id: &str) -> Option<User> {
        self.registry.get_user(user_id)
    }

    fn set_alert(&self, user_id: &str, alert: PriceAlert) -> Result<()> {
        self.registry.upsert_alert(user_id, alert)?;
        Ok(())
    }

    fn get_alerts(&self, user_id: &str) -> Vec<PriceAlert> {
        self.registry.alerts_for(user_id)
    }

    fn check_alerts(&self, user_id: &str, date: NaiveDate) -> Result<Vec<TriggeredAlert>> {
        let user = self.registry.get_user(user_id);
        let mut triggered = Vec::new();

        for alert in self.registry.alerts_for(user_id) {
            let brand_filter = alert.brand.as_deref();
            for store in self.catalog.stores() {
                let products = self.catalog.load_products(&store, date)?;
                let discounts = self.catalog.load_discounts(&store, date)?;
                for product in &products {
                    if !name_matches(&product.product_name, &alert.product_name)
                        || !brand_matches(brand_filter, &product.brand)
                    {
                        continue;
                    }
                    let discount_percent =
                        best_discount(&discounts, &alert.product_name, brand_filter, date);
                    let final_price =
                        product.price - (product.price * discount_percent / 100.0);
                    if final_price > alert.target_price {
                        continue;
                    }

                    let notification = user.as_ref().map(|u| {
                        info!(
                            "[EMAIL] To: {} | Subject: Price Alert Triggered | Body: \
                             Product '{}' at store '{}' is now {} {}, below your target of {}",
                            u.email,
                            product.product_name,
                            store,
                            final_price,
                            product.currency,
                            alert.target_price
                        );
                        format!("Email would be sent to: {}", u.email)
                    });

                    triggered.push(TriggeredAlert {
                        store: store.clone(),
                        product_name: product.product_name.clone(),
                        brand: product.brand.clone(),
                        base_price: product.price,
                        discount_percent,
                        final_price: round2(final_price),
                        target_price: alert.target_price,
                        currency: product.currency.clone(),
                        notification,
                    });
                }
            }
        }
        Ok(triggered)
    }
}
