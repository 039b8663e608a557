use chrono::NaiveDate;

use crate::catalog::Discount;
use crate::utils::{brand_matches, name_matches};

/// Best (maximum) discount percentage applicable to a product on a date.
///
/// A discount matches on case-insensitive product name, the optional brand
/// filter (absent or empty matches any brand), and an inclusive validity
/// interval containing `date`. Returns 0.0 when nothing matches; there are
/// no error conditions.
pub fn best_discount(
    discounts: &[Discount],
    product_name: &str,
    brand: Option<&str>,
    date: NaiveDate,
) -> f64 {
    discounts
        .iter()
        .filter(|d| {
            name_matches(&d.product_name, product_name)
                && brand_matches(brand, &d.brand)
                && d.is_active_on(date)
        })
        .map(|d| d.percentage_of_discount)
        .fold(0.0, f64::max)
}

/// Base price after applying the best applicable discount.
pub fn effective_price(
    base_price: f64,
    discounts: &[Discount],
    product_name: &str,
    brand: Option<&str>,
    date: NaiveDate,
) -> f64 {
    let percentage = best_discount(discounts, product_name, brand, date);
    base_price - (base_price * percentage / 100.0)
}
