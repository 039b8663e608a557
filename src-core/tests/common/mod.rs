#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use pricewise_core::catalog::CsvCatalogRepository;
use tempfile::TempDir;

pub const PRODUCT_HEADER: &str =
    "product_id;product_name;product_category;brand;package_quantity;package_unit;price;currency";
pub const DISCOUNT_HEADER: &str =
    "product_id;product_name;brand;package_quantity;package_unit;product_category;from_date;to_date;percentage_of_discount";

/// Writes `{store}_{date}.csv` with the given product rows.
pub fn write_products(dir: &Path, store: &str, date: &str, rows: &[&str]) {
    write_csv(
        dir,
        &format!("{}_{}.csv", store, date),
        PRODUCT_HEADER,
        rows,
    );
}

/// Writes `{store}_discounts_{date}.csv` with the given discount rows.
pub fn write_discounts(dir: &Path, store: &str, date: &str, rows: &[&str]) {
    write_csv(
        dir,
        &format!("{}_discounts_{}.csv", store, date),
        DISCOUNT_HEADER,
        rows,
    );
}

fn write_csv(dir: &Path, file_name: &str, header: &str, rows: &[&str]) {
    let mut file = File::create(dir.join(file_name)).expect("Failed to create fixture file");
    writeln!(file, "{}", header).unwrap();
    for row in rows {
        writeln!(file, "{}", row).unwrap();
    }
}

pub fn catalog(dir: &TempDir) -> Arc<CsvCatalogRepository> {
    Arc::new(CsvCatalogRepository::new(dir.path()).expect("Failed to build catalog"))
}

pub fn date(y: i32, m: u32, d: u32) -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
