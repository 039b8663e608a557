use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use csv::ReaderBuilder;
use log::warn;
use serde::Deserialize;

use super::catalog_errors::CatalogError;
use super::catalog_model::{Discount, Product};
use super::catalog_traits::CatalogRepositoryTrait;
use crate::constants::{DATE_FORMAT, DISCOUNT_FILE_MARKER};
use crate::errors::Result;

/// Snapshot dates discovered for one store, kept sorted ascending.
#[derive(Debug, Default, Clone)]
struct StoreFiles {
    product_dates: Vec<NaiveDate>,
    discount_dates: Vec<NaiveDate>,
}

/// File-backed catalog over a directory of per-store, per-date CSV
/// snapshots (`{store}_{date}.csv` and `{store}_discounts_{date}.csv`,
/// semicolon-separated, one header row).
///
/// The directory is scanned once at construction into a typed index;
/// queries resolve the nearest prior snapshot against the index and read
/// only that file.
pub struct CsvCatalogRepository {
    data_dir: PathBuf,
    index: BTreeMap<String, StoreFiles>,
}

/// Raw CSV row for a product snapshot, matching the file header.
#[derive(Debug, Deserialize)]
struct ProductRow {
    product_id: String,
    product_name: String,
    product_category: String,
    brand: String,
    package_quantity: f64,
    package_unit: String,
    price: f64,
    currency: String,
}

/// Raw CSV row for a discount snapshot, matching the file header.
#[derive(Debug, Deserialize)]
struct DiscountRow {
    product_id: String,
    product_name: String,
    brand: String,
    package_quantity: f64,
    package_unit: String,
    product_category: String,
    from_date: NaiveDate,
    to_date: NaiveDate,
    percentage_of_discount: f64,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            product_id: row.product_id,
            product_name: row.product_name,
            product_category: row.product_category,
            brand: row.brand,
            package_quantity: row.package_quantity,
            package_unit: row.package_unit,
            price: row.price,
            currency: row.currency,
        }
    }
}

impl From<DiscountRow> for Discount {
    fn from(row: DiscountRow) -> Self {
        Discount {
            product_id: row.product_id,
            product_name: row.product_name,
            brand: row.brand,
            package_quantity: row.package_quantity,
            package_unit: row.package_unit,
            product_category: row.product_category,
            from_date: row.from_date,
            to_date: row.to_date,
            percentage_of_discount: row.percentage_of_discount,
        }
    }
}

impl CsvCatalogRepository {
    /// Scans `data_dir` and builds the store/date index.
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        let mut index: BTreeMap<String, StoreFiles> = BTreeMap::new();

        for entry in std::fs::read_dir(&data_dir)? {
            let entry = entry?;
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };
            let Some((store, date, is_discount)) = parse_snapshot_file_name(name) else {
                continue;
            };
            let files = index.entry(store).or_default();
            if is_discount {
                files.discount_dates.push(date);
            } else {
                files.product_dates.push(date);
            }
        }

        for files in index.values_mut() {
            files.product_dates.sort();
            files.discount_dates.sort();
        }

        Ok(CsvCatalogRepository { data_dir, index })
    }

    fn product_file(&self, store: &str, date: NaiveDate) -> PathBuf {
        self.data_dir
            .join(format!("{}_{}.csv", store, date.format(DATE_FORMAT)))
    }

    fn discount_file(&self, store: &str, date: NaiveDate) -> PathBuf {
        self.data_dir.join(format!(
            "{}{}{}.csv",
            store,
            DISCOUNT_FILE_MARKER,
            date.format(DATE_FORMAT)
        ))
    }

    fn read_products_file(&self, path: &Path) -> Result<Vec<Product>> {
        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        let mut reader = ReaderBuilder::new()
            .delimiter(b';')
            .has_headers(true)
            .from_reader(file);
        let mut products = Vec::new();
        for row in reader.deserialize() {
            let row: ProductRow = row.map_err(CatalogError::Csv)?;
            products.push(Product::from(row));
        }
        Ok(products)
    }

    fn read_discounts_file(&self, path: &Path) -> Result<Vec<Discount>> {
        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        let mut reader = ReaderBuilder::new()
            .delimiter(b';')
            .has_headers(true)
            .from_reader(file);
        let mut discounts = Vec::new();
        for row in reader.deserialize() {
            let row: DiscountRow = row.map_err(CatalogError::Csv)?;
            let discount = Discount::from(row);
            if discount.from_date > discount.to_date {
                warn!(
                    "Discount for '{}' in {:?} has inverted interval {}..{}; it will never apply",
                    discount.product_name, path, discount.from_date, discount.to_date
                );
            }
            discounts.push(discount);
        }
        Ok(discounts)
    }
}

/// Recognizes `{store}_{date}.csv` and `{store}_discounts_{date}.csv`.
fn parse_snapshot_file_name(name: &str) -> Option<(String, NaiveDate, bool)> {
    let stem = name.strip_suffix(".csv")?;
    if let Some(pos) = stem.find(DISCOUNT_FILE_MARKER) {
        let store = &stem[..pos];
        let date_str = &stem[pos + DISCOUNT_FILE_MARKER.len()..];
        let date = NaiveDate::parse_from_str(date_str, DATE_FORMAT).ok()?;
        if store.is_empty() {
            return None;
        }
        return Some((store.to_string(), date, true));
    }
    let (store, date_str) = stem.rsplit_once('_')?;
    let date = NaiveDate::parse_from_str(date_str, DATE_FORMAT).ok()?;
    if store.is_empty() {
        return None;
    }
    Some((store.to_string(), date, false))
}

/// Latest date in `dates` (sorted ascending) that is on or before `date`.
fn floor_date(dates: &[NaiveDate], date: NaiveDate) -> Option<NaiveDate> {
    let idx = dates.partition_point(|d| *d <= date);
    if idx == 0 {
        None
    } else {
        Some(dates[idx - 1])
    }
}

impl CatalogRepositoryTrait for CsvCatalogRepository {
    fn stores(&self) -> Vec<String> {
        self.index.keys().cloned().collect()
    }

    fn snapshot_dates(&self) -> Vec<NaiveDate> {
        let mut dates = BTreeSet::new();
        for files in self.index.values() {
            dates.extend(files.product_dates.iter().copied());
            dates.extend(files.discount_dates.iter().copied());
        }
        dates.into_iter().collect()
    }

    fn load_products(&self, store: &str, date: NaiveDate) -> Result<Vec<Product>> {
        let Some(files) = self.index.get(store) else {
            return Ok(Vec::new());
        };
        let Some(snapshot) = floor_date(&files.product_dates, date) else {
            return Ok(Vec::new());
        };
        self.read_products_file(&self.product_file(store, snapshot))
    }

    fn load_discounts(&self, store: &str, date: NaiveDate) -> Result<Vec<Discount>> {
        let Some(files) = self.index.get(store) else {
            return Ok(Vec::new());
        };
        let Some(snapshot) = floor_date(&files.discount_dates, date) else {
            return Ok(Vec::new());
        };
        self.read_discounts_file(&self.discount_file(store, snapshot))
    }

    fn load_all_discounts(&self, store: &str) -> Result<Vec<Discount>> {
        let Some(files) = self.index.get(store) else {
            return Ok(Vec::new());
        };
        let mut all = Vec::new();
        for &date in &files.discount_dates {
            all.extend(self.read_discounts_file(&self.discount_file(store, date))?);
        }
        Ok(all)
    }
}
