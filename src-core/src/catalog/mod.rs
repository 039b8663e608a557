pub(crate) mod catalog_errors;
pub(crate) mod catalog_model;
pub(crate) mod catalog_repository;
pub(crate) mod catalog_service;
pub(crate) mod catalog_traits;

// Re-export the public interface
pub use catalog_errors::CatalogError;
pub use catalog_model::{Discount, PriceHistoryEntry, Product};
pub use catalog_repository::CsvCatalogRepository;
pub use catalog_service::CatalogService;
pub use catalog_traits::{CatalogRepositoryTrait, CatalogServiceTrait};
