use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use pricewise_core::{
    alerts::{AlertService, AlertServiceTrait, UserRegistry},
    basket::{BasketService, BasketServiceTrait},
    catalog::{
        CatalogRepositoryTrait, CatalogService, CatalogServiceTrait, CsvCatalogRepository,
    },
    discounts::{DiscountService, DiscountServiceTrait},
    history::{PriceHistoryService, PriceHistoryServiceTrait},
    recommendations::{RecommendationService, RecommendationServiceTrait},
};

use crate::config::Config;

pub struct AppState {
    pub catalog_service: Arc<dyn CatalogServiceTrait>,
    pub discount_service: Arc<dyn DiscountServiceTrait>,
    pub history_service: Arc<dyn PriceHistoryServiceTrait>,
    pub basket_service: Arc<dyn BasketServiceTrait>,
    pub recommendation_service: Arc<dyn RecommendationServiceTrait>,
    pub alert_service: Arc<dyn AlertServiceTrait>,
}

pub fn init_tracing() {
    let fmt_layer = fmt::layer().json().with_current_span(false);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    std::fs::create_dir_all(&config.data_dir)?;
    std::fs::create_dir_all(&config.user_data_dir)?;

    let catalog: Arc<dyn CatalogRepositoryTrait> =
        Arc::new(CsvCatalogRepository::new(config.data_dir.clone())?);
    tracing::info!("Catalog data directory in use: {}", config.data_dir);

    let registry = Arc::new(UserRegistry::load(&config.user_data_dir)?);

    Ok(Arc::new(AppState {
        catalog_service: Arc::new(CatalogService::new(catalog.clone())),
        discount_service: Arc::new(DiscountService::new(catalog.clone())),
        history_service: Arc::new(PriceHistoryService::new(catalog.clone())),
        basket_service: Arc::new(BasketService::new(catalog.clone())),
        recommendation_service: Arc::new(RecommendationService::new(catalog.clone())),
        alert_service: Arc::new(AlertService::new(registry, catalog)),
    }))
}
