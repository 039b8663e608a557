use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::HeaderValue,
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use pricewise_core::{
    alerts::{PriceAlert, TriggeredAlert, User},
    basket::{BasketItem, BasketOptimization},
    catalog::{PriceHistoryEntry, Product},
    constants::DATE_FORMAT,
    discounts::StoreDiscount,
    recommendations::BestValueProduct,
};

use crate::{
    config::Config,
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

fn parse_date(raw: &str) -> ApiResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| {
        ApiError::BadRequest(format!("Invalid date '{}', expected YYYY-MM-DD", raw))
    })
}

pub async fn health() -> &'static str {
    "ok"
}

// ===================== Products =====================

#[derive(Deserialize)]
struct ProductsQuery {
    store: String,
    date: String,
}

async fn list_products(
    State(state): State<Arc<AppState>>,
    Query(q): Query<ProductsQuery>,
) -> ApiResult<Json<Vec<Product>>> {
    let date = parse_date(&q.date)?;
    Ok(Json(state.catalog_service.get_products(&q.store, date)?))
}

async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(product_id): Path<String>,
    Query(q): Query<ProductsQuery>,
) -> ApiResult<Json<Product>> {
    let date = parse_date(&q.date)?;
    state
        .catalog_service
        .get_product_by_id(&product_id, &q.store, date)?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

// ===================== Discounts =====================

#[derive(Deserialize)]
struct DateQuery {
    date: String,
}

async fn list_discounts(
    State(state): State<Arc<AppState>>,
    Query(q): Query<DateQuery>,
) -> ApiResult<Json<Vec<StoreDiscount>>> {
    let date = parse_date(&q.date)?;
    Ok(Json(state.discount_service.discounts_on(date)?))
}

async fn best_discounts(
    State(state): State<Arc<AppState>>,
    Query(q): Query<DateQuery>,
) -> ApiResult<Json<Vec<StoreDiscount>>> {
    let date = parse_date(&q.date)?;
    Ok(Json(state.discount_service.best_discounts(date)?))
}

async fn new_discounts(
    State(state): State<Arc<AppState>>,
    Query(q): Query<DateQuery>,
) -> ApiResult<Json<Vec<StoreDiscount>>> {
    let date = parse_date(&q.date)?;
    Ok(Json(state.discount_service.new_discounts(date)?))
}

async fn best_discount_per_product(
    State(state): State<Arc<AppState>>,
    Query(q): Query<DateQuery>,
) -> ApiResult<Json<Vec<StoreDiscount>>> {
    let date = parse_date(&q.date)?;
    Ok(Json(state.discount_service.best_discount_per_product(date)?))
}

// ===================== Basket =====================

async fn split_optimize(
    State(state): State<Arc<AppState>>,
    Query(q): Query<DateQuery>,
    Json(items): Json<Vec<BasketItem>>,
) -> ApiResult<Json<BasketOptimization>> {
    let date = parse_date(&q.date)?;
    Ok(Json(state.basket_service.optimize(&items, date)?))
}

// ===================== Price history =====================

#[derive(Deserialize)]
struct HistoryQuery {
    brand: Option<String>,
}

async fn price_history(
    State(state): State<Arc<AppState>>,
    Path(product_name): Path<String>,
    Query(q): Query<HistoryQuery>,
) -> ApiResult<Json<Vec<PriceHistoryEntry>>> {
    Ok(Json(
        state
            .history_service
            .price_history(&product_name, q.brand.as_deref())?,
    ))
}

// ===================== Recommendations =====================

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecommendationsQuery {
    product_name: String,
    date: String,
}

async fn best_value(
    State(state): State<Arc<AppState>>,
    Query(q): Query<RecommendationsQuery>,
) -> ApiResult<Json<Vec<BestValueProduct>>> {
    let date = parse_date(&q.date)?;
    Ok(Json(
        state
            .recommendation_service
            .best_value(&q.product_name, date)?,
    ))
}

// ===================== Users & alerts =====================

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserIdQuery {
    user_id: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AlertCheckQuery {
    user_id: String,
    date: String,
}

async fn register_user(
    State(state): State<Arc<AppState>>,
    Json(user): Json<User>,
) -> ApiResult<Json<User>> {
    state.alert_service.register_user(user.clone())?;
    Ok(Json(user))
}

async fn get_user(
    State(state): State<Arc<AppState>>,
    Query(q): Query<UserIdQuery>,
) -> ApiResult<Json<User>> {
    state
        .alert_service
        .get_user(&q.user_id)
        .map(Json)
        .ok_or(ApiError::NotFound)
}

async fn set_alert(
    State(state): State<Arc<AppState>>,
    Query(q): Query<UserIdQuery>,
    Json(alert): Json<PriceAlert>,
) -> ApiResult<Json<Vec<PriceAlert>>> {
    state.alert_service.set_alert(&q.user_id, alert)?;
    Ok(Json(state.alert_service.get_alerts(&q.user_id)))
}

async fn get_alerts(
    State(state): State<Arc<AppState>>,
    Query(q): Query<UserIdQuery>,
) -> ApiResult<Json<Vec<PriceAlert>>> {
    Ok(Json(state.alert_service.get_alerts(&q.user_id)))
}

async fn check_alerts(
    State(state): State<Arc<AppState>>,
    Query(q): Query<AlertCheckQuery>,
) -> ApiResult<Json<Vec<TriggeredAlert>>> {
    let date = parse_date(&q.date)?;
    Ok(Json(state.alert_service.check_alerts(&q.user_id, date)?))
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .map(|o| o.parse::<HeaderValue>().unwrap())
            .collect::<Vec<_>>();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .route("/health", get(health))
        .route("/products", get(list_products))
        .route("/products/{product_id}", get(get_product))
        .route("/discounts", get(list_discounts))
        .route("/discounts/best", get(best_discounts))
        .route("/discounts/new", get(new_discounts))
        .route("/discounts/best-per-product", get(best_discount_per_product))
        .route("/basket/split-optimize", post(split_optimize))
        .route("/history/{product_name}", get(price_history))
        .route("/recommendations", get(best_value))
        .route("/alerts/user", post(register_user).get(get_user))
        .route("/alerts", post(set_alert).get(get_alerts))
        .route("/alerts/check", get(check_alerts))
        .with_state(state)
        .layer(cors)
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
