use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;

use warehouse_catalog::{Category, Product};

use crate::error::AppError;
use crate::state::AppState;

// ============================================================================
// Request Types
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProductRequest {
    pub id: String,
    pub name: String,
    pub category: String,
    pub quantity: u32,
    /// Defaults to today when omitted.
    pub created_date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    pub name: String,
    pub category: String,
    pub quantity: u32,
}

// ============================================================================
// Routes
// ============================================================================

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/warehouse/products",
            get(all_products).post(add_product),
        )
        .route(
            "/warehouse/products/{id}",
            get(product_by_id).put(update_product),
        )
        .route(
            "/warehouse/products/category/{name}",
            get(products_by_category),
        )
        .route(
            "/warehouse/products/created-after/{date}",
            get(products_created_after),
        )
        .route(
            "/warehouse/products/modified-after/{date}",
            get(products_modified_after),
        )
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /warehouse/products
pub async fn add_product(
    State(state): State<AppState>,
    Json(req): Json<NewProductRequest>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    tracing::info!(id = %req.id, "adding product");

    if req.id.is_empty() {
        return Err(AppError::ValidationError(
            "product id cannot be empty".to_string(),
        ));
    }
    let category: Category = req.category.parse()?;

    let mut product = Product::new(req.id, req.name, category, req.quantity);
    if let Some(created) = req.created_date {
        product.created_date = created;
        if product.modified_date < created {
            product.modified_date = created;
        }
    }

    state.warehouse.add_product(product.clone())?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /warehouse/products
pub async fn all_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    let products = state.warehouse.all_products();
    tracing::info!(count = products.len(), "fetched all products");
    Json(products)
}

/// GET /warehouse/products/{id}
pub async fn product_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, AppError> {
    state
        .warehouse
        .product_by_id(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFoundError(format!("Product not found: {id}")))
}

/// GET /warehouse/products/category/{name}
pub async fn products_by_category(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<Product>>, AppError> {
    let category: Category = name.parse()?;
    let products = state.warehouse.products_by_category(category);
    tracing::info!(count = products.len(), %category, "fetched products by category");
    Ok(Json(products))
}

/// GET /warehouse/products/created-after/{date}
pub async fn products_created_after(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<Vec<Product>>, AppError> {
    let date = parse_date(&date)?;
    Ok(Json(state.warehouse.products_created_after(date)))
}

/// GET /warehouse/products/modified-after/{date}
pub async fn products_modified_after(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<Vec<Product>>, AppError> {
    let date = parse_date(&date)?;
    Ok(Json(state.warehouse.products_modified_after(date)))
}

fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    raw.parse().map_err(|_| {
        AppError::ValidationError(format!("Invalid date format: {raw} (expected YYYY-MM-DD)"))
    })
}
