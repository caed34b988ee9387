use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    routing::get,
};

use crate::{
    error::{AppResult, ErrorBody},
    models::{Product, ProductView},
    routes::params::{KeywordQuery, ProductListQuery},
    services::catalog_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products))
        .route("/search", get(search_products))
        .route("/unsafe-search", get(search_products_by_name))
}

#[utoipa::path(
    get,
    path = "/api/products",
    params(ProductListQuery),
    responses(
        (status = 200, description = "Products with their category name", body = Vec<ProductView>),
        (status = 400, description = "Invalid limit", body = ErrorBody),
    ),
    tag = "Products"
)]
pub async fn list_products(
    State(state): State<AppState>,
    query: Result<Query<ProductListQuery>, QueryRejection>,
) -> AppResult<Json<Vec<ProductView>>> {
    let Query(query) = query?;
    let limit = query.normalize()?;
    let items = catalog_service::list_products_with_category(&state, limit).await?;
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/api/products/search",
    params(KeywordQuery),
    responses(
        (status = 200, description = "Products whose name or description contains the keyword", body = Vec<ProductView>),
    ),
    tag = "Products"
)]
pub async fn search_products(
    State(state): State<AppState>,
    query: Result<Query<KeywordQuery>, QueryRejection>,
) -> AppResult<Json<Vec<ProductView>>> {
    let Query(query) = query?;
    let items = catalog_service::search_products(&state, &query.keyword).await?;
    Ok(Json(items))
}

/// Kept at its historical path for existing clients; the keyword is bound like everywhere else.
#[utoipa::path(
    get,
    path = "/api/products/unsafe-search",
    params(KeywordQuery),
    responses(
        (status = 200, description = "Products whose name contains the keyword", body = Vec<Product>),
    ),
    tag = "Products"
)]
pub async fn search_products_by_name(
    State(state): State<AppState>,
    query: Result<Query<KeywordQuery>, QueryRejection>,
) -> AppResult<Json<Vec<Product>>> {
    let Query(query) = query?;
    let items = catalog_service::search_products_by_name(&state, &query.keyword).await?;
    Ok(Json(items))
}
