use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    routing::get,
};

use crate::{
    dto::orders::OrderWithItems,
    error::{AppError, AppResult, ErrorBody},
    models::User,
    routes::params::EmailQuery,
    services::{order_service, user_service},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users))
        .route("/search", get(search_user_by_email))
        .route("/{id}", get(get_user))
        .route("/{id}/orders", get(list_user_orders))
}

#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All users", body = Vec<User>),
    ),
    tag = "Users"
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = user_service::list_users(&state).await?;
    Ok(Json(users))
}

#[utoipa::path(
    get,
    path = "/api/users/search",
    params(EmailQuery),
    responses(
        (status = 200, description = "User with this email", body = User),
        (status = 400, description = "Email parameter missing", body = ErrorBody),
        (status = 404, description = "User not found", body = ErrorBody),
    ),
    tag = "Users"
)]
pub async fn search_user_by_email(
    State(state): State<AppState>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> AppResult<Json<User>> {
    let Query(query) = query?;
    let email = query.required()?;
    match user_service::find_user_by_email(&state, &email).await? {
        Some(user) => Ok(Json(user)),
        None => Err(AppError::NotFound("User not found".to_string())),
    }
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Get user", body = User),
        (status = 404, description = "User not found", body = ErrorBody),
    ),
    tag = "Users"
)]
pub async fn get_user(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> AppResult<Json<User>> {
    let Path(id) = id?;
    let user = user_service::get_user(&state, id).await?;
    Ok(Json(user))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}/orders",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Orders of the user with their line items", body = Vec<OrderWithItems>),
        (status = 404, description = "User not found", body = ErrorBody),
    ),
    tag = "Users"
)]
pub async fn list_user_orders(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> AppResult<Json<Vec<OrderWithItems>>> {
    let Path(id) = id?;
    let orders = order_service::list_user_orders(&state, id).await?;
    Ok(Json(orders))
}
