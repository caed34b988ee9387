use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::orders::OrderWithItems,
    error::ErrorBody,
    models::{Order, OrderItem, Product, ProductView, User},
    routes::{health, params, products, users},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        products::list_products,
        products::search_products,
        products::search_products_by_name,
        users::list_users,
        users::search_user_by_email,
        users::get_user,
        users::list_user_orders
    ),
    components(
        schemas(
            User,
            Product,
            ProductView,
            Order,
            OrderItem,
            OrderWithItems,
            ErrorBody,
            health::HealthData,
            params::ProductListQuery,
            params::KeywordQuery,
            params::EmailQuery
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Products", description = "Catalog endpoints"),
        (name = "Users", description = "User endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
