use sea_orm::sea_query::{Expr, LikeExpr, SimpleExpr};
use sea_orm::{Condition, EntityTrait, QueryFilter, QueryOrder, QuerySelect};

use crate::{
    entity::{
        Categories,
        products::{self, Entity as Products, fold_case},
    },
    error::AppResult,
    models::{Product, ProductView},
    state::AppState,
};

/// Escape character used in every LIKE pattern built here.
const LIKE_ESCAPE: char = '\\';

/// Lists products with their category name in a single LEFT JOIN query.
///
/// `None` returns every row; `Some(n)` returns at most `n` rows. Rows are
/// ordered by product id.
pub async fn list_products_with_category(
    state: &AppState,
    limit: Option<u64>,
) -> AppResult<Vec<ProductView>> {
    let mut finder = Products::find()
        .find_also_related(Categories)
        .order_by_asc(products::Column::Id);
    if let Some(limit) = limit {
        finder = finder.limit(limit);
    }

    let views: Vec<ProductView> = finder
        .all(&state.orm)
        .await?
        .into_iter()
        .map(|(product, category)| ProductView::from_joined(product, category))
        .collect();

    tracing::debug!(?limit, rows = views.len(), "listed products with category");
    Ok(views)
}

/// Case-insensitive substring search over name or description.
///
/// The keyword is bound as a parameter; an empty keyword matches every product.
pub async fn search_products(state: &AppState, keyword: &str) -> AppResult<Vec<ProductView>> {
    let mut finder = Products::find()
        .find_also_related(Categories)
        .order_by_asc(products::Column::Id);

    if !keyword.is_empty() {
        let pattern = contains_pattern(keyword);
        finder = finder.filter(
            Condition::any()
                .add(key_like(products::Column::NameKey, &pattern))
                .add(key_like(products::Column::DescriptionKey, &pattern)),
        );
    }

    let views: Vec<ProductView> = finder
        .all(&state.orm)
        .await?
        .into_iter()
        .map(|(product, category)| ProductView::from_joined(product, category))
        .collect();

    tracing::debug!(keyword, rows = views.len(), "searched products");
    Ok(views)
}

/// Name-only variant of [`search_products`] returning plain product rows.
pub async fn search_products_by_name(state: &AppState, keyword: &str) -> AppResult<Vec<Product>> {
    let mut finder = Products::find().order_by_asc(products::Column::Id);
    if !keyword.is_empty() {
        let pattern = contains_pattern(keyword);
        finder = finder.filter(key_like(products::Column::NameKey, &pattern));
    }

    let items: Vec<Product> = finder
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Product::from)
        .collect();

    tracing::debug!(keyword, rows = items.len(), "searched products by name");
    Ok(items)
}

/// Case-folded `%keyword%` with LIKE metacharacters escaped so they match literally.
pub fn contains_pattern(keyword: &str) -> String {
    let mut pattern = String::with_capacity(keyword.len() + 2);
    pattern.push('%');
    for ch in fold_case(keyword).chars() {
        if matches!(ch, '%' | '_') || ch == LIKE_ESCAPE {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

/// `column LIKE pattern` on one of the case-folded key columns.
fn key_like(column: products::Column, pattern: &str) -> SimpleExpr {
    Expr::col((Products, column)).like(LikeExpr::new(pattern).escape(LIKE_ESCAPE))
}
