use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::{
    dto::orders::OrderWithItems,
    entity::{
        OrderItems, Users,
        order_items,
        orders::{self, Entity as Orders},
    },
    error::{AppError, AppResult},
    models::{Order, OrderItem},
    state::AppState,
};

/// Orders of one user with their line items, loaded in a single joined query.
pub async fn list_user_orders(state: &AppState, user_id: i32) -> AppResult<Vec<OrderWithItems>> {
    if Users::find_by_id(user_id).one(&state.orm).await?.is_none() {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    let rows = Orders::find()
        .filter(orders::Column::UserId.eq(user_id))
        .order_by_asc(orders::Column::Id)
        .find_with_related(OrderItems)
        .order_by_asc(order_items::Column::Id)
        .all(&state.orm)
        .await?;

    let orders: Vec<OrderWithItems> = rows
        .into_iter()
        .map(|(order, items)| OrderWithItems {
            order: Order::from(order),
            items: items.into_iter().map(OrderItem::from).collect(),
        })
        .collect();

    tracing::debug!(user_id, rows = orders.len(), "listed user orders");
    Ok(orders)
}
