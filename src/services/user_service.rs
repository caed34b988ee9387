use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::{
    entity::users::{self, Entity as Users},
    error::{AppError, AppResult},
    models::User,
    state::AppState,
};

/// Canonical stored form of an email: trimmed and lower-cased.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Case-insensitive exact match on the unique email index.
///
/// Emails are stored normalized, so the lookup compares against the
/// normalized input and the index is used as-is. `Ok(None)` means no such user.
pub async fn find_user_by_email(state: &AppState, email: &str) -> AppResult<Option<User>> {
    let user = Users::find()
        .filter(users::Column::Email.eq(normalize_email(email)))
        .one(&state.orm)
        .await?
        .map(User::from);
    Ok(user)
}

pub async fn list_users(state: &AppState) -> AppResult<Vec<User>> {
    let users: Vec<User> = Users::find()
        .order_by_asc(users::Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(User::from)
        .collect();
    tracing::debug!(rows = users.len(), "listed users");
    Ok(users)
}

pub async fn get_user(state: &AppState, id: i32) -> AppResult<User> {
    match Users::find_by_id(id).one(&state.orm).await? {
        Some(user) => Ok(User::from(user)),
        None => Err(AppError::NotFound("User not found".to_string())),
    }
}
