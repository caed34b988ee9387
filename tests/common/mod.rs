#![allow(dead_code)]

use catalog_api::{
    db::{create_orm_conn, run_migrations},
    seed::seed_if_empty,
    state::AppState,
};

/// Fresh in-memory store with the schema applied and nothing else.
pub async fn empty_state() -> anyhow::Result<AppState> {
    let orm = create_orm_conn("sqlite::memory:").await?;
    run_migrations(&orm).await?;
    Ok(AppState { orm })
}

/// Fresh in-memory store holding the sample data.
pub async fn seeded_state() -> anyhow::Result<AppState> {
    let state = empty_state().await?;
    seed_if_empty(&state.orm).await?;
    Ok(state)
}
