mod common;

use catalog_api::{
    entity::{Categories, OrderItems, Orders, Products, Users},
    error::AppError,
    seed::seed_if_empty,
    services::{
        order_service::list_user_orders,
        user_service::{find_user_by_email, get_user, list_users, normalize_email},
    },
};
use sea_orm::{EntityTrait, PaginatorTrait};

#[tokio::test]
async fn finds_seeded_alice_by_email() -> anyhow::Result<()> {
    let state = common::seeded_state().await?;

    let alice = find_user_by_email(&state, "alice@example.com")
        .await?
        .expect("alice is seeded");
    assert_eq!(alice.username, "alice");
    assert_eq!(alice.email, "alice@example.com");
    Ok(())
}

#[tokio::test]
async fn email_lookup_ignores_case_and_padding() -> anyhow::Result<()> {
    let state = common::seeded_state().await?;

    let alice = find_user_by_email(&state, "  Alice@Example.COM ").await?;
    assert_eq!(alice.map(|u| u.username).as_deref(), Some("alice"));
    Ok(())
}

#[tokio::test]
async fn unknown_email_is_none_not_an_error() -> anyhow::Result<()> {
    let state = common::seeded_state().await?;

    assert!(find_user_by_email(&state, "nobody@x.com").await?.is_none());
    assert!(find_user_by_email(&state, "alice@example").await?.is_none());
    Ok(())
}

#[tokio::test]
async fn lists_and_gets_users() -> anyhow::Result<()> {
    let state = common::seeded_state().await?;

    let users = list_users(&state).await?;
    let names: Vec<&str> = users.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, ["alice", "bob", "charlie"]);

    let bob = get_user(&state, users[1].id).await?;
    assert_eq!(bob, users[1]);

    assert!(matches!(get_user(&state, 9999).await, Err(AppError::NotFound(_))));
    Ok(())
}

#[tokio::test]
async fn user_orders_carry_snapshotted_items() -> anyhow::Result<()> {
    let state = common::seeded_state().await?;
    let alice = find_user_by_email(&state, "alice@example.com")
        .await?
        .expect("alice is seeded");

    let orders = list_user_orders(&state, alice.id).await?;
    assert_eq!(orders.len(), 2);
    for entry in &orders {
        assert_eq!(entry.order.user_id, alice.id);
        assert!(!entry.items.is_empty());
        assert!(entry.items.iter().all(|item| item.order_id == entry.order.id));

        let sum: f64 = entry
            .items
            .iter()
            .map(|item| item.price * f64::from(item.quantity))
            .sum();
        assert!((sum - entry.order.total).abs() < 1e-6);
    }

    let charlie = find_user_by_email(&state, "charlie@example.com")
        .await?
        .expect("charlie is seeded");
    assert!(list_user_orders(&state, charlie.id).await?.is_empty());

    assert!(matches!(
        list_user_orders(&state, 9999).await,
        Err(AppError::NotFound(_))
    ));
    Ok(())
}

#[tokio::test]
async fn seeding_is_idempotent() -> anyhow::Result<()> {
    let state = common::empty_state().await?;

    let first = seed_if_empty(&state.orm).await?.expect("first run seeds");
    assert_eq!(first.users, 3);
    assert!(seed_if_empty(&state.orm).await?.is_none());

    assert_eq!(Users::find().count(&state.orm).await?, 3);
    assert_eq!(Categories::find().count(&state.orm).await?, first.categories as u64);
    assert_eq!(Products::find().count(&state.orm).await?, first.products as u64);
    assert_eq!(Orders::find().count(&state.orm).await?, first.orders as u64);
    assert!(OrderItems::find().count(&state.orm).await? >= first.orders as u64);
    Ok(())
}

#[test]
fn normalize_email_trims_and_lowercases() {
    assert_eq!(normalize_email(" Bob@Example.com\n"), "bob@example.com");
}
