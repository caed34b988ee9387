use catalog_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    seed::seed_if_empty,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url).await?;
    // Ensure the schema exists.
    run_migrations(&orm).await?;

    match seed_if_empty(&orm).await? {
        Some(report) => println!(
            "Seed completed: {} categories, {} products, {} users, {} orders",
            report.categories, report.products, report.users, report.orders
        ),
        None => println!("Store already has data, nothing seeded"),
    }
    Ok(())
}
