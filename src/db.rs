use anyhow::Result;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema,
};

use crate::entity::{Categories, OrderItems, Orders, Products, Users};

pub type OrmConn = DatabaseConnection;

/// Create a SeaORM connection. The backend (Postgres or SQLite) follows the URL scheme.
pub async fn create_orm_conn(database_url: &str) -> Result<OrmConn> {
    let mut options = ConnectOptions::new(database_url);
    // Every pooled connection to `sqlite::memory:` would open its own empty database.
    if database_url.contains(":memory:") {
        options.max_connections(1).min_connections(1);
    }
    let conn = Database::connect(options).await?;
    Ok(conn)
}

/// Minimal migration runner: creates every table and index declared by the
/// entities, in foreign-key order, skipping anything that already exists.
pub async fn run_migrations(conn: &OrmConn) -> Result<()> {
    let schema = Schema::new(conn.get_database_backend());

    create_entity(conn, &schema, Users).await?;
    create_entity(conn, &schema, Categories).await?;
    create_entity(conn, &schema, Products).await?;
    create_entity(conn, &schema, Orders).await?;
    create_entity(conn, &schema, OrderItems).await?;

    Ok(())
}

async fn create_entity<E>(conn: &OrmConn, schema: &Schema, entity: E) -> Result<()>
where
    E: EntityTrait,
{
    let backend = conn.get_database_backend();

    let mut table = schema.create_table_from_entity(entity);
    table.if_not_exists();
    conn.execute(backend.build(&table)).await?;

    for mut index in schema.create_index_from_entity(E::default()) {
        index.if_not_exists();
        conn.execute(backend.build(&index)).await?;
    }

    tracing::debug!(table = E::default().table_name(), "schema ensured");
    Ok(())
}
