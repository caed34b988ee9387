use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseTransaction, EntityTrait, PaginatorTrait, Set,
    TransactionTrait,
};

use crate::{
    db::OrmConn,
    entity::{
        Users, categories::ActiveModel as CategoryActive, order_items::ActiveModel as ItemActive,
        orders::ActiveModel as OrderActive, products::ActiveModel as ProductActive,
        users::ActiveModel as UserActive,
    },
    services::user_service::normalize_email,
};

const CATEGORIES: [&str; 4] = ["Electronics", "Books", "Clothing", "Home & Kitchen"];

// (name, description, price, stock, index into CATEGORIES)
const PRODUCTS: [(&str, &str, f64, i32, Option<usize>); 8] = [
    ("Laptop", "High-performance laptop with 16GB RAM", 1299.99, 25, Some(0)),
    ("Smartphone", "Latest model with OLED display", 799.99, 50, Some(0)),
    ("Wireless Headphones", "Noise-cancelling over-ear headphones", 199.99, 80, Some(0)),
    ("The Rust Programming Language", "The official book on Rust", 39.99, 120, Some(1)),
    ("Cotton T-Shirt", "Comfortable 100% cotton t-shirt", 19.99, 200, Some(2)),
    ("Denim Jacket", "Classic blue denim jacket", 89.99, 40, Some(2)),
    ("Coffee Maker", "Programmable drip coffee maker", 59.99, 35, Some(3)),
    ("Gift Card", "Redeemable store credit", 50.0, 1000, None),
];

const USERS: [(&str, &str); 3] = [
    ("alice", "alice@example.com"),
    ("bob", "bob@example.com"),
    ("charlie", "charlie@example.com"),
];

// (user index, status, [(product index, quantity)])
const ORDERS: [(usize, &str, &[(usize, i32)]); 3] = [
    (0, "completed", &[(0, 1), (2, 1)]),
    (0, "pending", &[(3, 2)]),
    (1, "shipped", &[(4, 3), (6, 1)]),
];

/// Summary of what a seeding run inserted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub categories: usize,
    pub products: usize,
    pub users: usize,
    pub orders: usize,
}

/// Populates the sample catalog when the users table is empty.
///
/// Returns `None` when the store already holds data.
pub async fn seed_if_empty(conn: &OrmConn) -> anyhow::Result<Option<SeedReport>> {
    if Users::find().count(conn).await? > 0 {
        tracing::debug!("store already populated, skipping seed");
        return Ok(None);
    }

    let txn = conn.begin().await?;
    let report = seed_sample_data(&txn).await?;
    txn.commit().await?;

    tracing::info!(
        categories = report.categories,
        products = report.products,
        users = report.users,
        orders = report.orders,
        "seeded sample data"
    );
    Ok(Some(report))
}

async fn seed_sample_data(txn: &DatabaseTransaction) -> anyhow::Result<SeedReport> {
    let now = Utc::now().fixed_offset();

    let mut category_ids = Vec::with_capacity(CATEGORIES.len());
    for name in CATEGORIES {
        let category = CategoryActive {
            id: NotSet,
            name: Set(name.to_string()),
        }
        .insert(txn)
        .await?;
        category_ids.push(category.id);
    }

    let mut products = Vec::with_capacity(PRODUCTS.len());
    for (name, description, price, stock, category) in PRODUCTS {
        let product = ProductActive {
            id: NotSet,
            name: Set(name.to_string()),
            description: Set(Some(description.to_string())),
            price: Set(price),
            stock: Set(stock),
            category_id: Set(category.map(|idx| category_ids[idx])),
            created_at: Set(now),
            name_key: NotSet,
            description_key: NotSet,
        }
        .with_search_keys()
        .insert(txn)
        .await?;
        products.push((product.id, product.price));
    }

    let mut user_ids = Vec::with_capacity(USERS.len());
    for (username, email) in USERS {
        let user = UserActive {
            id: NotSet,
            username: Set(username.to_string()),
            email: Set(normalize_email(email)),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(txn)
        .await?;
        user_ids.push(user.id);
    }

    for (user, status, lines) in ORDERS {
        let total = lines
            .iter()
            .map(|&(product, quantity)| products[product].1 * f64::from(quantity))
            .sum::<f64>();
        let order = OrderActive {
            id: NotSet,
            user_id: Set(user_ids[user]),
            total: Set(total),
            status: Set(status.to_string()),
            created_at: Set(now),
        }
        .insert(txn)
        .await?;

        for &(product, quantity) in lines {
            let (product_id, price) = products[product];
            ItemActive {
                id: NotSet,
                order_id: Set(order.id),
                product_id: Set(product_id),
                quantity: Set(quantity),
                price: Set(price),
            }
            .insert(txn)
            .await?;
        }
    }

    Ok(SeedReport {
        categories: category_ids.len(),
        products: products.len(),
        users: user_ids.len(),
        orders: ORDERS.len(),
    })
}
