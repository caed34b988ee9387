use sea_orm::ActiveValue;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    /// `name` case-folded with [`fold_case`]; searches match against this.
    #[sea_orm(indexed)]
    pub name_key: String,
    pub description_key: Option<String>,
    pub price: f64,
    pub stock: i32,
    #[sea_orm(indexed)]
    pub category_id: Option<i32>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::categories::Entity",
        from = "Column::CategoryId",
        to = "super::categories::Column::Id",
        on_delete = "Restrict"
    )]
    Categories,
    #[sea_orm(has_many = "super::order_items::Entity")]
    OrderItems,
}

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Categories.def()
    }
}

impl Related<super::order_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Case folding shared by the stored search keys and incoming keywords.
///
/// Done in Rust so every backend folds the same way; SQLite's `lower()`
/// only folds ASCII.
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

impl ActiveModel {
    /// Recomputes the search keys from `name` and `description` where those are set.
    pub fn with_search_keys(mut self) -> Self {
        if let ActiveValue::Set(name) = &self.name {
            self.name_key = ActiveValue::Set(fold_case(name));
        }
        if let ActiveValue::Set(description) = &self.description {
            self.description_key = ActiveValue::Set(description.as_deref().map(fold_case));
        }
        self
    }
}
