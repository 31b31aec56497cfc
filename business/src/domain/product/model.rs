use chrono::{DateTime, Utc};

use super::value_objects::ProductId;

/// A product as known by the remote store.
///
/// The client never edits a product in place; lists of products are replaced
/// wholesale on every reload.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub stock: u32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Constructor for data already persisted in the remote store (no validation).
    pub fn from_repository(
        id: ProductId,
        name: String,
        price: f64,
        stock: u32,
        is_active: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            price,
            stock,
            is_active,
            created_at,
        }
    }
}
