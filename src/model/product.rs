//! The product resource and its request/response bodies.

use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Type-safe identifier for Products. Serialized as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents a product in the catalog.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for Product`](#impl-ActorEntity-for-Product) for details on:
/// - Creation and update payloads ([`ProductPayload`])
/// - Validation rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: i64,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (typically assigned by the actor)
    /// * `name` - Product name
    /// * `price` - Product price, in the smallest currency unit
    pub fn new(id: ProductId, name: impl Into<String>, price: i64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

/// Request body for creating or replacing a product.
///
/// Every field is optional so that a body missing `name` or `price` still decodes and is
/// then rejected by validation with a readable message. `id` is only honoured on create.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<i64>,
}

impl ProductPayload {
    /// A payload with `name` and `price` set and no id.
    pub fn new(name: impl Into<String>, price: i64) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            price: Some(price),
        }
    }

    /// Sets the client-chosen id.
    pub fn with_id(mut self, id: ProductId) -> Self {
        self.id = Some(id);
        self
    }
}

/// Response body for listing products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductList {
    pub products: Vec<Product>,
    pub count: usize,
}

impl From<Vec<Product>> for ProductList {
    fn from(products: Vec<Product>) -> Self {
        let count = products.len();
        Self { products, count }
    }
}
