//! ActorEntity trait implementation for the Product domain type.
//!
//! Holds the product validation rules. Both create and update payloads must carry a
//! non-empty `name` and a non-zero `price`; a record that breaks either rule never reaches
//! the store.

use super::error::ProductError;
use crate::framework::ActorEntity;
use crate::model::{Product, ProductId, ProductPayload};

impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductPayload;
    type Update = ProductPayload;
    type Error = ProductError;

    fn id(&self) -> &ProductId {
        &self.id
    }

    fn requested_id(params: &ProductPayload) -> Option<ProductId> {
        params.id
    }

    fn validate_create(params: &ProductPayload) -> Result<(), ProductError> {
        validate(params).map(|_| ())
    }

    fn duplicate_id(id: &ProductId) -> ProductError {
        ProductError::ValidationError(format!("product id {id} already exists"))
    }

    fn from_create_params(id: ProductId, params: ProductPayload) -> Result<Self, ProductError> {
        let (name, price) = validate(&params)?;
        Ok(Self::new(id, name, price))
    }

    /// The path id always wins; an `id` in the update body is ignored.
    fn from_update_params(id: ProductId, update: ProductPayload) -> Result<Self, ProductError> {
        let (name, price) = validate(&update)?;
        Ok(Self::new(id, name, price))
    }
}

fn validate(payload: &ProductPayload) -> Result<(&str, i64), ProductError> {
    let name = match payload.name.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => {
            return Err(ProductError::ValidationError(
                "name is required and must not be empty".to_string(),
            ))
        }
    };
    let price = match payload.price {
        Some(price) if price != 0 => price,
        _ => {
            return Err(ProductError::ValidationError(
                "price is required and must not be zero".to_string(),
            ))
        }
    };
    Ok((name, price))
}
