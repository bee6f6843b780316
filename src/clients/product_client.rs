//! # Product Client
//!
//! The product service API. Wraps a `ResourceClient<Product>` and exposes the five
//! catalog operations with [`ProductError`] as the only error type callers see.
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Product, ProductId, ProductList, ProductPayload};
use crate::product_actor::ProductError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    /// Entity errors are unboxed back into [`ProductError`]; everything else is
    /// classified by where it came from.
    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => ProductError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<ProductError>() {
                Ok(err) => *err,
                Err(other) => ProductError::ActorCommunicationError(other.to_string()),
            },
            FrameworkError::Store(err) => ProductError::DatabaseError(err.to_string()),
            other => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl ProductClient {
    /// Every product in storage order, with the count.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<ProductList, ProductError> {
        Ok(self.list().await?.into())
    }

    /// The product with `id`, or [`ProductError::NotFound`].
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product, ProductError> {
        self.get(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    /// Validates and stores a new product, returning it with its assigned id.
    #[instrument(skip(self))]
    pub async fn create_product(&self, payload: ProductPayload) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.create(payload).await.map_err(Self::map_error)
    }

    /// Validates `payload` and replaces the product with `id`.
    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        payload: ProductPayload,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner
            .update(id, payload)
            .await
            .map_err(Self::map_error)
    }

    /// Removes the product with `id`.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: ProductId) -> Result<(), ProductError> {
        self.delete(id).await
    }
}
