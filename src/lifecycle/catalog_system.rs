use tracing::{error, info};

use crate::clients::ProductClient;
use crate::config::ServiceConfig;
use crate::model::Product;
use crate::store::{JsonFileStore, MemoryStore, RecordStore, StoreError};

/// The runtime orchestrator for the product catalog.
///
/// `CatalogSystem` is responsible for:
/// - **Storage**: Opening the record store named by the [`ServiceConfig`]
/// - **Lifecycle Management**: Starting and stopping the product actor
///
/// The store is chosen at runtime, so the actor is spawned over a
/// `Box<dyn RecordStore<Product>>`.
///
/// # Example
///
/// ```ignore
/// let system = CatalogSystem::start(&ServiceConfig::default())?;
///
/// let lamp = system.product_client.create_product(ProductPayload::new("Lamp", 30)).await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct CatalogSystem {
    /// Client for interacting with the Product actor
    pub product_client: ProductClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CatalogSystem {
    /// Opens the configured store and spawns the product actor over it.
    ///
    /// Must be called from inside a Tokio runtime. Fails only if the database file
    /// exists and cannot be read or decoded.
    pub fn start(config: &ServiceConfig) -> Result<Self, StoreError> {
        let store: Box<dyn RecordStore<Product>> = if config.in_memory {
            info!("Using in-memory product store");
            Box::new(MemoryStore::new())
        } else {
            Box::new(JsonFileStore::open(&config.database_path)?)
        };

        let (product_actor, product_client) =
            crate::product_actor::new(config.channel_capacity, store);
        let product_handle = tokio::spawn(product_actor.run());

        Ok(Self {
            product_client,
            handles: vec![product_handle],
        })
    }

    /// Gracefully shuts down the system.
    ///
    /// Drops the system's client and waits for the actor task to finish. Clones of
    /// the client held elsewhere (the HTTP router, for one) keep the actor alive, so
    /// drop those first.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if every actor shut down cleanly
    /// - `Err(String)` if an actor task panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        // Dropping the last sender closes the channel; the actor's loop then returns.
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductPayload;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_start_in_memory_and_shutdown() {
        let config = ServiceConfig {
            in_memory: true,
            ..ServiceConfig::default()
        };
        let system = CatalogSystem::start(&config).unwrap();
        let lamp = system
            .product_client
            .create_product(ProductPayload::new("Lamp", 30))
            .await
            .unwrap();
        assert_eq!(lamp.name, "Lamp");
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_file_backed_system_reloads_after_restart() {
        let dir = tempdir().unwrap();
        let config = ServiceConfig {
            database_path: dir.path().join("database.json"),
            ..ServiceConfig::default()
        };

        let system = CatalogSystem::start(&config).unwrap();
        let desk = system
            .product_client
            .create_product(ProductPayload::new("Desk", 120))
            .await
            .unwrap();
        system.shutdown().await.unwrap();

        let system = CatalogSystem::start(&config).unwrap();
        let reloaded = system.product_client.get_product(desk.id).await.unwrap();
        assert_eq!(reloaded, desk);
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_malformed_database_fails_start() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("database.json");
        std::fs::write(&path, "not json").unwrap();
        let config = ServiceConfig {
            database_path: path,
            ..ServiceConfig::default()
        };
        assert!(CatalogSystem::start(&config).is_err());
    }
}
