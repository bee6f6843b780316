use product_catalog::clients::actor_client::ActorClient;
use product_catalog::clients::ProductClient;
use product_catalog::model::{ProductId, ProductPayload};
use product_catalog::product_actor::{self, ProductError};
use product_catalog::store::{JsonFileStore, MemoryStore};
use std::collections::HashSet;

fn spawn_memory_catalog() -> ProductClient {
    let (actor, client) = product_actor::new(32, MemoryStore::new());
    tokio::spawn(actor.run());
    client
}

/// End-to-end walk through every product operation against a live actor.
#[tokio::test]
async fn test_product_lifecycle() {
    let client = spawn_memory_catalog();

    let lamp = client
        .create_product(ProductPayload::new("Lamp", 30))
        .await
        .expect("Failed to create product");
    assert_eq!(lamp.id, ProductId(0));

    let fetched = client.get_product(lamp.id).await.expect("Failed to get product");
    assert_eq!(fetched.name, "Lamp");
    assert_eq!(fetched.price, 30);

    let updated = client
        .update_product(lamp.id, ProductPayload::new("Lamp XL", 45))
        .await
        .expect("Failed to update product");
    assert_eq!(updated.id, lamp.id);
    let fetched = client.get_product(lamp.id).await.unwrap();
    assert_eq!((fetched.name.as_str(), fetched.price), ("Lamp XL", 45));

    client.delete_product(lamp.id).await.expect("Failed to delete product");
    assert_eq!(
        client.get_product(lamp.id).await.unwrap_err(),
        ProductError::NotFound("0".to_string())
    );
    assert_eq!(client.list_products().await.unwrap().count, 0);
}

#[tokio::test]
async fn test_invalid_payloads_are_rejected() {
    let client = spawn_memory_catalog();

    for payload in [
        ProductPayload::new("X", 0),
        ProductPayload::new("", 5),
        ProductPayload::default(),
    ] {
        let err = client.create_product(payload).await.unwrap_err();
        assert!(matches!(err, ProductError::ValidationError(_)), "got {err:?}");
    }

    // Rejections never consume an id.
    let ok = client.create_product(ProductPayload::new("X", 5)).await.unwrap();
    assert_eq!(ok.id, ProductId(0));

    let err = client
        .update_product(ok.id, ProductPayload::new("X", 0))
        .await
        .unwrap_err();
    assert!(matches!(err, ProductError::ValidationError(_)));
    assert_eq!(client.get_product(ok.id).await.unwrap().price, 5);
}

#[tokio::test]
async fn test_unknown_ids_are_not_found() {
    let client = spawn_memory_catalog();
    let missing = ProductId(42);

    assert!(matches!(
        client.get_product(missing).await,
        Err(ProductError::NotFound(_))
    ));
    assert!(matches!(
        client.update_product(missing, ProductPayload::new("Y", 10)).await,
        Err(ProductError::NotFound(_))
    ));
    assert!(matches!(
        client.delete_product(missing).await,
        Err(ProductError::NotFound(_))
    ));
    // The generic default method reports absence as None rather than an error.
    assert_eq!(client.get(missing).await.unwrap(), None);
}

#[tokio::test]
async fn test_count_tracks_inserts_minus_deletes() {
    let client = spawn_memory_catalog();
    let mut ids = Vec::new();
    for i in 0..6 {
        let product = client
            .create_product(ProductPayload::new(format!("item-{i}"), i + 1))
            .await
            .unwrap();
        ids.push(product.id);
    }
    client.delete_product(ids[1]).await.unwrap();
    client.delete_product(ids[4]).await.unwrap();
    // A second delete of the same id fails and changes nothing.
    assert!(client.delete_product(ids[4]).await.is_err());

    let list = client.list_products().await.unwrap();
    assert_eq!(list.count, 4);
    assert_eq!(list.products.len(), 4);
}

#[tokio::test]
async fn test_concurrent_creates_get_distinct_ids() {
    let client = spawn_memory_catalog();

    let mut tasks = Vec::new();
    for i in 0..25 {
        let client = client.clone();
        tasks.push(tokio::spawn(async move {
            client
                .create_product(ProductPayload::new(format!("p{i}"), 10))
                .await
        }));
    }
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let list = client.list_products().await.unwrap();
    assert_eq!(list.count, 25);
    let ids: HashSet<ProductId> = list.products.iter().map(|p| p.id).collect();
    assert_eq!(ids.len(), 25);
}

#[tokio::test]
async fn test_client_chosen_id_and_duplicates() {
    let client = spawn_memory_catalog();

    let chosen = client
        .create_product(ProductPayload::new("Desk", 120).with_id(ProductId(1)))
        .await
        .unwrap();
    assert_eq!(chosen.id, ProductId(1));

    let err = client
        .create_product(ProductPayload::new("Other", 1).with_id(ProductId(1)))
        .await
        .unwrap_err();
    assert!(matches!(err, ProductError::ValidationError(_)));

    // Generated ids step over the one the client took.
    let a = client.create_product(ProductPayload::new("A", 1)).await.unwrap();
    let b = client.create_product(ProductPayload::new("B", 1)).await.unwrap();
    assert_eq!((a.id, b.id), (ProductId(0), ProductId(2)));
}

#[tokio::test]
async fn test_file_store_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("database.json");

    let (actor, client) = product_actor::new(8, JsonFileStore::open(&path).unwrap());
    let handle = tokio::spawn(actor.run());
    let lamp = client.create_product(ProductPayload::new("Lamp", 30)).await.unwrap();
    let desk = client.create_product(ProductPayload::new("Desk", 120)).await.unwrap();
    client.delete_product(lamp.id).await.unwrap();
    drop(client);
    handle.await.unwrap();

    let (actor, client) = product_actor::new(8, JsonFileStore::open(&path).unwrap());
    tokio::spawn(actor.run());
    let list = client.list_products().await.unwrap();
    assert_eq!(list.products, vec![desk.clone()]);

    // A fresh id sequence must not collide with the reloaded product.
    let first = client.create_product(ProductPayload::new("Chair", 80)).await.unwrap();
    let second = client.create_product(ProductPayload::new("Stool", 20)).await.unwrap();
    assert_eq!(first.id, ProductId(0));
    assert_eq!(second.id, ProductId(2));
    assert_ne!(second.id, desk.id);
}
