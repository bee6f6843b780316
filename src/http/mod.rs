//! # HTTP Interface
//!
//! JSON over HTTP in front of the product service. Handlers only translate: they decode
//! the request, call [`ProductClient`], and render the result or the error.
//!
//! | Method | Path | Success |
//! |---|---|---|
//! | GET | `/products` | 200 `{"products": [...], "count": N}` |
//! | GET | `/products/:id` | 200 product |
//! | POST | `/products` | 201 created product |
//! | PUT | `/products/:id` | 200 updated product |
//! | DELETE | `/products/:id` | 204 |
//! | GET | `/openapi.json` | 200 OpenAPI 3 document |
//!
//! Failures are rendered by [`response`] as `{"error": "..."}`.

pub mod handlers;
pub mod openapi;
pub mod response;

use axum::routing::get;
use axum::Router;

use crate::clients::ProductClient;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub products: ProductClient,
}

impl AppState {
    pub fn new(products: ProductClient) -> Self {
        Self { products }
    }
}

/// Builds the catalog router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/products",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route(
            "/products/:id",
            get(handlers::get_product)
                .put(handlers::update_product)
                .delete(handlers::delete_product),
        )
        .route(openapi::OPENAPI_PATH, get(openapi::openapi_handler))
        .with_state(state)
}
