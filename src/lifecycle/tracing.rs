//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate. The filter
//! comes from `RUST_LOG` and defaults to `info`.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: `Actor started` and `Shutdown`, tagged with `entity_type`
//! - **Mutations**: `Created`, `Updated` and `Deleted` at info with the record `id` and the
//!   collection `size`
//! - **Failures**: rejected requests at warn with the reason
//! - **Request Flow**: client methods are instrumented, so client-side lines sit inside a
//!   span such as `create_product`. The actor runs in its own task, so its lines carry
//!   `entity_type` and `id` instead of the caller's span
//!
//! ## Usage Examples
//!
//! ```bash
//! # Mutations and lifecycle only (default)
//! RUST_LOG=info cargo run
//!
//! # Every request and full payloads; client spans show up here
//! RUST_LOG=debug cargo run
//!
//! # Filter to specific modules
//! RUST_LOG=product_catalog::store=debug cargo run
//! ```
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Opened document store path=database.json table="_default" records=2
//! INFO Actor started entity_type="Product" size=2
//! INFO Created entity_type="Product" id=2 size=3
//! WARN Create failed entity_type="Product" error=Entity error: Product validation error: price is required and must not be zero
//! ```

use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact()
        .init();
}
