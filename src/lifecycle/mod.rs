//! Runtime orchestration and lifecycle management.
//!
//! This module contains the infrastructure for running the catalog service:
//!
//! - **Actor lifecycle management**: Opening the record store, starting and shutting down
//!   the product actor
//! - **Observability setup**: Initializing tracing and logging
//!
//! # Main Components
//!
//! - [`CatalogSystem`] - Owns the running product actor and hands out its client
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod catalog_system;
pub mod tracing;

pub use self::catalog_system::*;
pub use self::tracing::*;
