//! Pure data structures (DTOs) for the product resource.

pub mod product;

pub use product::*;
