//! Products catalog module.
//!
//! This crate owns the product record type and the in-memory store that holds
//! every record for the lifetime of the process. It has no IO and no HTTP;
//! the API crate translates requests into single store operations.

pub mod product;
pub mod seed;
pub mod store;

pub use product::{Product, ProductId, ProductIdError};
pub use seed::seed_products;
pub use store::ProductStore;
