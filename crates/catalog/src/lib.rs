//! # Catalog Crate
//!
//! Domain types and store access for the storefront catalog.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Product, InventoryRecord, PreferenceProfile)
//! - **store**: The read-only query traits the recommendation core consumes
//! - **index**: In-memory implementation of the store traits
//! - **loader**: Load a catalog from JSON exports
//! - **error**: Error types for loading and querying
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{CatalogIndex, ProductStore};
//! use std::path::Path;
//!
//! let index = CatalogIndex::load_from_files(Path::new("data"))?;
//! let results = index.search_any_term(&["navy".to_string()], 10).await?;
//! ```

// Public modules
pub mod error;
pub mod index;
pub mod loader;
pub mod store;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use index::CatalogIndex;
pub use store::{InventoryStore, ProductStore};
pub use types::{
    // Type aliases
    ProductId,
    StoreId,
    // Core types
    AttributeFilter,
    InventoryRecord,
    PreferenceProfile,
    Product,
    // Predicate helper
    contains_ci,
};
