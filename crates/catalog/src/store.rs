//! Store interfaces consumed by the recommendation core.
//!
//! The real storefront keeps products and inventory in a relational
//! database; this core only depends on these two read-only query traits.
//! Every method is a single independent I/O call; there is no ordering
//! dependency between calls, which is what lets the orchestrator issue
//! them concurrently.

use crate::error::Result;
use crate::types::{AttributeFilter, Product, ProductId};
use async_trait::async_trait;
use std::collections::HashSet;

/// Read access to the product catalog.
///
/// All methods return only `is_active = true` products, ordered by rating
/// descending then rating_count descending, truncated to `limit`.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Products where *any* of `terms` appears as a case-insensitive
    /// substring of *any* searchable text field. Terms must be lowercase.
    async fn search_any_term(&self, terms: &[String], limit: usize) -> Result<Vec<Product>>;

    /// Products matching a disjunctive attribute filter.
    async fn find_by_attributes(
        &self,
        filter: &AttributeFilter,
        limit: usize,
    ) -> Result<Vec<Product>>;

    /// Globally top-rated products, optionally restricted to an id set and
    /// excluding already-seen ids.
    async fn top_rated(
        &self,
        restrict_to: Option<&HashSet<ProductId>>,
        exclude: &HashSet<ProductId>,
        limit: usize,
    ) -> Result<Vec<Product>>;
}

/// Read access to per-store, per-size inventory.
#[async_trait]
pub trait InventoryStore: Send + Sync {
    /// Distinct product ids with positive available stock
    /// (`quantity - reserved_quantity > 0`) in any of the given sizes.
    async fn available_ids_in_sizes(&self, sizes: &[String]) -> Result<HashSet<ProductId>>;

    /// Distinct product ids with any positive `quantity`, ignoring size and
    /// reservations. Used as the broad fallback signal when size metadata
    /// is absent or unpopulated.
    async fn stocked_ids(&self) -> Result<HashSet<ProductId>>;
}
