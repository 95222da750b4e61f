//! Inventory availability filter.
//!
//! Inventory data in this domain is sparse and optional: the size column is
//! unpopulated for legacy rows and whole catalogs ship without stock data.
//! The filter therefore degrades instead of constricting; it must never
//! return zero candidates just because size metadata is missing.
//!
//! ## Algorithm
//! 1. Union the adjacent clothing and footwear size sets
//! 2. Non-empty → query size-aware availability (`available > 0` in any of
//!    the sizes); at least one id → filter candidates, `size_filtered = true`
//! 3. Zero rows, or no size constraint → fall back to any `quantity > 0`
//!    row regardless of size and reservation, `size_filtered = false`
//! 4. Query errors are swallowed into an empty id set ("no availability
//!    signal"); an empty set leaves the candidates unfiltered and lets the
//!    orchestrator's top-up take over

use catalog::{InventoryStore, ProductId};
use sources::Candidate;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Result of one availability pass.
#[derive(Debug)]
pub struct Availability {
    /// Candidates surviving the filter (all of them when no signal exists)
    pub candidates: Vec<Candidate>,
    /// Product ids the store reported as purchasable; empty = no signal.
    /// The orchestrator reuses this set to constrain top-up queries.
    pub available_ids: HashSet<ProductId>,
    /// Whether the size-aware query produced the signal
    pub size_filtered: bool,
}

/// Applies the inventory availability signal to a candidate set.
#[derive(Clone)]
pub struct AvailabilityFilter {
    inventory: Arc<dyn InventoryStore>,
}

impl AvailabilityFilter {
    pub fn new(inventory: Arc<dyn InventoryStore>) -> Self {
        Self { inventory }
    }

    #[instrument(skip_all, fields(candidates = candidates.len()))]
    pub async fn filter(
        &self,
        candidates: Vec<Candidate>,
        clothing_sizes: Option<&[String]>,
        footwear_sizes: Option<&[String]>,
    ) -> Availability {
        let sizes: Vec<String> = clothing_sizes
            .unwrap_or(&[])
            .iter()
            .chain(footwear_sizes.unwrap_or(&[]))
            .cloned()
            .collect();

        let (available_ids, size_filtered) = self.available_ids(&sizes).await;

        let filtered = if available_ids.is_empty() {
            debug!("no availability signal, passing {} candidates through", candidates.len());
            candidates
        } else {
            let filtered: Vec<Candidate> = candidates
                .into_iter()
                .filter(|candidate| available_ids.contains(&candidate.id()))
                .collect();
            debug!(
                "{} candidates remain after availability filter (size_filtered={})",
                filtered.len(),
                size_filtered
            );
            filtered
        };

        Availability {
            candidates: filtered,
            available_ids,
            size_filtered,
        }
    }

    /// Resolve the availability id set, trying size-aware stock first.
    async fn available_ids(&self, sizes: &[String]) -> (HashSet<ProductId>, bool) {
        if !sizes.is_empty() {
            match self.inventory.available_ids_in_sizes(sizes).await {
                Ok(ids) if !ids.is_empty() => return (ids, true),
                Ok(_) => debug!("no stock in sizes {:?}, widening to any stock", sizes),
                Err(err) => {
                    warn!("size-aware inventory query failed: {err}");
                    return (HashSet::new(), false);
                }
            }
        }

        match self.inventory.stocked_ids().await {
            Ok(ids) => (ids, false),
            Err(err) => {
                warn!("inventory fallback query failed: {err}");
                (HashSet::new(), false)
            }
        }
    }
}
