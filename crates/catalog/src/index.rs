//! In-memory catalog index.
//!
//! Owns the loaded products and inventory rows and implements the store
//! query traits over them. In production the same traits would be backed
//! by the relational store; this index is what the CLI, tests and demo
//! data run against.

use crate::error::Result;
use crate::store::{InventoryStore, ProductStore};
use crate::types::{AttributeFilter, InventoryRecord, Product, ProductId};
use async_trait::async_trait;
use std::collections::{BTreeMap, HashSet};

/// In-memory catalog: products keyed by id plus a flat list of inventory
/// rows. BTreeMap keeps iteration (and therefore tie-breaking beyond the
/// rating sort) deterministic.
#[derive(Debug, Default)]
pub struct CatalogIndex {
    products: BTreeMap<ProductId, Product>,
    inventory: Vec<InventoryRecord>,
}

impl CatalogIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a product into the index
    pub fn insert_product(&mut self, product: Product) {
        self.products.insert(product.id, product);
    }

    /// Insert an inventory row
    pub fn insert_inventory(&mut self, record: InventoryRecord) {
        self.inventory.push(record);
    }

    /// Look up a single product
    pub fn get_product(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    /// Get counts for debugging/validation
    pub fn counts(&self) -> (usize, usize) {
        (self.products.len(), self.inventory.len())
    }

    /// Active products in deterministic (id) order
    fn active_products(&self) -> impl Iterator<Item = &Product> {
        self.products.values().filter(|p| p.is_active)
    }

    /// Rating desc, then rating_count desc, the catalog-wide ordering
    /// every query in this subsystem uses.
    fn sort_by_rating(products: &mut [&Product]) {
        products.sort_by(|a, b| {
            b.rating
                .partial_cmp(&a.rating)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| b.rating_count.cmp(&a.rating_count))
        });
    }

    fn collect_sorted<'a, F>(&'a self, predicate: F, limit: usize) -> Vec<Product>
    where
        F: Fn(&Product) -> bool,
    {
        let mut matched: Vec<&Product> = self.active_products().filter(|p| predicate(p)).collect();
        Self::sort_by_rating(&mut matched);
        matched.into_iter().take(limit).cloned().collect()
    }
}

#[async_trait]
impl ProductStore for CatalogIndex {
    async fn search_any_term(&self, terms: &[String], limit: usize) -> Result<Vec<Product>> {
        Ok(self.collect_sorted(
            |product| terms.iter().any(|term| product.matches_term(term)),
            limit,
        ))
    }

    async fn find_by_attributes(
        &self,
        filter: &AttributeFilter,
        limit: usize,
    ) -> Result<Vec<Product>> {
        Ok(self.collect_sorted(|product| filter.matches(product), limit))
    }

    async fn top_rated(
        &self,
        restrict_to: Option<&HashSet<ProductId>>,
        exclude: &HashSet<ProductId>,
        limit: usize,
    ) -> Result<Vec<Product>> {
        Ok(self.collect_sorted(
            |product| {
                !exclude.contains(&product.id)
                    && restrict_to.is_none_or(|ids| ids.contains(&product.id))
            },
            limit,
        ))
    }
}

#[async_trait]
impl InventoryStore for CatalogIndex {
    async fn available_ids_in_sizes(&self, sizes: &[String]) -> Result<HashSet<ProductId>> {
        Ok(self
            .inventory
            .iter()
            .filter(|record| {
                record.available() > 0
                    && record
                        .size
                        .as_deref()
                        .is_some_and(|size| sizes.iter().any(|s| s == size))
            })
            .map(|record| record.product_id)
            .collect())
    }

    async fn stocked_ids(&self) -> Result<HashSet<ProductId>> {
        Ok(self
            .inventory
            .iter()
            .filter(|record| record.quantity > 0)
            .map(|record| record.product_id)
            .collect())
    }
}
