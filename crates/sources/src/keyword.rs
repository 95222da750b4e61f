//! Keyword retrieval source (RAG-style search).
//!
//! Plain keyword/substring search over the catalog's text fields, no
//! embeddings or semantic model.
//!
//! ## Algorithm
//! 1. Tokenize the query (lowercase, strip punctuation, keep internal
//!    hyphens, drop stop-words)
//! 2. Empty token set → global top-rated active products (explicit
//!    fallback, not an error)
//! 3. Expand every token through the synonym tables, dedupe
//! 4. A product qualifies if *any* expanded term matches *any* searchable
//!    field, a deliberate recall-over-precision choice: matching one
//!    expanded term from one original word is enough
//! 5. Active only, rating desc / rating_count desc, truncate

use crate::expansion::{expand_terms, tokenize};
use crate::profile::PreferenceContext;
use crate::types::{Candidate, CandidateSource, SourceKind};
use async_trait::async_trait;
use catalog::{PreferenceProfile, Product, ProductStore};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Keyword retrieval over the product store.
#[derive(Clone)]
pub struct KeywordSource {
    store: Arc<dyn ProductStore>,
}

impl KeywordSource {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    /// Search the catalog for `query`.
    ///
    /// Never fails: store errors are logged and degrade to an empty list.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str, limit: usize) -> Vec<Product> {
        let tokens = tokenize(query);

        if tokens.is_empty() {
            debug!("query reduced to zero tokens, serving top-rated fallback");
            return match self.store.top_rated(None, &HashSet::new(), limit).await {
                Ok(products) => products,
                Err(err) => {
                    warn!("top-rated fallback failed: {err}");
                    Vec::new()
                }
            };
        }

        let terms = expand_terms(&tokens);
        debug!(
            "retrieving with {} expanded terms from {} tokens",
            terms.len(),
            tokens.len()
        );

        match self.store.search_any_term(&terms, limit).await {
            Ok(products) => {
                debug!("retrieved {} products", products.len());
                products
            }
            Err(err) => {
                warn!("keyword retrieval failed: {err}");
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl CandidateSource for KeywordSource {
    fn name(&self) -> &str {
        "keyword"
    }

    async fn candidates(
        &self,
        _profile: &PreferenceProfile,
        context: &PreferenceContext,
        limit: usize,
    ) -> Vec<Candidate> {
        self.search(&context.query, limit)
            .await
            .into_iter()
            .map(|product| Candidate::new(product, SourceKind::Keyword))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{AttributeFilter, CatalogError, CatalogIndex, ProductId};

    fn product(id: ProductId, title: &str, colour: &str, rating: f32) -> Product {
        Product {
            id,
            title: title.to_string(),
            description: None,
            category: Some("Apparel".to_string()),
            sub_category: None,
            product_type: None,
            gender: Some("Women".to_string()),
            colour: Some(colour.to_string()),
            usage: Some("Casual".to_string()),
            brand: None,
            price: 799.0,
            original_price: None,
            rating,
            rating_count: 40,
            image_url: None,
            is_active: true,
        }
    }

    fn index() -> Arc<CatalogIndex> {
        let mut index = CatalogIndex::new();
        index.insert_product(product(1, "Everyday Tee", "Blue", 4.6));
        index.insert_product(product(2, "Evening Gown", "Black", 4.9));
        index.insert_product(product(3, "Running Shorts", "Red", 4.1));
        Arc::new(index)
    }

    #[tokio::test]
    async fn test_empty_query_returns_top_rated() {
        let source = KeywordSource::new(index());
        let results = source.search("", 10).await;
        let ids: Vec<ProductId> = results.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[tokio::test]
    async fn test_synonym_expansion_reaches_colour_field() {
        let source = KeywordSource::new(index());
        // "navy" itself appears nowhere, but expands to "blue"
        let results = source.search("navy tshirt", 10).await;
        assert!(results.iter().any(|p| p.id == 1));
    }

    #[tokio::test]
    async fn test_stop_word_only_query_falls_back() {
        let source = KeywordSource::new(index());
        let results = source.search("show me some", 2).await;
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, 2);
    }

    struct FailingStore;

    #[async_trait]
    impl ProductStore for FailingStore {
        async fn search_any_term(
            &self,
            _terms: &[String],
            _limit: usize,
        ) -> catalog::Result<Vec<Product>> {
            Err(CatalogError::QueryFailed("connection reset".to_string()))
        }

        async fn find_by_attributes(
            &self,
            _filter: &AttributeFilter,
            _limit: usize,
        ) -> catalog::Result<Vec<Product>> {
            Err(CatalogError::QueryFailed("connection reset".to_string()))
        }

        async fn top_rated(
            &self,
            _restrict_to: Option<&HashSet<ProductId>>,
            _exclude: &HashSet<ProductId>,
            _limit: usize,
        ) -> catalog::Result<Vec<Product>> {
            Err(CatalogError::QueryFailed("connection reset".to_string()))
        }
    }

    #[tokio::test]
    async fn test_store_error_degrades_to_empty() {
        let source = KeywordSource::new(Arc::new(FailingStore));
        assert!(source.search("navy casual", 10).await.is_empty());
        assert!(source.search("", 10).await.is_empty());
    }
}
