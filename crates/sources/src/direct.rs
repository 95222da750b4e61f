//! Direct attribute-query source.
//!
//! Complements keyword retrieval with a structured query straight off the
//! profile: gender OR any expanded favourite-colour term (colour field) OR
//! any expanded style term (usage / product_type). A profile with only a
//! gender set still pulls well-rated products of that gender.

use crate::expansion::{colour_terms, style_terms};
use crate::profile::PreferenceContext;
use crate::types::{Candidate, CandidateSource, SourceKind};
use async_trait::async_trait;
use catalog::{AttributeFilter, PreferenceProfile, ProductStore};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Direct disjunctive attribute query against the product store.
#[derive(Clone)]
pub struct DirectSource {
    store: Arc<dyn ProductStore>,
}

impl DirectSource {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    /// Translate a profile into the store-side disjunctive filter.
    pub fn build_filter(profile: &PreferenceProfile) -> AttributeFilter {
        let mut filter = AttributeFilter::default();

        if !profile.gender.is_empty() {
            filter.gender_contains = Some(profile.gender.to_lowercase());
        }

        let mut seen: HashSet<String> = HashSet::new();
        for colour in &profile.favourite_colors {
            for term in colour_terms(colour) {
                if seen.insert(term.clone()) {
                    filter.colour_terms.push(term);
                }
            }
        }

        seen.clear();
        for style in &profile.style_preferences {
            for term in style_terms(style) {
                if seen.insert(term.clone()) {
                    filter.usage_terms.push(term);
                }
            }
        }

        filter
    }
}

#[async_trait]
impl CandidateSource for DirectSource {
    fn name(&self) -> &str {
        "direct"
    }

    #[instrument(skip(self, profile, _context))]
    async fn candidates(
        &self,
        profile: &PreferenceProfile,
        _context: &PreferenceContext,
        limit: usize,
    ) -> Vec<Candidate> {
        let filter = Self::build_filter(profile);
        debug!(
            "direct query: gender={:?}, {} colour terms, {} usage terms",
            filter.gender_contains,
            filter.colour_terms.len(),
            filter.usage_terms.len()
        );

        match self.store.find_by_attributes(&filter, limit).await {
            Ok(products) => products
                .into_iter()
                .map(|product| Candidate::new(product, SourceKind::Direct))
                .collect(),
            Err(err) => {
                warn!("direct query failed: {err}");
                Vec::new()
            }
        }
    }
}
