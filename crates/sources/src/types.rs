//! Candidate types and the candidate-source trait.

use crate::profile::PreferenceContext;
use async_trait::async_trait;
use catalog::{PreferenceProfile, Product, ProductId};

/// Which stage of the fallback ladder produced a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// Keyword retrieval over the preference query
    Keyword,
    /// Direct attribute query against the profile
    Direct,
    /// Top-up backfill after filtering left too few candidates
    TopUp,
    /// Global top-rated list (no-preferences short circuit)
    TopRated,
}

/// A product surviving in the pipeline, tagged with its provenance.
/// Transient, never persisted.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub product: Product,
    pub source: SourceKind,
}

impl Candidate {
    pub fn new(product: Product, source: SourceKind) -> Self {
        Self { product, source }
    }

    pub fn id(&self) -> ProductId {
        self.product.id
    }
}

/// A candidate-generation strategy with a uniform signature, so the
/// fallback ladder is testable per source.
///
/// ## Design Note
/// Implementations fail soft: any underlying store error is logged and
/// degrades to an empty candidate list. Retrieval failure must never crash
/// the orchestrator; it just means "no candidates from this source".
#[async_trait]
pub trait CandidateSource: Send + Sync {
    /// Name of this source (for logging/debugging)
    fn name(&self) -> &str;

    /// Generate candidates for a profile.
    async fn candidates(
        &self,
        profile: &PreferenceProfile,
        context: &PreferenceContext,
        limit: usize,
    ) -> Vec<Candidate>;
}
