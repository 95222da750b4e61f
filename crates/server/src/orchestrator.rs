//! # Recommendation Orchestrator
//!
//! Coordinates the recommendation pipeline:
//! 1. Expand the preference profile (sizes + retrieval query)
//! 2. Generate candidates (keyword retrieval + direct query, concurrently)
//! 3. Merge and deduplicate
//! 4. Filter by inventory availability
//! 5. Top up when filtering over-constrains
//! 6. Score, rank, truncate
//! 7. Emit the result with diagnostic metadata
//!
//! Every stage fails soft (reduced or empty data, never an error), so a
//! caller always receives a well-formed [`RecommendationResult`], even
//! under total store unavailability the products array is merely empty.
//! No retries anywhere: each failure mode resolves to "fewer results".

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use tracing::{info, instrument, warn};

use catalog::{InventoryStore, PreferenceProfile, ProductId, ProductStore};
use pipeline::{AvailabilityFilter, PreferenceScorer};
use sources::{
    Candidate, CandidateSource, DirectSource, KeywordSource, SourceKind,
    build_preference_context,
};

use crate::result::{RecommendationMeta, RecommendationResult, RecommendedProduct};

/// Default result size; the HTTP layer caps requested limits at 40.
pub const DEFAULT_LIMIT: usize = 12;

/// Below this many post-filter candidates the top-up backfill kicks in.
const MIN_CANDIDATES: usize = 4;

/// How deep each candidate source retrieves before merging.
const RETRIEVAL_DEPTH: usize = 60;

/// Cap on the availability id set passed to the top-up query.
const AVAILABLE_ID_CAP: usize = 500;

/// Main orchestrator coordinating the recommendation pipeline.
#[derive(Clone)]
pub struct RecommendationOrchestrator {
    products: Arc<dyn ProductStore>,
    keyword: KeywordSource,
    direct: DirectSource,
    availability: AvailabilityFilter,
}

impl RecommendationOrchestrator {
    pub fn new(products: Arc<dyn ProductStore>, inventory: Arc<dyn InventoryStore>) -> Self {
        Self {
            keyword: KeywordSource::new(products.clone()),
            direct: DirectSource::new(products.clone()),
            availability: AvailabilityFilter::new(inventory),
            products,
        }
    }

    /// Main entry point: personalized recommendations for one profile.
    #[instrument(skip(self, profile))]
    pub async fn recommend(
        &self,
        profile: &PreferenceProfile,
        limit: usize,
    ) -> RecommendationResult {
        let start = Instant::now();

        if !profile.has_preferences() {
            info!("profile has no preferences, serving plain top-rated list");
            return self.plain_top_rated(limit, start).await;
        }

        let context = build_preference_context(profile);
        info!(query = %context.query, "expanded preference profile");

        // Both sources are independent read-only queries; issue them
        // without waiting for one another and join on both.
        let (keyword_candidates, direct_candidates) = tokio::join!(
            self.keyword.candidates(profile, &context, RETRIEVAL_DEPTH),
            self.direct.candidates(profile, &context, RETRIEVAL_DEPTH),
        );
        info!(
            "generated {} keyword and {} direct candidates",
            keyword_candidates.len(),
            direct_candidates.len()
        );

        let merged = merge_candidates(keyword_candidates, direct_candidates);
        info!("{} candidates after deduplication", merged.len());
        let seen: HashSet<ProductId> = merged.iter().map(Candidate::id).collect();

        let outcome = self
            .availability
            .filter(
                merged,
                context.clothing_sizes.as_deref(),
                context.footwear_sizes.as_deref(),
            )
            .await;
        let mut candidates = outcome.candidates;
        info!(
            "{} candidates after availability filter (size_filtered={})",
            candidates.len(),
            outcome.size_filtered
        );

        if candidates.len() < MIN_CANDIDATES {
            self.top_up(&mut candidates, &outcome.available_ids, &seen, limit)
                .await;
        }

        let mut ranked =
            PreferenceScorer::rank(candidates, profile, context.clothing_size_hints());
        ranked.truncate(limit);

        let products: Vec<RecommendedProduct> =
            ranked.into_iter().map(RecommendedProduct::from).collect();

        let meta = RecommendationMeta {
            total: products.len(),
            personalized: true,
            size_filtered: outcome.size_filtered,
            clothing_sizes: context.clothing_sizes.clone(),
            footwear_sizes: context.footwear_sizes.clone(),
            rag_query: context.query,
            generated_at: Utc::now().to_rfc3339(),
            elapsed_ms: start.elapsed().as_millis() as u64,
        };
        info!("served {} recommendations in {} ms", meta.total, meta.elapsed_ms);

        RecommendationResult { products, meta }
    }

    /// Terminal short circuit for empty profiles: the plain top-rated list
    /// in store order (rating desc, rating_count desc), `personalized=false`.
    async fn plain_top_rated(&self, limit: usize, start: Instant) -> RecommendationResult {
        let fetched = match self.products.top_rated(None, &HashSet::new(), limit).await {
            Ok(products) => products,
            Err(err) => {
                warn!("top-rated query failed: {err}");
                Vec::new()
            }
        };

        let empty_profile = PreferenceProfile::default();
        let products: Vec<RecommendedProduct> = fetched
            .into_iter()
            .map(|product| {
                let (score, reasons) = PreferenceScorer::score(&product, &empty_profile, &[]);
                RecommendedProduct::from(pipeline::ScoredCandidate {
                    candidate: Candidate::new(product, SourceKind::TopRated),
                    score,
                    reasons,
                })
            })
            .collect();

        let meta = RecommendationMeta {
            total: products.len(),
            personalized: false,
            size_filtered: false,
            clothing_sizes: None,
            footwear_sizes: None,
            rag_query: String::new(),
            generated_at: Utc::now().to_rfc3339(),
            elapsed_ms: start.elapsed().as_millis() as u64,
        };

        RecommendationResult { products, meta }
    }

    /// Backfill a thin candidate set with well-rated, in-stock products.
    /// Its own failure is logged and swallowed; partial results beat
    /// total failure.
    async fn top_up(
        &self,
        candidates: &mut Vec<Candidate>,
        available_ids: &HashSet<ProductId>,
        seen: &HashSet<ProductId>,
        limit: usize,
    ) {
        let restrict = cap_ids(available_ids);
        match self
            .products
            .top_rated(restrict.as_ref(), seen, limit)
            .await
        {
            Ok(extra) => {
                info!("topped up thin result with {} products", extra.len());
                candidates.extend(
                    extra
                        .into_iter()
                        .map(|product| Candidate::new(product, SourceKind::TopUp)),
                );
            }
            Err(err) => warn!("top-up query failed: {err}"),
        }
    }
}

/// Concatenate retrieval results before direct results and deduplicate by
/// product id, preserving first-seen order. No scoring happens here.
pub fn merge_candidates(keyword: Vec<Candidate>, direct: Vec<Candidate>) -> Vec<Candidate> {
    let mut seen: HashSet<ProductId> = HashSet::new();
    let mut merged = Vec::with_capacity(keyword.len() + direct.len());
    for candidate in keyword.into_iter().chain(direct) {
        if seen.insert(candidate.id()) {
            merged.push(candidate);
        }
    }
    merged
}

/// Restrict-set for the top-up query: `None` when there is no availability
/// signal; otherwise at most [`AVAILABLE_ID_CAP`] ids, lowest first for
/// determinism.
fn cap_ids(ids: &HashSet<ProductId>) -> Option<HashSet<ProductId>> {
    if ids.is_empty() {
        return None;
    }
    if ids.len() <= AVAILABLE_ID_CAP {
        return Some(ids.clone());
    }
    let mut sorted: Vec<ProductId> = ids.iter().copied().collect();
    sorted.sort_unstable();
    sorted.truncate(AVAILABLE_ID_CAP);
    Some(sorted.into_iter().collect())
}
