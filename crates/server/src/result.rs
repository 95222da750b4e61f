//! Serialized recommendation output.
//!
//! Constructed fresh on every request; nothing here is cached or
//! persisted. The `_match_score` / `_match_reasons` field names are part
//! of the storefront API contract.

use catalog::ProductId;
use pipeline::ScoredCandidate;
use serde::Serialize;

/// A recommended product: plain catalog fields plus match metadata.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendedProduct {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub original_price: Option<f64>,
    pub category: Option<String>,
    pub sub_category: Option<String>,
    pub product_type: Option<String>,
    pub gender: Option<String>,
    pub colour: Option<String>,
    pub usage: Option<String>,
    pub brand: Option<String>,
    pub rating: f32,
    pub rating_count: u32,
    pub image_url: Option<String>,
    pub is_active: bool,
    #[serde(rename = "_match_score")]
    pub match_score: i32,
    #[serde(rename = "_match_reasons")]
    pub match_reasons: Vec<String>,
}

impl From<ScoredCandidate> for RecommendedProduct {
    fn from(scored: ScoredCandidate) -> Self {
        let product = scored.candidate.product;
        Self {
            id: product.id,
            title: product.title,
            price: product.price,
            original_price: product.original_price,
            category: product.category,
            sub_category: product.sub_category,
            product_type: product.product_type,
            gender: product.gender,
            colour: product.colour,
            usage: product.usage,
            brand: product.brand,
            rating: product.rating,
            rating_count: product.rating_count,
            image_url: product.image_url,
            is_active: product.is_active,
            match_score: scored.score,
            match_reasons: scored.reasons,
        }
    }
}

/// Diagnostic metadata describing how a result was produced.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationMeta {
    pub total: usize,
    /// Whether preference matching was applied (false for the
    /// no-preferences short circuit)
    pub personalized: bool,
    /// Whether the size-aware inventory signal constrained the result
    pub size_filtered: bool,
    pub clothing_sizes: Option<Vec<String>>,
    pub footwear_sizes: Option<Vec<String>>,
    /// The retrieval query string that was used
    pub rag_query: String,
    /// ISO-8601 timestamp of generation
    pub generated_at: String,
    pub elapsed_ms: u64,
}

/// The complete, always-well-formed response of one recommendation call.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationResult {
    pub products: Vec<RecommendedProduct>,
    pub meta: RecommendationMeta,
}
