//! # Sources Crate
//!
//! Candidate generation for the storefront recommendation engine.
//!
//! ## Components
//!
//! ### Keyword Source (retrieval)
//! RAG-style keyword search over catalog text fields:
//! - Tokenizes the preference query, expands synonyms, matches any term
//!   against any searchable field
//! - Empty queries fall back to the global top-rated list
//!
//! ### Direct Source (attribute query)
//! Structured disjunctive query straight off the profile:
//! - gender OR favourite-colour aliases OR style terms
//!
//! Both sources are independent read-only store calls with no ordering
//! dependency, so the orchestrator runs them concurrently; both fail soft
//! to empty lists.
//!
//! ## Example Usage
//!
//! ```ignore
//! use sources::{KeywordSource, DirectSource, CandidateSource, build_preference_context};
//! use std::sync::Arc;
//!
//! let keyword = KeywordSource::new(store.clone());
//! let direct = DirectSource::new(store.clone());
//!
//! let context = build_preference_context(&profile);
//! let (a, b) = tokio::join!(
//!     keyword.candidates(&profile, &context, 60),
//!     direct.candidates(&profile, &context, 60),
//! );
//! ```

// Public modules
pub mod direct;
pub mod expansion;
pub mod keyword;
pub mod profile;
pub mod sizes;
pub mod types;

// Re-export commonly used types
pub use direct::DirectSource;
pub use keyword::KeywordSource;
pub use profile::{PreferenceContext, build_preference_context, build_preference_query};
pub use sizes::{CLOTHING_ORDER, FOOTWEAR_ORDER, adjacent_sizes};
pub use types::{Candidate, CandidateSource, SourceKind};

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{CatalogIndex, PreferenceProfile};
    use std::sync::Arc;

    #[test]
    fn test_candidate_creation() {
        let product = catalog::Product {
            id: 1,
            title: "Linen Shirt".to_string(),
            description: None,
            category: None,
            sub_category: None,
            product_type: None,
            gender: None,
            colour: None,
            usage: None,
            brand: None,
            price: 1599.0,
            original_price: None,
            rating: 4.0,
            rating_count: 12,
            image_url: None,
            is_active: true,
        };
        let candidate = Candidate::new(product, SourceKind::Keyword);
        assert_eq!(candidate.id(), 1);
        assert_eq!(candidate.source, SourceKind::Keyword);
    }

    #[test]
    fn test_source_creation() {
        let index = Arc::new(CatalogIndex::new());
        let keyword = KeywordSource::new(index.clone());
        let direct = DirectSource::new(index);
        assert_eq!(CandidateSource::name(&keyword), "keyword");
        assert_eq!(CandidateSource::name(&direct), "direct");
    }

    #[test]
    fn test_context_for_empty_profile() {
        let context = build_preference_context(&PreferenceProfile::default());
        assert_eq!(context.query, "fashion clothing");
        assert!(context.clothing_sizes.is_none());
        assert!(context.footwear_sizes.is_none());
    }
}
