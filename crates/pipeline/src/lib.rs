//! Pipeline for filtering and scoring product candidates.
//!
//! This crate provides:
//! - AvailabilityFilter: inventory-aware candidate filtering with graceful
//!   size fallbacks
//! - PreferenceScorer: deterministic attribute scoring and ranking
//!
//! ## Architecture
//! The pipeline processes merged candidates in stages:
//! 1. AvailabilityFilter removes candidates without purchasable stock
//!    (degrading to broader signals when size data is missing)
//! 2. PreferenceScorer assigns additive attribute scores and ranks by
//!    score desc, rating desc
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{AvailabilityFilter, PreferenceScorer};
//!
//! let filter = AvailabilityFilter::new(inventory.clone());
//! let outcome = filter.filter(candidates, clothing.as_deref(), footwear.as_deref()).await;
//!
//! let ranked = PreferenceScorer::rank(outcome.candidates, &profile, &clothing_hints);
//! ```

pub mod availability;
pub mod scoring;

// Re-export main types
pub use availability::{Availability, AvailabilityFilter};
pub use scoring::{PreferenceScorer, ScoredCandidate};
