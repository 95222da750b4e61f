//! Server crate for the StyleRecs recommendation engine.
//!
//! This crate contains the orchestrator that coordinates candidate
//! generation, availability filtering, and preference ranking, plus the
//! serializable response types returned to callers.

pub mod orchestrator;
pub mod result;

pub use orchestrator::{DEFAULT_LIMIT, RecommendationOrchestrator, merge_candidates};
pub use result::{RecommendationMeta, RecommendationResult, RecommendedProduct};
