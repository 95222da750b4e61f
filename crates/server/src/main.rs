//! Test harness for the recommendation orchestrator.
//!
//! Loads the product catalog from disk, builds a sample preference
//! profile, and prints the resulting recommendation payload as JSON.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use catalog::{CatalogIndex, PreferenceProfile};
use server::{DEFAULT_LIMIT, RecommendationOrchestrator};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("info,server=debug,sources=debug,pipeline=debug")
        .init();

    info!("Starting StyleRecs server test harness");

    let path = Path::new("data");
    let index = Arc::new(CatalogIndex::load_from_files(path)?);
    let (products, inventory) = index.counts();
    info!(products, inventory, "Catalog loaded");

    let orchestrator = RecommendationOrchestrator::new(index.clone(), index);

    let profile = PreferenceProfile {
        gender: "Women".to_string(),
        clothing_size: "M".to_string(),
        footwear_size: String::new(),
        favourite_colors: vec!["Navy".to_string()],
        style_preferences: vec!["Casual".to_string()],
    };

    let result = orchestrator.recommend(&profile, DEFAULT_LIMIT).await;
    info!(
        total = result.meta.total,
        personalized = result.meta.personalized,
        elapsed_ms = result.meta.elapsed_ms,
        "Recommendations ready"
    );

    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
