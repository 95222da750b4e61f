use anyhow::{Context, Result};
use catalog::{CatalogIndex, PreferenceProfile, ProductStore};
use clap::{Parser, Subcommand};
use colored::Colorize;
use server::{DEFAULT_LIMIT, RecommendationOrchestrator, RecommendationResult};
use sources::KeywordSource;
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// StyleRecs - Personalized fashion product recommendations
#[derive(Parser)]
#[command(name = "style-recs")]
#[command(about = "Product recommendation engine for a fashion catalog", long_about = None)]
struct Cli {
    /// Path to the catalog data directory (products.json, inventory.json)
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get personalized recommendations for a preference profile
    Recommend {
        /// Gender preference (e.g. Women, Men, Unisex)
        #[arg(long, default_value = "")]
        gender: String,

        /// Clothing size (XS..XXXL)
        #[arg(long, default_value = "")]
        clothing_size: String,

        /// Footwear size (5..13)
        #[arg(long, default_value = "")]
        footwear_size: String,

        /// Favourite colour (repeatable)
        #[arg(long = "color")]
        colors: Vec<String>,

        /// Style preference (repeatable)
        #[arg(long = "style")]
        styles: Vec<String>,

        /// Number of recommendations to return
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,

        /// Show match reasons for each recommendation
        #[arg(long)]
        explain: bool,

        /// Emit the raw JSON payload instead of formatted output
        #[arg(long)]
        json: bool,
    },

    /// Keyword search over the catalog
    Search {
        /// Free-text query (synonym-expanded, case-insensitive)
        #[arg(long)]
        query: String,

        /// Number of results to return
        #[arg(long, default_value = "20")]
        limit: usize,
    },

    /// Show the top-rated active products
    Top {
        /// Number of products to show
        #[arg(long, default_value = "20")]
        limit: usize,
    },

    /// Run benchmark to test performance
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "100")]
        requests: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let index = Arc::new(
        CatalogIndex::load_from_files(&cli.data_dir)
            .with_context(|| format!("Failed to load catalog from {}", cli.data_dir.display()))?,
    );
    let (products, inventory) = index.counts();
    eprintln!(
        "{} Loaded {} products / {} inventory rows in {:?}",
        "✓".green(),
        products,
        inventory,
        start.elapsed()
    );

    match cli.command {
        Commands::Recommend {
            gender,
            clothing_size,
            footwear_size,
            colors,
            styles,
            limit,
            explain,
            json,
        } => {
            let profile = PreferenceProfile {
                gender,
                clothing_size,
                footwear_size,
                favourite_colors: colors,
                style_preferences: styles,
            };
            handle_recommend(index, profile, limit, explain, json).await?;
        }
        Commands::Search { query, limit } => handle_search(index, query, limit).await,
        Commands::Top { limit } => handle_top(index, limit).await?,
        Commands::Benchmark { requests } => handle_benchmark(index, requests).await?,
    }

    Ok(())
}

/// Handle the 'recommend' command
async fn handle_recommend(
    index: Arc<CatalogIndex>,
    profile: PreferenceProfile,
    limit: usize,
    explain: bool,
    json: bool,
) -> Result<()> {
    let orchestrator = RecommendationOrchestrator::new(index.clone(), index);
    let result = orchestrator.recommend(&profile, limit).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    print_recommendations(&result, explain);
    Ok(())
}

/// Handle the 'search' command
async fn handle_search(index: Arc<CatalogIndex>, query: String, limit: usize) {
    let source = KeywordSource::new(index);
    let results = source.search(&query, limit).await;

    println!("{}", format!("Search results for '{}':", query).bold().blue());
    if results.is_empty() {
        println!("  (no matches)");
        return;
    }
    for product in &results {
        println!(
            "{}: {} [{}] {:.1}★ ({} ratings) ₹{:.0}",
            product.id,
            product.title,
            product.colour.as_deref().unwrap_or("-"),
            product.rating,
            product.rating_count,
            product.price,
        );
    }
}

/// Handle the 'top' command
async fn handle_top(index: Arc<CatalogIndex>, limit: usize) -> Result<()> {
    let products = index.top_rated(None, &HashSet::new(), limit).await?;

    println!("{}", "Top-rated products:".bold().blue());
    for (i, product) in products.iter().enumerate() {
        println!(
            "{}. {} - {:.1}★ ({} ratings)",
            (i + 1).to_string().green(),
            product.title,
            product.rating,
            product.rating_count,
        );
    }
    Ok(())
}

/// Handle the 'benchmark' command
async fn handle_benchmark(index: Arc<CatalogIndex>, requests: usize) -> Result<()> {
    let orchestrator = RecommendationOrchestrator::new(index.clone(), index);

    let genders = ["Women", "Men", "Unisex", ""];
    let colors = ["Navy", "Black", "White", "Red", "Teal"];
    let styles = ["Casual", "Formal", "Sporty", "Ethnic"];
    let sizes = ["XS", "S", "M", "L", "XL"];

    // Random but plausible profiles so every request exercises the
    // full retrieval and ranking path
    let profiles: Vec<PreferenceProfile> = (0..requests)
        .map(|_| PreferenceProfile {
            gender: genders[rand::random_range(0..genders.len())].to_string(),
            clothing_size: sizes[rand::random_range(0..sizes.len())].to_string(),
            footwear_size: String::new(),
            favourite_colors: vec![colors[rand::random_range(0..colors.len())].to_string()],
            style_preferences: vec![styles[rand::random_range(0..styles.len())].to_string()],
        })
        .collect();

    let mut handles = vec![];
    for profile in profiles {
        let orchestrator = orchestrator.clone();
        let handle = tokio::spawn(async move {
            let start = Instant::now();
            orchestrator.recommend(&profile, DEFAULT_LIMIT).await;
            start.elapsed()
        });
        handles.push(handle);
    }

    let mut timings = vec![];
    for handle in handles {
        timings.push(handle.await?);
    }

    let total_time: std::time::Duration = timings.iter().sum();
    let avg_latency = total_time / (timings.len() as u32);
    timings.sort();
    let p50 = timings[timings.len() / 2];
    let p95 = timings[(timings.len() as f32 * 0.95) as usize];
    let p99 = timings[(timings.len() as f32 * 0.99) as usize];
    let throughput = requests as f32 / total_time.as_secs_f32();

    println!("Benchmark results:");
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", p50);
    println!("P95 latency: {:?}", p95);
    println!("P99 latency: {:?}", p99);
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

/// Helper function to format and print a recommendation result
fn print_recommendations(result: &RecommendationResult, explain: bool) {
    let header = if result.meta.personalized {
        format!("Recommendations (query: '{}'):", result.meta.rag_query)
    } else {
        "Recommendations (no preferences set, showing top-rated):".to_string()
    };
    println!("{}", header.bold().blue());

    for (i, product) in result.products.iter().enumerate() {
        println!(
            "{}. {} [{}] - {:.1}★ ₹{:.0} - Score: {}",
            (i + 1).to_string().green(),
            product.title,
            product.colour.as_deref().unwrap_or("-"),
            product.rating,
            product.price,
            product.match_score.to_string().cyan(),
        );
        if explain && !product.match_reasons.is_empty() {
            println!("   Why: {}", product.match_reasons.join(", "));
        }
    }

    println!(
        "{} {} products, size filter {}, {} ms",
        "•".cyan(),
        result.meta.total,
        if result.meta.size_filtered { "applied" } else { "not applied" },
        result.meta.elapsed_ms,
    );
}
