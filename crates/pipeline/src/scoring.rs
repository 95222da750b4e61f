//! Preference scoring and ranking.
//!
//! Deterministic additive scoring: the same product, profile and size set
//! always produce the same score and the same reason list, and ranking is
//! a stable sort, so identical inputs yield identical output order.

use catalog::{PreferenceProfile, Product};
use rayon::prelude::*;
use sources::Candidate;
use sources::expansion::{colour_terms, style_terms};
use std::collections::HashSet;
use tracing::debug;

/// Points awarded per matching attribute.
const GENDER_POINTS: i32 = 10;
const COLOUR_POINTS: i32 = 8;
const STYLE_POINTS: i32 = 6;
const TOP_RATED_POINTS: i32 = 4;
const WELL_RATED_POINTS: i32 = 2;
const SIZE_HINT_POINTS: i32 = 3;

const TOP_RATED_THRESHOLD: f32 = 4.5;
const WELL_RATED_THRESHOLD: f32 = 4.0;

/// A candidate with its preference score and human-readable match reasons.
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    pub candidate: Candidate,
    pub score: i32,
    /// Deduplicated, first-occurrence order preserved
    pub reasons: Vec<String>,
}

/// Scores candidates against a preference profile.
pub struct PreferenceScorer;

impl PreferenceScorer {
    /// Score one product.
    ///
    /// - gender match (substring, or product tagged "unisex"): +10
    /// - each favourite colour whose aliases hit the colour field: +8
    /// - each style whose terms hit usage/product_type/sub_category: +6
    /// - rating >= 4.5: +4 ("top rated"); else >= 4.0: +2 (no reason)
    /// - each adjacent clothing size appearing in the title: +3
    ///   (heuristic for catalogs without a structured size field)
    pub fn score(
        product: &Product,
        profile: &PreferenceProfile,
        clothing_sizes: &[String],
    ) -> (i32, Vec<String>) {
        let mut score = 0;
        let mut reasons: Vec<String> = Vec::new();

        let title = product.title.to_lowercase();
        let colour = lower(&product.colour);
        let usage = lower(&product.usage);
        let gender = lower(&product.gender);
        let sub_category = lower(&product.sub_category);
        let product_type = lower(&product.product_type);

        if !profile.gender.is_empty() {
            let wanted = profile.gender.to_lowercase();
            if gender.contains(&wanted) || gender == "unisex" {
                score += GENDER_POINTS;
                reasons.push(format!("matches your gender ({})", profile.gender));
            }
        }

        for favourite in &profile.favourite_colors {
            let terms = colour_terms(favourite);
            if terms.iter().any(|term| colour.contains(term)) {
                score += COLOUR_POINTS;
                reasons.push(format!(
                    "colour match ({})",
                    product.colour.as_deref().unwrap_or(favourite)
                ));
            }
        }

        for style in &profile.style_preferences {
            let terms = style_terms(style);
            if terms.iter().any(|term| {
                usage.contains(term) || product_type.contains(term) || sub_category.contains(term)
            }) {
                score += STYLE_POINTS;
                reasons.push(format!("style match ({style})"));
            }
        }

        if product.rating >= TOP_RATED_THRESHOLD {
            score += TOP_RATED_POINTS;
            reasons.push("top rated".to_string());
        } else if product.rating >= WELL_RATED_THRESHOLD {
            score += WELL_RATED_POINTS;
        }

        for size in clothing_sizes {
            if title.contains(&size.to_lowercase()) {
                score += SIZE_HINT_POINTS;
                reasons.push(format!("size hint ({size})"));
            }
        }

        let mut seen: HashSet<String> = HashSet::new();
        reasons.retain(|reason| seen.insert(reason.clone()));

        (score, reasons)
    }

    /// Score every candidate and rank: score desc, ties broken by rating
    /// desc. The sort is stable, so equal (score, rating) pairs keep their
    /// incoming order.
    pub fn rank(
        candidates: Vec<Candidate>,
        profile: &PreferenceProfile,
        clothing_sizes: &[String],
    ) -> Vec<ScoredCandidate> {
        let mut scored: Vec<ScoredCandidate> = candidates
            .into_par_iter()
            .map(|candidate| {
                let (score, reasons) = Self::score(&candidate.product, profile, clothing_sizes);
                ScoredCandidate {
                    candidate,
                    score,
                    reasons,
                }
            })
            .collect();

        scored.sort_by(|a, b| {
            b.score.cmp(&a.score).then_with(|| {
                b.candidate
                    .product
                    .rating
                    .partial_cmp(&a.candidate.product.rating)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
        });

        debug!("ranked {} candidates", scored.len());
        scored
    }
}

fn lower(field: &Option<String>) -> String {
    field.as_deref().unwrap_or("").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sources::SourceKind;

    fn product(title: &str, gender: &str, colour: &str, usage: &str, rating: f32) -> Product {
        Product {
            id: 1,
            title: title.to_string(),
            description: None,
            category: Some("Apparel".to_string()),
            sub_category: Some("Topwear".to_string()),
            product_type: Some("Tops".to_string()),
            gender: Some(gender.to_string()),
            colour: Some(colour.to_string()),
            usage: Some(usage.to_string()),
            brand: None,
            price: 899.0,
            original_price: None,
            rating,
            rating_count: 120,
            image_url: None,
            is_active: true,
        }
    }

    fn profile() -> PreferenceProfile {
        PreferenceProfile {
            gender: "Women".to_string(),
            clothing_size: "M".to_string(),
            footwear_size: String::new(),
            favourite_colors: vec!["Navy".to_string()],
            style_preferences: vec!["Casual".to_string()],
        }
    }

    #[test]
    fn test_full_match_scores_all_components() {
        let p = product("Womens Navy Casual Top", "Women", "Navy", "Casual", 4.6);
        let sizes = vec!["S".to_string(), "M".to_string(), "L".to_string()];
        let (score, reasons) = PreferenceScorer::score(&p, &profile(), &sizes);

        // 10 (gender) + 8 (colour) + 6 (style) + 4 (top rated) + size hints
        assert!(score >= 28);
        assert!(reasons.contains(&"matches your gender (Women)".to_string()));
        assert!(reasons.contains(&"colour match (Navy)".to_string()));
        assert!(reasons.contains(&"style match (Casual)".to_string()));
        assert!(reasons.contains(&"top rated".to_string()));
    }

    #[test]
    fn test_unisex_counts_as_gender_match() {
        let p = product("Oversized Hoodie", "Unisex", "Black", "Casual", 3.0);
        let (score, reasons) = PreferenceScorer::score(&p, &profile(), &[]);
        assert!(score >= GENDER_POINTS);
        assert!(reasons.iter().any(|r| r.starts_with("matches your gender")));
    }

    #[test]
    fn test_well_rated_bonus_has_no_reason() {
        let p = product("Plain Tee", "Men", "White", "Formal", 4.2);
        let (score, reasons) = PreferenceScorer::score(&p, &profile(), &[]);
        assert_eq!(score, WELL_RATED_POINTS);
        assert!(reasons.is_empty());
    }

    #[test]
    fn test_colour_alias_matches() {
        // Favourite "Navy" expands to "blue"
        let p = product("Denim Jacket", "Men", "Blue", "Formal", 3.0);
        let (score, _) = PreferenceScorer::score(&p, &profile(), &[]);
        assert_eq!(score, COLOUR_POINTS);
    }

    #[test]
    fn test_score_monotonicity() {
        // Identical products, one with an extra attribute match
        let fewer = product("Dress", "Women", "Black", "Formal", 4.0);
        let more = product("Dress", "Women", "Navy", "Formal", 4.0);
        let (score_fewer, _) = PreferenceScorer::score(&fewer, &profile(), &[]);
        let (score_more, _) = PreferenceScorer::score(&more, &profile(), &[]);
        assert!(score_more > score_fewer);
    }

    #[test]
    fn test_score_is_deterministic() {
        let p = product("Womens Navy Casual Top", "Women", "Navy", "Casual", 4.6);
        let sizes = vec!["S".to_string(), "M".to_string(), "L".to_string()];
        let first = PreferenceScorer::score(&p, &profile(), &sizes);
        let second = PreferenceScorer::score(&p, &profile(), &sizes);
        assert_eq!(first, second);
    }

    #[test]
    fn test_rank_orders_by_score_then_rating() {
        let a = Candidate::new(product("A Navy Top", "Women", "Navy", "Casual", 4.0), SourceKind::Keyword);
        let b = Candidate::new(product("B Plain Top", "Men", "Grey", "Formal", 4.9), SourceKind::Keyword);
        let c = Candidate::new(product("C Plain Top", "Men", "Grey", "Formal", 4.6), SourceKind::Direct);

        let ranked = PreferenceScorer::rank(vec![b, c, a], &profile(), &[]);
        let titles: Vec<&str> = ranked
            .iter()
            .map(|s| s.candidate.product.title.as_str())
            .collect();

        // A wins on attribute score; B beats C on rating at equal score
        assert_eq!(titles, vec!["A Navy Top", "B Plain Top", "C Plain Top"]);
    }

    #[test]
    fn test_reasons_dedup_preserves_first_occurrence() {
        let p = product("Top", "Women", "Navy Blue", "Casual", 2.0);
        let mut prof = profile();
        // Both favourites hit the same colour field text and produce the
        // same reason string; the score counts both, the reason appears once
        prof.favourite_colors = vec!["Navy".to_string(), "Blue".to_string()];
        prof.style_preferences.clear();

        let (score, reasons) = PreferenceScorer::score(&p, &prof, &[]);
        assert_eq!(score, GENDER_POINTS + 2 * COLOUR_POINTS);
        assert_eq!(
            reasons,
            vec![
                "matches your gender (Women)".to_string(),
                "colour match (Navy Blue)".to_string(),
            ]
        );
    }
}
