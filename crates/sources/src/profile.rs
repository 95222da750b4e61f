//! Preference expansion: profile → retrieval-ready context.
//!
//! Gathers everything the pipeline derives from a profile once upfront
//! (the retrieval query string and the adjacent-size sets) so later stages
//! never re-derive it.

use crate::expansion::{colour_terms, style_terms};
use crate::sizes::{CLOTHING_ORDER, FOOTWEAR_ORDER, adjacent_sizes};
use catalog::PreferenceProfile;

/// Query used when a profile yields no usable terms at all.
const DEFAULT_QUERY: &str = "fashion clothing";

/// How many colours/styles contribute to the retrieval query. Deeper
/// preferences still count during scoring, but the query stays short
/// enough to keep retrieval focused.
const QUERY_TERMS_PER_KIND: usize = 3;

/// Derived, retrieval-ready view of a [`PreferenceProfile`].
#[derive(Debug, Clone)]
pub struct PreferenceContext {
    /// Free-text query fed to keyword retrieval
    pub query: String,
    /// Adjacent clothing sizes, `None` when the size is unset/unknown
    pub clothing_sizes: Option<Vec<String>>,
    /// Adjacent footwear sizes, `None` when the size is unset/unknown
    pub footwear_sizes: Option<Vec<String>>,
}

impl PreferenceContext {
    /// Adjacent clothing sizes as a slice (empty when no constraint),
    /// the input to the scorer's size-hint heuristic.
    pub fn clothing_size_hints(&self) -> &[String] {
        self.clothing_sizes.as_deref().unwrap_or(&[])
    }
}

/// Build the retrieval context for one recommendation call.
pub fn build_preference_context(profile: &PreferenceProfile) -> PreferenceContext {
    PreferenceContext {
        query: build_preference_query(profile),
        clothing_sizes: adjacent_sizes(&profile.clothing_size, &CLOTHING_ORDER),
        footwear_sizes: adjacent_sizes(&profile.footwear_size, &FOOTWEAR_ORDER),
    }
}

/// Compose the keyword-retrieval query from the profile: gender, then the
/// leading expansion term of up to three favourite colours and three
/// styles.
pub fn build_preference_query(profile: &PreferenceProfile) -> String {
    let mut parts: Vec<String> = Vec::new();

    if !profile.gender.is_empty() {
        parts.push(profile.gender.clone());
    }

    for colour in profile.favourite_colors.iter().take(QUERY_TERMS_PER_KIND) {
        if let Some(term) = colour_terms(colour).into_iter().next() {
            parts.push(term);
        }
    }

    for style in profile.style_preferences.iter().take(QUERY_TERMS_PER_KIND) {
        if let Some(term) = style_terms(style).into_iter().next() {
            parts.push(term);
        }
    }

    if parts.is_empty() {
        DEFAULT_QUERY.to_string()
    } else {
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> PreferenceProfile {
        PreferenceProfile {
            gender: "Women".to_string(),
            clothing_size: "M".to_string(),
            footwear_size: String::new(),
            favourite_colors: vec!["Navy".to_string(), "Coral".to_string()],
            style_preferences: vec!["Casual".to_string()],
        }
    }

    #[test]
    fn test_query_composition() {
        assert_eq!(build_preference_query(&profile()), "Women navy coral casual");
    }

    #[test]
    fn test_query_caps_colours_and_styles() {
        let mut p = profile();
        p.favourite_colors = vec![
            "Navy".into(),
            "Teal".into(),
            "Beige".into(),
            "Maroon".into(),
            "Coral".into(),
        ];
        let query = build_preference_query(&p);
        assert!(query.contains("beige"));
        assert!(!query.contains("maroon"));
    }

    #[test]
    fn test_empty_profile_gets_default_query() {
        assert_eq!(
            build_preference_query(&PreferenceProfile::default()),
            "fashion clothing"
        );
    }

    #[test]
    fn test_context_sizes() {
        let context = build_preference_context(&profile());
        assert_eq!(
            context.clothing_sizes,
            Some(vec!["S".to_string(), "M".to_string(), "L".to_string()])
        );
        assert_eq!(context.footwear_sizes, None);
        assert_eq!(context.clothing_size_hints().len(), 3);
    }

    #[test]
    fn test_unknown_size_means_no_constraint() {
        let mut p = profile();
        p.clothing_size = "XXS".to_string();
        let context = build_preference_context(&p);
        assert_eq!(context.clothing_sizes, None);
        assert!(context.clothing_size_hints().is_empty());
    }
}
