//! Core domain types for the storefront catalog.
//!
//! This module defines the product, inventory and user-preference structures
//! used throughout the recommendation pipeline.

use serde::{Deserialize, Serialize};

// =============================================================================
// Type Aliases
// =============================================================================
// These make the domain clearer and prevent mixing up product and store IDs

/// Unique identifier for a product
pub type ProductId = u32;

/// Unique identifier for a retail store
pub type StoreId = u32;

// =============================================================================
// Product
// =============================================================================

/// A catalog product.
///
/// Most text attributes are optional: the catalog is imported from loosely
/// structured retail feeds where any field may be missing. Only products
/// with `is_active = true` are eligible for recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub sub_category: Option<String>,
    #[serde(default)]
    pub product_type: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub colour: Option<String>,
    #[serde(default)]
    pub usage: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub original_price: Option<f64>,
    /// Average rating, 0.0 to 5.0 with one decimal
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub rating_count: u32,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Product {
    /// The fixed set of text fields that keyword retrieval searches across.
    ///
    /// Keeping this as a named method (rather than ad-hoc field lists at
    /// call sites) is what makes the "any token in any field" contract
    /// auditable in one place.
    pub fn searchable_texts(&self) -> [Option<&str>; 9] {
        [
            Some(self.title.as_str()),
            self.description.as_deref(),
            self.category.as_deref(),
            self.sub_category.as_deref(),
            self.product_type.as_deref(),
            self.brand.as_deref(),
            self.gender.as_deref(),
            self.colour.as_deref(),
            self.usage.as_deref(),
        ]
    }

    /// Case-insensitive substring match of `term` against any searchable
    /// field. `term` is expected to already be lowercase.
    pub fn matches_term(&self, term: &str) -> bool {
        self.searchable_texts()
            .iter()
            .any(|field| contains_ci(*field, term))
    }
}

/// Case-insensitive "contains" predicate over a nullable text field.
/// The needle must already be lowercase; a `None` field never matches.
pub fn contains_ci(field: Option<&str>, needle: &str) -> bool {
    field
        .map(|text| text.to_lowercase().contains(needle))
        .unwrap_or(false)
}

// =============================================================================
// Inventory
// =============================================================================

/// Per-store, per-size stock record.
///
/// `size` is nullable: legacy rows predate the size column. The invariant
/// `reserved_quantity <= quantity` is not enforced at write time by the
/// wider system, so [`InventoryRecord::available`] clamps at zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub store_id: StoreId,
    pub product_id: ProductId,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub reserved_quantity: u32,
}

impl InventoryRecord {
    /// Stock eligible for new reservations: `quantity - reserved_quantity`,
    /// clamped to zero in case concurrent writes overshot the reservation.
    pub fn available(&self) -> u32 {
        self.quantity.saturating_sub(self.reserved_quantity)
    }
}

// =============================================================================
// User preferences
// =============================================================================

/// The stated preferences a recommendation call personalizes against.
///
/// Read from the user profile and immutable for the duration of one call.
/// Empty strings / empty lists mean "not set".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreferenceProfile {
    #[serde(default)]
    pub gender: String,
    /// One of XS, S, M, L, XL, XXL, XXXL, or empty
    #[serde(default)]
    pub clothing_size: String,
    /// One of 5..13, or empty
    #[serde(default)]
    pub footwear_size: String,
    /// Up to 5 semantic colour names, in order of preference
    #[serde(default)]
    pub favourite_colors: Vec<String>,
    /// Up to 4 semantic style tags, in order of preference
    #[serde(default)]
    pub style_preferences: Vec<String>,
}

impl PreferenceProfile {
    /// Whether any preference is set at all. When nothing is set the
    /// orchestrator short-circuits to a plain top-rated list.
    pub fn has_preferences(&self) -> bool {
        !self.gender.is_empty()
            || !self.clothing_size.is_empty()
            || !self.footwear_size.is_empty()
            || !self.favourite_colors.is_empty()
            || !self.style_preferences.is_empty()
    }
}

// =============================================================================
// Attribute filter
// =============================================================================

/// Disjunctive attribute filter for the direct-match query.
///
/// A product matches if *any* clause matches: gender contains
/// `gender_contains`, OR the colour field contains any of `colour_terms`,
/// OR usage/product_type contains any of `usage_terms`. All terms are
/// lowercase. An empty filter matches every active product.
#[derive(Debug, Clone, Default)]
pub struct AttributeFilter {
    pub gender_contains: Option<String>,
    pub colour_terms: Vec<String>,
    pub usage_terms: Vec<String>,
}

impl AttributeFilter {
    pub fn is_empty(&self) -> bool {
        self.gender_contains.is_none()
            && self.colour_terms.is_empty()
            && self.usage_terms.is_empty()
    }

    /// Evaluate the disjunction against a product.
    pub fn matches(&self, product: &Product) -> bool {
        if self.is_empty() {
            return true;
        }

        if let Some(gender) = &self.gender_contains
            && contains_ci(product.gender.as_deref(), gender)
        {
            return true;
        }

        if self
            .colour_terms
            .iter()
            .any(|term| contains_ci(product.colour.as_deref(), term))
        {
            return true;
        }

        self.usage_terms.iter().any(|term| {
            contains_ci(product.usage.as_deref(), term)
                || contains_ci(product.product_type.as_deref(), term)
        })
    }
}
