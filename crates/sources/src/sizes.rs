//! Size scales and adjacency.
//!
//! Availability matching broadens a declared size to its one-below /
//! one-above neighbourhood on a fixed ordered scale, so a user who wears M
//! still sees products only stocked in S or L.

/// Ordered clothing size scale
pub const CLOTHING_ORDER: [&str; 7] = ["XS", "S", "M", "L", "XL", "XXL", "XXXL"];

/// Ordered footwear size scale
pub const FOOTWEAR_ORDER: [&str; 9] = ["5", "6", "7", "8", "9", "10", "11", "12", "13"];

/// The {size-1, size, size+1} neighbourhood of `size` on `order`, clamped
/// to the scale bounds and returned in scale order.
///
/// Returns `None` when the size is empty or unknown; callers must treat
/// that as "skip size filtering", never as "zero matches".
pub fn adjacent_sizes(size: &str, order: &[&str]) -> Option<Vec<String>> {
    let size = size.trim().to_uppercase();
    if size.is_empty() {
        return None;
    }
    let idx = order.iter().position(|s| *s == size)?;

    let lo = idx.saturating_sub(1);
    let hi = (idx + 1).min(order.len() - 1);
    Some(order[lo..=hi].iter().map(|s| s.to_string()).collect())
}
