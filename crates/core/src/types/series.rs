//! Labeled numeric series, the backend's chart payload shape.

use serde::{Deserialize, Serialize};

/// An ordered sequence of labeled numeric buckets.
///
/// The `graphics/sales`, `graphics/bestSeller` and `graphics/bestClient`
/// endpoints all respond with this `{labels, data}` shape: one label per
/// bucket (a month name, a product, a client) and the matching value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Series {
    /// Bucket labels, in display order.
    pub labels: Vec<String>,
    /// Bucket values, parallel to `labels`.
    pub data: Vec<f64>,
}

impl Series {
    /// Number of buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the series has no buckets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
