use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// PriceComparisonEntry: one platform's offer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceComparisonEntry {
    pub platform: String,
    pub price: f64,
    #[serde(default)]
    pub availability: String,
    #[serde(default)]
    pub shipping: f64,
    #[serde(default, alias = "reviews")]
    pub review_count: u64,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub url: Option<String>,
}

// ---------------------------------------------------------------------------
// ProductComparison: /products/compare/{name}
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductComparison {
    pub product_name: String,
    #[serde(default)]
    pub comparisons: Vec<PriceComparisonEntry>,
    #[serde(default, deserialize_with = "super::empty_object_as_none")]
    pub best_deal: Option<PriceComparisonEntry>,
    #[serde(default)]
    pub timestamp: Option<String>,
}
