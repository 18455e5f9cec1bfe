use serde::{Deserialize, Serialize};

use super::Product;

/// Score threshold the backend applies when an alert does not set one.
pub const DEFAULT_ALERT_MIN_SCORE: f64 = 0.7;

// ---------------------------------------------------------------------------
// AlertRequest: body of POST /alerts/
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertRequest {
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    pub min_trend_score: f64,
    #[serde(default)]
    pub platforms: Vec<String>,
}

impl AlertRequest {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            product_id: None,
            keywords: Vec::new(),
            categories: Vec::new(),
            min_trend_score: DEFAULT_ALERT_MIN_SCORE,
            platforms: Vec::new(),
        }
    }

    /// Alert watching a single product, seeded from its name, category and
    /// platforms.
    pub fn for_product(user_id: impl Into<String>, product: &Product) -> Self {
        Self {
            product_id: Some(product.id.clone()),
            keywords: vec![product.name.clone()],
            categories: vec![product.category.clone()],
            platforms: product.platforms.clone(),
            ..Self::new(user_id)
        }
    }
}

// ---------------------------------------------------------------------------
// Alert: stored alert
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default = "default_min_score")]
    pub min_trend_score: f64,
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_min_score() -> f64 {
    DEFAULT_ALERT_MIN_SCORE
}

fn default_active() -> bool {
    true
}

// ---------------------------------------------------------------------------
// AlertUpdate: partial body of PUT /alerts/{id}
// ---------------------------------------------------------------------------

/// Partial update; only the fields that are set are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_trend_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platforms: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

// ---------------------------------------------------------------------------
// AlertCheck: GET /alerts/{id}/check
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertCheck {
    pub alert_id: String,
    pub triggered: bool,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub matching_products: Vec<Product>,
    #[serde(default)]
    pub checked_at: Option<String>,
}
