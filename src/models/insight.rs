use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Product;

// ---------------------------------------------------------------------------
// UserType: audience a report is written for
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Merchant,
    Consumer,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Merchant => "merchant",
            UserType::Consumer => "consumer",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TrendReport: GET /trends/report
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendReport {
    pub report_id: String,
    pub user_type: UserType,
    #[serde(default)]
    pub top_trending: Vec<Product>,
    #[serde(default)]
    pub emerging_trends: Vec<Product>,
    #[serde(default)]
    pub category_breakdown: HashMap<String, u64>,
    #[serde(default)]
    pub platform_analysis: Value,
    #[serde(default)]
    pub predictions: Vec<Value>,
    #[serde(default)]
    pub upcoming_events: Vec<Value>,
    #[serde(default)]
    pub insights: Vec<String>,
}

// ---------------------------------------------------------------------------
// EventRecommendation: GET /products/events
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecommendation {
    pub event_name: String,
    pub event_date: String,
    pub days_until_event: i64,
    #[serde(default)]
    pub recommended_products: Vec<Product>,
    #[serde(default)]
    pub best_platforms: Vec<String>,
    #[serde(default)]
    pub price_trends: Value,
    #[serde(default)]
    pub buying_urgency: String,
}

// ---------------------------------------------------------------------------
// MerchantInsight / ConsumerInsight: per-product audience insights
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MerchantInsight {
    pub product_id: String,
    #[serde(default)]
    pub sourcing_recommendations: Vec<Value>,
    #[serde(default)]
    pub competition_level: String,
    #[serde(default)]
    pub profit_potential: f64,
    #[serde(default)]
    pub inventory_recommendation: Value,
    #[serde(default)]
    pub ad_targeting_suggestions: Vec<Value>,
    #[serde(default)]
    pub niche_opportunities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumerInsight {
    pub product_id: String,
    #[serde(default)]
    pub popularity_score: f64,
    #[serde(default)]
    pub price_trend: String,
    #[serde(default)]
    pub best_time_to_buy: String,
    #[serde(default)]
    pub similar_trending_products: Vec<String>,
    #[serde(default)]
    pub social_proof: Value,
    #[serde(default)]
    pub gift_suitability: Value,
}

// ---------------------------------------------------------------------------
// ComplianceVerdict: GET /products/compliance-check
// ---------------------------------------------------------------------------

/// Compliance verdict. `compliant` is `None` when the backend could only
/// report an error for the check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceVerdict {
    #[serde(default)]
    pub product_id: Option<String>,
    #[serde(default)]
    pub compliant: Option<bool>,
    #[serde(default)]
    pub platform_status: Value,
    #[serde(default)]
    pub issues: Vec<Value>,
    #[serde(default)]
    pub recommendations: Vec<Value>,
    #[serde(default)]
    pub error: Option<String>,
}
