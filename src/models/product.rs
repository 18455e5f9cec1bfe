use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// TrendStatus: lifecycle label assigned by the backend
// ---------------------------------------------------------------------------

/// Trend lifecycle label.
///
/// The dashboard only distinguishes `emerging` and `rising`; every other
/// label the backend sends is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TrendStatus {
    Emerging,
    Rising,
    Peak,
    Declining,
    Stable,
    Other(String),
}

impl TrendStatus {
    pub fn as_str(&self) -> &str {
        match self {
            TrendStatus::Emerging => "emerging",
            TrendStatus::Rising => "rising",
            TrendStatus::Peak => "peak",
            TrendStatus::Declining => "declining",
            TrendStatus::Stable => "stable",
            TrendStatus::Other(s) => s,
        }
    }
}

impl From<String> for TrendStatus {
    fn from(s: String) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "emerging" => TrendStatus::Emerging,
            "rising" => TrendStatus::Rising,
            "peak" => TrendStatus::Peak,
            "declining" => TrendStatus::Declining,
            "stable" => TrendStatus::Stable,
            _ => TrendStatus::Other(s),
        }
    }
}

impl From<&str> for TrendStatus {
    fn from(s: &str) -> Self {
        TrendStatus::from(s.to_string())
    }
}

impl From<TrendStatus> for String {
    fn from(status: TrendStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for TrendStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Product: a trending product as returned by /trends/products
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    pub trend_score: f64,
    #[serde(default)]
    pub viral_velocity: f64,
    pub status: TrendStatus,
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

// ---------------------------------------------------------------------------
// TrendPrediction: model forecast for one product
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPrediction {
    #[serde(default)]
    pub product_id: String,
    #[serde(default)]
    pub predicted_peak_date: Option<String>,
    pub confidence_score: f64,
    #[serde(default)]
    pub duration_days: Option<i64>,
    #[serde(default)]
    pub max_predicted_score: f64,
    #[serde(default)]
    pub recommendation: String,
    #[serde(default)]
    pub factors: serde_json::Value,
}
