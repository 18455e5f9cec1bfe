use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Momentum: coarse category direction
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Momentum {
    Rising,
    Stable,
    Other(String),
}

impl Momentum {
    pub fn as_str(&self) -> &str {
        match self {
            Momentum::Rising => "rising",
            Momentum::Stable => "stable",
            Momentum::Other(s) => s,
        }
    }

    pub fn is_rising(&self) -> bool {
        matches!(self, Momentum::Rising)
    }
}

impl From<String> for Momentum {
    fn from(s: String) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "rising" => Momentum::Rising,
            "stable" => Momentum::Stable,
            _ => Momentum::Other(s),
        }
    }
}

impl From<Momentum> for String {
    fn from(m: Momentum) -> Self {
        m.as_str().to_string()
    }
}

// ---------------------------------------------------------------------------
// CategorySummary: one row of /trends/categories
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: String,
    pub product_count: u64,
    pub avg_trend_score: f64,
    pub momentum: Momentum,
}
