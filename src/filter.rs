//! Server-side product filters.
//!
//! Categories and platforms are kept as ordered sets: first selection order
//! is preserved so the generated query string is deterministic. Toggling a
//! value that is present removes it, so toggling twice is a no-op.

use crate::endpoint::Endpoint;
use crate::models::TrendStatus;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterState {
    categories: Vec<String>,
    platforms: Vec<String>,
    pub min_score: f64,
    pub status: Option<TrendStatus>,
    /// Result cap; the backend applies its own default when unset.
    pub limit: Option<u32>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_score(mut self, min_score: f64) -> Self {
        self.min_score = min_score;
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Toggle a category. Returns `true` if it is selected afterwards.
    pub fn toggle_category(&mut self, category: &str) -> bool {
        toggle(&mut self.categories, category)
    }

    /// Toggle a platform. Returns `true` if it is selected afterwards.
    pub fn toggle_platform(&mut self, platform: &str) -> bool {
        toggle(&mut self.platforms, platform)
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn platforms(&self) -> &[String] {
        &self.platforms
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    pub fn has_platform(&self, platform: &str) -> bool {
        self.platforms.iter().any(|p| p == platform)
    }

    /// Drop every selection but keep the result limit.
    pub fn clear(&mut self) {
        self.categories.clear();
        self.platforms.clear();
        self.min_score = 0.0;
        self.status = None;
    }

    /// Write these filters as query parameters onto `endpoint`.
    pub fn apply_to(&self, endpoint: &mut Endpoint) {
        endpoint
            .param_list("categories", &self.categories)
            .param_list("platforms", &self.platforms)
            .param("min_score", self.min_score)
            .param_opt("limit", self.limit)
            .param_opt("status", self.status.as_ref().map(|s| s.as_str()));
    }
}

fn toggle(set: &mut Vec<String>, value: &str) -> bool {
    if let Some(pos) = set.iter().position(|v| v == value) {
        set.remove(pos);
        false
    } else {
        set.push(value.to_string());
        true
    }
}
