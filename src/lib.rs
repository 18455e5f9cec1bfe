//! Trend Radar client for Rust.
//!
//! Provides a typed client for the Shopping Trend Radar REST API, a chart
//! lifecycle manager over an injected charting backend, and the dashboard
//! controller that ties filters, loading, rendering and user actions together.
//!
//! # Quick start
//!
//! ```no_run
//! use trend_radar::{FilterState, TrendRadar};
//!
//! let radar = TrendRadar::builder()
//!     .base_url("http://localhost:8000/api/v1")
//!     .build()
//!     .unwrap();
//!
//! let mut filters = FilterState::new().with_min_score(0.6);
//! filters.toggle_category("electronics");
//! let products = radar.trends().products(&filters).unwrap();
//!
//! let deals = radar.products().compare("Wireless Earbuds", None).unwrap();
//! ```

pub mod api;
#[cfg(feature = "async")]
pub mod async_client;
pub mod charts;
pub mod client;
pub mod config;
pub mod dashboard;
pub mod endpoint;
pub mod error;
pub mod filter;
pub mod models;

#[cfg(feature = "async")]
pub use async_client::AsyncTrendRadar;
pub use api::DashboardApi;
pub use charts::{ChartBackend, ChartManager};
pub use client::ApiClient;
pub use config::DashboardConfig;
pub use dashboard::Dashboard;
pub use endpoint::Endpoint;
pub use error::{RequestError, Result, TrendRadarError};
pub use filter::FilterState;

use std::fmt;
use std::time::Duration;

use models::{Alert, AlertRequest, CategorySummary, Product, ProductComparison, TrendPrediction};

// ---------------------------------------------------------------------------
// TrendRadarBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`TrendRadar`] client.
///
/// Use [`TrendRadar::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](TrendRadarBuilder::build).
#[derive(Debug, Clone)]
pub struct TrendRadarBuilder {
    base_url: String,
    timeout: Option<Duration>,
}

impl Default for TrendRadarBuilder {
    fn default() -> Self {
        Self {
            base_url: config::DEFAULT_API_BASE.to_string(),
            timeout: None,
        }
    }
}

impl TrendRadarBuilder {
    /// Seed the builder from a resolved [`DashboardConfig`].
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            timeout: config.request_timeout(),
        }
    }

    /// Set the API base URL, including the version prefix.
    ///
    /// Defaults to `http://localhost:8000/api/v1`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set a per-request timeout.
    ///
    /// Unset by default: a request waits until the backend answers or the
    /// connection fails.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<TrendRadar> {
        let client = ApiClient::new(&self.base_url, self.timeout)?;
        Ok(TrendRadar { client })
    }
}

// ---------------------------------------------------------------------------
// TrendRadar
// ---------------------------------------------------------------------------

/// The main entry point for the Trend Radar API.
///
/// Wraps an [`ApiClient`] and exposes each backend router as a lightweight
/// borrowing wrapper.
#[derive(Debug, Clone)]
pub struct TrendRadar {
    client: ApiClient,
}

impl TrendRadar {
    pub fn builder() -> TrendRadarBuilder {
        TrendRadarBuilder::default()
    }

    /// Trending products, predictions, reports and categories.
    pub fn trends(&self) -> api::TrendApi<'_> {
        api::TrendApi::new(&self.client)
    }

    /// Price comparison, event recommendations, insights and compliance.
    pub fn products(&self) -> api::ProductApi<'_> {
        api::ProductApi::new(&self.client)
    }

    /// Alert management.
    pub fn alerts(&self) -> api::AlertApi<'_> {
        api::AlertApi::new(&self.client)
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}

impl DashboardApi for TrendRadar {
    fn list_products(&self, filters: &FilterState) -> Result<Vec<Product>> {
        self.trends().products(filters)
    }

    fn product(&self, product_id: &str) -> Result<Product> {
        self.trends().product(product_id)
    }

    fn prediction(&self, product_id: &str) -> Result<TrendPrediction> {
        self.trends().prediction(product_id)
    }

    fn categories(&self) -> Result<Vec<CategorySummary>> {
        self.trends().categories()
    }

    fn compare_prices(&self, product_name: &str, platforms: Option<&[String]>) -> Result<ProductComparison> {
        self.products().compare(product_name, platforms)
    }

    fn create_alert(&self, request: &AlertRequest) -> Result<Alert> {
        self.alerts().create(request)
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for TrendRadar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TrendRadar(base_url={})", self.client.base_url())
    }
}
