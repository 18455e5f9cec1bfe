//! Typed endpoint groups for the Trend Radar API.
//!
//! Each group borrows the shared [`ApiClient`](crate::client::ApiClient) and
//! maps one backend router (`/trends`, `/products`, `/alerts`) onto methods
//! returning `Result<T>` with typed payloads.

pub mod alerts;
pub mod products;
pub mod trends;

pub use alerts::AlertApi;
pub use products::ProductApi;
pub use trends::{ReportParams, TrendApi};

use crate::error::Result;
use crate::filter::FilterState;
use crate::models::{Alert, AlertRequest, CategorySummary, Product, ProductComparison, TrendPrediction};

/// The calls the dashboard controller makes.
///
/// Implemented by [`TrendRadar`](crate::TrendRadar); tests substitute an
/// in-memory backend.
pub trait DashboardApi {
    fn list_products(&self, filters: &FilterState) -> Result<Vec<Product>>;

    fn product(&self, product_id: &str) -> Result<Product>;

    fn prediction(&self, product_id: &str) -> Result<TrendPrediction>;

    fn categories(&self) -> Result<Vec<CategorySummary>>;

    fn compare_prices(&self, product_name: &str, platforms: Option<&[String]>) -> Result<ProductComparison>;

    fn create_alert(&self, request: &AlertRequest) -> Result<Alert>;
}
