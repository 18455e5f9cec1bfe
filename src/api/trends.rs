//! `/trends` endpoints: product listings, predictions, reports, categories.

use crate::client::ApiClient;
use crate::endpoint::Endpoint;
use crate::error::Result;
use crate::filter::FilterState;
use crate::models::{CategorySummary, Product, TrendPrediction, TrendReport, UserType};

// ---------------------------------------------------------------------------
// ReportParams
// ---------------------------------------------------------------------------

/// Parameters for [`TrendApi::report`].
#[derive(Debug, Clone)]
pub struct ReportParams {
    pub user_type: UserType,
    pub categories: Vec<String>,
    /// Look-back window; the backend defaults to 7 days.
    pub days_back: Option<u32>,
}

impl ReportParams {
    pub fn new(user_type: UserType) -> Self {
        Self {
            user_type,
            categories: Vec::new(),
            days_back: None,
        }
    }
}

// ---------------------------------------------------------------------------
// TrendApi
// ---------------------------------------------------------------------------

pub struct TrendApi<'a> {
    client: &'a ApiClient,
}

impl<'a> TrendApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// List trending products matching `filters`, ordered by the backend.
    pub fn products(&self, filters: &FilterState) -> Result<Vec<Product>> {
        let mut endpoint = Endpoint::new("trends/products");
        filters.apply_to(&mut endpoint);
        let products: Vec<Product> = self.client.get(&endpoint)?;
        tracing::info!("Loaded {} trending products", products.len());
        Ok(products)
    }

    pub fn product(&self, product_id: &str) -> Result<Product> {
        self.client
            .get(Endpoint::new("trends/products").segment(product_id))
    }

    pub fn prediction(&self, product_id: &str) -> Result<TrendPrediction> {
        self.client
            .get(Endpoint::new("trends/predictions").segment(product_id))
    }

    pub fn report(&self, params: &ReportParams) -> Result<TrendReport> {
        self.client.get(
            Endpoint::new("trends/report")
                .param("user_type", params.user_type.as_str())
                .param_list("categories", &params.categories)
                .param_opt("days_back", params.days_back),
        )
    }

    pub fn categories(&self) -> Result<Vec<CategorySummary>> {
        self.client.get(&Endpoint::new("trends/categories"))
    }
}
