//! `/products` endpoints: price comparison, event picks, insights, compliance.

use crate::client::ApiClient;
use crate::endpoint::Endpoint;
use crate::error::Result;
use crate::models::{
    ComplianceVerdict, ConsumerInsight, EventRecommendation, MerchantInsight, ProductComparison,
};

pub struct ProductApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ProductApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Compare prices for `product_name`.
    ///
    /// With `platforms` unset the backend compares across its default
    /// storefronts (see [`COMPARISON_PLATFORMS`](crate::config::COMPARISON_PLATFORMS)).
    pub fn compare(&self, product_name: &str, platforms: Option<&[String]>) -> Result<ProductComparison> {
        let mut endpoint = Endpoint::new("products/compare");
        endpoint.segment(product_name);
        if let Some(platforms) = platforms {
            endpoint.param_list("platforms", platforms);
        }
        self.client.get(&endpoint)
    }

    /// Recommendations for calendar events within `days_ahead` days.
    pub fn events(&self, days_ahead: u32) -> Result<Vec<EventRecommendation>> {
        self.client
            .get(Endpoint::new("products/events").param("days_ahead", days_ahead))
    }

    pub fn merchant_insights(&self, product_id: &str) -> Result<MerchantInsight> {
        self.client
            .get(Endpoint::new("products/merchant-insights").segment(product_id))
    }

    pub fn consumer_insights(&self, product_id: &str) -> Result<ConsumerInsight> {
        self.client
            .get(Endpoint::new("products/consumer-insights").segment(product_id))
    }

    pub fn compliance_check(
        &self,
        product_name: &str,
        category: &str,
        description: Option<&str>,
    ) -> Result<ComplianceVerdict> {
        self.client.get(
            Endpoint::new("products/compliance-check")
                .param("product_name", product_name)
                .param("category", category)
                .param_opt("description", description),
        )
    }
}
