//! `/alerts` endpoints.

use crate::client::ApiClient;
use crate::endpoint::Endpoint;
use crate::error::Result;
use crate::models::{Alert, AlertCheck, AlertRequest, AlertUpdate};

pub struct AlertApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AlertApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub fn create(&self, request: &AlertRequest) -> Result<Alert> {
        let alert: Alert = self
            .client
            .post(Endpoint::new("alerts").trailing_slash(), request)?;
        tracing::info!("Created alert {} for user {}", alert.id, alert.user_id);
        Ok(alert)
    }

    pub fn for_user(&self, user_id: &str) -> Result<Vec<Alert>> {
        self.client
            .get(Endpoint::new("alerts/user").segment(user_id))
    }

    pub fn update(&self, alert_id: &str, update: &AlertUpdate) -> Result<Alert> {
        self.client
            .put(Endpoint::new("alerts").segment(alert_id), update)
    }

    pub fn delete(&self, alert_id: &str) -> Result<()> {
        self.client.delete(Endpoint::new("alerts").segment(alert_id))
    }

    /// Ask the backend whether the alert's conditions currently match.
    pub fn check(&self, alert_id: &str) -> Result<AlertCheck> {
        self.client
            .get(Endpoint::new("alerts").segment(alert_id).segment("check"))
    }
}
