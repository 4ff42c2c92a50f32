use crate::contact::error::ContactError;
use crate::contact::payload::ContactPayload;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Delivery channel for contact enquiries
#[async_trait]
pub trait ContactSubmitter: Send + Sync {
    async fn submit(&self, payload: &ContactPayload) -> Result<(), ContactError>;

    fn channel_name(&self) -> &'static str;
}

/// Pretends to send: logs the payload, waits, and reports success
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

#[async_trait]
impl ContactSubmitter for SimulatedSubmitter {
    async fn submit(&self, payload: &ContactPayload) -> Result<(), ContactError> {
        match serde_json::to_string(payload) {
            Ok(json) => info!("Contact form submission: {}", json),
            Err(err) => debug!("Could not serialize contact payload for logging: {}", err),
        }
        tokio::time::sleep(self.delay).await;
        Ok(())
    }

    fn channel_name(&self) -> &'static str {
        "simulated"
    }
}

/// Posts enquiries as JSON to a contact endpoint
pub struct HttpSubmitter {
    client: Client,
    endpoint: String,
}

impl HttpSubmitter {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ContactError> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl ContactSubmitter for HttpSubmitter {
    async fn submit(&self, payload: &ContactPayload) -> Result<(), ContactError> {
        debug!("Posting enquiry for property {} to {}", payload.property_id, self.endpoint);

        let response = self.client.post(&self.endpoint).json(payload).send().await?;

        if !response.status().is_success() {
            warn!("Contact endpoint returned status: {}", response.status());
            return Err(ContactError::Rejected(response.status()));
        }

        info!("Enquiry for property {} delivered", payload.property_id);
        Ok(())
    }

    fn channel_name(&self) -> &'static str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::payload::ContactRequest;
    use crate::models::Property;
    use chrono::Utc;

    #[tokio::test(start_paused = true)]
    async fn test_simulated_submit_waits_then_succeeds() {
        let property = Property::new(1, "123 Collins Street", "Melbourne CBD", 850_000, 1200, "2024-11-15");
        let payload = ContactPayload::new(ContactRequest::default(), &property, "https://portal.example/", Utc::now());
        let submitter = SimulatedSubmitter::default();

        let started = tokio::time::Instant::now();
        submitter.submit(&payload).await.unwrap();

        assert!(started.elapsed() >= SimulatedSubmitter::DEFAULT_DELAY);
    }
}
