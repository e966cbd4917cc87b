use crate::leads::traits::LeadSubmitter;
use crate::leads::{Lead, LeadError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Forwards leads as JSON to a lead-capture HTTP endpoint
pub struct HttpLeadSubmitter {
    client: Client,
    endpoint: String,
}

impl HttpLeadSubmitter {
    pub fn new(endpoint: impl Into<String>, timeout: Duration, user_agent: &str) -> Result<Self, LeadError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(LeadError::Client)?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl LeadSubmitter for HttpLeadSubmitter {
    async fn submit(&self, lead: &Lead) -> Result<(), LeadError> {
        debug!(endpoint = %self.endpoint, lead_id = %lead.id, "posting lead");

        let response = self
            .client
            .post(&self.endpoint)
            .json(lead)
            .send()
            .await
            .map_err(LeadError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, lead_id = %lead.id, "lead endpoint rejected submission");
            return Err(LeadError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        info!(lead_id = %lead.id, kind = lead.kind().slug(), "✅ Lead delivered");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
