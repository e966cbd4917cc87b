use crate::leads::traits::LeadSubmitter;
use crate::leads::{Lead, LeadError};
use async_trait::async_trait;
use std::time::Duration;
use tracing::info;

/// Stand-in for a lead-capture backend: waits, then accepts everything
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

    pub fn new() -> Self {
        Self::with_delay(Self::DEFAULT_DELAY)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LeadSubmitter for SimulatedSubmitter {
    async fn submit(&self, lead: &Lead) -> Result<(), LeadError> {
        tokio::time::sleep(self.delay).await;
        info!(
            lead_id = %lead.id,
            kind = lead.kind().slug(),
            "📨 Lead accepted by simulated backend"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "simulated"
    }
}
