use crate::leads::{Lead, LeadError};
use async_trait::async_trait;

/// Destination for captured leads.
/// Implementations can forward to a CRM, a lead-capture API, or stand in for one.
#[async_trait]
pub trait LeadSubmitter: Send + Sync {
    /// Deliver one lead; `Ok` means the destination accepted it
    async fn submit(&self, lead: &Lead) -> Result<(), LeadError>;

    /// Get the name of the destination
    fn name(&self) -> &'static str;
}
