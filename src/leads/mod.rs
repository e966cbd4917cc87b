//! Lead capture: contact form field lists, validation, the submitter seam and
//! the per-form busy state.

pub mod desk;
pub mod form;
pub mod http;
pub mod simulated;
pub mod traits;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::models::Language;

pub use desk::{ContactDesk, ContactForm, DeskError, Notification, NotificationVariant, Submitted};
pub use form::{ContactFormSubmission, FieldError, FieldProblem, FieldSpec, FormKind, InputKind};
pub use http::HttpLeadSubmitter;
pub use simulated::SimulatedSubmitter;
pub use traits::LeadSubmitter;

#[derive(Debug, Error)]
pub enum LeadError {
    #[error("failed to build lead client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("lead endpoint unreachable: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("lead endpoint rejected submission with status {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("lead submitter unavailable: {0}")]
    Unavailable(String),
}

/// Contact details every form collects
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub country: String,
}

/// Form-specific part of a lead
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Interest {
    #[serde(rename_all = "camelCase")]
    Investor {
        investment_type: Option<String>,
        budget: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Seller {
        property_location: String,
        property_type: Option<String>,
        property_value: Option<String>,
    },
    General,
}

/// A validated submission, ready to hand to a [`LeadSubmitter`]
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: Uuid,
    pub language: Language,
    pub received_at: DateTime<Utc>,
    pub contact: ContactDetails,
    pub interest: Interest,
    pub message: Option<String>,
}

impl Lead {
    /// Validate a raw submission and keep only the fields its form shows
    pub fn from_submission(
        kind: FormKind,
        language: Language,
        form: &ContactFormSubmission,
    ) -> Result<Self, Vec<FieldError>> {
        form.validate(kind)?;

        let interest = match kind {
            FormKind::Investor => Interest::Investor {
                investment_type: non_blank(&form.investment_type),
                budget: non_blank(&form.budget),
            },
            FormKind::Seller => Interest::Seller {
                property_location: form.property_location.trim().to_string(),
                property_type: non_blank(&form.property_type),
                property_value: non_blank(&form.property_value),
            },
            FormKind::General => Interest::General,
        };

        Ok(Self {
            id: Uuid::new_v4(),
            language,
            received_at: Utc::now(),
            contact: ContactDetails {
                first_name: form.first_name.trim().to_string(),
                last_name: form.last_name.trim().to_string(),
                email: form.email.trim().to_string(),
                phone: form.phone.trim().to_string(),
                country: form.country.trim().to_string(),
            },
            interest,
            message: non_blank(&form.message),
        })
    }

    pub fn kind(&self) -> FormKind {
        match self.interest {
            Interest::Investor { .. } => FormKind::Investor,
            Interest::Seller { .. } => FormKind::Seller,
            Interest::General => FormKind::General,
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seller_form() -> ContactFormSubmission {
        ContactFormSubmission {
            first_name: " Avi ".to_string(),
            last_name: "Cohen".to_string(),
            email: "avi@example.com".to_string(),
            phone: "050-0000000".to_string(),
            country: "IL".to_string(),
            property_location: "Haifa".to_string(),
            property_value: "  ".to_string(),
            budget: "ignored for sellers".to_string(),
            ..ContactFormSubmission::default()
        }
    }

    #[test]
    fn seller_lead_keeps_seller_fields_only() {
        let lead = Lead::from_submission(FormKind::Seller, Language::He, &seller_form())
            .expect("valid");
        assert_eq!(lead.kind(), FormKind::Seller);
        assert_eq!(lead.contact.first_name, "Avi");
        assert_eq!(
            lead.interest,
            Interest::Seller {
                property_location: "Haifa".to_string(),
                property_type: None,
                property_value: None,
            }
        );
        assert_eq!(lead.message, None);
    }

    #[test]
    fn invalid_submission_does_not_become_a_lead() {
        let form = ContactFormSubmission {
            property_location: String::new(),
            ..seller_form()
        };
        let errors = Lead::from_submission(FormKind::Seller, Language::En, &form)
            .expect_err("missing location");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "propertyLocation");
    }

    #[test]
    fn lead_serializes_with_tagged_interest() {
        let lead = Lead::from_submission(FormKind::Seller, Language::En, &seller_form())
            .expect("valid");
        let json = serde_json::to_value(&lead).expect("serialize");
        assert_eq!(json["interest"]["kind"], "seller");
        assert_eq!(json["interest"]["propertyLocation"], "Haifa");
        assert_eq!(json["contact"]["firstName"], "Avi");
        assert_eq!(json["language"], "en");
    }
}
