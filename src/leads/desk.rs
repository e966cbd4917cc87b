use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tokio::sync::watch;
use tracing::{error, info};
use uuid::Uuid;

use crate::i18n::{I18nError, ResourceStore};
use crate::leads::form::{ContactFormSubmission, FieldError, FormKind};
use crate::leads::traits::LeadSubmitter;
use crate::leads::Lead;
use crate::models::{Direction, Language};

const CONTEXT: &str = "contact_form";

#[derive(Debug, Error)]
pub enum DeskError {
    #[error("form is already submitting")]
    Busy,
    #[error("form has {} invalid field(s)", .0.len())]
    Invalid(Vec<FieldError>),
    #[error(transparent)]
    Translation(#[from] I18nError),
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    Success,
    Destructive,
}

/// Toast shown after a submission settles
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
    pub dir: Direction,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Submitted {
    pub lead_id: Uuid,
    pub delivered: bool,
    pub notification: Notification,
}

/// Shared entry point that hands out contact forms wired to one submitter
#[derive(Clone)]
pub struct ContactDesk {
    submitter: Arc<dyn LeadSubmitter>,
    resources: Arc<ResourceStore>,
}

impl ContactDesk {
    pub fn new(submitter: Arc<dyn LeadSubmitter>, resources: Arc<ResourceStore>) -> Self {
        Self {
            submitter,
            resources,
        }
    }

    pub fn submitter_name(&self) -> &'static str {
        self.submitter.name()
    }

    pub fn open_form(&self, kind: FormKind, language: Language) -> ContactForm {
        let (busy, _) = watch::channel(false);
        ContactForm {
            kind,
            language,
            submitter: Arc::clone(&self.submitter),
            resources: Arc::clone(&self.resources),
            busy,
        }
    }
}

/// One contact form instance with its own busy flag.
///
/// The flag is raised for the whole time a submission is in flight and
/// dropped again however the submission ends.
pub struct ContactForm {
    kind: FormKind,
    language: Language,
    submitter: Arc<dyn LeadSubmitter>,
    resources: Arc<ResourceStore>,
    busy: watch::Sender<bool>,
}

struct BusyGuard<'a>(&'a watch::Sender<bool>);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.send_replace(false);
    }
}

impl ContactForm {
    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn is_busy(&self) -> bool {
        *self.busy.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.busy.subscribe()
    }

    fn acquire(&self) -> Option<BusyGuard<'_>> {
        let acquired = self.busy.send_if_modified(|busy| {
            if *busy {
                false
            } else {
                *busy = true;
                true
            }
        });
        acquired.then(|| BusyGuard(&self.busy))
    }

    /// Validate and deliver a submission.
    ///
    /// A rejected or failed delivery is not an error here: it comes back as a
    /// destructive notification for the visitor.
    pub async fn submit(&self, form: &ContactFormSubmission) -> Result<Submitted, DeskError> {
        let lead =
            Lead::from_submission(self.kind, self.language, form).map_err(DeskError::Invalid)?;
        let texts = self.resources.resolve(self.language, CONTEXT)?;

        let _guard = self.acquire().ok_or(DeskError::Busy)?;
        info!(
            lead_id = %lead.id,
            kind = self.kind.slug(),
            submitter = self.submitter.name(),
            "submitting lead"
        );

        let (delivered, notification) = match self.submitter.submit(&lead).await {
            Ok(()) => (
                true,
                Notification {
                    title: texts.text("success"),
                    description: texts.text("success_description"),
                    variant: NotificationVariant::Success,
                    dir: self.language.direction(),
                },
            ),
            Err(err) => {
                error!(error = %err, lead_id = %lead.id, "lead submission failed");
                (
                    false,
                    Notification {
                        title: texts.text("error"),
                        description: texts.text("error_description"),
                        variant: NotificationVariant::Destructive,
                        dir: self.language.direction(),
                    },
                )
            }
        };

        Ok(Submitted {
            lead_id: lead.id,
            delivered,
            notification,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leads::{LeadError, SimulatedSubmitter};
    use async_trait::async_trait;
    use std::time::Duration;
    use tokio::sync::Notify;

    struct FailingSubmitter;

    #[async_trait]
    impl LeadSubmitter for FailingSubmitter {
        async fn submit(&self, _lead: &Lead) -> Result<(), LeadError> {
            Err(LeadError::Unavailable("crm offline".to_string()))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    /// Holds every submission until the test releases it
    struct GatedSubmitter {
        gate: Arc<Notify>,
    }

    #[async_trait]
    impl LeadSubmitter for GatedSubmitter {
        async fn submit(&self, _lead: &Lead) -> Result<(), LeadError> {
            self.gate.notified().await;
            Ok(())
        }

        fn name(&self) -> &'static str {
            "gated"
        }
    }

    fn resources() -> Arc<ResourceStore> {
        Arc::new(ResourceStore::embedded().expect("locales"))
    }

    fn general_form() -> ContactFormSubmission {
        ContactFormSubmission {
            first_name: "Dana".to_string(),
            last_name: "Levi".to_string(),
            email: "dana@example.com".to_string(),
            phone: "+1-555-000-0000".to_string(),
            country: "US".to_string(),
            message: "Looking at Miami".to_string(),
            ..ContactFormSubmission::default()
        }
    }

    #[tokio::test]
    async fn busy_flag_rises_and_falls_around_submission() {
        let gate = Arc::new(Notify::new());
        let desk = ContactDesk::new(
            Arc::new(GatedSubmitter {
                gate: Arc::clone(&gate),
            }),
            resources(),
        );
        let form = Arc::new(desk.open_form(FormKind::General, Language::En));
        let mut busy = form.subscribe();
        assert!(!form.is_busy());

        let task = tokio::spawn({
            let form = Arc::clone(&form);
            async move { form.submit(&general_form()).await }
        });

        busy.wait_for(|b| *b).await.expect("busy raised");
        assert!(form.is_busy());

        gate.notify_one();
        let submitted = task.await.expect("join").expect("submitted");

        assert!(!form.is_busy());
        assert!(submitted.delivered);
        assert_eq!(submitted.notification.variant, NotificationVariant::Success);
        assert_eq!(submitted.notification.title, "Message sent successfully!");
    }

    #[tokio::test]
    async fn second_submission_while_busy_is_refused() {
        let gate = Arc::new(Notify::new());
        let desk = ContactDesk::new(
            Arc::new(GatedSubmitter {
                gate: Arc::clone(&gate),
            }),
            resources(),
        );
        let form = Arc::new(desk.open_form(FormKind::General, Language::En));
        let mut busy = form.subscribe();

        let task = tokio::spawn({
            let form = Arc::clone(&form);
            async move { form.submit(&general_form()).await }
        });
        busy.wait_for(|b| *b).await.expect("busy raised");

        let refused = form.submit(&general_form()).await;
        assert!(matches!(refused, Err(DeskError::Busy)));

        gate.notify_one();
        assert!(task.await.expect("join").is_ok());
        assert!(!form.is_busy());
    }

    #[tokio::test]
    async fn failed_delivery_becomes_destructive_notification() {
        let desk = ContactDesk::new(Arc::new(FailingSubmitter), resources());
        let form = desk.open_form(FormKind::General, Language::He);

        let submitted = form.submit(&general_form()).await.expect("settled");

        assert!(!submitted.delivered);
        assert!(!form.is_busy());
        assert_eq!(submitted.notification.variant, NotificationVariant::Destructive);
        assert_eq!(submitted.notification.title, "שגיאה בשליחת ההודעה");
        assert_eq!(submitted.notification.dir, Direction::Rtl);
    }

    #[tokio::test]
    async fn invalid_form_never_raises_busy_flag() {
        let desk = ContactDesk::new(
            Arc::new(SimulatedSubmitter::with_delay(Duration::from_millis(1))),
            resources(),
        );
        let form = desk.open_form(FormKind::Seller, Language::En);
        let busy = form.subscribe();

        let err = form.submit(&general_form()).await.expect_err("missing location");

        assert!(matches!(err, DeskError::Invalid(ref fields) if fields[0].field == "propertyLocation"));
        assert!(!busy.has_changed().expect("sender alive"));
    }

    #[tokio::test]
    async fn simulated_backend_settles_with_success() {
        let desk = ContactDesk::new(
            Arc::new(SimulatedSubmitter::with_delay(Duration::from_millis(1))),
            resources(),
        );
        let form = desk.open_form(FormKind::General, Language::En);

        let submitted = form.submit(&general_form()).await.expect("settled");

        assert!(submitted.delivered);
        assert_eq!(desk.submitter_name(), "simulated");
        assert!(!form.is_busy());
    }
}
