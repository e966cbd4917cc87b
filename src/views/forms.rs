use serde::Serialize;

use crate::i18n::{I18nError, ResourceStore};
use crate::leads::{FieldError, FieldProblem, FormKind, InputKind};
use crate::models::{Direction, Language};
use crate::views::ChoiceView;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FieldView {
    pub name: &'static str,
    pub label: String,
    pub input: InputKind,
    pub required: bool,
    pub placeholder: Option<String>,
    pub options: Vec<ChoiceView>,
}

/// A rejected field with its message in the visitor's language
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FieldErrorView {
    pub field: &'static str,
    pub problem: FieldProblem,
    pub message: String,
}

impl FieldErrorView {
    pub fn build_all(
        errors: &[FieldError],
        language: Language,
        resources: &ResourceStore,
    ) -> Result<Vec<Self>, I18nError> {
        let t = resources.resolve(language, "contact_form")?;
        Ok(errors
            .iter()
            .map(|error| Self {
                field: error.field,
                problem: error.problem,
                message: t.text(error.problem.message_key()),
            })
            .collect())
    }
}

/// A contact form resolved into one language
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ContactFormView {
    pub kind: FormKind,
    pub title: String,
    pub subtitle: String,
    pub fields: Vec<FieldView>,
    pub submit_label: String,
    pub submitting_label: String,
    /// Shown if the visitor resubmits while a send is in flight
    pub busy_notice: String,
    pub required_hint: String,
    pub dir: Direction,
}

impl ContactFormView {
    pub fn build(
        kind: FormKind,
        language: Language,
        resources: &ResourceStore,
    ) -> Result<Self, I18nError> {
        let t = resources.resolve(language, "contact_form")?;

        let fields = kind
            .fields()
            .into_iter()
            .map(|field| FieldView {
                name: field.name,
                label: t.text(field.label_key),
                input: field.input,
                required: field.required,
                placeholder: field.placeholder_key.map(|key| t.text(key)),
                options: field
                    .options
                    .iter()
                    .map(|(value, key)| ChoiceView::new(value, t.text(key), false))
                    .collect(),
            })
            .collect();

        Ok(Self {
            kind,
            title: t.text(&format!("{}_title", kind.slug())),
            subtitle: t.text(&format!("{}_subtitle", kind.slug())),
            fields,
            submit_label: t.text("submit"),
            submitting_label: t.text("submitting"),
            busy_notice: t.text("busy"),
            required_hint: t.text("required"),
            dir: language.direction(),
        })
    }
}
