//! Language-specific view models. Layout direction is attached here and
//! nowhere earlier.

pub mod card;
pub mod filters;
pub mod forms;
pub mod layout;
pub mod page;

use serde::Serialize;

pub use card::{CardFeature, PropertyCardView};
pub use filters::FilterPanelView;
pub use forms::{ContactFormView, FieldErrorView, FieldView};
pub use layout::{FooterView, HeaderView, HeroView, StatView};
pub use page::{CatalogSection, PageKind, PageView};

/// One entry of a select box
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChoiceView {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl ChoiceView {
    pub fn new(value: &str, label: String, selected: bool) -> Self {
        Self {
            value: value.to_string(),
            label,
            selected,
        }
    }
}
