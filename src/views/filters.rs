use serde::Serialize;

use crate::catalog::{FilterCriteria, RawFilterQuery};
use crate::i18n::{I18nError, ResourceStore};
use crate::models::{Direction, Language};
use crate::views::ChoiceView;

// Values match the listing types in the catalog; the match is case-sensitive.
const TYPE_OPTIONS: &[(&str, &str)] = &[
    ("Apartment", "apartment"),
    ("House", "house"),
    ("Commercial", "commercial"),
    ("Land", "land"),
];

/// Filter panel labels, choices and the criteria currently applied
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FilterPanelView {
    pub title: String,
    pub country_label: String,
    pub countries: Vec<ChoiceView>,
    pub property_type_label: String,
    pub property_types: Vec<ChoiceView>,
    pub bedrooms_label: String,
    pub bedrooms: Vec<ChoiceView>,
    pub roi_label: String,
    pub price_range_label: String,
    pub min_price_placeholder: String,
    pub max_price_placeholder: String,
    pub apply_label: String,
    pub clear_label: String,
    pub show_label: String,
    pub hide_label: String,
    pub applied: RawFilterQuery,
    pub dir: Direction,
}

impl FilterPanelView {
    pub fn build(
        criteria: &FilterCriteria,
        language: Language,
        resources: &ResourceStore,
    ) -> Result<Self, I18nError> {
        let t = resources.resolve(language, "filters")?;
        let applied = criteria.to_raw();

        let country = applied.country.as_deref().unwrap_or("ALL");
        let countries = [("ALL", "all_countries"), ("IL", "israel"), ("US", "usa")]
            .iter()
            .map(|(value, key)| ChoiceView::new(value, t.text(key), *value == country))
            .collect();

        let selected_type = applied.property_type.as_deref().unwrap_or("ALL");
        let property_types = std::iter::once(("ALL", "all_types"))
            .chain(TYPE_OPTIONS.iter().copied())
            .map(|(value, key)| ChoiceView::new(value, t.text(key), value == selected_type))
            .collect();

        let selected_beds = applied.bedrooms.as_deref().unwrap_or("ALL");
        let bedrooms = [
            ("ALL", t.text("all_bedrooms")),
            ("0", t.text("studio")),
            ("1", "1".to_string()),
            ("2", "2".to_string()),
            ("3", "3".to_string()),
            ("4", "4+".to_string()),
        ]
        .into_iter()
        .map(|(value, label)| ChoiceView::new(value, label, value == selected_beds))
        .collect();

        Ok(Self {
            title: t.text("filters"),
            country_label: t.text("country"),
            countries,
            property_type_label: t.text("property_type"),
            property_types,
            bedrooms_label: t.text("bedrooms"),
            bedrooms,
            roi_label: t.text("roi"),
            price_range_label: t.text("price_range"),
            min_price_placeholder: t.text("min_price"),
            max_price_placeholder: t.text("max_price"),
            apply_label: t.text("apply_filters"),
            clear_label: t.text("clear_filters"),
            show_label: t.text("show_filters"),
            hide_label: t.text("hide_filters"),
            applied,
            dir: language.direction(),
        })
    }
}
