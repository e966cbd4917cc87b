use serde::Serialize;

use crate::catalog::format::{format_price, format_roi};
use crate::i18n::{I18nError, ResourceStore};
use crate::models::{Currency, Direction, Language, Property, PropertyStatus};

/// One icon row entry on a card
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CardFeature {
    pub key: &'static str,
    pub label: String,
    pub value: String,
}

/// A listing as shown on a card in one language
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PropertyCardView {
    pub id: String,
    pub title: String,
    pub location: String,
    #[serde(rename = "type")]
    pub property_type: String,
    pub country: &'static str,
    pub price: String,
    pub currency: Currency,
    pub roi: String,
    pub roi_label: String,
    pub status: PropertyStatus,
    pub status_label: String,
    pub status_variant: &'static str,
    pub image_url: Option<String>,
    pub features: Vec<CardFeature>,
    pub dir: Direction,
}

impl PropertyCardView {
    pub fn build(
        property: &Property,
        language: Language,
        resources: &ResourceStore,
    ) -> Result<Self, I18nError> {
        let t = resources.resolve(language, "property_card")?;

        let mut features = Vec::new();
        if let Some(n) = property.bedrooms.filter(|n| *n > 0) {
            features.push(CardFeature {
                key: "bedrooms",
                label: t.text("bedrooms"),
                value: n.to_string(),
            });
        }
        if let Some(n) = property.bathrooms.filter(|n| *n > 0) {
            features.push(CardFeature {
                key: "bathrooms",
                label: t.text("bathrooms"),
                value: n.to_string(),
            });
        }
        if property.parking == Some(true) {
            features.push(CardFeature {
                key: "parking",
                label: t.text("parking"),
                value: "✓".to_string(),
            });
        }

        Ok(Self {
            id: property.id.clone(),
            title: property.title.clone(),
            location: property.location.clone(),
            property_type: property.property_type.clone(),
            country: property.country.code(),
            price: format_price(property.price, property.currency, language),
            currency: property.currency,
            roi: format_roi(property.roi),
            roi_label: t.text("roi"),
            status: property.status,
            status_label: t.text(property.status.label_key()),
            status_variant: property.status.badge_variant(),
            image_url: property.image_url.clone(),
            features,
            dir: language.direction(),
        })
    }

    /// Cards for a list of listings, keeping their order
    pub fn build_all(
        properties: &[Property],
        language: Language,
        resources: &ResourceStore,
    ) -> Result<Vec<Self>, I18nError> {
        properties
            .iter()
            .map(|p| Self::build(p, language, resources))
            .collect()
    }
}
