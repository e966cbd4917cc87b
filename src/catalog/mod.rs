//! Listing catalog: seeded inventory, search filtering and card formatting.

pub mod filter;
pub mod format;
pub mod seed;

use std::collections::HashSet;

use thiserror::Error;
use tracing::{debug, info};

use crate::models::{Country, Currency, Property};

pub use filter::{filter, BedroomBucket, CountryFilter, FilterCriteria, RawFilterQuery};

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("listing {id} in {country} is priced in {currency}, expected {expected}")]
    CurrencyMismatch {
        id: String,
        country: &'static str,
        currency: &'static str,
        expected: &'static str,
    },
    #[error("duplicate listing id: {0}")]
    DuplicateId(String),
    #[error("listing {id} has invalid {field}: {value}")]
    InvalidNumber {
        id: String,
        field: &'static str,
        value: f64,
    },
}

/// Read-only listing inventory
#[derive(Debug, Clone)]
pub struct Catalog {
    properties: Vec<Property>,
}

impl Catalog {
    /// Build a catalog, rejecting listings that break the record invariants
    pub fn from_records(properties: Vec<Property>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for property in &properties {
            if !seen.insert(property.id.as_str()) {
                return Err(CatalogError::DuplicateId(property.id.clone()));
            }
            check_currency(property.country, property.currency, &property.id)?;
            if !(property.price.is_finite() && property.price > 0.0) {
                return Err(CatalogError::InvalidNumber {
                    id: property.id.clone(),
                    field: "price",
                    value: property.price,
                });
            }
            if !(property.roi.is_finite() && property.roi >= 0.0) {
                return Err(CatalogError::InvalidNumber {
                    id: property.id.clone(),
                    field: "roi",
                    value: property.roi,
                });
            }
        }

        info!(listings = properties.len(), "catalog loaded");
        Ok(Self { properties })
    }

    /// Catalog seeded with the showcase listings
    pub fn showcase() -> Result<Self, CatalogError> {
        Self::from_records(seed::showcase_properties())
    }

    pub fn all(&self) -> &[Property] {
        &self.properties
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn search(&self, criteria: &FilterCriteria) -> Vec<Property> {
        let found = filter(&self.properties, criteria);
        debug!(?criteria, matched = found.len(), "catalog search");
        found
    }
}

fn check_currency(country: Country, currency: Currency, id: &str) -> Result<(), CatalogError> {
    let expected = country.canonical_currency();
    if currency == expected {
        Ok(())
    } else {
        Err(CatalogError::CurrencyMismatch {
            id: id.to_string(),
            country: country.code(),
            currency: currency.code(),
            expected: expected.code(),
        })
    }
}
