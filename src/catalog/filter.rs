use crate::models::{Country, Property};
use serde::{Deserialize, Serialize};

/// Country restriction of a search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CountryFilter {
    #[default]
    All,
    Only(Country),
}

impl CountryFilter {
    fn parse(raw: &str) -> Self {
        Country::from_code(raw.trim()).map_or(CountryFilter::All, CountryFilter::Only)
    }

    pub fn code(self) -> &'static str {
        match self {
            CountryFilter::All => "ALL",
            CountryFilter::Only(country) => country.code(),
        }
    }

    fn matches(self, country: Country) -> bool {
        match self {
            CountryFilter::All => true,
            CountryFilter::Only(wanted) => wanted == country,
        }
    }
}

/// Bedroom bucket from the filter panel; the top bucket is open-ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BedroomBucket {
    Exactly(u32),
    AtLeast(u32),
}

impl BedroomBucket {
    const OPEN_ENDED_FROM: u32 = 4;

    fn parse(raw: &str) -> Option<Self> {
        let count: u32 = raw.trim().parse().ok()?;
        match count {
            0..=3 => Some(BedroomBucket::Exactly(count)),
            Self::OPEN_ENDED_FROM => Some(BedroomBucket::AtLeast(count)),
            _ => None,
        }
    }

    pub fn code(self) -> String {
        match self {
            BedroomBucket::Exactly(n) | BedroomBucket::AtLeast(n) => n.to_string(),
        }
    }

    fn matches(self, bedrooms: Option<u32>) -> bool {
        match (self, bedrooms) {
            (BedroomBucket::Exactly(wanted), Some(n)) => n == wanted,
            (BedroomBucket::AtLeast(min), Some(n)) => n >= min,
            (_, None) => false,
        }
    }
}

/// Raw filter input as it arrives from a query string.
///
/// Every field is free text; [`FilterCriteria::from_raw`] decides what is usable.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawFilterQuery {
    pub country: Option<String>,
    pub price_min: Option<String>,
    pub price_max: Option<String>,
    pub roi_min: Option<String>,
    pub property_type: Option<String>,
    pub bedrooms: Option<String>,
}

/// Search criteria. `None` fields match every listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub country: CountryFilter,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub roi_min: Option<f64>,
    pub property_type: Option<String>,
    pub bedrooms: Option<BedroomBucket>,
}

impl FilterCriteria {
    /// Build criteria from raw input. Malformed values become wildcards.
    pub fn from_raw(raw: &RawFilterQuery) -> Self {
        Self {
            country: raw
                .country
                .as_deref()
                .map_or(CountryFilter::All, CountryFilter::parse),
            price_min: raw.price_min.as_deref().and_then(parse_bound),
            price_max: raw.price_max.as_deref().and_then(parse_bound),
            roi_min: raw.roi_min.as_deref().and_then(parse_bound),
            property_type: raw
                .property_type
                .as_deref()
                .map(str::trim)
                .filter(|t| !t.is_empty() && *t != "ALL")
                .map(str::to_string),
            bedrooms: raw.bedrooms.as_deref().and_then(BedroomBucket::parse),
        }
    }

    /// Same criteria with the country pinned
    pub fn with_country(mut self, country: Country) -> Self {
        self.country = CountryFilter::Only(country);
        self
    }

    pub fn is_wildcard(&self) -> bool {
        *self == Self::default()
    }

    /// Echo of the criteria in the raw query shape
    pub fn to_raw(&self) -> RawFilterQuery {
        RawFilterQuery {
            country: Some(self.country.code().to_string()),
            price_min: self.price_min.map(|v| v.to_string()),
            price_max: self.price_max.map(|v| v.to_string()),
            roi_min: self.roi_min.map(|v| v.to_string()),
            property_type: self.property_type.clone(),
            bedrooms: self.bedrooms.map(BedroomBucket::code),
        }
    }

    pub fn matches(&self, property: &Property) -> bool {
        self.country.matches(property.country)
            && self.price_min.map_or(true, |min| property.price >= min)
            && self.price_max.map_or(true, |max| property.price <= max)
            && self.roi_min.map_or(true, |min| property.roi >= min)
            && self
                .property_type
                .as_deref()
                .map_or(true, |t| property.property_type == t)
            && self
                .bedrooms
                .map_or(true, |bucket| bucket.matches(property.bedrooms))
    }
}

// Zero is treated as unset, same as an empty input box.
fn parse_bound(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v != 0.0)
}

/// Listings matching every criterion, in input order
pub fn filter(records: &[Property], criteria: &FilterCriteria) -> Vec<Property> {
    records
        .iter()
        .filter(|p| criteria.matches(p))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PropertyStatus;

    fn listing(id: &str, country: Country, price: f64, roi: f64, bedrooms: Option<u32>) -> Property {
        Property {
            id: id.to_string(),
            title: format!("Listing {id}"),
            location: "Somewhere".to_string(),
            property_type: "Apartment".to_string(),
            country,
            price,
            currency: country.canonical_currency(),
            roi,
            bedrooms,
            bathrooms: None,
            parking: None,
            status: PropertyStatus::Available,
            image_url: None,
        }
    }

    fn scenario_catalog() -> Vec<Property> {
        vec![
            listing("us", Country::UnitedStates, 850_000.0, 7.2, Some(2)),
            listing("il", Country::Israel, 2_800_000.0, 6.8, Some(3)),
        ]
    }

    fn ids(records: &[Property]) -> Vec<&str> {
        records.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn empty_criteria_returns_input_unchanged() {
        let catalog = scenario_catalog();
        assert_eq!(filter(&catalog, &FilterCriteria::default()), catalog);
    }

    #[test]
    fn country_filter_keeps_only_that_country() {
        let criteria = FilterCriteria {
            country: CountryFilter::Only(Country::UnitedStates),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&filter(&scenario_catalog(), &criteria)), vec!["us"]);
    }

    #[test]
    fn roi_minimum_is_inclusive_lower_bound() {
        let criteria = FilterCriteria {
            roi_min: Some(7.0),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&filter(&scenario_catalog(), &criteria)), vec!["us"]);

        let exact = FilterCriteria {
            roi_min: Some(6.8),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&filter(&scenario_catalog(), &exact)), vec!["us", "il"]);
    }

    #[test]
    fn inverted_price_range_is_intersection_not_error() {
        let criteria = FilterCriteria {
            price_min: Some(1_000_000.0),
            price_max: Some(900_000.0),
            ..FilterCriteria::default()
        };
        assert!(filter(&scenario_catalog(), &criteria).is_empty());
    }

    #[test]
    fn filtering_twice_changes_nothing() {
        let criteria = FilterCriteria {
            price_max: Some(3_000_000.0),
            roi_min: Some(6.0),
            ..FilterCriteria::default()
        };
        let once = filter(&scenario_catalog(), &criteria);
        assert_eq!(filter(&once, &criteria), once);
    }

    #[test]
    fn top_bedroom_bucket_is_open_ended() {
        let catalog: Vec<Property> = (2..=6)
            .map(|n| listing(&n.to_string(), Country::Israel, 1.0, 1.0, Some(n)))
            .chain(std::iter::once(listing("none", Country::Israel, 1.0, 1.0, None)))
            .collect();

        let criteria = FilterCriteria {
            bedrooms: BedroomBucket::parse("4"),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&filter(&catalog, &criteria)), vec!["4", "5", "6"]);

        let exact = FilterCriteria {
            bedrooms: BedroomBucket::parse("3"),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&filter(&catalog, &exact)), vec!["3"]);
    }

    #[test]
    fn property_type_match_is_case_sensitive() {
        let catalog = scenario_catalog();
        let exact = FilterCriteria {
            property_type: Some("Apartment".to_string()),
            ..FilterCriteria::default()
        };
        assert_eq!(filter(&catalog, &exact).len(), 2);

        let lower = FilterCriteria {
            property_type: Some("apartment".to_string()),
            ..FilterCriteria::default()
        };
        assert!(filter(&catalog, &lower).is_empty());
    }

    #[test]
    fn malformed_raw_values_become_wildcards() {
        let raw = RawFilterQuery {
            country: Some("FR".to_string()),
            price_min: Some("abc".to_string()),
            price_max: Some("NaN".to_string()),
            roi_min: Some("".to_string()),
            property_type: Some("ALL".to_string()),
            bedrooms: Some("many".to_string()),
        };
        let criteria = FilterCriteria::from_raw(&raw);
        assert!(criteria.is_wildcard(), "got {criteria:?}");
    }

    #[test]
    fn raw_values_are_parsed() {
        let raw = RawFilterQuery {
            country: Some("IL".to_string()),
            price_min: Some(" 100000 ".to_string()),
            price_max: Some("3e6".to_string()),
            roi_min: Some("6.5".to_string()),
            property_type: Some("House".to_string()),
            bedrooms: Some("0".to_string()),
        };
        let criteria = FilterCriteria::from_raw(&raw);
        assert_eq!(criteria.country, CountryFilter::Only(Country::Israel));
        assert_eq!(criteria.price_min, Some(100_000.0));
        assert_eq!(criteria.price_max, Some(3_000_000.0));
        assert_eq!(criteria.roi_min, Some(6.5));
        assert_eq!(criteria.property_type.as_deref(), Some("House"));
        assert_eq!(criteria.bedrooms, Some(BedroomBucket::Exactly(0)));
    }

    #[test]
    fn zero_bound_is_dropped() {
        let raw = RawFilterQuery {
            roi_min: Some("0".to_string()),
            ..RawFilterQuery::default()
        };
        assert_eq!(FilterCriteria::from_raw(&raw).roi_min, None);
    }

    #[test]
    fn studio_bucket_does_not_match_unknown_bedrooms() {
        let catalog = vec![
            listing("studio", Country::UnitedStates, 1.0, 1.0, Some(0)),
            listing("unknown", Country::UnitedStates, 1.0, 1.0, None),
        ];
        let criteria = FilterCriteria {
            bedrooms: Some(BedroomBucket::Exactly(0)),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&filter(&catalog, &criteria)), vec!["studio"]);
    }

    #[test]
    fn raw_echo_round_trips_through_parser() {
        let criteria = FilterCriteria {
            country: CountryFilter::Only(Country::UnitedStates),
            roi_min: Some(7.5),
            bedrooms: Some(BedroomBucket::AtLeast(4)),
            ..FilterCriteria::default()
        };
        assert_eq!(FilterCriteria::from_raw(&criteria.to_raw()), criteria);
    }
}
