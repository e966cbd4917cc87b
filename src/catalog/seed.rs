use crate::models::{Country, Currency, Property, PropertyStatus};
use tracing::info;

/// Showcase listings shown on the site until a real inventory feed exists
pub fn showcase_properties() -> Vec<Property> {
    info!("📋 Loading showcase listings for Israel and the U.S.");

    vec![
        Property {
            id: "us-manhattan-1".to_string(),
            title: "Luxury Apartment in Manhattan".to_string(),
            location: "New York, NY".to_string(),
            property_type: "Apartment".to_string(),
            country: Country::UnitedStates,
            price: 850_000.0,
            currency: Currency::Usd,
            roi: 7.2,
            bedrooms: Some(2),
            bathrooms: Some(2),
            parking: Some(true),
            status: PropertyStatus::Available,
            image_url: Some("/assets/property-us-1.jpg".to_string()),
        },
        Property {
            id: "il-jerusalem-1".to_string(),
            title: "Modern Apartment in Jerusalem".to_string(),
            location: "Jerusalem, Israel".to_string(),
            property_type: "Apartment".to_string(),
            country: Country::Israel,
            price: 2_800_000.0,
            currency: Currency::Ils,
            roi: 6.8,
            bedrooms: Some(3),
            bathrooms: Some(2),
            parking: Some(true),
            status: PropertyStatus::Available,
            image_url: Some("/assets/property-il-1.jpg".to_string()),
        },
        Property {
            id: "us-miami-1".to_string(),
            title: "Miami Beach House".to_string(),
            location: "Miami, FL".to_string(),
            property_type: "House".to_string(),
            country: Country::UnitedStates,
            price: 1_200_000.0,
            currency: Currency::Usd,
            roi: 8.5,
            bedrooms: Some(4),
            bathrooms: Some(3),
            parking: Some(true),
            status: PropertyStatus::Available,
            image_url: Some("/assets/property-us-2.jpg".to_string()),
        },
        Property {
            id: "il-telaviv-1".to_string(),
            title: "Luxury Villa in Tel Aviv".to_string(),
            location: "Tel Aviv, Israel".to_string(),
            property_type: "House".to_string(),
            country: Country::Israel,
            price: 4_500_000.0,
            currency: Currency::Ils,
            roi: 7.2,
            bedrooms: Some(4),
            bathrooms: Some(3),
            parking: Some(true),
            status: PropertyStatus::Available,
            image_url: Some("/assets/property-il-1.jpg".to_string()),
        },
    ]
}
