use serde::{Deserialize, Serialize};

/// Country a listing is located in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Country {
    #[serde(rename = "IL")]
    Israel,
    #[serde(rename = "US")]
    UnitedStates,
}

impl Country {
    pub fn code(self) -> &'static str {
        match self {
            Country::Israel => "IL",
            Country::UnitedStates => "US",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "IL" => Some(Country::Israel),
            "US" => Some(Country::UnitedStates),
            _ => None,
        }
    }

    /// Currency listings in this country are priced in
    pub fn canonical_currency(self) -> Currency {
        match self {
            Country::Israel => Currency::Ils,
            Country::UnitedStates => Currency::Usd,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Ils,
    Usd,
}

impl Currency {
    pub fn code(self) -> &'static str {
        match self {
            Currency::Ils => "ILS",
            Currency::Usd => "USD",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Ils => "₪",
            Currency::Usd => "$",
        }
    }
}

/// Sale status of a listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    Available,
    Sold,
    Pending,
}

impl PropertyStatus {
    /// Translation key of the status label in the `property_card` context
    pub fn label_key(self) -> &'static str {
        match self {
            PropertyStatus::Available => "available",
            PropertyStatus::Sold => "sold",
            PropertyStatus::Pending => "pending",
        }
    }

    /// Badge style the status is shown with
    pub fn badge_variant(self) -> &'static str {
        match self {
            PropertyStatus::Available => "default",
            PropertyStatus::Sold => "secondary",
            PropertyStatus::Pending => "outline",
        }
    }
}

/// Core listing data model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Property {
    pub id: String,
    pub title: String,
    pub location: String,
    #[serde(rename = "type")]
    pub property_type: String,
    pub country: Country,
    pub price: f64,
    pub currency: Currency,
    pub roi: f64,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub parking: Option<bool>,
    pub status: PropertyStatus,
    pub image_url: Option<String>,
}

/// Site language
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    He,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::He, Language::En];

    pub fn code(self) -> &'static str {
        match self {
            Language::He => "he",
            Language::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "he" | "he-il" | "iw" => Some(Language::He),
            "en" | "en-us" | "en-gb" => Some(Language::En),
            _ => None,
        }
    }

    pub fn is_rtl(self) -> bool {
        self == Language::He
    }

    pub fn direction(self) -> Direction {
        if self.is_rtl() {
            Direction::Rtl
        } else {
            Direction::Ltr
        }
    }

    /// The language the header toggle switches to
    pub fn toggled(self) -> Self {
        match self {
            Language::He => Language::En,
            Language::En => Language::He,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Text and layout direction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Rtl,
    Ltr,
}
