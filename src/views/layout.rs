use serde::Serialize;

use crate::i18n::{I18nError, ResourceStore};
use crate::models::{Direction, Language};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LanguageToggle {
    pub label: String,
    pub target: Language,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HeaderView {
    pub brand: String,
    pub nav: Vec<NavLink>,
    pub phone: String,
    pub contact_label: String,
    pub language_toggle: LanguageToggle,
    pub dir: Direction,
}

const NAV: &[(&str, &str)] = &[
    ("#home", "home"),
    ("#invest-israel", "invest_israel"),
    ("#invest-usa", "invest_usa"),
    ("#sell", "sell_property"),
    ("#about", "about"),
];

impl HeaderView {
    pub fn build(language: Language, resources: &ResourceStore) -> Result<Self, I18nError> {
        let t = resources.resolve(language, "header")?;
        Ok(Self {
            brand: t.text("brand"),
            nav: NAV
                .iter()
                .map(|&(href, key)| NavLink {
                    href,
                    label: t.text(key),
                })
                .collect(),
            phone: t.text("phone"),
            contact_label: t.text("contact"),
            language_toggle: LanguageToggle {
                label: t.text("language"),
                target: language.toggled(),
            },
            dir: language.direction(),
        })
    }
}

/// Headline figure such as `500+` over `Properties`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatView {
    pub value: String,
    pub label: String,
}

impl StatView {
    /// Split at the first space: the figure, then its caption
    pub fn parse(text: &str) -> Self {
        match text.split_once(' ') {
            Some((value, label)) => Self {
                value: value.to_string(),
                label: label.to_string(),
            },
            None => Self {
                value: text.to_string(),
                label: String::new(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HeroView {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub cta_primary: String,
    pub cta_secondary: String,
    pub stats: Vec<StatView>,
    pub features: Vec<String>,
    pub dir: Direction,
}

impl HeroView {
    pub fn build(language: Language, resources: &ResourceStore) -> Result<Self, I18nError> {
        let t = resources.resolve(language, "hero")?;
        Ok(Self {
            title: t.text("title"),
            subtitle: t.text("subtitle"),
            description: t.text("description"),
            cta_primary: t.text("cta_primary"),
            cta_secondary: t.text("cta_secondary"),
            stats: ["stat1", "stat2", "stat3"]
                .iter()
                .map(|key| StatView::parse(&t.text(key)))
                .collect(),
            features: ["feature1", "feature2", "feature3"]
                .iter()
                .map(|key| t.text(key))
                .collect(),
            dir: language.direction(),
        })
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FooterView {
    pub brand: String,
    pub tagline: String,
    pub disclaimer: String,
    pub dir: Direction,
}

impl FooterView {
    pub fn build(language: Language, resources: &ResourceStore) -> Result<Self, I18nError> {
        let t = resources.resolve(language, "footer")?;
        Ok(Self {
            brand: t.text("brand"),
            tagline: t.text("tagline"),
            disclaimer: t.text("disclaimer"),
            dir: language.direction(),
        })
    }
}
