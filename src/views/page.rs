use serde::Serialize;

use crate::catalog::{Catalog, FilterCriteria};
use crate::i18n::{Dictionary, I18nError, ResourceStore};
use crate::leads::FormKind;
use crate::models::{Country, Direction, Language};
use crate::views::card::PropertyCardView;
use crate::views::filters::FilterPanelView;
use crate::views::forms::ContactFormView;
use crate::views::layout::{FooterView, HeaderView, HeroView};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PageKind {
    Home,
    InvestIsrael,
    InvestUsa,
    SellProperty,
    About,
}

impl PageKind {
    pub const ALL: [PageKind; 5] = [
        PageKind::Home,
        PageKind::InvestIsrael,
        PageKind::InvestUsa,
        PageKind::SellProperty,
        PageKind::About,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            PageKind::Home => "home",
            PageKind::InvestIsrael => "invest-israel",
            PageKind::InvestUsa => "invest-usa",
            PageKind::SellProperty => "sell-property",
            PageKind::About => "about",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|page| page.slug() == slug)
    }

    fn context(self) -> &'static str {
        match self {
            PageKind::Home => "home",
            PageKind::InvestIsrael => "invest_israel",
            PageKind::InvestUsa => "invest_usa",
            PageKind::SellProperty => "sell_property",
            PageKind::About => "about",
        }
    }

    fn shows_catalog(self) -> bool {
        matches!(
            self,
            PageKind::Home | PageKind::InvestIsrael | PageKind::InvestUsa
        )
    }

    /// Country the page's listings are limited to, whatever the visitor picks
    fn pinned_country(self) -> Option<Country> {
        match self {
            PageKind::InvestIsrael => Some(Country::Israel),
            PageKind::InvestUsa => Some(Country::UnitedStates),
            _ => None,
        }
    }

    fn forms(self) -> &'static [FormKind] {
        match self {
            PageKind::Home => &[FormKind::Investor, FormKind::Seller],
            PageKind::InvestIsrael | PageKind::InvestUsa => &[FormKind::Investor],
            PageKind::SellProperty => &[FormKind::Seller],
            PageKind::About => &[FormKind::General],
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CatalogSection {
    pub filters: FilterPanelView,
    pub total: usize,
    pub cards: Vec<PropertyCardView>,
}

impl CatalogSection {
    pub fn build(
        catalog: &Catalog,
        criteria: &FilterCriteria,
        language: Language,
        resources: &ResourceStore,
    ) -> Result<Self, I18nError> {
        let found = catalog.search(criteria);
        Ok(Self {
            filters: FilterPanelView::build(criteria, language, resources)?,
            total: found.len(),
            cards: PropertyCardView::build_all(&found, language, resources)?,
        })
    }
}

/// Everything one page needs, resolved into one language
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PageView {
    pub page: PageKind,
    pub language: Language,
    pub dir: Direction,
    pub header: HeaderView,
    pub hero: Option<HeroView>,
    pub content: Dictionary,
    pub catalog: Option<CatalogSection>,
    pub forms: Vec<ContactFormView>,
    pub footer: FooterView,
}

impl PageView {
    pub fn build(
        page: PageKind,
        language: Language,
        criteria: FilterCriteria,
        catalog: &Catalog,
        resources: &ResourceStore,
    ) -> Result<Self, I18nError> {
        let catalog = if page.shows_catalog() {
            let criteria = match page.pinned_country() {
                Some(country) => criteria.with_country(country),
                None => criteria,
            };
            Some(CatalogSection::build(catalog, &criteria, language, resources)?)
        } else {
            None
        };

        let hero = if page == PageKind::Home {
            Some(HeroView::build(language, resources)?)
        } else {
            None
        };

        Ok(Self {
            page,
            language,
            dir: language.direction(),
            header: HeaderView::build(language, resources)?,
            hero,
            content: resources.resolve(language, page.context())?.clone(),
            catalog,
            forms: page
                .forms()
                .iter()
                .map(|kind| ContactFormView::build(*kind, language, resources))
                .collect::<Result<_, _>>()?,
            footer: FooterView::build(language, resources)?,
        })
    }
}
