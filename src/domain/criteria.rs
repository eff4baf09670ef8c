// src/domain/criteria.rs
//
// The resolved, upstream-ready description of what the user wants to search
// for, plus the mapping from (Criteria, source) to the exact request shape
// the upstream expects. A Criteria is immutable once dispatched: a new user
// action builds a new Criteria.

use crate::upstream::models::{CoarseFilterRequest, DetailedFilterRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    All,
    Residential,
    Commercial,
}

impl Category {
    pub fn wire_token(self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Residential => "residential",
            Category::Commercial => "commercial",
        }
    }

    pub fn from_param(param: &str) -> Option<Self> {
        match param {
            "all" | "" => Some(Category::All),
            "residential" => Some(Category::Residential),
            "commercial" => Some(Category::Commercial),
            _ => None,
        }
    }
}

/// Preference as a filter. Distinct from `listing::Preference`: this side
/// has an All value and uses the UI word "buy" for what the wire calls
/// "sale".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceFilter {
    All,
    Buy,
    Rent,
    Pg,
}

impl PreferenceFilter {
    pub fn wire_token(self) -> &'static str {
        match self {
            PreferenceFilter::All => "all",
            PreferenceFilter::Buy => "sale",
            PreferenceFilter::Rent => "rent",
            PreferenceFilter::Pg => "pg",
        }
    }

    pub fn from_param(param: &str) -> Option<Self> {
        match param {
            "all" | "" => Some(PreferenceFilter::All),
            "buy" => Some(PreferenceFilter::Buy),
            "rent" => Some(PreferenceFilter::Rent),
            "pg" => Some(PreferenceFilter::Pg),
            _ => None,
        }
    }
}

/// Tab selected on the quick (hero) search. The land tab is special: it has
/// no preference token on the wire at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickTab {
    Buy,
    Rent,
    Pg,
    Land,
}

impl QuickTab {
    pub fn preference_token(self) -> Option<&'static str> {
        match self {
            QuickTab::Buy => Some("sale"),
            QuickTab::Rent => Some("rent"),
            QuickTab::Pg => Some("pg"),
            QuickTab::Land => None,
        }
    }

    pub fn from_param(param: &str) -> Option<Self> {
        match param {
            "buy" => Some(QuickTab::Buy),
            "rent" => Some(QuickTab::Rent),
            "pg" => Some(QuickTab::Pg),
            "land" => Some(QuickTab::Land),
            _ => None,
        }
    }
}

/// Price range in rupees. `None` means unbounded on that side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PriceRange {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl PriceRange {
    pub fn new(min: Option<i64>, max: Option<i64>) -> Result<Self, String> {
        if let (Some(lo), Some(hi)) = (min, max) {
            if lo > hi {
                return Err(format!("price range inverted: {lo} > {hi}"));
            }
        }
        Ok(Self { min, max })
    }
}

/// Area range in square feet.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AreaRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl AreaRange {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Result<Self, String> {
        if let (Some(lo), Some(hi)) = (min, max) {
            if lo > hi {
                return Err(format!("area range inverted: {lo} > {hi}"));
            }
        }
        Ok(Self { min, max })
    }
}

/// Missing city with a state present means "all cities in that state";
/// missing state means all of country. A city without a state is meaningless
/// and is dropped at resolve time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Geography {
    pub state_iso: Option<String>,
    pub state_name: Option<String>,
    pub city: Option<String>,
}

/// Extended facets only the detailed sidebar filter can set. The quick
/// search deliberately has none of these; that asymmetry mirrors the
/// upstream and is kept as-is.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExtendedFacets {
    pub furnishing: Option<String>,
    pub amenities: Vec<String>,
    pub availability: Option<String>,
    pub area: AreaRange,
    pub age_ranges: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Criteria {
    pub category: Category,
    pub property_types: Vec<String>,
    pub preference: PreferenceFilter,
    pub price: PriceRange,
    pub geo: Geography,
    /// Present only when built by the detailed-filter source.
    pub facets: Option<ExtendedFacets>,
}

impl Default for Criteria {
    fn default() -> Self {
        Self {
            category: Category::All,
            property_types: Vec::new(),
            preference: PreferenceFilter::All,
            price: PriceRange::default(),
            geo: Geography::default(),
            facets: None,
        }
    }
}

impl Criteria {
    /// Synthesized criteria for a clicked city tile. Display-only: this is
    /// never dispatched, the city's result set was already fetched.
    pub fn for_city(city: &str) -> Self {
        Self {
            geo: Geography {
                state_iso: None,
                state_name: None,
                city: Some(city.to_string()),
            },
            ..Self::default()
        }
    }

    /// Breadcrumb text shown above the result list.
    pub fn describe(&self) -> String {
        let mut parts: Vec<String> = Vec::new();

        match self.category {
            Category::All => {}
            Category::Residential => parts.push("Residential".into()),
            Category::Commercial => parts.push("Commercial".into()),
        }
        match self.preference {
            PreferenceFilter::All => {}
            PreferenceFilter::Buy => parts.push("For Sale".into()),
            PreferenceFilter::Rent => parts.push("For Rent".into()),
            PreferenceFilter::Pg => parts.push("PG".into()),
        }

        match (&self.geo.city, &self.geo.state_name) {
            (Some(city), Some(state)) => parts.push(format!("{city}, {state}")),
            (Some(city), None) => parts.push(city.clone()),
            (None, Some(state)) => parts.push(state.clone()),
            (None, None) => parts.push("All of India".into()),
        }

        parts.join(" · ")
    }

    fn coarse_request(&self) -> CoarseFilterRequest {
        // City only travels alongside a state.
        let state = self.geo.state_iso.clone();
        let city = if state.is_some() {
            self.geo.city.clone()
        } else {
            None
        };

        CoarseFilterRequest {
            category: self.category.wire_token().to_string(),
            property_types: self.property_types.clone(),
            preference: self.preference.wire_token().to_string(),
            min_price: self.price.min,
            max_price: self.price.max,
            state,
            city,
        }
    }

    fn detailed_request(&self) -> DetailedFilterRequest {
        let facets = self.facets.clone().unwrap_or_default();

        DetailedFilterRequest {
            coarse: self.coarse_request(),
            furnishing: facets.furnishing,
            amenities: facets.amenities,
            availability: facets.availability,
            min_area: facets.area.min,
            max_area: facets.area.max,
            age_ranges: facets.age_ranges,
        }
    }
}

/// Which entry point initiated the search. Only affects how the request is
/// built; the result set is consumed identically downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceTag {
    QuickTab(QuickTab),
    Explorer,
    DetailedFilter,
    CityTile,
}

/// One of the four canonical request shapes. A Criteria is always fully
/// resolved to one of these before anything goes on the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum UpstreamRequest {
    QuickSearch {
        preference: Option<&'static str>,
        location: String,
    },
    Coarse(CoarseFilterRequest),
    Detailed(DetailedFilterRequest),
    /// City tile: the result set was fetched by the triggering action, so
    /// there is nothing to send.
    Prefetched,
}

impl UpstreamRequest {
    pub fn resolve(criteria: &Criteria, source: SourceTag) -> UpstreamRequest {
        match source {
            SourceTag::QuickTab(tab) => UpstreamRequest::QuickSearch {
                preference: tab.preference_token(),
                location: criteria.geo.city.clone().unwrap_or_default(),
            },
            SourceTag::Explorer => UpstreamRequest::Coarse(criteria.coarse_request()),
            SourceTag::DetailedFilter => UpstreamRequest::Detailed(criteria.detailed_request()),
            SourceTag::CityTile => UpstreamRequest::Prefetched,
        }
    }
}
