use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// Every listings endpoint answers with this envelope. Either array may be
// null on the wire; only the normalizer is allowed to see that.
//
// envelope
//  ├── residential[]
//  │    ├── id, title, description
//  │    ├── price, area, preference
//  │    ├── locality / city / state
//  │    ├── bedrooms, bathrooms
//  │    └── media[] { url, ordinal }
//  └── commercial[]
//       ├── (same common fields)
//       └── cabins, meeting_room, washroom

#[derive(Debug, Deserialize)]
pub struct ResultEnvelope {
    pub residential: Option<Vec<RawResidential>>,
    pub commercial: Option<Vec<RawCommercial>>,
}

/// City-count summary: city name -> number of active listings.
pub type CityCounts = BTreeMap<String, i64>;

#[derive(Debug, Deserialize)]
pub struct RawMedia {
    pub url: Option<String>,
    pub ordinal: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct RawResidential {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,

    pub price: Option<i64>,
    pub area: Option<f64>,
    pub preference: Option<String>,
    #[serde(rename = "property_type")]
    pub property_type: Option<String>,

    pub locality: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,

    #[serde(rename = "created_at")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "approved_at")]
    pub approved_at: Option<DateTime<Utc>>,

    pub featured: Option<bool>,
    pub verified: Option<bool>,

    pub media: Option<Vec<RawMedia>>,

    pub bedrooms: Option<i64>,
    pub bathrooms: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct RawCommercial {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,

    pub price: Option<i64>,
    pub area: Option<f64>,
    pub preference: Option<String>,
    #[serde(rename = "property_type")]
    pub property_type: Option<String>,

    pub locality: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,

    #[serde(rename = "created_at")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "approved_at")]
    pub approved_at: Option<DateTime<Utc>>,

    pub featured: Option<bool>,
    pub verified: Option<bool>,

    pub media: Option<Vec<RawMedia>>,

    pub cabins: Option<i64>,
    #[serde(rename = "meeting_room")]
    pub meeting_room: Option<bool>,
    pub washroom: Option<bool>,
}

/// Body of the coarse POST filter (category explorer).
///
/// Unset numeric ranges MUST go out as JSON null, never 0 — the upstream
/// treats 0 as "exactly zero", which silently empties the result set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoarseFilterRequest {
    pub category: String,
    #[serde(rename = "property_types")]
    pub property_types: Vec<String>,
    pub preference: String,
    #[serde(rename = "min_price")]
    pub min_price: Option<i64>,
    #[serde(rename = "max_price")]
    pub max_price: Option<i64>,
    pub state: Option<String>,
    pub city: Option<String>,
}

/// Body of the detailed POST filter (sidebar). Coarse fields plus the
/// extended facets only this source supports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailedFilterRequest {
    #[serde(flatten)]
    pub coarse: CoarseFilterRequest,
    pub furnishing: Option<String>,
    pub amenities: Vec<String>,
    pub availability: Option<String>,
    #[serde(rename = "min_area")]
    pub min_area: Option<f64>,
    #[serde(rename = "max_area")]
    pub max_area: Option<f64>,
    #[serde(rename = "age_ranges")]
    pub age_ranges: Vec<String>,
}
