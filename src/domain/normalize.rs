// src/domain/normalize.rs

use crate::domain::listing::{
    CommercialDetails, KindDetails, Listing, ListingKind, MediaItem, Preference,
    ResidentialDetails,
};
use crate::upstream::models::{RawCommercial, RawMedia, RawResidential, ResultEnvelope};
use std::fmt;

/// A malformed individual record. Never fatal: the record is dropped and the
/// rest of the result set renders normally.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizationWarning {
    pub kind: ListingKind,
    pub index: usize,
    pub reason: String,
}

impl fmt::Display for NormalizationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} record #{} dropped: {}", self.kind, self.index, self.reason)
    }
}

#[derive(Debug, Default)]
pub struct Normalized {
    pub listings: Vec<Listing>,
    pub warnings: Vec<NormalizationWarning>,
}

/// Flattens the two-sided upstream envelope into one tagged sequence.
///
/// This is the single place the rest of the system is shielded from the
/// envelope's nullability: null arrays become empty ones here. Concatenation
/// order is residential-then-commercial and is load-bearing — the engine's
/// stable sort falls back to it on ties. Pure; callers must tolerate output
/// smaller than input.
pub fn normalize(envelope: ResultEnvelope) -> Normalized {
    let mut out = Normalized::default();

    for (index, raw) in envelope
        .residential
        .unwrap_or_default()
        .into_iter()
        .enumerate()
    {
        match normalize_residential(raw) {
            Ok(listing) => out.listings.push(listing),
            Err(reason) => out.warnings.push(NormalizationWarning {
                kind: ListingKind::Residential,
                index,
                reason,
            }),
        }
    }

    for (index, raw) in envelope
        .commercial
        .unwrap_or_default()
        .into_iter()
        .enumerate()
    {
        match normalize_commercial(raw) {
            Ok(listing) => out.listings.push(listing),
            Err(reason) => out.warnings.push(NormalizationWarning {
                kind: ListingKind::Commercial,
                index,
                reason,
            }),
        }
    }

    out
}

fn normalize_media(media: Option<Vec<RawMedia>>) -> Vec<MediaItem> {
    media
        .unwrap_or_default()
        .into_iter()
        .filter_map(|m| {
            let url = m.url.filter(|u| !u.is_empty())?;
            let ordinal = m.ordinal?;
            Some(MediaItem { url, ordinal })
        })
        .collect()
}

fn normalize_residential(raw: RawResidential) -> Result<Listing, String> {
    let id = raw.id.ok_or("missing numeric id")?;

    Ok(Listing {
        id,
        title: raw.title.unwrap_or_default(),
        description: raw.description.unwrap_or_default(),
        price: raw.price,
        area: raw.area,
        preference: raw.preference.as_deref().and_then(Preference::from_wire),
        property_type: raw.property_type.unwrap_or_default(),
        locality: raw.locality.unwrap_or_default(),
        city: raw.city.unwrap_or_default(),
        state: raw.state.unwrap_or_default(),
        created_at: raw.created_at,
        approved_at: raw.approved_at,
        featured: raw.featured.unwrap_or(false),
        verified: raw.verified.unwrap_or(false),
        media: normalize_media(raw.media),
        details: KindDetails::Residential(ResidentialDetails {
            bedrooms: raw.bedrooms,
            bathrooms: raw.bathrooms,
        }),
    })
}

fn normalize_commercial(raw: RawCommercial) -> Result<Listing, String> {
    let id = raw.id.ok_or("missing numeric id")?;

    Ok(Listing {
        id,
        title: raw.title.unwrap_or_default(),
        description: raw.description.unwrap_or_default(),
        price: raw.price,
        area: raw.area,
        preference: raw.preference.as_deref().and_then(Preference::from_wire),
        property_type: raw.property_type.unwrap_or_default(),
        locality: raw.locality.unwrap_or_default(),
        city: raw.city.unwrap_or_default(),
        state: raw.state.unwrap_or_default(),
        created_at: raw.created_at,
        approved_at: raw.approved_at,
        featured: raw.featured.unwrap_or(false),
        verified: raw.verified.unwrap_or(false),
        media: normalize_media(raw.media),
        details: KindDetails::Commercial(CommercialDetails {
            cabins: raw.cabins,
            meeting_room: raw.meeting_room,
            washroom: raw.washroom,
        }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(value: serde_json::Value) -> ResultEnvelope {
        serde_json::from_value(value).expect("test envelope should deserialize")
    }

    #[test]
    fn null_arrays_are_treated_as_empty() {
        let result = normalize(envelope(json!({
            "residential": null,
            "commercial": null,
        })));

        assert!(result.listings.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn residential_comes_before_commercial() {
        let result = normalize(envelope(json!({
            "residential": [
                { "id": 11, "title": "Flat A" },
                { "id": 12, "title": "Flat B" },
            ],
            "commercial": [
                { "id": 11, "title": "Shop A", "cabins": 2 },
            ],
        })));

        let identities: Vec<_> = result.listings.iter().map(|l| l.identity()).collect();
        assert_eq!(
            identities,
            vec![
                (ListingKind::Residential, 11),
                (ListingKind::Residential, 12),
                (ListingKind::Commercial, 11),
            ]
        );
    }

    #[test]
    fn record_without_id_is_dropped_with_warning() {
        let result = normalize(envelope(json!({
            "residential": [
                { "title": "No id here" },
                { "id": 5, "title": "Fine" },
            ],
            "commercial": null,
        })));

        assert_eq!(result.listings.len(), 1);
        assert_eq!(result.listings[0].id, 5);

        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].kind, ListingKind::Residential);
        assert_eq!(result.warnings[0].index, 0);
    }

    #[test]
    fn fields_flatten_with_sane_defaults() {
        let result = normalize(envelope(json!({
            "residential": [{
                "id": 7,
                "title": "2BHK near station",
                "price": 25000,
                "preference": "rent",
                "city": "Thane",
                "verified": true,
                "bedrooms": 2,
                "media": [
                    { "url": "https://cdn.example.com/7/1.jpg", "ordinal": 1 },
                    { "url": null, "ordinal": 2 },
                ],
            }],
            "commercial": null,
        })));

        let listing = &result.listings[0];
        assert_eq!(listing.preference, Some(Preference::Rent));
        assert_eq!(listing.city, "Thane");
        assert_eq!(listing.locality, "");
        assert!(listing.verified);
        assert!(!listing.featured);
        // The url-less media entry is skipped.
        assert_eq!(listing.media.len(), 1);
        match &listing.details {
            KindDetails::Residential(d) => assert_eq!(d.bedrooms, Some(2)),
            other => panic!("wrong payload: {other:?}"),
        }
    }
}
