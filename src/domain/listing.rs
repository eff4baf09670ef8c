// src/domain/listing.rs

use chrono::{DateTime, Utc};

/// Which side of the marketplace a listing came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListingKind {
    Residential,
    Commercial,
}

impl std::fmt::Display for ListingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListingKind::Residential => write!(f, "Residential"),
            ListingKind::Commercial => write!(f, "Commercial"),
        }
    }
}

/// What the lister is offering. PG (paying guest) only occurs on
/// residential listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference {
    Sale,
    Rent,
    Pg,
}

impl Preference {
    pub fn from_wire(token: &str) -> Option<Self> {
        match token {
            "sale" => Some(Preference::Sale),
            "rent" => Some(Preference::Rent),
            "pg" => Some(Preference::Pg),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Preference::Sale => "For Sale",
            Preference::Rent => "For Rent",
            Preference::Pg => "PG",
        }
    }
}

/// Role of a media entry, derived from its ordinal:
/// ordinal >= 1 is a displayable image (1 is primary), 0 is a video,
/// -1 is a downloadable document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaRole {
    Image,
    Video,
    Document,
}

const IMAGE_EXTS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif"];
const VIDEO_EXTS: &[&str] = &["mp4", "webm", "mov"];
const DOCUMENT_EXTS: &[&str] = &["pdf", "doc", "docx"];

#[derive(Debug, Clone, PartialEq)]
pub struct MediaItem {
    pub url: String,
    pub ordinal: i32,
}

impl MediaItem {
    pub fn role(&self) -> MediaRole {
        match self.ordinal {
            o if o >= 1 => MediaRole::Image,
            0 => MediaRole::Video,
            _ => MediaRole::Document,
        }
    }

    /// Lowercased file extension of the URL, ignoring query and fragment.
    fn extension(&self) -> Option<String> {
        let path = self
            .url
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let last_segment = path.rsplit('/').next().unwrap_or_default();
        let (_, ext) = last_segment.rsplit_once('.')?;
        if ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }

    /// An entry only counts for its role if the URL extension agrees with
    /// it. A "video" pointing at a .jpg is excluded from every collection.
    pub fn extension_matches_role(&self) -> bool {
        let allowed = match self.role() {
            MediaRole::Image => IMAGE_EXTS,
            MediaRole::Video => VIDEO_EXTS,
            MediaRole::Document => DOCUMENT_EXTS,
        };
        match self.extension() {
            Some(ext) => allowed.contains(&ext.as_str()),
            None => false,
        }
    }
}

/// Kind-specific payload. Keeping these in an enum (rather than a flat
/// struct of nullable everything) keeps match exhaustiveness meaningful
/// when a new kind is added.
#[derive(Debug, Clone, PartialEq)]
pub enum KindDetails {
    Residential(ResidentialDetails),
    Commercial(CommercialDetails),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResidentialDetails {
    pub bedrooms: Option<i64>,
    pub bathrooms: Option<i64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommercialDetails {
    pub cabins: Option<i64>,
    pub meeting_room: Option<bool>,
    pub washroom: Option<bool>,
}

/// One normalized property record, residential or commercial, as produced
/// by the normalizer and consumed by the search engine and templates.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub id: i64,
    pub title: String,
    pub description: String,

    pub price: Option<i64>,
    pub area: Option<f64>,
    pub preference: Option<Preference>,
    pub property_type: String,

    pub locality: String,
    pub city: String,
    pub state: String,

    pub created_at: Option<DateTime<Utc>>,
    pub approved_at: Option<DateTime<Utc>>,

    pub featured: bool,
    pub verified: bool,

    pub media: Vec<MediaItem>,
    pub details: KindDetails,
}

impl Listing {
    pub fn kind(&self) -> ListingKind {
        match self.details {
            KindDetails::Residential(_) => ListingKind::Residential,
            KindDetails::Commercial(_) => ListingKind::Commercial,
        }
    }

    /// Identity within a merged result set. Residential and commercial ids
    /// come from different upstream tables and may collide numerically, so
    /// the kind is part of the key.
    pub fn identity(&self) -> (ListingKind, i64) {
        (self.kind(), self.id)
    }

    /// Displayable images, primary (ordinal 1) first. Entries whose URL
    /// extension does not look like an image are dropped.
    pub fn images(&self) -> Vec<&MediaItem> {
        let mut images: Vec<&MediaItem> = self
            .media
            .iter()
            .filter(|m| m.role() == MediaRole::Image && m.extension_matches_role())
            .collect();

        if let Some(pos) = images.iter().position(|m| m.ordinal == 1) {
            if pos != 0 {
                let primary = images.remove(pos);
                images.insert(0, primary);
            }
        }

        images
    }

    pub fn primary_image(&self) -> Option<&MediaItem> {
        self.images().into_iter().next()
    }

    pub fn videos(&self) -> Vec<&MediaItem> {
        self.media
            .iter()
            .filter(|m| m.role() == MediaRole::Video && m.extension_matches_role())
            .collect()
    }

    pub fn documents(&self) -> Vec<&MediaItem> {
        self.media
            .iter()
            .filter(|m| m.role() == MediaRole::Document && m.extension_matches_role())
            .collect()
    }
}
