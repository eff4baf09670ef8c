pub mod criteria;
pub mod listing;
pub mod normalize;

pub use criteria::{Category, Criteria, PreferenceFilter, QuickTab, SourceTag, UpstreamRequest};
pub use listing::{Listing, ListingKind, MediaItem, Preference};
pub use normalize::{normalize, Normalized, NormalizationWarning};
