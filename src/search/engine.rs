// src/search/engine.rs
//
// Pure derivation: free-text filter -> stable multi-key sort -> paged slice
// -> windowed page-number index. No network, no shared state; identical
// inputs always produce identical output.

use crate::domain::Listing;
use crate::search::view_state::{SortKey, ViewState};
use std::cmp::Ordering;

pub const PAGE_SIZE: usize = 10;
const WINDOW_SIZE: usize = 10;

/// The visible slice plus everything the pagination controls need.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsPage {
    pub items: Vec<Listing>,
    pub total_count: usize,
    /// Zero-based, already clamped.
    pub current_page: usize,
    pub total_pages: usize,
    /// One-based page numbers shown in the controls, at most WINDOW_SIZE.
    pub page_window: Vec<usize>,
}

pub fn derive(listings: &[Listing], view: &ViewState) -> ResultsPage {
    let mut visible: Vec<&Listing> = if view.query.is_empty() {
        listings.iter().collect()
    } else {
        let needle = view.query.to_lowercase();
        listings
            .iter()
            .filter(|l| matches_query(l, &needle))
            .collect()
    };

    // Vec::sort_by is stable, so ties keep the normalizer's
    // residential-then-commercial concatenation order.
    visible.sort_by(|a, b| compare(a, b, view.sort));

    let total_count = visible.len();
    let total_pages = std::cmp::max(1, total_count.div_ceil(PAGE_SIZE));

    // Clamp rather than error: a filter that shrinks the result set must
    // never leave the page index pointing past the end.
    let current_page = std::cmp::min(view.page, total_pages - 1);

    let start = current_page * PAGE_SIZE;
    let end = std::cmp::min(start + PAGE_SIZE, total_count);
    let items = visible[start..end].iter().map(|l| (*l).clone()).collect();

    ResultsPage {
        items,
        total_count,
        current_page,
        total_pages,
        page_window: page_window(current_page, total_pages),
    }
}

/// Case-insensitive substring match over the text-bearing fields. Not
/// tokenized, not fuzzy.
fn matches_query(listing: &Listing, needle: &str) -> bool {
    [
        &listing.title,
        &listing.description,
        &listing.city,
        &listing.locality,
        &listing.state,
    ]
    .iter()
    .any(|haystack| haystack.to_lowercase().contains(needle))
}

fn compare(a: &Listing, b: &Listing, key: SortKey) -> Ordering {
    match key {
        // Descending by approval time; never-approved listings go last.
        SortKey::Newest => cmp_nulls_last(a.approved_at, b.approved_at, true),
        // Nulls last in BOTH directions: an unpriced listing must never be
        // mistaken for the cheapest.
        SortKey::PriceAsc => cmp_nulls_last(a.price, b.price, false),
        SortKey::PriceDesc => cmp_nulls_last(a.price, b.price, true),
        SortKey::AreaAsc => cmp_f64_nulls_last(a.area, b.area, false),
        SortKey::AreaDesc => cmp_f64_nulls_last(a.area, b.area, true),
    }
}

fn cmp_nulls_last<T: Ord>(a: Option<T>, b: Option<T>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => {
            if descending {
                y.cmp(&x)
            } else {
                x.cmp(&y)
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn cmp_f64_nulls_last(a: Option<f64>, b: Option<f64>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => {
            if descending {
                y.total_cmp(&x)
            } else {
                x.total_cmp(&y)
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Page numbers to show in the controls: the window of 10 one-based pages
/// containing `current_page`. Computed from the page index and total alone,
/// independent of the list slice.
pub fn page_window(current_page: usize, total_pages: usize) -> Vec<usize> {
    let page1 = current_page + 1;
    let first = ((page1 - 1) / WINDOW_SIZE) * WINDOW_SIZE + 1;
    let last = std::cmp::min(first + WINDOW_SIZE - 1, total_pages);
    (first..=last).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::listing::{
        CommercialDetails, KindDetails, ListingKind, ResidentialDetails,
    };
    use chrono::{DateTime, TimeZone, Utc};

    fn approved(hour: u32) -> Option<DateTime<Utc>> {
        Some(Utc.with_ymd_and_hms(2024, 3, 1, hour, 0, 0).unwrap())
    }

    fn listing(
        kind: ListingKind,
        id: i64,
        city: &str,
        price: Option<i64>,
        area: Option<f64>,
        approved_at: Option<DateTime<Utc>>,
    ) -> Listing {
        let details = match kind {
            ListingKind::Residential => KindDetails::Residential(ResidentialDetails {
                bedrooms: Some(2),
                bathrooms: Some(1),
            }),
            ListingKind::Commercial => KindDetails::Commercial(CommercialDetails {
                cabins: Some(3),
                meeting_room: Some(true),
                washroom: Some(true),
            }),
        };

        Listing {
            id,
            title: format!("Listing {id}"),
            description: String::new(),
            price,
            area,
            preference: None,
            property_type: "Apartment".into(),
            locality: String::new(),
            city: city.into(),
            state: "Maharashtra".into(),
            created_at: None,
            approved_at,
            featured: false,
            verified: false,
            media: Vec::new(),
            details,
        }
    }

    /// 12 listings: 7 residential then 5 commercial, as the normalizer
    /// would emit them. Three have no price (r3, c1, c4); four are in
    /// Mumbai (r1, r4, c2, c5).
    fn fixture() -> Vec<Listing> {
        use ListingKind::{Commercial as C, Residential as R};
        vec![
            listing(R, 1, "Mumbai", Some(90), Some(500.0), approved(7)),
            listing(R, 2, "Pune", Some(40), Some(350.0), approved(11)),
            listing(R, 3, "Nagpur", None, Some(800.0), approved(2)),
            listing(R, 4, "Mumbai", Some(75), None, approved(9)),
            listing(R, 5, "Pune", Some(40), Some(350.0), approved(5)),
            listing(R, 6, "Nashik", Some(120), Some(1200.0), approved(12)),
            listing(R, 7, "Thane", Some(55), Some(410.0), approved(1)),
            listing(C, 1, "Pune", None, Some(2000.0), approved(8)),
            listing(C, 2, "Mumbai", Some(40), Some(350.0), approved(10)),
            listing(C, 3, "Nagpur", Some(300), None, approved(4)),
            listing(C, 4, "Thane", None, Some(950.0), approved(6)),
            listing(C, 5, "Mumbai", Some(60), Some(700.0), approved(3)),
        ]
    }

    fn view(query: &str, sort: SortKey, page: usize) -> ViewState {
        ViewState {
            query: query.into(),
            sort,
            page,
        }
    }

    /// All items across every page, in derived order.
    fn all_items(listings: &[Listing], query: &str, sort: SortKey) -> Vec<Listing> {
        let mut out = Vec::new();
        let mut page = 0;
        loop {
            let derived = derive(listings, &view(query, sort, page));
            out.extend(derived.items);
            page += 1;
            if page >= derived.total_pages {
                return out;
            }
        }
    }

    #[test]
    fn derivation_is_idempotent() {
        let listings = fixture();
        let vs = view("pune", SortKey::PriceAsc, 0);
        assert_eq!(derive(&listings, &vs), derive(&listings, &vs));
    }

    #[test]
    fn newest_pages_split_ten_and_two() {
        let listings = fixture();

        let page0 = derive(&listings, &view("", SortKey::Newest, 0));
        assert_eq!(page0.total_count, 12);
        assert_eq!(page0.total_pages, 2);
        assert_eq!(page0.items.len(), 10);

        let page1 = derive(&listings, &view("", SortKey::Newest, 1));
        assert_eq!(page1.items.len(), 2);

        let all = all_items(&listings, "", SortKey::Newest);
        let stamps: Vec<_> = all.iter().map(|l| l.approved_at.unwrap()).collect();
        let mut expected = stamps.clone();
        expected.sort_by(|a, b| b.cmp(a));
        assert_eq!(stamps, expected);
    }

    #[test]
    fn null_prices_land_at_positions_ten_through_twelve() {
        let listings = fixture();
        let all = all_items(&listings, "", SortKey::PriceAsc);

        assert!(all[..9].iter().all(|l| l.price.is_some()));
        assert!(all[9..].iter().all(|l| l.price.is_none()));
        assert_eq!(all[9..].len(), 3);
    }

    #[test]
    fn nulls_sort_last_for_every_key_and_direction() {
        let listings = fixture();

        for sort in SortKey::ALL {
            let all = all_items(&listings, "", sort);
            let keys: Vec<bool> = all
                .iter()
                .map(|l| match sort {
                    SortKey::Newest => l.approved_at.is_none(),
                    SortKey::PriceAsc | SortKey::PriceDesc => l.price.is_none(),
                    SortKey::AreaAsc | SortKey::AreaDesc => l.area.is_none(),
                })
                .collect();

            // Once a null appears, everything after it must be null too.
            let first_null = keys.iter().position(|&missing| missing);
            if let Some(pos) = first_null {
                assert!(
                    keys[pos..].iter().all(|&missing| missing),
                    "{sort:?}: non-null key after a null one"
                );
            }
        }
    }

    #[test]
    fn equal_keys_keep_normalizer_order() {
        let listings = fixture();
        let all = all_items(&listings, "", SortKey::PriceAsc);

        // r2, r5 and c2 all cost 40; input order is r2, r5, c2.
        let forty: Vec<_> = all
            .iter()
            .filter(|l| l.price == Some(40))
            .map(|l| l.identity())
            .collect();
        assert_eq!(
            forty,
            vec![
                (ListingKind::Residential, 2),
                (ListingKind::Residential, 5),
                (ListingKind::Commercial, 2),
            ]
        );
    }

    #[test]
    fn query_filters_and_resets_out_of_range_page() {
        let listings = fixture();

        // User was on page 1, then searched; only 4 Mumbai listings match.
        let derived = derive(&listings, &view("Mumbai", SortKey::Newest, 1));
        assert_eq!(derived.total_count, 4);
        assert_eq!(derived.total_pages, 1);
        assert_eq!(derived.current_page, 0);
        assert!(derived.items.iter().all(|l| l.city == "Mumbai"));
    }

    #[test]
    fn query_is_case_insensitive_substring() {
        let listings = fixture();
        let derived = derive(&listings, &view("mumBAI", SortKey::Newest, 0));
        assert_eq!(derived.total_count, 4);

        // Substring, not token: "aha" matches "Maharashtra" via state.
        let derived = derive(&listings, &view("aha", SortKey::Newest, 0));
        assert_eq!(derived.total_count, 12);
    }

    #[test]
    fn page_index_is_always_in_bounds() {
        let listings = fixture();
        for page in [0usize, 1, 2, 7, 100] {
            for query in ["", "Mumbai", "no-such-city"] {
                let derived = derive(&listings, &view(query, SortKey::Newest, page));
                assert!(derived.current_page < derived.total_pages);
            }
        }
    }

    #[test]
    fn empty_result_set_still_has_one_page() {
        let derived = derive(&[], &view("", SortKey::Newest, 3));
        assert_eq!(derived.total_count, 0);
        assert_eq!(derived.total_pages, 1);
        assert_eq!(derived.current_page, 0);
        assert!(derived.items.is_empty());
        assert_eq!(derived.page_window, vec![1]);
    }

    #[test]
    fn page_window_is_a_ten_page_band() {
        assert_eq!(page_window(0, 3), vec![1, 2, 3]);
        assert_eq!(page_window(4, 23), (1..=10).collect::<Vec<_>>());
        // Zero-based page 14 is one-based 15, which lives in the 11..20 band.
        assert_eq!(page_window(14, 23), (11..=20).collect::<Vec<_>>());
        assert_eq!(page_window(21, 23), vec![21, 22, 23]);
    }
}
