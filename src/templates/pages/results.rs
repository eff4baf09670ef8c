// templates/pages/results.rs

use crate::domain::criteria::Criteria;
use crate::search::{ResultsPage, SortKey, ViewState};
use crate::session::StoreStatus;
use crate::templates::{
    components::{filter_sidebar, listing_card, pagination},
    desktop_layout,
};
use maud::{html, Markup};

pub struct ResultsVm<'a> {
    /// Breadcrumb text, e.g. "Residential · For Rent · Mumbai, Maharashtra".
    pub heading: String,
    pub status: StoreStatus,
    pub error: Option<&'a str>,
    pub criteria: Option<&'a Criteria>,
    pub derived: &'a ResultsPage,
    pub view: &'a ViewState,
    /// Route path of this result view, e.g. "/search".
    pub path: &'a str,
    /// Source params to carry through page/sort/query links (tab, location,
    /// state, ... — everything except q/sort/page).
    pub source_params: Vec<(String, String)>,
}

pub fn results_page(vm: &ResultsVm) -> Markup {
    let base = base_href(vm.path, &vm.source_params);

    desktop_layout(
        "Search Results",
        html! {
            main class="container results-layout" {
                (filter_sidebar(vm.criteria))

                section class="results" {
                    nav class="breadcrumb" {
                        a href="/" { "Home" }
                        " / "
                        (vm.heading)
                    }

                    (search_controls(vm))

                    @if vm.status == StoreStatus::Failed {
                        div class="banner error" {
                            p { "We couldn't load listings: " (vm.error.unwrap_or("unknown error")) }
                            p { "Re-apply your filters to try again." }
                        }
                    } @else if vm.derived.total_count == 0 {
                        p class="empty" { "No properties match your search." }
                    } @else {
                        p class="count" { (vm.derived.total_count) " properties found" }
                        div class="cards" {
                            @for listing in &vm.derived.items {
                                (listing_card(listing))
                            }
                        }
                    }

                    (pagination(&base, vm.view, vm.derived))
                }
            }
        },
    )
}

/// Free-text search box and sort select. Submitting re-derives the visible
/// slice; it never refetches, so the source params ride along as hidden
/// fields.
fn search_controls(vm: &ResultsVm) -> Markup {
    html! {
        form class="search-controls" action=(vm.path) method="get" {
            @for (key, value) in &vm.source_params {
                input type="hidden" name=(key) value=(value);
            }

            input
                type="search"
                name="q"
                placeholder="Search within results..."
                value=(vm.view.query);

            select name="sort" {
                @for key in SortKey::ALL {
                    option value=(key.as_param()) selected[key == vm.view.sort] { (key.label()) }
                }
            }

            button type="submit" { "Apply" }
        }
    }
}

fn base_href(path: &str, source_params: &[(String, String)]) -> String {
    if source_params.is_empty() {
        return path.to_string();
    }

    let mut qs = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in source_params {
        qs.append_pair(key, value);
    }
    format!("{path}?{}", qs.finish())
}
