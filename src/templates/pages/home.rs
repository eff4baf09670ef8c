// templates/pages/home.rs

use crate::templates::{components::quick_search_form, desktop_layout};
use crate::upstream::models::CityCounts;
use maud::{html, Markup};

/// Landing page: hero quick search plus one tile per city with a live
/// listing count. `counts` of None means the summary endpoint failed; the
/// page still renders, just without tiles.
pub fn home_page(counts: Option<&CityCounts>) -> Markup {
    desktop_layout(
        "Home",
        html! {
            main class="container" {
                section class="hero" {
                    h1 { "Find your next property" }
                    (quick_search_form("buy"))
                }

                section class="city-tiles" {
                    h2 { "Browse by city" }
                    @match counts {
                        Some(counts) => {
                            div class="tiles" {
                                @for (city, count) in counts {
                                    a class="tile" href=(city_href(city)) {
                                        strong { (city) }
                                        span { (count) " properties" }
                                    }
                                }
                            }
                        },
                        None => {
                            p class="banner error" { "City list is unavailable right now." }
                        },
                    }
                }
            }
        },
    )
}

fn city_href(city: &str) -> String {
    let mut qs = url::form_urlencoded::Serializer::new(String::new());
    qs.append_pair("name", city);
    format!("/city?{}", qs.finish())
}
