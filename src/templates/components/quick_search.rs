use maud::{html, Markup};

const TABS: &[(&str, &str)] = &[
    ("buy", "Buy"),
    ("rent", "Rent"),
    ("pg", "PG"),
    ("land", "Plots & Land"),
];

/// Hero search: one tab per preference plus a free-form locality box. The
/// server does its own text matching on the location.
pub fn quick_search_form(active_tab: &str) -> Markup {
    html! {
        form class="quick-search" action="/search" method="get" {
            div class="tabs" role="tablist" {
                @for (value, label) in TABS {
                    label class="tab" {
                        input
                            type="radio"
                            name="tab"
                            value=(value)
                            checked[*value == active_tab];
                        (label)
                    }
                }
            }

            div class="search-row" {
                input
                    type="text"
                    name="location"
                    placeholder="Search locality, city..."
                    required;
                button type="submit" { "Search" }
            }
        }
    }
}
