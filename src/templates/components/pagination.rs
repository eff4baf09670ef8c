use crate::search::{ResultsPage, ViewState};
use maud::{html, Markup};

/// Link to another page of the same result view, preserving the query and
/// sort params. `base` is the route path plus its source params
/// (e.g. "/search?tab=rent&location=Mumbai").
pub fn page_href(base: &str, view: &ViewState, page: usize) -> String {
    let mut qs = url::form_urlencoded::Serializer::new(String::new());
    if !view.query.is_empty() {
        qs.append_pair("q", &view.query);
    }
    qs.append_pair("sort", view.sort.as_param());
    qs.append_pair("page", &page.to_string());

    let sep = if base.contains('?') { '&' } else { '?' };
    format!("{base}{sep}{}", qs.finish())
}

/// Windowed page-number controls: at most ten page links, prev/next at the
/// edges. Renders nothing for a single page.
pub fn pagination(base: &str, view: &ViewState, page: &ResultsPage) -> Markup {
    html! {
        @if page.total_pages > 1 {
            nav class="pagination" {
                @if page.current_page > 0 {
                    a class="page prev" href=(page_href(base, view, page.current_page - 1)) { "‹ Prev" }
                }

                @for &number in &page.page_window {
                    @if number - 1 == page.current_page {
                        span class="page current" { (number) }
                    } @else {
                        a class="page" href=(page_href(base, view, number - 1)) { (number) }
                    }
                }

                @if page.current_page + 1 < page.total_pages {
                    a class="page next" href=(page_href(base, view, page.current_page + 1)) { "Next ›" }
                }
            }
        }
    }
}
