use crate::domain::criteria::{
    AreaRange, Category, Criteria, ExtendedFacets, Geography, PreferenceFilter, PriceRange,
    QuickTab, SourceTag,
};
use crate::errors::ServerError;
use crate::geos;
use crate::responses::html_response;
use crate::responses::ResultResp;
use crate::search::SortKey;
use crate::session::{dispatch, seed_city, SearchSession};
use crate::templates::pages::{home_page, results_page, ResultsVm};
use crate::upstream::MarketClient;
use astra::Request;

#[derive(Clone)]
pub struct App {
    pub client: MarketClient,
}

pub fn handle(req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    let params = parse_query(&req);

    match (method, path) {
        ("GET", "/") => {
            // The tile grid is decoration on the landing page; a dead
            // upstream should not take the whole page down with it.
            let counts = match app.client.city_counts() {
                Ok(counts) => Some(counts),
                Err(e) => {
                    eprintln!("⚠️ city counts unavailable: {e}");
                    None
                }
            };
            html_response(home_page(counts.as_ref()))
        }

        ("GET", "/search") => quick_search(app, &params),
        ("GET", "/explore") => explore(app, &params),
        ("GET", "/filter") => detailed_filter(app, &params),
        ("GET", "/city") => city(app, &params),

        _ => Err(ServerError::NotFound),
    }
}

/// Quick (hero) tab search: preference token from the tab, raw locality
/// text; the upstream does its own text matching.
fn quick_search(app: &App, params: &[(String, String)]) -> ResultResp {
    let tab = match first(params, "tab") {
        Some(raw) => QuickTab::from_param(raw)
            .ok_or_else(|| ServerError::BadRequest(format!("unknown tab '{raw}'")))?,
        None => QuickTab::Buy,
    };
    let location = first(params, "location")
        .ok_or_else(|| ServerError::BadRequest("missing location".into()))?
        .to_string();

    let criteria = Criteria {
        preference: match tab {
            QuickTab::Buy => PreferenceFilter::Buy,
            QuickTab::Rent => PreferenceFilter::Rent,
            QuickTab::Pg => PreferenceFilter::Pg,
            QuickTab::Land => PreferenceFilter::All,
        },
        property_types: match tab {
            QuickTab::Land => vec!["Plot".to_string()],
            _ => Vec::new(),
        },
        geo: Geography {
            state_iso: None,
            state_name: None,
            city: Some(location),
        },
        ..Criteria::default()
    };

    let mut session = SearchSession::new();
    dispatch(&app.client, &mut session, criteria, SourceTag::QuickTab(tab));
    apply_view_params(&mut session, params);

    render_results(&session, "/search", params)
}

/// Category explorer modal: coarse criteria only, no price/area/amenity
/// facets.
fn explore(app: &App, params: &[(String, String)]) -> ResultResp {
    let criteria = Criteria {
        category: parse_category(params)?,
        property_types: all(params, "types"),
        preference: parse_preference(params)?,
        price: PriceRange::default(),
        geo: parse_geography(params),
        facets: None,
    };

    let mut session = SearchSession::new();
    dispatch(&app.client, &mut session, criteria, SourceTag::Explorer);
    apply_view_params(&mut session, params);

    render_results(&session, "/explore", params)
}

/// Detailed sidebar filter: coarse criteria plus the extended facets.
fn detailed_filter(app: &App, params: &[(String, String)]) -> ResultResp {
    let price = PriceRange::new(parse_i64(params, "min_price")?, parse_i64(params, "max_price")?)
        .map_err(ServerError::BadRequest)?;
    let area = AreaRange::new(parse_f64(params, "min_area")?, parse_f64(params, "max_area")?)
        .map_err(ServerError::BadRequest)?;

    let criteria = Criteria {
        category: parse_category(params)?,
        property_types: all(params, "types"),
        preference: parse_preference(params)?,
        price,
        geo: parse_geography(params),
        facets: Some(ExtendedFacets {
            furnishing: first_non_empty(params, "furnishing"),
            amenities: all(params, "amenities"),
            availability: first_non_empty(params, "availability"),
            area,
            age_ranges: all(params, "ages"),
        }),
    };

    let mut session = SearchSession::new();
    dispatch(&app.client, &mut session, criteria, SourceTag::DetailedFilter);
    apply_view_params(&mut session, params);

    render_results(&session, "/filter", params)
}

/// City-tile click: fetch the city's listings once, then seed the session
/// directly. The criteria is synthesized for breadcrumb text only.
fn city(app: &App, params: &[(String, String)]) -> ResultResp {
    let name = first(params, "name")
        .ok_or_else(|| ServerError::BadRequest("missing city name".into()))?
        .to_string();

    let mut session = SearchSession::new();
    match app.client.city_listings(&name) {
        Ok(envelope) => seed_city(&mut session, &name, envelope),
        Err(err) => {
            eprintln!("⚠️ city prefetch failed: {err}");
            let ticket = session.begin(Criteria::for_city(&name));
            session.store.fail(ticket.generation, &err);
        }
    }
    apply_view_params(&mut session, params);

    render_results(&session, "/city", params)
}

fn render_results(
    session: &SearchSession,
    path: &str,
    params: &[(String, String)],
) -> ResultResp {
    let derived = session.visible_page();
    let heading = session
        .store
        .criteria()
        .map(|c| c.describe())
        .unwrap_or_else(|| "All listings".to_string());

    let vm = ResultsVm {
        heading,
        status: session.store.status(),
        error: session.store.error(),
        criteria: session.store.criteria(),
        derived: &derived,
        view: session.view(),
        path,
        source_params: source_params(params),
    };

    html_response(results_page(&vm))
}

// ---- param plumbing ----

pub fn parse_query(req: &Request) -> Vec<(String, String)> {
    match req.uri().query() {
        Some(q) => url::form_urlencoded::parse(q.as_bytes())
            .into_owned()
            .collect(),
        None => Vec::new(),
    }
}

fn first<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

fn first_non_empty(params: &[(String, String)], key: &str) -> Option<String> {
    first(params, key)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn all(params: &[(String, String)], key: &str) -> Vec<String> {
    params
        .iter()
        .filter(|(k, v)| k == key && !v.is_empty())
        .map(|(_, v)| v.clone())
        .collect()
}

fn parse_i64(params: &[(String, String)], key: &str) -> Result<Option<i64>, ServerError> {
    match first(params, key) {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| ServerError::BadRequest(format!("{key} is not a number: '{raw}'"))),
    }
}

fn parse_f64(params: &[(String, String)], key: &str) -> Result<Option<f64>, ServerError> {
    match first(params, key) {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| ServerError::BadRequest(format!("{key} is not a number: '{raw}'"))),
    }
}

fn parse_category(params: &[(String, String)]) -> Result<Category, ServerError> {
    let raw = first(params, "category").unwrap_or("all");
    Category::from_param(raw)
        .ok_or_else(|| ServerError::BadRequest(format!("unknown category '{raw}'")))
}

fn parse_preference(params: &[(String, String)]) -> Result<PreferenceFilter, ServerError> {
    let raw = first(params, "preference").unwrap_or("all");
    PreferenceFilter::from_param(raw)
        .ok_or_else(|| ServerError::BadRequest(format!("unknown preference '{raw}'")))
}

fn parse_geography(params: &[(String, String)]) -> Geography {
    let state_iso = first_non_empty(params, "state");
    let state_name = state_iso
        .as_deref()
        .and_then(geos::state_name)
        .map(str::to_string);

    Geography {
        state_iso,
        state_name,
        city: first_non_empty(params, "city"),
    }
}

fn apply_view_params(session: &mut SearchSession, params: &[(String, String)]) {
    if let Some(q) = first(params, "q") {
        session.set_query(q);
    }
    if let Some(sort) = first(params, "sort") {
        session.set_sort(SortKey::from_param(sort));
    }
    if let Some(page) = first(params, "page").and_then(|p| p.parse().ok()) {
        session.set_page(page);
    }
}

/// Everything except the view-state params; these ride along on page,
/// sort and query links so the result view keeps its identity.
fn source_params(params: &[(String, String)]) -> Vec<(String, String)> {
    params
        .iter()
        .filter(|(k, _)| !matches!(k.as_str(), "q" | "sort" | "page"))
        .cloned()
        .collect()
}
