use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{app_with_dead_upstream, body_string, get};

#[test]
fn quick_search_requires_a_location() {
    let app = app_with_dead_upstream();

    let err = handle(get("/search?tab=rent"), &app).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn unknown_quick_tab_is_rejected() {
    let app = app_with_dead_upstream();

    let err = handle(get("/search?tab=lease&location=Pune"), &app).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn upstream_failure_renders_banner_not_error_page() {
    let app = app_with_dead_upstream();

    // The fetch fails, but the page still comes back 200 and interactive.
    let mut resp = handle(get("/search?tab=buy&location=Mumbai"), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("We couldn't load listings"));
    assert!(body.contains("Mumbai"));
}

#[test]
fn city_prefetch_failure_keeps_breadcrumb() {
    let app = app_with_dead_upstream();

    let mut resp = handle(get("/city?name=Pune"), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Pune"));
    assert!(body.contains("We couldn't load listings"));
}

#[test]
fn non_numeric_price_is_rejected() {
    let app = app_with_dead_upstream();

    let err = handle(get("/filter?min_price=cheap"), &app).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn inverted_price_range_is_rejected() {
    let app = app_with_dead_upstream();

    let err = handle(get("/filter?min_price=900&max_price=100"), &app).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}
