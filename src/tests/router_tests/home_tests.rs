use crate::errors::ServerError;
use crate::responses::html_error_response;
use crate::router::handle;
use crate::tests::utils::{app_with_dead_upstream, body_string, get};

#[test]
fn home_renders_even_when_upstream_is_down() {
    let app = app_with_dead_upstream();

    let mut resp = handle(get("/"), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Find your next property"));
    // Tiles degrade to a notice instead of taking the page down.
    assert!(body.contains("City list is unavailable"));
}

#[test]
fn unknown_route_is_not_found() {
    let app = app_with_dead_upstream();

    let err = handle(get("/no-such-page"), &app).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn error_pages_carry_the_mapped_status() {
    let app = app_with_dead_upstream();

    let err = handle(get("/no-such-page"), &app).unwrap_err();
    let resp = html_error_response(err);
    assert_eq!(resp.status(), 404);

    let err = handle(get("/search?tab=lease&location=Pune"), &app).unwrap_err();
    let mut resp = html_error_response(err);
    assert_eq!(resp.status(), 400);
    assert!(body_string(&mut resp).contains("unknown tab"));
}
