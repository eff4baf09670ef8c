use crate::router::App;
use crate::upstream::MarketClient;
use std::io::Read;

/// App wired to a port nothing listens on: every upstream call fails fast
/// with a connection error, which is exactly what the failure-path tests
/// want.
pub fn app_with_dead_upstream() -> App {
    let client = MarketClient::new("http://127.0.0.1:9").expect("client builds");
    App { client }
}

pub fn get(path: &str) -> astra::Request {
    http::Request::builder()
        .method(http::Method::GET)
        .uri(path)
        .body(astra::Body::empty())
        .expect("test request builds")
}

pub fn body_string(resp: &mut astra::Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut bytes)
        .expect("body reads");
    String::from_utf8(bytes).expect("body is utf-8")
}
