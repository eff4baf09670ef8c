use crate::responses::html_error_response;
use crate::router::{handle, App};
use crate::upstream::MarketClient;
use astra::Server;
use std::net::SocketAddr;

mod domain;
mod errors;
mod geos;
mod responses;
mod router;
mod search;
mod session;
mod templates;
mod upstream;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Upstream client (base URL from MARKET_API_BASE)
    let client = match MarketClient::from_env() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("❌ Upstream client init failed: {e}");
            std::process::exit(1);
        }
    };

    let app = App { client };

    // 2️⃣ Start the server
    let addr: SocketAddr = std::env::var("MARKET_BIND")
        .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
        .parse()
        .expect("MARKET_BIND is not a valid socket address");
    println!("Starting server at http://{addr}");

    let server = Server::bind(addr).max_workers(8);

    // 3️⃣ Serve requests, passing the app handle into the closure
    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => html_error_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
