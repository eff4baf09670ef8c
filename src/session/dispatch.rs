// src/session/dispatch.rs
//
// The single entry point all four criteria sources converge on. The source
// tag only affects how the request is built; the result set is consumed
// identically downstream.

use crate::domain::criteria::{Criteria, SourceTag, UpstreamRequest};
use crate::session::SearchSession;
use crate::upstream::models::ResultEnvelope;
use crate::upstream::MarketClient;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

/// Resolve the request shape, call the matching endpoint, and install or
/// fail under the generation gate. Blocks for the duration of the fetch.
pub fn dispatch(
    client: &MarketClient,
    session: &mut SearchSession,
    criteria: Criteria,
    source: SourceTag,
) {
    let request = UpstreamRequest::resolve(&criteria, source);

    // The city-tile source never dispatches; its results arrive via seed.
    if request == UpstreamRequest::Prefetched {
        return;
    }

    let ticket = session.begin(criteria);

    let result = match request {
        UpstreamRequest::QuickSearch {
            preference,
            location,
        } => client.quick_search(preference, &location),
        UpstreamRequest::Coarse(body) => client.coarse_filter(&body),
        UpstreamRequest::Detailed(body) => client.detailed_filter(&body),
        UpstreamRequest::Prefetched => unreachable!("handled above"),
    };

    match result {
        Ok(envelope) => {
            session.store.install(ticket.generation, envelope);
        }
        Err(err) => {
            eprintln!("⚠️ upstream fetch failed: {err}");
            session.store.fail(ticket.generation, &err);
        }
    }
}

/// Same as `dispatch`, but runs the fetch on its own thread so the caller
/// stays responsive while the request is in flight. There is no transport
/// cancellation; superseded responses are discarded at install time.
pub fn dispatch_background(
    client: Arc<MarketClient>,
    session: Arc<Mutex<SearchSession>>,
    criteria: Criteria,
    source: SourceTag,
) -> JoinHandle<()> {
    std::thread::spawn(move || {
        let request = UpstreamRequest::resolve(&criteria, source);
        if request == UpstreamRequest::Prefetched {
            return;
        }

        let ticket = match session.lock() {
            Ok(mut guard) => guard.begin(criteria),
            Err(_) => return,
        };

        // Fetch with no lock held.
        let result = match request {
            UpstreamRequest::QuickSearch {
                preference,
                location,
            } => client.quick_search(preference, &location),
            UpstreamRequest::Coarse(body) => client.coarse_filter(&body),
            UpstreamRequest::Detailed(body) => client.detailed_filter(&body),
            UpstreamRequest::Prefetched => return,
        };

        let Ok(mut guard) = session.lock() else { return };
        match result {
            Ok(envelope) => {
                guard.store.install(ticket.generation, envelope);
            }
            Err(err) => {
                eprintln!("⚠️ upstream fetch failed: {err}");
                guard.store.fail(ticket.generation, &err);
            }
        }
    })
}

/// City-tile source: no network call, the envelope was fetched by the
/// triggering action. The synthesized criteria exists for breadcrumb text
/// only and is never re-dispatched.
pub fn seed_city(session: &mut SearchSession, city: &str, envelope: ResultEnvelope) {
    session.seed(Criteria::for_city(city), envelope);
}
