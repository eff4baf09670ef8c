// src/session/mod.rs
//
// One page view's worth of state: the result store plus the client-only
// view state, wired so the lifecycle rules hold (view resets when criteria
// changes, survives a same-criteria refresh).

mod dispatch;
mod store;

pub use dispatch::{dispatch, dispatch_background, seed_city};
pub use store::{BeginTicket, Generation, ResultStore, StoreStatus};

use crate::domain::criteria::Criteria;
use crate::search::{derive, ResultsPage, SortKey, ViewState};
use crate::upstream::models::ResultEnvelope;

pub struct SearchSession {
    pub store: ResultStore,
    view: ViewState,
}

impl SearchSession {
    pub fn new() -> Self {
        Self {
            store: ResultStore::new(),
            view: ViewState::default(),
        }
    }

    /// Start a new request via the store, resetting the view state when the
    /// criteria actually changed. A detailed-filter refresh with equal
    /// criteria keeps query/sort/page intact.
    pub fn begin(&mut self, criteria: Criteria) -> BeginTicket {
        let ticket = self.store.begin(criteria);
        if ticket.criteria_changed {
            self.view.reset();
        }
        ticket
    }

    /// City-tile seeding. A tile click is always a new page view, so the
    /// view state resets unconditionally.
    pub fn seed(&mut self, criteria: Criteria, envelope: ResultEnvelope) {
        self.store.seed(criteria, envelope);
        self.view.reset();
    }

    /// The derived visible slice. Pure: calling this repeatedly without a
    /// state change returns the same page.
    pub fn visible_page(&self) -> ResultsPage {
        derive(self.store.listings(), &self.view)
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.view.query = query.into();
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.view.sort = sort;
    }

    pub fn set_page(&mut self, page: usize) {
        self.view.page = page;
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}
