// src/session/store.rs
//
// In-memory holder of the active criteria and the result set it produced,
// as one atomic unit. A monotonically increasing generation counter tags
// every in-flight request; responses are applied in generation order, not
// arrival order, so a slow early response can never clobber a fast later
// one. Stale responses are discarded silently — that is normal resolution,
// not an error.

use crate::domain::criteria::Criteria;
use crate::domain::normalize::{normalize, NormalizationWarning};
use crate::domain::Listing;
use crate::upstream::models::ResultEnvelope;
use crate::upstream::FetchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreStatus {
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Opaque tag handed out by `begin` and required back by `install`/`fail`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

#[derive(Debug, Clone, Copy)]
pub struct BeginTicket {
    pub generation: Generation,
    /// False when the same criteria is re-applied (detailed-filter refresh);
    /// the caller keeps its ViewState in that case.
    pub criteria_changed: bool,
}

pub struct ResultStore {
    generation: u64,
    status: StoreStatus,
    criteria: Option<Criteria>,
    listings: Vec<Listing>,
    warnings: Vec<NormalizationWarning>,
    error: Option<String>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self {
            generation: 0,
            status: StoreStatus::Idle,
            criteria: None,
            listings: Vec::new(),
            warnings: Vec::new(),
            error: None,
        }
    }

    /// Start a new request. Loading is re-enterable from any state: a newer
    /// request simply supersedes whatever was in flight.
    pub fn begin(&mut self, criteria: Criteria) -> BeginTicket {
        let criteria_changed = self.criteria.as_ref() != Some(&criteria);
        self.generation += 1;
        self.status = StoreStatus::Loading;
        self.criteria = Some(criteria);

        BeginTicket {
            generation: Generation(self.generation),
            criteria_changed,
        }
    }

    /// Install a response. Returns false (and changes nothing) when the
    /// ticket is stale. On success the result set is replaced wholesale;
    /// partial merges are disallowed.
    pub fn install(&mut self, generation: Generation, envelope: ResultEnvelope) -> bool {
        if generation.0 != self.generation {
            return false;
        }

        let normalized = normalize(envelope);
        for warning in &normalized.warnings {
            eprintln!("⚠️ {warning}");
        }

        self.listings = normalized.listings;
        self.warnings = normalized.warnings;
        self.error = None;
        self.status = StoreStatus::Loaded;
        true
    }

    /// Record a failed request. The result set is cleared but the criteria
    /// is NOT rolled back, so re-applying the same filters acts as a retry.
    pub fn fail(&mut self, generation: Generation, err: &FetchError) -> bool {
        if generation.0 != self.generation {
            return false;
        }

        self.listings.clear();
        self.warnings.clear();
        self.error = Some(err.to_string());
        self.status = StoreStatus::Failed;
        true
    }

    /// City-tile path: the envelope was already fetched by the triggering
    /// action, so it is installed directly with no Loading phase. The
    /// criteria here is synthesized for breadcrumb display only.
    pub fn seed(&mut self, criteria: Criteria, envelope: ResultEnvelope) {
        let ticket = self.begin(criteria);
        self.install(ticket.generation, envelope);
    }

    pub fn status(&self) -> StoreStatus {
        self.status
    }

    pub fn criteria(&self) -> Option<&Criteria> {
        self.criteria.as_ref()
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn warnings(&self) -> &[NormalizationWarning] {
        &self.warnings
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl Default for ResultStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::criteria::{Category, Criteria};
    use serde_json::json;

    fn envelope(ids: &[i64]) -> ResultEnvelope {
        let residential: Vec<_> = ids
            .iter()
            .map(|id| json!({ "id": id, "title": format!("Listing {id}") }))
            .collect();
        serde_json::from_value(json!({
            "residential": residential,
            "commercial": null,
        }))
        .unwrap()
    }

    fn residential_criteria() -> Criteria {
        Criteria {
            category: Category::Residential,
            ..Criteria::default()
        }
    }

    #[test]
    fn late_response_for_old_generation_is_discarded() {
        let mut store = ResultStore::new();

        let ticket_a = store.begin(Criteria::default());
        let ticket_b = store.begin(residential_criteria());

        // B's response arrives first and is installed.
        assert!(store.install(ticket_b.generation, envelope(&[20, 21])));
        // A's slower response shows up afterwards and must be dropped.
        assert!(!store.install(ticket_a.generation, envelope(&[10])));

        let ids: Vec<_> = store.listings().iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![20, 21]);
        assert_eq!(store.status(), StoreStatus::Loaded);
        assert_eq!(store.criteria(), Some(&residential_criteria()));
    }

    #[test]
    fn stale_failure_is_also_discarded() {
        let mut store = ResultStore::new();

        let ticket_a = store.begin(Criteria::default());
        let ticket_b = store.begin(Criteria::default());
        assert!(store.install(ticket_b.generation, envelope(&[1])));

        let err = FetchError::Network("timed out".into());
        assert!(!store.fail(ticket_a.generation, &err));
        assert_eq!(store.status(), StoreStatus::Loaded);
        assert_eq!(store.listings().len(), 1);
    }

    #[test]
    fn failure_clears_results_but_keeps_criteria() {
        let mut store = ResultStore::new();

        let ticket = store.begin(residential_criteria());
        assert!(store.install(ticket.generation, envelope(&[1, 2])));

        let ticket = store.begin(residential_criteria());
        let err = FetchError::Upstream {
            status: 502,
            message: "bad gateway".into(),
        };
        assert!(store.fail(ticket.generation, &err));

        assert_eq!(store.status(), StoreStatus::Failed);
        assert!(store.listings().is_empty());
        assert!(store.error().unwrap().contains("502"));
        // Criteria stays, so re-applying the same filters is a no-op retry.
        assert_eq!(store.criteria(), Some(&residential_criteria()));
    }

    #[test]
    fn reapplying_equal_criteria_reports_unchanged() {
        let mut store = ResultStore::new();

        let first = store.begin(residential_criteria());
        assert!(first.criteria_changed);
        store.install(first.generation, envelope(&[1]));

        let second = store.begin(residential_criteria());
        assert!(!second.criteria_changed);

        let third = store.begin(Criteria::default());
        assert!(third.criteria_changed);
    }

    #[test]
    fn seed_installs_immediately() {
        let mut store = ResultStore::new();
        store.seed(Criteria::for_city("Pune"), envelope(&[4, 5, 6]));

        assert_eq!(store.status(), StoreStatus::Loaded);
        assert_eq!(store.listings().len(), 3);
        assert_eq!(
            store.criteria().unwrap().geo.city.as_deref(),
            Some("Pune")
        );
    }

    #[test]
    fn install_replaces_wholesale() {
        let mut store = ResultStore::new();

        let t1 = store.begin(Criteria::default());
        store.install(t1.generation, envelope(&[1, 2, 3]));

        let t2 = store.begin(Criteria::default());
        store.install(t2.generation, envelope(&[9]));

        let ids: Vec<_> = store.listings().iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![9]);
    }
}
