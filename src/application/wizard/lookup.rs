use crate::domain::{entities::PackageRecord, repositories::PackageDirectory};
use anyhow::Result;

/// Repository search panel state. Every search gets a fresh generation; a
/// response is applied only if it answers the newest outstanding search.
#[derive(Debug, Clone, Default)]
pub struct LookupState {
    panel_open: bool,
    query: String,
    generation: u64,
    in_flight: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub generation: u64,
    pub query: String,
}

#[derive(Debug)]
pub struct LookupResponse {
    pub generation: u64,
    pub query: String,
    pub result: Result<Option<PackageRecord>>,
}

impl LookupRequest {
    pub async fn run(self, directory: &dyn PackageDirectory) -> LookupResponse {
        tracing::debug!("Running lookup #{} for '{}'", self.generation, self.query);
        let result = directory.find_by_identifier(&self.query).await;
        LookupResponse {
            generation: self.generation,
            query: self.query,
            result,
        }
    }
}

impl LookupState {
    pub fn is_panel_open(&self) -> bool {
        self.panel_open
    }

    pub fn open_panel(&mut self) {
        self.panel_open = true;
    }

    pub fn close_panel(&mut self) {
        self.panel_open = false;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    pub fn is_searching(&self) -> bool {
        self.in_flight.is_some()
    }

    pub(crate) fn start(&mut self) -> LookupRequest {
        self.generation += 1;
        self.in_flight = Some(self.generation);
        LookupRequest {
            generation: self.generation,
            query: self.query.trim().to_string(),
        }
    }

    /// Claims the response if it is current; stale responses leave the state untouched.
    pub(crate) fn finish(&mut self, generation: u64) -> bool {
        if self.in_flight != Some(generation) {
            return false;
        }
        self.in_flight = None;
        true
    }

    /// Invalidates any outstanding search.
    pub(crate) fn supersede(&mut self) {
        self.generation += 1;
        self.in_flight = None;
    }
}
