//! Scripted in-memory gazetteer for tests.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::error::GazetteerError;
use super::model::{Candidate, SearchQuery};
use super::GazetteerClient;
use crate::bias::CountryBias;

type MockKey = (String, Option<String>);

/// Mock client answering from scripted responses, keyed by (name, bias).
///
/// Unscripted queries return no candidates. Every search is recorded so tests
/// can assert how often (and with what parameters) the core reached out.
#[derive(Default)]
pub struct MockGazetteerClient {
    responses: Mutex<HashMap<MockKey, Vec<Candidate>>>,
    failures: Mutex<HashMap<String, GazetteerError>>,
    calls: Mutex<Vec<SearchQuery>>,
}

impl MockGazetteerClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts candidates for unbiased queries on `name`.
    pub fn respond(&self, name: &str, candidates: Vec<Candidate>) {
        self.responses
            .lock()
            .insert((name.to_string(), None), candidates);
    }

    /// Scripts candidates for queries on `name` carrying `bias`.
    pub fn respond_biased(&self, name: &str, bias: &CountryBias, candidates: Vec<Candidate>) {
        self.responses
            .lock()
            .insert((name.to_string(), Some(bias.signature())), candidates);
    }

    /// Scripts a transport-level failure for any query on `name`.
    pub fn fail(&self, name: &str, error: GazetteerError) {
        self.failures.lock().insert(name.to_string(), error);
    }

    /// Returns all recorded queries, in call order.
    pub fn calls(&self) -> Vec<SearchQuery> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Number of recorded queries for `name` (any bias).
    pub fn calls_for(&self, name: &str) -> usize {
        self.calls.lock().iter().filter(|q| q.name == name).count()
    }
}

#[async_trait]
impl GazetteerClient for MockGazetteerClient {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Candidate>, GazetteerError> {
        self.calls.lock().push(query.clone());

        if let Some(error) = self.failures.lock().get(&query.name) {
            return Err(error.clone());
        }

        let key = (
            query.name.clone(),
            query.bias.as_ref().map(|b| b.signature()),
        );
        Ok(self.responses.lock().get(&key).cloned().unwrap_or_default())
    }
}
