//! Canned place search provider

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use wayfinder_core::navigation::Place;

use crate::error::SearchError;
use crate::feeds::{PlaceSearchProvider, SearchRegion};

/// One recorded call to [`StaticSearchProvider::search`]
#[derive(Clone, Debug, PartialEq)]
pub struct SearchCall {
    pub query: String,
    pub region: Option<SearchRegion>,
}

/// Provider that answers from a fixed table
///
/// Unknown queries return no places. Clones share the call log, so a
/// test can keep one clone and hand the other to the navigator.
#[derive(Clone, Debug, Default)]
pub struct StaticSearchProvider {
    results: HashMap<String, Vec<Place>>,
    faults: HashMap<String, SearchError>,
    latency: Duration,
    query_latency: HashMap<String, Duration>,
    calls: Arc<Mutex<Vec<SearchCall>>>,
}

impl StaticSearchProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_results(mut self, query: impl Into<String>, places: Vec<Place>) -> Self {
        self.results.insert(query.into(), places);
        self
    }

    /// Make `query` fail with [`SearchError::Unavailable`]
    pub fn with_failure(self, query: impl Into<String>) -> Self {
        let query = query.into();
        let err = SearchError::Unavailable(format!("no route to index for {query}"));
        self.with_fault(query, err)
    }

    /// Make `query` fail with [`SearchError::Rejected`]
    pub fn with_rejection(self, query: impl Into<String>) -> Self {
        let query = query.into();
        let err = SearchError::Rejected(format!("{query:?} is not a valid place query"));
        self.with_fault(query, err)
    }

    /// Make `query` fail with [`SearchError::Timeout`] once its latency elapses
    pub fn with_timeout(self, query: impl Into<String>) -> Self {
        self.with_fault(query, SearchError::Timeout("place search"))
    }

    fn with_fault(mut self, query: impl Into<String>, err: SearchError) -> Self {
        self.faults.insert(query.into(), err);
        self
    }

    /// Delay applied to every lookup
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Delay for one query, overriding [`Self::with_latency`]
    pub fn with_query_latency(mut self, query: impl Into<String>, latency: Duration) -> Self {
        self.query_latency.insert(query.into(), latency);
        self
    }

    pub fn calls(&self) -> Vec<SearchCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Queries in the order they reached the provider
    pub fn queries(&self) -> Vec<String> {
        self.calls().into_iter().map(|call| call.query).collect()
    }

    pub fn call_count(&self) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[async_trait]
impl PlaceSearchProvider for StaticSearchProvider {
    async fn search(
        &self,
        query: &str,
        region: Option<SearchRegion>,
    ) -> Result<Vec<Place>, SearchError> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(SearchCall {
                query: query.to_string(),
                region,
            });

        let latency = self
            .query_latency
            .get(query)
            .copied()
            .unwrap_or(self.latency);
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }

        if let Some(err) = self.faults.get(query) {
            return Err(err.clone());
        }
        Ok(self.results.get(query).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfinder_core::navigation::{Coordinate, PlaceId};

    fn cafe() -> Place {
        Place::new(
            PlaceId::new("cafe-1"),
            "Cafe",
            "2-3 Chuo",
            Coordinate::new(35.0005, 139.0),
        )
    }

    #[tokio::test]
    async fn answers_from_table_and_records_calls() {
        let provider = StaticSearchProvider::new().with_results("cafe", vec![cafe()]);
        let observer = provider.clone();

        let places = provider.search("cafe", None).await.unwrap();
        assert_eq!(places, vec![cafe()]);
        assert!(provider.search("unknown", None).await.unwrap().is_empty());

        assert_eq!(observer.queries(), vec!["cafe", "unknown"]);
        assert_eq!(observer.call_count(), 2);
    }

    #[tokio::test]
    async fn failing_query_reports_error() {
        let provider = StaticSearchProvider::new().with_failure("museum");
        let err = provider.search("museum", None).await.unwrap_err();
        assert!(matches!(err, SearchError::Unavailable(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn rejection_and_timeout_faults() {
        let provider = StaticSearchProvider::new()
            .with_rejection("???")
            .with_timeout("slow")
            .with_query_latency("slow", Duration::from_secs(5));

        let err = provider.search("???", None).await.unwrap_err();
        assert!(matches!(err, SearchError::Rejected(_)));

        let start = tokio::time::Instant::now();
        let err = provider.search("slow", None).await.unwrap_err();
        assert_eq!(err, SearchError::Timeout("place search"));
        assert!(start.elapsed() >= Duration::from_secs(5));

        assert_eq!(provider.call_count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn per_query_latency_overrides_default() {
        let provider = StaticSearchProvider::new()
            .with_latency(Duration::from_millis(100))
            .with_query_latency("slow", Duration::from_secs(2));

        let start = tokio::time::Instant::now();
        provider.search("slow", None).await.unwrap();
        assert!(start.elapsed() >= Duration::from_secs(2));

        let start = tokio::time::Instant::now();
        provider.search("fast", None).await.unwrap();
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(100));
        assert!(elapsed < Duration::from_secs(1));
    }
}
