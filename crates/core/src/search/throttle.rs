//! Search submission policy: cache, rate limit, stale-response filtering
//!
//! `SearchThrottle` decides what happens to a debounced query. It never
//! performs the lookup itself; the owner dispatches the provider call and
//! reports the outcome back with the ticket it was given.
//!
//! Every published result set advances a sequence number. A completion
//! whose ticket is older than the latest one is cached but not published,
//! so a slow response cannot overwrite newer results.

use alloc::string::String;
use alloc::vec::Vec;

use super::cache::SearchCache;
use super::rate_limiter::RateLimiter;
use crate::navigation::Place;
use crate::traits::TimeSource;

/// Identifies one dispatched lookup
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchTicket {
    seq: u64,
}

impl SearchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// What to do with a submitted query
#[derive(Clone, Debug, PartialEq)]
pub enum SearchDecision {
    /// Exact cache hit; publish these without calling the provider
    Cached(Vec<Place>),
    /// Call the provider and report back with this ticket
    Dispatch(SearchTicket),
    /// Rate limit reached; keep showing whatever is displayed
    Dropped,
}

/// Cache + rate limiter + request sequencing for place search
#[derive(Clone, Debug)]
pub struct SearchThrottle<T: TimeSource> {
    time: T,
    cache: SearchCache,
    limiter: RateLimiter,
    latest_seq: u64,
}

impl<T: TimeSource> SearchThrottle<T> {
    pub fn new(time: T, limiter: RateLimiter) -> Self {
        Self {
            time,
            cache: SearchCache::new(),
            limiter,
            latest_seq: 0,
        }
    }

    /// Decide how to serve `query`
    pub fn submit(&mut self, query: &str) -> SearchDecision {
        if let Some(places) = self.cache.get(query) {
            let places = places.to_vec();
            self.latest_seq += 1;
            return SearchDecision::Cached(places);
        }
        if !self.limiter.try_acquire(self.time.now_us()) {
            return SearchDecision::Dropped;
        }
        self.latest_seq += 1;
        SearchDecision::Dispatch(SearchTicket {
            seq: self.latest_seq,
        })
    }

    /// Record a successful lookup
    ///
    /// Results are always cached under `query`. They are returned for
    /// publishing only if `ticket` is still the latest.
    pub fn complete(
        &mut self,
        ticket: SearchTicket,
        query: impl Into<String>,
        places: Vec<Place>,
    ) -> Option<Vec<Place>> {
        if self.is_current(ticket) {
            self.cache.insert(query, places.clone());
            Some(places)
        } else {
            self.cache.insert(query, places);
            None
        }
    }

    /// Record a failed lookup
    ///
    /// Failures are not cached. The latest ticket publishes an empty list,
    /// indistinguishable from "no matches".
    pub fn fail(&mut self, ticket: SearchTicket) -> Option<Vec<Place>> {
        self.is_current(ticket).then(Vec::new)
    }

    /// Invalidate every outstanding ticket
    ///
    /// Used when the owner publishes results on its own (e.g. a cleared
    /// query). In-flight lookups still populate the cache on completion.
    pub fn supersede(&mut self) {
        self.latest_seq += 1;
    }

    /// True if no newer result set has been issued since `ticket`
    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        ticket.seq == self.latest_seq
    }

    pub fn cache(&self) -> &SearchCache {
        &self.cache
    }

    pub fn limiter(&self) -> &RateLimiter {
        &self.limiter
    }

    pub fn time(&self) -> &T {
        &self.time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{Coordinate, PlaceId};
    use crate::search::rate_limiter::DEFAULT_WINDOW_US;
    use crate::traits::MockTime;
    use alloc::vec;

    fn place(id: &str) -> Place {
        Place::new(PlaceId::new(id), id, "addr", Coordinate::new(35.0, 139.0))
    }

    fn throttle() -> (SearchThrottle<MockTime>, MockTime) {
        let time = MockTime::new();
        (SearchThrottle::new(time.clone(), RateLimiter::default()), time)
    }

    fn dispatch(throttle: &mut SearchThrottle<MockTime>, query: &str) -> SearchTicket {
        match throttle.submit(query) {
            SearchDecision::Dispatch(ticket) => ticket,
            other => panic!("expected dispatch for {query}, got {other:?}"),
        }
    }

    #[test]
    fn test_miss_dispatches_then_hit_is_cached() {
        let (mut throttle, _time) = throttle();
        let ticket = dispatch(&mut throttle, "ramen");
        let published = throttle.complete(ticket, "ramen", vec![place("a"), place("b")]);
        assert_eq!(published.as_ref().map(Vec::len), Some(2));

        match throttle.submit("ramen") {
            SearchDecision::Cached(places) => {
                assert_eq!(places, vec![place("a"), place("b")]);
            }
            other => panic!("expected cache hit, got {other:?}"),
        }
        // Cache hits do not count against the limit
        assert_eq!(throttle.limiter().count(), 1);
    }

    #[test]
    fn test_cache_is_case_sensitive() {
        let (mut throttle, _time) = throttle();
        let ticket = dispatch(&mut throttle, "Cafe");
        throttle.complete(ticket, "Cafe", vec![place("a")]);
        assert!(matches!(throttle.submit("cafe"), SearchDecision::Dispatch(_)));
    }

    #[test]
    fn test_rate_limit_drops_51st_and_resets() {
        let (mut throttle, time) = throttle();
        for i in 0..50 {
            let query = alloc::format!("q{i}");
            dispatch(&mut throttle, &query);
            time.advance(100_000);
        }
        assert_eq!(throttle.submit("q50"), SearchDecision::Dropped);

        // Window measured from the first request at t=0
        time.set(DEFAULT_WINDOW_US);
        assert!(matches!(throttle.submit("q50"), SearchDecision::Dispatch(_)));
    }

    #[test]
    fn test_cached_query_served_while_rate_limited() {
        let (mut throttle, _time) = throttle();
        let ticket = dispatch(&mut throttle, "hit");
        throttle.complete(ticket, "hit", vec![place("a")]);
        for i in 0..49 {
            dispatch(&mut throttle, &alloc::format!("m{i}"));
        }
        assert_eq!(throttle.submit("miss"), SearchDecision::Dropped);
        assert!(matches!(throttle.submit("hit"), SearchDecision::Cached(_)));
    }

    #[test]
    fn test_stale_response_cached_but_not_published() {
        let (mut throttle, _time) = throttle();
        let old = dispatch(&mut throttle, "sus");
        let new = dispatch(&mut throttle, "sushi");

        let fresh = throttle.complete(new, "sushi", vec![place("new")]);
        assert!(fresh.is_some());

        let stale = throttle.complete(old, "sus", vec![place("old")]);
        assert!(stale.is_none());
        assert!(throttle.cache().contains("sus"));
    }

    #[test]
    fn test_cache_hit_supersedes_in_flight_lookup() {
        let (mut throttle, _time) = throttle();
        let first = dispatch(&mut throttle, "bar");
        throttle.complete(first, "bar", vec![place("bar")]);

        let in_flight = dispatch(&mut throttle, "bakery");
        assert!(matches!(throttle.submit("bar"), SearchDecision::Cached(_)));
        assert!(throttle
            .complete(in_flight, "bakery", vec![place("bakery")])
            .is_none());
    }

    #[test]
    fn test_failure_publishes_empty_and_is_not_cached() {
        let (mut throttle, _time) = throttle();
        let ticket = dispatch(&mut throttle, "museum");
        assert_eq!(throttle.fail(ticket), Some(Vec::new()));
        assert!(!throttle.cache().contains("museum"));
        assert!(matches!(throttle.submit("museum"), SearchDecision::Dispatch(_)));
    }

    #[test]
    fn test_stale_failure_is_silent() {
        let (mut throttle, _time) = throttle();
        let old = dispatch(&mut throttle, "a");
        let _new = dispatch(&mut throttle, "ab");
        assert!(throttle.fail(old).is_none());
    }

    #[test]
    fn test_dropped_does_not_advance_sequence() {
        let time = MockTime::new();
        let mut throttle = SearchThrottle::new(time, RateLimiter::new(1, 1_000_000));
        let ticket = dispatch(&mut throttle, "first");
        assert_eq!(throttle.submit("second"), SearchDecision::Dropped);
        assert!(throttle.is_current(ticket));
    }

    #[test]
    fn test_supersede_retires_in_flight_ticket() {
        let (mut throttle, _time) = throttle();
        let ticket = dispatch(&mut throttle, "park");
        throttle.supersede();
        assert!(throttle
            .complete(ticket, "park", vec![place("park")])
            .is_none());
        assert!(throttle.cache().contains("park"));
    }
}
