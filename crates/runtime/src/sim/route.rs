//! Scripted walk loaded from JSON
//!
//! ```json
//! {
//!   "destination": { "name": "Shrine", "address": "1-1 Hill", "latitude": 35.001, "longitude": 139.0 },
//!   "step_ms": 1000,
//!   "points": [
//!     { "latitude": 35.0, "longitude": 139.0, "heading_deg": 0.0 },
//!     { "latitude": 35.0005, "longitude": 139.0 }
//!   ]
//! }
//! ```
//!
//! `query` defaults to the destination name; `step_ms` defaults to 1000.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use wayfinder_core::navigation::{Coordinate, Place, PlaceId};

use super::feeds::{ScriptedHeadingFeed, ScriptedLocationFeed};
use crate::error::RouteError;
use crate::feeds::HeadingEvent;

const DEFAULT_STEP_MS: u64 = 1000;

fn default_step_ms() -> u64 {
    DEFAULT_STEP_MS
}

/// Destination entry of a route file
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoutePlace {
    pub name: String,
    #[serde(default)]
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// One position sample of a route file
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoutePoint {
    pub latitude: f64,
    pub longitude: f64,
    /// Device yaw at this point; absent keeps the previous heading
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading_deg: Option<f64>,
}

impl RoutePoint {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// Scripted walk toward one destination
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteScript {
    pub destination: RoutePlace,
    /// Text typed into the search box; defaults to the destination name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default = "default_step_ms")]
    pub step_ms: u64,
    pub points: Vec<RoutePoint>,
}

impl RouteScript {
    /// Read and validate a route file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RouteError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, RouteError> {
        let route: RouteScript = serde_json::from_str(text)?;
        if route.points.is_empty() {
            return Err(RouteError::Empty);
        }
        Ok(route)
    }

    /// Walk about 110 m due north onto a shrine, one fix per second
    pub fn demo() -> Self {
        let points = (0..=10)
            .map(|i| RoutePoint {
                latitude: 35.0 + f64::from(i) * 0.0001,
                longitude: 139.0,
                heading_deg: (i % 4 == 0).then(|| f64::from(i) * 2.5),
            })
            .collect();
        Self {
            destination: RoutePlace {
                name: "Hilltop Shrine".into(),
                address: "1-1 Hill Road".into(),
                latitude: 35.001,
                longitude: 139.0,
            },
            query: None,
            step_ms: DEFAULT_STEP_MS,
            points,
        }
    }

    pub fn step(&self) -> Duration {
        Duration::from_millis(self.step_ms)
    }

    /// Search text for the destination
    pub fn query(&self) -> &str {
        self.query.as_deref().unwrap_or(&self.destination.name)
    }

    /// Destination as a search result
    pub fn destination_place(&self) -> Place {
        Place::new(
            PlaceId::new(format!("route:{}", self.destination.name)),
            self.destination.name.clone(),
            self.destination.address.clone(),
            Coordinate::new(self.destination.latitude, self.destination.longitude),
        )
    }

    pub fn location_feed(&self) -> ScriptedLocationFeed {
        ScriptedLocationFeed::walk(self.points.iter().map(RoutePoint::coordinate), self.step())
    }

    /// Heading sampled every `interval`, holding the latest route heading
    ///
    /// Point `k` is reached `(k + 1) * step` after start, in step with
    /// [`Self::location_feed`]. Sampling begins once a point with a heading
    /// has been reached and stops at the end of the walk.
    pub fn heading_feed(&self, interval: Duration) -> ScriptedHeadingFeed {
        let step_ms = self.step_ms.max(1);
        let interval_ms = (interval.as_millis() as u64).max(1);
        let end_ms = self.step_ms * self.points.len() as u64;

        let mut script = Vec::new();
        let mut last_sample_ms = 0;
        let mut at_ms = interval_ms;
        while at_ms <= end_ms {
            let reached = (at_ms / step_ms) as usize;
            let heading = self.points[..reached.min(self.points.len())]
                .iter()
                .filter_map(|point| point.heading_deg)
                .last();
            if let Some(deg) = heading {
                script.push((
                    Duration::from_millis(at_ms - last_sample_ms),
                    HeadingEvent::Yaw(deg),
                ));
                last_sample_ms = at_ms;
            }
            at_ms += interval_ms;
        }
        ScriptedHeadingFeed::new(script)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_route() {
        let route = RouteScript::from_json(
            r#"{
                "destination": { "name": "Shrine", "latitude": 35.001, "longitude": 139.0 },
                "points": [ { "latitude": 35.0, "longitude": 139.0 } ]
            }"#,
        )
        .unwrap();

        assert_eq!(route.step_ms, 1000);
        assert_eq!(route.query(), "Shrine");
        assert_eq!(route.destination.address, "");
        assert_eq!(route.points[0].heading_deg, None);
    }

    #[test]
    fn empty_route_is_rejected() {
        let err = RouteScript::from_json(
            r#"{ "destination": { "name": "x", "latitude": 0.0, "longitude": 0.0 }, "points": [] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, RouteError::Empty));
    }

    #[test]
    fn malformed_route_is_rejected() {
        let err = RouteScript::from_json("{ not json").unwrap_err();
        assert!(matches!(err, RouteError::Json(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = RouteScript::load("/nonexistent/route.json").unwrap_err();
        assert!(matches!(err, RouteError::Io(_)));
    }

    #[test]
    fn demo_walks_onto_destination() {
        let demo = RouteScript::demo();
        assert_eq!(demo.points.len(), 11);
        let last = demo.points.last().unwrap().coordinate();
        let goal = demo.destination_place().coordinate;
        assert!(wayfinder_core::navigation::distance_meters(last, goal) < 20.0);
        assert_eq!(demo.destination_place().coordinate, Coordinate::new(35.001, 139.0));
    }

    #[test]
    fn feeds_follow_points() {
        let demo = RouteScript::demo();
        // authorization + one fix per point
        assert_eq!(demo.location_feed().remaining(), 12);
        // 1 s to 11 s inclusive
        assert_eq!(demo.heading_feed(Duration::from_secs(1)).remaining(), 11);
        // 1.0 s to 11.0 s in 0.2 s steps
        assert_eq!(demo.heading_feed(Duration::from_millis(200)).remaining(), 51);
    }

    #[test]
    fn heading_parameter_sets_sample_rate() {
        let demo = RouteScript::demo();
        let default = crate::NavigatorConfig::default();
        let slow = crate::NavigatorConfig::with_overrides(["NAV_HDG_MS=1000"]).unwrap();

        assert_eq!(demo.heading_feed(default.heading_interval).remaining(), 51);
        assert_eq!(demo.heading_feed(slow.heading_interval).remaining(), 11);
    }

    #[tokio::test(start_paused = true)]
    async fn heading_feed_holds_latest_heading_between_points() {
        use crate::feeds::HeadingFeed;

        let mut feed = RouteScript::demo().heading_feed(Duration::from_secs(1));
        let mut yaws = Vec::new();
        while let Some(HeadingEvent::Yaw(deg)) = feed.next_event().await {
            yaws.push(deg);
        }
        // headings change at points 0, 4 and 8
        assert_eq!(
            yaws,
            vec![0.0, 0.0, 0.0, 0.0, 10.0, 10.0, 10.0, 10.0, 20.0, 20.0, 20.0]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn heading_feed_paces_samples_by_interval() {
        use crate::feeds::HeadingFeed;
        use tokio::time::Instant;

        let start = Instant::now();
        let mut feed = RouteScript::demo().heading_feed(Duration::from_millis(500));
        feed.next_event().await.unwrap();
        let first = start.elapsed();
        feed.next_event().await.unwrap();
        let second = start.elapsed();

        assert!(first >= Duration::from_secs(1));
        let gap = second - first;
        assert!(gap >= Duration::from_millis(500) && gap < Duration::from_millis(600));
    }
}
