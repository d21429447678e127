//! Scripted location and heading feeds
//!
//! Each script entry is `(delay, event)`: the feed sleeps for `delay`
//! and then yields `event`. The feed ends when the script runs out.

use std::collections::VecDeque;
use std::time::Duration;

use async_trait::async_trait;
use wayfinder_core::navigation::{AuthorizationStatus, Coordinate};

use crate::feeds::{HeadingEvent, HeadingFeed, LocationEvent, LocationFeed};

#[derive(Clone, Debug, Default)]
pub struct ScriptedLocationFeed {
    script: VecDeque<(Duration, LocationEvent)>,
}

impl ScriptedLocationFeed {
    pub fn new(script: impl IntoIterator<Item = (Duration, LocationEvent)>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    /// Authorize, then emit one fix every `step` along `points`
    pub fn walk(points: impl IntoIterator<Item = Coordinate>, step: Duration) -> Self {
        let authorize = (
            Duration::ZERO,
            LocationEvent::Authorization(AuthorizationStatus::AuthorizedWhenInUse),
        );
        let fixes = points
            .into_iter()
            .map(|point| (step, LocationEvent::Fix(point)));
        Self::new(std::iter::once(authorize).chain(fixes))
    }

    /// Append an event after `delay`
    pub fn then(mut self, delay: Duration, event: LocationEvent) -> Self {
        self.script.push_back((delay, event));
        self
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

#[async_trait]
impl LocationFeed for ScriptedLocationFeed {
    async fn next_event(&mut self) -> Option<LocationEvent> {
        let (delay, event) = self.script.pop_front()?;
        tokio::time::sleep(delay).await;
        Some(event)
    }
}

#[derive(Clone, Debug, Default)]
pub struct ScriptedHeadingFeed {
    script: VecDeque<(Duration, HeadingEvent)>,
}

impl ScriptedHeadingFeed {
    pub fn new(script: impl IntoIterator<Item = (Duration, HeadingEvent)>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    /// Emit one yaw sample every `interval`
    pub fn sampled(yaws: impl IntoIterator<Item = f64>, interval: Duration) -> Self {
        Self::new(
            yaws.into_iter()
                .map(|deg| (interval, HeadingEvent::Yaw(deg))),
        )
    }

    pub fn then(mut self, delay: Duration, event: HeadingEvent) -> Self {
        self.script.push_back((delay, event));
        self
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

#[async_trait]
impl HeadingFeed for ScriptedHeadingFeed {
    async fn next_event(&mut self) -> Option<HeadingEvent> {
        let (delay, event) = self.script.pop_front()?;
        tokio::time::sleep(delay).await;
        Some(event)
    }
}
