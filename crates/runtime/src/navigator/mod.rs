//! Navigator actor
//!
//! One task owns the navigation session, the debouncer and the search
//! throttle. Everything that changes them arrives as a message:
//!
//! ```text
//! NavigatorHandle --Command--> +-----------+ --watch--> NavigationSnapshot
//! feed tasks ------Command---> | Navigator | --watch--> SearchResults
//! provider tasks -Completion-> +-----------+ --pulse--> FeedbackDevice
//! ```
//!
//! Provider lookups run on their own tasks so slow responses never block
//! location, heading or arrival processing. The arrival check runs on a
//! fixed interval, independent of how often fixes arrive.

mod handle;
mod snapshot;

pub use handle::NavigatorHandle;
pub use snapshot::{NavigationSnapshot, SearchResults};

use std::future;
use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::time::{self, Instant, MissedTickBehavior};
use wayfinder_core::navigation::{AuthorizationStatus, FeedbackDevice, NavigationSession, Place};
use wayfinder_core::search::{Debouncer, SearchDecision, SearchThrottle, SearchTicket};
use wayfinder_core::traits::TimeSource;

use crate::config::NavigatorConfig;
use crate::error::SearchError;
use crate::feeds::{HeadingEvent, LocationEvent, PlaceSearchProvider, SearchRegion};
use crate::time::TokioTime;

/// Messages into the actor
#[derive(Debug)]
pub(crate) enum Command {
    SetDestination(Place),
    ClearDestination,
    QueryChanged(String),
    Location(LocationEvent),
    Heading(HeadingEvent),
    Shutdown,
}

/// Outcome of one provider lookup, reported back to the actor
struct Completion {
    ticket: SearchTicket,
    query: String,
    outcome: Result<Vec<Place>, SearchError>,
}

/// Single-owner navigation and search state machine
pub struct Navigator {
    config: NavigatorConfig,
    time: TokioTime,
    session: NavigationSession,
    debouncer: Debouncer,
    throttle: SearchThrottle<TokioTime>,
    authorization: AuthorizationStatus,
    provider: Arc<dyn PlaceSearchProvider>,
    feedback: Box<dyn FeedbackDevice + Send>,
    commands: mpsc::Receiver<Command>,
    completion_tx: mpsc::UnboundedSender<Completion>,
    completion_rx: mpsc::UnboundedReceiver<Completion>,
    navigation_tx: watch::Sender<NavigationSnapshot>,
    results_tx: watch::Sender<SearchResults>,
}

impl Navigator {
    /// Start a navigator on the current tokio runtime
    pub fn spawn<F>(
        config: NavigatorConfig,
        provider: Arc<dyn PlaceSearchProvider>,
        feedback: F,
    ) -> NavigatorHandle
    where
        F: FeedbackDevice + Send + 'static,
    {
        let (command_tx, commands) = mpsc::channel(config.command_capacity.max(1));
        let (completion_tx, completion_rx) = mpsc::unbounded_channel();
        let (navigation_tx, navigation_rx) = watch::channel(NavigationSnapshot::default());
        let (results_tx, results_rx) = watch::channel(SearchResults::default());

        let time = TokioTime::new();
        let navigator = Navigator {
            session: NavigationSession::new(config.arrival_threshold_m),
            debouncer: Debouncer::new(config.debounce.as_micros() as u64),
            throttle: SearchThrottle::new(time, config.rate_limiter()),
            time,
            config,
            authorization: AuthorizationStatus::default(),
            provider,
            feedback: Box::new(feedback),
            commands,
            completion_tx,
            completion_rx,
            navigation_tx,
            results_tx,
        };

        let task = tokio::spawn(navigator.run());
        NavigatorHandle::new(command_tx, navigation_rx, results_rx, task)
    }

    async fn run(mut self) {
        let mut arrival = time::interval(self.config.check_interval);
        arrival.set_missed_tick_behavior(MissedTickBehavior::Delay);

        crate::log_info!(
            "navigator started (arrival radius {} m, debounce {:?})",
            self.config.arrival_threshold_m,
            self.config.debounce
        );

        loop {
            let debounce_due = self.debouncer.deadline_us();
            let debounce_at = debounce_due.map(|us| self.time.instant_at(us));

            tokio::select! {
                command = self.commands.recv() => match command {
                    Some(Command::Shutdown) | None => break,
                    Some(command) => self.handle_command(command),
                },
                Some(completion) = self.completion_rx.recv() => {
                    self.handle_completion(completion);
                }
                _ = arrival.tick() => self.check_arrival(),
                _ = sleep_until_some(debounce_at) => {
                    if let Some(due) = debounce_due {
                        self.flush_query(due);
                    }
                }
            }
        }

        crate::log_info!("navigator stopped");
    }

    fn handle_command(&mut self, command: Command) {
        match command {
            Command::SetDestination(place) => {
                crate::log_info!("destination set: {} {}", place.name, place.coordinate);
                self.session.set_destination(place);
                self.publish_navigation();
            }
            Command::ClearDestination => {
                crate::log_info!("destination cleared");
                self.session.clear_destination();
                self.publish_navigation();
            }
            Command::QueryChanged(text) => self.query_changed(text),
            Command::Location(event) => self.handle_location(event),
            Command::Heading(event) => self.handle_heading(event),
            // Handled by the run loop
            Command::Shutdown => {}
        }
    }

    fn handle_location(&mut self, event: LocationEvent) {
        match event {
            LocationEvent::Fix(fix) => {
                crate::log_trace!("fix {}", fix);
                self.session.on_location_update(fix);
                self.results_tx.send_modify(|results| results.annotate(fix));
                self.publish_navigation();
            }
            LocationEvent::Authorization(status) => {
                if status.is_authorized() {
                    crate::log_info!("location authorized: {:?}", status);
                } else {
                    crate::log_warn!("location not authorized: {:?}", status);
                }
                self.authorization = status;
                self.publish_navigation();
            }
            LocationEvent::Failed(reason) => {
                crate::log_warn!("location provider failed: {}", reason);
            }
        }
    }

    fn handle_heading(&mut self, event: HeadingEvent) {
        match event {
            HeadingEvent::Yaw(deg) => {
                self.session.on_heading_update(deg);
                self.publish_navigation();
            }
            HeadingEvent::Failed(reason) => {
                crate::log_warn!("heading provider failed: {}", reason);
            }
        }
    }

    fn check_arrival(&mut self) {
        if self.session.check_arrival(self.feedback.as_mut()) {
            crate::log_info!(
                "arrived at destination ({:.1} m)",
                self.session.distance_to_destination_m()
            );
            self.publish_navigation();
        }
    }

    fn query_changed(&mut self, text: String) {
        if text.trim().is_empty() {
            // Clearing the box answers immediately and retires in-flight lookups
            self.debouncer.cancel();
            self.throttle.supersede();
            self.publish_results(text, Vec::new());
            return;
        }
        self.debouncer.input(text, self.time.now_us());
    }

    fn flush_query(&mut self, due_us: u64) {
        let Some(query) = self.debouncer.poll(due_us) else {
            return;
        };

        match self.throttle.submit(&query) {
            SearchDecision::Cached(places) => {
                crate::log_debug!("cache hit for {:?}", query);
                self.publish_results(query, places);
            }
            SearchDecision::Dispatch(ticket) => self.dispatch(ticket, query),
            SearchDecision::Dropped => {
                crate::log_debug!("rate limit reached, dropping {:?}", query);
            }
        }
    }

    fn dispatch(&self, ticket: SearchTicket, query: String) {
        let region = self
            .session
            .last_fix()
            .map(|center| SearchRegion::square(center, self.config.region_m));
        let provider = Arc::clone(&self.provider);
        let completions = self.completion_tx.clone();

        crate::log_debug!("lookup #{} for {:?}", ticket.seq(), query);
        tokio::spawn(async move {
            let outcome = provider.search(&query, region).await;
            // Receiver gone means the navigator shut down
            let _ = completions.send(Completion {
                ticket,
                query,
                outcome,
            });
        });
    }

    fn handle_completion(&mut self, completion: Completion) {
        let Completion {
            ticket,
            query,
            outcome,
        } = completion;

        let published = match outcome {
            Ok(places) => self.throttle.complete(ticket, query.clone(), places),
            Err(err) => {
                crate::log_warn!("search for {:?} failed: {}", query, err);
                self.throttle.fail(ticket)
            }
        };

        match published {
            Some(places) => self.publish_results(query, places),
            None => crate::log_debug!("discarding stale results for {:?}", query),
        }
    }

    fn publish_results(&self, query: String, places: Vec<Place>) {
        let mut results = SearchResults::new(query, places);
        if let Some(fix) = self.session.last_fix() {
            results.annotate(fix);
        }
        self.results_tx.send_replace(results);
    }

    fn publish_navigation(&self) {
        self.navigation_tx
            .send_replace(NavigationSnapshot::capture(&self.session, self.authorization));
    }
}

async fn sleep_until_some(deadline: Option<Instant>) {
    match deadline {
        Some(at) => time::sleep_until(at).await,
        None => future::pending().await,
    }
}
