//! Client side of the navigator actor

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use wayfinder_core::navigation::Place;

use super::snapshot::{NavigationSnapshot, SearchResults};
use super::Command;
use crate::error::NavigatorError;
use crate::feeds::{HeadingEvent, HeadingFeed, LocationEvent, LocationFeed};

/// Handle to a running [`super::Navigator`]
///
/// Every method is a message send; the actor applies them in order.
/// Dropping the handle without [`NavigatorHandle::shutdown`] leaves the
/// actor running while any attached feed is still alive.
pub struct NavigatorHandle {
    commands: mpsc::Sender<Command>,
    navigation: watch::Receiver<NavigationSnapshot>,
    results: watch::Receiver<SearchResults>,
    task: JoinHandle<()>,
}

impl NavigatorHandle {
    pub(super) fn new(
        commands: mpsc::Sender<Command>,
        navigation: watch::Receiver<NavigationSnapshot>,
        results: watch::Receiver<SearchResults>,
        task: JoinHandle<()>,
    ) -> Self {
        Self {
            commands,
            navigation,
            results,
            task,
        }
    }

    async fn send(&self, command: Command) -> Result<(), NavigatorError> {
        self.commands
            .send(command)
            .await
            .map_err(|_| NavigatorError::Closed)
    }

    /// Navigate to `place`, resetting any previous arrival
    pub async fn set_destination(&self, place: Place) -> Result<(), NavigatorError> {
        self.send(Command::SetDestination(place)).await
    }

    pub async fn clear_destination(&self) -> Result<(), NavigatorError> {
        self.send(Command::ClearDestination).await
    }

    /// Report the search box contents after an edit
    pub async fn query_changed(&self, text: impl Into<String>) -> Result<(), NavigatorError> {
        self.send(Command::QueryChanged(text.into())).await
    }

    /// Inject one location event directly
    pub async fn push_location(&self, event: LocationEvent) -> Result<(), NavigatorError> {
        self.send(Command::Location(event)).await
    }

    /// Inject one heading event directly
    pub async fn push_heading(&self, event: HeadingEvent) -> Result<(), NavigatorError> {
        self.send(Command::Heading(event)).await
    }

    /// Forward every event from `feed` until it ends or the navigator stops
    pub fn attach_location_feed<F>(&self, mut feed: F) -> JoinHandle<()>
    where
        F: LocationFeed + 'static,
    {
        let commands = self.commands.clone();
        tokio::spawn(async move {
            while let Some(event) = feed.next_event().await {
                if commands.send(Command::Location(event)).await.is_err() {
                    break;
                }
            }
            crate::log_debug!("location feed ended");
        })
    }

    /// Forward every event from `feed` until it ends or the navigator stops
    pub fn attach_heading_feed<F>(&self, mut feed: F) -> JoinHandle<()>
    where
        F: HeadingFeed + 'static,
    {
        let commands = self.commands.clone();
        tokio::spawn(async move {
            while let Some(event) = feed.next_event().await {
                if commands.send(Command::Heading(event)).await.is_err() {
                    break;
                }
            }
            crate::log_debug!("heading feed ended");
        })
    }

    /// Subscribe to navigation state
    pub fn navigation(&self) -> watch::Receiver<NavigationSnapshot> {
        self.navigation.clone()
    }

    /// Subscribe to search results
    pub fn search_results(&self) -> watch::Receiver<SearchResults> {
        self.results.clone()
    }

    /// Stop the actor and wait for it to finish
    ///
    /// Lookups still in flight are abandoned.
    pub async fn shutdown(self) -> Result<(), NavigatorError> {
        // A closed channel means the actor is already gone; join reports why.
        let _ = self.commands.send(Command::Shutdown).await;
        self.task.await?;
        Ok(())
    }
}
