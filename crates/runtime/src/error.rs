use wayfinder_core::parameters::ParameterError;

/// Errors a place search provider can report.
///
/// The navigator never surfaces these to its subscribers: any failure is
/// logged and published as an empty result list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("Provider unavailable: {0}")]
    Unavailable(String),

    #[error("Provider rejected query: {0}")]
    Rejected(String),

    #[error("Timeout waiting for {0}")]
    Timeout(&'static str),
}

/// Errors from driving a navigator through its handle.
#[derive(Debug, thiserror::Error)]
pub enum NavigatorError {
    #[error("Navigator is not running")]
    Closed,

    #[error("Navigator task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("Invalid {0} parameters")]
    InvalidConfig(&'static str),

    #[error("Parameter error: {0}")]
    Parameter(ParameterError),
}

impl From<ParameterError> for NavigatorError {
    fn from(err: ParameterError) -> Self {
        NavigatorError::Parameter(err)
    }
}

/// Errors loading a scripted walk for simulation.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed route: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Route has no points")]
    Empty,
}
