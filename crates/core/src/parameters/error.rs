//! Parameter store errors

/// Errors from parameter store operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterError {
    /// Invalid configuration (e.g., name too long for the store)
    InvalidConfig,
    /// No parameter registered under that name
    UnknownParameter,
    /// Value has the wrong type or could not be parsed
    InvalidValue,
    /// Store is full
    StoreFull,
}

impl core::fmt::Display for ParameterError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParameterError::InvalidConfig => write!(f, "invalid parameter configuration"),
            ParameterError::UnknownParameter => write!(f, "unknown parameter"),
            ParameterError::InvalidValue => write!(f, "invalid parameter value"),
            ParameterError::StoreFull => write!(f, "parameter store full"),
        }
    }
}
