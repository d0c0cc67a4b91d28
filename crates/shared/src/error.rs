use thiserror::Error;

/// Misuse of the navigation engine. Runtime failures such as bad
/// credentials or a broken storage medium are recovered in place and never
/// surface as this type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("startup already ran")]
    AlreadyStarted,
    #[error("startup has not run yet")]
    NotStarted,
    #[error("a login attempt is already in flight")]
    LoginInFlight,
    #[error("already signed in as {email}")]
    AlreadyAuthenticated { email: String },
}

impl NavError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}
