use thiserror::Error;

/// Failure to load or parse the static asset manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("manifest request failed: {0}")]
    Fetch(String),
    #[error("manifest is not a JSON array of file names: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Any rejection from the email-delivery collaborator.
///
/// The contact flow does not distinguish causes; every variant lands the
/// submission in the error state.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DeliveryError {
    #[error("email provider unavailable: {0}")]
    Unavailable(String),
    #[error("email provider rejected the message: {0}")]
    Rejected(String),
}

/// Reasons a submission attempt is refused before any call is made.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("a message is already in flight")]
    Busy,
    #[error("field `{0}` is required")]
    MissingField(&'static str),
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} is required")]
    Blank(&'static str),
}
