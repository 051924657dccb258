use thiserror::Error;

/// Failures while loading or validating the bundled site content.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse site content: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid site content: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewStateError {
    #[error("image identifier must not be empty")]
    EmptyImageId,
}

/// Failures while wiring window events to the view state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BridgeError {
    #[error("no browser window available")]
    NoWindow,
    #[error("failed to register `{event}` listener: {reason}")]
    Listener { event: &'static str, reason: String },
}
