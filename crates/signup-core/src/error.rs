use thiserror::Error;

/// The display strings of the first three variants are returned verbatim to
/// HTTP clients as the `detail` field.
#[derive(Debug, Error)]
pub enum SignupError {
    #[error("Activity not found")]
    ActivityNotFound(String),

    #[error("Student already signed up for this activity")]
    AlreadySignedUp { activity: String, email: String },

    #[error("Participant not found for this activity")]
    ParticipantNotFound { activity: String, email: String },

    #[error("invalid seed: {0}")]
    InvalidSeed(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SignupError>;
