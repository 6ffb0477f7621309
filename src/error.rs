use thiserror::Error;

/// Configuration-related errors with structured variants.
///
/// These are the only fatal errors: a watcher with a bad configuration never
/// starts polling.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Discriminant of a [`PollError`], used for dedup fingerprints and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PollErrorKind {
    ServerUnreachable,
    InvalidHttpStatus,
    MalformedBody,
    TypeMismatch,
    MissingField,
    NoItemsAvailable,
    MissingTimestamp,
    UnknownStatus,
    DeliveryFailed,
}

/// Errors raised while processing a single poll iteration.
///
/// None of these stop the watcher; the poll loop reports them and carries on
/// after the next interval.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PollError {
    #[error("review API is unreachable at {endpoint}: {reason}")]
    ServerUnreachable { endpoint: String, reason: String },

    #[error("review API returned HTTP status {status}")]
    InvalidHttpStatus { status: u16 },

    #[error("review API returned a body that is not JSON: {0}")]
    MalformedBody(String),

    #[error("unexpected type for {context}: expected {expected}, got {found}")]
    TypeMismatch {
        context: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("response has no `{field}` field")]
    MissingField { field: &'static str },

    #[error("no reviewed homework in the response")]
    NoItemsAvailable,

    #[error("response has no `current_date` field")]
    MissingTimestamp,

    #[error("unknown homework status: {status}")]
    UnknownStatus { status: String },

    #[error("failed to deliver message to {destination}: {reason}")]
    DeliveryFailed { destination: String, reason: String },
}

impl PollError {
    #[must_use]
    pub const fn kind(&self) -> PollErrorKind {
        match self {
            Self::ServerUnreachable { .. } => PollErrorKind::ServerUnreachable,
            Self::InvalidHttpStatus { .. } => PollErrorKind::InvalidHttpStatus,
            Self::MalformedBody(_) => PollErrorKind::MalformedBody,
            Self::TypeMismatch { .. } => PollErrorKind::TypeMismatch,
            Self::MissingField { .. } => PollErrorKind::MissingField,
            Self::NoItemsAvailable => PollErrorKind::NoItemsAvailable,
            Self::MissingTimestamp => PollErrorKind::MissingTimestamp,
            Self::UnknownStatus { .. } => PollErrorKind::UnknownStatus,
            Self::DeliveryFailed { .. } => PollErrorKind::DeliveryFailed,
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Poll(#[from] PollError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
