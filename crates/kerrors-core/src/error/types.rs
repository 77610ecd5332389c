//! Core error types for kerrors

use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

/// Boxed cause carried by a [`JoinedError`]
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Result type alias for operations failing with a [`KError`]
pub type KResult<T> = Result<T, KError>;

/// Failure category of a [`KError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Malformed or invalid input/data
    Value,
    /// Internal or environmental fault (resources, OS, broken invariants)
    System,
    /// Communication or connectivity fault
    Network,
}

impl Category {
    /// Every category, in declaration order
    pub const ALL: [Category; 3] = [Self::Value, Self::System, Self::Network];

    /// Short lowercase label
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Value => "value",
            Self::System => "system",
            Self::Network => "network",
        }
    }

    /// Human-readable category name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Value => "Value error",
            Self::System => "System error",
            Self::Network => "Network error",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message joined with an optional underlying cause.
///
/// Renders as `"<message>: <cause>"` when a cause is present and as the bare
/// message otherwise. Fields are private; a `JoinedError` never changes after
/// construction.
#[derive(Debug)]
pub struct JoinedError {
    message: String,
    cause: Option<BoxError>,
}

impl JoinedError {
    /// Create a record from a message and an optional cause
    pub fn new(message: impl Into<String>, cause: Option<BoxError>) -> Self {
        Self {
            message: message.into(),
            cause,
        }
    }

    /// The message without the cause suffix
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The wrapped cause, exactly as supplied
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Give the boxed cause back to the caller
    pub fn into_cause(self) -> Option<BoxError> {
        self.cause
    }
}

impl fmt::Display for JoinedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cause {
            Some(cause) => write!(f, "{}: {}", self.message, cause),
            None => f.write_str(&self.message),
        }
    }
}

impl StdError for JoinedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn StdError + 'static))
    }
}

/// Categorized error wrapping a [`JoinedError`].
///
/// Display and `source()` are forwarded to the joined record, so the variant
/// only carries the category.
#[derive(Error, Debug)]
pub enum KError {
    #[error(transparent)]
    Value(JoinedError),

    #[error(transparent)]
    System(JoinedError),

    #[error(transparent)]
    Network(JoinedError),
}

impl KError {
    /// The category this error was constructed with
    pub fn category(&self) -> Category {
        match self {
            Self::Value(_) => Category::Value,
            Self::System(_) => Category::System,
            Self::Network(_) => Category::Network,
        }
    }

    /// Whether this is a value error
    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Whether this is a system error
    pub fn is_system(&self) -> bool {
        matches!(self, Self::System(_))
    }

    /// Whether this is a network error
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// The joined record shared by every variant
    pub fn joined(&self) -> &JoinedError {
        match self {
            Self::Value(j) | Self::System(j) | Self::Network(j) => j,
        }
    }

    /// Drop the category and keep the joined record
    pub fn into_joined(self) -> JoinedError {
        match self {
            Self::Value(j) | Self::System(j) | Self::Network(j) => j,
        }
    }

    /// The message without the cause suffix
    pub fn message(&self) -> &str {
        self.joined().message()
    }

    /// The wrapped cause, exactly as supplied
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.joined().cause()
    }

    /// Give the boxed cause back to the caller
    pub fn into_cause(self) -> Option<BoxError> {
        self.into_joined().into_cause()
    }
}
