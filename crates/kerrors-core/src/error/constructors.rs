//! Constructors for KError

use std::io;

use super::types::{BoxError, Category, JoinedError, KError};

/// Create a value error with an optional cause
pub fn new_value_error(message: impl Into<String>, cause: Option<BoxError>) -> KError {
    KError::new(Category::Value, message, cause)
}

/// Create a system error with an optional cause
pub fn new_system_error(message: impl Into<String>, cause: Option<BoxError>) -> KError {
    KError::new(Category::System, message, cause)
}

/// Create a network error with an optional cause
pub fn new_network_error(message: impl Into<String>, cause: Option<BoxError>) -> KError {
    KError::new(Category::Network, message, cause)
}

/// Map an I/O error kind onto a category.
///
/// Connection-level kinds are network faults, malformed input or data is a
/// value fault, and everything else is a system fault.
pub fn classify_io(error: &io::Error) -> Category {
    use io::ErrorKind;

    match error.kind() {
        ErrorKind::ConnectionRefused
        | ErrorKind::ConnectionReset
        | ErrorKind::ConnectionAborted
        | ErrorKind::NotConnected
        | ErrorKind::AddrInUse
        | ErrorKind::AddrNotAvailable
        | ErrorKind::BrokenPipe
        | ErrorKind::TimedOut => Category::Network,
        ErrorKind::InvalidInput | ErrorKind::InvalidData | ErrorKind::UnexpectedEof => {
            Category::Value
        }
        _ => Category::System,
    }
}

impl KError {
    /// Create an error of the given category
    pub fn new(category: Category, message: impl Into<String>, cause: Option<BoxError>) -> Self {
        let joined = JoinedError::new(message, cause);
        match category {
            Category::Value => Self::Value(joined),
            Category::System => Self::System(joined),
            Category::Network => Self::Network(joined),
        }
    }

    /// Create a value error without a cause
    pub fn value(message: impl Into<String>) -> Self {
        Self::new(Category::Value, message, None)
    }

    /// Create a system error without a cause
    pub fn system(message: impl Into<String>) -> Self {
        Self::new(Category::System, message, None)
    }

    /// Create a network error without a cause
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(Category::Network, message, None)
    }

    /// Create a value error wrapping `cause`
    pub fn value_with(message: impl Into<String>, cause: impl Into<BoxError>) -> Self {
        Self::new(Category::Value, message, Some(cause.into()))
    }

    /// Create a system error wrapping `cause`
    pub fn system_with(message: impl Into<String>, cause: impl Into<BoxError>) -> Self {
        Self::new(Category::System, message, Some(cause.into()))
    }

    /// Create a network error wrapping `cause`
    pub fn network_with(message: impl Into<String>, cause: impl Into<BoxError>) -> Self {
        Self::new(Category::Network, message, Some(cause.into()))
    }

    /// Wrap an I/O error, picking the category with [`classify_io`]
    pub fn from_io(message: impl Into<String>, error: io::Error) -> Self {
        let category = classify_io(&error);
        Self::new(category, message, Some(Box::new(error)))
    }
}
