//! Extension traits for attaching a category and message to Results and Options

use super::types::{BoxError, Category, KError, KResult};

/// Extension trait for wrapping the error of a Result
pub trait ResultExt<T> {
    /// Wrap the error as the cause of a value error
    fn value_context<M: Into<String>>(self, message: M) -> KResult<T>;

    /// Wrap the error as the cause of a system error
    fn system_context<M: Into<String>>(self, message: M) -> KResult<T>;

    /// Wrap the error as the cause of a network error
    fn network_context<M: Into<String>>(self, message: M) -> KResult<T>;

    /// Wrap the error with a lazily built message (only evaluated on error)
    fn with_context<M: Into<String>, F: FnOnce() -> M>(self, category: Category, f: F)
    -> KResult<T>;
}

impl<T, E: Into<BoxError>> ResultExt<T> for Result<T, E> {
    fn value_context<M: Into<String>>(self, message: M) -> KResult<T> {
        self.map_err(|e| KError::new(Category::Value, message, Some(e.into())))
    }

    fn system_context<M: Into<String>>(self, message: M) -> KResult<T> {
        self.map_err(|e| KError::new(Category::System, message, Some(e.into())))
    }

    fn network_context<M: Into<String>>(self, message: M) -> KResult<T> {
        self.map_err(|e| KError::new(Category::Network, message, Some(e.into())))
    }

    fn with_context<M: Into<String>, F: FnOnce() -> M>(
        self,
        category: Category,
        f: F,
    ) -> KResult<T> {
        self.map_err(|e| KError::new(category, f(), Some(e.into())))
    }
}

/// Extension trait for turning a missing value into a cause-less error
pub trait OptionExt<T> {
    /// Convert `None` into a value error
    fn value_context<M: Into<String>>(self, message: M) -> KResult<T>;

    /// Convert `None` into an error of `category` with a lazy message
    fn with_context<M: Into<String>, F: FnOnce() -> M>(self, category: Category, f: F)
    -> KResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn value_context<M: Into<String>>(self, message: M) -> KResult<T> {
        self.ok_or_else(|| KError::value(message))
    }

    fn with_context<M: Into<String>, F: FnOnce() -> M>(
        self,
        category: Category,
        f: F,
    ) -> KResult<T> {
        self.ok_or_else(|| KError::new(category, f(), None))
    }
}
