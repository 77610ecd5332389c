//! kerrors
//!
//! Categorized error wrapping. Every error is a value, system or network
//! failure with a message and an optional cause.
//!
//! # Example
//!
//! ```rust
//! use kerrors::prelude::*;
//!
//! let base = std::io::Error::new(std::io::ErrorKind::InvalidData, "invalid value");
//! let err = new_value_error("Value processing failed", Some(base.into()));
//!
//! assert_eq!(err.to_string(), "Value processing failed: invalid value");
//! assert!(err.is_value());
//! assert!(find_cause::<std::io::Error>(&err).is_some());
//! ```

pub use kerrors_core::error;
pub use kerrors_core::error::*;

pub mod prelude {
    pub use kerrors_core::error::{
        BoxError, Category, KError, KResult, OptionExt, ResultExt, chain, find_category,
        find_cause, has_category, is_in_chain, new_network_error, new_system_error,
        new_value_error,
    };
}
