//! kerrors core library
//!
//! Error values classified as value, system or network failures, each wrapping
//! an optional underlying cause that stays reachable through `source()`.

pub mod error;

pub use error::{
    BoxError, Category, JoinedError, KError, KResult, new_network_error, new_system_error,
    new_value_error,
};
