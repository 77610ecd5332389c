//! Categorized error wrapping
//!
//! A [`KError`] is one of three categories (value, system, network) carrying a
//! [`JoinedError`]: a message plus an optional boxed cause.
//! - Display renders `"<message>: <cause>"`, or the bare message without a cause
//! - `source()` returns the cause exactly as supplied
//! - the category is the enum variant, so matching is a tag check
//!
//! The [`chain`] helpers walk `source()` links on any error.

mod chain;
mod constructors;
mod context;
mod report;
mod types;

// Re-export all public types and functions
pub use chain::{
    Chain, chain, chain_contains, find_category, find_cause, has_category, is_in_chain,
    root_cause,
};
pub use constructors::{classify_io, new_network_error, new_system_error, new_value_error};
pub use context::{OptionExt, ResultExt};
pub use report::Report;
pub use types::{BoxError, Category, JoinedError, KError, KResult};
