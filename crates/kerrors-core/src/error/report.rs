//! Multi-line rendering and logging of error chains

use std::error::Error as StdError;
use std::fmt;

use super::types::{Category, KError};

/// Display adapter printing an error followed by a numbered list of its causes.
///
/// ```text
/// Value error: outer
///
/// Caused by:
///   1. inner
///   2. base
/// ```
///
/// Causes that are themselves [`KError`]s contribute only their own message,
/// since their `Display` already repeats everything below them. Other causes
/// print their `Display`, minus a trailing `": <source>"` when they render
/// their source the same way.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    error: &'a KError,
}

impl<'a> Report<'a> {
    pub fn new(error: &'a KError) -> Self {
        Self { error }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            self.error.category().display_name(),
            self.error.message()
        )?;

        let mut causes = self.error.chain().skip(1).peekable();
        if causes.peek().is_none() {
            return Ok(());
        }

        f.write_str("\n\nCaused by:")?;
        for (i, cause) in causes.enumerate() {
            match cause.downcast_ref::<KError>() {
                Some(k) => write!(f, "\n  {}. {}", i + 1, k.message())?,
                None => write!(f, "\n  {}. {}", i + 1, own_text(cause))?,
            }
        }
        Ok(())
    }
}

/// Display text of `err` without its source's text appended
fn own_text(err: &(dyn StdError + 'static)) -> String {
    let text = err.to_string();
    let Some(source) = err.source() else {
        return text;
    };
    let suffix = format!(": {source}");
    match text.strip_suffix(&suffix) {
        Some(own) => own.to_string(),
        None => text,
    }
}

impl KError {
    /// Multi-line report of this error and its causes
    pub fn report(&self) -> Report<'_> {
        Report::new(self)
    }

    /// Emit this error as a single tracing event.
    ///
    /// Network errors are logged at WARN, the rest at ERROR.
    pub fn log(&self) {
        let category = self.category();
        let depth = self.depth();
        match category {
            Category::Network => tracing::warn!(
                category = %category,
                depth,
                "{}",
                self
            ),
            Category::Value | Category::System => tracing::error!(
                category = %category,
                depth,
                "{}",
                self
            ),
        }
    }
}
