//! Cause chain traversal
//!
//! Everything here is built on the single-step `Error::source` primitive and
//! works on any error, not just [`KError`]. Traversal remembers every link it
//! has yielded and stops when a link points back into the chain, so a
//! self-referential `source()` cannot loop forever.
//!
//! A link is identified by its wide pointer (address and vtable), not the
//! address alone: a `#[source]` newtype field sits at offset 0 and shares its
//! wrapper's address while being a different error.

use std::collections::HashSet;
use std::error::Error as StdError;

use super::types::{Category, KError};

type LinkPtr = *const (dyn StdError + 'static);

/// Iterator over an error and its successive sources
#[derive(Debug)]
pub struct Chain<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
    visited: HashSet<LinkPtr>,
}

impl<'a> Chain<'a> {
    pub fn new(head: &'a (dyn StdError + 'static)) -> Self {
        Self {
            next: Some(head),
            visited: HashSet::new(),
        }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        if !self.visited.insert(current as LinkPtr) {
            tracing::debug!(depth = self.visited.len(), "Error chain loops back on itself");
            return None;
        }
        self.next = current.source();
        Some(current)
    }
}

/// Walk `err` and every cause below it
pub fn chain<'a>(err: &'a (dyn StdError + 'static)) -> Chain<'a> {
    Chain::new(err)
}

/// Whether any link in the chain satisfies `predicate`
pub fn chain_contains<F>(err: &(dyn StdError + 'static), mut predicate: F) -> bool
where
    F: FnMut(&(dyn StdError + 'static)) -> bool,
{
    chain(err).any(|link| predicate(link))
}

/// Whether the chain holds a `T` equal to `target`
pub fn is_in_chain<T>(err: &(dyn StdError + 'static), target: &T) -> bool
where
    T: StdError + PartialEq + 'static,
{
    chain(err).any(|link| {
        link.downcast_ref::<T>()
            .is_some_and(|found| found == target)
    })
}

/// First link of type `T`
pub fn find_cause<'a, T>(err: &'a (dyn StdError + 'static)) -> Option<&'a T>
where
    T: StdError + 'static,
{
    chain(err).find_map(|link| link.downcast_ref::<T>())
}

/// First [`KError`] of `category` in the chain
pub fn find_category<'a>(
    err: &'a (dyn StdError + 'static),
    category: Category,
) -> Option<&'a KError> {
    chain(err)
        .filter_map(|link| link.downcast_ref::<KError>())
        .find(|k| k.category() == category)
}

pub fn has_category(err: &(dyn StdError + 'static), category: Category) -> bool {
    find_category(err, category).is_some()
}

/// Deepest reachable link
pub fn root_cause<'a>(err: &'a (dyn StdError + 'static)) -> &'a (dyn StdError + 'static) {
    chain(err).last().unwrap_or(err)
}

impl KError {
    /// Walk this error and its causes
    pub fn chain(&self) -> Chain<'_> {
        Chain::new(self)
    }

    /// Number of links, counting this error
    pub fn depth(&self) -> usize {
        self.chain().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{new_network_error, new_system_error, new_value_error};
    use std::fmt;
    use std::io;

    #[derive(Debug, PartialEq, thiserror::Error)]
    #[error("{0}")]
    struct Marker(String);

    #[derive(Debug, PartialEq, thiserror::Error)]
    #[error("base {0}")]
    struct Base(u32);

    /// Newtype whose source is its only field, stored at the same address
    #[derive(Debug, thiserror::Error)]
    #[error("wrapper")]
    struct Wrapper(#[source] Base);

    #[derive(Debug, thiserror::Error)]
    #[error("layer")]
    struct Layer(#[source] KError);

    /// An error whose source is itself
    #[derive(Debug)]
    struct Ouroboros {
        name: String,
    }

    impl fmt::Display for Ouroboros {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "ouroboros {}", self.name)
        }
    }

    impl StdError for Ouroboros {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            Some(self)
        }
    }

    fn nested() -> KError {
        new_value_error(
            "outer",
            Some(Box::new(new_system_error(
                "inner",
                Some(Box::new(Marker("base".to_string()))),
            ))),
        )
    }

    #[test]
    fn test_chain_order() {
        let err = nested();
        let rendered: Vec<String> = err.chain().map(|e| e.to_string()).collect();
        assert_eq!(rendered, vec!["outer: inner: base", "inner: base", "base"]);
        assert_eq!(err.depth(), 3);
    }

    #[test]
    fn test_chain_without_cause_has_one_link() {
        let err = new_system_error("Internal fault", None);
        assert_eq!(err.depth(), 1);
        assert_eq!(root_cause(&err).to_string(), "Internal fault");
    }

    #[test]
    fn test_is_in_chain_finds_base() {
        let err = nested();
        assert!(is_in_chain(&err, &Marker("base".to_string())));
        assert!(!is_in_chain(&err, &Marker("other".to_string())));
    }

    #[test]
    fn test_category_search_through_chain() {
        let err = nested();
        assert!(has_category(&err, Category::Value));
        assert!(has_category(&err, Category::System));
        assert!(!has_category(&err, Category::Network));
        assert_eq!(
            find_category(&err, Category::System).map(|k| k.message()),
            Some("inner")
        );
    }

    #[test]
    fn test_find_cause_by_type() {
        let err = new_network_error(
            "Dial failed",
            Some(Box::new(io::Error::new(io::ErrorKind::TimedOut, "deadline exceeded"))),
        );
        let io_err = find_cause::<io::Error>(&err).expect("io error in chain");
        assert_eq!(io_err.kind(), io::ErrorKind::TimedOut);
        assert!(find_cause::<Marker>(&err).is_none());
    }

    #[test]
    fn test_chain_contains_predicate() {
        let err = nested();
        assert!(chain_contains(&err, |e| e.to_string() == "base"));
        assert!(!chain_contains(&err, |e| e.to_string() == "missing"));
    }

    #[test]
    fn test_root_cause() {
        let err = nested();
        assert_eq!(root_cause(&err).to_string(), "base");
    }

    #[test]
    fn test_self_referential_chain_terminates() {
        let looping = Ouroboros {
            name: "a".to_string(),
        };
        let links = chain(&looping).count();
        assert!((1..=2).contains(&links), "walked {links} links");

        let err = new_system_error("wrapped", Some(Box::new(looping)));
        assert!((2..=3).contains(&err.depth()));
        assert!(!chain_contains(&err, |e| e.to_string() == "never"));
    }

    #[test]
    fn test_newtype_source_shares_address_but_is_walked() {
        let wrapper = Wrapper(Base(7));
        let source = wrapper.source().expect("field source");
        assert_eq!(
            &wrapper as *const Wrapper as *const (),
            source as *const dyn StdError as *const ()
        );

        let err = new_value_error("outer", Some(Box::new(wrapper)));
        let rendered: Vec<String> = err.chain().map(|e| e.to_string()).collect();
        assert_eq!(rendered, vec!["outer: wrapper", "wrapper", "base 7"]);
        assert_eq!(err.depth(), 3);
        assert!(is_in_chain(&err, &Base(7)));
        assert_eq!(find_cause::<Base>(&err), Some(&Base(7)));
        assert_eq!(root_cause(&err).to_string(), "base 7");
    }

    #[test]
    fn test_kerror_inside_newtype_is_walked() {
        let inner = new_network_error("Dial failed", Some(Box::new(Base(3))));
        let err = new_system_error("sync failed", Some(Box::new(Layer(inner))));

        assert_eq!(err.depth(), 4);
        assert!(has_category(&err, Category::Network));
        assert!(is_in_chain(&err, &Base(3)));
        assert_eq!(
            find_category(&err, Category::Network).map(|k| k.message()),
            Some("Dial failed")
        );
    }
}
