//! Cause-chain traversal and comparison for `dyn Error` values.
//!
//! A cause chain starts at an error and continues through every error reachable by
//! repeatedly calling [`Error::source`]. [`ErrorChain`] walks that chain and answers "is
//! `target` this error or any error it wraps", which is how
//! [`Outcome::contains_err`](crate::Outcome::contains_err) decides containment.
//!
//! # Examples
//!
//! ```
//! use rail_result::traits::ErrorChain;
//! use std::error::Error;
//! use std::fmt;
//!
//! #[derive(Debug)]
//! struct Outer(std::io::Error);
//! impl fmt::Display for Outer {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         f.write_str("loading config")
//!     }
//! }
//! impl Error for Outer {
//!     fn source(&self) -> Option<&(dyn Error + 'static)> {
//!         Some(&self.0)
//!     }
//! }
//!
//! let err = Outer(std::io::Error::other("permission denied"));
//! let err: &(dyn Error + 'static) = &err;
//! assert_eq!(err.causes().count(), 2);
//! assert_eq!(err.display_chain().to_string(), "loading config: permission denied");
//! ```

use core::error::Error;
use core::fmt::{self, Display};
use core::iter::FusedIterator;

/// Traversal and comparison over an error's cause chain.
///
/// Implemented for the `dyn Error` trait objects the crate hands out, so it applies to
/// anything stored in an [`Outcome`](crate::Outcome).
pub trait ErrorChain {
    /// Returns the first link of the chain.
    fn chain_head(&self) -> &(dyn Error + 'static);

    /// Returns an iterator over this error followed by each of its sources.
    #[inline]
    fn causes(&self) -> Causes<'_> {
        Causes { next: Some(self.chain_head()) }
    }

    /// Returns `true` if `matches` accepts any link of the chain.
    fn chain_any<F>(&self, matches: F) -> bool
    where
        F: FnMut(&(dyn Error + 'static)) -> bool,
    {
        self.causes().any(matches)
    }

    /// Returns `true` if `target` is a link of the chain.
    ///
    /// A link matches when it downcasts to `E` and is either the same object as `target`
    /// or compares equal to it. Links of another type never match, even when they share an
    /// address with `target` (zero-sized errors all do).
    fn chain_contains<E>(&self, target: &E) -> bool
    where
        E: Error + PartialEq + 'static,
    {
        self.chain_any(|link| {
            link.downcast_ref::<E>()
                .is_some_and(|e| core::ptr::eq(e, target) || e == target)
        })
    }

    /// Returns the last link of the chain, the error with no further source.
    fn root_cause(&self) -> &(dyn Error + 'static) {
        let mut root = self.chain_head();
        while let Some(next) = root.source() {
            root = next;
        }
        root
    }

    /// Returns a displayable view that joins every link with `": "`.
    #[inline]
    fn display_chain(&self) -> DisplayChain<'_> {
        DisplayChain { head: self.causes() }
    }
}

impl ErrorChain for dyn Error + 'static {
    #[inline]
    fn chain_head(&self) -> &(dyn Error + 'static) {
        self
    }
}

impl ErrorChain for dyn Error + Send + 'static {
    #[inline]
    fn chain_head(&self) -> &(dyn Error + 'static) {
        self
    }
}

impl ErrorChain for dyn Error + Send + Sync + 'static {
    #[inline]
    fn chain_head(&self) -> &(dyn Error + 'static) {
        self
    }
}

/// Iterator over an error and its sources, outermost first.
///
/// Created by [`ErrorChain::causes`].
#[derive(Clone)]
pub struct Causes<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Iterator for Causes<'a> {
    type Item = &'a (dyn Error + 'static);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

impl FusedIterator for Causes<'_> {}

impl fmt::Debug for Causes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// Displays a cause chain as `outer: middle: root`.
///
/// Created by [`ErrorChain::display_chain`].
#[derive(Clone, Debug)]
pub struct DisplayChain<'a> {
    head: Causes<'a>,
}

impl Display for DisplayChain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, link) in self.head.clone().enumerate() {
            if index > 0 {
                f.write_str(": ")?;
            }
            Display::fmt(link, f)?;
        }
        Ok(())
    }
}
