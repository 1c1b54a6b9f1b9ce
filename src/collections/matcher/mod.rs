//! A module containing [`Matcher`], [`Replacement`] and their implementations.
//!
//! A matcher answers one question about an element: does this operation apply to it? There are
//! three ways of answering it, each its own type:
//! - [`ByValue`]: the element is equal to a value.
//! - [`ByPredicate`]: a closure returns `true` for the element.
//! - [`ByAccessor`]: the result of projecting the element through a closure is equal to a value.
//!
//! Keeping these as distinct types means the caller always says which kind of match they meant,
//! so a value that happens to be callable (or a closure that happens to be comparable) can never
//! be picked up as the wrong kind.
//!
//! A replacement decides what a matched element becomes in
//! [`QueryableList::replace`](super::list::QueryableList::replace), either a [`Constant`] or the
//! output of a [`Mapped`] closure.
//!
//! [`Matcher`] and [`Replacement`] are also re-exported under the parent module.

mod matcher;
mod replacement;

pub use matcher::*;
pub use replacement::*;
