//! This crate provides [`QueryableList`](collections::list::QueryableList), a growable list with
//! a catalogue of query and transform helpers layered on top of an ordinary [`Vec`].
//!
//! # Purpose
//! Slices and iterators already cover most of what a list needs, but the everyday questions ("is
//! there an element with this id?", "give me everything whose name is empty", "replace every
//! negative number with zero") end up as the same `iter().filter(..).cloned().collect()` chain
//! over and over. The list bundles those chains into named operations that always return a fresh
//! list (or mutate in place and return `&mut Self` for chaining, where that is the point of the
//! operation).
//!
//! # Matching
//! Most operations take a [`Matcher`](collections::matcher::Matcher) which decides which elements
//! they apply to. There are three kinds, and the caller picks one explicitly:
//! - [`by_value`](collections::matcher::by_value): the element equals a value.
//! - [`by_predicate`](collections::matcher::by_predicate): a closure returns `true` for the
//!   element.
//! - [`by_accessor`](collections::matcher::by_accessor): a projection of the element (a field,
//!   a method call, any closure really) equals a value.
//!
//! Passing something that isn't a matcher is a type error, not a runtime failure.
//!
//! ```
//! # use queryable_list::collections::list::QueryableList;
//! # use queryable_list::collections::matcher::{by_accessor, by_predicate, by_value};
//! let list = QueryableList::from([0, 2, -3]);
//! assert!(list.contains(by_value(0)));
//! assert!(!list.contains(by_value(1)));
//! assert_eq!(list.count(by_predicate(|n: &i32| *n < 0)), 1);
//! assert_eq!(list.search(by_accessor(|n: &i32| n.abs(), 3)), Some(2));
//! ```
//!
//! # Error Handling
//! Out-of-range positions are not errors here. [`slice`](collections::list::QueryableList::slice),
//! [`splice`](collections::list::QueryableList::splice) and friends clamp to the list and return
//! whatever is left, which may be nothing. The only fallible operations are the ones that have no
//! sensible value to return, like the maximum of an empty list; those return strongly typed
//! errors that implement [`Error`](std::error::Error).
//!
//! # Features
//! - `shuffle` (default): random permutation of a list in place, using `rand`.
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

#[cfg(test)]
pub(crate) mod util;
