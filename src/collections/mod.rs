//! General-purpose collection types and the matchers used to query them.
//!
//! # Method
//! [`QueryableList`] implements [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), so all
//! of the read-only slice API is available without being rewritten here. Methods defined on the
//! list itself take precedence where the names overlap, e.g. [`QueryableList::contains`] takes a
//! [`Matcher`] rather than a reference.

pub mod list;
pub mod matcher;

#[doc(inline)]
pub use list::QueryableList;
#[doc(inline)]
pub use matcher::{Matcher, Replacement};
