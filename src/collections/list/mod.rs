//! A module containing [`QueryableList`] and associated types.
//!
//! The operations on the list are split by concern:
//! - Construction, conversion and element removal live alongside the type itself.
//! - Matching queries (`search`, `contains`, `select`, `count`, `replace`) and `transform`.
//! - Ordering (`sort`, `max`, `min`, `reverse`, `shuffle`).
//! - Set-like operations (`unify`, `disjoin`, `shares`, `remove_duplicates`, `power_set`).
//! - Ranges (`slice`, `splice`, `substrings`).
//!
//! Owned iteration uses [`IntoIter`], a re-export of [`std::vec::IntoIter`].
//! [`Iter`](std::slice::Iter) and [`IterMut`](std::slice::IterMut) from [`std::slice`] are used for
//! borrowed iteration.
//!
//! [`QueryableList`] is also re-exported under the parent module.

mod error;
mod fmt;
mod iter;
mod list;
mod order;
mod query;
mod set;
mod slice;

pub use error::*;
pub use iter::*;
pub use list::*;
