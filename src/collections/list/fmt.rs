use std::any;
use std::fmt::{self, Debug, Display, Formatter};

use super::QueryableList;

impl<T: Debug> Debug for QueryableList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryableList")
            .field("contents", &&**self)
            .field("len", &self.len())
            .finish()
    }
}

/// Renders the list as its type followed by its elements, e.g. `QueryableList<i32>: (0, 2, -3)`.
/// An empty list renders as `QueryableList<i32>: ()`.
///
/// Only lists of elements that implement [`Display`] can be rendered this way. The element type is
/// named by [`any::type_name`], so types outside the prelude appear with their full path, e.g.
/// `QueryableList<alloc::string::String>`. Elements are rendered with their plain [`Display`] output;
/// width, fill and precision flags given to the list are ignored.
///
/// # Examples
/// ```
/// # use queryable_list::collections::list::QueryableList;
/// let list = QueryableList::from([0, 2, -3]);
/// assert_eq!(list.to_string(), "QueryableList<i32>: (0, 2, -3)");
/// assert_eq!(QueryableList::<u8>::new().to_string(), "QueryableList<u8>: ()");
/// ```
impl<T: Display> Display for QueryableList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "QueryableList<{}>: (", any::type_name::<T>())?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, ")")
    }
}
