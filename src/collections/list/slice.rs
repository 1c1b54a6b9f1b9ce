use std::cmp;
use std::ops::Range;

use tracing::trace;

use super::QueryableList;

impl<T> QueryableList<T> {
    /// Creates a new list from clones of up to `length` elements, starting at `start`.
    ///
    /// A negative `start` counts back from the end of the list, so `-1` is the last element. A
    /// negative `length` leaves that many elements out of the count, taking at most `len + length`
    /// elements. Positions past either end are clamped rather than treated as errors: if there is
    /// nothing left to take, the result is simply empty.
    ///
    /// # Examples
    /// ```
    /// # use queryable_list::collections::list::QueryableList;
    /// let list = QueryableList::from([0, 1, 2, 3, 4]);
    /// assert_eq!(list.slice(1, 2), [1, 2]);
    /// assert_eq!(list.slice(-2, 10), [3, 4]);
    /// assert_eq!(list.slice(1, -2), [1, 2, 3]);
    /// assert!(list.slice(5, 1).is_empty());
    /// assert!(list.slice(-6, 1).is_empty());
    /// ```
    pub fn slice(&self, start: isize, length: isize) -> QueryableList<T>
    where
        T: Clone,
    {
        match self.normalize_range(start, length) {
            Some(range) => QueryableList::from(&self[range]),
            None => QueryableList::new(),
        }
    }

    /// Creates a new list from clones of every element from `start` to the end of the list. See
    /// [`slice`](QueryableList::slice) for how `start` is interpreted.
    pub fn slice_from(&self, start: isize) -> QueryableList<T>
    where
        T: Clone,
    {
        self.slice(start, isize::MAX)
    }

    /// Cuts the list down in place to what [`slice`](QueryableList::slice) would have returned for
    /// the same arguments, dropping everything else.
    ///
    /// # Examples
    /// ```
    /// # use queryable_list::collections::list::QueryableList;
    /// let mut list = QueryableList::from([0, 1, 2, 3, 4]);
    /// assert_eq!(*list.splice(1, 3), [1, 2, 3]);
    /// assert!(list.splice(10, 1).is_empty());
    /// ```
    pub fn splice(&mut self, start: isize, length: isize) -> &mut Self {
        match self.normalize_range(start, length) {
            Some(range) => {
                self.inner.truncate(range.end);
                self.inner.drain(..range.start);
            }
            None => self.inner.clear(),
        }
        trace!(start, length, remaining = self.len(), "spliced list");
        self
    }

    /// Resolves the `start`/`length` pair accepted by [`slice`](QueryableList::slice) into a range
    /// of valid indices, or [`None`] if `start` falls outside the list.
    pub(crate) fn normalize_range(&self, start: isize, length: isize) -> Option<Range<usize>> {
        let len = self.len();

        let start = if start < 0 {
            len.checked_sub(start.unsigned_abs())?
        } else {
            start.unsigned_abs()
        };
        if start >= len {
            return None;
        }

        let length = if length < 0 {
            len.saturating_sub(length.unsigned_abs())
        } else {
            length.unsigned_abs()
        };

        Some(start..start + cmp::min(length, len - start))
    }
}

impl<T: Clone + PartialEq> QueryableList<T> {
    /// Creates a list of every distinct run of `length` consecutive elements, in order of first
    /// occurrence.
    ///
    /// A `length` of zero, or one longer than the list, yields a single empty run.
    ///
    /// # Examples
    /// ```
    /// # use queryable_list::collections::list::QueryableList;
    /// let list = QueryableList::from([1, 2, 1, 2]);
    /// assert_eq!(list.substrings(2), [vec![1, 2], vec![2, 1]].map(QueryableList::from));
    /// assert_eq!(list.substrings(5), [QueryableList::new()]);
    /// ```
    pub fn substrings(&self, length: usize) -> QueryableList<QueryableList<T>> {
        if length == 0 || length > self.len() {
            return QueryableList::from([QueryableList::new()]);
        }

        let mut result: QueryableList<QueryableList<T>> = QueryableList::new();
        for window in self.windows(length) {
            if !result.iter().any(|run| run[..] == *window) {
                result.push(QueryableList::from(window));
            }
        }

        trace!(length, found = result.len(), "collected substrings");
        result
    }

    /// Creates a list of every distinct run of consecutive elements of any length, starting with
    /// the empty run and then ordered by length.
    pub fn all_substrings(&self) -> QueryableList<QueryableList<T>> {
        let mut result = self.substrings(0);
        for length in 1..=self.len() {
            result.append(self.substrings(length));
        }
        result
    }
}
