use super::QueryableList;
use crate::collections::matcher::{Matcher, Replacement};

impl<T> QueryableList<T> {
    /// Returns the index of the first element accepted by `matcher`, or [`None`] if the end of the
    /// list is reached without a match.
    ///
    /// # Examples
    /// ```
    /// # use queryable_list::collections::list::QueryableList;
    /// # use queryable_list::collections::matcher::{by_predicate, by_value};
    /// let list = QueryableList::from([4, 8, 15, 16, 23, 42]);
    /// assert_eq!(list.search(by_value(16)), Some(3));
    /// assert_eq!(list.search(by_predicate(|n: &i32| n % 2 == 1)), Some(2));
    /// assert_eq!(list.search(by_value(7)), None);
    /// ```
    ///
    /// Passing a plain value where a matcher is expected doesn't compile:
    /// ```compile_fail
    /// # use queryable_list::collections::list::QueryableList;
    /// let list = QueryableList::from([4, 8, 15]);
    /// list.search(8);
    /// ```
    pub fn search<M: Matcher<T>>(&self, matcher: M) -> Option<usize> {
        self.iter().position(|item| matcher.matches(item))
    }

    /// Returns true if any element is accepted by `matcher`.
    ///
    /// This shadows [`slice::contains`], which is still available as `list[..].contains(&value)`.
    ///
    /// A bare value or closure is not a matcher. The kind of match has to be named:
    /// ```compile_fail
    /// # use queryable_list::collections::list::QueryableList;
    /// let list = QueryableList::from([0, 2, -3]);
    /// list.contains(0);
    /// ```
    /// ```compile_fail
    /// # use queryable_list::collections::list::QueryableList;
    /// let list = QueryableList::from([0, 2, -3]);
    /// list.contains(|n: &i32| *n < 0);
    /// ```
    /// ```
    /// # use queryable_list::collections::list::QueryableList;
    /// # use queryable_list::collections::matcher::{by_predicate, by_value};
    /// let list = QueryableList::from([0, 2, -3]);
    /// assert!(list.contains(by_value(0)));
    /// assert!(list.contains(by_predicate(|n: &i32| *n < 0)));
    /// ```
    pub fn contains<M: Matcher<T>>(&self, matcher: M) -> bool {
        self.search(matcher).is_some()
    }

    /// Creates a new list from clones of every element accepted by `matcher`, in their original
    /// order.
    ///
    /// # Examples
    /// ```
    /// # use queryable_list::collections::list::QueryableList;
    /// # use queryable_list::collections::matcher::by_accessor;
    /// let words = QueryableList::from(["apple", "kiwi", "pear", "fig"]);
    /// assert_eq!(words.select(by_accessor(|w: &&str| w.len(), 4)), ["kiwi", "pear"]);
    /// ```
    pub fn select<M: Matcher<T>>(&self, matcher: M) -> QueryableList<T>
    where
        T: Clone,
    {
        self.iter()
            .filter(|item| matcher.matches(item))
            .cloned()
            .collect()
    }

    /// Returns the number of elements accepted by `matcher`. This is always equal to the length of
    /// the list returned by [`select`](QueryableList::select), without cloning anything.
    pub fn count<M: Matcher<T>>(&self, matcher: M) -> usize {
        self.iter().filter(|item| matcher.matches(item)).count()
    }

    /// Creates a new list of the same length, where every element accepted by `matcher` has been
    /// swapped for the output of `replacement` and every other element is cloned as is.
    ///
    /// # Examples
    /// ```
    /// # use queryable_list::collections::list::QueryableList;
    /// # use queryable_list::collections::matcher::{by_predicate, by_value, constant, mapped};
    /// let list = QueryableList::from([0, 1, 2]);
    /// assert_eq!(list.replace(constant(9), by_value(1)), [0, 9, 2]);
    /// assert_eq!(
    ///     list.replace(mapped(|n: &i32| n + 1), by_predicate(|n: &i32| n % 2 == 0)),
    ///     [1, 1, 3],
    /// );
    /// ```
    pub fn replace<P, M>(&self, replacement: P, matcher: M) -> QueryableList<T>
    where
        T: Clone,
        P: Replacement<T>,
        M: Matcher<T>,
    {
        self.iter()
            .map(|item| {
                if matcher.matches(item) {
                    replacement.replacement_for(item)
                } else {
                    item.clone()
                }
            })
            .collect()
    }

    /// Creates a new list by applying `transformer` to every element, in order.
    ///
    /// The transformer can be a free function, a method reference like `String::len`, or a closure
    /// that captures any extra arguments.
    ///
    /// # Examples
    /// ```
    /// # use queryable_list::collections::list::QueryableList;
    /// let list = QueryableList::from([1, 2, 3]);
    /// let offset = 10;
    /// assert_eq!(list.transform(|n| n + offset), [11, 12, 13]);
    /// assert_eq!(list.transform(i32::to_string), ["1", "2", "3"].map(String::from));
    /// ```
    pub fn transform<R, F: Fn(&T) -> R>(&self, transformer: F) -> QueryableList<R> {
        self.iter().map(transformer).collect()
    }

    /// Creates a new list by converting every element into `R`.
    ///
    /// # Examples
    /// ```
    /// # use queryable_list::collections::list::QueryableList;
    /// let list = QueryableList::from([1_u8, 2, 255]);
    /// assert_eq!(list.transform_into::<u32>(), [1, 2, 255]);
    /// ```
    pub fn transform_into<R>(&self) -> QueryableList<R>
    where
        T: Clone + Into<R>,
    {
        self.iter().cloned().map(Into::into).collect()
    }
}
