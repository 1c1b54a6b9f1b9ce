use tracing::trace;

use super::QueryableList;

impl<T: Clone + PartialEq> QueryableList<T> {
    /// Creates a new list containing every distinct value found in either `self` or `other`,
    /// exactly once. (`self ∪ other`)
    ///
    /// Values from `self` come first, in order of first occurrence, followed by the values of
    /// `other` that weren't already present, again in order of first occurrence.
    ///
    /// # Examples
    /// ```
    /// # use queryable_list::collections::list::QueryableList;
    /// let list = QueryableList::from([3, 1, 3]);
    /// assert_eq!(list.unify(&[2, 1, 4, 2]), [3, 1, 2, 4]);
    /// ```
    pub fn unify(&self, other: &[T]) -> QueryableList<T> {
        let mut result = QueryableList::new();
        for item in self.iter().chain(other) {
            if !result.inner.contains(item) {
                result.push(item.clone());
            }
        }
        result
    }

    /// Creates a new list containing every distinct value found in both `self` and `other`,
    /// exactly once, in the order of their first occurrence in `self`. (`self ∩ other`)
    ///
    /// # Examples
    /// ```
    /// # use queryable_list::collections::list::QueryableList;
    /// let list = QueryableList::from([5, 1, 2, 1]);
    /// assert_eq!(list.disjoin(&[1, 5, 7]), [5, 1]);
    /// ```
    pub fn disjoin(&self, other: &[T]) -> QueryableList<T> {
        let mut result = QueryableList::new();
        for item in self.iter() {
            if other.contains(item) && !result.inner.contains(item) {
                result.push(item.clone());
            }
        }
        result
    }

    /// Returns true if `self` and `other` have at least one value in common, that is, if
    /// [`disjoin`](QueryableList::disjoin) would return a non-empty list.
    pub fn shares(&self, other: &[T]) -> bool {
        self.iter().any(|item| other.contains(item))
    }

    /// Creates a new list keeping only the first occurrence of every value.
    ///
    /// # Examples
    /// ```
    /// # use queryable_list::collections::list::QueryableList;
    /// let list: QueryableList<_> = "mississippi".into();
    /// assert_eq!(String::from(list.remove_duplicates()), "misp");
    /// ```
    pub fn remove_duplicates(&self) -> QueryableList<T> {
        self.disjoin(self)
    }

    /// Creates a list of every subset of the distinct values in `self`, `2ᵏ` lists for `k`
    /// distinct values.
    ///
    /// Generation starts from a single empty subset. Then, for every distinct value in order of
    /// first occurrence, a copy of each subset generated so far is appended with that value
    /// placed at its front. The empty subset therefore always comes first and the subset holding
    /// every value (in reverse order) comes last.
    ///
    /// # Examples
    /// ```
    /// # use queryable_list::collections::list::QueryableList;
    /// let subsets = QueryableList::from([0, 1, 1]).power_set();
    /// assert_eq!(
    ///     subsets,
    ///     [vec![], vec![0], vec![1], vec![1, 0]].map(QueryableList::from),
    /// );
    /// ```
    pub fn power_set(&self) -> QueryableList<QueryableList<T>> {
        let distinct = self.remove_duplicates();
        let mut subsets = QueryableList::from([QueryableList::new()]);

        for item in distinct.iter() {
            for i in 0..subsets.len() {
                let mut subset = QueryableList::with_cap(subsets[i].len() + 1);
                subset.push(item.clone());
                subset.extend(subsets[i].iter().cloned());
                subsets.push(subset);
            }
        }

        trace!(
            distinct = distinct.len(),
            subsets = subsets.len(),
            "generated power set"
        );
        subsets
    }
}
