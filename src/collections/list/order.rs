use std::cmp::Ordering;

#[cfg(feature = "shuffle")]
use rand::Rng;
#[cfg(feature = "shuffle")]
use rand::seq::SliceRandom;
#[cfg(feature = "shuffle")]
use tracing::trace;

use super::{EmptyCollection, QueryableList};

impl<T> QueryableList<T> {
    /// Sorts the list in place by the natural order of its elements.
    ///
    /// The sort is not stable: equal elements may be reordered.
    ///
    /// # Examples
    /// ```
    /// # use queryable_list::collections::list::QueryableList;
    /// let mut list = QueryableList::from([3, 1, 2]);
    /// assert_eq!(*list.sort(), [1, 2, 3]);
    /// ```
    pub fn sort(&mut self) -> &mut Self
    where
        T: Ord,
    {
        self.inner.sort_unstable();
        self
    }

    /// Sorts the list in place using `comparer` to order pairs of elements.
    ///
    /// # Examples
    /// ```
    /// # use queryable_list::collections::list::QueryableList;
    /// let mut list = QueryableList::from([3, 1, 2]);
    /// assert_eq!(*list.sort_with(|a, b| b.cmp(a)), [3, 2, 1]);
    /// ```
    pub fn sort_with<C: Fn(&T, &T) -> Ordering>(&mut self, comparer: C) -> &mut Self {
        self.inner.sort_unstable_by(comparer);
        self
    }

    /// Sorts the list in place by the natural order of a key derived from each element through
    /// `accessor`.
    pub fn sort_by_accessor<K: Ord, F: Fn(&T) -> K>(&mut self, accessor: F) -> &mut Self {
        self.inner.sort_unstable_by_key(accessor);
        self
    }

    /// Sorts the list in place by comparing the keys that `accessor` derives from each element
    /// with `comparer`.
    ///
    /// # Examples
    /// ```
    /// # use queryable_list::collections::list::QueryableList;
    /// let mut words = QueryableList::from(["ccc", "a", "bb"]);
    /// words.sort_by_accessor_with(|w| w.len(), |a, b| b.cmp(a));
    /// assert_eq!(words, ["ccc", "bb", "a"]);
    /// ```
    pub fn sort_by_accessor_with<K, F, C>(&mut self, accessor: F, comparer: C) -> &mut Self
    where
        F: Fn(&T) -> K,
        C: Fn(&K, &K) -> Ordering,
    {
        self.inner
            .sort_unstable_by(|lhs, rhs| comparer(&accessor(lhs), &accessor(rhs)));
        self
    }

    /// Returns the greatest element by natural order. If several elements are equally great, the
    /// first of them is returned.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the list has no elements.
    pub fn max(&self) -> Result<&T, EmptyCollection>
    where
        T: Ord,
    {
        self.max_with(T::cmp)
    }

    /// Returns the greatest element according to `comparer`, or the first of several equally
    /// great elements.
    ///
    /// `comparer` must describe a total order for the result to be meaningful.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the list has no elements.
    ///
    /// # Examples
    /// ```
    /// # use queryable_list::collections::list::QueryableList;
    /// let list = QueryableList::from([1.5, -2.0, 0.25]);
    /// assert_eq!(list.max_with(f64::total_cmp), Ok(&1.5));
    /// assert!(QueryableList::<f64>::new().max_with(f64::total_cmp).is_err());
    /// ```
    pub fn max_with<C: Fn(&T, &T) -> Ordering>(&self, comparer: C) -> Result<&T, EmptyCollection> {
        self.extreme_by(comparer, Ordering::Greater)
    }

    /// Returns the least element by natural order. If several elements are equally small, the
    /// first of them is returned.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the list has no elements.
    pub fn min(&self) -> Result<&T, EmptyCollection>
    where
        T: Ord,
    {
        self.min_with(T::cmp)
    }

    /// Returns the least element according to `comparer`, or the first of several equally small
    /// elements.
    ///
    /// `comparer` must describe a total order for the result to be meaningful.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the list has no elements.
    pub fn min_with<C: Fn(&T, &T) -> Ordering>(&self, comparer: C) -> Result<&T, EmptyCollection> {
        self.extreme_by(comparer, Ordering::Less)
    }

    /// Creates a new list with the elements in reverse order.
    ///
    /// Unlike [`slice::reverse`], this doesn't modify the list. The in-place version is still
    /// available as `list[..].reverse()`.
    pub fn reverse(&self) -> QueryableList<T>
    where
        T: Clone,
    {
        self.iter().rev().cloned().collect()
    }

    /// Shuffles the list in place into a uniformly random permutation, using the thread-local
    /// random number generator.
    #[cfg(feature = "shuffle")]
    pub fn shuffle(&mut self) -> &mut Self {
        self.shuffle_with(&mut rand::thread_rng())
    }

    /// Shuffles the list in place into a uniformly random permutation drawn from `rng`.
    ///
    /// # Examples
    /// ```
    /// # use queryable_list::collections::list::QueryableList;
    /// # use rand::SeedableRng;
    /// # use rand::rngs::StdRng;
    /// let mut list = QueryableList::from([1, 2, 3, 4, 5]);
    /// list.shuffle_with(&mut StdRng::seed_from_u64(7)).sort();
    /// assert_eq!(list, [1, 2, 3, 4, 5]);
    /// ```
    #[cfg(feature = "shuffle")]
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &mut Self {
        self.inner.shuffle(rng);
        trace!(len = self.len(), "shuffled list");
        self
    }

    /// Scans for the element that `comparer` orders as `wanted` relative to every other element,
    /// keeping the first one found on ties.
    fn extreme_by<C: Fn(&T, &T) -> Ordering>(
        &self,
        comparer: C,
        wanted: Ordering,
    ) -> Result<&T, EmptyCollection> {
        let mut iter = self.iter();
        let mut best = iter.next().ok_or(EmptyCollection)?;
        for item in iter {
            if comparer(item, best) == wanted {
                best = item;
            }
        }
        Ok(best)
    }
}
