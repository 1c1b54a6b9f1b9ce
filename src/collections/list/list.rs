use std::borrow::{Borrow, BorrowMut};
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Deref, DerefMut};

use super::IndexOutOfBounds;

/// An ordered, growable list with query and transform helpers, based on [`Vec<T>`].
///
/// Queries ([`search`](QueryableList::search), [`select`](QueryableList::select),
/// [`count`](QueryableList::count), ...) never modify the list. Operations that produce a
/// differently shaped list ([`replace`](QueryableList::replace),
/// [`transform`](QueryableList::transform), [`slice`](QueryableList::slice),
/// [`unify`](QueryableList::unify), ...) return a new one. Only [`sort`](QueryableList::sort),
/// `shuffle` and [`splice`](QueryableList::splice) reorder or cut the list in place, returning
/// `&mut Self` so that they can be chained.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the list.
/// - `m`: The number of items in the second list or slice.
/// - `k`: The number of distinct items in the list.
///
/// | Method | Complexity |
/// |-|-|
/// | `push` | `O(1)`*, `O(n)` |
/// | `remove_at` | `O(n)` |
/// | `search`, `contains`, `select`, `count` | `O(n)` |
/// | `replace`, `transform`, `reverse` | `O(n)` |
/// | `sort` | `O(n log n)` |
/// | `max`, `min` | `O(n)` |
/// | `slice`, `splice` | `O(n)` |
/// | `unify`, `disjoin` | `O((n+m)²)` |
/// | `remove_duplicates` | `O(n²)` |
/// | `power_set` | `O(n² + k2ᵏ)` |
///
/// \* If the list doesn't have enough capacity for the new element, `push` will take `O(n)`.
#[derive(Clone, PartialEq, Eq)]
pub struct QueryableList<T> {
    pub(crate) inner: Vec<T>,
}

impl<T> QueryableList<T> {
    /// Creates a new, empty list. Memory will be allocated when the first element is pushed.
    ///
    /// # Examples
    /// ```
    /// # use queryable_list::collections::list::QueryableList;
    /// let list: QueryableList<u8> = QueryableList::new();
    /// assert!(list.is_empty());
    /// ```
    pub const fn new() -> QueryableList<T> {
        QueryableList { inner: Vec::new() }
    }

    /// Creates a new, empty list with room for at least `cap` elements before reallocating.
    ///
    /// # Panics
    /// Panics if the memory layout size exceeds [`isize::MAX`].
    pub fn with_cap(cap: usize) -> QueryableList<T> {
        QueryableList {
            inner: Vec::with_capacity(cap),
        }
    }

    /// Creates a list containing `count` clones of `value`.
    ///
    /// # Panics
    /// Panics if the memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use queryable_list::collections::list::QueryableList;
    /// let list = QueryableList::repeat('a', 3);
    /// assert_eq!(list, ['a', 'a', 'a']);
    /// ```
    pub fn repeat(value: T, count: usize) -> QueryableList<T>
    where
        T: Clone,
    {
        QueryableList {
            inner: vec![value; count],
        }
    }

    /// Returns the number of elements the list can hold without reallocating.
    pub fn cap(&self) -> usize {
        self.inner.capacity()
    }

    /// Pushes the provided value onto the end of the list.
    ///
    /// # Panics
    /// Panics if the memory layout of the list would have a size that exceeds [`isize::MAX`].
    pub fn push(&mut self, value: T) {
        self.inner.push(value);
    }

    /// Pops the last value off the end of the list, if there is one.
    pub fn pop(&mut self) -> Option<T> {
        self.inner.pop()
    }

    /// Removes all elements, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Removes and returns the element at `index`, shifting all following elements down to fill
    /// the gap. Returns [`None`] and leaves the list untouched if `index` is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use queryable_list::collections::list::QueryableList;
    /// let mut list: QueryableList<_> = "Hello".chars().collect();
    /// assert_eq!(list.remove_at(1), Some('e'));
    /// assert_eq!(list.remove_at(10), None);
    /// assert_eq!(String::from(list), "Hllo");
    /// ```
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        self.try_remove_at(index).ok()
    }

    /// Removes and returns the element at `index`, like [`remove_at`](QueryableList::remove_at),
    /// but reports why nothing was removed.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn try_remove_at(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        if index >= self.len() {
            return Err(IndexOutOfBounds {
                index,
                len: self.len(),
            });
        }
        Ok(self.inner.remove(index))
    }

    /// Moves all elements from `other` onto the end of self.
    ///
    /// # Panics
    /// Panics if the memory layout of the list would have a size that exceeds [`isize::MAX`].
    pub fn append(&mut self, other: QueryableList<T>) {
        self.inner.extend(other.inner);
    }

    /// Consumes the list, returning the underlying [`Vec`] without copying.
    pub fn into_vec(self) -> Vec<T> {
        self.inner
    }
}

impl<T> Default for QueryableList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for QueryableList<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        self.inner.extend(iter);
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for QueryableList<T> {
    fn extend<A: IntoIterator<Item = &'a T>>(&mut self, iter: A) {
        self.inner.extend(iter);
    }
}

impl<T> FromIterator<T> for QueryableList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        QueryableList {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<T> Deref for QueryableList<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T> DerefMut for QueryableList<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl<T> AsRef<[T]> for QueryableList<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for QueryableList<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for QueryableList<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for QueryableList<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

impl<T> From<Vec<T>> for QueryableList<T> {
    fn from(value: Vec<T>) -> Self {
        QueryableList { inner: value }
    }
}

impl<T> From<QueryableList<T>> for Vec<T> {
    fn from(value: QueryableList<T>) -> Self {
        value.inner
    }
}

impl<T, const N: usize> From<[T; N]> for QueryableList<T> {
    fn from(value: [T; N]) -> Self {
        QueryableList {
            inner: Vec::from(value),
        }
    }
}

impl<T: Clone> From<&[T]> for QueryableList<T> {
    fn from(value: &[T]) -> Self {
        QueryableList {
            inner: value.to_vec(),
        }
    }
}

impl From<&str> for QueryableList<char> {
    fn from(value: &str) -> Self {
        value.chars().collect()
    }
}

impl From<String> for QueryableList<char> {
    fn from(value: String) -> Self {
        value.chars().collect()
    }
}

impl From<&QueryableList<char>> for String {
    fn from(value: &QueryableList<char>) -> Self {
        value.iter().collect()
    }
}

impl From<QueryableList<char>> for String {
    fn from(value: QueryableList<char>) -> Self {
        String::from(&value)
    }
}

/// Concatenates a list with anything that can be viewed as a slice of the same element type,
/// producing a new list.
///
/// # Examples
/// ```
/// # use queryable_list::collections::list::QueryableList;
/// let front = QueryableList::from([1, 2]);
/// let back = QueryableList::from([3]);
/// assert_eq!(front + &back + [4, 5], [1, 2, 3, 4, 5]);
/// ```
impl<T: Clone, S: AsRef<[T]>> Add<S> for QueryableList<T> {
    type Output = QueryableList<T>;

    fn add(mut self, rhs: S) -> Self::Output {
        self += rhs;
        self
    }
}

impl<T: Clone, S: AsRef<[T]>> AddAssign<S> for QueryableList<T> {
    fn add_assign(&mut self, rhs: S) {
        self.inner.extend_from_slice(rhs.as_ref());
    }
}

impl<T: PartialEq> PartialEq<[T]> for QueryableList<T> {
    fn eq(&self, other: &[T]) -> bool {
        **self == *other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for QueryableList<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        **self == *other
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for QueryableList<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.inner == *other
    }
}

impl<T: Hash> Hash for QueryableList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}
