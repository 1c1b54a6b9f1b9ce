/// Decides whether an element of type `T` is included in a query.
///
/// Implemented by [`ByValue`], [`ByPredicate`] and [`ByAccessor`], and by references to any
/// matcher so that one matcher can be reused across several queries.
pub trait Matcher<T: ?Sized> {
    /// Returns true if `item` satisfies this matcher.
    fn matches(&self, item: &T) -> bool;
}

impl<T: ?Sized, M: Matcher<T> + ?Sized> Matcher<T> for &M {
    fn matches(&self, item: &T) -> bool {
        (**self).matches(item)
    }
}

/// Matches elements that are equal to the contained value.
///
/// The value doesn't have to be a `T`, only something that `T` can be compared with via
/// [`PartialEq`].
///
/// # Examples
/// ```
/// # use queryable_list::collections::matcher::{ByValue, Matcher};
/// let name = String::from("ferris");
/// assert!(ByValue("ferris").matches(&name));
/// assert!(!ByValue("corro").matches(&name));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ByValue<V>(pub V);

impl<T: PartialEq<V> + ?Sized, V> Matcher<T> for ByValue<V> {
    fn matches(&self, item: &T) -> bool {
        *item == self.0
    }
}

/// Matches elements for which the contained closure returns true.
///
/// # Examples
/// ```
/// # use queryable_list::collections::matcher::{ByPredicate, Matcher};
/// let negative = ByPredicate(|n: &i32| *n < 0);
/// assert!(negative.matches(&-3));
/// assert!(!negative.matches(&0));
/// ```
#[derive(Clone, Copy)]
pub struct ByPredicate<F>(pub F);

impl<T: ?Sized, F: Fn(&T) -> bool> Matcher<T> for ByPredicate<F> {
    fn matches(&self, item: &T) -> bool {
        (self.0)(item)
    }
}

/// Matches elements whose projection through `accessor` is equal to `expected`.
///
/// The accessor stands in for a field access or a method call. Any arguments the method would
/// need are captured by the closure.
///
/// # Examples
/// ```
/// # use queryable_list::collections::matcher::{ByAccessor, Matcher};
/// struct Point { x: i32, y: i32 }
///
/// let on_axis = ByAccessor::new(|p: &Point| p.x * p.y, 0);
/// assert!(on_axis.matches(&Point { x: 0, y: 4 }));
/// assert!(!on_axis.matches(&Point { x: 1, y: 4 }));
/// assert_eq!(*on_axis.expected(), 0);
/// ```
#[derive(Clone, Copy)]
pub struct ByAccessor<F, R> {
    accessor: F,
    expected: R,
}

impl<F, R> ByAccessor<F, R> {
    /// Creates a new matcher comparing the output of `accessor` against `expected`.
    pub const fn new(accessor: F, expected: R) -> ByAccessor<F, R> {
        ByAccessor { accessor, expected }
    }

    /// Returns the value that projected elements are compared against.
    pub const fn expected(&self) -> &R {
        &self.expected
    }
}

impl<T: ?Sized, F: Fn(&T) -> R, R: PartialEq> Matcher<T> for ByAccessor<F, R> {
    fn matches(&self, item: &T) -> bool {
        (self.accessor)(item) == self.expected
    }
}

/// Creates a [`ByValue`] matcher.
pub const fn by_value<V>(value: V) -> ByValue<V> {
    ByValue(value)
}

/// Creates a [`ByPredicate`] matcher.
pub const fn by_predicate<F>(predicate: F) -> ByPredicate<F> {
    ByPredicate(predicate)
}

/// Creates a [`ByAccessor`] matcher.
pub const fn by_accessor<F, R>(accessor: F, expected: R) -> ByAccessor<F, R> {
    ByAccessor::new(accessor, expected)
}
