/// Produces the value that a matched element is replaced with.
pub trait Replacement<T> {
    /// Returns the replacement for `item`.
    fn replacement_for(&self, item: &T) -> T;
}

impl<T, P: Replacement<T> + ?Sized> Replacement<T> for &P {
    fn replacement_for(&self, item: &T) -> T {
        (**self).replacement_for(item)
    }
}

/// Replaces every matched element with a clone of the same value, converted into `T`.
///
/// # Examples
/// ```
/// # use queryable_list::collections::matcher::{Constant, Replacement};
/// let replacement: String = Constant("redacted").replacement_for(&String::from("secret"));
/// assert_eq!(replacement, "redacted");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Constant<V>(pub V);

impl<T, V: Clone + Into<T>> Replacement<T> for Constant<V> {
    fn replacement_for(&self, _item: &T) -> T {
        self.0.clone().into()
    }
}

/// Replaces every matched element with the result of applying the closure to it.
///
/// # Examples
/// ```
/// # use queryable_list::collections::matcher::{Mapped, Replacement};
/// assert_eq!(Mapped(|n: &i32| n + 1).replacement_for(&2), 3);
/// ```
#[derive(Clone, Copy)]
pub struct Mapped<F>(pub F);

impl<T, F: Fn(&T) -> T> Replacement<T> for Mapped<F> {
    fn replacement_for(&self, item: &T) -> T {
        (self.0)(item)
    }
}

/// Creates a [`Constant`] replacement.
pub const fn constant<V>(value: V) -> Constant<V> {
    Constant(value)
}

/// Creates a [`Mapped`] replacement.
pub const fn mapped<F>(transformer: F) -> Mapped<F> {
    Mapped(transformer)
}
