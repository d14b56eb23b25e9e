//! Conversions back and forth between flat tuples like `(P, Q, R)` and
//! their corresponding inductive list structures like `(P, (Q, (R, ())))`.
//!
//! Internally, this library computes over inductive lists, but sequences
//! are written and read as flat tuples, for readability. The traits here
//! convert between the two equivalent representations; the conversion is
//! the identity on element values and their order.
//!
//! At present, tuples up to size 16 are supported.

/// Convert a flat tuple into its corresponding inductive list structure.
///
/// # Examples
///
/// ```
/// use catena::prelude::*;
///
/// let list: (i32, (f64, (&str, ()))) = (42, 3.14, "hello").into_list();
/// assert_eq!(list, (42, (3.14, ("hello", ()))));
/// ```
pub trait Tuple: Sized {
    /// The corresponding inductive list.
    type AsList: List<AsTuple = Self>;

    /// Restructure this tuple into its inductive list form.
    fn into_list(self) -> Self::AsList;
}

/// Convert an inductive list structure into its corresponding flat tuple.
///
/// # Examples
///
/// ```
/// use catena::prelude::*;
///
/// let list = (42, (3.14, ("hello", ())));
/// assert_eq!(list.into_tuple(), (42, 3.14, "hello"));
/// ```
pub trait List: Sized {
    /// The corresponding flat tuple.
    type AsTuple: Tuple<AsList = Self>;

    /// Flatten this list into its tuple form.
    fn into_tuple(self) -> Self::AsTuple;
}

catena_macro::impl_tuples!(16);
