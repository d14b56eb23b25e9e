/*!
> **catena (noun):** a connected series; a chain whose links each carry the
> next.
>
> **catena (crate):** compile-time heterogeneous sequences for Rust.

A heterogeneous sequence is an ordered, fixed-arity aggregate whose elements
may have different, independently specified types: `(42, 3.14, "hello")` is
one with an `i32` first, an `f64` second, and a `&str` third. This crate
gives such sequences positional operations (head, tail, indexed access,
concatenation, folds) with every position and type resolved **entirely at
compile time**:

- access compiles to plain field projections, with **no runtime cost** in
  time or memory: no type tags, no dispatch, no bounds checks;
- arity mismatches, type mismatches, and out-of-range positions are
  **compile errors**, never panics;
- sequences have **whole-aggregate value semantics**: they are compared,
  cloned, copied, moved, hashed, and dropped as a unit, exactly as their
  element types permit.

Sequences are written and read as flat tuples, and restructured into an
inductive form, `(42, (3.14, ("hello", ())))`, that the crate's traits
recurse over:

```
use catena::prelude::*;

let list = (42, 3.14, "hello".to_string()).into_list();

assert_eq!(*list.head(), 42);
assert_eq!(*list.tail().head(), 3.14);
assert_eq!(list.tail().tail().head(), "hello");
assert_eq!(*list.get::<1>(), 3.14);
```

# Quick reference

The [`prelude`] module exports most of the relevant constructs; most
programs should `use catena::prelude::*;`.

| Operation | Trait | Notes |
| :-------- | :---- | :---- |
| `tuple.into_list()` / `list.into_tuple()` | [`Tuple`](tuple::Tuple) / [`List`](tuple::List) | up to arity 16 |
| `list.head()`, `list.tail()`, `list.split()` | [`NonEmpty`](list::NonEmpty) | absent on the empty sequence |
| `list.get::<N>()` | [`Positional`](list::Positional) | sugar over [`Select`](list::Select) |
| `list.len()`, `list.is_empty()` | [`HasLength`](list::HasLength) | length is also a type, [`HasLength::Length`](list::HasLength::Length) |
| `list.append(other)` | [`Append`](list::Append) | result type computed at compile time |
| `list.collect()` | [`Homogeneous`](list::Homogeneous) | into any [`Storage`](storage::Storage) |
| `render(template, args)` | [`FormatArgs`](format::FormatArgs) | `%`-directive substitution |
| `combined_hash(&list)` | [`EachHash`](hash::EachHash) | order-sensitive fold |

# Compile-time errors

Everything that can go wrong with a sequence's shape goes wrong at compile
time. Default construction, for instance, exists exactly when every element
type is default-constructible:

```
use catena::prelude::*;

let zeroes: (u8, (String, ())) = Default::default();
assert_eq!(zeroes.into_tuple(), (0, String::new()));
```

…and is rejected otherwise:

```compile_fail
struct NoDefault(u8);

let broken: (NoDefault, ()) = Default::default();
```

The sole runtime failure mode in the crate is
[`DirectiveError`](format::DirectiveError), returned when a format template
and its arguments disagree in number.
*/

#![recursion_limit = "256"]
#![allow(clippy::type_complexity)]
#![warn(missing_docs)]
#![warn(missing_copy_implementations, missing_debug_implementations)]
#![warn(unused_qualifications, unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]

pub mod format;
pub mod hash;
pub mod list;
pub mod storage;
pub mod tuple;
pub mod unary;

/// The prelude module for quickly getting started with catena.
///
/// This module is designed to be imported as `use catena::prelude::*;`,
/// which brings into scope the traits and types needed to build and take
/// apart heterogeneous sequences.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::list::{Append, HasLength, Homogeneous, NonEmpty, Positional, Select};
    #[doc(no_inline)]
    pub use crate::storage::Storage;
    #[doc(no_inline)]
    pub use crate::tuple::{List, Tuple};
    #[doc(no_inline)]
    pub use crate::unary::{Unary, UnaryOf, S, Z};
}
