//! Dependent result types computed from types alone: no value is needed to
//! name the element type at a position, the length of a concatenation, or
//! the unary form of a constant.

use catena::prelude::*;
use static_assertions::assert_type_eq_all;

mod common;
use common::{aside, banner};

type Record = <(u32, f64, String) as Tuple>::AsList;

// The element type at each position is a projection computed from `Record`
// alone; no value of the type is ever constructed to check these.
assert_type_eq_all!(<Record as Select<Z>>::Selected, u32);
assert_type_eq_all!(<Record as Select<S<Z>>>::Selected, f64);
assert_type_eq_all!(<Record as Select<UnaryOf<2>>>::Selected, String);

type Suffix = <(char,) as Tuple>::AsList;
type Joined = <Record as Append<Suffix>>::Output;

assert_type_eq_all!(<Joined as HasLength>::Length, UnaryOf<4>);

fn main() {
    banner("Types computed from types");
    let record: Record = (7, 2.5, "metre".to_string()).into_list();
    // `selected` takes its type from the Select projection; the compiler
    // picked f64 with no annotation here.
    let selected = record.get::<1>();
    println!("position 1 holds {}", selected);
    println!(
        "Record length, read off the type: {}",
        <Record as HasLength>::Length::VALUE
    );
    println!(
        "Joined length, computed by Append: {}",
        <Joined as HasLength>::Length::VALUE
    );
    aside("the assert_type_eq_all! checks above compile, which is the test");
}
