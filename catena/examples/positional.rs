//! Build a three-element heterogeneous sequence and read it back every way
//! the crate offers.

use catena::prelude::*;

mod common;
use common::{aside, banner};

fn main() {
    banner("Head and tail");
    let list = (42, 3.14, "hello".to_string()).into_list();
    println!("head()               = {}", list.head());
    println!("tail().head()        = {}", list.tail().head());
    println!("tail().tail().head() = {}", list.tail().tail().head());
    aside("each position has its own type: i32, f64, String");

    banner("Const-generic positions");
    println!("get::<0>() = {}", list.get::<0>());
    println!("get::<1>() = {}", list.get::<1>());
    println!("get::<2>() = {}", list.get::<2>());
    println!("len() = {}, is_empty() = {}", list.len(), list.is_empty());

    banner("Mutation through a position");
    let mut list = list;
    list.get_mut::<2>().push_str(", world");
    println!("after get_mut::<2>().push_str(..): {}", list.get::<2>());

    banner("Concatenation");
    let joined = (1u8, "two").into_list().append((3.0f32,).into_list());
    println!("appended: {:?}", joined.into_tuple());

    // The rejected programs, for reference:
    //     ().head()        -- the empty sequence exposes no head or tail
    //     list.get::<3>()  -- positions past the end do not typecheck
}
