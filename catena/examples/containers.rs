//! One routine, generic over the storage capability set, exercised against
//! four different container backends.

use catena::prelude::*;
use catena::storage::{replicate, Storage};

use std::collections::{LinkedList, VecDeque};
use std::mem;

mod common;
use common::{aside, banner};

/// Fill a container with clones of a seed element, swap it with an empty
/// one, and move the result: the whole lifecycle, against any backend.
fn exercise<S>(name: &str, seed: S::Item)
where
    S: Storage,
    S::Item: Clone,
{
    let mut filled: S = replicate(10, seed);
    let mut other = S::default();
    mem::swap(&mut filled, &mut other);
    let moved = other;
    println!(
        "{:<20} after fill/swap/move: {} elements (swapped-out side: {})",
        name,
        moved.len(),
        filled.len(),
    );
}

fn main() {
    banner("One routine, many storage backends");
    exercise::<Vec<i32>>("Vec<i32>", 0);
    exercise::<VecDeque<String>>("VecDeque<String>", String::new());
    exercise::<LinkedList<f64>>("LinkedList<f64>", 0.0);
    exercise::<String>("String", 'x');
    aside("the routine names only capabilities: construct, append, measure");

    banner("Draining a single-typed sequence into storage");
    let digits = (1, 2, 3).into_list();
    let collected: LinkedList<i32> = digits.collect();
    println!("collected in order: {:?}", collected);
}
