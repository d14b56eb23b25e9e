//! Closures: capture modes, mutable state, and use as comparators.

use catena::prelude::*;

mod common;
use common::{aside, banner};

fn main() {
    banner("Capture by mutable reference");
    let mut total = 0;
    let mut add = |n: i32| total += n;
    add(5);
    add(10);
    println!("total = {}", total);

    banner("Move closures own their captures");
    let message = "owned by the closure".to_string();
    let shout = move || println!("{}", message.to_uppercase());
    shout();
    shout();
    // println!("{}", message); -- does not compile: `message` was moved

    banner("Stateful FnMut");
    let mut counter = {
        let mut count = 0;
        move || {
            count += 1;
            count
        }
    };
    println!("counter() = {}", counter());
    println!("counter() = {}", counter());
    println!("counter() = {}", counter());

    banner("Closures as comparators");
    let people = (
        ("Doe".to_string(), "John".to_string()),
        ("Smith".to_string(), "Jane".to_string()),
        ("Doe".to_string(), "Jane".to_string()),
    )
        .into_list();
    let mut people: Vec<(String, String)> = people.collect();
    people.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
    for (last, first) in &people {
        println!("{}, {}", last, first);
    }

    banner("Filtering with captured bounds");
    let (low, high) = (30, 100);
    let mut numbers = vec![5, 28, 50, 83, 70, 90, 12, 45, 67, 33];
    numbers.retain(|n| (low..=high).contains(n));
    println!("kept {:?}", numbers);
    aside("the closure captured `low` and `high` from the enclosing scope");
}
