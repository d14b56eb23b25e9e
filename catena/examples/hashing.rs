//! Combine the hashes of a record's heterogeneous fields into one value.

use catena::hash::combined_hash;
use catena::prelude::*;

mod common;
use common::{aside, banner};

#[derive(Debug)]
struct Customer {
    first_name: String,
    last_name: String,
    number: u32,
}

impl Customer {
    fn new(first_name: &str, last_name: &str, number: u32) -> Self {
        Customer {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            number,
        }
    }

    fn combined(&self) -> u64 {
        combined_hash(&(&self.first_name, &self.last_name, self.number).into_list())
    }
}

fn main() {
    banner("Combined hashes of heterogeneous records");
    let c1 = Customer::new("John", "Doe", 123);
    let c2 = Customer::new("Jane", "Smith", 456);
    let c3 = Customer::new("John", "Doe", 123); // same fields as c1
    println!("hash of c1: {}", c1.combined());
    println!("hash of c2: {}", c2.combined());
    println!("hash of c3: {}", c3.combined());
    aside("c1 and c3 agree; the fold is deterministic over field values");

    banner("Order sensitivity");
    let ab = combined_hash(&(1u8, 2u8).into_list());
    let ba = combined_hash(&(2u8, 1u8).into_list());
    println!("hash of (1, 2): {}", ab);
    println!("hash of (2, 1): {}", ba);
}
