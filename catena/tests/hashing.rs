use catena::hash::{combine, combined_hash};
use catena::prelude::*;

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn single_hash<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn equal_sequences_hash_equal() {
    let a = ("John", "Doe", 123u32).into_list();
    let b = ("John", "Doe", 123u32).into_list();
    assert_eq!(combined_hash(&a), combined_hash(&b));
}

#[test]
fn differing_values_hash_differently() {
    let a = ("John", "Doe", 123u32).into_list();
    let b = ("Jane", "Smith", 456u32).into_list();
    assert_ne!(combined_hash(&a), combined_hash(&b));
}

#[test]
fn fold_is_order_sensitive() {
    let ab = (1u8, 2u8).into_list();
    let ba = (2u8, 1u8).into_list();
    assert_ne!(combined_hash(&ab), combined_hash(&ba));
}

#[test]
fn fold_matches_a_manual_chain() {
    let list = ("x", 9u16).into_list();
    let manual = combine(combine(0, single_hash(&"x")), single_hash(&9u16));
    assert_eq!(combined_hash(&list), manual);
}

#[test]
fn empty_sequence_hashes_to_the_seed() {
    assert_eq!(combined_hash(&()), 0);
}
