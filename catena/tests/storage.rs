use catena::prelude::*;
use catena::storage::{replicate, Storage};

use std::collections::{LinkedList, VecDeque};
use std::mem;

#[test]
fn replicate_fills_every_backend() {
    let v: Vec<i64> = replicate(10, 0);
    let d: VecDeque<i64> = replicate(10, 0);
    let l: LinkedList<i64> = replicate(10, 0);
    assert_eq!(v.len(), 10);
    assert_eq!(d.len(), 10);
    assert_eq!(l.len(), 10);
}

#[test]
fn string_storage_counts_chars_not_bytes() {
    let s: String = replicate(2, 'é');
    assert_eq!(Storage::len(&s), 2);
    assert_eq!(s.len(), 4); // the inherent method still counts bytes
    assert_eq!(s, "éé");
}

#[test]
fn collect_preserves_order() {
    let digits = (1, 2, 3).into_list();
    let collected: Vec<i32> = digits.collect();
    assert_eq!(collected, vec![1, 2, 3]);

    let words = ("a".to_string(), "b".to_string()).into_list();
    let collected: VecDeque<String> = words.collect();
    assert_eq!(collected, vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn empty_sequence_collects_to_empty_storage() {
    let nothing: Vec<u8> = ().collect();
    assert!(nothing.is_empty());
}

#[test]
fn swap_applies_to_any_storage() {
    let mut filled: VecDeque<u8> = replicate(3, 1);
    let mut empty = VecDeque::new();
    mem::swap(&mut filled, &mut empty);
    assert!(filled.is_empty());
    assert_eq!(empty.len(), 3);
}
