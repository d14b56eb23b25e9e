//! Order-sensitive hash combination across heterogeneous sequences.
//!
//! Equality of combined hashes follows equality of sequences; permuting a
//! sequence changes its hash.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::list::sealed;

// The 32-bit golden ratio, the classic hash_combine mixing constant.
const GOLDEN_RATIO: u64 = 0x9e37_79b9;

/// Mix a new hash into a running seed.
///
/// One step of the fold performed by [`combined_hash`]; exposed so callers
/// can chain further hashes onto a combined one.
pub fn combine(seed: u64, hash: u64) -> u64 {
    seed ^ (hash
        .wrapping_add(GOLDEN_RATIO)
        .wrapping_add(seed << 6)
        .wrapping_add(seed >> 2))
}

/// A sequence whose every element is [`Hash`], foldable into one combined
/// hash.
pub trait EachHash: sealed::Inductive {
    /// Fold every element's hash into `seed`, front to back.
    fn fold_hash(&self, seed: u64) -> u64;
}

impl EachHash for () {
    fn fold_hash(&self, seed: u64) -> u64 {
        seed
    }
}

impl<H: Hash, T: EachHash> EachHash for (H, T) {
    fn fold_hash(&self, seed: u64) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.0.hash(&mut hasher);
        self.1.fold_hash(combine(seed, hasher.finish()))
    }
}

/// Combine the hashes of every element of a sequence, starting from a zero
/// seed.
///
/// # Examples
///
/// ```
/// use catena::hash::combined_hash;
/// use catena::prelude::*;
///
/// let a = ("John", "Doe", 123).into_list();
/// let b = ("John", "Doe", 123).into_list();
/// assert_eq!(combined_hash(&a), combined_hash(&b));
///
/// // The fold is order-sensitive.
/// let ab = (1u8, 2u8).into_list();
/// let ba = (2u8, 1u8).into_list();
/// assert_ne!(combined_hash(&ab), combined_hash(&ba));
/// ```
pub fn combined_hash<L: EachHash>(list: &L) -> u64 {
    list.fold_hash(0)
}
