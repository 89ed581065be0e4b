#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(all(test, not(feature = "std")))]
extern crate std;

pub mod hash_code;

/// A HashMap with a null key, implemented using separate chaining.
///
/// This module provides a `HashMap` that wraps the `HashTable` and maps
/// nullable keys to nullable values with a configurable hasher.
pub mod hash_map;

pub mod hash_table;

pub use hash_code::HashCodeBuilder;
pub use hash_map::HashMap;
#[cfg(any(test, feature = "stats"))]
pub use hash_table::DebugStats;
pub use hash_table::HashTable;

cfg_if::cfg_if! {
    if #[cfg(feature = "foldhash")] {
        /// Randomly seeded hasher builder for keys from untrusted sources.
        pub type RandomState = foldhash::fast::RandomState;
    } else if #[cfg(feature = "std")] {
        /// Randomly seeded hasher builder for keys from untrusted sources.
        pub type RandomState = std::hash::RandomState;
    }
}

/// A [`HashMap`] using the randomly seeded [`RandomState`].
#[cfg(any(feature = "foldhash", feature = "std"))]
pub type RandomHashMap<K, V> = HashMap<K, V, RandomState>;
