//! # Probe Map
//!
//! A Rust implementation of a hash table using open addressing with linear
//! probing.
//!
//! All entries live directly in a single prime-sized backing array. A
//! collision is resolved by scanning forward one slot at a time, wrapping at
//! the end of the array. Deleting a key leaves a *tombstone* in its slot so
//! that probe sequences for other keys keep working; re-inserting the same
//! key reactivates the tombstone in place. As soon as more than half of the
//! slots have been touched, the table rehashes every live entry into a fresh
//! array of the next prime above double the capacity, dropping tombstones in
//! the process.
//!
//! Two behaviors differ from `std::collections::HashMap`:
//!
//! - `insert` rejects a key that is already present (returns `false`) instead
//!   of overwriting the stored value.
//! - The table never shrinks; capacity only grows.
//!
//! ## Basic Usage
//!
//! ```rust
//! use probemap::ProbeMap;
//!
//! // Create a new table (11 slots by default)
//! let mut map = ProbeMap::new();
//!
//! // Insert values
//! assert!(map.insert("apple".to_string(), 1));
//! assert!(map.insert("banana".to_string(), 2));
//!
//! // Retrieve values
//! assert_eq!(map.get("apple"), Some(&1));
//!
//! // Duplicate keys are rejected, not overwritten
//! assert!(!map.insert("apple".to_string(), 10));
//! assert_eq!(map.get("apple"), Some(&1));
//!
//! // Remove values; re-inserting the key afterwards succeeds
//! assert!(map.remove("apple"));
//! assert_eq!(map.get("apple"), None);
//! assert!(map.insert("apple".to_string(), 10));
//! assert_eq!(map.get("apple"), Some(&10));
//! ```
//!
//! ## Probe Introspection
//!
//! The pre-probe hash seed and the resolved slot index are exposed for
//! diagnostics, and the `Display` impl dumps the whole slot array one line
//! per index:
//!
//! ```rust
//! use probemap::ProbeMap;
//!
//! let mut map = ProbeMap::new();
//! map.insert("apple".to_string(), 1);
//!
//! let seed = map.hash_index("apple");
//! let slot = map.location("apple");
//! assert!(slot.is_some());
//! assert!(seed < map.capacity());
//!
//! // One line per slot: `index`, `index  key  value`, or
//! // `index  key  value  deleted` for a tombstone.
//! let dump = map.to_string();
//! assert_eq!(dump.lines().count(), map.capacity());
//! ```

/// Prime sizing helpers for the backing array
mod prime;
/// Module implementing the linear-probing hash table
mod probe_map;
/// Utility functions and traits for the table
mod utils;

pub use probe_map::{Iter, ProbeMap};
pub use utils::MapExtensions;
