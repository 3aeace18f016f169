//! # Chained Hash Map
//!
//! A Rust implementation of a string-keyed hash table using separate chaining.
//!
//! - Keys are placed by a polynomial rolling hash (base 31) that is reduced modulo the
//!   current bucket count after every character.
//! - Each bucket holds a chain of entries; collisions append to the chain.
//! - Before every `set`, if the load factor is above 0.75 the bucket table is doubled and
//!   every key is rehashed against the new capacity.
//! - Removal never shrinks the table; `clear` goes back to 16 buckets.
//!
//! ## Basic Usage
//!
//! ```rust
//! use chainmap::ChainedHashMap;
//!
//! // Create a new hash map
//! let mut map = ChainedHashMap::new();
//!
//! // Insert values
//! map.set("apple", 1);
//! map.set("banana", 2);
//!
//! // Retrieve values
//! assert_eq!(map.get("apple"), Some(&1));
//! assert!(map.has("banana"));
//!
//! // Update values
//! map.set("apple", 10);
//! assert_eq!(map.get("apple"), Some(&10));
//! assert_eq!(map.len(), 2);
//!
//! // Remove values
//! assert!(map.remove("apple"));
//! assert_eq!(map.get("apple"), None);
//! assert!(!map.remove("apple"));
//! ```
//!
//! ## Growth
//!
//! ```rust
//! use chainmap::ChainedHashMap;
//!
//! let mut map = ChainedHashMap::new();
//! for i in 0..14 {
//!     map.set(format!("key-{i}"), i);
//! }
//!
//! // the 14th set saw 13 / 16 > 0.75 and doubled the table first
//! assert_eq!(map.capacity(), 32);
//! assert_eq!(map.get("key-0"), Some(&0));
//! ```

/// Module implementing the separate-chaining hash map
mod chained_hashmap;
/// Module implementing the bucket index function
mod hash;
/// Module implementing bucket occupancy statistics
mod stats;

pub use chained_hashmap::{ChainedHashMap, INITIAL_CAPACITY, Iter, LOAD_FACTOR};
pub use hash::{HASH_BASE, bucket_index};
pub use stats::ChainStats;
