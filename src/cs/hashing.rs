//! Hash table implementations.
//!
//! [`separate`] provides a separate-chaining map whose buckets are singly linked chains
//! (see [`bucket`]), walked in bucket order by [`iter::Iter`].

pub mod bucket;
pub mod iter;
pub mod separate;

pub use bucket::Entry;
pub use iter::Iter;
pub use separate::{
    ChainedHashMap, ChainedHashMapBuilder, DEFAULT_INITIAL_CAPACITY, DEFAULT_LOAD_FACTOR,
};
