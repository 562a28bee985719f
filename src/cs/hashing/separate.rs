//! # Separate Chaining Hash Table
//!
//! This module implements a **HashMap** using **separate chaining** over singly linked
//! bucket chains. It supports:
//! - **Generic** key-value pairs (`K: Hash + Eq, V`).
//! - **Lazy** buckets: a slot holds no chain until the first key lands in it.
//! - **Growth** by doubling the bucket array once `capacity * load_factor <= len`, checked
//!   before every insertion.
//! - **Insert**, **get** and **iter** operations. There is no removal and no shrinking.
//!
//! The key's own `Hash` implementation is fed to a fixed-key hasher, so bucket placement,
//! and therefore iteration order, is the same from run to run.
//!
//! A map is meant for one thread of control at a time. The borrow rules already forbid
//! mutating the map while an [`Iter`] over it is alive.

use std::borrow::Borrow;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{BuildHasher, BuildHasherDefault, Hash};
use std::mem;

use log::{debug, trace};

use super::bucket::{Bucket, Entry};
use super::iter::Iter;
use crate::error::{Error, Result};

/// Default number of buckets if none specified.
pub const DEFAULT_INITIAL_CAPACITY: usize = 16;

/// Default load factor; the array doubles once half the buckets' worth of keys are stored.
pub const DEFAULT_LOAD_FACTOR: f64 = 0.5;

type FixedState = BuildHasherDefault<DefaultHasher>;

/// A separate-chaining HashMap with generic `K, V`.
pub struct ChainedHashMap<K, V> {
    buckets: Vec<Option<Bucket<K, V>>>,
    /// The number of stored key-value pairs.
    len: usize,
    load_factor: f64,
    build_hasher: FixedState,
}

/// A builder for the `ChainedHashMap`.
/// Call `.with_capacity(...)` and `.with_load_factor(...)`, then `.build()`.
#[derive(Debug, Clone)]
pub struct ChainedHashMapBuilder {
    capacity: usize,
    load_factor: f64,
}

impl Default for ChainedHashMapBuilder {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_INITIAL_CAPACITY,
            load_factor: DEFAULT_LOAD_FACTOR,
        }
    }
}

impl ChainedHashMapBuilder {
    /// Creates a new builder with the default capacity and load factor.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the initial number of buckets. Zero is rejected by [`build`](Self::build).
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the load factor. The map grows once `capacity * load_factor <= len`.
    pub fn with_load_factor(mut self, load_factor: f64) -> Self {
        self.load_factor = load_factor;
        self
    }

    /// Build the final `ChainedHashMap`.
    ///
    /// # Errors
    /// * `Error::InvalidCapacity` - if the capacity is zero
    /// * `Error::InvalidLoadFactor` - if the load factor is not finite or outside `(0, 1]`
    pub fn build<K: Hash + Eq, V>(self) -> Result<ChainedHashMap<K, V>> {
        if self.capacity == 0 {
            return Err(Error::invalid_capacity(self.capacity));
        }
        if !self.load_factor.is_finite() || self.load_factor <= 0.0 || self.load_factor > 1.0 {
            return Err(Error::invalid_load_factor(self.load_factor));
        }
        Ok(ChainedHashMap::from_parts(self.capacity, self.load_factor))
    }
}

fn empty_buckets<K, V>(capacity: usize) -> Vec<Option<Bucket<K, V>>> {
    let mut buckets = Vec::with_capacity(capacity);
    buckets.resize_with(capacity, || None);
    buckets
}

impl<K: Hash + Eq, V> ChainedHashMap<K, V> {
    /// Creates an empty map with 16 buckets and a load factor of 0.5.
    pub fn new() -> Self {
        Self::from_parts(DEFAULT_INITIAL_CAPACITY, DEFAULT_LOAD_FACTOR)
    }

    /// Creates an empty map with `capacity` buckets.
    ///
    /// # Errors
    /// Returns `Error::InvalidCapacity` if `capacity` is zero.
    ///
    /// # Examples
    /// ```
    /// use chainmap::ChainedHashMap;
    ///
    /// let map: ChainedHashMap<&str, i32> = ChainedHashMap::with_capacity(4).unwrap();
    /// assert_eq!(map.capacity(), 4);
    /// assert!(ChainedHashMap::<&str, i32>::with_capacity(0).is_err());
    /// ```
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        ChainedHashMapBuilder::new().with_capacity(capacity).build()
    }

    /// Returns a builder for configuring capacity and load factor.
    pub fn builder() -> ChainedHashMapBuilder {
        ChainedHashMapBuilder::new()
    }

    fn from_parts(capacity: usize, load_factor: f64) -> Self {
        ChainedHashMap {
            buckets: empty_buckets(capacity),
            len: 0,
            load_factor,
            build_hasher: FixedState::default(),
        }
    }

    /// Inserts a key-value pair into the map.
    /// If the key already exists, its value is replaced and the old value returned; the
    /// stored key is left untouched.
    ///
    /// # Examples
    /// ```
    /// use chainmap::ChainedHashMap;
    ///
    /// let mut map = ChainedHashMap::new();
    /// assert_eq!(map.put("a", 1), None);
    /// assert_eq!(map.put("b", 2), None);
    /// assert_eq!(map.put("a", 3), Some(1));
    /// assert_eq!(map.len(), 2);
    /// ```
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        if self.capacity() as f64 * self.load_factor <= self.len as f64 {
            self.resize();
        }

        let index = self.bucket_index(&key);
        let bucket = self.buckets[index].get_or_insert_with(|| {
            trace!("allocating bucket {}", index);
            Bucket::new()
        });

        let previous = bucket.add_or_update(key, value);
        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    /// Returns a reference to the value corresponding to the key, if present.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        self.buckets[index]
            .as_ref()
            .and_then(|bucket| bucket.find(key))
            .map(|entry| entry.value())
    }

    /// Returns a mutable reference to the value corresponding to the key, if present.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        self.buckets[index]
            .as_mut()
            .and_then(|bucket| bucket.find_mut(key))
    }

    /// Returns true if the map holds an entry for `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Maps a key to its slot. The 64-bit hash is unsigned, so the remainder is always in range.
    fn bucket_index<Q: Hash + ?Sized>(&self, key: &Q) -> usize {
        let h = self.build_hasher.hash_one(key);
        (h % self.buckets.len() as u64) as usize
    }

    /// Doubles the bucket array and re-inserts every entry through `put`.
    fn resize(&mut self) {
        let old_capacity = self.buckets.len();
        let new_capacity = old_capacity * 2;
        let old = mem::replace(&mut self.buckets, empty_buckets(new_capacity));
        let rehashed = self.len;
        self.len = 0;

        // Old buckets are consumed front to back, so chain order survives between keys that
        // still collide after the move.
        for bucket in old.into_iter().flatten() {
            for entry in bucket.into_entries() {
                let (key, value) = entry.into_pair();
                self.put(key, value);
            }
        }
        debug_assert_eq!(self.len, rehashed);
        debug!(
            "resized from {} to {} buckets, rehashed {} entries",
            old_capacity, new_capacity, rehashed
        );
    }
}

impl<K, V> ChainedHashMap<K, V> {
    /// Returns the number of key-value pairs in the map.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the configured load factor.
    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Returns an iterator over the entries in bucket order.
    ///
    /// # Examples
    /// ```
    /// use chainmap::ChainedHashMap;
    ///
    /// let mut map = ChainedHashMap::new();
    /// map.put("a", 1);
    /// for entry in map.iter() {
    ///     assert_eq!(entry.to_string(), "a: 1");
    /// }
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.buckets, self.len)
    }

    /// Longest chain across all buckets; useful to inspect how keys spread.
    pub fn longest_chain(&self) -> usize {
        self.buckets
            .iter()
            .flatten()
            .map(Bucket::chain_len)
            .max()
            .unwrap_or(0)
    }
}

impl<K: Hash + Eq, V> Default for ChainedHashMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, K, V> IntoIterator for &'a ChainedHashMap<K, V> {
    type Item = &'a Entry<K, V>;
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Hash + Eq, V> Extend<(K, V)> for ChainedHashMap<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for ChainedHashMap<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = ChainedHashMap::new();
        map.extend(iter);
        map
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for ChainedHashMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|entry| (entry.key(), entry.value())))
            .finish()
    }
}
