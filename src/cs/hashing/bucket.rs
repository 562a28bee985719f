//! # Bucket Chains
//!
//! One slot of a [`ChainedHashMap`](super::ChainedHashMap) owns a singly linked chain of
//! nodes. Every node owns the next one, so a chain is a plain forward list with no
//! back-references. New keys are appended at the tail, which keeps the entries of a
//! bucket in first-insertion order.

use std::borrow::Borrow;
use std::fmt;
use std::mem;

/// A single key-value pair stored in the map.
///
/// The key is fixed once the entry exists; re-inserting an equal key only replaces the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<K, V> {
    key: K,
    value: V,
}

impl<K, V> Entry<K, V> {
    fn new(key: K, value: V) -> Self {
        Entry { key, value }
    }

    /// Returns the key of this entry.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns the value of this entry.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Consumes the entry, returning the owned `(key, value)` pair.
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

/// Renders as `"<key>: <value>"`.
impl<K: fmt::Display, V: fmt::Display> fmt::Display for Entry<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.value)
    }
}

type Link<K, V> = Option<Box<Node<K, V>>>;

/// A chain link: one entry plus the rest of the chain.
pub(crate) struct Node<K, V> {
    entry: Entry<K, V>,
    next: Link<K, V>,
}

impl<K, V> Node<K, V> {
    pub(crate) fn entry(&self) -> &Entry<K, V> {
        &self.entry
    }

    pub(crate) fn next(&self) -> Option<&Node<K, V>> {
        self.next.as_deref()
    }
}

/// The chain held by one slot of the bucket array.
pub(crate) struct Bucket<K, V> {
    head: Link<K, V>,
}

impl<K, V> Bucket<K, V> {
    pub(crate) fn new() -> Self {
        Bucket { head: None }
    }

    pub(crate) fn head(&self) -> Option<&Node<K, V>> {
        self.head.as_deref()
    }

    /// Number of nodes in the chain. Walks the whole chain.
    pub(crate) fn chain_len(&self) -> usize {
        let mut count = 0;
        let mut node = self.head();
        while let Some(n) = node {
            count += 1;
            node = n.next();
        }
        count
    }

    /// Detaches the chain and yields its entries by value, in chain order.
    pub(crate) fn into_entries(mut self) -> IntoEntries<K, V> {
        IntoEntries {
            link: self.head.take(),
        }
    }
}

impl<K: Eq, V> Bucket<K, V> {
    /// Inserts `key` at the tail of the chain, or replaces the value of the node holding an
    /// equal key.
    ///
    /// Returns the previous value on update, `None` when the key is new to this chain.
    pub(crate) fn add_or_update(&mut self, key: K, value: V) -> Option<V> {
        let mut link = &mut self.head;
        while let Some(node) = link {
            if node.entry.key == key {
                return Some(mem::replace(&mut node.entry.value, value));
            }
            link = &mut node.next;
        }
        *link = Some(Box::new(Node {
            entry: Entry::new(key, value),
            next: None,
        }));
        None
    }

    pub(crate) fn find<Q>(&self, key: &Q) -> Option<&Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let mut node = self.head();
        while let Some(n) = node {
            if Borrow::<Q>::borrow(&n.entry.key) == key {
                return Some(&n.entry);
            }
            node = n.next();
        }
        None
    }

    pub(crate) fn find_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let mut node = self.head.as_deref_mut();
        while let Some(n) = node {
            if Borrow::<Q>::borrow(&n.entry.key) == key {
                return Some(&mut n.entry.value);
            }
            node = n.next.as_deref_mut();
        }
        None
    }
}

// Unlink node by node so long chains don't recurse through Box drops.
impl<K, V> Drop for Bucket<K, V> {
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

/// Owning iterator over the entries of a detached chain.
pub(crate) struct IntoEntries<K, V> {
    link: Link<K, V>,
}

impl<K, V> Iterator for IntoEntries<K, V> {
    type Item = Entry<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.link.take()?;
        let Node { entry, next } = *node;
        self.link = next;
        Some(entry)
    }
}

impl<K, V> Drop for IntoEntries<K, V> {
    fn drop(&mut self) {
        let mut link = self.link.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}
