//! Borrowing iteration over a [`ChainedHashMap`](super::ChainedHashMap).
//!
//! Entries come out in bucket-index order and, within a bucket, in chain order. The order
//! is a by-product of hashing and changes whenever the map grows.

use std::iter::FusedIterator;

use super::bucket::{Bucket, Entry, Node};

/// A single forward pass over the entries of a map.
///
/// The cursor holds the index of the next bucket to scan and a reference to the chain node
/// it will yield next. Once exhausted it keeps returning `None`.
pub struct Iter<'a, K, V> {
    buckets: &'a [Option<Bucket<K, V>>],
    /// Next bucket index to scan once the current chain runs out.
    next_bucket: usize,
    current: Option<&'a Node<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(buckets: &'a [Option<Bucket<K, V>>], len: usize) -> Self {
        let mut iter = Iter {
            buckets,
            next_bucket: 0,
            current: None,
            remaining: len,
        };
        iter.current = iter.scan_forward();
        iter
    }

    /// Finds the head of the next non-empty chain, starting at `next_bucket`.
    fn scan_forward(&mut self) -> Option<&'a Node<K, V>> {
        let buckets = self.buckets;
        while self.next_bucket < buckets.len() {
            let slot = &buckets[self.next_bucket];
            self.next_bucket += 1;
            if let Some(head) = slot.as_ref().and_then(Bucket::head) {
                return Some(head);
            }
        }
        None
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = &'a Entry<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current?;
        self.current = match node.next() {
            Some(next) => Some(next),
            None => self.scan_forward(),
        };
        self.remaining = self.remaining.saturating_sub(1);
        Some(node.entry())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            buckets: self.buckets,
            next_bucket: self.next_bucket,
            current: self.current,
            remaining: self.remaining,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots(chains: &[&[(u8, char)]]) -> Vec<Option<Bucket<u8, char>>> {
        chains
            .iter()
            .map(|chain| {
                if chain.is_empty() {
                    None
                } else {
                    let mut bucket = Bucket::new();
                    for &(k, v) in chain.iter() {
                        bucket.add_or_update(k, v);
                    }
                    Some(bucket)
                }
            })
            .collect()
    }

    #[test]
    fn test_empty_array_is_exhausted() {
        let buckets: Vec<Option<Bucket<u8, char>>> = (0..8).map(|_| None).collect();
        let mut iter = Iter::new(&buckets, 0);
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_allocated_but_empty_bucket_is_skipped() {
        let mut buckets = slots(&[&[], &[(1, 'a')]]);
        buckets[0] = Some(Bucket::new());
        let items: Vec<_> = Iter::new(&buckets, 1).map(|e| *e.key()).collect();
        assert_eq!(items, vec![1]);
    }

    #[test]
    fn test_bucket_then_chain_order() {
        let buckets = slots(&[
            &[],
            &[(5, 'e'), (1, 'a')],
            &[],
            &[],
            &[(9, 'i')],
            &[(2, 'b'), (7, 'g'), (3, 'c')],
            &[],
        ]);
        let iter = Iter::new(&buckets, 6);
        assert_eq!(iter.len(), 6);

        let items: Vec<_> = iter.map(|e| (*e.key(), *e.value())).collect();
        assert_eq!(
            items,
            vec![(5, 'e'), (1, 'a'), (9, 'i'), (2, 'b'), (7, 'g'), (3, 'c')]
        );
    }

    #[test]
    fn test_exhaustion_is_stable() {
        let buckets = slots(&[&[(1, 'a')], &[], &[(2, 'b')]]);
        let mut iter = Iter::new(&buckets, 2);
        assert!(iter.next().is_some());
        assert!(iter.next().is_some());
        for _ in 0..3 {
            assert!(iter.next().is_none());
        }
        assert_eq!(iter.size_hint(), (0, Some(0)));
    }
}
