//! Level-0 iterators, in comparator order.

use std::iter::FusedIterator;

use super::node::Idx;
use super::node::NIL;
use super::node::Slot;
use super::node::node;

/// Borrowing iterator over `(&K, &V)`.
pub struct Iter<'a, K, V> {
    pub(super) slots: &'a [Slot<K, V>],
    pub(super) current: Idx,
    pub(super) remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == NIL {
            return None;
        }
        let node = node(self.slots, self.current);
        self.current = node.next[0];
        self.remaining -= 1;
        return Some((&node.key, &node.value));
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        return (self.remaining, Some(self.remaining));
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        return Iter {
            slots: self.slots,
            current: self.current,
            remaining: self.remaining,
        };
    }
}

/// Keys in order.
pub struct Keys<'a, K, V>(pub(super) Iter<'a, K, V>);

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        return self.0.next().map(|(k, _)| k);
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        return self.0.size_hint();
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

/// Values in key order.
pub struct Values<'a, K, V>(pub(super) Iter<'a, K, V>);

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        return self.0.next().map(|(_, v)| v);
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        return self.0.size_hint();
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

/// Owning iterator over `(K, V)`.
pub struct IntoIter<K, V> {
    pub(super) slots: Vec<Slot<K, V>>,
    pub(super) current: Idx,
    pub(super) remaining: usize,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == NIL {
            return None;
        }
        let slot = std::mem::replace(&mut self.slots[self.current as usize], Slot::Vacant);
        let node = match slot {
            Slot::Occupied(node) => node,
            Slot::Vacant => unreachable!("vacant slot {} is linked", self.current),
        };
        self.current = node.next[0];
        self.remaining -= 1;
        return Some((node.key, node.value));
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        return (self.remaining, Some(self.remaining));
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
impl<K, V> FusedIterator for IntoIter<K, V> {}
