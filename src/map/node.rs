//! Arena storage for skip list nodes.

use smallvec::SmallVec;

/// Node index type. u32 saves space vs usize on 64-bit.
pub(crate) type Idx = u32;

/// No node: the end of a level.
pub(crate) const NIL: Idx = Idx::MAX;

/// The head sentinel. Only ever appears as a traversal position, never as a
/// forward pointer.
pub(crate) const HEAD: Idx = Idx::MAX - 1;

/// One key-value pair plus its forward pointers.
///
/// `next.len()` is the node's level, fixed when the node is created.
/// `next[0]` is the plain linked-list successor.
#[derive(Clone)]
pub(crate) struct Node<K, V> {
    pub key: K,
    pub value: V,
    /// Most nodes are short: with p = 1/e, 98% have four levels or fewer.
    pub next: SmallVec<[Idx; 4]>,
}

impl<K, V> Node<K, V> {
    pub fn new(key: K, value: V, level: usize) -> Self {
        return Node {
            key,
            value,
            next: SmallVec::from_elem(NIL, level),
        };
    }

    pub fn level(&self) -> usize {
        return self.next.len();
    }
}

/// An arena slot. Removed nodes leave a vacant slot that the free list hands
/// out again.
#[derive(Clone)]
pub(crate) enum Slot<K, V> {
    Occupied(Node<K, V>),
    Vacant,
}

/// Borrow the node at `idx`. Vacant slots are never linked, so reaching one
/// means the structure is corrupt.
pub(crate) fn node<K, V>(slots: &[Slot<K, V>], idx: Idx) -> &Node<K, V> {
    return match &slots[idx as usize] {
        Slot::Occupied(node) => node,
        Slot::Vacant => unreachable!("vacant slot {} is linked", idx),
    };
}

pub(crate) fn node_mut<K, V>(slots: &mut [Slot<K, V>], idx: Idx) -> &mut Node<K, V> {
    return match &mut slots[idx as usize] {
        Slot::Occupied(node) => node,
        Slot::Vacant => unreachable!("vacant slot {} is linked", idx),
    };
}

/// Node arena with slot reuse.
#[derive(Clone)]
pub(crate) struct Arena<K, V> {
    pub slots: Vec<Slot<K, V>>,
    free_list: Vec<Idx>,
}

impl<K, V> Arena<K, V> {
    pub fn new() -> Self {
        return Arena {
            slots: Vec::new(),
            free_list: Vec::new(),
        };
    }

    pub fn get(&self, idx: Idx) -> &Node<K, V> {
        return node(&self.slots, idx);
    }

    pub fn get_mut(&mut self, idx: Idx) -> &mut Node<K, V> {
        return node_mut(&mut self.slots, idx);
    }

    pub fn alloc(&mut self, node: Node<K, V>) -> Idx {
        if let Some(idx) = self.free_list.pop() {
            self.slots[idx as usize] = Slot::Occupied(node);
            return idx;
        }
        let idx = self.slots.len();
        assert!(idx < HEAD as usize, "node arena exhausted at {} slots", idx);
        self.slots.push(Slot::Occupied(node));
        return idx as Idx;
    }

    /// Take the node out of its slot and recycle the slot.
    pub fn free(&mut self, idx: Idx) -> Node<K, V> {
        let slot = std::mem::replace(&mut self.slots[idx as usize], Slot::Vacant);
        return match slot {
            Slot::Occupied(node) => {
                self.free_list.push(idx);
                node
            }
            Slot::Vacant => unreachable!("double free of slot {}", idx),
        };
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_list.clear();
    }

    /// Number of slots, live or vacant.
    #[cfg(test)]
    pub fn capacity(&self) -> usize {
        return self.slots.len();
    }

    pub fn into_slots(self) -> Vec<Slot<K, V>> {
        return self.slots;
    }
}
