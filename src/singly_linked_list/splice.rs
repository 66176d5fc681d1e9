//! Operations that move whole chains of nodes between lists.
//!
//! Nothing here allocates or copies a value: nodes change owner by relinking `next` pointers.

use core::mem;

use log::debug;

use super::SinglyLinkedList;

impl<T> SinglyLinkedList<T> {
    /// Splits the list in two.
    ///
    /// `self` keeps the first `ceil(n / 2)` elements and the remaining `floor(n / 2)` are
    /// returned, both in their original order.
    pub fn split(&mut self) -> Self {
        let mid = self.size.div_ceil(2);

        // the last node that stays in `self` is `mid - 1` steps past the head
        let mut last = self.head.as_deref_mut();
        for _ in 1..mid {
            last = last.and_then(|node| node.next.as_deref_mut());
        }
        let rest = last.and_then(|node| node.next.take());

        let other = Self {
            head: rest,
            size: self.size - mid,
        };
        debug!("split {} nodes into {} + {}", self.size, mid, other.size);
        self.size = mid;
        other
    }

    /// Merges `other` into `self`, leaving `other` empty.
    ///
    /// Both lists are expected to be sorted; the result is then sorted too. When two values
    /// compare equal the one from `self` comes first, which keeps the merge stable.
    pub fn merge(&mut self, other: &mut Self)
    where
        T: PartialOrd,
    {
        if other.head.is_none() {
            return;
        }
        if self.head.is_none() {
            // nothing to interleave with, adopt the whole chain
            debug!("adopting {} nodes into an empty list", other.size);
            mem::swap(self, other);
            return;
        }
        debug!("merging {} nodes into {}", other.size, self.size);

        let mut left = self.head.take();
        let mut right = other.head.take();
        let mut tail = &mut self.head;
        while let (Some(l), Some(r)) = (&left, &right) {
            let source = if l.value <= r.value { &mut left } else { &mut right };
            // both fronts were just seen, so `source` holds a node
            let Some(mut node) = source.take() else { break };
            *source = node.next.take();
            tail = &mut tail.insert(node).next;
        }
        // one side is exhausted, the other is already in order
        *tail = left.or(right);

        self.size += mem::take(&mut other.size);
    }
}
