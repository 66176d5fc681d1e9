//! Recursive merge sort over [`SinglyLinkedList`], built only from `split` and `merge`.

use log::debug;

use crate::SinglyLinkedList;

impl<T: PartialOrd> SinglyLinkedList<T> {
    /// Sorts the list in place, keeping equal elements in their original order.
    ///
    /// Nodes are relinked rather than reallocated, and the recursion is `O(log n)` deep since
    /// every level halves the list.
    pub fn sort(&mut self) {
        debug!("sorting list of {} nodes", self.len());
        merge_sort(self);
    }
}

fn merge_sort<T: PartialOrd>(lst: &mut SinglyLinkedList<T>) {
    if lst.len() <= 1 {
        return;
    }
    let mut second = lst.split();
    merge_sort(lst);
    merge_sort(&mut second);
    lst.merge(&mut second);
}
