use alloc::{alloc::handle_alloc_error, boxed::Box, vec::Vec};

use core::{
    alloc::Layout,
    fmt::{self, Debug, Display, Formatter},
    ptr::NonNull,
};

use log::{error, trace};

use crate::ListError;

mod iters;
mod splice;

use iters::Iter;

pub(crate) type Link<T> = Option<Box<SinglyLinkedListNode<T>>>;

/// A singly linked list that owns its nodes through a chain of boxes.
///
/// Every node is owned either by `head` or by the `next` link of its predecessor, and `size`
/// always equals the number of nodes reachable from `head`.
pub struct SinglyLinkedList<T> {
    head: Link<T>,
    size: usize,
}

impl<T> SinglyLinkedList<T> {
    pub const fn new() -> Self {
        Self { head: None, size: 0 }
    }

    /// Inserts an element at the beginning of the list
    pub fn push_front(&mut self, value: T) {
        if let Err(layout) = self.push_node(value) {
            handle_alloc_error(layout)
        }
    }

    /// Inserts an element at the beginning of the list, reporting allocation failure.
    ///
    /// On failure the list is left exactly as it was.
    pub fn try_push_front(&mut self, value: T) -> Result<(), ListError> {
        self.push_node(value).map_err(ListError::AllocationFailure)
    }

    fn push_node(&mut self, value: T) -> Result<(), Layout> {
        // the current head is only detached once the new node exists
        let mut node = SinglyLinkedListNode::try_boxed(value)?;
        node.next = self.head.take();
        self.head = Some(node);
        self.size += 1;
        trace!("pushed node, size is now {}", self.size);
        Ok(())
    }

    /// Removes the first element and returns it, or `None` if the list is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let node = self.head.take()?;
        let SinglyLinkedListNode { value, next } = *node;
        self.head = next;
        self.size -= 1;
        trace!("popped node, size is now {}", self.size);
        Some(value)
    }

    /// Returns the first element.
    ///
    /// An empty list has no front, so this reports [`ListError::EmptyContainer`].
    pub fn front(&self) -> Result<&T, ListError> {
        self.head
            .as_deref()
            .map(|node| &node.value)
            .ok_or(ListError::EmptyContainer)
    }

    pub fn front_mut(&mut self) -> Result<&mut T, ListError> {
        self.head
            .as_deref_mut()
            .map(|node| &mut node.value)
            .ok_or(ListError::EmptyContainer)
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        debug_assert_eq!(self.head.is_none(), self.size == 0);
        self.head.is_none()
    }

    /// Releases every node. The chain is unlinked iteratively so long lists don't recurse.
    pub fn clear(&mut self) {
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
        self.size = 0;
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Returns true if no element is followed by a smaller one.
    pub fn is_sorted(&self) -> bool
    where
        T: PartialOrd,
    {
        let mut iter = self.iter();
        let Some(mut prev) = iter.next() else {
            return true;
        };
        for value in iter {
            if value < prev {
                return false;
            }
            prev = value;
        }
        true
    }

    /// Prints every element on its own line, front to back.
    #[cfg(feature = "std")]
    pub fn display(&self)
    where
        T: Display,
    {
        print!("{self}");
    }

    /// Deep copies the list, reporting allocation failure instead of aborting.
    pub fn try_clone(&self) -> Result<Self, ListError>
    where
        T: Clone,
    {
        self.copy_nodes().map_err(ListError::AllocationFailure)
    }

    /// Builds a list whose traversal order matches `values`.
    pub fn try_from_slice(values: &[T]) -> Result<Self, ListError>
    where
        T: Clone,
    {
        let mut lst = Self::new();
        for value in values.iter().rev() {
            lst.try_push_front(value.clone())?;
        }
        Ok(lst)
    }

    fn copy_nodes(&self) -> Result<Self, Layout>
    where
        T: Clone,
    {
        let mut copy = Self::new();
        let mut tail = &mut copy.head;
        for value in self.iter() {
            let node = SinglyLinkedListNode::try_boxed(value.clone())?;
            tail = &mut tail.insert(node).next;
            copy.size += 1;
        }
        Ok(copy)
    }

    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter { node: &self.head }
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.copy_nodes()
            .unwrap_or_else(|layout| handle_alloc_error(layout))
    }
}

impl<T, const N: usize> From<[T; N]> for SinglyLinkedList<T> {
    fn from(values: [T; N]) -> Self {
        let mut lst = Self::new();
        for value in values.into_iter().rev() {
            lst.push_front(value);
        }
        lst
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: Debug> Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "SinglyLinkedList {{ length: {}, items: {{", self.size)?;
        let mut iter = self.iter();
        if let Some(elem) = iter.next() {
            write!(f, "{elem:?}")?
        }
        for elem in iter {
            write!(f, ", {elem:?}")?;
        }
        write!(f, "}} }}")
    }
}

/// One value per line, front to back.
impl<T: Display> Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for elem in self.iter() {
            writeln!(f, "{elem}")?;
        }
        Ok(())
    }
}

pub(crate) struct SinglyLinkedListNode<T> {
    value: T,
    next: Link<T>,
}

impl<T> SinglyLinkedListNode<T> {
    /// Allocates an unlinked node, handing back the layout if the allocator refuses.
    fn try_boxed(value: T) -> Result<Box<Self>, Layout> {
        let layout = Layout::new::<Self>();
        // SAFETY: a node always contains its `next` link, so the layout is never zero sized
        let ptr = unsafe { alloc::alloc::alloc(layout) }.cast::<Self>();
        let Some(ptr) = NonNull::new(ptr) else {
            error!(
                "failed to allocate a list node of {} bytes",
                layout.size()
            );
            return Err(layout);
        };
        // SAFETY: `ptr` came from the global allocator with `Layout::new::<Self>()`, which is
        // what `Box` expects, and it is initialised before the box is built
        unsafe {
            ptr.as_ptr().write(Self { value, next: None });
            Ok(Box::from_raw(ptr.as_ptr()))
        }
    }
}
