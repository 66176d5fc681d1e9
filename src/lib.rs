#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;

pub mod prelude;

mod error;
mod merge_sort;
pub mod singly_linked_list;

#[cfg(test)]
mod util;

pub use error::ListError;
pub use singly_linked_list::SinglyLinkedList;

/// Builds a [`SinglyLinkedList`] whose front is the first value listed.
///
/// ```
/// use linked_lists::forward_list;
///
/// let lst = forward_list![1, 2, 3];
/// assert_eq!(lst.front(), Ok(&1));
/// assert_eq!(lst.len(), 3);
/// ```
#[macro_export]
macro_rules! forward_list {
    () => {
        $crate::SinglyLinkedList::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::SinglyLinkedList::from([$($value),+])
    };
}
