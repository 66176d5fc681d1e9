use core::{
    alloc::Layout,
    fmt::{self, Display, Formatter},
};

/// Errors reported by [`SinglyLinkedList`](crate::SinglyLinkedList).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// The head of an empty list was requested.
    EmptyContainer,
    /// A node of the given layout could not be allocated.
    AllocationFailure(Layout),
}

impl Display for ListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyContainer => write!(f, "the list is empty"),
            Self::AllocationFailure(layout) => write!(
                f,
                "failed to allocate a node of {} bytes (align {})",
                layout.size(),
                layout.align()
            ),
        }
    }
}

impl core::error::Error for ListError {}
