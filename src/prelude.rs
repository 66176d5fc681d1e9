pub use crate::{forward_list, ListError, SinglyLinkedList};
