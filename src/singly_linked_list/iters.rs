use super::Link;

/// Borrowing walk over the values, front to back.
pub(crate) struct Iter<'a, T> {
    pub(crate) node: &'a Link<T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<Self::Item> {
        if let Some(s) = self.node {
            self.node = &s.next;
            Some(&s.value)
        } else {
            None
        }
    }
}
