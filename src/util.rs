//! Helpers shared by the unit tests.

use alloc::{rc::Rc, vec::Vec};
use core::cell::Cell;
use core::cmp::Ordering;

use rand::Rng;

pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Small values so that duplicates show up often.
pub(crate) fn random_values<R: Rng>(rng: &mut R, len: usize) -> Vec<i32> {
    (0..len).map(|_| rng.gen_range(-50..50)).collect()
}

/// Counts how many of its tokens have been dropped.
#[derive(Default)]
pub(crate) struct DropCounter {
    dropped: Rc<Cell<usize>>,
}

impl DropCounter {
    pub(crate) fn token(&self) -> DropToken {
        DropToken(self.dropped.clone())
    }

    pub(crate) fn dropped(&self) -> usize {
        self.dropped.get()
    }
}

#[derive(Clone)]
pub(crate) struct DropToken(Rc<Cell<usize>>);

impl Drop for DropToken {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

/// Ordered by `key` only, `tag` tells equal keys apart.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Tagged {
    pub(crate) key: i32,
    pub(crate) tag: char,
}

impl Tagged {
    pub(crate) fn new(key: i32, tag: char) -> Self {
        Self { key, tag }
    }
}

impl PartialEq for Tagged {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.key.partial_cmp(&other.key)
    }
}
