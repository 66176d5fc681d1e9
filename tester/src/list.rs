use std::{collections::VecDeque, mem};

use linked_lists::SinglyLinkedList;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{Operation, OperationGenerator};

/// Two lists so that `split` has somewhere to put its second half and `merge` has a source.
#[derive(Debug, Default)]
pub struct ListPair {
    pub primary: SinglyLinkedList<i32>,
    pub secondary: SinglyLinkedList<i32>,
}

/// The model `ListPair` is checked against.
#[derive(Debug, Default, Clone)]
pub struct ReferencePair {
    pub primary: VecDeque<i32>,
    pub secondary: VecDeque<i32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListOperation {
    PushFront(i32),
    PopFront,
    Front,
    /// replaces `secondary` with the back half of `primary`
    Split,
    /// merges `secondary` into `primary`
    Merge,
    Sort,
    SortSecondary,
    /// replaces `secondary` with a deep copy of `primary`
    CloneIntoSecondary,
    Swap,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Value(Option<i32>),
    Snapshot {
        primary: Vec<i32>,
        secondary: Vec<i32>,
        lens: (usize, usize),
    },
}

impl ListPair {
    fn snapshot(&self) -> Outcome {
        Outcome::Snapshot {
            primary: self.primary.to_vec(),
            secondary: self.secondary.to_vec(),
            lens: (self.primary.len(), self.secondary.len()),
        }
    }
}

impl ReferencePair {
    fn snapshot(&self) -> Outcome {
        Outcome::Snapshot {
            primary: self.primary.iter().copied().collect(),
            secondary: self.secondary.iter().copied().collect(),
            lens: (self.primary.len(), self.secondary.len()),
        }
    }

    /// Interleaves by repeatedly taking the smaller front, `primary` winning ties.
    fn merge(&mut self) {
        let mut left = mem::take(&mut self.primary);
        let mut right = mem::take(&mut self.secondary);
        let mut merged = VecDeque::with_capacity(left.len() + right.len());
        while let (Some(&l), Some(&r)) = (left.front(), right.front()) {
            let source = if l <= r { &mut left } else { &mut right };
            merged.extend(source.pop_front());
        }
        merged.extend(left);
        merged.extend(right);
        self.primary = merged;
    }
}

impl Operation for ListOperation {
    type Result = Outcome;
    type Target = ListPair;

    fn apply(&self, lists: &mut Self::Target) -> Self::Result {
        match *self {
            Self::PushFront(value) => lists.primary.push_front(value),
            Self::PopFront => return Outcome::Value(lists.primary.pop_front()),
            Self::Front => return Outcome::Value(lists.primary.front().ok().copied()),
            Self::Split => lists.secondary = lists.primary.split(),
            Self::Merge => lists.primary.merge(&mut lists.secondary),
            Self::Sort => lists.primary.sort(),
            Self::SortSecondary => lists.secondary.sort(),
            Self::CloneIntoSecondary => lists.secondary = lists.primary.clone(),
            Self::Swap => mem::swap(&mut lists.primary, &mut lists.secondary),
        }
        lists.snapshot()
    }
}

/// Generates list operations from a seeded rng, tracking the expected results in a
/// [`ReferencePair`].
pub struct ListOperationGenerator<R = StdRng>
where
    R: Rng + SeedableRng,
{
    rng: R,
    data: ReferencePair,
}

impl<R> OperationGenerator<R> for ListOperationGenerator<R>
where
    R: Rng + SeedableRng,
{
    type Operation = ListOperation;
    type ReferenceImpl = ReferencePair;

    fn from_seed(seed: R::Seed) -> Self {
        Self {
            rng: R::from_seed(seed),
            data: ReferencePair::default(),
        }
    }

    fn data(self) -> Self::ReferenceImpl {
        self.data
    }
}

impl<R> Iterator for ListOperationGenerator<R>
where
    R: Rng + SeedableRng,
{
    type Item = (ListOperation, Outcome);

    fn next(&mut self) -> Option<Self::Item> {
        let data = &mut self.data;
        // pushes dominate so the lists actually grow
        let op = match self.rng.gen_range(0..12) {
            0..=4 => {
                // a narrow range makes equal values common
                let value = self.rng.gen_range(-20..20);
                data.primary.push_front(value);
                ListOperation::PushFront(value)
            }
            5 => return Some((ListOperation::PopFront, Outcome::Value(data.primary.pop_front()))),
            6 => {
                let front = data.primary.front().copied();
                return Some((ListOperation::Front, Outcome::Value(front)));
            }
            7 => {
                let mid = data.primary.len().div_ceil(2);
                data.secondary = data.primary.split_off(mid);
                ListOperation::Split
            }
            8 => {
                data.merge();
                ListOperation::Merge
            }
            9 => {
                data.primary.make_contiguous().sort();
                ListOperation::Sort
            }
            10 => {
                data.secondary.make_contiguous().sort();
                ListOperation::SortSecondary
            }
            11 if self.rng.gen_bool(0.5) => {
                data.secondary = data.primary.clone();
                ListOperation::CloneIntoSecondary
            }
            11 => {
                mem::swap(&mut data.primary, &mut data.secondary);
                ListOperation::Swap
            }
            _ => unreachable!(),
        };
        Some((op, data.snapshot()))
    }
}
