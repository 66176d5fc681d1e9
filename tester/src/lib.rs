//! Randomised differential testing for [`linked_lists::SinglyLinkedList`].
//!
//! A seeded generator produces list operations together with the result a `VecDeque` model
//! gives for them; [`run_operations`] replays them against the real list and reports the
//! first disagreement.

mod list;
mod tester;

pub use list::{ListOperation, ListOperationGenerator, ListPair, Outcome, ReferencePair};
pub use tester::{run_operations, OperationFailure};
pub use tester::traits::{Operation, OperationGenerator, RandomOperationGenerator};

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn seeded_runs_match_reference() {
        init_logger();
        let mut seeds = StdRng::seed_from_u64(110);
        for _ in 0..64 {
            let seed: <StdRng as SeedableRng>::Seed = seeds.gen();
            if let Err(failure) = run_operations::<ListOperationGenerator, StdRng>(seed, 2_000) {
                failure.playback();
                panic!("list diverged from the reference: {failure:?}");
            }
        }
    }

    #[test]
    fn final_state_matches_reference() {
        init_logger();
        let (seed, mut gen) =
            <ListOperationGenerator<StdRng> as RandomOperationGenerator<StdRng>>::random();
        let mut lists = ListPair::default();
        for (op, expected) in (&mut gen).take(1_000) {
            assert_eq!(op.apply(&mut lists), expected, "seed {seed:?}, operation {op:?}");
        }
        let reference = gen.data();
        assert_eq!(lists.primary.to_vec(), Vec::from(reference.primary));
        assert_eq!(lists.secondary.to_vec(), Vec::from(reference.secondary));
    }

    #[test]
    fn same_seed_same_operations() {
        let seed = [3; 32];
        let a: Vec<_> = ListOperationGenerator::<StdRng>::from_seed(seed).take(200).collect();
        let b: Vec<_> = ListOperationGenerator::<StdRng>::from_seed(seed).take(200).collect();
        assert_eq!(a, b);
    }

    /// Counts up, but its reference claims the fourth result is wrong.
    #[derive(Debug)]
    struct Increment;

    impl Operation for Increment {
        type Result = u32;
        type Target = u32;
        fn apply(&self, target: &mut u32) -> u32 {
            *target += 1;
            *target
        }
    }

    struct BrokenGenerator {
        count: u32,
    }

    impl Iterator for BrokenGenerator {
        type Item = (Increment, u32);
        fn next(&mut self) -> Option<Self::Item> {
            self.count += 1;
            let expected = if self.count == 4 { 40 } else { self.count };
            Some((Increment, expected))
        }
    }

    impl OperationGenerator<StdRng> for BrokenGenerator {
        type Operation = Increment;
        type ReferenceImpl = u32;
        fn from_seed(_seed: [u8; 32]) -> Self {
            Self { count: 0 }
        }
        fn data(self) -> u32 {
            self.count
        }
    }

    #[test]
    fn failure_reports_first_divergence() {
        init_logger();
        let failure = run_operations::<BrokenGenerator, StdRng>([0; 32], 10)
            .expect_err("the fourth operation disagrees");
        assert_eq!(failure.op_num, 3);
        assert_eq!(failure.operations.len(), 4);
        assert_eq!(failure.actual, 4);
        assert_eq!(failure.target, 4);
        failure.playback();
        assert!(format!("{failure:?}").contains("expected: Some(40)"));
    }
}
