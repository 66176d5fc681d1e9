use core::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

use log::{error, info};
use rand::{Rng, SeedableRng};

pub mod traits;
use traits::*;

type OpResult<G, R> = <<G as OperationGenerator<R>>::Operation as Operation>::Result;
type OpTarget<G, R> = <<G as OperationGenerator<R>>::Operation as Operation>::Target;

/// Replays `ops` operations generated from `seed` against a fresh target.
///
/// Stops at the first operation whose result differs from the reference implementation.
pub fn run_operations<G, R>(seed: R::Seed, ops: usize) -> Result<(), OperationFailure<G, R>>
where
    G: OperationGenerator<R>,
    OpResult<G, R>: PartialEq,
    OpTarget<G, R>: Default,
    R: SeedableRng + Rng,
    R::Seed: Clone,
{
    let mut target: OpTarget<G, R> = Default::default();
    let gen = G::from_seed(seed.clone());
    for (op_num, (op, expected)) in gen.take(ops).enumerate() {
        let actual = op.apply(&mut target);
        if actual != expected {
            let operations = G::from_seed(seed.clone()).take(op_num + 1).collect();
            return Err(OperationFailure {
                seed,
                op_num,
                operations,
                actual,
                target,
                marker: PhantomData,
            });
        }
    }
    info!("{ops} operations matched the reference");
    Ok(())
}

pub struct OperationFailure<G, R>
where
    G: OperationGenerator<R>,
    R: SeedableRng + Rng,
{
    pub seed: R::Seed,
    /// index of the operation that disagreed
    pub op_num: usize,
    /// every operation up to and including the failing one, with the expected results
    pub operations: Vec<(G::Operation, OpResult<G, R>)>,
    pub actual: OpResult<G, R>,
    pub target: OpTarget<G, R>,
    marker: PhantomData<(G, R)>,
}

impl<G, R> OperationFailure<G, R>
where
    G: OperationGenerator<R>,
    G::Operation: Debug,
    OpResult<G, R>: Debug,
    OpTarget<G, R>: Debug,
    R: SeedableRng + Rng,
    R::Seed: Debug,
{
    /// Logs the last few operations leading up to the failure.
    pub fn playback(&self) {
        error!("running playback for seed {:?}", self.seed);
        let lower = self.op_num.saturating_sub(5);
        for (ind, (op, expected)) in self.operations.iter().enumerate().skip(lower) {
            error!("--------- operation {ind} ----------");
            error!("operation: {op:?}");
            error!("expected: {expected:?}");
        }
        error!("actual: {:?}", self.actual);
        error!("target state: {:?}", self.target);
    }
}

impl<G, R> Debug for OperationFailure<G, R>
where
    G: OperationGenerator<R>,
    G::Operation: Debug,
    OpResult<G, R>: Debug,
    OpTarget<G, R>: Debug,
    R: SeedableRng + Rng,
    R::Seed: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let failing = self.operations.last();
        f.debug_struct("OperationFailure")
            .field("seed", &self.seed)
            .field("op_num", &self.op_num)
            .field("operation", &failing.map(|(op, _)| op))
            .field("expected", &failing.map(|(_, expected)| expected))
            .field("actual", &self.actual)
            .field("target", &self.target)
            .finish()
    }
}
