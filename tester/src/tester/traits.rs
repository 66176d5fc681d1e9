use rand::{
    distributions::{Distribution, Standard},
    Rng, SeedableRng,
};

/// deterministically applies an operation to a T returning the result
pub trait Operation {
    type Result: Sized;
    type Target;
    fn apply(&self, target: &mut Self::Target) -> Self::Result;
}

// deterministically generates a sequence of valid operations, paired with the result the
// reference implementation gave for each one
pub trait OperationGenerator<R>:
    Iterator<Item = (Self::Operation, <Self::Operation as Operation>::Result)> + Sized
where
    R: Rng + SeedableRng,
{
    type Operation: Operation;
    type ReferenceImpl;
    fn from_seed(seed: R::Seed) -> Self;
    fn data(self) -> Self::ReferenceImpl;
}

// extends operation generator so that it can be created from a random seed if the seed can be randomly generated.
pub trait RandomOperationGenerator<R: SeedableRng + Rng>: OperationGenerator<R>
where
    Standard: Distribution<R::Seed>,
{
    /// returns the seed as well so a failing run can be replayed
    fn random() -> (R::Seed, Self)
    where
        R::Seed: Clone,
    {
        let seed: R::Seed = rand::thread_rng().gen();
        (seed.clone(), Self::from_seed(seed))
    }
}

impl<R, G: OperationGenerator<R>> RandomOperationGenerator<R> for G
where
    R: SeedableRng + Rng,
    Standard: Distribution<R::Seed>,
{
}
