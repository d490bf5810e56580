// Copyright 2025 Irreducible Inc.

use rand::{
	Rng, RngCore,
	distr::{Distribution, StandardUniform},
};

/// Types that can be sampled uniformly at random.
pub trait Random {
	/// Draws a uniformly random value using `rng`.
	fn random(rng: impl RngCore) -> Self;
}

impl<T> Random for T
where
	StandardUniform: Distribution<T>,
{
	fn random(mut rng: impl RngCore) -> Self {
		rng.random()
	}
}
