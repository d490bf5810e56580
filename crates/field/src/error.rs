// Copyright 2025 Irreducible Inc.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("the zero element has no multiplicative inverse")]
	ZeroInversion,
	#[error("expected {expected} limbs, got {actual}")]
	LimbCountMismatch { expected: usize, actual: usize },
	#[error("limb value has bits set at or above the field degree {degree}")]
	NonCanonical { degree: usize },
}
