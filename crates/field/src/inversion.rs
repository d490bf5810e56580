// Copyright 2025 Irreducible Inc.

//! Multiplicative inversion with the extended Euclidean algorithm over GF(2)\[x\].

use crate::{modulus::Modulus, poly::BinaryPoly};

/// Computes the inverse of `a` modulo `M`, or `None` if `a` is zero.
///
/// Maintains the remainder sequence `r_{i+1} = r_{i-1} - q_i r_i` starting from `(M, a)`,
/// together with the Bézout coefficients `s_{i+1} = s_{i-1} - q_i s_i` starting from `(0, 1)`, so
/// that `s_i a = r_i (mod M)` holds throughout. The modulus is irreducible, so the last nonzero
/// remainder is 1 and its coefficient is the inverse.
///
/// The number of division steps depends on `a`. This is not a constant-time routine.
pub(crate) fn invert_mod<M: Modulus, const L: usize>(a: &[u64; L]) -> Option<[u64; L]> {
	let mut r1 = BinaryPoly::from_limbs(a);
	if r1.is_zero() {
		return None;
	}

	let mut r0 = BinaryPoly::from_modulus::<M>();
	let mut s0 = BinaryPoly::ZERO;
	let mut s1 = BinaryPoly::ONE;

	while !r1.is_zero() {
		let (q, r2) = r0.div_rem(&r1);
		let s2 = s0 + q.mul(&s1);

		(r0, r1) = (r1, r2);
		(s0, s1) = (s1, s2);
	}

	debug_assert!(r0.is_one(), "the modulus must be irreducible");

	Some(s0.to_limbs())
}
