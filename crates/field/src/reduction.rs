// Copyright 2025 Irreducible Inc.

//! Reduction of double-width products modulo a sparse irreducible polynomial.
//!
//! For a modulus `x^n + t(x)` we have `H(x) x^n = H(x) t(x)` in the field, so the part of a
//! product at or above degree `n` can be multiplied by the one-limb tail and folded back. The
//! number of passes and every shift amount are fixed by the modulus, never by the operands.

use crate::{
	arch::clmul64,
	modulus::Modulus,
	mul::{MAX_LIMBS, Wide, xor_product_at},
};

/// Right shift of a wide polynomial by `shift` bits, i.e. the quotient by `x^shift`.
#[inline]
fn shr_wide(wide: &Wide, shift: usize) -> Wide {
	let limb_shift = shift / 64;
	let bit_shift = shift % 64;

	let mut out = [0u64; 2 * MAX_LIMBS];
	for i in 0..2 * MAX_LIMBS - limb_shift {
		let lo = wide[i + limb_shift];
		out[i] = if bit_shift == 0 {
			lo
		} else {
			let hi = wide.get(i + limb_shift + 1).copied().unwrap_or(0);
			(lo >> bit_shift) | (hi << (64 - bit_shift))
		};
	}
	out
}

/// Clears every coefficient at or above `x^degree`.
#[inline]
fn truncate_wide(wide: &mut Wide, degree: usize) {
	let limb = degree / 64;
	let bit = degree % 64;

	if bit != 0 {
		wide[limb] &= (1u64 << bit) - 1;
	}
	let first_cleared = limb + usize::from(bit != 0);
	for word in &mut wide[first_cleared..] {
		*word = 0;
	}
}

/// Reduces a double-width product of two field elements modulo `M`.
///
/// `wide` must be a product of two polynomials of degree below `M::DEGREE`, as produced by the
/// functions in [`crate::mul`].
#[inline]
pub(crate) fn reduce<M: Modulus, const L: usize>(mut wide: Wide) -> [u64; L] {
	debug_assert_eq!(L, M::N_LIMBS);

	for _ in 0..M::FOLD_ROUNDS {
		let high = shr_wide(&wide, M::DEGREE);
		truncate_wide(&mut wide, M::DEGREE);

		// `high` spans at most 2L - 1 limbs for every supported degree.
		for i in 0..2 * L - 1 {
			xor_product_at(&mut wide, i, clmul64(high[i], M::TAIL));
		}
	}

	debug_assert!(wide[L..].iter().all(|&limb| limb == 0));

	let mut limbs = [0u64; L];
	limbs.copy_from_slice(&wide[..L]);
	limbs
}
