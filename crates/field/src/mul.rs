// Copyright 2025 Irreducible Inc.

//! Double-width carry-less products of multi-limb polynomials.
//!
//! Operands are little-endian limb vectors (limb `i` holds the coefficients of `x^(64i)` through
//! `x^(64i + 63)`). Products are written into a [`Wide`] buffer of which only the low `2 * L`
//! limbs are ever populated.

use crate::arch::{clmul64, split_u128};

/// Largest limb count of any supported field.
pub(crate) const MAX_LIMBS: usize = 4;

/// Transient double-width product, little-endian limbs.
pub(crate) type Wide = [u64; 2 * MAX_LIMBS];

/// XORs the 128-bit `product` into `wide` at limb offset `offset`.
#[inline]
pub(crate) fn xor_product_at(wide: &mut Wide, offset: usize, product: u128) {
	let (high, low) = split_u128(product);
	wide[offset] ^= low;
	wide[offset + 1] ^= high;
}

/// Schoolbook product: all `L * L` limb-pair products, accumulated at offset `i + j`.
#[inline]
pub(crate) fn mul_schoolbook<const L: usize>(a: &[u64; L], b: &[u64; L]) -> Wide {
	const { assert!(L <= MAX_LIMBS) };

	let mut wide = [0u64; 2 * MAX_LIMBS];
	for i in 0..L {
		for j in 0..L {
			xor_product_at(&mut wide, i + j, clmul64(a[i], b[j]));
		}
	}
	wide
}

/// Karatsuba product of two-limb operands, three limb multiplications instead of four.
///
/// `(a1 X + a0)(b1 X + b0) = a1 b1 X^2 + ((a0 + a1)(b0 + b1) + a0 b0 + a1 b1) X + a0 b0`
#[inline]
pub(crate) fn mul_karatsuba_2(a: &[u64; 2], b: &[u64; 2]) -> Wide {
	let lo = clmul64(a[0], b[0]);
	let hi = clmul64(a[1], b[1]);
	let mid = clmul64(a[0] ^ a[1], b[0] ^ b[1]) ^ lo ^ hi;

	let mut wide = [0u64; 2 * MAX_LIMBS];
	xor_product_at(&mut wide, 0, lo);
	xor_product_at(&mut wide, 2, hi);
	xor_product_at(&mut wide, 1, mid);
	wide
}

/// Product used by field multiplication: Karatsuba for two limbs, schoolbook otherwise.
#[inline]
pub(crate) fn mul_wide<const L: usize>(a: &[u64; L], b: &[u64; L]) -> Wide {
	match (<&[u64; 2]>::try_from(&a[..]), <&[u64; 2]>::try_from(&b[..])) {
		(Ok(a), Ok(b)) => mul_karatsuba_2(a, b),
		_ => mul_schoolbook(a, b),
	}
}

/// Squaring in characteristic 2: the cross terms `a_i a_j + a_j a_i` cancel, leaving only the
/// diagonal products.
#[inline]
pub(crate) fn square_spread<const L: usize>(a: &[u64; L]) -> Wide {
	const { assert!(L <= MAX_LIMBS) };

	let mut wide = [0u64; 2 * MAX_LIMBS];
	for i in 0..L {
		xor_product_at(&mut wide, 2 * i, clmul64(a[i], a[i]));
	}
	wide
}
