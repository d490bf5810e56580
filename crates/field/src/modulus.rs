// Copyright 2025 Irreducible Inc.

//! Irreducible reduction polynomials for the supported field widths.
//!
//! Each modulus is `x^DEGREE + TAIL(x)`, where every tail fits in a single limb. These are the
//! pinned moduli the reference vectors were generated with; changing one changes every product
//! in that field.

use std::{fmt::Debug, hash::Hash};

/// A fixed irreducible polynomial `x^DEGREE + TAIL(x)` over GF(2).
pub trait Modulus: 'static + Copy + Eq + Hash + Debug + Default + Send + Sync {
	/// The extension degree `n`.
	const DEGREE: usize;

	/// The terms of the modulus below `x^DEGREE`, bit `i` holding the coefficient of `x^i`.
	const TAIL: u64;

	/// Name of the field element type, used when formatting elements.
	const NAME: &'static str;

	/// Number of 64-bit limbs holding an element.
	const N_LIMBS: usize = Self::DEGREE.div_ceil(64);

	/// Degree of [`Self::TAIL`].
	const TAIL_DEGREE: usize = 63 - Self::TAIL.leading_zeros() as usize;

	/// Number of fold passes that bring any product of two reduced elements below `x^DEGREE`.
	///
	/// A pass maps a polynomial of degree `d` to one of degree at most
	/// `d - DEGREE + TAIL_DEGREE`, starting from `2 * DEGREE - 2`.
	const FOLD_ROUNDS: usize = (Self::DEGREE - 1).div_ceil(Self::DEGREE - Self::TAIL_DEGREE);

	/// Mask of the valid bits in the most significant limb.
	const TOP_LIMB_MASK: u64 = if Self::DEGREE % 64 == 0 {
		u64::MAX
	} else {
		(1 << (Self::DEGREE % 64)) - 1
	};
}

/// x^32 + x^22 + x^2 + x + 1
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Gf32Modulus;

impl Modulus for Gf32Modulus {
	const DEGREE: usize = 32;
	const TAIL: u64 = (1 << 22) | (1 << 2) | (1 << 1) | 1;
	const NAME: &'static str = "Gf32";
}

/// x^64 + x^4 + x^3 + x + 1
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Gf64Modulus;

impl Modulus for Gf64Modulus {
	const DEGREE: usize = 64;
	const TAIL: u64 = 0x1b;
	const NAME: &'static str = "Gf64";
}

/// x^128 + x^7 + x^2 + x + 1, the GHASH modulus.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Gf128Modulus;

impl Modulus for Gf128Modulus {
	const DEGREE: usize = 128;
	const TAIL: u64 = 0x87;
	const NAME: &'static str = "Gf128";
}

/// x^192 + x^7 + x^2 + x + 1
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Gf192Modulus;

impl Modulus for Gf192Modulus {
	const DEGREE: usize = 192;
	const TAIL: u64 = 0x87;
	const NAME: &'static str = "Gf192";
}

/// x^256 + x^10 + x^5 + x^2 + 1
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Gf256Modulus;

impl Modulus for Gf256Modulus {
	const DEGREE: usize = 256;
	const TAIL: u64 = 0x425;
	const NAME: &'static str = "Gf256";
}
