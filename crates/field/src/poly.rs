// Copyright 2025 Irreducible Inc.

//! Dense polynomials over GF(2) of bounded degree.

use std::ops::{Add, AddAssign};

use crate::{modulus::Modulus, mul::MAX_LIMBS};

/// Number of limbs in a [`BinaryPoly`]: one more than the widest field, so that a degree-`n`
/// modulus and the final Bézout cofactor of degree `n` both fit.
pub(crate) const POLY_LIMBS: usize = MAX_LIMBS + 1;

/// A polynomial over GF(2) with at most `64 * POLY_LIMBS` coefficients, bit `i` of the
/// little-endian limb vector holding the coefficient of `x^i`.
///
/// Operations that would produce terms beyond the capacity drop them; callers only perform
/// operations whose exact result fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct BinaryPoly {
	limbs: [u64; POLY_LIMBS],
}

impl BinaryPoly {
	pub const ZERO: Self = Self {
		limbs: [0; POLY_LIMBS],
	};

	pub const ONE: Self = {
		let mut limbs = [0; POLY_LIMBS];
		limbs[0] = 1;
		Self { limbs }
	};

	/// Builds a polynomial from little-endian limbs.
	pub fn from_limbs(limbs: &[u64]) -> Self {
		assert!(limbs.len() <= POLY_LIMBS, "{} limbs exceed the polynomial capacity", limbs.len());

		let mut poly = Self::ZERO;
		poly.limbs[..limbs.len()].copy_from_slice(limbs);
		poly
	}

	/// The full modulus polynomial `x^DEGREE + TAIL(x)`.
	pub fn from_modulus<M: Modulus>() -> Self {
		let mut poly = Self::ZERO;
		poly.limbs[0] = M::TAIL;
		poly.set_bit(M::DEGREE);
		poly
	}

	/// Returns the low `L` limbs.
	///
	/// The polynomial must have degree below `64 * L`.
	pub fn to_limbs<const L: usize>(self) -> [u64; L] {
		debug_assert!(self.limbs[L..].iter().all(|&limb| limb == 0));

		let mut limbs = [0u64; L];
		limbs.copy_from_slice(&self.limbs[..L]);
		limbs
	}

	/// Returns the degree, or `None` for the zero polynomial.
	pub fn degree(&self) -> Option<usize> {
		self.limbs
			.iter()
			.enumerate()
			.rev()
			.find(|&(_, &limb)| limb != 0)
			.map(|(i, &limb)| 64 * i + 63 - limb.leading_zeros() as usize)
	}

	pub fn is_zero(&self) -> bool {
		*self == Self::ZERO
	}

	pub fn is_one(&self) -> bool {
		*self == Self::ONE
	}

	pub fn bit(&self, i: usize) -> bool {
		(self.limbs[i / 64] >> (i % 64)) & 1 == 1
	}

	pub fn set_bit(&mut self, i: usize) {
		self.limbs[i / 64] |= 1u64 << (i % 64);
	}

	/// Adds `other * x^shift` to `self`.
	pub fn xor_shifted(&mut self, other: &Self, shift: usize) {
		let limb_shift = shift / 64;
		let bit_shift = shift % 64;

		for i in (limb_shift..POLY_LIMBS).rev() {
			let src = i - limb_shift;
			let mut word = other.limbs[src] << bit_shift;
			if bit_shift != 0 && src > 0 {
				word |= other.limbs[src - 1] >> (64 - bit_shift);
			}
			self.limbs[i] ^= word;
		}
	}

	/// Polynomial long division, returning `(quotient, remainder)`.
	///
	/// # Panics
	///
	/// Panics if `divisor` is zero.
	pub fn div_rem(&self, divisor: &Self) -> (Self, Self) {
		let divisor_degree = divisor.degree().expect("division by the zero polynomial");

		let mut quotient = Self::ZERO;
		let mut remainder = *self;
		while let Some(degree) = remainder.degree() {
			if degree < divisor_degree {
				break;
			}
			let shift = degree - divisor_degree;
			remainder.xor_shifted(divisor, shift);
			quotient.set_bit(shift);
		}
		(quotient, remainder)
	}

	/// Shift-and-add product. The true product must fit within the capacity.
	pub fn mul(&self, other: &Self) -> Self {
		let Some(degree) = self.degree() else {
			return Self::ZERO;
		};

		let mut product = Self::ZERO;
		for shift in 0..=degree {
			if self.bit(shift) {
				product.xor_shifted(other, shift);
			}
		}
		product
	}
}

impl Add for BinaryPoly {
	type Output = Self;

	#[allow(clippy::suspicious_arithmetic_impl)]
	fn add(mut self, rhs: Self) -> Self {
		self += rhs;
		self
	}
}

impl AddAssign for BinaryPoly {
	#[allow(clippy::suspicious_op_assign_impl)]
	fn add_assign(&mut self, rhs: Self) {
		for (limb, rhs_limb) in self.limbs.iter_mut().zip(rhs.limbs) {
			*limb ^= rhs_limb;
		}
	}
}
