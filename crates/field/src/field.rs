// Copyright 2025 Irreducible Inc.

use std::{
	fmt::{Debug, Display},
	hash::Hash,
	iter::{Product, Sum},
	ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use bytemuck::Zeroable;
use subtle::{ConditionallySelectable, ConstantTimeEq};

use crate::{
	Error, Random,
	arithmetic_traits::{InvertOrZero, Square},
};

/// This trait is based on `ff::Field` with some unused functionality removed.
pub trait Field:
	Sized
	+ Eq
	+ Copy
	+ Clone
	+ Default
	+ Send
	+ Sync
	+ Debug
	+ Display
	+ Hash
	+ 'static
	+ Neg<Output = Self>
	+ Add<Output = Self>
	+ Sub<Output = Self>
	+ Mul<Output = Self>
	+ Sum
	+ Product
	+ for<'a> Add<&'a Self, Output = Self>
	+ for<'a> Sub<&'a Self, Output = Self>
	+ for<'a> Mul<&'a Self, Output = Self>
	+ for<'a> Sum<&'a Self>
	+ for<'a> Product<&'a Self>
	+ AddAssign
	+ SubAssign
	+ MulAssign
	+ for<'a> AddAssign<&'a Self>
	+ for<'a> SubAssign<&'a Self>
	+ for<'a> MulAssign<&'a Self>
	+ Square
	+ InvertOrZero
	+ Random
	+ Zeroable
	+ ConstantTimeEq
	+ ConditionallySelectable
{
	/// The zero element of the field, the additive identity.
	const ZERO: Self;

	/// The one element of the field, the multiplicative identity.
	const ONE: Self;

	/// The characteristic of the field.
	const CHARACTERISTIC: usize;

	/// Returns true iff this element is zero.
	fn is_zero(&self) -> bool {
		self.ct_eq(&Self::ZERO).into()
	}

	/// Returns true iff this element is one.
	fn is_one(&self) -> bool {
		self.ct_eq(&Self::ONE).into()
	}

	/// Doubles this element.
	#[must_use]
	fn double(&self) -> Self;

	/// Computes the multiplicative inverse of this element.
	///
	/// # Errors
	///
	/// Returns [`Error::ZeroInversion`] if the element is zero.
	fn invert(&self) -> Result<Self, Error>;

	/// Exponentiates `self` by `exp`, where `exp` is a little-endian order integer
	/// exponent.
	///
	/// # Guarantees
	///
	/// This operation is constant time with respect to `self`, for all exponents with the
	/// same number of digits (`exp.as_ref().len()`). It is variable time with respect to
	/// the number of digits in the exponent.
	fn pow<S: AsRef<[u64]>>(&self, exp: S) -> Self {
		let mut res = Self::ONE;
		for e in exp.as_ref().iter().rev() {
			for i in (0..64).rev() {
				res = res.square();
				let tmp = res * self;
				res = Self::conditional_select(&res, &tmp, (((*e >> i) & 1) as u8).into());
			}
		}
		res
	}

	/// Exponentiates `self` by `exp`, where `exp` is a little-endian order integer
	/// exponent.
	///
	/// # Guarantees
	///
	/// **This operation is variable time with respect to `self`, for all exponent.** If
	/// the exponent is fixed, this operation is effectively constant time. However, for
	/// stronger constant-time guarantees, [`Field::pow`] should be used.
	fn pow_vartime<S: AsRef<[u64]>>(&self, exp: S) -> Self {
		let mut res = Self::ONE;
		for e in exp.as_ref().iter().rev() {
			for i in (0..64).rev() {
				res = res.square();

				if ((*e >> i) & 1) == 1 {
					res.mul_assign(self);
				}
			}
		}

		res
	}
}

/// A finite field with characteristic 2.
pub trait BinaryField: Field {
	/// The extension degree over GF(2).
	const N_BITS: usize;

	/// Computes the unique square root of this element.
	///
	/// Squaring is the Frobenius automorphism of a binary field, so the square root is
	/// `self^(2^(N_BITS - 1))`. The number of squarings depends only on the field.
	#[must_use]
	fn sqrt(self) -> Self {
		(1..Self::N_BITS).fold(self, |acc, _| acc.square())
	}
}
