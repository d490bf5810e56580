// Copyright 2025 Irreducible Inc.

//! Generic binary field element shared by every supported width.

use std::{
	fmt::{self, Debug, Display, Formatter},
	hash::{Hash, Hasher},
	iter::{Product, Sum},
	marker::PhantomData,
	ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use bytemuck::{Pod, Zeroable};
use rand::{
	Rng,
	distr::{Distribution, StandardUniform},
};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use crate::{
	BinaryField, Error, Field,
	arithmetic_traits::{InvertOrZero, Square},
	inversion::invert_mod,
	modulus::Modulus,
	mul::{mul_wide, square_spread},
	reduction::reduce,
};

/// An element of GF(2^n) = GF(2)\[x\] / (M), stored in `L` 64-bit limbs.
///
/// Bit `i` of the little-endian limb vector is the coefficient of `x^i`. Bits at or above
/// `M::DEGREE` are always zero, so every field value has exactly one representation.
///
/// The public limb accessors ([`Self::from_limbs`], [`Self::to_limbs`]) use the opposite order,
/// most significant limb first.
#[repr(transparent)]
pub struct GfElement<M: Modulus, const L: usize> {
	limbs: [u64; L],
	_marker: PhantomData<M>,
}

impl<M: Modulus, const L: usize> GfElement<M, L> {
	const LAYOUT: () = assert!(L == M::N_LIMBS, "limb count does not match the modulus degree");

	/// Builds an element from little-endian limbs that already satisfy the degree invariant.
	#[inline]
	pub(crate) const fn from_limbs_le(limbs: [u64; L]) -> Self {
		let () = Self::LAYOUT;
		Self {
			limbs,
			_marker: PhantomData,
		}
	}

	#[inline]
	pub(crate) const fn limbs_le(self) -> [u64; L] {
		self.limbs
	}

	/// Builds an element from limbs given most significant first.
	///
	/// # Errors
	///
	/// Returns [`Error::LimbCountMismatch`] if `limbs` does not have exactly `L` entries and
	/// [`Error::NonCanonical`] if any bit at or above the field degree is set.
	pub fn from_limbs(limbs: &[u64]) -> Result<Self, Error> {
		if limbs.len() != L {
			return Err(Error::LimbCountMismatch {
				expected: L,
				actual: limbs.len(),
			});
		}
		if limbs[0] & !M::TOP_LIMB_MASK != 0 {
			return Err(Error::NonCanonical { degree: M::DEGREE });
		}

		let mut le = [0u64; L];
		for (dst, &src) in le.iter_mut().zip(limbs.iter().rev()) {
			*dst = src;
		}
		Ok(Self::from_limbs_le(le))
	}

	/// Returns the limbs, most significant first.
	pub fn to_limbs(self) -> [u64; L] {
		let mut limbs = self.limbs;
		limbs.reverse();
		limbs
	}

	/// Draws a uniformly random element from the thread-local generator.
	pub fn random_element() -> Self {
		rand::rng().random()
	}

	#[inline]
	fn map_limbs(self, rhs: Self, f: impl Fn(u64, u64) -> u64) -> Self {
		let mut limbs = self.limbs;
		for (limb, rhs_limb) in limbs.iter_mut().zip(rhs.limbs) {
			*limb = f(*limb, rhs_limb);
		}
		Self::from_limbs_le(limbs)
	}
}

impl<M: Modulus, const L: usize> Clone for GfElement<M, L> {
	#[inline]
	fn clone(&self) -> Self {
		*self
	}
}

impl<M: Modulus, const L: usize> Copy for GfElement<M, L> {}

impl<M: Modulus, const L: usize> Default for GfElement<M, L> {
	#[inline]
	fn default() -> Self {
		Self::ZERO
	}
}

impl<M: Modulus, const L: usize> ConstantTimeEq for GfElement<M, L> {
	#[inline]
	fn ct_eq(&self, other: &Self) -> Choice {
		self.limbs[..].ct_eq(&other.limbs[..])
	}
}

impl<M: Modulus, const L: usize> ConditionallySelectable for GfElement<M, L> {
	#[inline]
	fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
		let mut limbs = a.limbs;
		for (limb, b_limb) in limbs.iter_mut().zip(&b.limbs) {
			*limb = u64::conditional_select(limb, b_limb, choice);
		}
		Self::from_limbs_le(limbs)
	}
}

impl<M: Modulus, const L: usize> PartialEq for GfElement<M, L> {
	#[inline]
	fn eq(&self, other: &Self) -> bool {
		self.ct_eq(other).into()
	}
}

impl<M: Modulus, const L: usize> Eq for GfElement<M, L> {}

impl<M: Modulus, const L: usize> Hash for GfElement<M, L> {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.limbs.hash(state);
	}
}

impl<M: Modulus, const L: usize> Neg for GfElement<M, L> {
	type Output = Self;

	#[inline]
	fn neg(self) -> Self::Output {
		self
	}
}

impl<M: Modulus, const L: usize> Add<Self> for GfElement<M, L> {
	type Output = Self;

	#[inline]
	#[allow(clippy::suspicious_arithmetic_impl)]
	fn add(self, rhs: Self) -> Self::Output {
		self.map_limbs(rhs, |a, b| a ^ b)
	}
}

impl<M: Modulus, const L: usize> Add<&Self> for GfElement<M, L> {
	type Output = Self;

	#[inline]
	fn add(self, rhs: &Self) -> Self::Output {
		self + *rhs
	}
}

impl<M: Modulus, const L: usize> Sub<Self> for GfElement<M, L> {
	type Output = Self;

	#[inline]
	#[allow(clippy::suspicious_arithmetic_impl)]
	fn sub(self, rhs: Self) -> Self::Output {
		self.map_limbs(rhs, |a, b| a ^ b)
	}
}

impl<M: Modulus, const L: usize> Sub<&Self> for GfElement<M, L> {
	type Output = Self;

	#[inline]
	fn sub(self, rhs: &Self) -> Self::Output {
		self - *rhs
	}
}

impl<M: Modulus, const L: usize> Mul<Self> for GfElement<M, L> {
	type Output = Self;

	#[inline]
	fn mul(self, rhs: Self) -> Self::Output {
		crate::tracing::trace_multiplication!(M::NAME);

		Self::from_limbs_le(reduce::<M, L>(mul_wide(&self.limbs, &rhs.limbs)))
	}
}

impl<M: Modulus, const L: usize> Mul<&Self> for GfElement<M, L> {
	type Output = Self;

	#[inline]
	fn mul(self, rhs: &Self) -> Self::Output {
		self * *rhs
	}
}

impl<M: Modulus, const L: usize> AddAssign<Self> for GfElement<M, L> {
	#[inline]
	fn add_assign(&mut self, rhs: Self) {
		*self = *self + rhs;
	}
}

impl<M: Modulus, const L: usize> AddAssign<&Self> for GfElement<M, L> {
	#[inline]
	fn add_assign(&mut self, rhs: &Self) {
		*self = *self + rhs;
	}
}

impl<M: Modulus, const L: usize> SubAssign<Self> for GfElement<M, L> {
	#[inline]
	fn sub_assign(&mut self, rhs: Self) {
		*self = *self - rhs;
	}
}

impl<M: Modulus, const L: usize> SubAssign<&Self> for GfElement<M, L> {
	#[inline]
	fn sub_assign(&mut self, rhs: &Self) {
		*self = *self - rhs;
	}
}

impl<M: Modulus, const L: usize> MulAssign<Self> for GfElement<M, L> {
	#[inline]
	fn mul_assign(&mut self, rhs: Self) {
		*self = *self * rhs;
	}
}

impl<M: Modulus, const L: usize> MulAssign<&Self> for GfElement<M, L> {
	#[inline]
	fn mul_assign(&mut self, rhs: &Self) {
		*self = *self * rhs;
	}
}

impl<M: Modulus, const L: usize> Sum<Self> for GfElement<M, L> {
	#[inline]
	fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
		iter.fold(Self::ZERO, |acc, x| acc + x)
	}
}

impl<'a, M: Modulus, const L: usize> Sum<&'a Self> for GfElement<M, L> {
	#[inline]
	fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
		iter.fold(Self::ZERO, |acc, x| acc + x)
	}
}

impl<M: Modulus, const L: usize> Product<Self> for GfElement<M, L> {
	#[inline]
	fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
		iter.fold(Self::ONE, |acc, x| acc * x)
	}
}

impl<'a, M: Modulus, const L: usize> Product<&'a Self> for GfElement<M, L> {
	#[inline]
	fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
		iter.fold(Self::ONE, |acc, x| acc * x)
	}
}

impl<M: Modulus, const L: usize> Square for GfElement<M, L> {
	#[inline]
	fn square(self) -> Self {
		Self::from_limbs_le(reduce::<M, L>(square_spread(&self.limbs)))
	}
}

impl<M: Modulus, const L: usize> InvertOrZero for GfElement<M, L> {
	#[inline]
	fn invert_or_zero(self) -> Self {
		self.invert().unwrap_or(Self::ZERO)
	}
}

impl<M: Modulus, const L: usize> Field for GfElement<M, L> {
	const ZERO: Self = Self::from_limbs_le([0; L]);
	const ONE: Self = {
		let mut limbs = [0; L];
		limbs[0] = 1;
		Self::from_limbs_le(limbs)
	};
	const CHARACTERISTIC: usize = 2;

	fn double(&self) -> Self {
		Self::ZERO
	}

	/// Computes the multiplicative inverse with the extended Euclidean algorithm.
	///
	/// # Guarantees
	///
	/// **This operation is variable time with respect to `self`.** For a constant-time inverse,
	/// use `self.pow(p - 2)` with [`Field::pow`], where `p = 2^n`.
	fn invert(&self) -> Result<Self, Error> {
		match invert_mod::<M, L>(&self.limbs) {
			Some(limbs) => Ok(Self::from_limbs_le(limbs)),
			None => {
				tracing::debug!(field = M::NAME, "attempted to invert the zero element");
				Err(Error::ZeroInversion)
			}
		}
	}
}

impl<M: Modulus, const L: usize> BinaryField for GfElement<M, L> {
	const N_BITS: usize = M::DEGREE;
}

impl<M: Modulus, const L: usize> Distribution<GfElement<M, L>> for StandardUniform {
	fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> GfElement<M, L> {
		let mut limbs: [u64; L] = std::array::from_fn(|_| rng.random());
		limbs[L - 1] &= M::TOP_LIMB_MASK;
		GfElement::from_limbs_le(limbs)
	}
}

/// Small-integer constructor: the element whose coefficients are the bits of `value`.
impl<M: Modulus, const L: usize> From<u32> for GfElement<M, L> {
	#[inline]
	fn from(value: u32) -> Self {
		let mut limbs = [0; L];
		limbs[0] = value as u64;
		Self::from_limbs_le(limbs)
	}
}

impl<M: Modulus, const L: usize> Display for GfElement<M, L> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let top_width = (M::DEGREE - 64 * (L - 1)) / 4;
		let mut limbs = self.limbs.iter().rev();
		if let Some(top) = limbs.next() {
			write!(f, "0x{top:0>top_width$x}")?;
		}
		for limb in limbs {
			write!(f, "{limb:016x}")?;
		}
		Ok(())
	}
}

impl<M: Modulus, const L: usize> Debug for GfElement<M, L> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}({self})", M::NAME)
	}
}

// SAFETY: the type is a transparent wrapper over `[u64; L]`, for which all-zeros is valid.
unsafe impl<M: Modulus, const L: usize> Zeroable for GfElement<M, L> {}

// SAFETY: the type is a transparent wrapper over `[u64; L]`, which is `Pod`.
unsafe impl<M: Modulus, const L: usize> Pod for GfElement<M, L> {}
