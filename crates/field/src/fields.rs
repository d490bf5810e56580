// Copyright 2025 Irreducible Inc.

use crate::{
	element::GfElement,
	modulus::{Gf32Modulus, Gf64Modulus, Gf128Modulus, Gf192Modulus, Gf256Modulus},
};

/// GF(2^32) modulo x^32 + x^22 + x^2 + x + 1.
pub type Gf32 = GfElement<Gf32Modulus, 1>;

/// GF(2^64) modulo x^64 + x^4 + x^3 + x + 1.
pub type Gf64 = GfElement<Gf64Modulus, 1>;

/// GF(2^128) modulo x^128 + x^7 + x^2 + x + 1.
pub type Gf128 = GfElement<Gf128Modulus, 2>;

/// GF(2^192) modulo x^192 + x^7 + x^2 + x + 1.
pub type Gf192 = GfElement<Gf192Modulus, 3>;

/// GF(2^256) modulo x^256 + x^10 + x^5 + x^2 + 1.
pub type Gf256 = GfElement<Gf256Modulus, 4>;

impl Gf32 {
	#[inline]
	pub const fn new(value: u32) -> Self {
		Self::from_limbs_le([value as u64])
	}

	#[inline]
	pub const fn val(self) -> u32 {
		self.limbs_le()[0] as u32
	}
}

impl Gf64 {
	#[inline]
	pub const fn new(value: u64) -> Self {
		Self::from_limbs_le([value])
	}

	#[inline]
	pub const fn val(self) -> u64 {
		self.limbs_le()[0]
	}
}

impl Gf128 {
	#[inline]
	pub const fn new(high: u64, low: u64) -> Self {
		Self::from_limbs_le([low, high])
	}

	#[inline]
	pub const fn val(self) -> u128 {
		let [low, high] = self.limbs_le();
		crate::arch::join_u64s(high, low)
	}
}

impl Gf192 {
	#[inline]
	pub const fn new(high: u64, mid: u64, low: u64) -> Self {
		Self::from_limbs_le([low, mid, high])
	}
}

impl Gf256 {
	#[inline]
	pub const fn new(high: u64, mid_high: u64, mid_low: u64, low: u64) -> Self {
		Self::from_limbs_le([low, mid_low, mid_high, high])
	}
}

impl From<Gf32> for u32 {
	#[inline]
	fn from(value: Gf32) -> Self {
		value.val()
	}
}

impl From<u64> for Gf64 {
	#[inline]
	fn from(value: u64) -> Self {
		Self::new(value)
	}
}

impl From<Gf64> for u64 {
	#[inline]
	fn from(value: Gf64) -> Self {
		value.val()
	}
}

impl From<u128> for Gf128 {
	#[inline]
	fn from(value: u128) -> Self {
		let (high, low) = crate::arch::split_u128(value);
		Self::new(high, low)
	}
}

impl From<Gf128> for u128 {
	#[inline]
	fn from(value: Gf128) -> Self {
		value.val()
	}
}
