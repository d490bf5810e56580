// Copyright 2025 Irreducible Inc.

//! `PCLMULQDQ`-accelerated carry-less multiplication.

use core::arch::x86_64::{__m128i, _mm_clmulepi64_si128, _mm_cvtsi64_si128};

/// Full carry-less product of two 64-bit polynomials over GF(2).
#[inline]
pub fn clmul64(x: u64, y: u64) -> u128 {
	// SAFETY: this module is only compiled when the `pclmulqdq` target feature is enabled.
	#[allow(unused_unsafe)]
	unsafe {
		let product = _mm_clmulepi64_si128::<0x00>(
			_mm_cvtsi64_si128(x as i64),
			_mm_cvtsi64_si128(y as i64),
		);
		std::mem::transmute::<__m128i, u128>(product)
	}
}
