// Copyright 2025 Irreducible Inc.

//! ARMv8 `PMULL`-accelerated carry-less multiplication.

use core::arch::aarch64::vmull_p64;

/// Full carry-less product of two 64-bit polynomials over GF(2).
#[inline]
pub fn clmul64(x: u64, y: u64) -> u128 {
	// SAFETY: this module is only compiled when the `neon` and `aes` target features are enabled.
	#[allow(unused_unsafe)]
	unsafe {
		vmull_p64(x, y)
	}
}
