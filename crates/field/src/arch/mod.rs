// Copyright 2025 Irreducible Inc.

//! Word-level carry-less multiplication.
//!
//! Every field width is built on [`clmul64`]. The implementation is chosen at compile time: the
//! `PCLMULQDQ` instruction on x86_64, `PMULL` on aarch64, and the constant-time portable routine
//! everywhere else.

pub mod portable;

cfg_if::cfg_if! {
	if #[cfg(all(target_arch = "x86_64", target_feature = "pclmulqdq"))] {
		mod x86_64;
		pub use x86_64::clmul64;
	} else if #[cfg(all(target_arch = "aarch64", target_feature = "neon", target_feature = "aes"))] {
		mod aarch64;
		pub use aarch64::clmul64;
	} else {
		pub use portable::clmul::clmul64;
	}
}

/// Splits a 128-bit value into its `(high, low)` 64-bit halves.
#[inline]
pub const fn split_u128(x: u128) -> (u64, u64) {
	((x >> 64) as u64, x as u64)
}

/// Joins `(high, low)` 64-bit halves into a 128-bit value.
#[inline]
pub const fn join_u64s(high: u64, low: u64) -> u128 {
	((high as u128) << 64) | (low as u128)
}
