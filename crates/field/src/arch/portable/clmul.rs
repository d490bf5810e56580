// Copyright (c) 2019-2025 The RustCrypto Project Developers
// Copyright (c) 2016 Thomas Pornin <pornin@bolet.org>
//
// Permission is hereby granted, free of charge, to any
// person obtaining a copy of this software and associated
// documentation files (the "Software"), to deal in the
// Software without restriction, including without
// limitation the rights to use, copy, modify, merge,
// publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software
// is furnished to do so, subject to the following
// conditions:
//
// The above copyright notice and this permission notice
// shall be included in all copies or substantial portions
// of the Software.

//! Constant-time software implementation of 64x64 -> 128 bit carry-less multiplication.
//!
//! The low half of the product comes from [`bmul64`], which is adapted from the
//! RustCrypto/universal-hashes repository:
//! <https://github.com/RustCrypto/universal-hashes>
//!
//! Which in turn was adapted from BearSSL's `ghash_ctmul64.c`:
//! <https://bearssl.org/gitweb/?p=BearSSL;a=blob;f=src/hash/ghash_ctmul64.c;hb=4b6046412>
//!
//! The high half is recovered by running [`bmul64`] on the bit-reversed operands: the low 64
//! coefficients of `rev(x) * rev(y)` are the coefficients 126 down to 63 of `x * y`.

use std::num::Wrapping;

/// Full carry-less product of two 64-bit polynomials over GF(2).
#[inline]
pub fn clmul64(x: u64, y: u64) -> u128 {
	let low = bmul64(x, y);
	let high = rev64(bmul64(rev64(x), rev64(y))) >> 1;
	crate::arch::join_u64s(high, low)
}

/// Multiplication in GF(2)\[X\], truncated to the low 64-bits, with "holes"
/// (sequences of zeroes) to avoid carry spilling.
///
/// When carries do occur, they wind up in a "hole" and are subsequently masked
/// out of the result.
#[inline]
pub fn bmul64(x: u64, y: u64) -> u64 {
	let x0 = Wrapping(x & 0x1111_1111_1111_1111);
	let x1 = Wrapping(x & 0x2222_2222_2222_2222);
	let x2 = Wrapping(x & 0x4444_4444_4444_4444);
	let x3 = Wrapping(x & 0x8888_8888_8888_8888);
	let y0 = Wrapping(y & 0x1111_1111_1111_1111);
	let y1 = Wrapping(y & 0x2222_2222_2222_2222);
	let y2 = Wrapping(y & 0x4444_4444_4444_4444);
	let y3 = Wrapping(y & 0x8888_8888_8888_8888);

	let mut z0 = ((x0 * y0) ^ (x1 * y3) ^ (x2 * y2) ^ (x3 * y1)).0;
	let mut z1 = ((x0 * y1) ^ (x1 * y0) ^ (x2 * y3) ^ (x3 * y2)).0;
	let mut z2 = ((x0 * y2) ^ (x1 * y1) ^ (x2 * y0) ^ (x3 * y3)).0;
	let mut z3 = ((x0 * y3) ^ (x1 * y2) ^ (x2 * y1) ^ (x3 * y0)).0;

	z0 &= 0x1111_1111_1111_1111;
	z1 &= 0x2222_2222_2222_2222;
	z2 &= 0x4444_4444_4444_4444;
	z3 &= 0x8888_8888_8888_8888;

	z0 | z1 | z2 | z3
}

/// Bit-reverse a `u64` in constant time
#[inline]
pub fn rev64(mut x: u64) -> u64 {
	x = ((x & 0x5555_5555_5555_5555) << 1) | ((x >> 1) & 0x5555_5555_5555_5555);
	x = ((x & 0x3333_3333_3333_3333) << 2) | ((x >> 2) & 0x3333_3333_3333_3333);
	x = ((x & 0x0f0f_0f0f_0f0f_0f0f) << 4) | ((x >> 4) & 0x0f0f_0f0f_0f0f_0f0f);
	x = ((x & 0x00ff_00ff_00ff_00ff) << 8) | ((x >> 8) & 0x00ff_00ff_00ff_00ff);
	x = ((x & 0xffff_0000_ffff) << 16) | ((x >> 16) & 0xffff_0000_ffff);
	x.rotate_right(32)
}
