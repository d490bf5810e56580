// Copyright 2025 Irreducible Inc.

//! Arithmetic over the binary extension fields GF(2^n) for n in {32, 64, 128, 192, 256}.
//!
//! Each field is GF(2)\[x\] modulo a fixed irreducible polynomial. This crate provides:
//!
//! * Addition and subtraction (XOR)
//! * Multiplication and squaring built on a 64x64 carry-less multiply
//! * Inversion by the extended Euclidean algorithm, and constant-time exponentiation
//! * Uniform random sampling
//!
//! All five widths share one generic element type, [`GfElement`], parameterized by a
//! [`Modulus`] and a limb count; [`Gf32`], [`Gf64`], [`Gf128`], [`Gf192`] and [`Gf256`] are
//! the concrete aliases.

pub mod arch;
pub mod arithmetic_traits;
mod element;
mod error;
pub mod field;
mod fields;
mod inversion;
pub mod modulus;
mod mul;
mod poly;
mod random;
mod reduction;
mod tracing;

pub use arithmetic_traits::{InvertOrZero, Square};
pub use element::GfElement;
pub use error::Error;
pub use field::{BinaryField, Field};
pub use fields::{Gf32, Gf64, Gf128, Gf192, Gf256};
pub use modulus::{Gf32Modulus, Gf64Modulus, Gf128Modulus, Gf192Modulus, Gf256Modulus, Modulus};
pub use random::Random;
