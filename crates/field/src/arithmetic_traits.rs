// Copyright 2025 Irreducible Inc.

/// Value squaring.
pub trait Square {
	/// Returns the value multiplied by itself.
	#[must_use]
	fn square(self) -> Self;
}

/// Value inversion that maps zero to zero instead of failing.
pub trait InvertOrZero {
	/// Returns the inverted value or zero in case when `self` is zero.
	#[must_use]
	fn invert_or_zero(self) -> Self;
}
