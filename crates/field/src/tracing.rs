// Copyright 2025 Irreducible Inc.

/// Emits a `TRACE` event named `mul` for every field multiplication when the
/// `trace_multiplications` feature is enabled, with the field name as the `field` value.
/// Expands to nothing otherwise.
#[cfg(feature = "trace_multiplications")]
macro_rules! trace_multiplication {
	($field:expr) => {
		tracing::event!(name: "mul", tracing::Level::TRACE, field = $field);
	};
}

#[cfg(not(feature = "trace_multiplications"))]
macro_rules! trace_multiplication {
	($field:expr) => {};
}

pub(crate) use trace_multiplication;
