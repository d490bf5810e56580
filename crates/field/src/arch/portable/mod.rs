// Copyright 2025 Irreducible Inc.

pub mod clmul;
