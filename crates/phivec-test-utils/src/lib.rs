// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for phivec crates.
//!
//! ## License
//!
//! GPL-3.0-only

mod model;
mod permutations;
mod subprocess;

pub use model::{VecOp, vec_op_strategy, vec_ops_strategy};
pub use permutations::{apply_permutation, index_permutations};
pub use subprocess::{SubprocessOutcome, run_test_as_subprocess};
