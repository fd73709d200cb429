// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT
//! A deliberately vulnerable stdin echo.
//!
//! [`reader::read_input`] takes one read of up to 100 bytes, and
//! [`copier::process`] copies the resulting string into a 10-byte stack buffer
//! without a bounds check before comparing it with `"secret"`. Inputs of ten
//! bytes or more overflow that buffer. The copy is only reachable through
//! `unsafe`.

pub mod copier;
pub mod reader;

#[cfg(kani)]
mod overflow_proof;

pub use copier::{CopyError, LOCAL_CAPACITY, Outcome, SECRET};
pub use reader::{INPUT_CAPACITY, InputBuffer, read_input};
