// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT
// kani-verify-fail

//! Model-checking harness that is expected to fail: an 11-byte string handed to
//! the unchecked copy writes two bytes past a 10-byte destination.

use crate::copier::{LOCAL_CAPACITY, unchecked_copy};

#[kani::proof]
#[kani::unwind(12)]
fn unchecked_copy_overruns_buffer() {
    let src = [b'A'; LOCAL_CAPACITY + 1];
    let mut dst = [0u8; LOCAL_CAPACITY];
    unsafe { unchecked_copy(dst.as_mut_ptr(), &src) };
}
