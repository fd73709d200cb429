// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT
//! The bounded copy must never panic, whatever the input.
#![no_main]
use libfuzzer_sys::fuzz_target;
use stack_smash::copier::{CopyError, LOCAL_CAPACITY, Outcome, process_checked, string_len};

fuzz_target!(|data: &[u8]| {
    let needed = string_len(data) + 1;
    match process_checked(data) {
        Ok(outcome) => {
            assert!(needed <= LOCAL_CAPACITY);
            let mut out = Vec::new();
            outcome.write_to(&mut out).unwrap();
            match outcome {
                Outcome::Secret => assert_eq!(out, b"You found the secret!\n"),
                Outcome::Received(contents) => {
                    assert_eq!(contents, &data[..needed - 1]);
                    assert!(out.starts_with(b"Received: "));
                }
            }
        }
        Err(CopyError::Overflow { needed: reported, capacity }) => {
            assert_eq!(reported, needed);
            assert!(reported > capacity);
        }
    }
});
