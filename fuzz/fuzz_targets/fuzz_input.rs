//! Fuzz target for the input field buffer.
//!
//! Replays arbitrary keystrokes, including backspaces, and checks the field
//! stays consistent with stateless validation.

#![no_main]

use cardtype::{validate, CardInput};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let mut field = CardInput::new();

    for c in data.chars() {
        if c == '\u{8}' {
            field.pop();
        } else {
            let before = *field.verdict();
            if field.push(c).is_err() {
                assert_eq!(*field.verdict(), before);
            }
        }

        assert!(field.len() <= field.verdict().network().max_length());
        assert_eq!(Ok(*field.verdict()), validate(&field.number()));
    }
});
