//! Fuzz target for card validation.
//!
//! Tests that classification and validation never panic on arbitrary input
//! and agree with each other.

#![no_main]

use cardtype::{classify, is_valid, validate, validate_digits};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // These should never panic, regardless of input
    let classified = classify(data);
    let validated = validate(data);
    let _ = is_valid(data);

    match (classified, validated) {
        (Ok(network), Ok(verdict)) => {
            assert_eq!(network, verdict.network());
            if verdict.is_valid() {
                assert!(verdict.is_complete());
            }
        }
        (Err(a), Err(b)) => assert_eq!(a, b),
        _ => panic!("classify and validate disagree on {:?}", data),
    }

    // Also test with raw bytes interpreted as digits
    let digits: Vec<u8> = data.bytes().map(|b| b % 10).collect();
    let _ = validate_digits(&digits);
});
