//! Fuzz target for Luhn algorithm.
//!
//! Tests that luhn functions never panic and maintain invariants.

#![no_main]

use cardtype::luhn;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Clamp values to valid digit range
    let digits: Vec<u8> = data.iter().map(|&b| b % 10).collect();

    let _ = luhn::validate(&digits);

    // Test check digit generation
    let check = luhn::generate_check_digit(&digits);
    assert!(check <= 9, "Check digit should be 0-9");

    // Adding check digit should make it valid
    let mut with_check = digits.clone();
    with_check.push(check);
    assert!(luhn::validate(&with_check), "Adding check digit should make valid");

    // Any other check digit should not
    let last = with_check.len() - 1;
    with_check[last] = (check + 1) % 10;
    assert!(!luhn::validate(&with_check), "Wrong check digit should fail");
});
