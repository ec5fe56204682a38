//! Test card generation example.
//!
//! Run with: `cargo run --example generate --features generate`

use cardtype::{generate, grouped_display, is_valid, CardNetwork};

fn main() {
    println!("=== Test Card Generation ===\n");

    // -------------------------------------------------------------------------
    // Generate cards for each network
    // -------------------------------------------------------------------------
    println!("--- Generate Cards by Network ---\n");

    for network in CardNetwork::ALL {
        let card = generate::generate_card(network);
        println!(
            "  {:16}: {} (valid: {})",
            network.name(),
            card,
            if is_valid(&card) { "yes" } else { "no" }
        );
    }
    println!();

    // -------------------------------------------------------------------------
    // Deterministic generation (for reproducible tests)
    // -------------------------------------------------------------------------
    println!("--- Deterministic Generation ---\n");

    for network in [CardNetwork::Visa, CardNetwork::Amex, CardNetwork::Maestro] {
        println!(
            "  {:16}: {}",
            network.name(),
            generate::generate_card_deterministic(network)
        );
    }
    println!();

    // -------------------------------------------------------------------------
    // Maestro lengths
    // -------------------------------------------------------------------------
    println!("--- Maestro at Every Length ---\n");

    for length in 12..=16 {
        let card = generate::CardGenerator::new(CardNetwork::Maestro)
            .length(length)
            .generate();
        println!(
            "  {:2} digits: {:<20} (valid: {})",
            length,
            grouped_display(&card, CardNetwork::Maestro.definition()),
            if is_valid(&card) { "yes" } else { "no" }
        );
    }
    println!();

    // -------------------------------------------------------------------------
    // Verify all generated cards are valid
    // -------------------------------------------------------------------------
    println!("--- Validation Check ---\n");

    let test_count = 1000;
    let mut all_valid = true;

    for network in CardNetwork::ALL {
        let valid_count = generate::generate_cards(network, test_count)
            .iter()
            .filter(|card| is_valid(card))
            .count();
        let success = valid_count == test_count;
        all_valid &= success;
        println!(
            "  {:16}: {}/{} valid ({})",
            network.name(),
            valid_count,
            test_count,
            if success { "PASS" } else { "FAIL" }
        );
    }
    println!();

    if all_valid {
        println!("  All generated cards validate!");
    } else {
        println!("  WARNING: Some generated cards failed validation!");
    }
}
