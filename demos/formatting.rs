//! Card number formatting example.
//!
//! Run with: `cargo run --example formatting`

use cardtype::format::{self, grouped_display_with_separator};
use cardtype::{classify, format_hint, grouped_display};

fn main() {
    println!("=== Card Number Formatting ===\n");

    // -------------------------------------------------------------------------
    // Network-aware grouping
    // -------------------------------------------------------------------------
    println!("--- Grouping by Network ---\n");

    let cards = [
        "4111111111111111",
        "5500000000000004",
        "378282246310005",
        "6011111111111117",
        "30569309025904",
        "6759649826438453",
    ];

    for number in cards {
        let Ok(network) = classify(number) else {
            continue;
        };
        println!("  {}", network.network().name());
        println!("    Input:  {}", number);
        println!("    Output: {}", grouped_display(number, network));
        println!();
    }

    // -------------------------------------------------------------------------
    // Custom separators
    // -------------------------------------------------------------------------
    println!("--- Custom Separators ---\n");

    let number = "378282246310005";
    let Ok(amex) = classify(number) else {
        return;
    };

    println!("  Card: {}", number);
    for sep in [" ", "-", ".", " - "] {
        let formatted = grouped_display_with_separator(number, amex, sep);
        println!("    Separator '{}': {}", sep, formatted);
    }
    println!();

    // -------------------------------------------------------------------------
    // Strip formatting
    // -------------------------------------------------------------------------
    println!("--- Stripping Formatting ---\n");

    for formatted in [
        "4111 1111 1111 1111",
        "4111-1111-1111-1111",
        "  4111  1111  1111  1111  ",
    ] {
        println!("  '{}' -> '{}'", formatted, format::strip_formatting(formatted));
    }
    println!();

    // -------------------------------------------------------------------------
    // Display plus hint (for input fields)
    // -------------------------------------------------------------------------
    println!("--- Display + Hint (as-you-type) ---\n");

    for card in ["4111111111111111", "378282246310005"] {
        println!("  Typing {}:", card);
        for n in 1..=card.len() {
            let typed = &card[..n];
            let Ok(network) = classify(typed) else {
                continue;
            };
            println!(
                "    {:<16} -> [{}{}] {}",
                typed,
                grouped_display(typed, network),
                format_hint(network, n),
                network.network()
            );
        }
        println!();
    }

    // -------------------------------------------------------------------------
    // Round-trip formatting
    // -------------------------------------------------------------------------
    println!("--- Round-trip Formatting ---\n");

    let original = "4111111111111111";
    if let Ok(visa) = classify(original) {
        let formatted = grouped_display(original, visa);
        let stripped = format::strip_formatting(&formatted);

        println!("  Original:  {}", original);
        println!("  Formatted: {}", formatted);
        println!("  Stripped:  {}", stripped);
        println!(
            "  Round-trip success: {}",
            if original == stripped { "yes" } else { "no" }
        );
    }
}
