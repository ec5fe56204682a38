//! Keystroke-by-keystroke input field example.
//!
//! Run with: `cargo run --example keystrokes`

use cardtype::{CardInput, InputEvent, InputState};

fn type_into(field: &mut CardInput, keys: &str) {
    for c in keys.chars() {
        let events = match c {
            '<' => field.pop(),
            _ => match field.push(c) {
                Ok(events) => events,
                Err(e) => {
                    println!("    rejected: {}", e);
                    continue;
                }
            },
        };

        println!(
            "    {:<24} {:?}",
            format!("{}{}", field.display(), field.hint()),
            field.state()
        );
        for event in events {
            match event {
                InputEvent::NetworkChanged { from, to } => {
                    println!("      network: {} -> {}", from, to)
                }
                InputEvent::ValidationFailed { network } => {
                    println!("      invalid {} number", network)
                }
            }
        }
    }
}

fn main() {
    println!("=== Card Input Field ===\n");

    // `<` stands for backspace
    let sessions = [
        ("Visa, typed cleanly", "4111111111111111"),
        ("Amex, one typo then corrected", "378282246310006<5"),
        ("Prefix change mid-way", "35<4"),
        ("Non-digit keystroke", "41-11"),
    ];

    for (title, keys) in sessions {
        println!("  {}:", title);
        let mut field = CardInput::new();
        type_into(&mut field, keys);
        println!(
            "    final: {:?}{}",
            field.state(),
            if field.state() == InputState::CompleteValid {
                " (ready to submit)"
            } else {
                ""
            }
        );
        println!();
    }
}
