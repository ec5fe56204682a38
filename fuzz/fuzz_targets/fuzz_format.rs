//! Fuzz target for card formatting.
//!
//! Tests that formatting functions never panic on arbitrary input.

#![no_main]

use cardtype::format::{self, grouped_display, grouped_display_with_separator};
use cardtype::{format_hint, CardNetwork};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (&str, u8)| {
    let (input, entered) = data;

    for network in CardNetwork::ALL {
        let definition = network.definition();

        let shown = grouped_display(input, definition);
        let _ = grouped_display_with_separator(input, definition, "-");
        let _ = format::split_into_groups(input, definition);
        let _ = format_hint(definition, entered as usize);

        // Verify roundtrip and idempotence
        assert_eq!(
            format::strip_formatting(&shown),
            format::strip_formatting(input),
            "Grouping should preserve digits"
        );
        assert_eq!(grouped_display(&shown, definition), shown);
    }
});
