//! WebAssembly bindings for card number input fields.
//!
//! This module provides JavaScript-friendly bindings for the cardtype library.
//!
//! # Usage from JavaScript
//!
//! ```javascript
//! import init, { classify_card, validate_card, grouped_display, format_hint } from 'cardtype';
//!
//! await init();
//!
//! // On every keystroke
//! const digits = input.value.replace(/\D/g, "");
//! const result = validate_card(digits);
//! if (result.error) {
//!     console.log(`Error: ${result.error}`);
//! } else {
//!     icon.dataset.network = result.network;
//!     field.value = grouped_display(digits);
//!     hint.textContent = format_hint(digits);
//!     field.classList.toggle("invalid", result.complete && !result.valid);
//! }
//! ```

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;

/// Result of card validation, returned to JavaScript.
#[wasm_bindgen]
pub struct VerdictResult {
    network: Option<String>,
    length: usize,
    complete: bool,
    valid: bool,
    error: Option<String>,
}

#[wasm_bindgen]
impl VerdictResult {
    #[wasm_bindgen(getter)]
    pub fn network(&self) -> Option<String> {
        self.network.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.length
    }

    #[wasm_bindgen(getter)]
    pub fn complete(&self) -> bool {
        self.complete
    }

    #[wasm_bindgen(getter)]
    pub fn valid(&self) -> bool {
        self.valid
    }

    #[wasm_bindgen(getter)]
    pub fn error(&self) -> Option<String> {
        self.error.clone()
    }
}

/// Validates a digit string and returns the verdict.
///
/// # Example
/// ```javascript
/// const result = validate_card("4111111111111111");
/// console.log(result.network);  // "Visa"
/// console.log(result.valid);    // true
/// ```
#[wasm_bindgen]
pub fn validate_card(card_number: &str) -> VerdictResult {
    match crate::validate(card_number) {
        Ok(verdict) => VerdictResult {
            network: Some(verdict.network().network().name().to_string()),
            length: verdict.length(),
            complete: verdict.is_complete(),
            valid: verdict.is_valid(),
            error: None,
        },
        Err(e) => VerdictResult {
            network: None,
            length: 0,
            complete: false,
            valid: false,
            error: Some(e.to_string()),
        },
    }
}

/// Classifies a (partial) digit string.
///
/// # Example
/// ```javascript
/// const network = classify_card("37");  // "American Express"
/// ```
#[wasm_bindgen]
pub fn classify_card(card_number: &str) -> Result<String, JsValue> {
    crate::classify(card_number)
        .map(|definition| definition.network().name().to_string())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Quick check if a card number is valid.
#[wasm_bindgen]
pub fn is_valid(card_number: &str) -> bool {
    crate::is_valid(card_number)
}

/// Groups a card number for display, using its classified network.
///
/// Non-digit characters are ignored, so the current field value can be
/// passed back in.
#[wasm_bindgen]
pub fn grouped_display(card_number: &str) -> String {
    let digits = crate::format::strip_formatting(card_number);
    let network = classify_stripped(&digits);
    crate::grouped_display(&digits, network)
}

/// Placeholder hint for the digits still missing after `card_number`.
#[wasm_bindgen]
pub fn format_hint(card_number: &str) -> String {
    let digits = crate::format::strip_formatting(card_number);
    let network = classify_stripped(&digits);
    crate::format_hint(network, digits.len())
}

fn classify_stripped(digits: &str) -> &'static crate::NetworkDefinition {
    let values: Vec<u8> = digits.bytes().map(|b| b - b'0').collect();
    crate::classify_digits(&values)
}

/// Generates a deterministic test card for a network name.
///
/// # Example
/// ```javascript
/// const card = generate_test_card("amex");  // "340000000000009"
/// ```
#[wasm_bindgen]
pub fn generate_test_card(network: &str) -> Result<String, JsValue> {
    let network = crate::CardNetwork::from_name(network)
        .ok_or_else(|| JsValue::from_str(&format!("Unknown network: {}", network)))?;

    Ok(crate::generate::generate_card_deterministic(network))
}

/// Batch validates multiple card numbers.
///
/// Returns an array of validation results; non-string entries are skipped.
///
/// # Example
/// ```javascript
/// const results = validate_batch(["4111111111111111", "5500000000000004"]);
/// results.forEach(r => console.log(r.valid));
/// ```
#[wasm_bindgen]
pub fn validate_batch(card_numbers: js_sys::Array) -> js_sys::Array {
    let results = js_sys::Array::new();

    for card in card_numbers.iter() {
        if let Some(card_str) = card.as_string() {
            results.push(&JsValue::from(validate_card(&card_str)));
        }
    }

    results
}
