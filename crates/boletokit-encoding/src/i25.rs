// SPDX-License-Identifier: MIT
//
// Interleaved 2-of-5 glyph mapping for barcode fonts.
//
// Barcode fonts in the Code25I family encode one *pair* of digits per glyph.
// Each two-digit value v maps to the character v + 33 (for 0..=93) or
// v + 101 (for 94..=99, skipping the Latin-1 control block), wrapped in the
// font's start (U+00C9) and stop (U+00CA) sentinels. This is a plain text
// transformation; the rendering collaborator draws the resulting string with
// the barcode font.

use boletokit_core::error::{BoletoError, Result};
use boletokit_core::types::Barcode;

/// Start sentinel glyph of the Code25I font.
const START: char = '\u{C9}';
/// Stop sentinel glyph of the Code25I font.
const STOP: char = '\u{CA}';

/// Map a 44-digit barcode to its Code25I glyph run.
pub fn glyphs_for_barcode(barcode: &Barcode) -> String {
    // A Barcode is always 44 digits, so the pair mapping cannot fail.
    glyphs_for_digits(barcode.as_str()).unwrap_or_default()
}

/// Map an even-length digit string to its Code25I glyph run.
///
/// Interleaved 2-of-5 encodes digits two at a time, so odd-length input is
/// rejected, as is anything containing a non-digit.
pub fn glyphs_for_digits(digits: &str) -> Result<String> {
    if digits.is_empty() || digits.len() % 2 != 0 {
        return Err(BoletoError::InvalidInput(format!(
            "interleaved 2-of-5 needs an even number of digits, got {}",
            digits.len()
        )));
    }

    let mut out = String::with_capacity(digits.len() / 2 + 2);
    out.push(START);
    for pair in digits.as_bytes().chunks(2) {
        let hi = (pair[0] as char)
            .to_digit(10)
            .ok_or_else(|| non_digit(pair[0]))?;
        let lo = (pair[1] as char)
            .to_digit(10)
            .ok_or_else(|| non_digit(pair[1]))?;
        let value = hi * 10 + lo;
        let code = if value <= 93 { value + 33 } else { value + 101 };
        // value is at most 99, so code is at most 200 and always a char.
        out.push(char::from_u32(code).unwrap_or(STOP));
    }
    out.push(STOP);
    Ok(out)
}

fn non_digit(byte: u8) -> BoletoError {
    BoletoError::InvalidInput(format!("non-digit character '{}'", byte as char))
}
