// SPDX-License-Identifier: MIT
//
// Digitable-line ("linha digitável") formatting.
//
// The 44 barcode digits are regrouped into the five FEBRABAN fields, fields
// 1-3 each gain a mod-10 check digit over their own source digits, and the
// result is punctuated for printing. Banking terminals OCR this string, so
// the output is byte-exact: dots after the fifth digit of fields 1-3 and a
// single space between fields.
//
// Field map (barcode positions, 0-indexed):
//   field 1: [0..4]  bank code + currency, [19..24] free field head, + DV
//   field 2: [24..34] free field middle, + DV
//   field 3: [34..44] free field tail, + DV
//   field 4: [4..5]  the general mod-11 check digit, carried unchanged
//   field 5: [5..19] due-date factor + amount

use boletokit_core::error::{BoletoError, Result};
use boletokit_core::types::{BARCODE_LEN, Barcode, DigitableLine};

use crate::checksum;

/// Format the digitable line for a validated barcode.
pub fn format_digitable_line(barcode: &Barcode) -> Result<DigitableLine> {
    format_digitable_line_digits(barcode.as_str())
}

/// Format the digitable line from a raw 44-digit string.
///
/// Anything other than exactly 44 ASCII digits is rejected with
/// [`BoletoError::InvalidBarcodeLength`].
pub fn format_digitable_line_digits(digits: &str) -> Result<DigitableLine> {
    if digits.len() != BARCODE_LEN || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BoletoError::InvalidBarcodeLength(digits.len()));
    }

    let field1 = format!("{}{}", &digits[0..4], &digits[19..24]);
    let field2 = &digits[24..34];
    let field3 = &digits[34..44];
    let field4 = &digits[4..5];
    let field5 = &digits[5..19];

    let dv1 = checksum::mod10(&field1)?;
    let dv2 = checksum::mod10(field2)?;
    let dv3 = checksum::mod10(field3)?;

    let line = format!(
        "{}.{}{dv1} {}.{}{dv2} {}.{}{dv3} {field4} {field5}",
        &field1[0..5],
        &field1[5..9],
        &field2[0..5],
        &field2[5..10],
        &field3[0..5],
        &field3[5..10],
    );
    DigitableLine::new(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BB_BARCODE: &str = "00199988100000001000000002221967000000000717";
    const BB_LINE: &str = "00190.00009 02221.967009 00000.007179 9 98810000000100";

    #[test]
    fn formats_reference_banco_do_brasil_line() {
        let line = format_digitable_line_digits(BB_BARCODE).unwrap();
        assert_eq!(line.as_str(), BB_LINE);
    }

    #[test]
    fn line_has_expected_shape() {
        let line = format_digitable_line_digits(BB_BARCODE).unwrap();
        let s = line.as_str();
        assert_eq!(s.len(), 54);
        assert_eq!(s.matches('.').count(), 3);
        assert_eq!(s.matches(' ').count(), 4);
        assert_eq!(line.digits().len(), 47);
    }

    #[test]
    fn formatting_is_deterministic() {
        let a = format_digitable_line_digits(BB_BARCODE).unwrap();
        let b = format_digitable_line_digits(BB_BARCODE).unwrap();
        assert_eq!(a.as_str(), b.as_str());
    }

    #[test]
    fn carries_general_check_digit_unchanged() {
        let line = format_digitable_line_digits(BB_BARCODE).unwrap();
        // Field 4 is the 4th space-separated token.
        let field4 = line.as_str().split(' ').nth(3).unwrap();
        assert_eq!(field4, "9");
        assert_eq!(field4, &BB_BARCODE[4..5]);
    }

    #[test]
    fn field_check_digits_recompute_from_source_digits() {
        let line = format_digitable_line_digits(BB_BARCODE).unwrap();
        let digits = line.digits();

        // Fields 1-3 occupy digit ranges 0..10, 10..21, 21..32; the last
        // digit of each is its mod-10 DV over the preceding source digits.
        let checks = [(0usize, 10usize), (10, 21), (21, 32)];
        for (start, end) in checks {
            let field = &digits[start..end];
            let (source, dv) = field.split_at(field.len() - 1);
            let expected = checksum::mod10(source).unwrap();
            assert_eq!(dv, expected.to_string(), "field at {start}..{end}");
        }
    }

    #[test]
    fn rejects_43_and_45_digit_input() {
        assert!(matches!(
            format_digitable_line_digits(&"1".repeat(43)),
            Err(BoletoError::InvalidBarcodeLength(43))
        ));
        assert!(matches!(
            format_digitable_line_digits(&"1".repeat(45)),
            Err(BoletoError::InvalidBarcodeLength(45))
        ));
    }

    #[test]
    fn rejects_non_digit_input() {
        let mut bad = BB_BARCODE.to_owned();
        bad.replace_range(10..11, "x");
        assert!(matches!(
            format_digitable_line_digits(&bad),
            Err(BoletoError::InvalidBarcodeLength(44))
        ));
    }
}
