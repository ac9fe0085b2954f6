// SPDX-License-Identifier: MIT
//
// Composition and validation of the 44-digit FEBRABAN barcode.
//
// Layout: bank code (3) + currency (1) + general check digit (1) + due-date
// factor (4) + amount (10) + bank free field (25). The check digit is a
// mod-11 over the other 43 digits and is inserted at position 4.

use boletokit_core::error::{BoletoError, Result};
use boletokit_core::types::{Barcode, BankCode, Currency, DueDate, FreeField, MoneyAmount};

use crate::checksum;

/// Compose a barcode from validated fields.
///
/// Deterministic: identical inputs always produce the identical 44-digit
/// string. Overflowing amounts and due dates are surfaced by the field
/// serializers; nothing is ever truncated into a well-formed-looking but
/// financially wrong barcode.
pub fn compose_barcode(
    bank: &BankCode,
    currency: Currency,
    due_date: DueDate,
    amount: MoneyAmount,
    free_field: &FreeField,
) -> Result<Barcode> {
    let payload = format!(
        "{bank}{currency}{factor}{amount}{free}",
        bank = bank.as_str(),
        currency = currency.digit(),
        factor = due_date.to_field()?,
        amount = amount.to_field()?,
        free = free_field.as_str(),
    );
    debug_assert_eq!(payload.len(), 43);

    let dv = checksum::mod11(&payload)?;
    let mut digits = String::with_capacity(44);
    digits.push_str(&payload[..4]);
    digits.push((b'0' + dv) as char);
    digits.push_str(&payload[4..]);

    Barcode::new(digits)
}

/// Validate an externally supplied barcode string.
///
/// Checks shape (exactly 44 ASCII digits) and recomputes the general mod-11
/// check digit against the embedded one. Barcodes received from bank APIs
/// pass through here before being printed.
pub fn parse_barcode(digits: &str) -> Result<Barcode> {
    let barcode = Barcode::new(digits.to_owned())?;

    let mut payload = String::with_capacity(43);
    payload.push_str(&digits[..4]);
    payload.push_str(&digits[5..]);
    let expected = checksum::mod11(&payload)?;
    let actual = barcode.check_digit();
    if expected != actual {
        return Err(BoletoError::CheckDigitMismatch { expected, actual });
    }
    Ok(barcode)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bb_inputs() -> (BankCode, Currency, DueDate, MoneyAmount, FreeField) {
        (
            BankCode::new("001").unwrap(),
            Currency::Real,
            DueDate::from_ymd(2024, 10, 26).unwrap(), // factor 9881
            MoneyAmount::from_centavos(100),
            FreeField::new("0000002221967000000000717".to_owned()).unwrap(),
        )
    }

    #[test]
    fn composes_reference_banco_do_brasil_barcode() {
        let (bank, currency, due, amount, free) = bb_inputs();
        let barcode = compose_barcode(&bank, currency, due, amount, &free).unwrap();
        assert_eq!(
            barcode.as_str(),
            "00199988100000001000000002221967000000000717"
        );
        assert_eq!(barcode.check_digit(), 9);
    }

    #[test]
    fn composes_all_zero_golden_barcode() {
        // Degenerate instrument: epoch due date, zero amount, zero free
        // field. Only the bank code and currency digit contribute to the
        // mod-11 sum, which lands on check digit 5.
        let barcode = compose_barcode(
            &BankCode::new("001").unwrap(),
            Currency::Real,
            DueDate::from_ymd(1997, 10, 7).unwrap(),
            MoneyAmount::from_centavos(0),
            &FreeField::new("0".repeat(25)).unwrap(),
        )
        .unwrap();
        assert_eq!(
            barcode.as_str(),
            "00195000000000000000000000000000000000000000"
        );
    }

    #[test]
    fn composition_is_deterministic() {
        let (bank, currency, due, amount, free) = bb_inputs();
        let a = compose_barcode(&bank, currency, due, amount, &free).unwrap();
        let b = compose_barcode(&bank, currency, due, amount, &free).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn amount_overflow_propagates() {
        let (bank, currency, due, _, free) = bb_inputs();
        let too_big = MoneyAmount::from_centavos(12_345_678_901);
        assert!(matches!(
            compose_barcode(&bank, currency, due, too_big, &free),
            Err(BoletoError::AmountOverflow(_))
        ));
    }

    #[test]
    fn date_overflow_propagates() {
        let (bank, currency, _, amount, free) = bb_inputs();
        let rolled = DueDate::from_ymd(2030, 1, 1).unwrap();
        assert!(matches!(
            compose_barcode(&bank, currency, rolled, amount, &free),
            Err(BoletoError::DateOverflow(_))
        ));
    }

    #[test]
    fn parse_accepts_valid_barcode() {
        let barcode = parse_barcode("00199988100000001000000002221967000000000717").unwrap();
        assert_eq!(barcode.bank_code(), "001");
    }

    #[test]
    fn parse_rejects_corrupted_check_digit() {
        // Same barcode with the DV at position 4 flipped from 9 to 8.
        let err = parse_barcode("00198988100000001000000002221967000000000717").unwrap_err();
        assert!(matches!(
            err,
            BoletoError::CheckDigitMismatch {
                expected: 9,
                actual: 8
            }
        ));
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert!(matches!(
            parse_barcode(&"0".repeat(43)),
            Err(BoletoError::InvalidBarcodeLength(43))
        ));
        assert!(matches!(
            parse_barcode(&"0".repeat(45)),
            Err(BoletoError::InvalidBarcodeLength(45))
        ));
    }
}
