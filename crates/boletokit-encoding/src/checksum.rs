// SPDX-License-Identifier: MIT
//
// Mod-10 and mod-11 weighted check digits as defined by the FEBRABAN layout
// standard. Both functions are pure and shared by every other encoding
// component: field check digits in the digitable line use mod-10, the
// barcode's general verification digit and the bank-code display digit use
// mod-11.

use boletokit_core::error::{BoletoError, Result};

fn digit_values(digits: &str) -> Result<Vec<u32>> {
    if digits.is_empty() {
        return Err(BoletoError::InvalidInput("empty digit sequence".into()));
    }
    digits
        .chars()
        .map(|c| {
            c.to_digit(10)
                .ok_or_else(|| BoletoError::InvalidInput(format!("non-digit character '{c}'")))
        })
        .collect()
}

/// Mod-10 check digit.
///
/// Weights alternate 2, 1, 2, ... starting from the rightmost digit; products
/// of 10 or more contribute the sum of their two decimal digits. The check
/// digit is the distance from the weighted sum to the next multiple of ten
/// (0 when the sum already lands on one).
pub fn mod10(digits: &str) -> Result<u8> {
    let values = digit_values(digits)?;
    let sum: u32 = values
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            let weighted = d * if i % 2 == 0 { 2 } else { 1 };
            // Two-digit products fold to their digit sum (max is 9*2 = 18).
            if weighted >= 10 { weighted - 9 } else { weighted }
        })
        .sum();
    Ok(((10 - sum % 10) % 10) as u8)
}

/// Mod-11 check digit with the FEBRABAN exception table.
///
/// Weights cycle 2..=9 from the rightmost digit. With `rem = sum % 11` the
/// raw result is `11 - rem`; the standard then defines the check digit as 1
/// whenever `rem` is 0 or 1 (equivalently, whenever the raw result would be
/// 10 or 11). The returned digit is therefore always in 0..=9, never 10
/// or 11.
pub fn mod11(digits: &str) -> Result<u8> {
    let values = digit_values(digits)?;
    let sum: u32 = values
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| d * (2 + (i as u32 % 8)))
        .sum();
    let rem = sum % 11;
    let result = 11 - rem;
    if rem <= 1 || result >= 10 {
        Ok(1)
    } else {
        Ok(result as u8)
    }
}
