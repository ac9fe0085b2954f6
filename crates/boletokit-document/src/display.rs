// SPDX-License-Identifier: MIT
//
// pt-BR display formatting for the rendering collaborator.
//
// Only presentation strings live here; none of these values ever feed back
// into the encoding core.

use boletokit_core::types::{DueDate, MoneyAmount};
use chrono::NaiveDate;

/// Format centavos as a Brazilian currency figure: `1.234,56`.
///
/// The `R$` prefix is left to the renderer, which typesets it separately.
pub fn format_brl(amount: MoneyAmount) -> String {
    let total = amount.centavos();
    let reais = total / 100;
    let cents = total % 100;

    let digits = reais.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    format!("{grouped},{cents:02}")
}

/// Format a date as `dd/mm/yyyy`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Format a due date as `dd/mm/yyyy`.
pub fn format_due_date(due: DueDate) -> String {
    format_date(due.date())
}

/// Punctuate a CPF (11 digits) or CNPJ (14 digits).
///
/// Returns `None` for any other shape so callers can fall back to the raw
/// value instead of printing a half-punctuated registry number.
pub fn format_national_registry(digits: &str) -> Option<String> {
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match digits.len() {
        11 => Some(format!(
            "{}.{}.{}-{}",
            &digits[0..3],
            &digits[3..6],
            &digits[6..9],
            &digits[9..11]
        )),
        14 => Some(format!(
            "{}.{}.{}/{}-{}",
            &digits[0..2],
            &digits[2..5],
            &digits[5..8],
            &digits[8..12],
            &digits[12..14]
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brl_groups_thousands_with_dots() {
        assert_eq!(format_brl(MoneyAmount::from_centavos(12_544_854)), "125.448,54");
        assert_eq!(format_brl(MoneyAmount::from_centavos(100)), "1,00");
        assert_eq!(format_brl(MoneyAmount::from_centavos(0)), "0,00");
        assert_eq!(format_brl(MoneyAmount::from_centavos(5)), "0,05");
        assert_eq!(
            format_brl(MoneyAmount::from_centavos(123_456_789_012)),
            "1.234.567.890,12"
        );
    }

    #[test]
    fn dates_render_brazilian_order() {
        let date = NaiveDate::from_ymd_opt(2021, 11, 20).unwrap();
        assert_eq!(format_date(date), "20/11/2021");
    }

    #[test]
    fn cpf_and_cnpj_are_punctuated() {
        assert_eq!(
            format_national_registry("12345678901").as_deref(),
            Some("123.456.789-01")
        );
        assert_eq!(
            format_national_registry("43576788000191").as_deref(),
            Some("43.576.788/0001-91")
        );
    }

    #[test]
    fn other_shapes_are_not_punctuated() {
        assert_eq!(format_national_registry("123"), None);
        assert_eq!(format_national_registry("4357678800019a"), None);
        assert_eq!(format_national_registry(""), None);
    }
}
