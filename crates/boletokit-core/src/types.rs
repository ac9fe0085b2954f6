// SPDX-License-Identifier: MIT
//
// Core domain types for the Boletokit boleto engine.
//
// Everything here is a pure, immutable value: barcodes, digitable lines, and
// their source fields are computed once per billing instruction and never
// mutated. Width invariants are enforced at construction so the encoding
// algorithms can assume well-formed input.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{BoletoError, Result};

/// Width of the full barcode, in digits.
pub const BARCODE_LEN: usize = 44;
/// Width of the bank-specific free field, in digits.
pub const FREE_FIELD_LEN: usize = 25;
/// Width of the amount field, in digits.
pub const AMOUNT_LEN: usize = 10;
/// Width of the due-date factor field, in digits.
pub const DUE_DATE_FACTOR_LEN: usize = 4;

/// Base date of the FEBRABAN due-date factor ("fator de vencimento").
pub const DUE_DATE_EPOCH: (i32, u32, u32) = (1997, 10, 7);

fn all_ascii_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Unique identifier stamped on each assembled boleto document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(pub Uuid);

impl DocumentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monetary amount as a non-negative count of centavos.
///
/// Stored in minor units so no floating-point value ever touches a payment
/// instrument.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct MoneyAmount(pub u64);

impl MoneyAmount {
    pub const fn from_centavos(centavos: u64) -> Self {
        Self(centavos)
    }

    pub const fn centavos(&self) -> u64 {
        self.0
    }

    /// Serialize as the 10-digit zero-padded barcode amount field.
    ///
    /// Amounts of 10^10 centavos or more do not fit the field and are
    /// surfaced as [`BoletoError::AmountOverflow`] rather than truncated.
    pub fn to_field(&self) -> Result<String> {
        if self.0 >= 10_u64.pow(AMOUNT_LEN as u32) {
            return Err(BoletoError::AmountOverflow(self.0));
        }
        Ok(format!("{:0width$}", self.0, width = AMOUNT_LEN))
    }
}

/// Due date of a boleto, serialized in the barcode as the FEBRABAN
/// "fator de vencimento": days elapsed since 1997-10-07.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DueDate(pub NaiveDate);

impl DueDate {
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub const fn date(&self) -> NaiveDate {
        self.0
    }

    /// Day offset from the factor epoch.
    ///
    /// The factor field is 4 digits wide and rolls over after roughly 27
    /// years; that is a documented limitation of the paper standard. Dates
    /// whose offset falls outside 0..=9999 are surfaced as
    /// [`BoletoError::DateOverflow`] so the caller can decide how to handle
    /// the rollover instead of silently printing a wrong due date.
    pub fn factor(&self) -> Result<u16> {
        let (y, m, d) = DUE_DATE_EPOCH;
        // Components are compile-time constants of a valid date.
        let epoch = NaiveDate::from_ymd_opt(y, m, d)
            .ok_or_else(|| BoletoError::InvalidInput("bad factor epoch".into()))?;
        let offset = (self.0 - epoch).num_days();
        if !(0..=9999).contains(&offset) {
            return Err(BoletoError::DateOverflow(offset));
        }
        Ok(offset as u16)
    }

    /// Serialize as the 4-digit zero-padded factor field.
    pub fn to_field(&self) -> Result<String> {
        Ok(format!(
            "{:0width$}",
            self.factor()?,
            width = DUE_DATE_FACTOR_LEN
        ))
    }
}

/// Three-digit clearing code assigned to a bank by the clearing authority.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct BankCode(String);

impl TryFrom<String> for BankCode {
    type Error = BoletoError;

    fn try_from(code: String) -> Result<Self> {
        Self::new(&code)
    }
}

impl BankCode {
    pub fn new(code: &str) -> Result<Self> {
        if code.len() != 3 || !all_ascii_digits(code) {
            return Err(BoletoError::InvalidFieldWidth {
                field: "bank code",
                expected: 3,
                actual: code.len(),
            });
        }
        Ok(Self(code.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BankCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Currency indicator digit of the barcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Currency {
    /// Brazilian Real, barcode digit 9.
    #[default]
    Real,
}

impl Currency {
    /// The single digit printed in barcode position 4.
    pub const fn digit(&self) -> char {
        match self {
            Self::Real => '9',
        }
    }
}

/// The 25-digit bank-specific segment of the barcode.
///
/// Its internal layout (wallet, agency, account, nosso número allocation) is
/// owned entirely by the bank adapter that produced it; here it is only an
/// exact-width digit string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct FreeField(String);

impl TryFrom<String> for FreeField {
    type Error = BoletoError;

    fn try_from(digits: String) -> Result<Self> {
        Self::new(digits)
    }
}

impl FreeField {
    pub fn new(digits: String) -> Result<Self> {
        if digits.len() != FREE_FIELD_LEN || !all_ascii_digits(&digits) {
            return Err(BoletoError::InvalidFieldWidth {
                field: "free field",
                expected: FREE_FIELD_LEN,
                actual: digits.len(),
            });
        }
        Ok(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FreeField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A complete 44-digit boleto barcode.
///
/// Structure: bank code (3) + currency (1) + general check digit (1) +
/// due-date factor (4) + amount (10) + free field (25). Construction only
/// checks shape; the check digit itself is computed and verified by the
/// encoding crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct Barcode(String);

impl TryFrom<String> for Barcode {
    type Error = BoletoError;

    fn try_from(digits: String) -> Result<Self> {
        Self::new(digits)
    }
}

impl Barcode {
    pub fn new(digits: String) -> Result<Self> {
        if digits.len() != BARCODE_LEN || !all_ascii_digits(&digits) {
            return Err(BoletoError::InvalidBarcodeLength(digits.len()));
        }
        Ok(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Bank code, positions 0..3.
    pub fn bank_code(&self) -> &str {
        &self.0[0..3]
    }

    /// Currency digit, position 3.
    pub fn currency_digit(&self) -> char {
        self.0.as_bytes()[3] as char
    }

    /// General mod-11 check digit, position 4.
    pub fn check_digit(&self) -> u8 {
        self.0.as_bytes()[4] - b'0'
    }

    /// Due-date factor, positions 5..9.
    pub fn due_date_factor(&self) -> &str {
        &self.0[5..9]
    }

    /// Amount field, positions 9..19.
    pub fn amount_field(&self) -> &str {
        &self.0[9..19]
    }

    /// Bank-specific free field, positions 19..44.
    pub fn free_field(&self) -> &str {
        &self.0[19..44]
    }
}

impl std::fmt::Display for Barcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The punctuated, human-readable rendering of a barcode.
///
/// Printed above the bars for manual entry and OCR-scanned by banking
/// terminals, so the exact spacing and punctuation are part of the value.
///
/// Construction enforces the 54-character shape (dots after the fifth digit
/// of fields 1-3, single spaces between fields, digits everywhere else);
/// deriving a line from a [`Barcode`] is the encoding crate's job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct DigitableLine(String);

impl DigitableLine {
    pub fn new(line: String) -> Result<Self> {
        let well_formed = line.len() == 54
            && line.bytes().enumerate().all(|(i, b)| match i {
                5 | 17 | 30 => b == b'.',
                11 | 24 | 37 | 39 => b == b' ',
                _ => b.is_ascii_digit(),
            });
        if !well_formed {
            return Err(BoletoError::InvalidInput(format!(
                "malformed digitable line: {line:?}"
            )));
        }
        Ok(Self(line))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 47 digits of the line with punctuation stripped.
    pub fn digits(&self) -> String {
        self.0.chars().filter(char::is_ascii_digit).collect()
    }
}

impl TryFrom<String> for DigitableLine {
    type Error = BoletoError;

    fn try_from(line: String) -> Result<Self> {
        Self::new(line)
    }
}

impl std::fmt::Display for DigitableLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Beneficiary-side banking identifiers consumed by a bank adapter when it
/// assembles the free field.
///
/// All values are plain digit strings; verification suffixes such as the
/// `-X` on agency/account numbers are display concerns and must be stripped
/// by the caller before encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeneficiaryAccount {
    /// Wallet / collection-method code ("carteira").
    pub wallet: String,
    /// Branch number ("agência"), without verification digit.
    pub agency: String,
    /// Account or beneficiary-contract number, without verification digit.
    pub account: String,
    /// Payee-assigned document sequence ("nosso número").
    pub document_sequence: String,
}
