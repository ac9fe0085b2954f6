// SPDX-License-Identifier: MIT
//
// Bank adapters: the per-bank free-field composition rules.
//
// The 25-digit free field is the only bank-specific segment of the barcode.
// Each supported bank is one adapter implementing `BankAdapter`; adding a
// bank means adding one implementation here without touching the checksum,
// barcode, or digitable-line code.

mod banco_do_brasil;
mod bradesco;

pub use banco_do_brasil::BancoDoBrasil;
pub use bradesco::Bradesco;

use boletokit_core::error::{BoletoError, Result};
use boletokit_core::types::{BankCode, BeneficiaryAccount, FreeField};

use crate::checksum;

/// Capability set every supported bank implements.
///
/// Adapters are stateless; an instance is selected once at document-assembly
/// time and never re-consulted per call beyond these methods.
pub trait BankAdapter: Send + Sync {
    /// Three-digit clearing code assigned to the bank.
    fn bank_code(&self) -> BankCode;

    /// Bank name as printed on the slip header.
    fn name(&self) -> &'static str;

    /// Compose the bank's 25-digit free field from beneficiary identifiers.
    fn build_free_field(&self, account: &BeneficiaryAccount) -> Result<FreeField>;

    /// Display label for the wallet field, where the bank deviates from the
    /// plain wallet code.
    fn wallet_display(&self, account: &BeneficiaryAccount) -> String {
        account.wallet.clone()
    }

    /// Clearing code with its mod-11 verification digit, e.g. `001-9`.
    fn formatted_bank_code(&self) -> String {
        let code = self.bank_code();
        // A valid 3-digit code never fails the checksum.
        let dv = checksum::mod11(code.as_str()).unwrap_or(0);
        format!("{code}-{dv}")
    }
}

/// Look up the adapter for a clearing code.
pub fn adapter_for(code: &str) -> Result<&'static dyn BankAdapter> {
    match code {
        "001" => Ok(&BancoDoBrasil),
        "237" => Ok(&Bradesco),
        other => Err(BoletoError::UnknownBank(other.to_owned())),
    }
}

/// Zero-pad a digit string to an exact width.
///
/// Values longer than the target width or containing non-digits indicate bad
/// upstream data and fail with [`BoletoError::InvalidFieldWidth`] rather than
/// being truncated into a plausible-looking wrong field.
pub(crate) fn pad_field(field: &'static str, value: &str, width: usize) -> Result<String> {
    if value.is_empty()
        || value.len() > width
        || !value.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(BoletoError::InvalidFieldWidth {
            field,
            expected: width,
            actual: value.len(),
        });
    }
    Ok(format!("{value:0>width$}"))
}
