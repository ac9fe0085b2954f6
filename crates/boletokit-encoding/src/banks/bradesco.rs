// SPDX-License-Identifier: MIT
//
// Bradesco (237) free-field rules.
//
// Layout: agency (4) + wallet (2) + nosso número (11) + account (7) + a
// fixed trailing zero.

use boletokit_core::error::Result;
use boletokit_core::types::{BankCode, BeneficiaryAccount, FreeField};

use super::{BankAdapter, pad_field};

/// Bradesco adapter (clearing code 237).
pub struct Bradesco;

impl BankAdapter for Bradesco {
    fn bank_code(&self) -> BankCode {
        BankCode::new("237").expect("static bank code")
    }

    fn name(&self) -> &'static str {
        "Bradesco"
    }

    fn build_free_field(&self, account: &BeneficiaryAccount) -> Result<FreeField> {
        let agency = pad_field("agency", &account.agency, 4)?;
        let wallet = pad_field("wallet", &account.wallet, 2)?;
        let nn = pad_field("nosso número", &account.document_sequence, 11)?;
        let acct = pad_field("account", &account.account, 7)?;
        FreeField::new(format!("{agency}{wallet}{nn}{acct}0"))
    }

    fn wallet_display(&self, account: &BeneficiaryAccount) -> String {
        // Bradesco prints the wallet zero-padded to two digits.
        format!("{:0>2}", account.wallet)
    }
}
