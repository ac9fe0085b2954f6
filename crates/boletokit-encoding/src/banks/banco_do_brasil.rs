// SPDX-License-Identifier: MIT
//
// Banco do Brasil (001) free-field rules.
//
// BB allocates the free field by agreement ("convênio") size, signalled here
// by the length of the nosso número:
//
//   up to 11 digits: nosso número (11) + agency (4) + account (8) + wallet (2)
//   17 digits:       000000 + nosso número (17) + wallet (2)
//
// The 17-digit form is used by 7-digit convênios, where agency and account
// do not appear in the barcode at all.

use boletokit_core::error::{BoletoError, Result};
use boletokit_core::types::{BankCode, BeneficiaryAccount, FreeField};

use super::{BankAdapter, pad_field};

/// Banco do Brasil adapter (clearing code 001). Reference implementation.
pub struct BancoDoBrasil;

impl BankAdapter for BancoDoBrasil {
    fn bank_code(&self) -> BankCode {
        BankCode::new("001").expect("static bank code")
    }

    fn name(&self) -> &'static str {
        "Banco do Brasil"
    }

    fn build_free_field(&self, account: &BeneficiaryAccount) -> Result<FreeField> {
        let wallet = pad_field("wallet", &account.wallet, 2)?;
        let nn = &account.document_sequence;

        let digits = if nn.len() > 11 {
            let nn = pad_field("nosso número", nn, 17)?;
            format!("000000{nn}{wallet}")
        } else {
            let nn = pad_field("nosso número", nn, 11)?;
            let agency = pad_field("agency", &account.agency, 4)?;
            let acct = pad_field("account", &account.account, 8)?;
            format!("{nn}{agency}{acct}{wallet}")
        };
        FreeField::new(digits)
    }
}
