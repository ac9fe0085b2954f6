// SPDX-License-Identifier: MIT
//
// Payer and beneficiary data holders.
//
// Thin value types: the encoding core never sees them, only the already
// validated numeric identifiers inside `BeneficiaryAccount`.

use boletokit_core::types::BeneficiaryAccount;
use serde::{Deserialize, Serialize};

use crate::display;

/// Postal address as printed on the slip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Address {
    /// Street and number ("logradouro").
    pub street: String,
    /// District ("bairro").
    pub district: String,
    pub city: String,
    /// Two-letter state code, e.g. "RJ".
    pub state: String,
    /// Postal code ("CEP"), digits with optional dash.
    pub postal_code: String,
}

impl Address {
    /// Single-line rendering used by the address rows of the slip.
    pub fn as_line(&self) -> String {
        format!(
            "{}, {} - {}/{} - CEP: {}",
            self.street, self.district, self.city, self.state, self.postal_code
        )
    }
}

/// The party who pays the boleto.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payer {
    pub name: String,
    /// CPF or CNPJ, digits only.
    pub national_registry: String,
    pub address: Address,
}

impl Payer {
    /// Name plus punctuated CPF/CNPJ, as shown in the payer field.
    pub fn identification(&self) -> String {
        match display::format_national_registry(&self.national_registry) {
            Some(doc) => format!("{} - {}", self.name, doc),
            None => self.name.clone(),
        }
    }
}

/// The party who receives the payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Beneficiary {
    pub name: String,
    /// CPF or CNPJ, digits only.
    pub national_registry: String,
    /// Banking identifiers consumed by the bank adapter.
    pub account: BeneficiaryAccount,
    pub address: Address,
}

impl Beneficiary {
    pub fn identification(&self) -> String {
        match display::format_national_registry(&self.national_registry) {
            Some(doc) => format!("{} - {}", self.name, doc),
            None => self.name.clone(),
        }
    }

    /// Agency/account display, e.g. `4559 / 115737`.
    pub fn agency_and_account(&self) -> String {
        format!("{} / {}", self.account.agency, self.account.account)
    }
}
