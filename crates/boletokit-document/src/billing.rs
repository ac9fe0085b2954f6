// SPDX-License-Identifier: MIT
//
// The billing instruction: everything one boleto is generated from.

use boletokit_core::error::{BoletoError, Result};
use boletokit_core::types::{DueDate, MoneyAmount};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One billing instruction, as received from the caller (typically a JSON
/// payload from the invoicing system).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingInstruction {
    /// Clearing code of the collecting bank, e.g. "001".
    pub bank_code: String,
    pub due_date: DueDate,
    /// Date the slip was processed.
    pub processing_date: NaiveDate,
    /// Date of the underlying commercial document.
    pub document_date: NaiveDate,
    /// Face amount encoded into the barcode.
    pub amount: MoneyAmount,
    /// Amount actually charged (face amount plus adjustments).
    pub charged_amount: MoneyAmount,
    #[serde(default)]
    pub discount_amount: MoneyAmount,
    /// Interest / late-payment penalty ("mora / multa / juros").
    #[serde(default)]
    pub penalty_amount: MoneyAmount,
    /// Caller-assigned document number.
    pub document_number: String,
    /// Document kind code, e.g. "DM" (duplicata mercantil).
    pub document_kind: String,
    /// Instruction lines printed in the instructions box.
    #[serde(default)]
    pub instructions: Vec<String>,
    /// Informative lines printed on the payer stub.
    #[serde(default)]
    pub informative: Vec<String>,
    /// Places-of-payment lines; a default is used when empty.
    #[serde(default)]
    pub payment_places: Vec<String>,
    /// Pix "copia e cola" EMV payload, printed as text next to the QR area.
    /// Image generation belongs to the renderer.
    #[serde(default)]
    pub pix_payload: Option<String>,
}

impl BillingInstruction {
    /// Parse an instruction from its JSON interchange form.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reject instructions that cannot produce a printable document.
    pub fn validate(&self) -> Result<()> {
        if self.bank_code.is_empty() {
            return Err(BoletoError::MissingField("bank code"));
        }
        if self.document_number.is_empty() {
            return Err(BoletoError::MissingField("document number"));
        }
        if self.document_kind.is_empty() {
            return Err(BoletoError::MissingField("document kind"));
        }
        Ok(())
    }

    /// Payment-place lines, falling back to the standard wording.
    pub fn payment_places_or_default(&self) -> Vec<String> {
        if self.payment_places.is_empty() {
            vec!["Pagável em qualquer banco até o vencimento.".to_owned()]
        } else {
            self.payment_places.clone()
        }
    }
}
