// SPDX-License-Identifier: MIT
//
// Document assembly: one pass of the encoding core per billing instruction.
//
// The assembler selects the bank adapter once, builds the free field,
// composes the barcode and digitable line, and stamps identity and
// timestamps. The resulting `BoletoDocument` is immutable; the renderer
// prints its string fields verbatim.

use boletokit_core::error::Result;
use boletokit_core::types::{Barcode, Currency, DigitableLine, DocumentId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use boletokit_encoding::{BankAdapter, banks, compose_barcode, format_digitable_line, i25};

use crate::billing::BillingInstruction;
use crate::display;
use crate::parties::{Beneficiary, Payer};

/// A fully assembled boleto, ready for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoletoDocument {
    pub id: DocumentId,
    pub created_at: DateTime<Utc>,

    // Machine-readable payment strings.
    pub barcode: Barcode,
    pub digitable_line: DigitableLine,
    /// Code25I glyph run the renderer draws with the barcode font.
    pub barcode_glyphs: String,

    // Bank header.
    pub bank_name: String,
    /// Clearing code with verification digit, e.g. `001-9`.
    pub formatted_bank_code: String,
    /// Wallet code as the bank displays it.
    pub wallet_display: String,

    // Display strings consumed verbatim by the renderer.
    pub amount_display: String,
    pub charged_amount_display: String,
    pub discount_display: String,
    pub penalty_display: String,
    pub due_date_display: String,
    pub processing_date_display: String,
    pub document_date_display: String,

    // Source data carried along for the layout fields.
    pub payer: Payer,
    pub beneficiary: Beneficiary,
    pub instruction: BillingInstruction,
}

/// Stateless assembler; safe to share across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentAssembler;

impl DocumentAssembler {
    pub fn new() -> Self {
        Self
    }

    /// Assemble a single document.
    #[instrument(skip(self, payer, beneficiary, instruction), fields(bank = %instruction.bank_code, document = %instruction.document_number))]
    pub fn assemble(
        &self,
        payer: &Payer,
        beneficiary: &Beneficiary,
        instruction: &BillingInstruction,
    ) -> Result<BoletoDocument> {
        instruction.validate()?;

        let bank = banks::adapter_for(&instruction.bank_code)?;
        let free_field = bank.build_free_field(&beneficiary.account)?;
        debug!(free_field = %free_field, "free field composed");

        let barcode = compose_barcode(
            &bank.bank_code(),
            Currency::Real,
            instruction.due_date,
            instruction.amount,
            &free_field,
        )?;
        let digitable_line = format_digitable_line(&barcode)?;
        let barcode_glyphs = i25::glyphs_for_barcode(&barcode);

        info!(barcode = %barcode, "document assembled");

        Ok(BoletoDocument {
            id: DocumentId::new(),
            created_at: Utc::now(),
            barcode,
            digitable_line,
            barcode_glyphs,
            bank_name: bank.name().to_owned(),
            formatted_bank_code: bank.formatted_bank_code(),
            wallet_display: bank.wallet_display(&beneficiary.account),
            amount_display: display::format_brl(instruction.amount),
            charged_amount_display: display::format_brl(instruction.charged_amount),
            discount_display: display::format_brl(instruction.discount_amount),
            penalty_display: display::format_brl(instruction.penalty_amount),
            due_date_display: display::format_due_date(instruction.due_date),
            processing_date_display: display::format_date(instruction.processing_date),
            document_date_display: display::format_date(instruction.document_date),
            payer: payer.clone(),
            beneficiary: beneficiary.clone(),
            instruction: instruction.clone(),
        })
    }

    /// Assemble a batch of instructions against the same payer/beneficiary
    /// pair, e.g. for a carnê (payment booklet).
    ///
    /// Fails on the first invalid instruction; documents are all-or-nothing
    /// so a booklet never prints with a gap.
    #[instrument(skip_all, fields(count = instructions.len()))]
    pub fn assemble_batch(
        &self,
        payer: &Payer,
        beneficiary: &Beneficiary,
        instructions: &[BillingInstruction],
    ) -> Result<Vec<BoletoDocument>> {
        instructions
            .iter()
            .map(|instruction| self.assemble(payer, beneficiary, instruction))
            .collect()
    }
}
