// SPDX-License-Identifier: MIT
//
// boletokit-document — Document assembly for the Boletokit boleto engine.
//
// Holds the billing-side data model (payer, beneficiary, billing
// instruction) and the assembly pipeline that runs the encoding core once
// per instruction, yielding immutable `BoletoDocument` values whose string
// fields a renderer prints verbatim. Drawing, PDF output, and QR-code image
// generation are out of scope; this crate stops at strings and data.

pub mod assembly;
pub mod billing;
pub mod display;
pub mod parties;

pub use assembly::{BoletoDocument, DocumentAssembler};
pub use billing::BillingInstruction;
pub use parties::{Address, Beneficiary, Payer};
