// SPDX-License-Identifier: MIT
//
// boletokit-encoding — The algorithmic core of Boletokit.
//
// Implements the FEBRABAN check-digit algorithms (mod-10 / mod-11), 44-digit
// barcode composition, digitable-line formatting, per-bank free-field rules,
// and the Interleaved 2-of-5 glyph mapping used by barcode fonts. Everything
// is a pure, stateless transformation over validated digit strings; no
// rendering concern leaks in here.

pub mod banks;
pub mod barcode;
pub mod checksum;
pub mod digitable_line;
pub mod i25;

pub use banks::{BancoDoBrasil, BankAdapter, Bradesco};
pub use barcode::{compose_barcode, parse_barcode};
pub use digitable_line::format_digitable_line;
