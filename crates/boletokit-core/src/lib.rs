// SPDX-License-Identifier: MIT
//
// Boletokit — Core types and error definitions shared across all crates.

pub mod config;
pub mod error;
pub mod types;

pub use config::RenderOptions;
pub use error::BoletoError;
pub use types::*;
