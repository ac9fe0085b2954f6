// SPDX-License-Identifier: MIT
//
// Rendering configuration.

use serde::{Deserialize, Serialize};

/// Immutable layout settings handed to the rendering collaborator.
///
/// The encoding core never reads these; they exist so the renderer receives
/// one explicit configuration value per run instead of consulting a global
/// mutable defaults object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Page height in points.
    pub page_height: f32,
    /// Page width in points.
    pub page_width: f32,
    /// Horizontal layout offset in points.
    pub offset_x: f32,
    /// Vertical layout offset in points.
    pub offset_y: f32,
    /// Body font size in points.
    pub font_size: f32,
    /// Field-title font size in points.
    pub title_font_size: f32,
    /// Font size of the printed digitable line.
    pub digitable_line_font_size: f32,
    /// Font size of the rendered barcode glyph run.
    pub barcode_font_size: f32,
    /// Stroke colour of the ruled layout lines.
    pub layout_color: String,
    /// Whether to print the per-page document sequence.
    pub print_document_sequence: bool,
    /// Whether to show the optional beneficiary-unit row.
    pub show_beneficiary_unit: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            page_height: 600.0,
            page_width: 844.68,
            offset_x: 0.0,
            offset_y: -80.0,
            font_size: 10.0,
            title_font_size: 8.0,
            digitable_line_font_size: 14.0,
            barcode_font_size: 32.0,
            layout_color: "black".to_owned(),
            print_document_sequence: true,
            show_beneficiary_unit: false,
        }
    }
}
