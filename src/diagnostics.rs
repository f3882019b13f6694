//! Diagnostics rendering for the sif driver
//!
//! Re-exports the parser's diagnostic types and adds [`render_report`], which draws a
//! [`ParseError`] against its source text with miette's graphical handler.

use miette::{GraphicalReportHandler, GraphicalTheme, LabeledSpan, MietteDiagnostic, NamedSource, Report};

pub use sif_syntax::diagnostics::*;

/// Render `error` with a labelled excerpt of `source`.
///
/// Output is plain text (no ANSI colors) so it is stable in logs and tests. Falls back to the
/// one-line `Display` form if rendering fails.
pub fn render_report(file_name: &str, source: &str, error: &ParseError) -> String {
    let offset = byte_offset(source, error.line, error.column);
    let width = source[offset..].chars().next().map_or(0, char::len_utf8);

    let mut diagnostic = MietteDiagnostic::new(error.to_string())
        .with_code(error.kind.code())
        .with_label(LabeledSpan::at(offset..offset + width, error.kind.message()));
    if let Some(help) = error.kind.help() {
        diagnostic = diagnostic.with_help(help);
    }
    let report = Report::new(diagnostic).with_source_code(NamedSource::new(file_name, source.to_string()));

    let mut out = String::new();
    match GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor()).render_report(&mut out, &*report) {
        Ok(()) => out,
        Err(_) => error.to_string(),
    }
}

/// Byte offset of a 1-based `(line, column)` position, clamped to the end of `source`.
fn byte_offset(source: &str, line: usize, column: usize) -> usize {
    let mut offset = 0;
    for (index, text) in source.split_inclusive('\n').enumerate() {
        if index + 1 == line {
            return text
                .char_indices()
                .nth(column.saturating_sub(1))
                .map_or(offset + text.len(), |(i, _)| offset + i);
        }
        offset += text.len();
    }
    source.len()
}
