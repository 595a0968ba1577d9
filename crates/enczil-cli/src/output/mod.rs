//! Output formatting helpers for the CLI.
//!
//! Reports and header summaries render either as JSON objects or as
//! text receipts, depending on the UI mode.

mod json;
mod text;

pub use json::{header_json, report_json};
pub use text::{print_header, print_report_text};

use enczil_core::FileReport;

use crate::ui::UiContext;

/// Print the outcome of an encrypt/decrypt in the active output mode.
///
/// Quiet mode prints only the destination path so it can be captured by scripts.
pub fn print_report(ctx: &UiContext, report: &FileReport, quiet: bool) {
    if ctx.mode.is_json() {
        println!("{}", report_json(report));
    } else if quiet {
        println!("{}", report.destination.display());
    } else {
        print_report_text(ctx, report);
    }
}
