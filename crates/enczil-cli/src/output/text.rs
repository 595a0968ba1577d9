//! Text output formatting.

use enczil_core::FileReport;

use crate::commands::HeaderSummary;
use crate::ui::theme::{styled, styles};
use crate::ui::{format_bytes, kv, receipt, UiContext};

pub fn print_report_text(ctx: &UiContext, report: &FileReport) {
    let items = [
        ("Output", report.destination.display().to_string()),
        ("Size", format_bytes(report.bytes_out)),
    ];
    println!("{}", receipt(ctx, &report.message(), &items));
}

pub fn print_header(ctx: &UiContext, summary: &HeaderSummary) {
    let path = styled(&summary.path.display().to_string(), styles::bold(), ctx.color);
    println!("{}", kv(ctx, "File", &path));
    println!("{}", kv(ctx, "Size", &format_bytes(summary.file_size)));
    println!("{}", kv(ctx, "Salt", &summary.salt));
    println!("{}", kv(ctx, "Nonce", &summary.nonce));
    println!("{}", kv(ctx, "Tag", &summary.tag));
    println!(
        "{}",
        kv(ctx, "Ciphertext", &format!("{} bytes", summary.ciphertext_len))
    );
    println!(
        "{}",
        kv(
            ctx,
            "Plaintext",
            &format!("{}-{} bytes", summary.plaintext_min, summary.plaintext_max)
        )
    );
    println!("{}", kv(ctx, "Cipher", summary.cipher));
    println!(
        "{}",
        kv(
            ctx,
            "KDF",
            &format!("{}, {} iterations", summary.kdf, summary.iterations)
        )
    );
}
