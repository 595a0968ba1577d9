use enczil_core::Operation;

use crate::app::{
    decrypt_with_retry, ensure_destination_free, resolve_destination, resolve_source, AppContext,
};
use crate::cli::TransformArgs;
use crate::output::print_report;

pub fn handle_decrypt(ctx: &AppContext, args: &TransformArgs) -> anyhow::Result<()> {
    let config = ctx.config()?;
    let source = resolve_source(&args.file)?;
    let destination = resolve_destination(
        &source,
        args.output.as_deref(),
        &config.output.suffix,
        Operation::Decrypt,
    )?;
    ensure_destination_free(&destination, args.force || config.output.overwrite)?;

    tracing::debug!(
        source = %source.display(),
        destination = %destination.display(),
        "decrypting"
    );
    let report = decrypt_with_retry(ctx, &source, &destination, args.no_input)?;
    print_report(ctx.ui()?, &report, ctx.quiet());
    Ok(())
}
