use enczil_core::Operation;

use crate::app::{
    encrypt_with_passphrase, ensure_destination_free, resolve_destination, resolve_source,
    AppContext,
};
use crate::cli::TransformArgs;
use crate::output::print_report;

pub fn handle_encrypt(ctx: &AppContext, args: &TransformArgs) -> anyhow::Result<()> {
    let config = ctx.config()?;
    let source = resolve_source(&args.file)?;
    let destination = resolve_destination(
        &source,
        args.output.as_deref(),
        &config.output.suffix,
        Operation::Encrypt,
    )?;
    ensure_destination_free(&destination, args.force || config.output.overwrite)?;

    tracing::debug!(
        source = %source.display(),
        destination = %destination.display(),
        "encrypting"
    );
    let report = encrypt_with_passphrase(ctx, &source, &destination, args.no_input)?;
    print_report(ctx.ui()?, &report, ctx.quiet());
    Ok(())
}
