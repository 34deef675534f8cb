//! Apply command implementation.

use super::{BatchSummary, Context};
use crate::cli::ApplyArgs;
use crate::error::{CliError, Result};
use ignaria_extractor::CuratedSections;

/// Execute the apply command.
pub fn execute_apply(args: ApplyArgs, ctx: &Context) -> Result<BatchSummary> {
    let curated = CuratedSections::load(&args.file)?;
    if curated.is_empty() {
        return Err(CliError::InvalidInput(format!(
            "No volumes listed in {}",
            args.file.display()
        )));
    }

    let mut extractor = ctx.extractor()?;
    let mut summary = BatchSummary::default();

    for entry in &curated.volumes {
        match extractor.apply_curated(entry) {
            Ok(written) => {
                ctx.formatter.notice(
                    &ctx.formatter
                        .success(&format!("{}: {} curated sections", entry.volume, written)),
                );
                summary.succeeded += 1;
            }
            Err(e) => summary.record_error(&entry.volume, &e, &ctx.formatter),
        }
    }

    Ok(summary)
}
