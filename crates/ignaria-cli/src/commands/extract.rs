//! Extract command implementation.

use super::{BatchSummary, Context};
use crate::cli::ExtractArgs;
use crate::config::OutputFormat;
use crate::error::Result;
use ignaria_extractor::ExtractionRequest;
use tracing::info;

/// Execute the extract command.
pub fn execute_extract(args: ExtractArgs, ctx: &Context) -> Result<BatchSummary> {
    let mut extractor = ctx.extractor()?;
    let mut summary = BatchSummary::default();

    for volume_id in ctx.target_volumes(&args.volumes)? {
        let request = ExtractionRequest {
            volume_id: volume_id.clone(),
            dry_run: args.dry_run,
        };

        match extractor.extract(request) {
            Ok(outcome) => {
                if ctx.formatter.format() == OutputFormat::Json {
                    println!("{}", ctx.formatter.format_located(&volume_id, &outcome.sections, usize::MAX)?);
                } else {
                    println!("{}", ctx.formatter.extraction_line(&outcome));
                }
                summary.succeeded += 1;
            }
            Err(e) => summary.record_error(&volume_id, &e, &ctx.formatter),
        }
    }

    info!(
        "Extraction finished: {} succeeded, {} skipped, {} failed",
        summary.succeeded, summary.skipped, summary.failed
    );
    Ok(summary)
}
