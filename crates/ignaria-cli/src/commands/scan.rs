//! Scan command implementation.

use super::{BatchSummary, Context};
use crate::cli::ScanArgs;
use crate::error::Result;

/// Execute the scan command.
pub fn execute_scan(args: ScanArgs, ctx: &Context) -> Result<BatchSummary> {
    let extractor = ctx.extractor()?;
    let mut summary = BatchSummary::default();

    for volume_id in ctx.target_volumes(&args.volumes)? {
        match extractor.preview(&volume_id) {
            Ok(sections) => {
                println!("{}", ctx.formatter.format_located(&volume_id, &sections, args.limit)?);
                summary.succeeded += 1;
            }
            Err(e) => summary.record_error(&volume_id, &e, &ctx.formatter),
        }
    }

    Ok(summary)
}
