//! Temporal command implementation.

use super::{BatchSummary, Context};
use crate::cli::ReportArgs;
use crate::error::Result;
use ignaria_validator::TemporalValidator;
use std::fs;

/// Execute the temporal command.
pub fn execute_temporal(args: ReportArgs, ctx: &Context) -> Result<BatchSummary> {
    let validator = TemporalValidator::new(ctx.config.validation.clone())?;
    let report = validator.validate(&ctx.store())?;

    println!("{}", ctx.formatter.format_temporal(&report)?);

    if let Some(path) = args.report {
        let yaml = serde_yaml::to_string(&report)?;
        fs::write(&path, yaml)?;
        ctx.formatter.notice(&ctx.formatter.info(&format!("Report saved to {}", path.display())));
    }

    Ok(BatchSummary {
        succeeded: report.complete_volumes().count(),
        skipped: report.skipped,
        failed: report.incomplete_volumes().count() + report.errors.len(),
    })
}
