//! Validate command implementation.

use super::{BatchSummary, Context};
use crate::cli::ReportArgs;
use crate::error::Result;
use ignaria_validator::CorpusValidator;

/// Execute the validate command.
pub fn execute_validate(args: ReportArgs, ctx: &Context) -> Result<BatchSummary> {
    let corpus = &ctx.config.corpus;
    let validator = CorpusValidator::new(&ctx.corpus_root, ctx.config.validation.clone())
        .with_paths(&corpus.manifest, &corpus.sources_dir);

    let report = validator.validate();

    if let Some(path) = args.report {
        report.write_to(&path)?;
        ctx.formatter.notice(&ctx.formatter.info(&format!("Report saved to {}", path.display())));
    }
    println!("{}", ctx.formatter.format_validation(&report)?);

    Ok(BatchSummary {
        succeeded: usize::from(report.is_success()),
        skipped: 0,
        failed: report.errors.len(),
    })
}
