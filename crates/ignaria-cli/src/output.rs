//! Output formatting for the CLI.

use crate::commands::BatchSummary;
use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use ignaria_domain::TemporalField;
use ignaria_extractor::{ExtractionOutcome, LocatedSection};
use ignaria_validator::{TemporalReport, ValidationReport, ValidationStatus};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format the candidate sections of one volume, at most `limit` rows.
    pub fn format_located(&self, volume_id: &str, sections: &[LocatedSection], limit: usize) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_located_json(volume_id, sections, limit),
            OutputFormat::Table => Ok(self.format_located_table(volume_id, sections, limit)),
            OutputFormat::Quiet => Ok(format!("{}\t{}", volume_id, sections.len())),
        }
    }

    fn format_located_json(&self, volume_id: &str, sections: &[LocatedSection], limit: usize) -> Result<String> {
        let candidates: Vec<serde_json::Value> = sections
            .iter()
            .take(limit)
            .map(|located| {
                serde_json::json!({
                    "line": located.line_number,
                    "pattern": located.pattern,
                    "author": located.section.author,
                    "basis": located.basis.to_string(),
                    "title": located.section.title,
                    "start_marker": located.section.start_marker,
                })
            })
            .collect();

        Ok(serde_json::to_string_pretty(&serde_json::json!({
            "volume": volume_id,
            "total": sections.len(),
            "candidates": candidates,
        }))?)
    }

    fn format_located_table(&self, volume_id: &str, sections: &[LocatedSection], limit: usize) -> String {
        let heading = self.colorize(&format!("{} ({} sections)", volume_id, sections.len()), "cyan");
        if sections.is_empty() {
            return format!("{}\n{}", heading, self.colorize("No section headings found.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["Line", "Pattern", "Author", "Basis", "Title"]);
        for located in sections.iter().take(limit) {
            builder.push_record([
                located.line_number.to_string(),
                located.pattern.clone(),
                located.section.author.clone(),
                located.basis.to_string(),
                located.section.title.clone(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let mut out = format!("{}\n{}", heading, table);
        if sections.len() > limit {
            out.push_str(&format!("\n... and {} more", sections.len() - limit));
        }
        out
    }

    /// Status line for one extracted volume.
    pub fn extraction_line(&self, outcome: &ExtractionOutcome) -> String {
        let mut message = if outcome.is_anthology() {
            format!("{}: {} sections", outcome.volume_id, outcome.sections.len())
        } else {
            format!("{}: no section headings, not an anthology", outcome.volume_id)
        };
        if outcome.carried_annotations > 0 {
            message.push_str(&format!(", {} kept annotations", outcome.carried_annotations));
        }
        if !outcome.written {
            message.push_str(" (dry run)");
        }
        self.success(&message)
    }

    /// Format a temporal completeness report.
    pub fn format_temporal(&self, report: &TemporalReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Quiet => Ok(self.status_line(report.status(), &format!("{:.1}%", report.completion_percent()))),
            OutputFormat::Table => Ok(self.format_temporal_table(report)),
        }
    }

    fn format_temporal_table(&self, report: &TemporalReport) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Volume", "Sections", "Complete", "Missing", "Status"]);
        for volume in &report.volumes {
            let status = if volume.is_complete() {
                "COMPLETE".to_string()
            } else {
                format!("INCOMPLETE ({}/{})", volume.sections_missing_temporal, volume.total_sections)
            };
            builder.push_record([
                volume.volume_id.clone(),
                volume.total_sections.to_string(),
                volume.sections_with_temporal.to_string(),
                volume.sections_missing_temporal.to_string(),
                status,
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let mut lines = vec![table.to_string()];

        for volume in report.incomplete_volumes() {
            lines.push(String::new());
            lines.push(self.colorize(&format!("{}:", volume.volume_id), "yellow"));
            for missing in &volume.missing_sections {
                let fields: Vec<&str> = missing.missing_fields().iter().map(TemporalField::as_str).collect();
                lines.push(format!("  - {}: {}", missing.author, missing.title));
                lines.push(format!("    Missing: {}", fields.join(", ")));
            }
        }

        for warning in &report.warnings {
            lines.push(self.warning(warning));
        }
        for error in &report.errors {
            lines.push(self.error(error));
        }

        lines.push(String::new());
        lines.push(format!(
            "Anthology volumes: {} ({} complete, {} incomplete, {} skipped)",
            report.volumes.len(),
            report.complete_volumes().count(),
            report.incomplete_volumes().count(),
            report.skipped
        ));
        lines.push(format!(
            "Sections: {} total, {} with temporal metadata ({:.1}%)",
            report.total_sections(),
            report.complete_sections(),
            report.completion_percent()
        ));
        lines.push(self.status_line(report.status(), "temporal metadata"));

        lines.join("\n")
    }

    /// Format a corpus integrity report.
    pub fn format_validation(&self, report: &ValidationReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let summary = report.summary();
                Ok(serde_json::to_string_pretty(&serde_json::json!({
                    "validation_summary": summary,
                    "errors": report.errors,
                    "warnings": report.warnings,
                }))?)
            }
            OutputFormat::Quiet => Ok(self.status_line(report.status(), "corpus integrity")),
            OutputFormat::Table => {
                let mut lines: Vec<String> = Vec::new();
                for error in &report.errors {
                    lines.push(self.error(error));
                }
                for warning in &report.warnings {
                    lines.push(self.warning(warning));
                }
                lines.push(format!(
                    "Errors: {}, Warnings: {}",
                    report.errors.len(),
                    report.warnings.len()
                ));
                lines.push(self.status_line(report.status(), "corpus integrity"));
                Ok(lines.join("\n"))
            }
        }
    }

    /// Final line of a batch command.
    pub fn batch_summary(&self, operation: &str, summary: &BatchSummary) -> String {
        let message = format!(
            "{}: {} succeeded, {} skipped, {} failed",
            operation, summary.succeeded, summary.skipped, summary.failed
        );
        if summary.is_success() {
            self.success(&message)
        } else {
            self.error(&message)
        }
    }

    fn status_line(&self, status: ValidationStatus, subject: &str) -> String {
        match status {
            ValidationStatus::Pass => self.success(&format!("PASS {}", subject)),
            ValidationStatus::Fail => self.error(&format!("FAIL {}", subject)),
        }
    }

    /// Whether status lines go to stderr so stdout carries only JSON.
    pub fn notices_on_stderr(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Print a per-volume status line.
    pub fn notice(&self, line: &str) {
        if self.notices_on_stderr() {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}
