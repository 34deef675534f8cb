//! Ignaria CLI - Anthology section extraction and metadata validation for the Ignaria corpus.

use ignaria_cli::commands;
use ignaria_cli::config::OutputFormat;
use ignaria_cli::{Cli, Command, Config, Context, Formatter};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing (log to stderr)
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> ignaria_cli::Result<bool> {
    let config = Config::load(cli.config.as_deref(), &cli.corpus_root)?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let ctx = Context {
        corpus_root: cli.corpus_root,
        formatter: Formatter::new(format, color_enabled),
        config,
    };

    let (operation, summary) = match cli.command {
        Command::Scan(args) => ("Scan", commands::execute_scan(args, &ctx)?),
        Command::Extract(args) => ("Extract", commands::execute_extract(args, &ctx)?),
        Command::Apply(args) => ("Apply", commands::execute_apply(args, &ctx)?),
        Command::Temporal(args) => ("Temporal", commands::execute_temporal(args, &ctx)?),
        Command::Validate(args) => ("Validate", commands::execute_validate(args, &ctx)?),
    };

    if ctx.formatter.format() != OutputFormat::Json {
        println!("{}", ctx.formatter.batch_summary(operation, &summary));
    }
    Ok(summary.is_success())
}
