//! Command implementations for the bibcorpus CLI
//!
//! This module contains the main command execution logic, logging setup,
//! and run-summary reporting for the CLI interface.

use crate::app::services::bib_parser::{BibParser, RunStatistics};
use crate::app::services::corpus_writer::{CorpusWriter, WriteStats};
use crate::cli::args::{Args, SummaryFormat};
use crate::config::Config;
use crate::Result;
use colored::*;
use indicatif::HumanDuration;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Main command runner for the bibcorpus converter
///
/// This function orchestrates the entire conversion workflow:
/// 1. Set up logging based on CLI flags
/// 2. Validate the input path and assemble the configuration
/// 3. Parse the bibliography with fault-tolerant recovery
/// 4. Write the JSON corpus and print a run summary
pub fn run(args: Args) -> Result<RunStatistics> {
    let start_time = Instant::now();

    setup_logging(&args)?;

    info!("Starting bibcorpus converter");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let config = build_config(&args);
    debug!("Loaded configuration: {:?}", config);
    config.validate()?;

    info!(
        "Starting conversion from {} to {}",
        config.input_path.display(),
        config.output_path.display()
    );

    let parser = BibParser::with_progress(config.show_progress);
    let result = parser.parse_file(&config.input_path)?;

    let writer = CorpusWriter::with_pretty(config.pretty);
    let write_stats = writer.write_corpus(&result.records, &config.output_path)?;

    let elapsed = start_time.elapsed();

    match args.summary_format {
        SummaryFormat::Human => print_human_summary(&config, &result.stats, &write_stats, elapsed),
        SummaryFormat::Json => print_json_summary(&config, &result.stats, &write_stats, elapsed)?,
    }

    Ok(result.stats)
}

/// Assemble the runtime configuration from CLI arguments
fn build_config(args: &Args) -> Config {
    Config::new(args.bib_file.clone())
        .with_output_path(args.output_path.clone())
        .with_pretty(!args.compact)
        .with_progress(args.show_progress())
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("bibcorpus={}", log_level)));

    // Set up subscriber based on output format preference
    if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Print the human-readable run summary
fn print_human_summary(
    config: &Config,
    stats: &RunStatistics,
    write_stats: &WriteStats,
    elapsed: Duration,
) {
    println!("\n{}", "Conversion Summary".bright_green().bold());
    println!(
        "  {} {}",
        "Input:".bright_cyan(),
        config.input_path.display()
    );
    println!(
        "  {} {}",
        "Output:".bright_cyan(),
        config.output_path.display()
    );
    println!(
        "  {} {}",
        "Time elapsed:".bright_cyan(),
        HumanDuration(elapsed).to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Entries processed:".bright_cyan(),
        stats.processed.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Valid entries:".bright_cyan(),
        stats.valid.to_string().bright_white().bold()
    );
    if stats.disregarded > 0 {
        println!(
            "  {} {}",
            "Disregarded entries:".bright_red(),
            stats.disregarded.to_string().bright_red().bold()
        );
    }
    println!(
        "  {} {}",
        "Corpus size:".bright_cyan(),
        WriteStats::format_bytes(write_stats.bytes_written).bright_white()
    );

    if !stats.field_counts.is_empty() {
        println!("\n{}", "Field occurrence (valid entries)".bright_green().bold());
        for (field, count) in &stats.field_counts {
            println!(
                "  {} {} ({})",
                format!("{:<18}", field).bright_cyan(),
                format!("{:>6}", count).bright_white(),
                format!("{:.2}%", stats.field_percentage(field))
            );
        }
    }

    if !stats.year_counts.is_empty() {
        println!("\n{}", "Entries per year".bright_green().bold());
        for (year, count) in &stats.year_counts {
            println!(
                "  {} {}",
                format!("{:<8}", year).bright_cyan(),
                count.to_string().bright_white()
            );
        }
    }

    println!();
}

/// Print the run summary as JSON for machine consumption
fn print_json_summary(
    config: &Config,
    stats: &RunStatistics,
    write_stats: &WriteStats,
    elapsed: Duration,
) -> Result<()> {
    let summary = summary_json(config, stats, write_stats, elapsed);
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

/// Build the JSON summary document
fn summary_json(
    config: &Config,
    stats: &RunStatistics,
    write_stats: &WriteStats,
    elapsed: Duration,
) -> serde_json::Value {
    serde_json::json!({
        "input": config.input_path.display().to_string(),
        "output": config.output_path.display().to_string(),
        "entries_processed": stats.processed,
        "entries_valid": stats.valid,
        "entries_disregarded": stats.disregarded,
        "success_rate": stats.success_rate(),
        "field_counts": &stats.field_counts,
        "year_counts": &stats.year_counts,
        "records_written": write_stats.records_written,
        "bytes_written": write_stats.bytes_written,
        "processing_time_seconds": elapsed.as_secs_f64(),
    })
}
