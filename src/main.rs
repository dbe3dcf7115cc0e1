use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

use scorecard::dataset::{order_headers, read_csv_path, write_csv_path};
use scorecard::output;
use scorecard::scoring::{assign_badge, score_row, validate_config, Badge};

const EXIT_SUCCESS: i32 = 0;
const EXIT_IO: i32 = 2;
const EXIT_CONFIG: i32 = 4;

/// Separator between rule-hit traces in the output column.
const HIT_SEPARATOR: &str = " | ";

#[derive(Parser, Debug)]
#[command(name = "scorecard")]
#[command(about = "Score business entities from a CSV against YAML rules and assign badges", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to input CSV file
    #[arg(long)]
    inp: PathBuf,

    /// Path to YAML scoring config
    #[arg(long)]
    config: PathBuf,

    /// Path to write output CSV
    #[arg(long)]
    out: PathBuf,

    /// Primary key column name
    #[arg(long, default_value = "entity_id")]
    id_col: String,

    /// Display name column
    #[arg(long, default_value = "name")]
    name_col: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    let start_time = Instant::now();

    // Load config
    let config = match scorecard::config::load_config(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate rule and badge config at startup
    if let Err(errors) = validate_config(&config.rules, &config.badges) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    // Load data
    let frame = match read_csv_path(&cli.inp) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Input error: {:#}", e);
            std::process::exit(EXIT_IO);
        }
    };

    if cli.verbose {
        eprintln!(
            "Loaded {} rows with {} columns from {}",
            frame.rows.len(),
            frame.headers.len(),
            cli.inp.display()
        );
    }

    // Calculate scores and rule hits, then badges
    let results: Vec<_> = frame
        .rows
        .iter()
        .map(|row| score_row(row, &config.rules))
        .collect();
    let badges: Vec<Badge> = results
        .iter()
        .map(|result| assign_badge(result.score, &config.badges))
        .collect();

    // Attach derived columns to each row
    let mut out_frame = frame;
    for col in ["badge", "score", "rule_hits"] {
        if !out_frame.headers.iter().any(|h| h == col) {
            out_frame.headers.push(col.to_string());
        }
    }
    for ((row, result), badge) in out_frame.rows.iter_mut().zip(&results).zip(&badges) {
        row.insert("badge".to_string(), badge.to_string());
        row.insert("score".to_string(), result.score.to_string());
        row.insert("rule_hits".to_string(), result.hits.join(HIT_SEPARATOR));
    }

    // Order columns nicely: key columns and derived columns first
    out_frame.headers = order_headers(
        &out_frame.headers,
        &[
            cli.id_col.as_str(),
            cli.name_col.as_str(),
            "badge",
            "score",
            "rule_hits",
        ],
    );

    // Save CSV
    if let Err(e) = write_csv_path(&out_frame, &cli.out) {
        eprintln!("Output error: {:#}", e);
        std::process::exit(EXIT_IO);
    }

    // Print a small summary to stdout
    let counts = output::badge_counts(&badges);
    let use_colors = output::should_use_colors();
    println!("{}", output::format_summary(&counts, &cli.out, use_colors));

    if cli.verbose {
        eprintln!(
            "Scored {} rows in {:?}",
            out_frame.rows.len(),
            start_time.elapsed()
        );
    }

    std::process::exit(EXIT_SUCCESS);
}
