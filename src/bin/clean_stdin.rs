//! Simple CLI that reads HTML from stdin and writes the cleaned body HTML
//! to stdout.
//!
//! Flags:
//! - `--json`: print `{"html": ..., "stats": {...}}` instead of bare HTML
//! - `--verbose`: log pass summaries to stderr

use std::io::{self, Read};

use blocko::{clean_bytes, CleanStats, Options};
use log::error;
use serde::Serialize;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

#[derive(Serialize)]
struct Output {
    html: String,
    stats: CleanStats,
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let json = args.iter().any(|a| a == "--json");
    let verbose = args.iter().any(|a| a == "--verbose");

    // Logging goes to stderr, with html5ever's tokenizer noise filtered out
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    let _ = TermLogger::init(
        level,
        ConfigBuilder::new()
            .add_filter_ignore_str("html5ever")
            .build(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    let mut input = Vec::new();
    if let Err(e) = io::stdin().read_to_end(&mut input) {
        error!("Failed to read from stdin: {e}");
        std::process::exit(1);
    }

    let (html, stats) = match clean_bytes(&input, &Options::default()) {
        Ok(cleaned) => cleaned,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    if json {
        println!(
            "{}",
            serde_json::to_string(&Output { html, stats }).unwrap_or_default()
        );
    } else {
        println!("{html}");
    }
}
