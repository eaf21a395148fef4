//! packtrie-dump: print the contents of a packed trie file.
//!
//! Reads the whole file (or stdin with `-`), decodes it, and writes one line
//! per record to stdout in ascending key order:
//!
//! ```text
//! packtrie-dump words.trie
//! packtrie-dump --separator = --json - < words.trie
//! ```

mod commands;
mod format;

use std::io::{self, BufWriter};
use std::process;

use anyhow::{Context, Result};
use packtrie_core::DecodeOptions;
use packtrie_format::TrieFile;
use tracing::level_filters::LevelFilter;

use commands::build_cli;
use format::{format_error, format_stats, OutputMode, RecordWriter};

fn main() {
    let matches = build_cli().get_matches();
    init_tracing(matches.get_count("verbose"));

    if let Err(e) = run(&matches) {
        eprintln!("{}", format_error(&e));
        process::exit(1);
    }
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn decode_options(matches: &clap::ArgMatches) -> DecodeOptions {
    let mut opts = DecodeOptions::new();
    if let Some(separator) = matches.get_one::<u8>("separator") {
        opts = opts.separator(*separator);
    }
    if let Some(depth) = matches.get_one::<usize>("max-depth") {
        opts = opts.max_depth(*depth);
    }
    opts
}

fn run(matches: &clap::ArgMatches) -> Result<()> {
    let options = decode_options(matches);
    let separator = options.separator;
    let mode = if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Lines
    };

    let input = matches
        .get_one::<String>("input")
        .map(|s| s.as_str())
        .unwrap_or("-");

    let trie = if input == "-" {
        TrieFile::from_reader(&mut io::stdin().lock(), options)
    } else {
        TrieFile::open_with(input, options)
    }
    .with_context(|| format!("failed to read trie from {}", input))?;

    let stdout = io::stdout();
    let mut writer = RecordWriter::new(mode, BufWriter::new(stdout.lock()), separator);
    let outcome = trie
        .decode_into(&mut writer)
        .with_context(|| format!("failed to decode {}", input))?;
    writer.finish().context("failed to flush output")?;

    if matches.get_flag("stats") {
        eprintln!("{}", format_stats(&outcome));
    }
    Ok(())
}
