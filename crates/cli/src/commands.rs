//! Clap command definition.

use clap::{value_parser, Arg, ArgAction, Command};

/// Build the CLI command.
pub fn build_cli() -> Command {
    Command::new("packtrie-dump")
        .about("Dump a packed trie file as key/value lines")
        .arg(
            Arg::new("input")
                .help("Trie file to read, or - for stdin")
                .required(true),
        )
        .arg(
            Arg::new("separator")
                .long("separator")
                .short('s')
                .help("Byte between key and value (default: tab; \\t is accepted)")
                .value_parser(parse_separator),
        )
        .arg(
            Arg::new("max-depth")
                .long("max-depth")
                .help("Reject tries nested deeper than this")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("One JSON object per record")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("stats")
                .long("stats")
                .help("Print decode statistics to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log verbosity (repeatable)")
                .action(ArgAction::Count),
        )
}

/// Parse a single-byte separator.
pub fn parse_separator(s: &str) -> Result<u8, String> {
    match s {
        "\\t" => Ok(b'\t'),
        _ if s.len() == 1 => Ok(s.as_bytes()[0]),
        _ => Err(format!("separator must be a single byte, got {:?}", s)),
    }
}
