//! Shared argument builders for CLI commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Declaration tree JSON, or `-` for stdin (positional).
pub fn input_arg() -> Arg {
    Arg::new("input")
        .value_name("INPUT")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Declaration tree (JSON), or - for stdin")
}

/// Output directory (-o/--output).
pub fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("DIR")
        .value_parser(value_parser!(PathBuf))
        .help("Write one .hx file per declaration under DIR (default: stdout)")
}

/// Indentation width (--indent).
pub fn indent_arg() -> Arg {
    Arg::new("indent")
        .long("indent")
        .value_name("N")
        .default_value("2")
        .value_parser(value_parser!(usize))
        .help("Spaces per indentation level")
}

/// Skip documentation comments (--no-docs).
pub fn no_docs_arg() -> Arg {
    Arg::new("no_docs")
        .long("no-docs")
        .action(ArgAction::SetTrue)
        .help("Don't emit documentation comments")
}

/// Prefix for reserved member names (--reserved-prefix).
pub fn reserved_prefix_arg() -> Arg {
    Arg::new("reserved_prefix")
        .long("reserved-prefix")
        .value_name("PREFIX")
        .help("Prefix for member names that are reserved words [default: do]")
}

/// Universal top type (--top-type).
pub fn top_type_arg() -> Arg {
    Arg::new("top_type")
        .long("top-type")
        .value_name("NAME")
        .help("Top type whose bounds are omitted [default: java.lang.Object]")
}

/// Log verbosity (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .global(true)
        .help("More logging (-v debug, -vv trace); JEXTERN_LOG overrides")
}
