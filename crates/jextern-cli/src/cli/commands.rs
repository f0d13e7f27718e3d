//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("jextern")
        .about("Generate Haxe externs from Java declaration trees")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(render_command())
}

/// Render a declaration tree to extern files.
pub fn render_command() -> Command {
    Command::new("render")
        .about("Render a declaration tree to Haxe externs")
        .override_usage(
            "\
  jextern render <INPUT> [-o <DIR>]
  jextern render - < tree.json",
        )
        .after_help(
            r#"EXAMPLES:
  jextern render tree.json                 # all externs to stdout
  jextern render tree.json -o externs      # externs/<package>/<Name>.hx
  jextern render tree.json --no-docs       # without doc comments
  JEXTERN_LOG=debug jextern render t.json  # log commit/discard decisions"#,
        )
        .arg(input_arg())
        .arg(output_arg())
        .arg(indent_arg())
        .arg(no_docs_arg())
        .arg(reserved_prefix_arg())
        .arg(top_type_arg())
}
