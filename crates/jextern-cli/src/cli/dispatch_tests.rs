//! Tests for CLI dispatch logic.

use std::path::PathBuf;

use super::*;
use crate::cli::commands::render_command;

#[test]
fn render_defaults() {
    let m = render_command()
        .try_get_matches_from(["render", "tree.json"])
        .unwrap();
    let params = RenderParams::from_matches(&m);

    assert_eq!(params.input, PathBuf::from("tree.json"));
    assert_eq!(params.output, None);
    assert_eq!(params.indent, 2);
    assert!(!params.no_docs);
    assert_eq!(params.reserved_prefix, None);
    assert_eq!(params.top_type, None);
}

#[test]
fn render_all_flags() {
    let m = render_command()
        .try_get_matches_from([
            "render",
            "-",
            "-o",
            "out",
            "--indent",
            "4",
            "--no-docs",
            "--reserved-prefix",
            "_",
            "--top-type",
            "kotlin.Any",
        ])
        .unwrap();
    let params = RenderParams::from_matches(&m);

    assert_eq!(params.input, PathBuf::from("-"));
    assert_eq!(params.output, Some(PathBuf::from("out")));
    assert_eq!(params.indent, 4);
    assert!(params.no_docs);
    assert_eq!(params.reserved_prefix.as_deref(), Some("_"));
    assert_eq!(params.top_type.as_deref(), Some("kotlin.Any"));
}

#[test]
fn render_requires_input() {
    let result = render_command().try_get_matches_from(["render"]);
    assert!(result.is_err());
}

#[test]
fn indent_must_be_a_number() {
    let result = render_command().try_get_matches_from(["render", "t.json", "--indent", "wide"]);
    assert!(result.is_err());
}

#[test]
fn verbose_is_global() {
    let m = build_cli()
        .try_get_matches_from(["jextern", "render", "t.json", "-vv"])
        .unwrap();
    assert_eq!(m.get_count("verbose"), 2);

    let (name, sub) = m.subcommand().unwrap();
    assert_eq!(name, "render");
    assert_eq!(
        RenderParams::from_matches(sub).input,
        PathBuf::from("t.json")
    );
}

#[test]
fn subcommand_is_required() {
    let result = build_cli().try_get_matches_from(["jextern"]);
    assert!(result.is_err());
}

#[test]
fn help_lists_render_flags() {
    let help = render_command().render_help().to_string();
    assert!(help.contains("--no-docs"));
    assert!(help.contains("--reserved-prefix"));
    assert!(help.contains("--top-type"));
}
