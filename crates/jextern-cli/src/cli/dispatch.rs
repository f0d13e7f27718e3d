//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;
use jextern_emit::Config;

use crate::commands::render::RenderArgs;

pub struct RenderParams {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub indent: usize,
    pub no_docs: bool,
    pub reserved_prefix: Option<String>,
    pub top_type: Option<String>,
}

impl RenderParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: m
                .get_one::<PathBuf>("input")
                .cloned()
                .unwrap_or_else(|| PathBuf::from("-")),
            output: m.get_one::<PathBuf>("output").cloned(),
            indent: m.get_one::<usize>("indent").copied().unwrap_or(2),
            no_docs: m.get_flag("no_docs"),
            reserved_prefix: m.get_one::<String>("reserved_prefix").cloned(),
            top_type: m.get_one::<String>("top_type").cloned(),
        }
    }
}

impl From<RenderParams> for RenderArgs {
    fn from(p: RenderParams) -> Self {
        let mut config = Config::new().indent_width(p.indent).emit_docs(!p.no_docs);
        if let Some(prefix) = p.reserved_prefix {
            config = config.reserved_prefix(prefix);
        }
        if let Some(top_type) = p.top_type {
            config = config.top_type(top_type);
        }
        Self {
            input: p.input,
            output: p.output,
            config,
        }
    }
}
