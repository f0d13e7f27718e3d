use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use jextern_core::parse_declarations;
use jextern_emit::{Config, DirectorySinks, Emitter, StdoutSinks};

pub struct RenderArgs {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub config: Config,
}

pub fn run(args: RenderArgs) {
    let json = read_input(&args.input).unwrap_or_else(|e| {
        eprintln!("error: failed to read {}: {}", args.input.display(), e);
        std::process::exit(1);
    });

    let declarations = parse_declarations(&json).unwrap_or_else(|e| {
        eprintln!("error: invalid declaration tree: {}", e);
        std::process::exit(1);
    });
    tracing::debug!(count = declarations.len(), "loaded declarations");

    let emitter = Emitter::new(args.config);
    let report = match &args.output {
        Some(dir) => emitter.emit_all(&declarations, &mut DirectorySinks::new(dir)),
        None => emitter.emit_all(&declarations, &mut StdoutSinks),
    };

    for (_, err) in &report.failed {
        eprintln!("error: {}", err);
    }
    tracing::info!(
        written = report.written.len(),
        filtered = report.filtered.len(),
        failed = report.failed.len(),
        "render finished"
    );

    if !report.is_success() {
        std::process::exit(1);
    }
}

fn read_input(path: &Path) -> io::Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    fs::read_to_string(path)
}
