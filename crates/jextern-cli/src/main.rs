mod cli;
mod commands;

use cli::{RenderParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();
    setup_tracing(matches.get_count("verbose"));

    match matches.subcommand() {
        Some(("render", m)) => {
            let params = RenderParams::from_matches(m);
            commands::render::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

/// Log to stderr. `JEXTERN_LOG` takes precedence over `-v`.
fn setup_tracing(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env("JEXTERN_LOG").unwrap_or_else(|_| {
        EnvFilter::new(match verbosity {
            0 => "info",
            1 => "debug",
            _ => "trace",
        })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
