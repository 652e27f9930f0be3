use std::path::Path;
use std::sync::Mutex;

use clap::Parser;
use tick::cli::commands::Cli;
use tick::cli::handlers::{self, Context};
use tick::io::config_io::{load_config, resolve_data_dir};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(cli.config.as_deref())?;
    let data_dir = resolve_data_dir(cli.data_dir.as_deref(), &config);

    match cli.command {
        None => {
            // No subcommand → launch TUI
            install_file_tracing(&data_dir);
            tick::tui::run(&data_dir, config)
        }
        Some(command) => {
            install_stderr_tracing();
            let ctx = Context {
                json: cli.json,
                data_dir,
                config,
            };
            handlers::dispatch(command, &ctx)
        }
    }
}

/// RUST_LOG if set, otherwise warnings only
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

fn install_stderr_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

/// The TUI owns the terminal, so its log goes to `<data_dir>/tick.log`
fn install_file_tracing(data_dir: &Path) {
    let file = match tick::tui::app::open_log_file(data_dir) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("warning: logging disabled: {}", e);
            return;
        }
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();
}
