//! flagenv CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use flagenv::cli::{Cli, CommandDispatcher};
use flagenv::ui::{should_use_colors, Theme};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr so reports on stdout stay machine readable.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("flagenv=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("flagenv=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("flagenv starting with args: {:?}", cli);

    let theme = if cli.no_color || !should_use_colors() {
        console::set_colors_enabled(false);
        Theme::plain()
    } else {
        Theme::new()
    };

    let dispatcher = CommandDispatcher::new(theme.clone());
    let mut stdout = std::io::stdout().lock();

    match dispatcher.dispatch(&cli, &mut stdout) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            eprintln!("{}", theme.format_error(&format!("Error: {}", e)));
            ExitCode::from(1)
        }
    }
}
