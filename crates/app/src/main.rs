//! Notes - personal notes in the terminal
//!
//! Accounts and notes are kept in a local SQLite file; see `notes-core`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod clipboard;
mod console;
mod frontend;
mod platform;
mod state;
mod viewmodel;

use notes_core::AppConfig;

const DEFAULT_LOG_FILTER: &str = "warn";

fn init_logging(config: &AppConfig) {
    let fallback = config.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() {
    let paths = match platform::ProjectPaths::resolve() {
        Ok(paths) => paths,
        Err(e) => {
            eprintln!("Failed to locate configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Logging is configured from the file, so a bad file can only be
    // reported once a default subscriber is up
    let config = AppConfig::load(&paths.config_file);
    init_logging(config.as_ref().unwrap_or(&AppConfig::default()));

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting Notes");
    platform::log_platform_info(&paths);

    let mut app_state = match state::AppState::new(config, &paths.data_dir) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Failed to open storage: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!(data_dir = %app_state.data_dir().display(), "Storage ready");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = console::Console::new(stdin.lock(), stdout.lock());

    if let Err(e) = console.run(&mut app_state) {
        tracing::error!("Terminal I/O failed: {}", e);
        std::process::exit(1);
    }
}
