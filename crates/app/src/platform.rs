//! Platform integration: standard directories and display server detection

use std::env;
use std::path::PathBuf;

use directories::ProjectDirs;
use notes_core::config::CONFIG_FILE_NAME;
use notes_core::{Error, Result};

/// Overrides the config file location
pub const CONFIG_ENV: &str = "NOTES_CONFIG";

/// Where configuration and data live by default
#[derive(Debug, Clone)]
pub struct ProjectPaths {
    pub config_file: PathBuf,
    pub data_dir: PathBuf,
}

impl ProjectPaths {
    pub fn resolve() -> Result<Self> {
        let dirs = ProjectDirs::from("dev", "notes", "notes").ok_or_else(|| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine home directory",
            ))
        })?;

        let config_file = env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| dirs.config_dir().join(CONFIG_FILE_NAME));

        Ok(Self {
            config_file,
            data_dir: dirs.data_dir().to_path_buf(),
        })
    }
}

/// Detected display server type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayServer {
    Wayland,
    X11,
    /// Headless or plain terminal
    Unknown,
}

impl DisplayServer {
    pub fn detect() -> Self {
        if env::var_os("WAYLAND_DISPLAY").is_some() {
            return DisplayServer::Wayland;
        }
        if env::var_os("DISPLAY").is_some() {
            return DisplayServer::X11;
        }
        DisplayServer::Unknown
    }

    pub fn is_wayland(&self) -> bool {
        matches!(self, DisplayServer::Wayland)
    }
}

impl std::fmt::Display for DisplayServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayServer::Wayland => write!(f, "Wayland"),
            DisplayServer::X11 => write!(f, "X11"),
            DisplayServer::Unknown => write!(f, "Unknown"),
        }
    }
}

pub fn log_platform_info(paths: &ProjectPaths) {
    tracing::info!(display_server = %DisplayServer::detect(), "Display server detected");
    tracing::debug!(
        config = %paths.config_file.display(),
        data = %paths.data_dir.display(),
        "Resolved project paths"
    );
}
