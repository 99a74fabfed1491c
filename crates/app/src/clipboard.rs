//! Clipboard access

use std::io::Write;
use std::process::{Command, Stdio};

use crate::platform::DisplayServer;

/// Copy text to the system clipboard, falling back to `wl-copy` on Wayland
/// sessions where arboard cannot reach the compositor.
pub fn copy_text(text: &str) -> bool {
    match arboard::Clipboard::new().and_then(|mut c| c.set_text(text)) {
        Ok(()) => {
            tracing::debug!("Copied to clipboard via arboard");
            return true;
        }
        Err(e) => tracing::debug!(error = %e, "arboard unavailable"),
    }

    if DisplayServer::detect().is_wayland() && wl_copy(text) {
        tracing::debug!("Copied to clipboard via wl-copy");
        return true;
    }

    tracing::warn!("All clipboard methods failed");
    false
}

fn wl_copy(text: &str) -> bool {
    let Ok(mut child) = Command::new("wl-copy")
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
    else {
        return false;
    };

    let written = child
        .stdin
        .take()
        .is_some_and(|mut stdin| stdin.write_all(text.as_bytes()).is_ok());

    matches!(child.wait(), Ok(status) if status.success()) && written
}
