//! Authentication view model

use notes_core::validation::{validate_login, validate_registration};

use super::notes;
use crate::frontend::Frontend;
use crate::state::AppState;

pub fn login<F: Frontend>(state: &mut AppState, ui: &mut F, username: &str, password: &str) {
    let result = validate_login(username, password)
        .and_then(|()| state.accounts().login(username, password));

    if let Err(e) = result {
        ui.show_auth_error(&e.to_string());
        return;
    }

    state.set_current_user(Some(username.to_string()));
    state.reset_dashboard();
    ui.show_logged_in(username);
    notes::refresh(state, ui);
}

/// Create an account; the user still has to log in afterwards
pub fn register<F: Frontend>(
    state: &mut AppState,
    ui: &mut F,
    username: &str,
    password: &str,
    confirmation: &str,
) {
    let policy = state.config().account_policy();
    let result = validate_registration(username, password, confirmation, policy)
        .and_then(|()| state.accounts().register(username, password));

    match result {
        Ok(()) => ui.show_auth_success("Registration successful"),
        Err(e) => ui.show_auth_error(&e.to_string()),
    }
}

pub fn logout<F: Frontend>(state: &mut AppState, ui: &mut F) {
    if !ui.confirm("Are you sure you want to logout?") {
        return;
    }

    if let Err(e) = state.accounts().logout() {
        ui.show_auth_error(&e.to_string());
        return;
    }

    state.set_current_user(None);
    state.reset_dashboard();
    ui.show_logged_out();
}

/// Startup: show the dashboard straight away if a session was left behind
pub fn restore_session<F: Frontend>(state: &mut AppState, ui: &mut F) {
    let restored = state.restore_session().map(|u| u.map(str::to_string));
    match restored {
        Ok(Some(username)) => {
            ui.show_logged_in(&username);
            notes::refresh(state, ui);
        }
        Ok(None) => ui.show_logged_out(),
        Err(e) => {
            tracing::warn!(error = %e, "Could not restore session");
            ui.show_logged_out();
        }
    }
}

pub fn whoami<F: Frontend>(state: &AppState, ui: &mut F) {
    match state.current_username() {
        Some(username) => ui.show_status(&format!("Logged in as {}", username)),
        None => ui.show_status("Not logged in"),
    }
}

pub fn toggle_theme<F: Frontend>(state: &AppState, ui: &mut F) {
    match state.accounts().toggle_theme() {
        Ok(theme) => ui.show_theme(theme),
        Err(e) => ui.show_status(&e.to_string()),
    }
}

pub fn show_theme<F: Frontend>(state: &AppState, ui: &mut F) {
    match state.accounts().current_theme() {
        Ok(theme) => ui.show_theme(theme),
        Err(e) => ui.show_status(&e.to_string()),
    }
}
