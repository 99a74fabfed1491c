//! View models: turn user actions into core calls and push the results to
//! the frontend

pub mod auth;
pub mod notes;
