//! Data models for Notes

mod note;
mod preferences;
mod user;

pub use note::*;
pub use preferences::*;
pub use user::*;
