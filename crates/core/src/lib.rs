//! Notes Core Library
//!
//! Accounts, sessions and per-user notes persisted in a local key-value
//! store.

pub mod config;
pub mod directory;
pub mod error;
pub mod invariants;
pub mod models;
pub mod notes;
pub mod password;
pub mod storage;
pub mod validation;

pub use config::{AccountPolicy, AppConfig};
pub use directory::AccountDirectory;
pub use error::{Error, Result};
pub use models::*;
pub use notes::{filter_notes, sort_notes, NoteStore};
pub use storage::{Database, KeyValueStore, StoreKey};
