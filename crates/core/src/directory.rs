//! Account directory
//!
//! Username → credential mapping, the single current-session pointer, and
//! the global colour theme. Every mutation reads the whole `users` mapping,
//! changes it in memory and writes it back.

use tracing::{info, instrument, warn};

use crate::error::{Error, Result};
use crate::models::{Theme, UserDirectory, UserRecord};
use crate::password::{hash_password, verify_password};
use crate::storage::{get_json, set_json, KeyValueStore, StoreKey};

pub struct AccountDirectory<'a, S: KeyValueStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: KeyValueStore + ?Sized> AccountDirectory<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    fn load_users(&self) -> Result<UserDirectory> {
        Ok(get_json(self.store, &StoreKey::Users.as_key())?.unwrap_or_default())
    }

    /// Add an account. Fails with `DuplicateUsername` if the name is taken;
    /// the existing record is left untouched.
    #[instrument(skip(self, password))]
    pub fn register(&self, username: &str, password: &str) -> Result<()> {
        let mut users = self.load_users()?;
        if users.contains_key(username) {
            warn!("Registration rejected, username taken");
            return Err(Error::DuplicateUsername);
        }

        let record = UserRecord::new(hash_password(password)?);
        users.insert(username.to_string(), record);
        set_json(self.store, &StoreKey::Users.as_key(), &users)?;

        info!("User registered");
        Ok(())
    }

    /// Check credentials and point the session at `username`
    #[instrument(skip(self, password))]
    pub fn login(&self, username: &str, password: &str) -> Result<()> {
        let users = self.load_users()?;
        let record = users.get(username).ok_or(Error::UserNotFound)?;

        if !verify_password(password, &record.password_hash)? {
            warn!("Login rejected, wrong password");
            return Err(Error::IncorrectPassword);
        }

        self.store.set(&StoreKey::CurrentUser.as_key(), username)?;
        info!("User logged in");
        Ok(())
    }

    /// Clear the session pointer; a no-op when nobody is logged in
    pub fn logout(&self) -> Result<()> {
        self.store.remove(&StoreKey::CurrentUser.as_key())?;
        info!("Session cleared");
        Ok(())
    }

    /// Username of the active session, if any
    pub fn current_session(&self) -> Result<Option<String>> {
        self.store.get(&StoreKey::CurrentUser.as_key())
    }

    pub fn find_user(&self, username: &str) -> Result<Option<UserRecord>> {
        Ok(self.load_users()?.remove(username))
    }

    pub fn user_count(&self) -> Result<usize> {
        Ok(self.load_users()?.len())
    }

    pub fn current_theme(&self) -> Result<Theme> {
        Ok(self
            .store
            .get(&StoreKey::Theme.as_key())?
            .map(|raw| Theme::from_stored(&raw))
            .unwrap_or_default())
    }

    /// Flip between light and dark, returning the new theme
    pub fn toggle_theme(&self) -> Result<Theme> {
        let theme = self.current_theme()?.toggled();
        self.store.set(&StoreKey::Theme.as_key(), theme.as_str())?;
        Ok(theme)
    }
}
