//! Application state management

use std::path::{Path, PathBuf};

use notes_core::{AccountDirectory, AppConfig, Database, NoteStore, Result, SortKey};

/// Search box and sort selector of the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardState {
    pub query: String,
    pub sort: SortKey,
}

impl DashboardState {
    fn new(sort: SortKey) -> Self {
        Self {
            query: String::new(),
            sort,
        }
    }
}

/// Main application state, owned by the console loop
pub struct AppState {
    db: Database,
    config: AppConfig,
    data_dir: PathBuf,
    /// Mirrors the persisted `currentUser` key
    session: Option<String>,
    pub dashboard: DashboardState,
}

impl AppState {
    /// Open (or create) the database under `default_data_dir`, unless the
    /// config points somewhere else
    pub fn new(config: AppConfig, default_data_dir: &Path) -> Result<Self> {
        let db_path = config.database_path(default_data_dir);
        let data_dir = db_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| default_data_dir.to_path_buf());

        std::fs::create_dir_all(&data_dir)?;

        let db = Database::open(&db_path)?;
        Ok(Self::with_database(db, config, data_dir))
    }

    #[cfg(test)]
    pub fn in_memory() -> Self {
        let db = Database::open_in_memory().expect("in-memory database");
        Self::with_database(db, AppConfig::default(), PathBuf::new())
    }

    fn with_database(db: Database, config: AppConfig, data_dir: PathBuf) -> Self {
        let dashboard = DashboardState::new(config.default_sort);
        Self {
            db,
            config,
            data_dir,
            session: None,
            dashboard,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn accounts(&self) -> AccountDirectory<'_, Database> {
        self.db.accounts()
    }

    pub fn notes_for(&self, username: &str) -> NoteStore<'_, Database> {
        self.db.notes(username)
    }

    pub fn current_username(&self) -> Option<&str> {
        self.session.as_deref()
    }

    pub fn set_current_user(&mut self, username: Option<String>) {
        self.session = username;
    }

    /// Pick up a session left behind by a previous run
    pub fn restore_session(&mut self) -> Result<Option<&str>> {
        self.session = self.db.accounts().current_session()?;
        Ok(self.session.as_deref())
    }

    /// Back to an empty search with the configured sort
    pub fn reset_dashboard(&mut self) {
        self.dashboard = DashboardState::new(self.config.default_sort);
    }
}
