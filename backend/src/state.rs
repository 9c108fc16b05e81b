//! Shared state handed to every handler.

use std::sync::Arc;

use crate::{
    config::Config,
    database::{Database, MemStorage},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db: Database,
}

impl AppState {
    /// Seeds a fresh in-memory store with the catalogs `config` enables.
    pub fn new(config: Config) -> Self {
        let db: Database = Arc::new(MemStorage::seeded(&config.catalogs));
        Self {
            config: Arc::new(config),
            db,
        }
    }
}
