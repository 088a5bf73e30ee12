//! Application State
//!
//! Everything the handlers share: the catalog, the account store, the
//! order log, the token service and the located assets directory.

use crate::auth::jwt::JwtService;
use crate::auth::state::AccountStore;
use crate::catalog::{Catalog, CatalogError};
use crate::config::Config;
use crate::order::state::OrderLog;
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};
use tracing::{info, warn};

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub catalog: Catalog,

    /// Registered users and their point balances
    pub accounts: AccountStore,

    /// In-memory order history
    pub orders: OrderLog,

    pub jwt: JwtService,

    /// Balance a session starts with and returns to on reset
    pub default_points: u64,

    /// Allowed CORS origin; any origin when unset
    pub cors_origin: Option<String>,

    /// Path to the directory containing static assets (product images)
    pub assets_dir: PathBuf,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_catalog(&Config::default(), Catalog::travel_default())
    }
}

impl AppState {
    /// Builds the state from configuration, loading the catalog file if one
    /// is configured.
    pub fn from_config(config: &Config) -> Result<Self, CatalogError> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::load(path)?,
            None => {
                info!("CATALOG_PATH not set, using built-in travel catalog");
                Catalog::travel_default()
            }
        };

        let state = Self::with_catalog(config, catalog);

        if let Some(demo) = &config.demo_account {
            match state.accounts.register(&demo.username, &demo.password) {
                Ok(_) => info!("Seeded demo account {:?}", demo.username),
                Err(e) => warn!("Failed to seed demo account: {e}"),
            }
        }

        Ok(state)
    }

    pub fn with_catalog(config: &Config, catalog: Catalog) -> Self {
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let assets_dir = Self::locate_assets_directory(&current_dir);

        info!("Using assets directory: {:?}", assets_dir);

        Self {
            catalog,
            accounts: AccountStore::new(config.default_points),
            orders: OrderLog::new(),
            jwt: JwtService::new(config.jwt.clone()),
            default_points: config.default_points,
            cors_origin: config.cors_origin.clone(),
            assets_dir,
        }
    }

    /// Attempts to locate the assets directory using a multi-step strategy
    fn locate_assets_directory(current_dir: &Path) -> PathBuf {
        // 1. ./assets
        // 2. ../assets (if running from a subdir)
        // 3. Fallback to "assets" relative path

        if current_dir.join("assets").exists() {
            return current_dir.join("assets");
        }

        if let Some(parent) = current_dir.parent() {
            if parent.join("assets").exists() {
                return parent.join("assets");
            }
        }

        PathBuf::from("assets")
    }
}
