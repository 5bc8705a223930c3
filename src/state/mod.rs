use std::sync::Arc;

use crate::{config::AppConfig, dao::game_store::GameStore};

/// Shared handle passed to every request handler.
pub type SharedState = Arc<AppState>;

/// Process-wide state: the store handle opened at startup and the loaded configuration.
pub struct AppState {
    game_store: Arc<dyn GameStore>,
    config: AppConfig,
}

impl AppState {
    /// Wrap the store and configuration in a [`SharedState`].
    pub fn new(game_store: Arc<dyn GameStore>, config: AppConfig) -> SharedState {
        Arc::new(Self { game_store, config })
    }

    /// The store serving the `games` collection.
    pub fn game_store(&self) -> &Arc<dyn GameStore> {
        &self.game_store
    }

    /// Configuration the process was started with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
