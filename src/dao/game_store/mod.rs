pub mod memory;
#[cfg(feature = "mongo-store")]
pub mod mongodb;

use std::sync::Arc;

use futures::future::BoxFuture;
use tracing::info;
use uuid::Uuid;

use crate::config::{AppConfig, StorageBackend};
use crate::dao::models::{GameChanges, GameEntity, NewGameEntity};
use crate::dao::storage::StorageResult;

/// Abstraction over the single `games` collection.
pub trait GameStore: Send + Sync {
    /// Insert a new game and return it with its assigned identifier.
    fn create_game(&self, game: NewGameEntity) -> BoxFuture<'static, StorageResult<GameEntity>>;
    /// Return every stored game, in no particular order.
    fn list_games(&self) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>>;
    /// Merge `changes` into the game with `id`, returning the updated record or `None` when absent.
    fn update_game(
        &self,
        id: Uuid,
        changes: GameChanges,
    ) -> BoxFuture<'static, StorageResult<Option<GameEntity>>>;
    /// Remove the game with `id`, returning the removed record or `None` when absent.
    fn delete_game(&self, id: Uuid) -> BoxFuture<'static, StorageResult<Option<GameEntity>>>;
    /// Check that the backing database answers.
    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>>;
}

/// Build the store selected by `config`.
pub async fn connect(config: &AppConfig) -> StorageResult<Arc<dyn GameStore>> {
    match config.storage {
        StorageBackend::Memory => {
            info!("using in-memory game store");
            Ok(Arc::new(memory::MemoryGameStore::new()))
        }
        #[cfg(feature = "mongo-store")]
        StorageBackend::MongoDb => {
            let mongo_config =
                mongodb::MongoConfig::from_uri(&config.mongo_uri, Some(&config.mongo_db)).await?;
            let store = mongodb::MongoGameStore::connect(mongo_config).await?;
            info!(database = %config.mongo_db, "connected to MongoDB game store");
            Ok(Arc::new(store))
        }
        #[cfg(not(feature = "mongo-store"))]
        StorageBackend::MongoDb => Err(crate::dao::storage::StorageError::UnsupportedBackend {
            backend: "mongodb".into(),
        }),
    }
}
