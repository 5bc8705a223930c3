//! Process-local [`GameStore`] backed by a concurrent map.

use std::sync::Arc;

use dashmap::DashMap;
use futures::future::BoxFuture;
use uuid::Uuid;

use crate::dao::{
    game_store::GameStore,
    models::{GameChanges, GameEntity, NewGameEntity},
    storage::StorageResult,
};

/// In-memory store used by the test harness and for running without a database.
///
/// Each entry is updated under its shard lock, so concurrent writes to the
/// same game are serialized field-merge by field-merge.
#[derive(Clone, Default)]
pub struct MemoryGameStore {
    games: Arc<DashMap<Uuid, GameEntity>>,
}

impl MemoryGameStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&self, game: NewGameEntity) -> GameEntity {
        let entity = game.with_id(Uuid::new_v4());
        self.games.insert(entity.id, entity.clone());
        entity
    }

    fn update(&self, id: Uuid, changes: GameChanges) -> Option<GameEntity> {
        let mut entry = self.games.get_mut(&id)?;
        changes.apply_to(entry.value_mut());
        Some(entry.value().clone())
    }
}

impl GameStore for MemoryGameStore {
    fn create_game(&self, game: NewGameEntity) -> BoxFuture<'static, StorageResult<GameEntity>> {
        let created = self.insert(game);
        Box::pin(async move { Ok(created) })
    }

    fn list_games(&self) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>> {
        let games = self
            .games
            .iter()
            .map(|entry| entry.value().clone())
            .collect::<Vec<_>>();
        Box::pin(async move { Ok(games) })
    }

    fn update_game(
        &self,
        id: Uuid,
        changes: GameChanges,
    ) -> BoxFuture<'static, StorageResult<Option<GameEntity>>> {
        let updated = self.update(id, changes);
        Box::pin(async move { Ok(updated) })
    }

    fn delete_game(&self, id: Uuid) -> BoxFuture<'static, StorageResult<Option<GameEntity>>> {
        let removed = self.games.remove(&id).map(|(_, game)| game);
        Box::pin(async move { Ok(removed) })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        Box::pin(async { Ok(()) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monopoly() -> NewGameEntity {
        NewGameEntity {
            title: "Monopoly".into(),
            genre: Some("Board game".into()),
            release_date: Some("1933".into()),
        }
    }

    #[tokio::test]
    async fn create_assigns_distinct_ids() {
        let store = MemoryGameStore::new();
        let first = store.create_game(monopoly()).await.unwrap();
        let second = store.create_game(monopoly()).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(store.list_games().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn update_merges_into_existing_record() {
        let store = MemoryGameStore::new();
        let created = store.create_game(monopoly()).await.unwrap();

        let changes = GameChanges {
            release_date: Some(Some("1935".into())),
            ..GameChanges::default()
        };
        let updated = store
            .update_game(created.id, changes)
            .await
            .unwrap()
            .expect("game exists");

        assert_eq!(updated.title, "Monopoly");
        assert_eq!(updated.release_date.as_deref(), Some("1935"));
        assert_eq!(store.list_games().await.unwrap(), vec![updated]);
    }

    #[tokio::test]
    async fn missing_ids_yield_none() {
        let store = MemoryGameStore::new();
        let id = Uuid::new_v4();

        assert!(
            store
                .update_game(id, GameChanges::default())
                .await
                .unwrap()
                .is_none()
        );
        assert!(store.delete_game(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_removes_only_once() {
        let store = MemoryGameStore::new();
        let created = store.create_game(monopoly()).await.unwrap();

        let removed = store.delete_game(created.id).await.unwrap();
        assert_eq!(removed.as_ref().map(|g| g.title.as_str()), Some("Monopoly"));
        assert!(store.delete_game(created.id).await.unwrap().is_none());
        assert!(store.list_games().await.unwrap().is_empty());
    }
}
