use futures::{TryStreamExt, future::BoxFuture};
use mongodb::{Client, Collection, Database, bson::doc, options::ReturnDocument};
use tracing::debug;
use uuid::Uuid;

use super::{
    config::MongoConfig,
    connection::establish_connection,
    error::{MongoDaoError, MongoResult},
    models::{MongoGameDocument, doc_id, update_document, uuid_keyed},
};
use crate::dao::{
    game_store::GameStore,
    models::{GameChanges, GameEntity, NewGameEntity},
    storage::StorageResult,
};

const GAME_COLLECTION_NAME: &str = "games";

/// MongoDB-backed [`GameStore`] keeping games in the `games` collection.
#[derive(Clone)]
pub struct MongoGameStore {
    // Kept so the connection pool lives as long as the store.
    _client: Client,
    database: Database,
}

impl MongoGameStore {
    /// Connect and wait until the server answers.
    pub async fn connect(config: MongoConfig) -> MongoResult<Self> {
        let (client, database) =
            establish_connection(&config.options, &config.database_name).await?;
        Ok(Self {
            _client: client,
            database,
        })
    }

    /// Name of the database this store writes to.
    pub fn database_name(&self) -> &str {
        self.database.name()
    }

    /// Drop the whole database. Used to tear down test databases.
    pub async fn drop_database(&self) -> MongoResult<()> {
        self.database
            .drop()
            .await
            .map_err(|source| MongoDaoError::DropDatabase {
                database: self.database.name().to_owned(),
                source,
            })
    }

    fn collection(&self) -> Collection<MongoGameDocument> {
        self.database
            .collection::<MongoGameDocument>(GAME_COLLECTION_NAME)
    }

    async fn ping(&self) -> MongoResult<()> {
        self.database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|source| MongoDaoError::HealthPing { source })?;
        Ok(())
    }

    async fn insert_game(&self, game: NewGameEntity) -> MongoResult<GameEntity> {
        let entity = game.with_id(Uuid::new_v4());
        let id = entity.id;
        let document: MongoGameDocument = entity.clone().into();

        self.collection()
            .insert_one(&document)
            .await
            .map_err(|source| MongoDaoError::InsertGame { id, source })?;

        Ok(entity)
    }

    async fn list_all(&self) -> MongoResult<Vec<GameEntity>> {
        let documents: Vec<MongoGameDocument> = self
            .collection()
            .find(uuid_keyed())
            .await
            .map_err(|source| MongoDaoError::ListGames { source })?
            .try_collect()
            .await
            .map_err(|source| MongoDaoError::ListGames { source })?;

        Ok(documents.into_iter().map(Into::into).collect())
    }

    async fn update_by_id(&self, id: Uuid, changes: GameChanges) -> MongoResult<Option<GameEntity>> {
        let collection = self.collection();
        let update = update_document(changes);

        let document = if update.is_empty() {
            debug!(%id, "empty game update; returning current document");
            collection
                .find_one(doc_id(id))
                .await
                .map_err(|source| MongoDaoError::LoadGame { id, source })?
        } else {
            collection
                .find_one_and_update(doc_id(id), update)
                .return_document(ReturnDocument::After)
                .await
                .map_err(|source| MongoDaoError::UpdateGame { id, source })?
        };

        Ok(document.map(Into::into))
    }

    async fn delete_by_id(&self, id: Uuid) -> MongoResult<Option<GameEntity>> {
        let document = self
            .collection()
            .find_one_and_delete(doc_id(id))
            .await
            .map_err(|source| MongoDaoError::DeleteGame { id, source })?;

        Ok(document.map(Into::into))
    }
}

impl GameStore for MongoGameStore {
    fn create_game(&self, game: NewGameEntity) -> BoxFuture<'static, StorageResult<GameEntity>> {
        let store = self.clone();
        Box::pin(async move { store.insert_game(game).await.map_err(Into::into) })
    }

    fn list_games(&self) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.list_all().await.map_err(Into::into) })
    }

    fn update_game(
        &self,
        id: Uuid,
        changes: GameChanges,
    ) -> BoxFuture<'static, StorageResult<Option<GameEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.update_by_id(id, changes).await.map_err(Into::into) })
    }

    fn delete_game(&self, id: Uuid) -> BoxFuture<'static, StorageResult<Option<GameEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.delete_by_id(id).await.map_err(Into::into) })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.ping().await.map_err(Into::into) })
    }
}
