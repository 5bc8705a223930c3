//! End-to-end scenarios against a real MongoDB server.
//!
//! Set `GAMES_API_TEST_MONGO_URI` (e.g. `mongodb://localhost:27017`) to run
//! them; each test uses its own database and drops it afterwards, even when
//! an assertion fails.

#![cfg(feature = "mongo-store")]

mod common;

use std::{future::Future, panic::AssertUnwindSafe, sync::Arc};

use axum::http::{Method, StatusCode};
use futures::FutureExt;
use games_api::{
    config::{AppConfig, StorageBackend},
    dao::game_store::{
        GameStore,
        mongodb::{MongoConfig, MongoGameStore},
    },
};
use mongodb::bson::{Document, doc};
use serde_json::json;

use common::{TestApp, clear_games, seeded_app, send};

const MONGO_URI_ENV: &str = "GAMES_API_TEST_MONGO_URI";

/// Run `scenario` against a fresh database, dropping it whatever the outcome.
async fn with_test_database<F, Fut>(scenario: F)
where
    F: FnOnce(String, MongoGameStore) -> Fut,
    Fut: Future<Output = ()>,
{
    let Ok(uri) = std::env::var(MONGO_URI_ENV) else {
        eprintln!("{MONGO_URI_ENV} not set; skipping MongoDB scenarios");
        return;
    };
    let database = format!("games_api_test_{}", uuid::Uuid::new_v4().simple());
    let config = MongoConfig::from_uri(&uri, Some(&database))
        .await
        .expect("valid test URI");
    let store = MongoGameStore::connect(config)
        .await
        .expect("connect to test MongoDB");

    let outcome = AssertUnwindSafe(scenario(uri, store.clone()))
        .catch_unwind()
        .await;

    store.drop_database().await.expect("drop test database");
    if let Err(panic) = outcome {
        std::panic::resume_unwind(panic);
    }
}

async fn seeded(store: &MongoGameStore) -> TestApp {
    let config = AppConfig {
        storage: StorageBackend::MongoDb,
        mongo_db: store.database_name().to_owned(),
        ..AppConfig::default()
    };
    let handle: Arc<dyn GameStore> = Arc::new(store.clone());
    seeded_app(handle, config).await
}

#[tokio::test]
async fn crud_scenarios_against_mongodb() {
    with_test_database(|_, store| async move {
        // create
        let app = seeded(&store).await;
        let (status, body) = send(
            &app.router,
            Method::POST,
            "/api/game/create",
            Some(json!({"title": "Monopoly", "genre": "Board game", "releaseDate": "1933"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "Monopoly");
        clear_games(&app.store).await;

        // list
        let app = seeded(&store).await;
        let (status, body) = send(&app.router, Method::GET, "/api/game/get", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_array());
        assert!(body[0].is_object());
        assert_eq!(body[0]["title"], "Bioshock");
        clear_games(&app.store).await;

        // update
        let app = seeded(&store).await;
        let (status, body) = send(
            &app.router,
            Method::PUT,
            "/api/game/update",
            Some(json!({"title": "Bioshock: The Collection", "id": app.seeded_id})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "Bioshock: The Collection");
        assert_eq!(body["genre"], "Video game");
        clear_games(&app.store).await;

        // destroy
        let app = seeded(&store).await;
        let uri = format!("/api/game/destroy/{}", app.seeded_id);
        let (status, body) = send(&app.router, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], "Bioshock was removed from the DB");
        let (status, _) = send(&app.router, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    })
    .await;
}

#[tokio::test]
async fn listing_skips_documents_with_object_id_keys() {
    with_test_database(|uri, store| async move {
        let app = seeded(&store).await;

        let client = mongodb::Client::with_uri_str(&uri)
            .await
            .expect("raw client");
        client
            .database(store.database_name())
            .collection::<Document>("games")
            .insert_one(doc! {"title": "Legacy", "genre": "Board game"})
            .await
            .expect("insert ObjectId-keyed document");

        let (status, body) = send(&app.router, Method::GET, "/api/game/get", None).await;
        assert_eq!(status, StatusCode::OK);
        let games = body.as_array().expect("array body");
        assert_eq!(games.len(), 1);
        assert_eq!(games[0]["title"], "Bioshock");
    })
    .await;
}

#[tokio::test]
async fn healthcheck_pings_mongodb() {
    with_test_database(|_, store| async move {
        let app = seeded(&store).await;
        let (status, body) = send(&app.router, Method::GET, "/healthcheck", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok", "storage": "mongodb"}));
    })
    .await;
}
