#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use games_api::{
    config::{AppConfig, StorageBackend},
    dao::{
        game_store::{GameStore, memory::MemoryGameStore},
        models::NewGameEntity,
    },
    routes,
    state::AppState,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// Router plus the identifier of the game seeded before each test.
pub struct TestApp {
    pub router: Router,
    pub store: Arc<dyn GameStore>,
    pub seeded_id: String,
}

pub fn bioshock() -> NewGameEntity {
    NewGameEntity {
        title: "Bioshock".into(),
        genre: Some("Video game".into()),
        release_date: Some("August 2007".into()),
    }
}

/// Fresh in-memory app with the Bioshock record already stored.
pub async fn seeded_memory_app() -> TestApp {
    let config = AppConfig {
        storage: StorageBackend::Memory,
        ..AppConfig::default()
    };
    seeded_app(Arc::new(MemoryGameStore::new()), config).await
}

/// Seed `store` with the Bioshock record and build the router over it.
pub async fn seeded_app(store: Arc<dyn GameStore>, config: AppConfig) -> TestApp {
    let seeded = store
        .create_game(bioshock())
        .await
        .expect("seed test game");
    let router = routes::router(AppState::new(store.clone(), config));

    TestApp {
        router,
        store,
        seeded_id: seeded.id.to_string(),
    }
}

/// Remove every stored game.
pub async fn clear_games(store: &Arc<dyn GameStore>) {
    for game in store.list_games().await.expect("list games") {
        store.delete_game(game.id).await.expect("delete game");
    }
}

/// Send a request with an optional JSON body and decode the JSON response.
pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = router
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}
