use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get, post, put},
};

use super::extract::ValidJson;
use crate::{
    dto::game::{CreateGameRequest, DeleteGameResponse, GameResponse, UpdateGameRequest},
    error::AppError,
    services::game_service,
    state::SharedState,
};

/// CRUD routes for the games collection.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/api/game/create", post(create_game))
        .route("/api/game/get", get(list_games))
        .route("/api/game/update", put(update_game))
        .route("/api/game/destroy/{id}", delete(delete_game))
}

/// Persist a new game.
#[utoipa::path(
    post,
    path = "/api/game/create",
    tag = "game",
    request_body = CreateGameRequest,
    responses(
        (status = 200, description = "Game created", body = GameResponse),
        (status = 400, description = "Invalid payload"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn create_game(
    State(state): State<SharedState>,
    ValidJson(payload): ValidJson<CreateGameRequest>,
) -> Result<Json<GameResponse>, AppError> {
    Ok(Json(game_service::create_game(&state, payload).await?))
}

/// List every stored game.
#[utoipa::path(
    get,
    path = "/api/game/get",
    tag = "game",
    responses(
        (status = 200, description = "Stored games", body = [GameResponse]),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn list_games(
    State(state): State<SharedState>,
) -> Result<Json<Vec<GameResponse>>, AppError> {
    Ok(Json(game_service::list_games(&state).await?))
}

/// Merge the provided fields into an existing game.
#[utoipa::path(
    put,
    path = "/api/game/update",
    tag = "game",
    request_body = UpdateGameRequest,
    responses(
        (status = 200, description = "Game updated", body = GameResponse),
        (status = 400, description = "Invalid payload or identifier"),
        (status = 404, description = "Game not found"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn update_game(
    State(state): State<SharedState>,
    ValidJson(payload): ValidJson<UpdateGameRequest>,
) -> Result<Json<GameResponse>, AppError> {
    Ok(Json(game_service::update_game(&state, payload).await?))
}

/// Delete a game by its identifier.
#[utoipa::path(
    delete,
    path = "/api/game/destroy/{id}",
    tag = "game",
    params(("id" = String, Path, description = "Identifier of the game to delete")),
    responses(
        (status = 200, description = "Game deleted", body = DeleteGameResponse),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "Game not found"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn delete_game(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteGameResponse>, AppError> {
    Ok(Json(game_service::delete_game(&state, &id).await?))
}
