//! Business logic behind the `/api/game` routes. Each function performs a
//! single store operation and maps absent records to [`ServiceError::NotFound`].

use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    dao::models::GameChanges,
    dto::game::{CreateGameRequest, DeleteGameResponse, GameResponse, UpdateGameRequest},
    error::ServiceError,
    state::SharedState,
};

/// Persist a new game and return it with its assigned identifier.
pub async fn create_game(
    state: &SharedState,
    request: CreateGameRequest,
) -> Result<GameResponse, ServiceError> {
    let game = state.game_store().create_game(request.into()).await?;
    info!(id = %game.id, title = %game.title, "game created");
    Ok(game.into())
}

/// Return every stored game.
pub async fn list_games(state: &SharedState) -> Result<Vec<GameResponse>, ServiceError> {
    let games = state.game_store().list_games().await?;
    debug!(count = games.len(), "listed games");
    Ok(games.into_iter().map(Into::into).collect())
}

/// Merge the provided fields into the game named by `request.id`.
pub async fn update_game(
    state: &SharedState,
    request: UpdateGameRequest,
) -> Result<GameResponse, ServiceError> {
    let (raw_id, changes) = request.into_parts();
    let id = parse_game_id(&raw_id)?;
    update_game_by_id(state, id, changes).await
}

async fn update_game_by_id(
    state: &SharedState,
    id: Uuid,
    changes: GameChanges,
) -> Result<GameResponse, ServiceError> {
    let Some(game) = state.game_store().update_game(id, changes).await? else {
        debug!(%id, "update target not found");
        return Err(not_found(id));
    };
    info!(%id, "game updated");
    Ok(game.into())
}

/// Remove the game with identifier `raw_id` and confirm with its title.
pub async fn delete_game(
    state: &SharedState,
    raw_id: &str,
) -> Result<DeleteGameResponse, ServiceError> {
    let id = parse_game_id(raw_id)?;
    let Some(game) = state.game_store().delete_game(id).await? else {
        debug!(%id, "delete target not found");
        return Err(not_found(id));
    };
    info!(%id, title = %game.title, "game deleted");
    Ok(DeleteGameResponse::removed(&game.title))
}

fn parse_game_id(raw: &str) -> Result<Uuid, ServiceError> {
    Uuid::parse_str(raw.trim())
        .map_err(|_| ServiceError::InvalidInput(format!("invalid game id `{raw}`")))
}

fn not_found(id: Uuid) -> ServiceError {
    ServiceError::NotFound(format!("game `{id}` not found"))
}
