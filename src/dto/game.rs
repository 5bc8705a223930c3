use serde::{Deserialize, Serialize};
use serde_with::rust::double_option;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    dao::models::{GameChanges, GameEntity, NewGameEntity},
    dto::validation::validate_title,
};

/// Payload accepted by `POST /api/game/create`.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameRequest {
    #[validate(custom(function = validate_title))]
    pub title: String,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
}

impl From<CreateGameRequest> for NewGameEntity {
    fn from(value: CreateGameRequest) -> Self {
        Self {
            title: value.title,
            genre: value.genre,
            release_date: value.release_date,
        }
    }
}

/// Payload accepted by `PUT /api/game/update`.
///
/// Omitted fields are left untouched. `null` clears `genre` or `releaseDate`.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGameRequest {
    /// Identifier of the game to update.
    pub id: String,
    #[serde(default)]
    #[validate(custom(function = validate_title))]
    pub title: Option<String>,
    #[serde(default, with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub genre: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub release_date: Option<Option<String>>,
}

impl UpdateGameRequest {
    /// Split the payload into the raw identifier and the changes to merge.
    pub fn into_parts(self) -> (String, GameChanges) {
        let changes = GameChanges {
            title: self.title,
            genre: self.genre,
            release_date: self.release_date,
        };
        (self.id, changes)
    }
}

/// Game as returned by every game route.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameResponse {
    pub id: String,
    pub title: String,
    pub genre: Option<String>,
    pub release_date: Option<String>,
}

impl From<GameEntity> for GameResponse {
    fn from(value: GameEntity) -> Self {
        Self {
            id: value.id.to_string(),
            title: value.title,
            genre: value.genre,
            release_date: value.release_date,
        }
    }
}

/// Confirmation returned by `DELETE /api/game/destroy/{id}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteGameResponse {
    /// Human readable confirmation naming the removed game.
    pub success: String,
}

impl DeleteGameResponse {
    /// Confirmation for the removal of the game titled `title`.
    pub fn removed(title: &str) -> Self {
        Self {
            success: format!("{title} was removed from the DB"),
        }
    }
}
