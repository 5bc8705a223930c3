use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Game record as persisted by every storage backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameEntity {
    /// Identifier assigned by the store at creation time.
    pub id: Uuid,
    /// Title of the game.
    pub title: String,
    /// Free-form genre label.
    pub genre: Option<String>,
    /// Free-form release date, never parsed.
    pub release_date: Option<String>,
}

/// Fields supplied when inserting a new game; the store assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGameEntity {
    /// Title of the game.
    pub title: String,
    /// Free-form genre label.
    pub genre: Option<String>,
    /// Free-form release date.
    pub release_date: Option<String>,
}

impl NewGameEntity {
    /// Attach an identifier, producing the record to persist.
    pub fn with_id(self, id: Uuid) -> GameEntity {
        GameEntity {
            id,
            title: self.title,
            genre: self.genre,
            release_date: self.release_date,
        }
    }
}

/// Partial update merged into an existing game.
///
/// `None` leaves a field untouched. For the optional fields, `Some(None)`
/// clears the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameChanges {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement or cleared genre.
    pub genre: Option<Option<String>>,
    /// Replacement or cleared release date.
    pub release_date: Option<Option<String>>,
}

impl GameChanges {
    /// True when no field would be modified.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.genre.is_none() && self.release_date.is_none()
    }

    /// Merge the changes into `game` in place.
    pub fn apply_to(self, game: &mut GameEntity) {
        if let Some(title) = self.title {
            game.title = title;
        }
        if let Some(genre) = self.genre {
            game.genre = genre;
        }
        if let Some(release_date) = self.release_date {
            game.release_date = release_date;
        }
    }
}
