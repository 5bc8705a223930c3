use mongodb::bson::{Document, Uuid as BsonUuid, doc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dao::models::{GameChanges, GameEntity};

const TITLE_FIELD: &str = "title";
const GENRE_FIELD: &str = "genre";
const RELEASE_DATE_FIELD: &str = "releaseDate";

/// Shape of a game inside the `games` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoGameDocument {
    #[serde(rename = "_id")]
    id: BsonUuid,
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    genre: Option<String>,
    #[serde(
        rename = "releaseDate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    release_date: Option<String>,
}

impl From<GameEntity> for MongoGameDocument {
    fn from(value: GameEntity) -> Self {
        Self {
            id: bson_uuid(value.id),
            title: value.title,
            genre: value.genre,
            release_date: value.release_date,
        }
    }
}

impl From<MongoGameDocument> for GameEntity {
    fn from(value: MongoGameDocument) -> Self {
        Self {
            id: Uuid::from_bytes(value.id.bytes()),
            title: value.title,
            genre: value.genre,
            release_date: value.release_date,
        }
    }
}

fn bson_uuid(id: Uuid) -> BsonUuid {
    BsonUuid::from_bytes(id.into_bytes())
}

/// Filter selecting the document with the given identifier.
pub fn doc_id(id: Uuid) -> Document {
    doc! {"_id": bson_uuid(id)}
}

/// Filter matching documents keyed by a BSON UUID.
///
/// Documents written with another `_id` type (e.g. ObjectId) do not decode
/// into [`MongoGameDocument`] and are left out of listings.
pub fn uuid_keyed() -> Document {
    doc! {"_id": {"$type": "binData"}}
}

/// Translate a change set into `$set`/`$unset` operators.
///
/// Returns an empty document when nothing changes, which MongoDB would reject
/// as an update.
pub fn update_document(changes: GameChanges) -> Document {
    let mut set = Document::new();
    let mut unset = Document::new();

    if let Some(title) = changes.title {
        set.insert(TITLE_FIELD, title);
    }
    for (field, change) in [
        (GENRE_FIELD, changes.genre),
        (RELEASE_DATE_FIELD, changes.release_date),
    ] {
        match change {
            Some(Some(value)) => {
                set.insert(field, value);
            }
            Some(None) => {
                unset.insert(field, "");
            }
            None => {}
        }
    }

    let mut update = Document::new();
    if !set.is_empty() {
        update.insert("$set", set);
    }
    if !unset.is_empty() {
        update.insert("$unset", unset);
    }
    update
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_change_only_sets_title() {
        let update = update_document(GameChanges {
            title: Some("Bioshock: The Collection".into()),
            ..GameChanges::default()
        });

        assert_eq!(
            update,
            doc! {"$set": {"title": "Bioshock: The Collection"}}
        );
    }

    #[test]
    fn cleared_fields_are_unset() {
        let update = update_document(GameChanges {
            genre: Some(Some("Shooter".into())),
            release_date: Some(None),
            ..GameChanges::default()
        });

        assert_eq!(
            update,
            doc! {"$set": {"genre": "Shooter"}, "$unset": {"releaseDate": ""}}
        );
    }

    #[test]
    fn listing_filter_selects_binary_ids() {
        assert_eq!(uuid_keyed(), doc! {"_id": {"$type": "binData"}});
    }

    #[test]
    fn empty_changes_produce_empty_update() {
        assert!(update_document(GameChanges::default()).is_empty());
    }

    #[test]
    fn document_round_trips_identifier() {
        let entity = GameEntity {
            id: Uuid::new_v4(),
            title: "Monopoly".into(),
            genre: None,
            release_date: Some("1933".into()),
        };

        let document: MongoGameDocument = entity.clone().into();
        let back: GameEntity = document.into();
        assert_eq!(back, entity);
    }
}
