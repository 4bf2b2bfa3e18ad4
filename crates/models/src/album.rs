use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

/// A row of the `album` table.
///
/// `id` travels as a JSON string (`"id": "2"`) and is accepted back as
/// either a string or a number.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "album")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(with = "id_as_string")]
    pub id: i64,
    pub title: String,
    pub artist: String,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub type Album = Model;

/// Client input for creating an album. Any `id` in the body is ignored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewAlbum {
    pub title: String,
    pub artist: String,
    pub price: f64,
}

impl NewAlbum {
    pub fn new(title: impl Into<String>, artist: impl Into<String>, price: f64) -> Self {
        Self { title: title.into(), artist: artist.into(), price }
    }

    /// Active model with `id` left unset so the engine assigns it.
    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            title: Set(self.title),
            artist: Set(self.artist),
            price: Set(self.price),
            ..Default::default()
        }
    }
}

mod id_as_string {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(id: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(id)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(i64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(n),
            Raw::Text(s) => s.trim().parse::<i64>().map_err(de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn opera() -> Album {
        Album {
            id: 2,
            title: "A Night at the Opera".into(),
            artist: "Queen".into(),
            price: 21.99,
        }
    }

    #[test]
    fn id_serializes_as_string() {
        let value = serde_json::to_value(opera()).unwrap();
        assert_eq!(
            value,
            json!({"id": "2", "title": "A Night at the Opera", "artist": "Queen", "price": 21.99})
        );
    }

    #[test]
    fn id_deserializes_from_string_or_number() {
        let from_text: Album = serde_json::from_value(
            json!({"id": "2", "title": "A Night at the Opera", "artist": "Queen", "price": 21.99}),
        )
        .unwrap();
        let from_number: Album = serde_json::from_value(
            json!({"id": 2, "title": "A Night at the Opera", "artist": "Queen", "price": 21.99}),
        )
        .unwrap();
        assert_eq!(from_text, opera());
        assert_eq!(from_number, opera());
    }

    #[test]
    fn non_numeric_id_is_rejected() {
        let res: Result<Album, _> = serde_json::from_value(
            json!({"id": "two", "title": "t", "artist": "a", "price": 1.0}),
        );
        assert!(res.is_err());
    }

    #[test]
    fn new_album_ignores_client_id() {
        let input: NewAlbum = serde_json::from_value(
            json!({"id": "77", "title": "Giant Steps", "artist": "John Coltrane", "price": 63.99}),
        )
        .unwrap();
        assert_eq!(input, NewAlbum::new("Giant Steps", "John Coltrane", 63.99));
    }

    #[test]
    fn new_album_requires_every_field() {
        let res: Result<NewAlbum, _> = serde_json::from_value(json!({"title": "Jeru", "artist": "Gerry Mulligan"}));
        assert!(res.is_err());
        let res: Result<NewAlbum, _> =
            serde_json::from_value(json!({"title": "Jeru", "artist": "Gerry Mulligan", "price": "cheap"}));
        assert!(res.is_err());
    }

    #[test]
    fn active_model_leaves_id_unset() {
        let am = NewAlbum::new("Sarah Vaughan", "Sarah Vaughan", 34.98).into_active_model();
        assert!(am.id.is_not_set());
        assert_eq!(am.title, Set("Sarah Vaughan".to_string()));
    }
}
