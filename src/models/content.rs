use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A catalog entry. Immutable by replacement: mutations go through the
/// store as a full-record rewrite, never as a partial patch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub id: Uuid,
    pub title: String,
    pub sub_title: String,
    pub description: String,
    pub image_url: String,
    pub duration: u32,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    /// Ordered tags. Membership is case-insensitive; storage order is
    /// insertion order of first appearance.
    pub genre_list: Vec<String>,
}

/// The complete field set of a content record minus the id.
///
/// Used both for creation (the store assigns the id) and for updates
/// (full replacement of every field, genres included).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentFields {
    pub title: String,
    pub sub_title: String,
    pub description: String,
    pub image_url: String,
    pub duration: u32,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub genre_list: Vec<String>,
}

impl Content {
    /// Builds the field set for a full-record update, carrying every
    /// current field but the given genre list.
    pub fn fields_with_genres(&self, genre_list: Vec<String>) -> ContentFields {
        ContentFields {
            title: self.title.clone(),
            sub_title: self.sub_title.clone(),
            description: self.description.clone(),
            image_url: self.image_url.clone(),
            duration: self.duration,
            start_time: self.start_time,
            end_time: self.end_time,
            genre_list,
        }
    }
}

impl ContentFields {
    /// Attaches an id, producing the full record.
    pub fn into_content(self, id: Uuid) -> Content {
        Content {
            id,
            title: self.title,
            sub_title: self.sub_title,
            description: self.description,
            image_url: self.image_url,
            duration: self.duration,
            start_time: self.start_time,
            end_time: self.end_time,
            genre_list: self.genre_list,
        }
    }
}
