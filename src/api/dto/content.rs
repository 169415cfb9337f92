//! Content-related DTOs for API requests and responses.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::models::{Content, ContentFields};

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for creating or updating a content record.
///
/// Carries the complete field set minus the id; updates are full-record
/// replacements, never partial patches.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContentRequest {
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    #[schema(min_length = 1)]
    pub title: String,
    pub sub_title: String,
    pub description: String,
    pub image_url: String,
    pub duration: u32,
    #[schema(value_type = String, format = DateTime)]
    pub start_time: Timestamp,
    #[schema(value_type = String, format = DateTime)]
    pub end_time: Timestamp,
    #[serde(default)]
    pub genre_list: Vec<String>,
}

impl ContentRequest {
    /// Converts the request DTO into the domain field set.
    pub fn into_fields(self) -> ContentFields {
        ContentFields {
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

/// Query parameters for content search.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct SearchParams {
    /// Case-sensitive substring match against the title
    pub title: Option<String>,
    /// Exact, as-stored genre membership test
    pub genre: Option<String>,
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Response body for content data.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContentResponse {
    pub id: Uuid,
    pub title: String,
    pub sub_title: String,
    pub description: String,
    pub image_url: String,
    pub duration: u32,
    #[schema(value_type = String, format = DateTime)]
    pub start_time: Timestamp,
    #[schema(value_type = String, format = DateTime)]
    pub end_time: Timestamp,
    pub genre_list: Vec<String>,
}

impl From<Content> for ContentResponse {
    fn from(content: Content) -> Self {
        Self {
            id: content.id,
            title: content.title,
            sub_title: content.sub_title,
            description: content.description,
            image_url: content.image_url,
            duration: content.duration,
            start_time: content.start_time,
            end_time: content.end_time,
            genre_list: content.genre_list,
        }
    }
}
