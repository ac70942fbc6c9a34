use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

/// Error payload returned by the backend for any failed request.
#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, PartialEq, Eq, thiserror::Error),
    error("{error}")
)]
pub struct Error {
    pub error: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct GeocodeRequest {
    pub address: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct GeocodeResponse {
    pub lat: f64,
    pub lon: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
pub struct LikeStatus {
    pub likes_count: u64,
    pub liked: bool,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Comment {
    pub id           : String,
    pub post_id      : String,
    pub text         : String,
    pub created_at   : String,
    pub author_nick  : String,
    // Empty when the author never uploaded an avatar.
    pub author_image : String,
    pub can_delete   : bool,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewComment {
    pub text: String,
}

/// The freshly created comment together with the new total of the post.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct CreatedComment {
    pub id             : String,
    pub post_id        : String,
    pub text           : String,
    pub created_at     : String,
    pub author_nick    : String,
    pub author_image   : String,
    pub can_delete     : bool,
    pub comments_count : u64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
pub struct CommentDeleted {
    pub success: bool,
}

impl From<CreatedComment> for Comment {
    fn from(from: CreatedComment) -> Self {
        let CreatedComment {
            id,
            post_id,
            text,
            created_at,
            author_nick,
            author_image,
            can_delete,
            comments_count: _,
        } = from;
        Self {
            id,
            post_id,
            text,
            created_at,
            author_nick,
            author_image,
            can_delete,
        }
    }
}
