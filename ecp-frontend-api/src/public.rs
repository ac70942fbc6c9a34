use ecp_boundary::{
    Comment, CommentDeleted, CreatedComment, GeocodeRequest, GeocodeResponse, LikeStatus,
    NewComment,
};

use crate::{into_json, Error, Result};

/// Public Ecoponto backend API
#[derive(Debug, Clone)]
pub struct PublicApi {
    url: String,
    client: reqwest::Client,
}

impl PublicApi {
    #[must_use]
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }

    pub async fn geocode(&self, address: &str) -> Result<GeocodeResponse> {
        let url = format!("{}/geocode", self.url);
        let request = GeocodeRequest {
            address: address.to_owned(),
        };
        let response = self.client.post(&url).json(&request).send().await?;
        into_json(response).await
    }

    pub async fn toggle_like(&self, post_id: &str) -> Result<LikeStatus> {
        let url = format!("{}/posts/like/{post_id}", self.url);
        let response = self.client.post(&url).send().await?;
        into_json(response).await
    }

    pub async fn comments(&self, post_id: &str) -> Result<Vec<Comment>> {
        let url = format!("{}/posts/{post_id}/comments", self.url);
        let response = self.client.get(&url).send().await?;
        into_json(response).await
    }

    pub async fn add_comment(&self, post_id: &str, text: String) -> Result<CreatedComment> {
        let url = format!("{}/posts/{post_id}/comment", self.url);
        let response = self
            .client
            .post(&url)
            .json(&NewComment { text })
            .send()
            .await?;
        into_json(response).await
    }

    pub async fn delete_comment(&self, comment_id: &str) -> Result<()> {
        let url = format!("{}/posts/comment/{comment_id}/delete", self.url);
        let response = self.client.delete(&url).send().await?;
        let deleted: CommentDeleted = into_json(response).await?;
        if deleted.success {
            Ok(())
        } else {
            Err(Error::Fetch(
                "Backend did not confirm the deletion".to_string(),
            ))
        }
    }
}
