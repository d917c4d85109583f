//! Public note endpoints: feed, detail, upload/edit/delete, likes, favorites, comments.

use reqwest::Method;
use serde::Serialize;
use store::{Comment, FavoriteState, LikeState, Note, NoteFields, NotePage, NotesQuery};
use store::models::NoteListResponse;

use crate::client::{ApiClient, FileUpload};
use crate::error::ApiError;

/// Characters of a text file shown in the note preview.
pub const PREVIEW_CHARS: usize = 2000;

#[derive(Debug, Serialize)]
struct CommentRequest<'a> {
    text: &'a str,
}

impl ApiClient {
    /// `GET /notes` with the given filters.
    pub async fn list_notes(&self, query: &NotesQuery) -> Result<NotePage, ApiError> {
        let builder = self.request(Method::GET, "/notes").query(query);
        let response: NoteListResponse = self.send(builder).await?;
        Ok(response.into_page())
    }

    /// `GET /notes/:id`
    pub async fn get_note(&self, id: &str) -> Result<Note, ApiError> {
        self.send(self.request(Method::GET, &format!("/notes/{id}")))
            .await
    }

    /// `POST /notes/upload` as multipart form data.
    pub async fn upload_note(&self, fields: &NoteFields, file: FileUpload) -> Result<(), ApiError> {
        let form = Self::metadata_form(&fields.title, &fields.description, &fields.category, file)?;
        let builder = self.request(Method::POST, "/notes/upload").multipart(form);
        self.send_empty(builder).await
    }

    /// `PUT /notes/:id`, returns the updated note.
    pub async fn update_note(&self, id: &str, fields: &NoteFields) -> Result<Note, ApiError> {
        let builder = self
            .request(Method::PUT, &format!("/notes/{id}"))
            .json(fields);
        self.send(builder).await
    }

    /// `DELETE /notes/:id`
    pub async fn delete_note(&self, id: &str) -> Result<(), ApiError> {
        self.send_empty(self.request(Method::DELETE, &format!("/notes/{id}")))
            .await
    }

    /// `POST /notes/like/:id` toggles the like and returns the new state.
    pub async fn like_note(&self, id: &str) -> Result<LikeState, ApiError> {
        self.send(self.request(Method::POST, &format!("/notes/like/{id}")))
            .await
    }

    /// `POST /notes/favorite/:id` toggles the favorite and returns the new state.
    pub async fn favorite_note(&self, id: &str) -> Result<FavoriteState, ApiError> {
        self.send(self.request(Method::POST, &format!("/notes/favorite/{id}")))
            .await
    }

    /// `POST /notes/comment/:id`, returns the note's full comment list.
    pub async fn comment_on_note(&self, id: &str, text: &str) -> Result<Vec<Comment>, ApiError> {
        let builder = self
            .request(Method::POST, &format!("/notes/comment/{id}"))
            .json(&CommentRequest { text });
        self.send(builder).await
    }

    /// Download the start of a text attachment for the inline preview.
    pub async fn fetch_preview(&self, file_url: &str) -> Result<String, ApiError> {
        let url = self.config().build_file_url(file_url);
        let text = reqwest::get(url).await?.error_for_status()?.text().await?;
        Ok(truncate_chars(&text, PREVIEW_CHARS))
    }
}

/// First `max` characters of `text` (never splits a code point).
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("hello", 3), "hel");
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("", 2), "");
    }

    #[test]
    fn test_preview_limit() {
        let long = "a".repeat(PREVIEW_CHARS + 50);
        assert_eq!(truncate_chars(&long, PREVIEW_CHARS).len(), PREVIEW_CHARS);
    }

    #[test]
    fn test_comment_body() {
        let json = serde_json::to_value(CommentRequest { text: "Great notes" }).unwrap();
        assert_eq!(json, serde_json::json!({"text": "Great notes"}));
    }
}
