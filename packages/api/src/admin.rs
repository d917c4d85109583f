//! Admin endpoints. The server rejects these for non-admin tokens.

use reqwest::Method;
use store::{AdminStats, Note};

use crate::client::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    /// `GET /admin/stats`
    pub async fn admin_stats(&self) -> Result<AdminStats, ApiError> {
        self.send(self.request(Method::GET, "/admin/stats")).await
    }

    /// `GET /admin/notes`
    pub async fn admin_notes(&self) -> Result<Vec<Note>, ApiError> {
        self.send(self.request(Method::GET, "/admin/notes")).await
    }

    /// `DELETE /admin/notes/:id`
    pub async fn admin_delete_note(&self, id: &str) -> Result<(), ApiError> {
        self.send_empty(self.request(Method::DELETE, &format!("/admin/notes/{id}")))
            .await
    }
}
