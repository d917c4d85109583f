//! Vault document endpoints. Only reachable once the vault gate has been passed.

use reqwest::Method;
use store::{DocCategory, Document};

use crate::client::{ApiClient, FileUpload};
use crate::error::ApiError;

impl ApiClient {
    /// `GET /personal-docs`
    pub async fn list_documents(&self) -> Result<Vec<Document>, ApiError> {
        self.send(self.request(Method::GET, "/personal-docs")).await
    }

    /// `POST /personal-docs` as multipart form data, returns the created record.
    pub async fn upload_document(
        &self,
        title: &str,
        description: &str,
        category: DocCategory,
        file: FileUpload,
    ) -> Result<Document, ApiError> {
        let form = Self::metadata_form(title, description, category.label(), file)?;
        let builder = self.request(Method::POST, "/personal-docs").multipart(form);
        self.send(builder).await
    }

    /// `DELETE /personal-docs/:id`
    pub async fn delete_document(&self, id: &str) -> Result<(), ApiError> {
        self.send_empty(self.request(Method::DELETE, &format!("/personal-docs/{id}")))
            .await
    }
}
