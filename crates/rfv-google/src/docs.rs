//! Document publishing via Google Docs and Drive.
//!
//! Publishing one recording is three calls: create the document, insert
//! the summary at the start of the body (skipped for an empty summary) and
//! grant `anyone` reader access so the returned link works without sign-in.

use async_trait::async_trait;
use rfv_settings::GoogleSettings;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info, instrument};

use crate::auth::ServiceAccountAuth;
use crate::check_status;
use crate::errors::{GoogleError, Result};

/// A document created for a recording.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublishedDocument {
    /// Google document ID.
    pub doc_id: String,
    /// Shareable edit URL.
    pub doc_url: String,
}

/// Creates a shared document from a title and optional summary.
#[async_trait]
pub trait DocumentPublisher: Send + Sync {
    /// Publish a document. Nothing is returned unless every step succeeded.
    async fn publish(&self, title: &str, summary: Option<&str>) -> Result<PublishedDocument>;
}

/// Shareable URL of a Google document.
pub fn document_url(doc_id: &str) -> String {
    format!("https://docs.google.com/document/d/{doc_id}/edit")
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreatedDocument {
    document_id: String,
}

/// [`DocumentPublisher`] backed by the Docs and Drive REST APIs.
#[derive(Debug)]
pub struct GoogleDocsPublisher {
    client: reqwest::Client,
    auth: ServiceAccountAuth,
    docs_base_url: String,
    drive_base_url: String,
}

impl GoogleDocsPublisher {
    /// Build a publisher. Credentials are not read until the first publish.
    pub fn new(client: reqwest::Client, settings: &GoogleSettings) -> Self {
        let auth = ServiceAccountAuth::new(
            client.clone(),
            settings.service_account_info.clone(),
            settings.service_account_file.clone(),
            settings.token_url.clone(),
        );
        Self {
            client,
            auth,
            docs_base_url: settings.docs_base_url.trim_end_matches('/').to_string(),
            drive_base_url: settings.drive_base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn create_document(&self, token: &str, title: &str) -> Result<String> {
        let response = self
            .client
            .post(format!("{}/v1/documents", self.docs_base_url))
            .bearer_auth(token)
            .json(&json!({ "title": title }))
            .send()
            .await?;
        let created: CreatedDocument = check_status(response, "create document")
            .await?
            .json()
            .await?;
        if created.document_id.is_empty() {
            return Err(GoogleError::InvalidResponse("empty documentId".into()));
        }
        Ok(created.document_id)
    }

    async fn insert_summary(&self, token: &str, doc_id: &str, summary: &str) -> Result<()> {
        let body = json!({
            "requests": [{
                "insertText": {
                    "location": { "index": 1 },
                    "text": summary,
                }
            }]
        });
        let response = self
            .client
            .post(format!("{}/v1/documents/{doc_id}:batchUpdate", self.docs_base_url))
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;
        let _ = check_status(response, "insert summary").await?;
        Ok(())
    }

    async fn share_publicly(&self, token: &str, doc_id: &str) -> Result<()> {
        let response = self
            .client
            .post(format!(
                "{}/drive/v3/files/{doc_id}/permissions",
                self.drive_base_url
            ))
            .query(&[("fields", "id")])
            .bearer_auth(token)
            .json(&json!({ "role": "reader", "type": "anyone" }))
            .send()
            .await?;
        let _ = check_status(response, "share document").await?;
        Ok(())
    }
}

#[async_trait]
impl DocumentPublisher for GoogleDocsPublisher {
    #[instrument(skip(self, summary))]
    async fn publish(&self, title: &str, summary: Option<&str>) -> Result<PublishedDocument> {
        let token = self.auth.access_token().await?;
        let doc_id = self.create_document(&token, title).await?;
        debug!(doc_id = %doc_id, "document created");

        if let Some(summary) = summary.filter(|s| !s.is_empty()) {
            self.insert_summary(&token, &doc_id, summary).await?;
        }
        self.share_publicly(&token, &doc_id).await?;

        let doc_url = document_url(&doc_id);
        info!(doc_id = %doc_id, "document published");
        Ok(PublishedDocument { doc_id, doc_url })
    }
}
