use annai_core::{Document, DocumentLoader, LoaderError, Value};
use async_trait::async_trait;

use crate::client::DriveHttpClient;
use crate::types::{DriveFile, FileList};
use crate::DriveError;

const GOOGLE_DOC_MIME: &str = "application/vnd.google-apps.document";
const GOOGLE_APPS_PREFIX: &str = "application/vnd.google-apps";

/// Loads every readable document from one Drive folder. Non-recursive, like
/// the folder share it mirrors; trashed files are excluded in the query.
#[derive(Debug)]
pub struct GoogleDriveLoader {
    client: DriveHttpClient,
    folder_id: String,
}

impl GoogleDriveLoader {
    pub fn new(access_token: String, folder_id: String) -> Result<Self, DriveError> {
        if folder_id.trim().is_empty() {
            return Err(DriveError::Config("folder_id cannot be empty".to_string()));
        }
        Ok(Self {
            client: DriveHttpClient::new(access_token)?,
            folder_id,
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self, DriveError> {
        self.client.set_base_url(base_url.into())?;
        Ok(self)
    }

    async fn list_folder(&self) -> Result<Vec<DriveFile>, DriveError> {
        let query = format!("'{}' in parents and trashed = false", self.folder_id);
        let mut files = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut params = vec![
                ("q", query.as_str()),
                ("fields", "nextPageToken,files(id,name,mimeType)"),
            ];
            if let Some(token) = page_token.as_deref() {
                params.push(("pageToken", token));
            }

            let page: FileList = self.client.get_typed("/drive/v3/files", &params).await?;
            files.extend(page.files);

            match page.next_page_token {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        Ok(files)
    }

    async fn fetch_text(&self, file: &DriveFile) -> Result<Option<String>, DriveError> {
        if file.mime_type == GOOGLE_DOC_MIME {
            let path = format!("/drive/v3/files/{}/export", file.id);
            let text = self
                .client
                .get_text(&path, &[("mimeType", "text/plain")])
                .await?;
            return Ok(Some(text));
        }

        if file.mime_type.starts_with("text/") {
            let path = format!("/drive/v3/files/{}", file.id);
            let text = self.client.get_text(&path, &[("alt", "media")]).await?;
            return Ok(Some(text));
        }

        if file.mime_type.starts_with(GOOGLE_APPS_PREFIX) {
            tracing::debug!(file = %file.name, mime = %file.mime_type, "skipping non-document drive item");
        } else {
            tracing::debug!(file = %file.name, mime = %file.mime_type, "skipping binary drive file");
        }
        Ok(None)
    }
}

#[async_trait]
impl DocumentLoader for GoogleDriveLoader {
    async fn load(&self) -> Result<Vec<Document>, LoaderError> {
        let files = self.list_folder().await.map_err(LoaderError::from)?;
        tracing::info!(folder = %self.folder_id, files = files.len(), "listed drive folder");

        let mut docs = Vec::with_capacity(files.len());
        for file in &files {
            let Some(content) = self.fetch_text(file).await.map_err(LoaderError::from)? else {
                continue;
            };

            let mut doc = Document::new(file.id.clone(), content);
            doc.metadata
                .insert("source".to_string(), Value::String(file.id.clone()));
            doc.metadata
                .insert("title".to_string(), Value::String(file.name.clone()));
            docs.push(doc);
        }

        Ok(docs)
    }
}
