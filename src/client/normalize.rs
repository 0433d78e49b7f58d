use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use tracing::debug;

use super::ClassifaiClient;
use super::error::ClassifaiError;
use crate::types::content::{Content, ContentItem};

impl ClassifaiClient {
    /// Convert caller-supplied content into the wire content items.
    ///
    /// `Raw` items pass through untouched. Strings are classified in order:
    /// `http(s)://` prefix → download and base64-encode as an image; an
    /// existing local file → read and base64-encode as an image; anything
    /// else → literal text. Items are processed sequentially and the first
    /// failure aborts the whole call, so no request is sent on a bad fetch
    /// or an unreadable file.
    pub(crate) async fn normalize_content(
        &self,
        content: Content,
    ) -> Result<Vec<ContentItem>, ClassifaiError> {
        match content {
            Content::Single(item) => self.normalize_items(vec![item]).await,
            Content::Items(items) => self.normalize_items(items).await,
            Content::Raw(items) => Ok(items),
        }
    }

    async fn normalize_items(
        &self,
        items: Vec<String>,
    ) -> Result<Vec<ContentItem>, ClassifaiError> {
        let mut normalized = Vec::with_capacity(items.len());
        for item in items {
            normalized.push(self.normalize_item(item).await?);
        }
        Ok(normalized)
    }

    async fn normalize_item(&self, item: String) -> Result<ContentItem, ClassifaiError> {
        if item.starts_with("http://") || item.starts_with("https://") {
            let bytes = self.fetch_content(&item).await?;
            return Ok(ContentItem::image(BASE64.encode(bytes)));
        }

        let path = Path::new(&item);
        if path.is_file() {
            let bytes = std::fs::read(path).map_err(|source| ClassifaiError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
            return Ok(ContentItem::image(BASE64.encode(bytes)));
        }

        Ok(ContentItem::text(item))
    }

    /// Download content bytes from a URL. Uses the fetch timeout rather
    /// than the API timeout, and sends no API headers.
    async fn fetch_content(&self, url: &str) -> Result<Vec<u8>, ClassifaiError> {
        debug!("GET {url} (content download)");
        let response = self
            .http
            .get(url)
            .timeout(self.config.fetch_timeout)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }
}
