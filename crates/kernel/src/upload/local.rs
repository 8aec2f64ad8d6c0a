//! Local filesystem image storage.

use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use image::ImageFormat;
use tokio::fs;
use tracing::{debug, warn};
use uuid::Uuid;

use super::ImageStorage;

/// Image storage on the local filesystem under a configured directory.
pub struct LocalImageStorage {
    /// Directory files are written to.
    base_path: PathBuf,
    /// Public URL prefix for stored files.
    base_url: String,
}

impl LocalImageStorage {
    pub fn new(base_path: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            base_url: base_url.into(),
        }
    }

    /// Map a public URL back to the on-disk path.
    ///
    /// Rejects URLs outside our prefix and any path component that would
    /// escape the uploads directory.
    fn parse_url(&self, url: &str) -> Result<PathBuf> {
        let name = url
            .strip_prefix(&self.base_url)
            .map(|rest| rest.trim_start_matches('/'))
            .context("URL does not belong to this storage")?;

        for component in std::path::Path::new(name).components() {
            if !matches!(component, std::path::Component::Normal(_)) {
                anyhow::bail!("invalid storage URL path");
            }
        }

        Ok(self.base_path.join(name))
    }

    /// Decode, bound, and re-encode the image.
    ///
    /// Runs on a blocking thread: decode and resize are CPU-bound.
    async fn process(data: Vec<u8>, max_width: u32, max_height: u32) -> Result<(Vec<u8>, &'static str)> {
        let kind = infer::get(&data).context("could not determine file type")?;
        if kind.matcher_type() != infer::MatcherType::Image {
            anyhow::bail!("uploaded file is not an image (detected {})", kind.mime_type());
        }

        tokio::task::spawn_blocking(move || {
            let img = image::load_from_memory(&data).context("failed to decode image")?;

            let img = if img.width() > max_width || img.height() > max_height {
                img.resize(max_width, max_height, image::imageops::FilterType::Lanczos3)
            } else {
                img
            };

            let mut out = std::io::Cursor::new(Vec::new());
            img.write_to(&mut out, ImageFormat::Jpeg)
                .context("failed to encode image")?;
            Ok((out.into_inner(), "jpg"))
        })
        .await
        .context("image processing task failed")?
    }
}

#[async_trait]
impl ImageStorage for LocalImageStorage {
    async fn upload(&self, data: &[u8], max_width: u32, max_height: u32) -> Result<String> {
        let (encoded, ext) = Self::process(data.to_vec(), max_width, max_height).await?;

        let name = format!("{}.{ext}", Uuid::now_v7().simple());
        let path = self.base_path.join(&name);

        fs::create_dir_all(&self.base_path)
            .await
            .context("failed to create uploads directory")?;
        fs::write(&path, &encoded)
            .await
            .context("failed to write image file")?;

        debug!(path = ?path, size = encoded.len(), "image stored");
        Ok(format!("{}/{name}", self.base_url.trim_end_matches('/')))
    }

    async fn replace(
        &self,
        data: &[u8],
        previous_url: &str,
        max_width: u32,
        max_height: u32,
    ) -> Result<String> {
        let url = self.upload(data, max_width, max_height).await?;

        if let Err(e) = self.delete(previous_url).await {
            warn!(url = %previous_url, error = %e, "failed to remove replaced image");
        }

        Ok(url)
    }

    async fn delete(&self, url: &str) -> Result<()> {
        let path = self.parse_url(url)?;
        fs::remove_file(&path)
            .await
            .with_context(|| format!("failed to remove {}", path.display()))?;
        debug!(url = %url, "image removed");
        Ok(())
    }
}

impl std::fmt::Debug for LocalImageStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalImageStorage")
            .field("base_path", &self.base_path)
            .finish()
    }
}

#[cfg(test)]
// Tests are allowed to use unwrap/expect freely.
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn storage() -> LocalImageStorage {
        LocalImageStorage::new("/tmp/mandap-test-uploads", "/files")
    }

    #[test]
    fn parse_url_requires_our_prefix() {
        let s = storage();
        assert!(s.parse_url("/files/abc.jpg").is_ok());
        assert!(s.parse_url("/elsewhere/abc.jpg").is_err());
    }

    #[test]
    fn parse_url_rejects_traversal() {
        let s = storage();
        assert!(s.parse_url("/files/../etc/passwd").is_err());
        assert!(s.parse_url("/files/a/../../b.jpg").is_err());
    }

    #[tokio::test]
    async fn non_image_payload_is_rejected() {
        let err = LocalImageStorage::process(b"%PDF-1.4 not an image".to_vec(), 100, 100)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("not an image") || err.to_string().contains("file type"));
    }
}
