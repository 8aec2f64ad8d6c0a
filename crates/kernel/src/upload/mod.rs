//! Listing image uploads.
//!
//! Opaque collaborator per the service contract: `upload` returns a
//! public URL, `replace` uploads then best-effort deletes the previous
//! file. Failures surface to callers as generic internal errors.

mod local;

pub use local::LocalImageStorage;

use anyhow::Result;
use async_trait::async_trait;

/// Image storage backend.
#[async_trait]
pub trait ImageStorage: Send + Sync {
    /// Store an image, resized to fit within `max_width` x `max_height`,
    /// and return its public URL.
    async fn upload(&self, data: &[u8], max_width: u32, max_height: u32) -> Result<String>;

    /// Store a new image and remove the previously stored one.
    ///
    /// Deletion of the old file is best-effort; the new URL is returned
    /// even if cleanup fails.
    async fn replace(
        &self,
        data: &[u8],
        previous_url: &str,
        max_width: u32,
        max_height: u32,
    ) -> Result<String>;

    /// Remove a stored image by its public URL.
    async fn delete(&self, url: &str) -> Result<()>;
}
