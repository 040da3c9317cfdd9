//! Object storage gateway
//!
//! Thin wrapper over the dataset bucket: one-level directory listing,
//! full key enumeration for structure reconstruction, and single atomic
//! puts for labeled samples. Errors are explicit `Result`s here; the
//! handlers catch, log, and degrade to benign defaults so no storage
//! failure reaches the UI.

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use capdash_common::{Error, Result};
use tracing::debug;

/// Storage operations the dashboard needs
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// One-level listing: common prefixes under the bucket root only.
    async fn list_top_level_dirs(&self, bucket: &str) -> Result<Vec<String>>;

    /// Enumerate every key in the bucket, paging through the full
    /// listing. No ordering guarantee.
    async fn list_all_keys(&self, bucket: &str) -> Result<Vec<String>>;

    /// Single synchronous upload. No retry, no partial-upload cleanup
    /// (each upload is one atomic put).
    async fn put(&self, bucket: &str, key: &str, bytes: Vec<u8>, content_type: &str)
        -> Result<()>;
}

/// S3-backed object store
pub struct S3ObjectStore {
    client: Client,
}

impl S3ObjectStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn list_top_level_dirs(&self, bucket: &str) -> Result<Vec<String>> {
        let mut pages = self
            .client
            .list_objects_v2()
            .bucket(bucket)
            .delimiter("/")
            .into_paginator()
            .send();

        let mut dirs = Vec::new();
        while let Some(page) = pages.next().await {
            let page = page.map_err(|e| Error::Storage(e.to_string()))?;
            for prefix in page.common_prefixes() {
                if let Some(p) = prefix.prefix() {
                    dirs.push(p.to_string());
                }
            }
        }
        debug!("Listed {} top-level directories in {}", dirs.len(), bucket);
        Ok(dirs)
    }

    async fn list_all_keys(&self, bucket: &str) -> Result<Vec<String>> {
        let mut pages = self
            .client
            .list_objects_v2()
            .bucket(bucket)
            .into_paginator()
            .send();

        let mut keys = Vec::new();
        while let Some(page) = pages.next().await {
            let page = page.map_err(|e| Error::Storage(e.to_string()))?;
            for object in page.contents() {
                if let Some(key) = object.key() {
                    keys.push(key.to_string());
                }
            }
        }
        debug!("Listed {} keys in {}", keys.len(), bucket);
        Ok(keys)
    }

    async fn put(
        &self,
        bucket: &str,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<()> {
        let size = bytes.len();
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| Error::Storage(e.to_string()))?;
        debug!("Uploaded {} bytes to {}/{}", size, bucket, key);
        Ok(())
    }
}
