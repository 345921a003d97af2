use std::path::Path;

use aws_config::{BehaviorVersion, Region};
use aws_credential_types::Credentials;
use aws_sdk_s3::{
    primitives::ByteStream,
    types::{BucketCannedAcl, ErrorDocument, IndexDocument, WebsiteConfiguration},
    Client,
};

use crate::config::Config;
use crate::error::{Error, Result};

/// Thin adapter over the S3 API, scoped to the configured bucket.
///
/// Calls are sequential and unretried; callers decide whether a failure
/// is fatal or a per-item warning.
#[derive(Clone)]
pub struct S3Client {
    client: Client,
    bucket: String,
}

impl S3Client {
    /// Builds a client from static credentials and a custom endpoint.
    pub async fn connect(config: &Config) -> Result<Self> {
        let credentials = Credentials::new(
            config.aws_access_key_id.clone(),
            config.aws_secret_access_key.clone(),
            None,
            None,
            "cloudphoto-config",
        );

        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .credentials_provider(credentials)
            .region(Region::new(config.region.clone()))
            .endpoint_url(&config.endpoint_url)
            .load()
            .await;

        // S3-compatible endpoints need path-style addressing
        let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
            .force_path_style(true)
            .build();

        Ok(Self {
            client: Client::from_conf(s3_config),
            bucket: config.bucket.clone(),
        })
    }

    /// All object keys in the bucket, in the store's lexicographic order.
    pub async fn list_all_keys(&self) -> Result<Vec<String>> {
        self.list_keys(None).await
    }

    /// Object keys starting with the given prefix.
    pub async fn list_keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>> {
        self.list_keys(Some(prefix.to_string())).await
    }

    async fn list_keys(&self, prefix: Option<String>) -> Result<Vec<String>> {
        tracing::debug!("S3 LIST: bucket={}, prefix={:?}", self.bucket, prefix);

        let mut pages = self
            .client
            .list_objects_v2()
            .bucket(&self.bucket)
            .set_prefix(prefix)
            .into_paginator()
            .send();

        let mut keys = Vec::new();
        while let Some(page) = pages.next().await {
            let page = page.map_err(Error::storage)?;
            for object in page.contents() {
                if let Some(key) = object.key() {
                    keys.push(key.to_string());
                }
            }
        }

        tracing::debug!("S3 LIST success: {} keys", keys.len());
        Ok(keys)
    }

    /// Uploads a local file, overwriting the key if it exists.
    pub async fn upload_file(&self, local_path: &Path, key: &str) -> Result<()> {
        tracing::debug!(
            "S3 PUT: bucket={}, key={}, local_path={:?}",
            self.bucket,
            key,
            local_path
        );

        let body = ByteStream::from_path(local_path)
            .await
            .map_err(Error::storage)?;

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(body)
            .content_type(Self::guess_content_type(key))
            .send()
            .await
            .map_err(Error::storage)?;

        tracing::debug!("S3 PUT success: key={}", key);
        Ok(())
    }

    /// Uploads an in-memory body (used for generated HTML pages).
    pub async fn upload_bytes(&self, data: Vec<u8>, key: &str, content_type: &str) -> Result<()> {
        tracing::debug!(
            "S3 PUT (bytes): bucket={}, key={}, size={} bytes",
            self.bucket,
            key,
            data.len()
        );

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(data))
            .content_type(content_type)
            .send()
            .await
            .map_err(Error::storage)?;

        tracing::debug!("S3 PUT (bytes) success: key={}", key);
        Ok(())
    }

    /// Downloads an object to a local path.
    pub async fn download_to_file(&self, key: &str, local_path: &Path) -> Result<()> {
        tracing::debug!(
            "S3 GET: bucket={}, key={}, local_path={:?}",
            self.bucket,
            key,
            local_path
        );

        let response = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| Error::download(key, e))?;

        let data = response
            .body
            .collect()
            .await
            .map_err(|e| Error::download(key, e))?;

        tokio::fs::write(local_path, data.into_bytes())
            .await
            .map_err(|e| Error::download(key, e))?;

        tracing::debug!("S3 GET success: key={}", key);
        Ok(())
    }

    pub async fn delete_object(&self, key: &str) -> Result<()> {
        tracing::debug!("S3 DELETE: bucket={}, key={}", self.bucket, key);

        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(Error::storage)?;

        Ok(())
    }

    /// Whether an object exists at the exact key.
    pub async fn object_exists(&self, key: &str) -> Result<bool> {
        match self
            .client
            .head_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
        {
            Ok(_) => Ok(true),
            Err(_) => Ok(false),
        }
    }

    /// Creates the configured bucket unless it already exists among the
    /// caller's buckets.
    pub async fn ensure_bucket(&self) -> Result<()> {
        let existing = self
            .client
            .list_buckets()
            .send()
            .await
            .map_err(Error::storage)?;

        let already_there = existing
            .buckets()
            .iter()
            .any(|b| b.name() == Some(self.bucket.as_str()));

        if already_there {
            tracing::debug!("bucket '{}' already exists", self.bucket);
            return Ok(());
        }

        tracing::info!("creating bucket '{}'", self.bucket);
        self.client
            .create_bucket()
            .bucket(&self.bucket)
            .send()
            .await
            .map_err(Error::storage)?;

        Ok(())
    }

    /// Applies the canned `public-read` ACL to the bucket.
    pub async fn make_public_readable(&self) -> Result<()> {
        tracing::debug!("S3 PUT ACL: bucket={}, acl=public-read", self.bucket);

        self.client
            .put_bucket_acl()
            .bucket(&self.bucket)
            .acl(BucketCannedAcl::PublicRead)
            .send()
            .await
            .map_err(Error::storage)?;

        Ok(())
    }

    /// Turns on static website hosting with the given documents.
    pub async fn enable_website(&self, index_document: &str, error_document: &str) -> Result<()> {
        tracing::debug!(
            "S3 PUT website: bucket={}, index={}, error={}",
            self.bucket,
            index_document,
            error_document
        );

        let website = WebsiteConfiguration::builder()
            .index_document(
                IndexDocument::builder()
                    .suffix(index_document)
                    .build()
                    .map_err(Error::storage)?,
            )
            .error_document(
                ErrorDocument::builder()
                    .key(error_document)
                    .build()
                    .map_err(Error::storage)?,
            )
            .build();

        self.client
            .put_bucket_website()
            .bucket(&self.bucket)
            .website_configuration(website)
            .send()
            .await
            .map_err(Error::storage)?;

        Ok(())
    }

    fn guess_content_type(key: &str) -> &'static str {
        let lower = key.to_ascii_lowercase();
        if lower.ends_with(".jpg") || lower.ends_with(".jpeg") {
            "image/jpeg"
        } else if lower.ends_with(".html") {
            "text/html"
        } else {
            "application/octet-stream"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_covers_photos_and_pages() {
        assert_eq!(S3Client::guess_content_type("a/b.jpg"), "image/jpeg");
        assert_eq!(S3Client::guess_content_type("a/B.JPEG"), "image/jpeg");
        assert_eq!(S3Client::guess_content_type("index.html"), "text/html");
        assert_eq!(
            S3Client::guess_content_type("notes.txt"),
            "application/octet-stream"
        );
    }
}
