//! Object storage client for listing imagery.
//!
//! Uploaded files live in public buckets; the console stores the public URL
//! in the listing's `image_url` column. Uploads overwrite silently, so
//! object names are made unique with a generated id.

use log::debug;
use tourdesk_core::errors::{Error, GatewayError, Result};
use uuid::Uuid;

use crate::config::GatewayConfig;

/// Path prefix of the storage endpoints, relative to the project base URL.
const STORAGE_PATH: &str = "/storage/v1";

/// Client for the hosted object storage.
#[derive(Debug, Clone)]
pub struct StorageClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl StorageClient {
    pub fn new(config: &GatewayConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                Error::Gateway(GatewayError::RequestFailed(format!(
                    "Failed to initialize HTTP client: {}",
                    e
                )))
            })?;

        Ok(Self {
            http,
            base_url: config.url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Uploads a file into a bucket and returns its public URL.
    pub async fn upload(
        &self,
        bucket: &str,
        object_path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String> {
        let url = format!(
            "{}{}/object/{}/{}",
            self.base_url,
            STORAGE_PATH,
            bucket,
            encode_object_path(object_path)
        );
        debug!("[Storage] POST {} ({} bytes)", url, bytes.len());

        let response = self
            .http
            .post(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("x-upsert", "true")
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await
            .map_err(|e| storage_err(format!("Upload request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| storage_err(format!("Failed to read storage response: {}", e)))?;
            return Err(storage_err(format!(
                "Upload of '{}' failed with HTTP {}: {}",
                object_path,
                status.as_u16(),
                body.chars().take(200).collect::<String>()
            )));
        }

        Ok(self.public_url(bucket, object_path))
    }

    /// The public download URL of an object in a public bucket.
    pub fn public_url(&self, bucket: &str, object_path: &str) -> String {
        format!(
            "{}{}/object/public/{}/{}",
            self.base_url,
            STORAGE_PATH,
            bucket,
            encode_object_path(object_path)
        )
    }
}

/// Builds a collision-free object path, keeping the original file extension.
pub fn unique_object_path(prefix: &str, file_name: &str) -> String {
    let id = Uuid::new_v4();
    let extension = std::path::Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    let prefix = prefix.trim_matches('/');
    match extension {
        Some(ext) if !ext.is_empty() => format!("{}/{}.{}", prefix, id, ext),
        _ => format!("{}/{}", prefix, id),
    }
}

fn encode_object_path(object_path: &str) -> String {
    object_path
        .trim_matches('/')
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

fn storage_err(message: String) -> Error {
    Error::Gateway(GatewayError::Storage(message))
}
