//! HTTP client for the storage service's REST API.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;
use url::Url;
use uuid::Uuid;

use crate::config::ServiceConfig;
use crate::error::{CoreError, CoreResult};
use crate::model::{FileFilters, StorageStatistics, StoredFile};
use crate::service::{FileService, StatisticsSource};

const FILES_PATH: &str = "files/";
const STATISTICS_PATH: &str = "files/statistics/";

/// The file list comes back either as a bare array or as a paginated page.
#[derive(Deserialize)]
#[serde(untagged)]
enum FileListBody {
    Plain(Vec<StoredFile>),
    Page { results: Vec<StoredFile> },
}

impl From<FileListBody> for Vec<StoredFile> {
    fn from(body: FileListBody) -> Self {
        match body {
            FileListBody::Plain(files) | FileListBody::Page { results: files } => files,
        }
    }
}

/// [`FileService`] backed by the service's JSON API.
#[derive(Debug, Clone)]
pub struct HttpFileService {
    client: Client,
    base_url: Url,
}

impl HttpFileService {
    /// Creates a client rooted at `base_url` (e.g. `http://host:8000/api`).
    ///
    /// # Errors
    ///
    /// - [`CoreError::InvalidInput`] if `base_url` is not an absolute URL.
    /// - [`CoreError::Http`] if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> CoreResult<Self> {
        let mut base = Url::parse(base_url).map_err(|_| CoreError::InvalidInput {
            field: "base_url",
            value: base_url.to_string(),
        })?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base,
        })
    }

    pub fn from_config(config: &ServiceConfig) -> CoreResult<Self> {
        Self::new(&config.base_url, config.request_timeout())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> CoreResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| CoreError::Http(format!("bad endpoint {path}: {e}")))
    }

    /// Sends `request`, turning any non-2xx status into [`CoreError::Http`].
    async fn send(request: RequestBuilder, label: &str) -> CoreResult<Response> {
        tracing::debug!("{label}");
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CoreError::Http(format!("{label} returned {status}")));
        }
        Ok(response)
    }

    async fn get_json<T>(&self, url: Url) -> CoreResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let label = format!("GET {url}");
        let response = Self::send(self.client.get(url), &label).await?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl StatisticsSource for HttpFileService {
    async fn fetch_statistics(&self) -> CoreResult<StorageStatistics> {
        let url = self.endpoint(STATISTICS_PATH)?;
        self.get_json(url).await
    }
}

#[async_trait]
impl FileService for HttpFileService {
    async fn list_files(&self, filters: &FileFilters) -> CoreResult<Vec<StoredFile>> {
        let mut url = self.endpoint(FILES_PATH)?;
        let query = filters.to_query_string();
        if !query.is_empty() {
            url.set_query(Some(&query));
        }
        let body: FileListBody = self.get_json(url).await?;
        Ok(body.into())
    }

    async fn upload_file(&self, path: &Path) -> CoreResult<StoredFile> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| CoreError::InvalidInput {
                field: "file",
                value: path.display().to_string(),
            })?;
        let bytes = tokio::fs::read(path).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CoreError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => CoreError::PermissionDenied(path.to_path_buf()),
            _ => CoreError::Io(e),
        })?;

        let mime = mime_guess::from_path(path).first_or_octet_stream();
        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(mime.essence_str())?;
        let form = Form::new().part("file", part);

        let url = self.endpoint(FILES_PATH)?;
        let label = format!("POST {url}");
        let response = Self::send(self.client.post(url).multipart(form), &label).await?;
        let stored: StoredFile = response.json().await?;

        match stored.duplicate_of {
            Some(original) if stored.is_duplicate => tracing::info!(
                file = %stored.original_filename,
                %original,
                "upload stored as duplicate"
            ),
            _ => tracing::info!(file = %stored.original_filename, id = %stored.id, "upload stored"),
        }
        Ok(stored)
    }

    async fn delete_file(&self, id: Uuid) -> CoreResult<()> {
        let url = self.endpoint(&format!("{FILES_PATH}{id}/"))?;
        let label = format!("DELETE {url}");
        Self::send(self.client.delete(url), &label).await?;
        tracing::info!(%id, "file deleted");
        Ok(())
    }
}
