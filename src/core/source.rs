/// Project data sources
///
/// A source makes one best-effort read of the project data file. No retries,
/// no caching, transport default timeouts.

use crate::content::{parse_projects, ProjectRecord};
use crate::error::{PortfolioError, Result};
use async_trait::async_trait;
use std::path::PathBuf;

/// Somewhere the project data file can be read from
#[async_trait]
pub trait ProjectSource: Send + Sync {
    /// Read and parse the data file once
    async fn fetch(&self) -> Result<Vec<ProjectRecord>>;

    /// Human-readable location, for logs
    fn describe(&self) -> String;
}

/// Reads the data file from a content host with a plain GET
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl ProjectSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<ProjectRecord>> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PortfolioError::HttpStatus(status.as_u16()));
        }

        let body = response.text().await?;
        parse_projects(&body)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Reads the data file from a local static site root
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ProjectSource for FileSource {
    async fn fetch(&self) -> Result<Vec<ProjectRecord>> {
        let body = tokio::fs::read_to_string(&self.path).await?;
        parse_projects(&body)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Pick a source for a URL or a filesystem path
pub fn source_for(location: &str) -> Box<dyn ProjectSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpSource::new(location))
    } else {
        Box::new(FileSource::new(location))
    }
}
