//! Catalog sources for retrieving TLE text
//!
//! The pipeline only needs the raw catalog text for a URL. Where that text comes
//! from is behind [`CatalogSource`] so that runs can be made without network
//! access.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::DEFAULT_TIMEOUT_S;
use crate::tle::{locate_record, records, TleRecord};
use crate::Result;
use crate::TlePropError;

/// Something that can produce catalog text for a URL
pub trait CatalogSource {
    fn fetch(&self, url: &str) -> Result<String>;
}

impl<T: CatalogSource + ?Sized> CatalogSource for &T {
    fn fetch(&self, url: &str) -> Result<String> {
        (**self).fetch(url)
    }
}

impl<T: CatalogSource + ?Sized> CatalogSource for Box<T> {
    fn fetch(&self, url: &str) -> Result<String> {
        (**self).fetch(url)
    }
}

/// Catalog source performing a blocking HTTP GET per request
pub struct HttpCatalog {
    client: reqwest::blocking::Client,
}

impl HttpCatalog {
    /// Create an HTTP catalog with the default request timeout
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_S))
    }

    /// Create an HTTP catalog with a custom request timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                TlePropError::NetworkError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client })
    }
}

impl CatalogSource for HttpCatalog {
    fn fetch(&self, url: &str) -> Result<String> {
        log::info!("Fetching TLE catalog from {}", url);

        let response = self.client.get(url).send().map_err(|e| {
            TlePropError::NetworkError(format!("Failed to fetch {}: {}", url, e))
        })?;

        if !response.status().is_success() {
            return Err(TlePropError::NetworkError(format!(
                "Failed to fetch {}, status: {}",
                url,
                response.status()
            )));
        }

        let text = response.text().map_err(|e| {
            TlePropError::NetworkError(format!("Failed to read response from {}: {}", url, e))
        })?;

        log::debug!("Received {} bytes from {}", text.len(), url);
        Ok(text)
    }
}

/// Catalog source reading a local TLE file, whatever URL is requested
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for FileCatalog {
    fn fetch(&self, url: &str) -> Result<String> {
        log::info!(
            "Reading TLE catalog from {} in place of {}",
            self.path.display(),
            url
        );
        fs::read_to_string(&self.path).map_err(TlePropError::IoError)
    }
}

/// In-memory catalog source
///
/// Text registered for a specific URL takes precedence over the fallback text.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    by_url: HashMap<String, String>,
    fallback: Option<String>,
}

impl StaticCatalog {
    /// A catalog that returns `text` for any URL
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            by_url: HashMap::new(),
            fallback: Some(text.into()),
        }
    }

    /// Register catalog text for one URL
    pub fn with_url(mut self, url: impl Into<String>, text: impl Into<String>) -> Self {
        self.by_url.insert(url.into(), text.into());
        self
    }
}

impl CatalogSource for StaticCatalog {
    fn fetch(&self, url: &str) -> Result<String> {
        self.by_url
            .get(url)
            .or(self.fallback.as_ref())
            .cloned()
            .ok_or_else(|| TlePropError::NetworkError(format!("No catalog registered for {}", url)))
    }
}

/// Fetch the catalog at `url` and return the first record matching `satellite_name`
pub fn fetch_tle<C: CatalogSource + ?Sized>(
    satellite_name: &str,
    url: &str,
    source: &C,
) -> Result<TleRecord> {
    let text = source.fetch(url)?;
    log::debug!("Catalog {} holds {} records", url, records(&text).count());
    locate_record(satellite_name, &text)
}
