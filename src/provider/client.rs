// SPDX-License-Identifier: MPL-2.0
//! REST client for the photo API.
//!
//! Requests carry the `Client-ID` authorization header. Page reads go
//! through a small TTL'd LRU cache keyed by (query, page) so that scrolling
//! back and forth, or re-submitting a recent search, does not hammer the
//! rate-limited upstream. Staleness inside the TTL window is acceptable.

use super::{Photo, SearchEnvelope};
use crate::error::{Error, Result};
use futures_util::StreamExt;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::path::Path;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tokio::io::AsyncWriteExt;

/// How long a cached page stays valid. Mirrors the upstream cache interval.
const PAGE_CACHE_TTL: Duration = Duration::from_secs(3600);

/// Maximum number of cached pages before the least recently used is evicted.
const PAGE_CACHE_CAPACITY: usize = 64;

const USER_AGENT: &str = concat!("IcedGallery/", env!("CARGO_PKG_VERSION"));

/// Process-wide provider configuration, resolved once at startup and
/// read-only thereafter.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub base_url: String,
    pub access_key: Option<String>,
    pub page_size: u32,
}

/// Cache key for one page read. The empty query is the popular listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct PageKey {
    query: String,
    page: u32,
}

struct CachedPage {
    photos: Vec<Photo>,
    fetched_at: Instant,
}

impl CachedPage {
    fn is_fresh(&self, ttl: Duration) -> bool {
        self.fetched_at.elapsed() < ttl
    }
}

pub struct ProviderClient {
    http: reqwest::Client,
    config: ProviderConfig,
    cache: Mutex<LruCache<PageKey, CachedPage>>,
}

impl ProviderClient {
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;

        let capacity = NonZeroUsize::new(PAGE_CACHE_CAPACITY).expect("nonzero cache capacity");

        Ok(Self {
            http,
            config,
            cache: Mutex::new(LruCache::new(capacity)),
        })
    }

    pub fn page_size(&self) -> u32 {
        self.config.page_size
    }

    /// Fetches one page of the popular listing.
    pub async fn list_popular(&self, page: u32) -> Result<Vec<Photo>> {
        self.fetch_page(None, page).await
    }

    /// Fetches one page of free-text search results.
    pub async fn search_by_text(&self, query: &str, page: u32) -> Result<Vec<Photo>> {
        self.fetch_page(Some(query), page).await
    }

    async fn fetch_page(&self, query: Option<&str>, page: u32) -> Result<Vec<Photo>> {
        let key = PageKey {
            query: query.unwrap_or_default().to_string(),
            page,
        };

        if let Some(photos) = self.cached(&key) {
            return Ok(photos);
        }

        let photos = match query {
            None => {
                let url = format!("{}/photos", self.config.base_url);
                let response = self
                    .request(&url)
                    .query(&[
                        ("page", page.to_string()),
                        ("per_page", self.config.page_size.to_string()),
                        ("order_by", "popular".to_string()),
                    ])
                    .send()
                    .await?;
                Self::check_status(&response)?;
                response.json::<Vec<Photo>>().await?
            }
            Some(query) => {
                let url = format!("{}/search/photos", self.config.base_url);
                let response = self
                    .request(&url)
                    .query(&[
                        ("query", query.to_string()),
                        ("page", page.to_string()),
                        ("per_page", self.config.page_size.to_string()),
                        ("order_by", "relevant".to_string()),
                    ])
                    .send()
                    .await?;
                Self::check_status(&response)?;
                response.json::<SearchEnvelope>().await?.results
            }
        };

        self.store(key, &photos);
        Ok(photos)
    }

    /// Fetches raw image bytes (thumbnails, the modal image).
    pub async fn fetch_image(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.http.get(url).send().await?;
        Self::check_status(&response)?;
        Ok(response.bytes().await?.to_vec())
    }

    /// Streams the file at `url` to `dest`, chunk by chunk, creating parent
    /// directories as needed.
    pub async fn download(&self, url: &str, dest: &Path) -> Result<()> {
        let response = self.http.get(url).send().await?;
        Self::check_status(&response)?;

        if let Some(parent) = dest.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let mut file = tokio::fs::File::create(dest).await?;

        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| Error::Http(e.to_string()))?;
            file.write_all(&chunk).await?;
        }
        file.flush().await?;

        Ok(())
    }

    fn request(&self, url: &str) -> reqwest::RequestBuilder {
        let mut builder = self.http.get(url);
        if let Some(key) = &self.config.access_key {
            builder = builder.header("Authorization", format!("Client-ID {key}"));
        }
        builder
    }

    fn check_status(response: &reqwest::Response) -> Result<()> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Error::Api(status.as_u16()))
        }
    }

    fn cached(&self, key: &PageKey) -> Option<Vec<Photo>> {
        let mut cache = self.cache.lock().expect("page cache lock poisoned");
        match cache.get(key) {
            Some(entry) if entry.is_fresh(PAGE_CACHE_TTL) => Some(entry.photos.clone()),
            Some(_) => {
                cache.pop(key);
                None
            }
            None => None,
        }
    }

    fn store(&self, key: PageKey, photos: &[Photo]) {
        let mut cache = self.cache.lock().expect("page cache lock poisoned");
        cache.put(
            key,
            CachedPage {
                photos: photos.to_vec(),
                fetched_at: Instant::now(),
            },
        );
    }
}
