// SPDX-License-Identifier: MPL-2.0
//! Unsplash-style photo provider: record schema and REST client.
//!
//! The provider exposes two paged reads (popular listing and free-text
//! search) plus raw image fetching and a streaming download. Photo records
//! are immutable once decoded; the feed owns them after a merge.

mod client;

pub use client::{ProviderClient, ProviderConfig};

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One photo record as returned by the API. Never mutated after decoding.
#[derive(Debug, Clone, Deserialize)]
pub struct Photo {
    pub id: String,
    pub urls: PhotoUrls,
    /// Descriptive text; the API omits it for many photos.
    #[serde(default)]
    pub alt_description: Option<String>,
    pub user: PhotoUser,
    pub likes: u64,
    pub created_at: DateTime<Utc>,
    pub width: u32,
    pub height: u32,
}

/// The size variants the API provides for every photo.
#[derive(Debug, Clone, Deserialize)]
pub struct PhotoUrls {
    pub raw: String,
    pub full: String,
    pub regular: String,
    pub small: String,
    pub thumb: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PhotoUser {
    pub name: String,
    pub username: String,
    pub profile_image: ProfileImage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileImage {
    pub small: String,
    pub medium: String,
    pub large: String,
}

impl Photo {
    /// Suggested filename for a downloaded copy of this photo.
    pub fn download_filename(&self) -> String {
        format!("unsplash-{}.jpg", self.id)
    }
}

/// Search responses wrap the records in an envelope; the listing endpoint
/// returns a bare array.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchEnvelope {
    #[serde(default)]
    pub results: Vec<Photo>,
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Builds a minimal valid photo for state machine and UI tests.
    pub fn photo(id: &str) -> Photo {
        Photo {
            id: id.to_string(),
            urls: PhotoUrls {
                raw: format!("https://images.example/{id}?raw"),
                full: format!("https://images.example/{id}?full"),
                regular: format!("https://images.example/{id}?regular"),
                small: format!("https://images.example/{id}?small"),
                thumb: format!("https://images.example/{id}?thumb"),
            },
            alt_description: None,
            user: PhotoUser {
                name: "Ada Lovelace".to_string(),
                username: "ada".to_string(),
                profile_image: ProfileImage {
                    small: "https://images.example/ada?s".to_string(),
                    medium: "https://images.example/ada?m".to_string(),
                    large: "https://images.example/ada?l".to_string(),
                },
            },
            likes: 0,
            created_at: "2024-05-01T12:00:00Z".parse().expect("valid fixture timestamp"),
            width: 4000,
            height: 3000,
        }
    }

    /// Builds `count` photos with ids starting at `first_id`.
    pub fn photos(first_id: u32, count: u32) -> Vec<Photo> {
        (first_id..first_id + count)
            .map(|n| photo(&n.to_string()))
            .collect()
    }
}
