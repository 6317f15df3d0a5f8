// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::feed::RequestTag;
use crate::provider::Photo;
use crate::ui::gallery;
use crate::ui::modal;
use crate::ui::navbar;
use crate::ui::notifications;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Gallery(gallery::Message),
    Modal(modal::Message),
    Notification(notifications::Message),
    /// A page fetch settled. The tag identifies the request it was issued
    /// for; stale tags are discarded by the feed.
    PageLoaded {
        tag: RequestTag,
        result: Result<Vec<Photo>, Error>,
    },
    /// Grid thumbnail bytes arrived for a photo.
    ThumbnailLoaded {
        id: String,
        result: Result<Vec<u8>, Error>,
    },
    /// Reading-size image bytes arrived for the detail overlay.
    ModalImageLoaded {
        id: String,
        result: Result<Vec<u8>, Error>,
    },
    /// The save dialog settled (None if the user cancelled).
    DownloadTargetPicked {
        url: String,
        path: Option<PathBuf>,
    },
    DownloadCompleted(Result<(), Error>),
    /// Escape key or scrim click: dismiss the detail overlay.
    CloseModal,
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional search query to apply on startup.
    pub query: Option<String>,
    /// API access key; takes precedence over `UNSPLASH_ACCESS_KEY` and the
    /// config file.
    pub access_key: Option<String>,
    /// Optional config directory override (for settings.toml).
    pub config_dir: Option<String>,
}
