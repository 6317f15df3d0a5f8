// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the feed and the views.
//!
//! The `App` struct wires together the feed state machine, the provider
//! client, localization, and the UI components, and translates messages
//! into side effects like page fetches or file downloads. Policy decisions
//! (page size clamping, access key resolution, stale-response discard) stay
//! close to the main update loop so user-facing behavior is easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::feed::{Feed, ScrollSentinel};
use crate::i18n::fluent::I18n;
use crate::provider::{Photo, ProviderClient, ProviderConfig};
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use iced::widget::image::Handle;
use iced::{window, Element, Subscription, Task, Theme};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

pub const WINDOW_DEFAULT_WIDTH: f32 = 1024.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 768.0;
pub const MIN_WINDOW_WIDTH: f32 = 720.0;
pub const MIN_WINDOW_HEIGHT: f32 = 540.0;

/// Environment variable consulted when no `--access-key` flag is given.
const ACCESS_KEY_ENV: &str = "UNSPLASH_ACCESS_KEY";

/// The photo held open in the detail overlay. Owned by the presentation
/// layer, deliberately not part of the feed state: a query change does not
/// close it.
struct SelectedPhoto {
    photo: Photo,
    /// Reading-size image, fetched on selection.
    image: Option<Handle>,
}

/// Root Iced application state bridging the feed machine, the provider, and
/// the UI components.
pub struct App {
    pub i18n: I18n,
    feed: Feed,
    sentinel: ScrollSentinel,
    provider: Arc<ProviderClient>,
    navbar: navbar::State,
    /// Thumbnail handles by photo id. Kept across query changes as a cache;
    /// ids recur when the user returns to a previous query.
    thumbnails: HashMap<String, Handle>,
    /// Ids with a thumbnail fetch in flight, so each is requested once.
    thumbnails_pending: HashSet<String>,
    selected: Option<SelectedPhoto>,
    theme_mode: ThemeMode,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("query", &self.feed.query())
            .field("phase", &self.feed.phase())
            .field("items", &self.feed.items().len())
            .finish()
    }
}

impl App {
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load_with_dir(flags.config_dir.as_deref().map(Path::new))
            .unwrap_or_else(|e| {
                eprintln!("Failed to load configuration: {e}");
                config::Config::default()
            });

        let i18n = I18n::new(flags.lang, &config);
        let theme_mode = ThemeMode::from_config(config.theme.as_deref());

        let access_key = flags
            .access_key
            .or_else(|| std::env::var(ACCESS_KEY_ENV).ok())
            .or_else(|| config.access_key.clone());
        let missing_key = access_key.is_none();

        let provider = Arc::new(
            ProviderClient::new(ProviderConfig {
                base_url: config.api_base_url().to_string(),
                access_key,
                page_size: config.page_size(),
            })
            .expect("Failed to initialize the HTTP client."),
        );

        let mut notifications = notifications::Manager::new();
        if missing_key {
            notifications.push(notifications::Notification::error(
                "error-missing-access-key",
            ));
        }

        let startup_query = flags.query.unwrap_or_default();
        let (mut feed, mut plan) = Feed::new(config.page_size());
        if !startup_query.is_empty() {
            plan = feed.set_query(&startup_query);
        }

        let app = App {
            i18n,
            feed,
            sentinel: ScrollSentinel::default(),
            provider,
            navbar: navbar::State::with_draft(startup_query),
            thumbnails: HashMap::new(),
            thumbnails_pending: HashSet::new(),
            selected: None,
            theme_mode,
            notifications,
        };
        let task = app.fetch_task(plan);

        (app, task)
    }

    pub fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    pub fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced requires Fn, not FnOnce).
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}
