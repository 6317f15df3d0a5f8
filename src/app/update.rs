// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{App, Message, SelectedPhoto};
use crate::error::Error;
use crate::feed::{Applied, FetchPlan, Mode, RequestTag};
use crate::provider::Photo;
use crate::ui::gallery;
use crate::ui::modal;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::Notification;
use iced::widget::image::Handle;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;
use std::path::PathBuf;

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(message) => match navbar::update(message, &mut self.navbar) {
                NavbarEvent::SearchSubmitted(query) => self.apply_query(&query),
                NavbarEvent::SearchCleared => self.apply_query(""),
                NavbarEvent::None => Task::none(),
            },

            Message::Gallery(gallery::Message::Scrolled(offset)) => {
                if self.sentinel.observe(offset) {
                    self.try_load_more()
                } else {
                    Task::none()
                }
            }

            Message::Gallery(gallery::Message::PhotoSelected(id)) => self.select_photo(&id),

            Message::Modal(modal::Message::Close) | Message::CloseModal => {
                self.selected = None;
                Task::none()
            }

            Message::Modal(modal::Message::Download) => self.start_download(),

            Message::PageLoaded { tag, result } => self.handle_page_loaded(tag, result),

            Message::ThumbnailLoaded { id, result } => {
                self.thumbnails_pending.remove(&id);
                match result {
                    Ok(bytes) => {
                        self.thumbnails.insert(id, Handle::from_bytes(bytes));
                    }
                    // The placeholder stays; the grid keeps working without
                    // this one thumbnail.
                    Err(e) => eprintln!("Thumbnail fetch failed for {id}: {e}"),
                }
                Task::none()
            }

            Message::ModalImageLoaded { id, result } => {
                if let Some(selected) = &mut self.selected {
                    if selected.photo.id == id {
                        match result {
                            Ok(bytes) => selected.image = Some(Handle::from_bytes(bytes)),
                            Err(e) => eprintln!("Detail image fetch failed for {id}: {e}"),
                        }
                    }
                }
                Task::none()
            }

            Message::DownloadTargetPicked { url, path } => match path {
                Some(dest) => self.download_task(url, dest),
                // Dialog cancelled.
                None => Task::none(),
            },

            Message::DownloadCompleted(result) => {
                match result {
                    Ok(()) => self
                        .notifications
                        .push(Notification::success("download-complete")),
                    Err(e) => {
                        eprintln!("Download failed: {e}");
                        self.notifications.push(Notification::error("download-failed"));
                    }
                }
                Task::none()
            }

            Message::Notification(message) => {
                self.notifications.handle_message(message);
                Task::none()
            }

            Message::Tick(_) => {
                self.notifications.tick();
                Task::none()
            }
        }
    }

    /// Switches the feed to a new query (empty = back to browsing) and snaps
    /// the grid to the top.
    fn apply_query(&mut self, query: &str) -> Task<Message> {
        let plan = self.feed.set_query(query);
        // Disarm triggers bound to the previous query's scroll position.
        self.sentinel.rearm();

        Task::batch([
            self.fetch_task(plan),
            operation::snap_to(
                Id::new(gallery::SCROLLABLE_ID),
                RelativeOffset { x: 0.0, y: 0.0 },
            ),
        ])
    }

    /// Asks the feed for the next page. The feed's phase gate makes this a
    /// no-op while a fetch is in flight or after exhaustion.
    fn try_load_more(&mut self) -> Task<Message> {
        match self.feed.load_more() {
            Some(plan) => self.fetch_task(plan),
            None => Task::none(),
        }
    }

    fn handle_page_loaded(
        &mut self,
        tag: RequestTag,
        result: Result<Vec<Photo>, Error>,
    ) -> Task<Message> {
        match result {
            Ok(photos) => match self.feed.apply(&tag, photos) {
                Applied::Stale => Task::none(),
                Applied::Replaced { .. } | Applied::Appended { .. } => {
                    // New content under the viewport: let the sentinel fire
                    // again even if the user is parked at the bottom.
                    self.sentinel.rearm();
                    self.schedule_thumbnails()
                }
            },
            Err(e) => {
                if self.feed.apply_error(&tag) != Applied::Stale {
                    eprintln!("Page fetch failed ({:?} page {}): {e}", tag.query, tag.page);
                    self.notifications.push(Notification::error(e.i18n_key()));
                }
                Task::none()
            }
        }
    }

    /// Spawns the fetch a [`FetchPlan`] describes and routes the tagged
    /// result back into `update`.
    pub(super) fn fetch_task(&self, plan: FetchPlan) -> Task<Message> {
        let provider = self.provider.clone();
        let FetchPlan { tag, mode } = plan;

        Task::perform(
            async move {
                let result = match mode {
                    Mode::Browsing => provider.list_popular(tag.page).await,
                    Mode::Searching => provider.search_by_text(&tag.query, tag.page).await,
                };
                (tag, result)
            },
            |(tag, result)| Message::PageLoaded { tag, result },
        )
    }

    /// Requests grid thumbnails for every displayed photo that has neither a
    /// cached handle nor a fetch in flight.
    fn schedule_thumbnails(&mut self) -> Task<Message> {
        let missing: Vec<(String, String)> = self
            .feed
            .items()
            .iter()
            .filter(|photo| {
                !self.thumbnails.contains_key(&photo.id)
                    && !self.thumbnails_pending.contains(&photo.id)
            })
            .map(|photo| (photo.id.clone(), photo.urls.small.clone()))
            .collect();

        let tasks: Vec<Task<Message>> = missing
            .into_iter()
            .map(|(id, url)| {
                self.thumbnails_pending.insert(id.clone());
                let provider = self.provider.clone();
                Task::perform(
                    async move {
                        let result = provider.fetch_image(&url).await;
                        (id, result)
                    },
                    |(id, result)| Message::ThumbnailLoaded { id, result },
                )
            })
            .collect();

        Task::batch(tasks)
    }

    /// Opens the detail overlay and fetches the reading-size image.
    fn select_photo(&mut self, id: &str) -> Task<Message> {
        let Some(photo) = self.feed.items().iter().find(|p| p.id == id) else {
            return Task::none();
        };
        let photo = photo.clone();
        let url = photo.urls.regular.clone();
        let photo_id = photo.id.clone();

        self.selected = Some(SelectedPhoto { photo, image: None });

        let provider = self.provider.clone();
        Task::perform(
            async move {
                let result = provider.fetch_image(&url).await;
                (photo_id, result)
            },
            |(id, result)| Message::ModalImageLoaded { id, result },
        )
    }

    /// Opens the save dialog for the selected photo's full-resolution file.
    fn start_download(&self) -> Task<Message> {
        let Some(selected) = &self.selected else {
            return Task::none();
        };
        let url = selected.photo.urls.full.clone();
        let filename = selected.photo.download_filename();
        let title = self.i18n.tr("download-dialog-title");

        Task::perform(
            async move {
                let mut dialog = rfd::AsyncFileDialog::new()
                    .set_title(&title)
                    .set_file_name(&filename);
                if let Some(downloads) = dirs::download_dir() {
                    dialog = dialog.set_directory(downloads);
                }
                dialog
                    .save_file()
                    .await
                    .map(|handle| handle.path().to_path_buf())
            },
            move |path| Message::DownloadTargetPicked {
                url: url.clone(),
                path,
            },
        )
    }

    fn download_task(&self, url: String, dest: PathBuf) -> Task<Message> {
        let provider = self.provider.clone();
        Task::perform(
            async move { provider.download(&url, &dest).await },
            Message::DownloadCompleted,
        )
    }
}
