// SPDX-License-Identifier: MPL-2.0
//! View composition for the application.
//!
//! The base layer is the navbar above the gallery grid; the detail overlay
//! and the toast stack are pushed on top as stacked layers when present.

use super::{App, Message};
use crate::ui::design_tokens::spacing;
use crate::ui::gallery;
use crate::ui::modal;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::styles;
use iced::widget::{center, mouse_area, opaque, Column, Container, Stack};
use iced::{alignment, Element, Length};

pub fn view(app: &App) -> Element<'_, Message> {
    let navbar_view = navbar::view(navbar::ViewContext {
        i18n: &app.i18n,
        state: &app.navbar,
        active_query: app.feed.query(),
    })
    .map(Message::Navbar);

    let gallery_view = gallery::view(gallery::ViewContext {
        i18n: &app.i18n,
        feed: &app.feed,
        thumbnails: &app.thumbnails,
    })
    .map(Message::Gallery);

    let base = Column::new()
        .push(navbar_view)
        .push(gallery_view)
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base);

    if let Some(selected) = &app.selected {
        // Fall back to the grid thumbnail until the reading-size image is in.
        let image = selected
            .image
            .as_ref()
            .or_else(|| app.thumbnails.get(&selected.photo.id));

        let panel = modal::view(modal::ViewContext {
            i18n: &app.i18n,
            photo: &selected.photo,
            image,
        })
        .map(Message::Modal);

        // The inner opaque keeps clicks on the panel from reaching the
        // scrim's close handler.
        let overlay = opaque(
            mouse_area(center(opaque(panel)).style(styles::container::scrim))
                .on_press(Message::CloseModal),
        );
        layers = layers.push(overlay);
    }

    if app.notifications.has_notifications() {
        let toasts =
            notifications::view_overlay(&app.notifications, &app.i18n).map(Message::Notification);
        layers = layers.push(
            Container::new(toasts)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Bottom)
                .padding(spacing::MD),
        );
    }

    layers.into()
}
