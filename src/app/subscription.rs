// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::keyboard::{self, key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Keyboard handling: Escape dismisses the detail overlay.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|evt, _status, _window| match evt {
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => match key {
            keyboard::Key::Named(key::Named::Escape) => Some(Message::CloseModal),
            _ => None,
        },
        _ => None,
    })
}

/// Periodic tick for notification auto-dismiss. Only runs while there is
/// something to dismiss, so an idle app schedules no wakeups.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
