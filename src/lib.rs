// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a photo stream browser for Unsplash-style APIs, built
//! with the Iced GUI framework.
//!
//! It renders a paged photo grid with free-text search, scroll-triggered
//! pagination, and a detail overlay with download, and demonstrates
//! internationalization with Fluent, user preference management, and
//! modular UI design.

pub mod app;
pub mod config;
pub mod error;
pub mod feed;
pub mod i18n;
pub mod provider;
pub mod ui;
