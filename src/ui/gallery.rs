// SPDX-License-Identifier: MPL-2.0
//! The photo grid.
//!
//! Pure rendering of the feed state: cards in fixed-column rows inside a
//! scrollable, a search header in searching mode, and a footer strip that
//! doubles as the pagination marker. The scrollable reports its relative
//! offset on every scroll; the app feeds that into the scroll sentinel.

use crate::feed::{Feed, Mode, Phase};
use crate::i18n::fluent::I18n;
use crate::provider::Photo;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::widget::scrollable::Viewport;
use iced::widget::{button, text, Column, Container, Id, Row, Scrollable, Text};
use iced::{alignment, ContentFit, Element, Length};
use std::collections::HashMap;

/// Id of the grid scrollable, used to snap back to the top on query change.
pub const SCROLLABLE_ID: &str = "gallery-grid";

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub feed: &'a Feed,
    /// Thumbnail handles keyed by photo id; missing ids render a placeholder.
    pub thumbnails: &'a HashMap<String, Handle>,
}

/// Messages emitted by the gallery.
#[derive(Debug, Clone)]
pub enum Message {
    /// Relative vertical scroll offset (0.0 top, 1.0 bottom).
    Scrolled(f32),
    /// A card was clicked.
    PhotoSelected(String),
}

/// Render the gallery for the current feed state.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let feed = ctx.feed;

    if feed.items().is_empty() {
        let key = match feed.phase() {
            Phase::InitialLoading if feed.mode() == Mode::Searching => "gallery-searching",
            Phase::InitialLoading => "gallery-loading",
            _ => "gallery-no-results",
        };
        return centered_notice(ctx.i18n.tr(key));
    }

    let mut content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center);

    if feed.mode() == Mode::Searching {
        content = content.push(search_header(&ctx));
    }

    for chunk in feed.items().chunks(sizing::GRID_COLUMNS) {
        let mut row = Row::new().spacing(spacing::MD);
        for photo in chunk {
            row = row.push(card(photo, ctx.thumbnails.get(&photo.id)));
        }
        content = content.push(row);
    }

    content = content.push(footer(&ctx));

    Scrollable::new(content)
        .id(Id::new(SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| Message::Scrolled(viewport.relative_offset().y))
        .into()
}

fn search_header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let heading = Text::new(format!(
        "{} \"{}\"",
        ctx.i18n.tr("search-results-heading"),
        ctx.feed.query()
    ))
    .size(typography::HEADING);

    let count = Text::new(format!(
        "{} {}",
        ctx.feed.items().len(),
        ctx.i18n.tr("gallery-photo-count-suffix")
    ))
    .size(typography::CAPTION);

    Column::new()
        .spacing(spacing::XXS)
        .push(heading)
        .push(count)
        .into()
}

/// One photo card: the thumbnail (or a placeholder while it loads) above an
/// author caption.
fn card<'a>(photo: &'a Photo, thumbnail: Option<&Handle>) -> Element<'a, Message> {
    let image_height = sizing::CARD_HEIGHT - 2.0 * spacing::LG;

    let picture: Element<'a, Message> = match thumbnail {
        Some(handle) => Image::new(handle.clone())
            .width(Length::Fixed(sizing::CARD_WIDTH))
            .height(Length::Fixed(image_height))
            .content_fit(ContentFit::Cover)
            .into(),
        None => Container::new(text(""))
            .width(Length::Fixed(sizing::CARD_WIDTH))
            .height(Length::Fixed(image_height))
            .style(styles::container::thumbnail_placeholder)
            .into(),
    };

    let author = Text::new(photo.user.name.as_str()).size(typography::BODY);
    let likes = Text::new(format!("♥ {}", photo.likes)).size(typography::CAPTION);

    let caption = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(author).width(Length::Fill))
        .push(likes);

    let content = Column::new()
        .spacing(spacing::XS)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .push(picture)
        .push(caption);

    button(content)
        .on_press(Message::PhotoSelected(photo.id.clone()))
        .padding(spacing::XXS)
        .style(styles::button::card)
        .into()
}

/// Footer strip after the last row. This is the visible counterpart of the
/// pagination marker: loading feedback while a page is in flight, a closing
/// line once the feed is exhausted.
fn footer<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let key = match ctx.feed.phase() {
        Phase::LoadingMore => Some("gallery-loading-more"),
        Phase::Exhausted => Some("gallery-end-of-results"),
        _ => None,
    };

    let notice: Element<'a, Message> = match key {
        Some(key) => Text::new(ctx.i18n.tr(key)).size(typography::BODY).into(),
        None => text("").into(),
    };

    Container::new(notice)
        .width(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .into()
}

fn centered_notice<'a>(message: String) -> Element<'a, Message> {
    Container::new(Text::new(message).size(typography::SUBTITLE))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::Feed;
    use crate::provider::fixtures::photos;

    fn feed_with_items() -> Feed {
        let (mut feed, plan) = Feed::new(12);
        feed.apply(&plan.tag, photos(1, 12));
        feed
    }

    #[test]
    fn gallery_renders_initial_loading() {
        let i18n = I18n::default();
        let (feed, _plan) = Feed::new(12);
        let thumbnails = HashMap::new();
        let _element = view(ViewContext {
            i18n: &i18n,
            feed: &feed,
            thumbnails: &thumbnails,
        });
    }

    #[test]
    fn gallery_renders_populated_grid_without_thumbnails() {
        let i18n = I18n::default();
        let feed = feed_with_items();
        let thumbnails = HashMap::new();
        let _element = view(ViewContext {
            i18n: &i18n,
            feed: &feed,
            thumbnails: &thumbnails,
        });
    }

    #[test]
    fn gallery_renders_empty_search_results() {
        let i18n = I18n::default();
        let (mut feed, _) = Feed::new(12);
        let plan = feed.set_query("asdfgh");
        feed.apply(&plan.tag, Vec::new());
        let thumbnails = HashMap::new();
        let _element = view(ViewContext {
            i18n: &i18n,
            feed: &feed,
            thumbnails: &thumbnails,
        });
    }

    #[test]
    fn gallery_renders_exhausted_footer() {
        let i18n = I18n::default();
        let mut feed = feed_with_items();
        let plan = feed.load_more().expect("idle feed");
        feed.apply(&plan.tag, Vec::new());
        let thumbnails = HashMap::new();
        let _element = view(ViewContext {
            i18n: &i18n,
            feed: &feed,
            thumbnails: &thumbnails,
        });
    }
}
