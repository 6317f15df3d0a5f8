// SPDX-License-Identifier: MPL-2.0
//! Photo detail overlay.
//!
//! Shows the selected photo at reading size next to its author, stats, and
//! actions. The overlay owns no state: the app holds the selected photo and
//! stacks this panel over the gallery, and clears the selection on close.

use crate::i18n::fluent::I18n;
use crate::provider::Photo;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::widget::{button, text, Column, Container, Row, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Contextual data needed to render the detail overlay.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub photo: &'a Photo,
    /// Reading-size image; the grid thumbnail stands in until it arrives.
    pub image: Option<&'a Handle>,
}

/// Messages emitted by the overlay.
#[derive(Debug, Clone)]
pub enum Message {
    Close,
    Download,
}

/// Render the detail panel (the caller wraps it in the scrim).
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match ctx.image {
        Some(handle) => Image::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(sizing::MODAL_IMAGE_HEIGHT))
            .content_fit(ContentFit::Contain)
            .into(),
        None => Container::new(text(""))
            .width(Length::Fill)
            .height(Length::Fixed(sizing::MODAL_IMAGE_HEIGHT))
            .style(styles::container::thumbnail_placeholder)
            .into(),
    };

    let author = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(ctx.photo.user.name.as_str()).size(typography::SUBTITLE))
        .push(
            Text::new(format!("@{}", ctx.photo.user.username)).size(typography::CAPTION),
        );

    let mut info = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fixed(sizing::MODAL_INFO_WIDTH))
        .push(author);

    if let Some(description) = &ctx.photo.alt_description {
        info = info.push(Text::new(description.as_str()).size(typography::BODY));
    }

    info = info
        .push(stat_row(
            ctx.i18n.tr("modal-likes-label"),
            ctx.photo.likes.to_string(),
        ))
        .push(stat_row(
            ctx.i18n.tr("modal-dimensions-label"),
            format!("{} × {}", ctx.photo.width, ctx.photo.height),
        ))
        .push(stat_row(
            ctx.i18n.tr("modal-published-label"),
            ctx.photo.created_at.format("%B %e, %Y").to_string(),
        ));

    let download = button(Text::new(ctx.i18n.tr("modal-download-button")))
        .on_press(Message::Download)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);

    let close = button(Text::new(ctx.i18n.tr("modal-close")))
        .on_press(Message::Close)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::overlay);

    info = info.push(
        Row::new()
            .spacing(spacing::SM)
            .push(download)
            .push(close),
    );

    let content = Row::new()
        .spacing(spacing::LG)
        .align_y(alignment::Vertical::Top)
        .push(Container::new(picture).width(Length::FillPortion(2)))
        .push(info);

    Container::new(content)
        .width(Length::Fixed(sizing::MODAL_PANEL_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::modal_panel)
        .into()
}

fn stat_row<'a>(label: String, value: String) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::XS)
        .push(
            Container::new(Text::new(label).size(typography::CAPTION)).width(Length::Fill),
        )
        .push(Text::new(value).size(typography::BODY))
        .into()
}
