// SPDX-License-Identifier: MPL-2.0
//! Centralized widget styles shared across the gallery views.

pub mod button {
    use crate::ui::design_tokens::{palette, radius, with_alpha};
    use iced::widget::button;
    use iced::{Background, Border, Theme};

    /// Primary action button (download, retry).
    pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
        let background = match status {
            button::Status::Hovered => palette::PRIMARY_600,
            _ => palette::PRIMARY_500,
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: palette::WHITE,
            border: Border {
                radius: radius::MD.into(),
                ..Border::default()
            },
            ..button::Style::default()
        }
    }

    /// Invisible button wrapping a photo card; the image is the affordance.
    pub fn card(theme: &Theme, status: button::Status) -> button::Style {
        let palette_ext = theme.extended_palette();
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => {
                Some(Background::Color(palette_ext.background.strong.color))
            }
            _ => None,
        };
        button::Style {
            background,
            text_color: palette_ext.background.base.text,
            border: Border {
                radius: radius::LG.into(),
                ..Border::default()
            },
            ..button::Style::default()
        }
    }

    /// Quiet button drawn over dark surfaces (modal close, toast dismiss).
    pub fn overlay(_theme: &Theme, status: button::Status) -> button::Style {
        let alpha = match status {
            button::Status::Hovered => 0.35,
            button::Status::Pressed => 0.5,
            _ => 0.2,
        };
        button::Style {
            background: Some(Background::Color(with_alpha(palette::BLACK, alpha))),
            text_color: palette::WHITE,
            border: Border {
                radius: radius::MD.into(),
                ..Border::default()
            },
            ..button::Style::default()
        }
    }
}

pub mod container {
    use crate::ui::design_tokens::{opacity, palette, radius, with_alpha};
    use iced::widget::container;
    use iced::{Border, Theme};

    /// Top navigation bar surface.
    pub fn toolbar(theme: &Theme) -> container::Style {
        let palette_ext = theme.extended_palette();
        container::Style {
            background: Some(palette_ext.background.weak.color.into()),
            ..container::Style::default()
        }
    }

    /// Dimming scrim behind the photo detail overlay.
    pub fn scrim(_theme: &Theme) -> container::Style {
        container::Style {
            background: Some(with_alpha(palette::BLACK, opacity::OVERLAY_STRONG).into()),
            ..container::Style::default()
        }
    }

    /// The detail overlay panel itself.
    pub fn modal_panel(theme: &Theme) -> container::Style {
        let palette_ext = theme.extended_palette();
        container::Style {
            background: Some(palette_ext.background.base.color.into()),
            border: Border {
                radius: radius::LG.into(),
                width: 1.0,
                color: palette_ext.background.strong.color,
            },
            ..container::Style::default()
        }
    }

    /// Placeholder square shown while a thumbnail is still loading.
    pub fn thumbnail_placeholder(theme: &Theme) -> container::Style {
        let palette_ext = theme.extended_palette();
        container::Style {
            background: Some(palette_ext.background.strong.color.into()),
            border: Border {
                radius: radius::LG.into(),
                ..Border::default()
            },
            ..container::Style::default()
        }
    }

    /// A toast card with a severity-colored accent border.
    pub fn toast(accent: iced::Color) -> impl Fn(&Theme) -> container::Style {
        move |theme: &Theme| {
            let palette_ext = theme.extended_palette();
            container::Style {
                background: Some(
                    with_alpha(palette_ext.background.base.color, opacity::SURFACE).into(),
                ),
                border: Border {
                    radius: radius::MD.into(),
                    width: 2.0,
                    color: accent,
                },
                ..container::Style::default()
            }
        }
    }
}
