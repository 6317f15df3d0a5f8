// SPDX-License-Identifier: MPL-2.0
//! Navigation bar with the application title and the search box.
//!
//! The navbar owns only the search draft (what the user has typed); the
//! active query lives in the feed. Submitting a blank draft is ignored,
//! the clear button always switches back to browsing.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, text, text_input, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    /// The query currently applied to the feed (shows the clear button even
    /// after the draft was edited).
    pub active_query: &'a str,
}

/// Search box state.
#[derive(Debug, Default)]
pub struct State {
    draft: String,
}

impl State {
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Pre-fills the draft, used for the `--query` startup flag.
    pub fn with_draft(draft: impl Into<String>) -> Self {
        Self { draft: draft.into() }
    }
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    DraftChanged(String),
    Submit,
    Clear,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// The user submitted a non-blank search.
    SearchSubmitted(String),
    /// The user cleared the search; switch back to browsing.
    SearchCleared,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, state: &mut State) -> Event {
    match message {
        Message::DraftChanged(draft) => {
            state.draft = draft;
            Event::None
        }
        Message::Submit => {
            let query = state.draft.trim().to_string();
            if query.is_empty() {
                Event::None
            } else {
                Event::SearchSubmitted(query)
            }
        }
        Message::Clear => {
            state.draft.clear();
            Event::SearchCleared
        }
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("app-title")).size(typography::HEADING);

    let search = text_input(
        &ctx.i18n.tr("navbar-search-placeholder"),
        ctx.state.draft(),
    )
    .on_input(Message::DraftChanged)
    .on_submit(Message::Submit)
    .padding(spacing::XS)
    .width(Length::Fixed(sizing::SEARCH_INPUT_MAX_WIDTH));

    let mut row = Row::new()
        .spacing(spacing::MD)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(title)
        .push(search);

    if !ctx.state.draft().is_empty() || !ctx.active_query.is_empty() {
        let clear = button(text("×").size(typography::SUBTITLE))
            .on_press(Message::Clear)
            .padding([0.0, spacing::XS])
            .style(styles::button::overlay);
        row = row.push(clear);
    }

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .style(styles::container::toolbar)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_trims_and_emits_query() {
        let mut state = State::with_draft("  mountain  ");
        let event = update(Message::Submit, &mut state);
        assert_eq!(event, Event::SearchSubmitted("mountain".to_string()));
    }

    #[test]
    fn blank_submit_is_ignored() {
        let mut state = State::with_draft("   ");
        let event = update(Message::Submit, &mut state);
        assert_eq!(event, Event::None);
    }

    #[test]
    fn clear_resets_draft_and_emits_event() {
        let mut state = State::with_draft("mountain");
        let event = update(Message::Clear, &mut state);
        assert_eq!(event, Event::SearchCleared);
        assert!(state.draft().is_empty());
    }

    #[test]
    fn draft_changes_emit_no_event() {
        let mut state = State::default();
        let event = update(Message::DraftChanged("oce".to_string()), &mut state);
        assert_eq!(event, Event::None);
        assert_eq!(state.draft(), "oce");
    }

    #[test]
    fn navbar_view_renders() {
        let i18n = I18n::default();
        let state = State::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            state: &state,
            active_query: "",
        });
    }

    #[test]
    fn navbar_view_renders_with_active_query() {
        let i18n = I18n::default();
        let state = State::with_draft("mountain");
        let _element = view(ViewContext {
            i18n: &i18n,
            state: &state,
            active_query: "mountain",
        });
    }
}
