// SPDX-License-Identifier: MPL-2.0
//! Add-book form shown under the book list.
//!
//! The form edits a [`Draft`] that only becomes a [`NewBook`] on submit.
//! Every keystroke is accepted; the rating field keeps the raw text and is
//! coerced with [`Rating::from_input`] when needed. The description is a
//! multiline editor.
//!
//! Only the Add button submits. Enter inside a field does nothing special.

use crate::domain::book::{NewBook, Rating};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, text_editor, text_input, Column, Container, Row, Text},
    Element, Length,
};
use std::fmt;

/// Text shown in the rating field of an empty form.
const INITIAL_RATING_INPUT: &str = "0";

/// In-progress book entry.
pub struct Draft {
    pub name: String,
    pub author: String,
    pub genre: String,
    /// Exactly what the user typed.
    pub rating_input: String,
    pub description: text_editor::Content,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            name: String::new(),
            author: String::new(),
            genre: String::new(),
            rating_input: INITIAL_RATING_INPUT.to_string(),
            description: text_editor::Content::new(),
        }
    }
}

impl fmt::Debug for Draft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Draft")
            .field("name", &self.name)
            .field("author", &self.author)
            .field("genre", &self.genre)
            .field("rating_input", &self.rating_input)
            .field("description", &self.description_text())
            .finish()
    }
}

impl PartialEq for Draft {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.author == other.author
            && self.genre == other.genre
            && self.rating_input == other.rating_input
            && self.description_text() == other.description_text()
    }
}

impl Draft {
    /// Description text with trailing line breaks removed.
    #[must_use]
    pub fn description_text(&self) -> String {
        self.description.text().trim_end_matches('\n').to_string()
    }

    #[must_use]
    pub fn rating(&self) -> Rating {
        Rating::from_input(&self.rating_input)
    }

    #[must_use]
    pub fn to_new_book(&self) -> NewBook {
        NewBook {
            name: self.name.clone(),
            author: self.author.clone(),
            genre: self.genre.clone(),
            rating: self.rating(),
            description: self.description_text(),
        }
    }

    /// Hands out the draft as a [`NewBook`] and clears the form.
    pub fn take(&mut self) -> NewBook {
        let book = self.to_new_book();
        *self = Self::default();
        book
    }
}

/// Contextual data needed to render the form.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub draft: &'a Draft,
}

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    AuthorChanged(String),
    GenreChanged(String),
    RatingChanged(String),
    DescriptionEdited(text_editor::Action),
    Submit,
}

/// Events propagated to the parent.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Submitted(NewBook),
}

pub fn update(draft: &mut Draft, message: Message) -> Event {
    match message {
        Message::NameChanged(value) => draft.name = value,
        Message::AuthorChanged(value) => draft.author = value,
        Message::GenreChanged(value) => draft.genre = value,
        Message::RatingChanged(value) => draft.rating_input = value,
        Message::DescriptionEdited(action) => draft.description.perform(action),
        Message::Submit => return Event::Submitted(draft.take()),
    }
    Event::None
}

#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let draft = ctx.draft;

    let heading = Text::new(i18n.tr("add-form-title")).size(typography::TITLE_SM);

    let fields = Column::new()
        .spacing(spacing::XS)
        .push(field_row(
            i18n.tr("field-name"),
            text_input(&i18n.tr("add-form-name-placeholder"), &draft.name)
                .on_input(Message::NameChanged)
                .into(),
        ))
        .push(field_row(
            i18n.tr("field-author"),
            text_input(&i18n.tr("add-form-author-placeholder"), &draft.author)
                .on_input(Message::AuthorChanged)
                .into(),
        ))
        .push(field_row(
            i18n.tr("field-genre"),
            text_input(&i18n.tr("add-form-genre-placeholder"), &draft.genre)
                .on_input(Message::GenreChanged)
                .into(),
        ))
        .push(field_row(
            i18n.tr("field-rating"),
            text_input("0", &draft.rating_input)
                .on_input(Message::RatingChanged)
                .into(),
        ))
        .push(field_row(
            i18n.tr("field-description"),
            text_editor(&draft.description)
                .placeholder(i18n.tr("add-form-description-placeholder"))
                .on_action(Message::DescriptionEdited)
                .height(Length::Fixed(sizing::DESCRIPTION_EDITOR_HEIGHT))
                .into(),
        ));

    let submit = button(Text::new(i18n.tr("add-form-submit")).size(typography::BODY))
        .on_press(Message::Submit)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);

    let content = Column::new()
        .spacing(spacing::SM)
        .push(heading)
        .push(fields)
        .push(submit);

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::panel)
        .into()
}

fn field_row<'a>(label: String, input: Element<'a, Message>) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            Container::new(Text::new(label).size(typography::BODY_SM))
                .width(Length::Fixed(sizing::FORM_LABEL_WIDTH)),
        )
        .push(Container::new(input).width(Length::Fill))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::sync::Arc;

    fn paste(text: &str) -> Message {
        Message::DescriptionEdited(text_editor::Action::Edit(text_editor::Edit::Paste(
            Arc::new(text.to_string()),
        )))
    }

    fn filled_draft() -> Draft {
        let mut draft = Draft::default();
        update(&mut draft, Message::NameChanged("Dune".into()));
        update(&mut draft, Message::AuthorChanged("Frank Herbert".into()));
        update(&mut draft, Message::GenreChanged("SciFi".into()));
        update(&mut draft, Message::RatingChanged("5".into()));
        update(&mut draft, paste("Desert planet"));
        draft
    }

    #[test]
    fn fields_update_independently() {
        let mut draft = Draft::default();
        update(&mut draft, Message::AuthorChanged("Ursula K. Le Guin".into()));

        assert_eq!(draft.author, "Ursula K. Le Guin");
        assert!(draft.name.is_empty());
        assert_eq!(draft.rating_input, INITIAL_RATING_INPUT);
    }

    #[test]
    fn rating_keeps_raw_text_and_coerces() {
        let mut draft = Draft::default();
        update(&mut draft, Message::RatingChanged(" 4.5 ".into()));
        assert_eq!(draft.rating_input, " 4.5 ");
        assert_eq!(draft.rating().value(), 4.5);

        update(&mut draft, Message::RatingChanged("abc".into()));
        assert_eq!(draft.rating_input, "abc");
        assert_eq!(draft.rating(), Rating::ZERO);

        update(&mut draft, Message::RatingChanged(String::new()));
        assert_eq!(draft.rating(), Rating::ZERO);
    }

    #[test]
    fn submit_emits_new_book_and_resets() {
        let mut draft = filled_draft();

        let event = update(&mut draft, Message::Submit);

        let Event::Submitted(book) = event else {
            panic!("expected Submitted event");
        };
        assert_eq!(book.name, "Dune");
        assert_eq!(book.author, "Frank Herbert");
        assert_eq!(book.genre, "SciFi");
        assert_eq!(book.rating.value(), 5.0);
        assert_eq!(book.description, "Desert planet");
        assert_eq!(draft, Draft::default());
    }

    #[test]
    fn description_keeps_line_breaks() {
        let mut draft = Draft::default();
        update(&mut draft, paste("Spice.\nSand worms.\n"));

        assert_eq!(draft.description_text(), "Spice.\nSand worms.");
        assert_eq!(draft.to_new_book().description, "Spice.\nSand worms.");
    }

    #[test]
    fn editing_fields_never_submits() {
        let mut draft = Draft::default();
        let edits = [
            Message::NameChanged("Dune".into()),
            Message::AuthorChanged("Frank Herbert".into()),
            Message::GenreChanged("SciFi".into()),
            Message::RatingChanged("5".into()),
            paste("Line one\nLine two"),
            Message::DescriptionEdited(text_editor::Action::Edit(text_editor::Edit::Enter)),
        ];

        for edit in edits {
            assert_eq!(update(&mut draft, edit), Event::None);
        }
        assert_eq!(draft.name, "Dune");
    }

    #[test]
    fn submitting_empty_form_is_allowed() {
        let mut draft = Draft::default();
        let event = update(&mut draft, Message::Submit);
        assert_eq!(event, Event::Submitted(NewBook::default()));
    }

    #[test]
    fn form_view_renders() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        let draft = filled_draft();
        drop(view(ViewContext {
            i18n: &i18n,
            draft: &draft,
        }));
    }
}
