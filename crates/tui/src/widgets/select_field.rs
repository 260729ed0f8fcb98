//! Dropdown-style select for fields with a fixed option list.
//!
//! The first option is always a placeholder with an empty key, so an
//! unselected field cycles back to "nothing chosen".

use crate::event::EventStatus;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Widget};
use sf_protocol::{Field, IdType, Sex};

/// One entry of a select's option list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    /// Value stored in the draft.
    pub key: &'static str,
    /// Text shown to the user.
    pub label: &'static str,
}

/// Option list and highlighted entry for one select field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectField {
    options: Vec<SelectOption>,
    selected_index: usize,
}

impl SelectField {
    /// Build the select for `field` with `current` preselected.
    ///
    /// Returns `None` for free-text fields. A `current` value that matches no
    /// option selects the placeholder.
    pub fn for_field(field: Field, current: &str) -> Option<Self> {
        let placeholder = |label| SelectOption { key: "", label };
        let options: Vec<SelectOption> = match field {
            Field::Sex => std::iter::once(placeholder("Select Sex"))
                .chain(Sex::ALL.into_iter().map(|sex| SelectOption {
                    key: sex.key(),
                    label: sex.label(),
                }))
                .collect(),
            Field::IdType => std::iter::once(placeholder("Select Govt Issued ID Type"))
                .chain(IdType::ALL.into_iter().map(|id_type| SelectOption {
                    key: id_type.key(),
                    label: id_type.label(),
                }))
                .collect(),
            _ => return None,
        };

        let selected_index = options
            .iter()
            .position(|option| option.key == current)
            .unwrap_or(0);

        Some(Self {
            options,
            selected_index,
        })
    }

    pub fn selected(&self) -> SelectOption {
        self.options[self.selected_index]
    }

    /// Key of the highlighted option; empty for the placeholder.
    pub fn selected_key(&self) -> &'static str {
        self.selected().key
    }

    /// Whether the placeholder is highlighted.
    pub fn is_placeholder(&self) -> bool {
        self.selected_index == 0
    }

    pub fn select_next(&mut self) {
        self.selected_index = (self.selected_index + 1) % self.options.len();
    }

    pub fn select_previous(&mut self) {
        self.selected_index = self
            .selected_index
            .checked_sub(1)
            .unwrap_or(self.options.len() - 1);
    }

    /// Cycle the selection with ←/→ or Space.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> EventStatus {
        match key_event.code {
            KeyCode::Right | KeyCode::Char(' ') => self.select_next(),
            KeyCode::Left => self.select_previous(),
            _ => return EventStatus::NotConsumed,
        }
        EventStatus::Consumed
    }

    /// Height of the popup including its border.
    pub fn popup_height(&self) -> u16 {
        self.options.len() as u16 + 2
    }

    /// Render the option list as a bordered popup over `area`.
    pub fn render_popup(&self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .style(Style::default().bg(Color::Black));
        let inner = block.inner(area);
        block.render(area, buf);

        for (i, option) in self.options.iter().enumerate() {
            let y = inner.y + i as u16;
            if y >= inner.bottom() {
                break;
            }

            let style = if i == self.selected_index {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else if option.key.is_empty() {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::White)
            };

            let line = Line::from(Span::styled(
                format!(" {:<width$}", option.label, width = inner.width as usize),
                style,
            ));
            buf.set_line(inner.x, y, &line, inner.width);
        }
    }
}
