//! Step view: one bordered panel with the current step's fields and buttons.
//!
//! Each field takes two rows: the input line (label and value) and the
//! helper line underneath, where its validation error is shown in red.

use super::select_field::SelectField;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;
use sf_protocol::{Field, Step};

/// Width of the label column.
pub const LABEL_WIDTH: u16 = 22;
/// Width of the value box, padding included.
pub const INPUT_WIDTH: u16 = 34;

/// How a field's value is presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    Text(String),
    Select(SelectField),
}

/// Render model for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRow {
    pub field: Field,
    pub label: &'static str,
    pub input: FieldInput,
    pub error: Option<String>,
    pub focused: bool,
}

/// Render model for one button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonView {
    pub label: &'static str,
    pub enabled: bool,
    pub focused: bool,
}

/// Everything needed to draw a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepView {
    pub step: Step,
    pub rows: Vec<FieldRow>,
    pub buttons: Vec<ButtonView>,
    /// Cursor position, in characters, inside the focused text field.
    pub cursor: Option<usize>,
}

impl StepView {
    /// Rows needed to draw the panel, borders included.
    pub fn height(&self) -> u16 {
        self.rows.len() as u16 * 2 + 2 + 2
    }
}

/// Render the step panel into `area`.
///
/// Places the terminal cursor in the focused text field and draws the
/// option popup below a focused select.
pub fn render_step(frame: &mut Frame, area: Rect, view: &StepView) {
    let title = format!(
        " Step {} of {}: {} ",
        view.step.number(),
        Step::ALL.len(),
        view.step.title()
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let input_x = inner.x + LABEL_WIDTH;
    let text_width = INPUT_WIDTH.saturating_sub(2) as usize;
    let mut popup: Option<(Rect, &SelectField)> = None;

    for (i, row) in view.rows.iter().enumerate() {
        let y = inner.y + i as u16 * 2;
        if y >= inner.bottom() {
            break;
        }

        let label_style = if row.focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let box_style = if row.focused {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        } else {
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::UNDERLINED)
        };

        let label = Span::styled(
            format!("{:<width$}", row.label, width = LABEL_WIDTH as usize),
            label_style,
        );

        let value = match &row.input {
            FieldInput::Text(text) => {
                let cursor = if row.focused { view.cursor } else { None };
                let offset = cursor.map_or(0, |c| c.saturating_sub(text_width));
                let visible: String = text.chars().skip(offset).take(text_width).collect();

                if let Some(c) = cursor {
                    let x = input_x + 1 + (c - offset) as u16;
                    if x < inner.right() {
                        frame.set_cursor_position(Position::new(x, y));
                    }
                }
                Span::styled(format!(" {visible:<text_width$} "), box_style)
            }
            FieldInput::Select(select) => {
                if row.focused {
                    let below = Rect::new(input_x, y + 1, INPUT_WIDTH, select.popup_height());
                    popup = Some((below.intersection(frame.area()), select));
                }
                let style = if select.is_placeholder() {
                    box_style.fg(Color::DarkGray)
                } else {
                    box_style
                };
                let label = select.selected().label;
                let width = text_width.saturating_sub(1);
                Span::styled(format!(" {label:<width$}▾ "), style)
            }
        };

        frame
            .buffer_mut()
            .set_line(inner.x, y, &Line::from(vec![label, value]), inner.width);

        if let Some(error) = &row.error {
            if y + 1 < inner.bottom() {
                let helper = Line::from(Span::styled(
                    error.as_str(),
                    Style::default().fg(Color::Red),
                ));
                frame.buffer_mut().set_line(
                    input_x + 1,
                    y + 1,
                    &helper,
                    inner.right().saturating_sub(input_x + 1),
                );
            }
        }
    }

    let buttons_y = inner.y + view.rows.len() as u16 * 2 + 1;
    if buttons_y < inner.bottom() {
        let mut spans = Vec::new();
        for button in &view.buttons {
            let mut style = if button.enabled {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            if button.focused {
                style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
            }
            spans.push(Span::styled(format!("[ {} ]", button.label), style));
            spans.push(Span::raw("  "));
        }
        frame.buffer_mut().set_line(
            input_x,
            buttons_y,
            &Line::from(spans),
            inner.right().saturating_sub(input_x),
        );
    }

    if let Some((rect, select)) = popup {
        if !rect.is_empty() {
            select.render_popup(rect, frame.buffer_mut());
        }
    }
}
