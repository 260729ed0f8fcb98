//! TUI application state and event loop.
//!
//! `App` owns the form engine. Key presses become `Op`s, `Op`s are applied
//! synchronously, and the resulting `Event`s update focus and the status
//! line. Rendering reads everything else straight from the engine.

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use sf_core::FormEngine;
use sf_protocol::{Event, Field, GlobalConfig, Op, Step};
use tokio_stream::StreamExt;
use tracing::debug;

use crate::event_handler::{self, Command, StatusKind, StatusLine};
use crate::tui::{Tui, TuiEvent};
use crate::widgets::form_view::{self, ButtonView, FieldInput, FieldRow, StepView};
use crate::widgets::submissions_table;
use crate::widgets::{SelectField, TextField};

const HELP: &str = "Tab/↓ next · Shift-Tab/↑ previous · ←/→ choose · Enter activate · \
Ctrl-N next step · Ctrl-P previous step · Ctrl-S submit · Esc quit";

/// Something that can hold focus on the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(Field),
    Previous,
    Next,
    Submit,
}

impl Focus {
    fn button_label(self) -> Option<&'static str> {
        match self {
            Focus::Field(_) => None,
            Focus::Previous => Some("Previous"),
            Focus::Next => Some("Next"),
            Focus::Submit => Some("Submit"),
        }
    }
}

/// Main TUI application state.
pub struct App {
    pub engine: FormEngine,
    /// Heading of the outer frame.
    pub title: String,
    pub show_submissions: bool,
    /// Index into `focus_targets()`.
    pub focus_index: usize,
    /// Edit buffer of the focused text field.
    pub editor: TextField,
    pub status: Option<StatusLine>,
    pub should_exit: bool,
}

impl App {
    pub fn new(config: &GlobalConfig) -> Self {
        Self {
            engine: FormEngine::from_config(config),
            title: config.title.clone(),
            show_submissions: config.show_submissions,
            focus_index: 0,
            editor: TextField::new(),
            status: None,
            should_exit: false,
        }
    }

    /// Main event loop.
    pub async fn run(&mut self, tui: &mut Tui) -> Result<()> {
        let mut tui_events = tui.event_stream();
        let frames = tui.frame_requester();

        self.sync_editor();
        frames.schedule_frame();

        while !self.should_exit {
            let Some(event) = tui_events.next().await else {
                break;
            };
            match event {
                TuiEvent::Key(key_event) => {
                    self.handle_key_event(key_event);
                    frames.schedule_frame();
                }
                TuiEvent::Paste(text) => {
                    self.handle_paste(&text);
                    frames.schedule_frame();
                }
                TuiEvent::Draw => {
                    tui.draw(|frame| self.render(frame))?;
                }
            }
        }

        Ok(())
    }

    /// Focusable targets of the current step, in tab order.
    ///
    /// The ID value input only exists once an ID type is chosen.
    pub fn focus_targets(&self) -> Vec<Focus> {
        let step = self.engine.step();
        let has_id_type = self.engine.draft().id_type().is_some();

        let mut targets: Vec<Focus> = step
            .fields()
            .iter()
            .filter(|field| **field != Field::IdValue || has_id_type)
            .map(|field| Focus::Field(*field))
            .collect();

        match step {
            Step::Personal => targets.push(Focus::Next),
            Step::Address => targets.extend([Focus::Previous, Focus::Submit]),
        }
        targets
    }

    pub fn focus(&self) -> Focus {
        let targets = self.focus_targets();
        let index = self.focus_index.min(targets.len().saturating_sub(1));
        targets.get(index).copied().unwrap_or(Focus::Next)
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        let Some(command) = event_handler::handle_keyboard_event(key_event) else {
            return;
        };

        match command {
            Command::Quit => self.dispatch(Op::Shutdown),
            Command::FocusNext => self.move_focus(1),
            Command::FocusPrevious => self.move_focus(-1),
            Command::Activate => self.activate(),
            Command::Dispatch(op) => self.dispatch(op),
            Command::Edit(key_event) => self.edit_focused(key_event),
        }
    }

    fn handle_paste(&mut self, text: &str) {
        if let Focus::Field(field) = self.focus() {
            if SelectField::for_field(field, "").is_none() {
                self.editor.insert_str(text);
                self.commit_editor(field);
            }
        }
    }

    fn move_focus(&mut self, delta: isize) {
        let len = self.focus_targets().len() as isize;
        let current = self.focus_index.min(len as usize - 1) as isize;
        self.focus_index = (current + delta).rem_euclid(len) as usize;
        self.sync_editor();
    }

    fn activate(&mut self) {
        match self.focus() {
            Focus::Field(_) => self.move_focus(1),
            Focus::Next => self.dispatch(Op::NextStep),
            Focus::Previous => self.dispatch(Op::PreviousStep),
            Focus::Submit => self.dispatch(Op::Submit),
        }
    }

    fn edit_focused(&mut self, key_event: KeyEvent) {
        let Focus::Field(field) = self.focus() else {
            return;
        };

        match SelectField::for_field(field, self.engine.value(field)) {
            Some(mut select) => {
                if select.handle_key_event(key_event).is_consumed() {
                    self.dispatch(Op::SetField {
                        field,
                        value: select.selected_key().to_string(),
                    });
                }
            }
            None => {
                if self.editor.handle_key_event(key_event).is_consumed() {
                    self.commit_editor(field);
                }
            }
        }
    }

    /// Send the edit buffer to the engine if it differs from the draft.
    fn commit_editor(&mut self, field: Field) {
        if self.editor.input() != self.engine.value(field) {
            self.dispatch(Op::SetField {
                field,
                value: self.editor.input().to_string(),
            });
        }
    }

    /// Load the focused field's value into the edit buffer.
    fn sync_editor(&mut self) {
        match self.focus() {
            Focus::Field(field) => {
                let value = self.engine.value(field).to_string();
                self.editor.set_value(&value);
            }
            _ => self.editor.clear(),
        }
    }

    /// Apply an operation and react to the events it produces.
    ///
    /// The first event with a status message sets the status line, so a
    /// submission's confirmation survives the reset that follows it.
    pub fn dispatch(&mut self, op: Op) {
        let events = self.engine.apply(op);
        let mut status = None;

        for event in &events {
            debug!(?event, "engine event");
            if status.is_none() {
                status = event_handler::status_for(event);
            }

            match event {
                Event::StepChanged { .. } => {
                    self.focus_index = 0;
                    self.sync_editor();
                }
                Event::StepBlocked { errors, .. } | Event::SubmitRejected { errors } => {
                    self.focus_first_error(errors.iter().map(|e| e.field));
                }
                Event::FormReset => self.sync_editor(),
                Event::ShutdownRequested => self.should_exit = true,
                Event::FieldChanged { .. }
                | Event::RecordSubmitted { .. }
                | Event::SubmitIgnored { .. } => {}
            }
        }

        if status.is_some() {
            self.status = status;
        }
    }

    /// Focus the first field on this step that has an error.
    fn focus_first_error(&mut self, fields: impl Iterator<Item = Field>) {
        let targets = self.focus_targets();
        let first = fields
            .filter_map(|field| targets.iter().position(|t| *t == Focus::Field(field)))
            .min();
        if let Some(index) = first {
            self.focus_index = index;
            self.sync_editor();
        }
    }

    fn step_view(&self) -> StepView {
        let step = self.engine.step();
        let focus = self.focus();
        let targets = self.focus_targets();

        let rows = targets
            .iter()
            .filter_map(|target| match target {
                Focus::Field(field) => Some(*field),
                _ => None,
            })
            .map(|field| {
                let focused = focus == Focus::Field(field);
                let value = self.engine.value(field);
                let input = match SelectField::for_field(field, value) {
                    Some(select) => FieldInput::Select(select),
                    None if focused => FieldInput::Text(self.editor.input().to_string()),
                    None => FieldInput::Text(value.to_string()),
                };
                let label = match (field, self.engine.draft().id_type()) {
                    (Field::IdValue, Some(id_type)) => id_type.value_label(),
                    _ => field.label(),
                };
                FieldRow {
                    field,
                    label,
                    input,
                    error: self.engine.visible_error(field).map(str::to_string),
                    focused,
                }
            })
            .collect();

        let buttons = targets
            .iter()
            .filter_map(|target| {
                let label = target.button_label()?;
                let enabled = match target {
                    Focus::Next => self.engine.can_advance(),
                    Focus::Submit => self.engine.can_submit(),
                    _ => true,
                };
                Some(ButtonView {
                    label,
                    enabled,
                    focused: focus == *target,
                })
            })
            .collect();

        let cursor = match focus {
            Focus::Field(field) if SelectField::for_field(field, "").is_none() => {
                Some(self.editor.cursor())
            }
            _ => None,
        };

        StepView {
            step,
            rows,
            buttons,
            cursor,
        }
    }

    /// Render the TUI.
    fn render(&self, frame: &mut Frame) {
        let outer = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(
                format!(" {} ", self.title),
                Style::default().add_modifier(Modifier::BOLD),
            ));
        let area = outer.inner(frame.area());
        frame.render_widget(outer, frame.area());

        let view = self.step_view();
        let [form_area, status_area, table_area, help_area] = Layout::vertical([
            Constraint::Length(view.height()),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        if self.show_submissions {
            submissions_table::render_submissions(frame, table_area, self.engine.submissions());
        }
        self.render_status(frame, status_area);
        frame.render_widget(
            Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray)),
            help_area,
        );

        // Last, so the select popup draws over everything else
        form_view::render_step(frame, form_area, &view);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let Some(status) = &self.status else {
            return;
        };
        let color = match status.kind {
            StatusKind::Info => Color::Cyan,
            StatusKind::Success => Color::Green,
            StatusKind::Error => Color::Red,
        };
        let line = Line::from(Span::styled(
            format!(" {}", status.text),
            Style::default().fg(color),
        ));
        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use sf_protocol::ValidationMode;

    fn app() -> App {
        let mut app = App::new(&GlobalConfig::default());
        app.sync_editor();
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::from(code));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn screen(app: &App) -> String {
        let backend = TestBackend::new(200, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    /// Fill step 1 through the keyboard, ending on the Next button.
    fn fill_personal(app: &mut App, name: &str) {
        type_text(app, name);
        press(app, KeyCode::Tab);
        type_text(app, "34");
        press(app, KeyCode::Tab);
        press(app, KeyCode::Right); // male
        press(app, KeyCode::Tab);
        type_text(app, "9876543210");
        press(app, KeyCode::Tab);
        press(app, KeyCode::Right); // aadhar
        press(app, KeyCode::Tab);
        type_text(app, "123412341234");
        press(app, KeyCode::Tab);
    }

    #[test]
    fn test_renders_first_step() {
        let app = app();
        let content = screen(&app);

        assert!(content.contains("Form Validations"));
        assert!(content.contains("Personal Details"));
        assert!(content.contains("Name"));
        assert!(content.contains("Select Govt Issued ID Type"));
        assert!(content.contains("[ Next ]"));
        // No ID type chosen yet, so no ID input
        assert!(!content.contains("Aadhar Number"));
        // Nothing submitted, so no table
        assert!(!content.contains("Submitted Records"));
    }

    #[test]
    fn test_typing_updates_draft_and_shows_error() {
        let mut app = app();
        type_text(&mut app, "Al");

        assert_eq!(app.engine.value(Field::Name), "Al");
        assert!(screen(&app).contains("Name must be at least 3 characters long."));

        type_text(&mut app, "i");
        assert!(!screen(&app).contains("Name must be at least"));
    }

    #[test]
    fn test_id_input_appears_with_type_label() {
        let mut app = app();
        for _ in 0..4 {
            press(&mut app, KeyCode::Tab);
        }
        assert_eq!(app.focus(), Focus::Field(Field::IdType));

        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.engine.value(Field::IdType), "pan");
        assert!(screen(&app).contains("PAN Number"));

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus(), Focus::Field(Field::IdValue));
    }

    #[test]
    fn test_blocked_next_focuses_first_error() {
        let mut app = app();
        fill_personal(&mut app, "Kavya");

        // Break the mobile number, then try to advance from the Next button
        app.dispatch(Op::SetField {
            field: Field::Mobile,
            value: "12".to_string(),
        });
        app.focus_index = app.focus_targets().len() - 1;
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.engine.step(), Step::Personal);
        assert_eq!(app.focus(), Focus::Field(Field::Mobile));
        let status = app.status.clone().unwrap();
        assert_eq!(status.kind, StatusKind::Error);
    }

    #[test]
    fn test_full_submission_through_keyboard() {
        let mut app = app();
        fill_personal(&mut app, "Kavya");
        assert_eq!(app.focus(), Focus::Next);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.engine.step(), Step::Address);
        assert_eq!(app.focus(), Focus::Field(Field::Address));

        type_text(&mut app, "4 Lake View");
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        type_text(&mut app, "Bengaluru");

        app.handle_key_event(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));

        assert_eq!(app.engine.submissions().len(), 1);
        assert_eq!(app.engine.step(), Step::Personal);
        assert_eq!(app.focus_index, 0);
        assert_eq!(app.editor.input(), "");
        let status = app.status.clone().unwrap();
        assert_eq!(status.kind, StatusKind::Success);
        assert_eq!(status.text, "Saved record for Kavya");

        let content = screen(&app);
        assert!(content.contains("Submitted Records (1)"));
        assert!(content.contains("Bengaluru"));
    }

    #[test]
    fn test_previous_restores_values_into_editor() {
        let mut app = app();
        fill_personal(&mut app, "Kavya");
        press(&mut app, KeyCode::Enter);

        app.handle_key_event(KeyEvent::new(KeyCode::Char('p'), KeyModifiers::CONTROL));
        assert_eq!(app.engine.step(), Step::Personal);
        assert_eq!(app.editor.input(), "Kavya");
    }

    #[test]
    fn test_focus_wraps_around() {
        let mut app = app();
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focus(), Focus::Next);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus(), Focus::Field(Field::Name));
    }

    #[test]
    fn test_paste_into_text_field() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        app.handle_paste("98765\n43210");
        assert_eq!(app.engine.value(Field::Mobile), "9876543210");
    }

    #[test]
    fn test_hidden_submissions_table() {
        let config = GlobalConfig {
            show_submissions: false,
            validation_mode: ValidationMode::OnSubmit,
            ..GlobalConfig::default()
        };
        let mut app = App::new(&config);
        app.sync_editor();
        fill_personal(&mut app, "Kavya");
        press(&mut app, KeyCode::Enter);
        app.dispatch(Op::Submit);

        assert_eq!(app.engine.submissions().len(), 1);
        assert!(!screen(&app).contains("Submitted Records"));
    }

    #[test]
    fn test_escape_quits() {
        let mut app = app();
        assert!(!app.should_exit);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_exit);
    }
}
