//! Event handling utilities for the TUI.
//!
//! This module translates in both directions:
//! - Keyboard events into app commands
//! - Engine events into status line messages

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use sf_protocol::{Event, Op};

/// What a key press asks the app to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Leave the application.
    Quit,
    /// Move focus to the next field or button.
    FocusNext,
    /// Move focus to the previous field or button.
    FocusPrevious,
    /// Press the focused button, or advance past the focused field.
    Activate,
    /// Send an operation straight to the engine.
    Dispatch(Op),
    /// Hand the key to the focused input widget.
    Edit(KeyEvent),
}

/// Map a key press to a command.
///
/// Returns `None` for key releases and repeats.
pub fn handle_keyboard_event(key_event: KeyEvent) -> Option<Command> {
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
    let command = match key_event.code {
        KeyCode::Esc => Command::Quit,
        KeyCode::Char('c') if ctrl => Command::Quit,
        KeyCode::Char('n') if ctrl => Command::Dispatch(Op::NextStep),
        KeyCode::Char('p') if ctrl => Command::Dispatch(Op::PreviousStep),
        KeyCode::Char('s') if ctrl => Command::Dispatch(Op::Submit),
        KeyCode::Char('r') if ctrl => Command::Dispatch(Op::Reset),
        KeyCode::Tab | KeyCode::Down => Command::FocusNext,
        KeyCode::BackTab | KeyCode::Up => Command::FocusPrevious,
        KeyCode::Enter => Command::Activate,
        _ => Command::Edit(key_event),
    };
    Some(command)
}

/// Severity of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// One-line message shown under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusLine {
    fn new(kind: StatusKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Status message for an engine event, if it deserves one.
///
/// Field edits and resets stay silent; the field widgets already show them.
pub fn status_for(event: &Event) -> Option<StatusLine> {
    let status = match event {
        Event::StepChanged { step } => StatusLine::new(
            StatusKind::Info,
            format!("Step {}: {}", step.number(), step.title()),
        ),
        Event::StepBlocked { errors, .. } => StatusLine::new(
            StatusKind::Error,
            format!("Fix {} field(s) before continuing", errors.len()),
        ),
        Event::RecordSubmitted { submission } => StatusLine::new(
            StatusKind::Success,
            format!("Saved record for {}", submission.record.name),
        ),
        Event::SubmitRejected { errors } => StatusLine::new(
            StatusKind::Error,
            format!("Cannot submit: {} invalid field(s)", errors.len()),
        ),
        Event::SubmitIgnored { step } => StatusLine::new(
            StatusKind::Info,
            format!("Submit is not available on {step}"),
        ),
        Event::FieldChanged { .. } | Event::FormReset | Event::ShutdownRequested => {
            return None
        }
    };
    Some(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sf_protocol::{Field, FieldError, Step};

    #[test]
    fn test_quit_keys() {
        assert_eq!(
            handle_keyboard_event(KeyEvent::from(KeyCode::Esc)),
            Some(Command::Quit)
        );
        assert_eq!(
            handle_keyboard_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
    }

    #[test]
    fn test_navigation_keys() {
        for code in [KeyCode::Tab, KeyCode::Down] {
            assert_eq!(
                handle_keyboard_event(KeyEvent::from(code)),
                Some(Command::FocusNext)
            );
        }
        for code in [KeyCode::BackTab, KeyCode::Up] {
            assert_eq!(
                handle_keyboard_event(KeyEvent::from(code)),
                Some(Command::FocusPrevious)
            );
        }
        assert_eq!(
            handle_keyboard_event(KeyEvent::from(KeyCode::Enter)),
            Some(Command::Activate)
        );
    }

    #[test]
    fn test_control_shortcuts_dispatch_ops() {
        let ctrl = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);

        assert_eq!(
            handle_keyboard_event(ctrl('n')),
            Some(Command::Dispatch(Op::NextStep))
        );
        assert_eq!(
            handle_keyboard_event(ctrl('p')),
            Some(Command::Dispatch(Op::PreviousStep))
        );
        assert_eq!(
            handle_keyboard_event(ctrl('s')),
            Some(Command::Dispatch(Op::Submit))
        );
    }

    #[test]
    fn test_plain_characters_are_edits() {
        let key = KeyEvent::from(KeyCode::Char('n'));
        assert_eq!(handle_keyboard_event(key), Some(Command::Edit(key)));
    }

    #[test]
    fn test_release_is_ignored() {
        let mut key = KeyEvent::from(KeyCode::Enter);
        key.kind = KeyEventKind::Release;
        assert_eq!(handle_keyboard_event(key), None);
    }

    #[test]
    fn test_status_messages() {
        let blocked = Event::StepBlocked {
            step: Step::Personal,
            errors: vec![
                FieldError::new(Field::Name, "Name is required"),
                FieldError::new(Field::Age, "Age is required"),
            ],
        };
        let status = status_for(&blocked).unwrap();
        assert_eq!(status.kind, StatusKind::Error);
        assert_eq!(status.text, "Fix 2 field(s) before continuing");

        let moved = status_for(&Event::StepChanged {
            step: Step::Address,
        })
        .unwrap();
        assert_eq!(moved.text, "Step 2: Address Details");

        assert_eq!(status_for(&Event::FormReset), None);
    }
}
