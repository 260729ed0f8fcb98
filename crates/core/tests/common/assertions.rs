//! Custom assertion helpers for form events.

use sf_protocol::ipc::Event;
use sf_protocol::{Field, Step};

/// Whether the events contain a `StepChanged` to `step`.
pub fn has_step_changed(events: &[Event], step: Step) -> bool {
    events
        .iter()
        .any(|e| matches!(e, Event::StepChanged { step: s } if *s == step))
}

/// The visible error reported for `field` by the last `FieldChanged` event.
pub fn last_field_error(events: &[Event], field: Field) -> Option<String> {
    events.iter().rev().find_map(|e| match e {
        Event::FieldChanged {
            field: f, error, ..
        } if *f == field => Some(error.clone()),
        _ => None,
    })?
}

/// Fields listed in the first `StepBlocked` or `SubmitRejected` event.
pub fn rejected_fields(events: &[Event]) -> Vec<Field> {
    events
        .iter()
        .find_map(|e| match e {
            Event::StepBlocked { errors, .. } | Event::SubmitRejected { errors } => {
                Some(errors.iter().map(|error| error.field).collect())
            }
            _ => None,
        })
        .unwrap_or_default()
}

/// Assert that a submit produced exactly: submitted, reset, back to step 1.
pub fn assert_submit_sequence(events: &[Event]) {
    assert_eq!(events.len(), 3, "unexpected submit events: {events:?}");
    assert!(
        matches!(events[0], Event::RecordSubmitted { .. }),
        "first event should be RecordSubmitted, got: {:?}",
        events[0]
    );
    assert_eq!(events[1], Event::FormReset);
    assert_eq!(
        events[2],
        Event::StepChanged {
            step: Step::Personal
        }
    );
}
