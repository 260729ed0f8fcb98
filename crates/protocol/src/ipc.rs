//! Form operation protocol.
//!
//! This module defines the message types exchanged between a front end
//! (the TUI, the CLI) and the form engine in `sf-core`.
//!
//! The protocol follows an Operation/Event pattern:
//! - `Op`: user actions sent to the engine
//! - `Event`: state changes the engine reports back
//!
//! Every `Op` is applied synchronously and yields zero or more `Event`s in
//! the order the state changed.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::form_models::{Field, FieldError, Step, Submission};

/// User actions applied to the form engine.
///
/// Uses tagged enum serialization:
/// ```json
/// {
///   "type": "setField",
///   "payload": { "field": "mobile", "value": "9876543210" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Op {
    /// Replace the value of a single input.
    SetField { field: Field, value: String },

    /// Advance from step 1 to step 2.
    ///
    /// Blocked while any step-1 field is invalid.
    NextStep,

    /// Go back from step 2 to step 1. Entered values are kept.
    PreviousStep,

    /// Submit the form from step 2.
    Submit,

    /// Discard the draft and return to step 1.
    Reset,

    /// Close the front end.
    Shutdown,
}

/// State changes reported by the form engine.
///
/// ```json
/// {
///   "type": "stepBlocked",
///   "payload": {
///     "step": "personal",
///     "errors": [{ "field": "name", "message": "Name is required" }]
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Event {
    /// A field's value changed and was revalidated.
    ///
    /// `error` is the message to display, if any. It is `None` both for a
    /// valid value and for an invalid value whose error is not yet shown.
    FieldChanged {
        field: Field,
        value: String,
        error: Option<String>,
    },

    /// The active step changed.
    StepChanged { step: Step },

    /// Advancing was refused because fields of `step` are invalid.
    StepBlocked { step: Step, errors: Vec<FieldError> },

    /// A record passed validation and was appended to the submission list.
    RecordSubmitted { submission: Submission },

    /// Submission was refused because the draft is invalid.
    SubmitRejected { errors: Vec<FieldError> },

    /// Submit was requested on a step that has no submit action.
    SubmitIgnored { step: Step },

    /// The draft was cleared back to its defaults.
    FormReset,

    /// The front end should close.
    ShutdownRequested,
}
