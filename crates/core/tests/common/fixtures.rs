//! Test fixtures for drafts and engines.

use sf_core::FormEngine;
use sf_protocol::ipc::{Event, Op};
use sf_protocol::{Field, FormDraft, Step};

/// A draft that passes every rule, using an Aadhar number.
pub fn valid_draft(name: &str) -> FormDraft {
    FormDraft {
        name: name.to_string(),
        age: "28".to_string(),
        sex: "female".to_string(),
        mobile: "9876543210".to_string(),
        id_type: "aadhar".to_string(),
        id_value: "123456789012".to_string(),
        address: "221B Residency Road".to_string(),
        state: "Karnataka".to_string(),
        city: "Bengaluru".to_string(),
        country: "India".to_string(),
        pincode: "560025".to_string(),
    }
}

/// Type every field of `step` from `draft` into the engine.
pub fn fill_step(engine: &mut FormEngine, draft: &FormDraft, step: Step) -> Vec<Event> {
    step.fields()
        .iter()
        .flat_map(|field| set_field(engine, *field, draft.get(*field)))
        .collect()
}

pub fn set_field(engine: &mut FormEngine, field: Field, value: &str) -> Vec<Event> {
    engine.apply(Op::SetField {
        field,
        value: value.to_string(),
    })
}

/// Fill both steps and submit; returns the events of the submit.
#[allow(dead_code)]
pub fn submit_draft(engine: &mut FormEngine, draft: &FormDraft) -> Vec<Event> {
    fill_step(engine, draft, Step::Personal);
    engine.apply(Op::NextStep);
    fill_step(engine, draft, Step::Address);
    engine.apply(Op::Submit)
}
