//! Conversion from untyped drafts to typed records.

use crate::error::{RecordError, RecordResult};
use crate::schema::{parse_whole_number, FormSchema};
use serde_json::Value;
use sf_protocol::{Field, FormDraft, IdType, Record, Sex};

/// Validate `draft` against `schema` and convert it into a [`Record`].
///
/// # Errors
///
/// Returns [`RecordError::Invalid`] with every field error when the draft
/// fails validation.
pub fn build_record(schema: &FormSchema, draft: &FormDraft) -> RecordResult<Record> {
    let errors = schema.validate_all(draft);
    if !errors.is_empty() {
        return Err(RecordError::Invalid { errors });
    }

    let age = parse_whole_number(&draft.age).ok_or_else(|| unconvertible(Field::Age, &draft.age))?;
    let sex = Sex::from_key(&draft.sex).ok_or_else(|| unconvertible(Field::Sex, &draft.sex))?;
    let id_type = IdType::from_key(&draft.id_type)
        .ok_or_else(|| unconvertible(Field::IdType, &draft.id_type))?;

    Ok(Record {
        name: draft.name.clone(),
        age,
        sex,
        mobile: draft.mobile.clone(),
        id_type,
        id_value: draft.id_value.clone(),
        address: draft.address.clone(),
        state: draft.state.clone(),
        city: draft.city.clone(),
        country: draft.country.clone(),
        pincode: draft.pincode.clone(),
    })
}

fn unconvertible(field: Field, value: &str) -> RecordError {
    RecordError::Unconvertible {
        field,
        value: value.to_string(),
    }
}

/// Read a draft from a JSON object.
///
/// Keys are the fields' wire names; missing keys stay empty and unknown keys
/// are ignored. Numbers and booleans are accepted and kept as their text, so
/// `"age": 34` and `"age": "34"` are equivalent.
pub fn draft_from_json(value: &Value) -> RecordResult<FormDraft> {
    let object = value.as_object().ok_or_else(|| RecordError::Malformed {
        reason: "expected a JSON object".to_string(),
    })?;

    let mut draft = FormDraft::default();
    for field in Field::ALL {
        let text = match object.get(field.key()) {
            None | Some(Value::Null) => continue,
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            Some(_) => {
                return Err(RecordError::Malformed {
                    reason: format!("field {field} must be a string or a number"),
                })
            }
        };
        draft.set(field, text);
    }

    Ok(draft)
}
