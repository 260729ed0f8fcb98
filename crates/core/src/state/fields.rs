//! Field bindings: each input's value, current error and visibility.
//!
//! Errors are recomputed for every field on every change so that step
//! validity is always current. Whether an error is *shown* is a separate
//! question answered by the touched set and the validation mode.

use crate::schema::FormSchema;
use sf_protocol::{Field, FormDraft, Step, ValidationMode};
use std::collections::BTreeMap;
use std::collections::BTreeSet;

/// Current values, errors and touched fields of the form.
#[derive(Debug, Clone, Default)]
pub struct FieldBindings {
    draft: FormDraft,
    errors: BTreeMap<Field, String>,
    touched: BTreeSet<Field>,
}

impl FieldBindings {
    /// Bindings for an empty draft, with errors already computed.
    pub fn new(schema: &FormSchema) -> Self {
        let mut bindings = Self::default();
        bindings.revalidate(schema);
        bindings
    }

    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    pub fn value(&self, field: Field) -> &str {
        self.draft.get(field)
    }

    /// Change a value and revalidate.
    ///
    /// In [`ValidationMode::OnChange`] the field becomes touched; in
    /// [`ValidationMode::OnSubmit`] it keeps whatever visibility it had.
    pub fn set_value(
        &mut self,
        schema: &FormSchema,
        mode: ValidationMode,
        field: Field,
        value: String,
    ) {
        self.draft.set(field, value);
        if mode == ValidationMode::OnChange {
            self.touched.insert(field);
        }
        self.revalidate(schema);
    }

    /// Mark every field of `step` as touched so its errors are shown.
    pub fn touch_step(&mut self, step: Step) {
        self.touched.extend(step.fields().iter().copied());
    }

    pub fn touch_all(&mut self) {
        self.touched.extend(Field::ALL);
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// The field's current error, whether or not it is shown.
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// The error to render under the field.
    pub fn visible_error(&self, field: Field) -> Option<&str> {
        if self.is_touched(field) {
            self.error(field)
        } else {
            None
        }
    }

    /// Clear the draft back to defaults and forget touched fields.
    pub fn reset(&mut self, schema: &FormSchema) {
        self.draft = FormDraft::default();
        self.touched.clear();
        self.revalidate(schema);
    }

    fn revalidate(&mut self, schema: &FormSchema) {
        self.errors = schema
            .validate_all(&self.draft)
            .into_iter()
            .map(|error| (error.field, error.message))
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_bindings_hide_errors() {
        let schema = FormSchema::standard();
        let bindings = FieldBindings::new(&schema);

        assert_eq!(bindings.error(Field::Name), Some("Name is required"));
        assert_eq!(bindings.visible_error(Field::Name), None);
    }

    #[test]
    fn test_on_change_shows_error_after_edit() {
        let schema = FormSchema::standard();
        let mut bindings = FieldBindings::new(&schema);

        bindings.set_value(&schema, ValidationMode::OnChange, Field::Mobile, "12345".into());

        assert_eq!(
            bindings.visible_error(Field::Mobile),
            Some("Mobile must be 10 digits.")
        );
        // Untouched fields stay quiet
        assert_eq!(bindings.visible_error(Field::Name), None);
    }

    #[test]
    fn test_on_submit_waits_for_touch() {
        let schema = FormSchema::standard();
        let mut bindings = FieldBindings::new(&schema);

        bindings.set_value(&schema, ValidationMode::OnSubmit, Field::Name, "Al".into());
        assert_eq!(bindings.visible_error(Field::Name), None);

        bindings.touch_step(Step::Personal);
        assert_eq!(
            bindings.visible_error(Field::Name),
            Some("Name must be at least 3 characters long.")
        );

        // Once shown, later changes revalidate
        bindings.set_value(&schema, ValidationMode::OnSubmit, Field::Name, "Ali".into());
        assert_eq!(bindings.visible_error(Field::Name), None);
        assert!(bindings.is_touched(Field::Name));
    }

    #[test]
    fn test_id_type_change_revalidates_id_value() {
        let schema = FormSchema::standard();
        let mut bindings = FieldBindings::new(&schema);
        let mode = ValidationMode::OnChange;

        bindings.set_value(&schema, mode, Field::IdValue, "ABCDE1234F".into());
        assert_eq!(bindings.error(Field::IdValue), None);

        bindings.set_value(&schema, mode, Field::IdType, "aadhar".into());
        assert_eq!(bindings.error(Field::IdValue), Some("Invalid ID"));

        bindings.set_value(&schema, mode, Field::IdType, "pan".into());
        assert_eq!(bindings.error(Field::IdValue), None);
    }

    #[test]
    fn test_reset_clears_values_and_touched() {
        let schema = FormSchema::standard();
        let mut bindings = FieldBindings::new(&schema);

        bindings.set_value(&schema, ValidationMode::OnChange, Field::City, "Pune".into());
        bindings.touch_all();
        bindings.reset(&schema);

        assert_eq!(bindings.draft(), &FormDraft::default());
        assert!(!bindings.is_touched(Field::City));
        assert_eq!(bindings.visible_error(Field::Name), None);
    }
}
