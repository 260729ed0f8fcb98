//! Declarative validation schema for the form.
//!
//! The schema maps each [`Field`] to an ordered list of [`Rule`]s. A field
//! is valid when every rule passes; the message of the first failing rule is
//! the one surfaced to the user.

pub mod rules;

pub use rules::{parse_whole_number, Rule};

use sf_protocol::{Field, FieldError, FormDraft, IdType, Step};

/// Option keys accepted for `sex`.
pub const SEX_OPTIONS: &[&str] = &["male", "female"];

/// Option keys accepted for `idType`.
pub const ID_TYPE_OPTIONS: &[&str] = &["aadhar", "pan"];

/// Rules attached to a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub field: Field,
    pub rules: Vec<Rule>,
}

impl FieldSpec {
    pub fn new(field: Field, rules: Vec<Rule>) -> Self {
        Self { field, rules }
    }

    /// Fields whose value this field's rules read.
    pub fn dependencies(&self) -> impl Iterator<Item = Field> + '_ {
        self.rules.iter().filter_map(Rule::depends_on)
    }
}

/// The complete rule set, in field display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSchema {
    specs: Vec<FieldSpec>,
}

impl Default for FormSchema {
    fn default() -> Self {
        Self::standard()
    }
}

impl FormSchema {
    pub fn new(specs: Vec<FieldSpec>) -> Self {
        Self { specs }
    }

    /// The personal/address form's rules.
    ///
    /// Address fields carry no rules and are always valid.
    pub fn standard() -> Self {
        let aadhar = IdType::Aadhar;
        let pan = IdType::Pan;

        Self::new(vec![
            FieldSpec::new(
                Field::Name,
                vec![
                    Rule::Required {
                        message: "Name is required",
                    },
                    Rule::MinLength {
                        min: 3,
                        message: "Name must be at least 3 characters long.",
                    },
                ],
            ),
            FieldSpec::new(
                Field::Age,
                vec![
                    Rule::Required {
                        message: "Age is required",
                    },
                    Rule::Numeric {
                        message: "Age must be a number",
                    },
                    Rule::WholeNumber {
                        message: "Age must be a whole number",
                    },
                ],
            ),
            FieldSpec::new(
                Field::Sex,
                vec![
                    Rule::Required {
                        message: "Sex is required",
                    },
                    Rule::OneOf {
                        options: SEX_OPTIONS,
                        message: "Sex must be male or female",
                    },
                ],
            ),
            FieldSpec::new(
                Field::Mobile,
                vec![
                    Rule::Required {
                        message: "Mobile is required",
                    },
                    Rule::Digits {
                        count: 10,
                        message: "Mobile must be 10 digits.",
                    },
                ],
            ),
            FieldSpec::new(
                Field::IdType,
                vec![
                    Rule::Required {
                        message: "Govt Issued ID Type is required",
                    },
                    Rule::OneOf {
                        options: ID_TYPE_OPTIONS,
                        message: "Govt Issued ID Type must be aadhar or pan",
                    },
                ],
            ),
            FieldSpec::new(
                Field::IdValue,
                vec![
                    Rule::LengthWhen {
                        field: Field::IdType,
                        equals: aadhar.key(),
                        length: aadhar.id_length(),
                        message: "Invalid ID",
                    },
                    Rule::LengthWhen {
                        field: Field::IdType,
                        equals: pan.key(),
                        length: pan.id_length(),
                        message: "Invalid ID",
                    },
                ],
            ),
        ])
    }

    /// All field specs, in display order.
    pub fn specs(&self) -> &[FieldSpec] {
        &self.specs
    }

    /// Rules for one field, if it has any.
    pub fn spec(&self, field: Field) -> Option<&FieldSpec> {
        self.specs.iter().find(|spec| spec.field == field)
    }

    /// Validate one field against the draft.
    ///
    /// Returns the first failing rule's message.
    pub fn validate_field(&self, field: Field, draft: &FormDraft) -> Option<FieldError> {
        let spec = self.spec(field)?;
        let value = draft.get(field);

        spec.rules
            .iter()
            .find_map(|rule| rule.check(value, draft).err())
            .map(|message| FieldError::new(field, message))
    }

    /// Validate every field shown on `step`.
    pub fn validate_step(&self, step: Step, draft: &FormDraft) -> Vec<FieldError> {
        step.fields()
            .iter()
            .filter_map(|field| self.validate_field(*field, draft))
            .collect()
    }

    /// Validate the whole draft, step 1 first.
    pub fn validate_all(&self, draft: &FormDraft) -> Vec<FieldError> {
        Field::ALL
            .into_iter()
            .filter_map(|field| self.validate_field(field, draft))
            .collect()
    }

    pub fn is_step_valid(&self, step: Step, draft: &FormDraft) -> bool {
        step.fields()
            .iter()
            .all(|field| self.validate_field(*field, draft).is_none())
    }

    pub fn is_valid(&self, draft: &FormDraft) -> bool {
        Field::ALL
            .into_iter()
            .all(|field| self.validate_field(field, draft).is_none())
    }

    /// Fields that must be revalidated when `changed` changes.
    pub fn dependents(&self, changed: Field) -> Vec<Field> {
        self.specs
            .iter()
            .filter(|spec| spec.dependencies().any(|field| field == changed))
            .map(|spec| spec.field)
            .collect()
    }
}
