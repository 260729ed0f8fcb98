//! Form data models.
//!
//! This module defines the structures shared by the form engine and every
//! front end:
//! - [`Field`]: the eleven keys of the form and where they live
//! - [`Step`]: the two sequential screens
//! - [`FormDraft`]: untyped, in-progress values as the user typed them
//! - [`Record`]: a completed, validated submission
//! - [`Submission`]: a record frozen into the submission list

use chrono::DateTime;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;
use uuid::Uuid;

/// One of the two sequential screens of the form.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "camelCase")]
pub enum Step {
    /// Step 1: name, age, sex, mobile and government ID.
    Personal,
    /// Step 2: postal address.
    Address,
}

impl Step {
    pub const ALL: [Step; 2] = [Step::Personal, Step::Address];

    /// One-based position of the step, as shown to the user.
    pub fn number(self) -> u8 {
        match self {
            Step::Personal => 1,
            Step::Address => 2,
        }
    }

    /// Heading rendered above the step's fields.
    pub fn title(self) -> &'static str {
        match self {
            Step::Personal => "Personal Details",
            Step::Address => "Address Details",
        }
    }

    /// Fields that belong to this step, in display order.
    pub fn fields(self) -> &'static [Field] {
        match self {
            Step::Personal => &[
                Field::Name,
                Field::Age,
                Field::Sex,
                Field::Mobile,
                Field::IdType,
                Field::IdValue,
            ],
            Step::Address => &[
                Field::Address,
                Field::State,
                Field::City,
                Field::Country,
                Field::Pincode,
            ],
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {} ({})", self.number(), self.title())
    }
}

/// Keys of every input on the form.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, TS,
)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Age,
    Sex,
    Mobile,
    IdType,
    IdValue,
    Address,
    State,
    City,
    Country,
    Pincode,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Field; 11] = [
        Field::Name,
        Field::Age,
        Field::Sex,
        Field::Mobile,
        Field::IdType,
        Field::IdValue,
        Field::Address,
        Field::State,
        Field::City,
        Field::Country,
        Field::Pincode,
    ];

    /// Wire name, matching the serialized form of [`FormDraft`] and [`Record`].
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Age => "age",
            Field::Sex => "sex",
            Field::Mobile => "mobile",
            Field::IdType => "idType",
            Field::IdValue => "idValue",
            Field::Address => "address",
            Field::State => "state",
            Field::City => "city",
            Field::Country => "country",
            Field::Pincode => "pincode",
        }
    }

    /// Human readable label; also used as the submissions table header.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Age => "Age",
            Field::Sex => "Sex",
            Field::Mobile => "Mobile",
            Field::IdType => "Govt Issued ID Type",
            Field::IdValue => "Govt Issued ID",
            Field::Address => "Address",
            Field::State => "State",
            Field::City => "City",
            Field::Country => "Country",
            Field::Pincode => "Pincode",
        }
    }

    /// The step on which this field is edited.
    pub fn step(self) -> Step {
        match self {
            Field::Name
            | Field::Age
            | Field::Sex
            | Field::Mobile
            | Field::IdType
            | Field::IdValue => Step::Personal,
            Field::Address | Field::State | Field::City | Field::Country | Field::Pincode => {
                Step::Address
            }
        }
    }

    /// Look a field up by its wire name.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Sex as offered by the form's dropdown.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, TS)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    pub fn key(self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }
}

/// Kind of government-issued identity document.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, TS)]
#[serde(rename_all = "lowercase")]
pub enum IdType {
    /// Aadhar number: 12 characters.
    Aadhar,
    /// PAN: 10 characters.
    Pan,
}

impl IdType {
    pub const ALL: [IdType; 2] = [IdType::Aadhar, IdType::Pan];

    pub fn key(self) -> &'static str {
        match self {
            IdType::Aadhar => "aadhar",
            IdType::Pan => "pan",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            IdType::Aadhar => "Aadhar",
            IdType::Pan => "PAN",
        }
    }

    /// Required length of the ID value for this document type.
    pub fn id_length(self) -> usize {
        match self {
            IdType::Aadhar => 12,
            IdType::Pan => 10,
        }
    }

    /// Label of the ID value input once this type is chosen.
    pub fn value_label(self) -> &'static str {
        match self {
            IdType::Aadhar => "Aadhar Number",
            IdType::Pan => "PAN Number",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key() == key)
    }
}

/// In-progress form values, exactly as entered.
///
/// Every field is text: `age` holds what was typed, `sex` and `idType` hold
/// an option key or the empty string while nothing is selected. The default
/// draft is all-empty.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, TS)]
#[serde(default, rename_all = "camelCase")]
pub struct FormDraft {
    pub name: String,
    pub age: String,
    pub sex: String,
    pub mobile: String,
    pub id_type: String,
    pub id_value: String,
    pub address: String,
    pub state: String,
    pub city: String,
    pub country: String,
    pub pincode: String,
}

impl FormDraft {
    /// Current value of a field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Age => &self.age,
            Field::Sex => &self.sex,
            Field::Mobile => &self.mobile,
            Field::IdType => &self.id_type,
            Field::IdValue => &self.id_value,
            Field::Address => &self.address,
            Field::State => &self.state,
            Field::City => &self.city,
            Field::Country => &self.country,
            Field::Pincode => &self.pincode,
        }
    }

    /// Replace the value of a field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Age => &mut self.age,
            Field::Sex => &mut self.sex,
            Field::Mobile => &mut self.mobile,
            Field::IdType => &mut self.id_type,
            Field::IdValue => &mut self.id_value,
            Field::Address => &mut self.address,
            Field::State => &mut self.state,
            Field::City => &mut self.city,
            Field::Country => &mut self.country,
            Field::Pincode => &mut self.pincode,
        };
        *slot = value.into();
    }

    /// The chosen ID type, if the `idType` value is a known option.
    pub fn id_type(&self) -> Option<IdType> {
        IdType::from_key(&self.id_type)
    }
}

/// A completed and validated form submission.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub name: String,
    pub age: u32,
    pub sex: Sex,
    pub mobile: String,
    pub id_type: IdType,
    pub id_value: String,
    pub address: String,
    pub state: String,
    pub city: String,
    pub country: String,
    pub pincode: String,
}

impl Record {
    /// Display value of a field, as rendered in the submissions table.
    pub fn display_value(&self, field: Field) -> String {
        match field {
            Field::Name => self.name.clone(),
            Field::Age => self.age.to_string(),
            Field::Sex => self.sex.key().to_string(),
            Field::Mobile => self.mobile.clone(),
            Field::IdType => self.id_type.key().to_string(),
            Field::IdValue => self.id_value.clone(),
            Field::Address => self.address.clone(),
            Field::State => self.state.clone(),
            Field::City => self.city.clone(),
            Field::Country => self.country.clone(),
            Field::Pincode => self.pincode.clone(),
        }
    }
}

/// A record frozen into the submission list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    /// Unique identifier assigned when the record was accepted.
    #[ts(type = "string")]
    pub id: Uuid,

    /// When the record was accepted.
    pub submitted_at: DateTime<Utc>,

    pub record: Record,
}

/// A field-level validation failure, rendered as helper text.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}
