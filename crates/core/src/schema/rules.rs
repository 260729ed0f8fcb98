//! Validation rules.
//!
//! A [`Rule`] is a single predicate over a field's text value, paired with
//! the message shown when the predicate fails. Lengths are counted in
//! characters, not bytes.

use sf_protocol::{Field, FormDraft};
use std::fmt;

/// A single declarative validation rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// The value must not be empty.
    Required { message: &'static str },

    /// The value must be at least `min` characters long.
    MinLength { min: usize, message: &'static str },

    /// The value must parse as a finite number.
    Numeric { message: &'static str },

    /// The value must be a number with no fractional part, between zero and
    /// `u32::MAX`. `"1e1"` counts as ten.
    WholeNumber { message: &'static str },

    /// The value must be exactly `count` ASCII digits.
    Digits { count: usize, message: &'static str },

    /// The value must be one of `options`.
    OneOf {
        options: &'static [&'static str],
        message: &'static str,
    },

    /// When `field` holds `equals`, the value must be exactly `length`
    /// characters long. Otherwise the rule always passes.
    LengthWhen {
        field: Field,
        equals: &'static str,
        length: usize,
        message: &'static str,
    },
}

impl Rule {
    /// Check `value` against this rule.
    ///
    /// `draft` supplies the other fields for cross-field rules.
    pub fn check(&self, value: &str, draft: &FormDraft) -> Result<(), &'static str> {
        let passed = match self {
            Rule::Required { .. } => !value.is_empty(),
            Rule::MinLength { min, .. } => value.chars().count() >= *min,
            Rule::Numeric { .. } => value.parse::<f64>().is_ok_and(f64::is_finite),
            Rule::WholeNumber { .. } => parse_whole_number(value).is_some(),
            Rule::Digits { count, .. } => {
                value.chars().count() == *count && value.chars().all(|c| c.is_ascii_digit())
            }
            Rule::OneOf { options, .. } => options.iter().any(|option| *option == value),
            Rule::LengthWhen {
                field,
                equals,
                length,
                ..
            } => draft.get(*field) != *equals || value.chars().count() == *length,
        };

        if passed {
            Ok(())
        } else {
            Err(self.message())
        }
    }

    /// Message shown when this rule fails.
    pub fn message(&self) -> &'static str {
        match self {
            Rule::Required { message }
            | Rule::MinLength { message, .. }
            | Rule::Numeric { message }
            | Rule::WholeNumber { message }
            | Rule::Digits { message, .. }
            | Rule::OneOf { message, .. }
            | Rule::LengthWhen { message, .. } => *message,
        }
    }

    /// The other field this rule reads, if any.
    pub fn depends_on(&self) -> Option<Field> {
        match self {
            Rule::LengthWhen { field, .. } => Some(*field),
            _ => None,
        }
    }
}

/// Parse `value` as a number with no fractional part that fits in a `u32`.
pub fn parse_whole_number(value: &str) -> Option<u32> {
    let number = value.parse::<f64>().ok()?;
    let in_range = (0.0..=f64::from(u32::MAX)).contains(&number);
    // Range checked above, so the cast neither saturates nor truncates
    (in_range && number.fract() == 0.0).then_some(number as u32)
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Required { .. } => write!(f, "required"),
            Rule::MinLength { min, .. } => write!(f, "at least {min} characters"),
            Rule::Numeric { .. } => write!(f, "number"),
            Rule::WholeNumber { .. } => write!(f, "whole number"),
            Rule::Digits { count, .. } => write!(f, "exactly {count} digits"),
            Rule::OneOf { options, .. } => write!(f, "one of {}", options.join(" | ")),
            Rule::LengthWhen {
                field,
                equals,
                length,
                ..
            } => write!(f, "exactly {length} characters when {field} = {equals}"),
        }
    }
}
