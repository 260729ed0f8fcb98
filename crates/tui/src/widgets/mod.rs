//! Widgets that make up the form screen.

pub mod form_view;
pub mod select_field;
pub mod submissions_table;
pub mod text_field;

pub use form_view::{ButtonView, FieldInput, FieldRow, StepView};
pub use select_field::SelectField;
pub use text_field::TextField;
