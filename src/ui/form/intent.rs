use crate::ui::form::state::{FormField, FormMode};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FormIntent {
    /// Replace one field's value. No validation side effect.
    SetField { field: FormField, value: String },
    /// Append a character to the focused field.
    TypeChar(char),
    /// Remove the last character of the focused field.
    DeleteChar,
    FocusNext,
    FocusPrev,
    /// Reset to the given mode, clearing all fields and errors.
    /// Blocked while a submission is in flight.
    SwitchMode(FormMode),
    /// Revalidate; on success enter the loading state. The service call
    /// itself is the caller's job once the state reports loading.
    Submit,
    SubmitSucceeded,
    SubmitFailed { message: String },
}

impl Intent for FormIntent {}
