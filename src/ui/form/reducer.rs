use crate::ui::form::intent::FormIntent;
use crate::ui::form::state::{FormState, ValidationErrors};
use crate::ui::form::validate::validate;
use crate::ui::mvi::Reducer;

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::SetField { field, value } => {
                if state.is_loading {
                    return state;
                }
                let mut state = state;
                *state.field_mut(field) = value;
                state
            }
            FormIntent::TypeChar(ch) => {
                if state.is_loading || ch.is_control() {
                    return state;
                }
                let mut state = state;
                state.field_mut(state.focused).push(ch);
                state
            }
            FormIntent::DeleteChar => {
                if state.is_loading {
                    return state;
                }
                let mut state = state;
                state.field_mut(state.focused).pop();
                state
            }
            FormIntent::FocusNext => move_focus(state, 1),
            FormIntent::FocusPrev => move_focus(state, -1),
            FormIntent::SwitchMode(mode) => {
                if state.is_loading {
                    return state;
                }
                // Everything resets, including when re-selecting the
                // current mode's tab.
                FormState::for_mode(mode)
            }
            FormIntent::Submit => {
                if state.is_loading {
                    return state;
                }
                let errors = validate(&state);
                let valid = errors.is_empty();
                FormState {
                    validation_errors: errors,
                    submission_error: None,
                    is_loading: valid,
                    ..state
                }
            }
            FormIntent::SubmitSucceeded => FormState {
                validation_errors: ValidationErrors::default(),
                submission_error: None,
                is_loading: false,
                ..state
            },
            FormIntent::SubmitFailed { message } => FormState {
                submission_error: Some(message),
                is_loading: false,
                ..state
            },
        }
    }
}

fn move_focus(state: FormState, direction: i32) -> FormState {
    if state.is_loading {
        return state;
    }

    let fields = state.mode.fields();
    let current = fields
        .iter()
        .position(|field| *field == state.focused)
        .unwrap_or(0);
    let next = if direction.is_negative() {
        if current == 0 {
            fields.len() - 1
        } else {
            current - 1
        }
    } else if current + 1 >= fields.len() {
        0
    } else {
        current + 1
    };

    FormState {
        focused: fields[next],
        ..state
    }
}
