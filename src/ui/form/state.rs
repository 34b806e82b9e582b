use crate::ui::mvi::UiState;

/// Which configuration the form is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Login,
    Register,
}

impl FormMode {
    pub fn toggled(self) -> Self {
        match self {
            FormMode::Login => FormMode::Register,
            FormMode::Register => FormMode::Login,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormMode::Login => "Login",
            FormMode::Register => "Register",
        }
    }

    /// Fields shown in this mode, in focus order.
    pub fn fields(&self) -> &'static [FormField] {
        match self {
            FormMode::Login => &[FormField::Email, FormField::Password],
            FormMode::Register => &[FormField::Name, FormField::Email, FormField::Password],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Password,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Password => "Password",
        }
    }
}

/// Per-field validation messages, recomputed wholesale on every submit
/// attempt. Never merged with a previous set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password.is_none()
    }

    pub fn get(&self, field: FormField) -> Option<&'static str> {
        match field {
            FormField::Name => self.name,
            FormField::Email => self.email,
            FormField::Password => self.password,
        }
    }
}

/// State of the login/register form screen.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub mode: FormMode,
    pub name: String,
    pub email: String,
    pub password: String,
    pub focused: FormField,
    pub validation_errors: ValidationErrors,
    /// Banner message from a failed service call.
    pub submission_error: Option<String>,
    /// True only while a submission is in flight. Gates edits, mode
    /// switches, and further submits.
    pub is_loading: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self::for_mode(FormMode::Login)
    }
}

impl UiState for FormState {}

impl FormState {
    /// Fresh form for the given mode: empty fields, no errors, focus on
    /// the first field.
    pub fn for_mode(mode: FormMode) -> Self {
        Self {
            mode,
            name: String::new(),
            email: String::new(),
            password: String::new(),
            focused: mode.fields()[0],
            validation_errors: ValidationErrors::default(),
            submission_error: None,
            is_loading: false,
        }
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Password => &self.password,
        }
    }

    pub(crate) fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Password => &mut self.password,
        }
    }
}
