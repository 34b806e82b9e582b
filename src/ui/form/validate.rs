//! Synchronous field validation.
//!
//! All violations are reported at once; validation never short-circuits
//! on the first failure.

use crate::ui::form::state::{FormMode, FormState, ValidationErrors};

const MIN_PASSWORD_LEN: usize = 6;

/// Check every field against the rules for the current mode.
pub fn validate(state: &FormState) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if state.email.is_empty() {
        errors.email = Some("Email is required");
    } else if !is_plausible_email(&state.email) {
        errors.email = Some("Invalid email format");
    }

    if state.password.is_empty() {
        errors.password = Some("Password is required");
    } else if state.password.chars().count() < MIN_PASSWORD_LEN {
        errors.password = Some("Password must be at least 6 characters");
    }

    // The name field only exists in Register mode.
    if state.mode == FormMode::Register && state.name.is_empty() {
        errors.name = Some("Name is required");
    }

    errors
}

/// Shape check only: one `@`, a dotted domain, no whitespace. Real
/// address validation belongs to whatever backend this UI ends up in
/// front of.
fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::is_plausible_email;

    #[test]
    fn accepts_ordinary_addresses() {
        assert!(is_plausible_email("user@example.com"));
        assert!(is_plausible_email("a@b.co"));
        assert!(is_plausible_email("first.last@sub.domain.org"));
    }

    #[test]
    fn rejects_missing_at_or_domain_dot() {
        assert!(!is_plausible_email("userexample.com"));
        assert!(!is_plausible_email("user@example"));
        assert!(!is_plausible_email("user@"));
        assert!(!is_plausible_email("@example.com"));
    }

    #[test]
    fn rejects_whitespace_and_double_at() {
        assert!(!is_plausible_email("us er@example.com"));
        assert!(!is_plausible_email("user@@example.com"));
        assert!(!is_plausible_email("user@exa@mple.com"));
    }

    #[test]
    fn rejects_empty_domain_parts() {
        assert!(!is_plausible_email("user@.com"));
        assert!(!is_plausible_email("user@example."));
    }
}
