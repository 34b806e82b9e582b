use thiserror::Error;

/// Rejection reasons from the authentication service.
///
/// The display strings are the user-facing banner messages; the UI shows
/// them verbatim and recovery is always manual resubmission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Login credentials did not match a known account.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Registration was missing one or more required fields.
    #[error("Missing fields")]
    MissingFields,
}
