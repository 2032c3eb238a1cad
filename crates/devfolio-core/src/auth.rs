//! Auth form validation
//!
//! Local checks run before any request leaves the client. Like profile
//! validation, only the first failing rule is surfaced.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// Minimum password length accepted at registration
const MIN_PASSWORD_LENGTH: usize = 6;

/// Which auth screen the form belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

/// State of the login/register form
#[derive(Debug, Clone, Default)]
pub struct AuthForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// First failing rule for an auth form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthFormError {
    #[error("Email and password are required")]
    MissingCredentials,

    #[error("Name is required")]
    MissingName,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Password must be at least {MIN_PASSWORD_LENGTH} characters long")]
    PasswordTooShort,
}

fn email_regex() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid")
    })
}

/// Check an auth form before submitting it
///
/// Login only needs credentials present. Registration additionally checks
/// the name, the email shape, and the password rules.
pub fn validate_auth_form(mode: AuthMode, form: &AuthForm) -> Result<(), AuthFormError> {
    if form.email.trim().is_empty() || form.password.is_empty() {
        return Err(AuthFormError::MissingCredentials);
    }

    if mode == AuthMode::Register {
        if form.name.trim().is_empty() {
            return Err(AuthFormError::MissingName);
        }
        if !email_regex().is_match(form.email.trim()) {
            return Err(AuthFormError::InvalidEmail);
        }
        if form.password != form.confirm_password {
            return Err(AuthFormError::PasswordMismatch);
        }
        if form.password.len() < MIN_PASSWORD_LENGTH {
            return Err(AuthFormError::PasswordTooShort);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_form() -> AuthForm {
        AuthForm {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "engine1843".to_string(),
            confirm_password: "engine1843".to_string(),
        }
    }

    #[test]
    fn test_login_needs_email_and_password() {
        let form = AuthForm {
            email: "ada@example.com".to_string(),
            ..Default::default()
        };
        assert_eq!(
            validate_auth_form(AuthMode::Login, &form),
            Err(AuthFormError::MissingCredentials)
        );

        let form = AuthForm {
            email: "ada@example.com".to_string(),
            password: "pw".to_string(),
            ..Default::default()
        };
        assert_eq!(validate_auth_form(AuthMode::Login, &form), Ok(()));
    }

    #[test]
    fn test_login_skips_register_rules() {
        // Short password and no name are fine for login
        let form = AuthForm {
            email: "ada@example.com".to_string(),
            password: "pw".to_string(),
            ..Default::default()
        };
        assert_eq!(validate_auth_form(AuthMode::Login, &form), Ok(()));
    }

    #[test]
    fn test_register_requires_name() {
        let mut form = register_form();
        form.name = "  ".to_string();
        assert_eq!(
            validate_auth_form(AuthMode::Register, &form),
            Err(AuthFormError::MissingName)
        );
    }

    #[test]
    fn test_register_rejects_malformed_email() {
        let mut form = register_form();
        form.email = "not-an-address".to_string();
        assert_eq!(
            validate_auth_form(AuthMode::Register, &form),
            Err(AuthFormError::InvalidEmail)
        );
    }

    #[test]
    fn test_register_rejects_password_mismatch() {
        let mut form = register_form();
        form.confirm_password = "different".to_string();
        assert_eq!(
            validate_auth_form(AuthMode::Register, &form),
            Err(AuthFormError::PasswordMismatch)
        );
    }

    #[test]
    fn test_register_rejects_short_password() {
        let mut form = register_form();
        form.password = "abc".to_string();
        form.confirm_password = "abc".to_string();
        assert_eq!(
            validate_auth_form(AuthMode::Register, &form),
            Err(AuthFormError::PasswordTooShort)
        );
    }

    #[test]
    fn test_register_accepts_valid_form() {
        assert_eq!(validate_auth_form(AuthMode::Register, &register_form()), Ok(()));
    }
}
