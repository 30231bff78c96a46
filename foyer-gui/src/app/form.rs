use std::sync::LazyLock;

use regex::Regex;

/// Permissive email shape check: something@something.tld, no whitespace.
/// Deliberately not RFC-exact.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid pattern"));

pub const MIN_PASSWORD_LEN: usize = 6;

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Invalid email format";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Email,
    Password,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Password => "password",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pub email: String,
    pub password: String,
}

/// Per-field validation messages. A field without an entry is currently
/// considered valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    email: Option<&'static str>,
    password: Option<&'static str>,
}

impl FormErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Email => self.email,
            Field::Password => self.password,
        }
    }

    pub fn insert(&mut self, field: Field, message: &'static str) {
        match field {
            Field::Email => self.email = Some(message),
            Field::Password => self.password = Some(message),
        }
    }

    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Email => self.email = None,
            Field::Password => self.password = None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

/// Check the whole form. Recomputes every field's error from scratch, so a
/// returned [`FormErrors`] never carries a stale entry for a field that
/// currently satisfies its rule.
pub fn validate(form: &FormData) -> FormErrors {
    let mut errors = FormErrors::default();

    if form.email.is_empty() {
        errors.insert(Field::Email, EMAIL_REQUIRED);
    } else if !EMAIL_PATTERN.is_match(&form.email) {
        errors.insert(Field::Email, EMAIL_INVALID);
    }

    if form.password.is_empty() {
        errors.insert(Field::Password, PASSWORD_REQUIRED);
    } else if form.password.chars().count() < MIN_PASSWORD_LEN {
        errors.insert(Field::Password, PASSWORD_TOO_SHORT);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(email: &str, password: &str) -> FormData {
        FormData {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn empty_email_is_required() {
        let errors = validate(&form("", "abcdef"));
        assert_eq!(errors.get(Field::Email), Some(EMAIL_REQUIRED));
        assert_eq!(errors.get(Field::Password), None);
    }

    #[test]
    fn email_pattern() {
        for email in [
            "plain",
            "no-at.com",
            "two@@at.com",
            "a@b",
            "spaces in@mail.com",
            "trailing@dot.",
            "@no-local.com",
        ] {
            let errors = validate(&form(email, "abcdef"));
            assert_eq!(errors.get(Field::Email), Some(EMAIL_INVALID), "{}", email);
        }
        for email in ["a@b.com", "first.last@sub.domain.org", "x+tag@y.co"] {
            let errors = validate(&form(email, "abcdef"));
            assert_eq!(errors.get(Field::Email), None, "{}", email);
        }
    }

    #[test]
    fn empty_password_is_required() {
        let errors = validate(&form("a@b.com", ""));
        assert_eq!(errors.get(Field::Password), Some(PASSWORD_REQUIRED));
        assert_eq!(errors.get(Field::Email), None);
    }

    #[test]
    fn password_length() {
        assert_eq!(
            validate(&form("a@b.com", "12345")).get(Field::Password),
            Some(PASSWORD_TOO_SHORT)
        );
        assert_eq!(
            validate(&form("a@b.com", "123456")).get(Field::Password),
            None
        );
        // Length is counted in chars, not bytes.
        assert_eq!(
            validate(&form("a@b.com", "éàçüöñ")).get(Field::Password),
            None
        );
    }

    #[test]
    fn valid_iff_both_fields_satisfy_their_rules() {
        assert!(validate(&form("a@b.com", "abcdef")).is_empty());
        assert!(!validate(&form("a@b.com", "123")).is_empty());
        assert!(!validate(&form("bad", "abcdef")).is_empty());
    }

    #[test]
    fn both_fields_invalid_reports_both() {
        let errors = validate(&form("bad", "123"));
        assert_eq!(errors.get(Field::Email), Some(EMAIL_INVALID));
        assert_eq!(errors.get(Field::Password), Some(PASSWORD_TOO_SHORT));
    }

    #[test]
    fn validate_is_deterministic() {
        let f = form("bad", "123");
        assert_eq!(validate(&f), validate(&f));
    }
}
