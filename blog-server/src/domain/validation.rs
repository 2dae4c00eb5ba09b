//! Field-level input validation shared by the request schemas.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s.]+(\.[^@\s.]+)+$").expect("email pattern is valid")
});

pub const USERNAME_LEN: (usize, usize) = (3, 50);
pub const EMAIL_MAX_LEN: usize = 120;
pub const TITLE_LEN: (usize, usize) = (3, 100);
pub const CONTENT_LEN: (usize, usize) = (3, 10_000);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldError {
    pub fn new(loc: &[&str], msg: impl Into<String>, kind: &str) -> Self {
        Self {
            loc: loc.iter().map(|s| s.to_string()).collect(),
            msg: msg.into(),
            kind: kind.to_string(),
        }
    }

    fn body(field: &str, msg: impl Into<String>, kind: &str) -> Self {
        Self::new(&["body", field], msg, kind)
    }
}

/// Ordered list of every field that failed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(error: FieldError) -> Self {
        Self(vec![error])
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// Returns `value` when nothing was recorded, the collected errors otherwise.
    pub fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<String> = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.loc.join("."), e.msg))
            .collect();
        write!(f, "{}", fields.join("; "))
    }
}

/// Records a "missing" error when a required field is absent.
pub fn required<T>(field: &str, value: Option<T>, errors: &mut ValidationErrors) -> Option<T> {
    if value.is_none() {
        errors.push(FieldError::body(field, "Field required", "missing"));
    }
    value
}

/// Checks the character count of `value` against `(min, max)`.
pub fn check_length(field: &str, value: &str, (min, max): (usize, usize), errors: &mut ValidationErrors) {
    let len = value.chars().count();
    if len < min {
        errors.push(FieldError::body(
            field,
            format!("String should have at least {} characters", min),
            "string_too_short",
        ));
    } else if len > max {
        errors.push(FieldError::body(
            field,
            format!("String should have at most {} characters", max),
            "string_too_long",
        ));
    }
}

pub fn check_email(field: &str, value: &str, errors: &mut ValidationErrors) {
    if value.chars().count() > EMAIL_MAX_LEN {
        errors.push(FieldError::body(
            field,
            format!("String should have at most {} characters", EMAIL_MAX_LEN),
            "string_too_long",
        ));
    } else if !EMAIL_RE.is_match(value) {
        errors.push(FieldError::body(
            field,
            "value is not a valid email address",
            "value_error",
        ));
    }
}
