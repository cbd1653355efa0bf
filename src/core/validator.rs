//! Declarative field rules for the signup form.
//!
//! Every field owns an ordered list of rules in [`RULES`]; the first rule that
//! fails determines the message shown for that field. The same table backs
//! both per-field feedback and the aggregate validity check.

use crate::domain::model::{Field, SignupRequest};
use crate::utils::error::{Result, SignupError};
use regex::Regex;
use std::sync::OnceLock;

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 100;
pub const EMAIL_MAX_CHARS: usize = 255;
pub const PHONE_MAX_CHARS: usize = 20;

/// A single constraint: `check` returns true when the value is acceptable.
pub struct Rule {
    pub field: Field,
    pub check: fn(&SignupRequest) -> bool,
    pub message: &'static str,
}

pub static RULES: &[Rule] = &[
    Rule {
        field: Field::Name,
        check: |r| !r.name.is_empty(),
        message: "Name is required",
    },
    Rule {
        field: Field::Name,
        check: |r| r.name.chars().count() >= NAME_MIN_CHARS,
        message: "Name must be at least 2 characters",
    },
    Rule {
        field: Field::Name,
        check: |r| r.name.chars().count() <= NAME_MAX_CHARS,
        message: "Name must be less than 100 characters",
    },
    Rule {
        field: Field::Name,
        check: |r| name_pattern().is_match(&r.name),
        message: "Please enter a valid name",
    },
    Rule {
        field: Field::Email,
        check: |r| !r.email.is_empty(),
        message: "Email is required",
    },
    Rule {
        field: Field::Email,
        check: |r| is_email_shaped(&r.email),
        message: "Please enter a valid email address",
    },
    Rule {
        field: Field::Email,
        check: |r| r.email.chars().count() <= EMAIL_MAX_CHARS,
        message: "Email must be less than 255 characters",
    },
    Rule {
        field: Field::Phone,
        check: |r| !r.phone.is_empty(),
        message: "Phone number is required",
    },
    Rule {
        field: Field::Phone,
        check: |r| phone_pattern().is_match(&r.phone),
        message: "Please enter a valid phone number",
    },
    Rule {
        field: Field::Phone,
        check: |r| r.phone.chars().count() <= PHONE_MAX_CHARS,
        message: "Phone number must be less than 20 characters",
    },
    Rule {
        field: Field::GdprConsentAndUpdates,
        check: |r| r.gdpr_consent_and_updates,
        message: "You must consent to data processing and course updates to continue",
    },
];

fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[a-zA-ZäöüÄÖÜß\s'-]+$").expect("name pattern is a valid regex")
    })
}

fn phone_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\+?\(?[0-9\s()\-]{8,}$").expect("phone pattern is a valid regex")
    })
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)^[a-z0-9_'+.\-]*[a-z0-9_+\-]@(?:[a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$")
            .expect("email pattern is a valid regex")
    })
}

/// Local part may not start with a dot and no dot may be doubled.
fn is_email_shaped(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && email_pattern().is_match(email)
}

/// Per-field error messages, kept in field order. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<(Field, &'static str)>,
}

impl ValidationResult {
    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, message)| *message)
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.errors.iter().copied()
    }

    pub fn into_result(self) -> Result<()> {
        if self.is_valid() {
            return Ok(());
        }
        Err(SignupError::ValidationError {
            fields: self
                .errors
                .iter()
                .map(|(field, _)| field.as_str().to_string())
                .collect(),
        })
    }
}

/// First failing rule for `field`, if any.
pub fn validate_field(request: &SignupRequest, field: Field) -> Option<&'static str> {
    RULES
        .iter()
        .filter(|rule| rule.field == field)
        .find(|rule| !(rule.check)(request))
        .map(|rule| rule.message)
}

pub fn validate(request: &SignupRequest) -> ValidationResult {
    let errors = Field::ALL
        .iter()
        .filter_map(|&field| validate_field(request, field).map(|message| (field, message)))
        .collect();
    ValidationResult { errors }
}

/// Aggregate check used to gate the submit action.
pub fn is_submittable(request: &SignupRequest) -> bool {
    request.gdpr_consent_and_updates && validate(request).is_valid()
}
