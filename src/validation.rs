//! Pure field-level and aggregate validation for the registration form.
//!
//! Every predicate is stateless and side-effect free: the same input
//! always yields the same result.

use crate::state::FormValues;
use once_cell::sync::Lazy;
use regex::Regex;

// Standard local@domain pattern, also permitting quoted locals and
// bracketed IPv4 literals.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z0-9-]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("Failed to compile email regex")
});

// North-American NNN-NNN-NNNN layout with optional separators/parentheses
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\(?([0-9]{3})\)?[-. ]?([0-9]{3})[-. ]?([0-9]{4})$")
        .expect("Failed to compile phone regex")
});

/// Per-field pass/fail map produced by a validation pass.
/// The comment field is never validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationReport {
    pub username: bool,
    pub email: bool,
    pub phone: bool,
    pub age: bool,
    pub profession: bool,
    pub experience: bool,
}

impl ValidationReport {
    /// The form is only valid if every field entry passed
    pub fn is_valid(&self) -> bool {
        self.username && self.email && self.phone && self.age && self.profession && self.experience
    }
}

/// True iff the username is longer than 3 characters
pub fn validate_username(name: &str) -> bool {
    name.chars().count() > 3
}

/// True iff the value matches the anchored email pattern
pub fn validate_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// True iff the value matches the anchored phone pattern
pub fn validate_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}

/// True iff the value parses as an integer in the inclusive range [10, 25].
/// Non-numeric input is a validation failure.
pub fn validate_age(age: &str) -> bool {
    age.trim()
        .parse::<i64>()
        .is_ok_and(|n| (10..=25).contains(&n))
}

/// True iff the value is one of the accepted profession names
pub fn validate_profession(profession: &str) -> bool {
    matches!(profession, "school" | "college" | "trainee" | "employee")
}

/// True iff the experience level is strictly between 0 and 4
pub fn validate_experience(experience: u32) -> bool {
    experience > 0 && experience < 4
}

/// Apply all six field checks to a submission snapshot
pub fn validate_registration_form(values: &FormValues) -> ValidationReport {
    ValidationReport {
        username: validate_username(&values.username),
        email: validate_email(&values.email),
        phone: validate_phone(&values.phone),
        age: validate_age(&values.age),
        profession: validate_profession(&values.profession),
        experience: validate_experience(values.experience),
    }
}
