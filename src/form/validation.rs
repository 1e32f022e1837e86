use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::state::FormState;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"));
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10,15}$").expect("phone pattern compiles"));

/// Keys of the validation error map, in rule order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorField {
    FirstName,
    LastName,
    Position,
    ExperienceLevel,
    Location,
    Email,
    PhoneNumber,
    Dates,
    Skills,
}

impl ErrorField {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorField::FirstName => "firstName",
            ErrorField::LastName => "lastName",
            ErrorField::Position => "position",
            ErrorField::ExperienceLevel => "experienceLevel",
            ErrorField::Location => "location",
            ErrorField::Email => "email",
            ErrorField::PhoneNumber => "phoneNumber",
            ErrorField::Dates => "dates",
            ErrorField::Skills => "skills",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ErrorField::FirstName => "First Name is required",
            ErrorField::LastName => "Last Name is required",
            ErrorField::Position => "Position is required",
            ErrorField::ExperienceLevel => "Experience Level is required",
            ErrorField::Location => "Location is required",
            ErrorField::Email => "Valid email is required",
            ErrorField::PhoneNumber => "Valid phone number is required",
            ErrorField::Dates => "Start date must be before end date",
            ErrorField::Skills => "At least one skill must be highlighted or added",
        }
    }
}

/// Field → message for every rule currently failing. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    entries: IndexMap<ErrorField, String>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, field: ErrorField) -> Option<&str> {
        self.entries.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: ErrorField) -> bool {
        self.entries.contains_key(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = ErrorField> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ErrorField, &str)> {
        self.entries
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }

    fn flag(&mut self, field: ErrorField) {
        self.entries.insert(field, field.message().to_string());
    }
}

pub fn is_valid_email(email: &str) -> bool {
    !email.trim().is_empty() && EMAIL_PATTERN.is_match(email)
}

pub fn is_valid_phone_number(number: &str) -> bool {
    !number.trim().is_empty() && PHONE_PATTERN.is_match(number)
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Evaluates every rule against `state` from scratch.
pub fn validate(state: &FormState) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    let required = [
        (ErrorField::FirstName, state.first_name()),
        (ErrorField::LastName, state.last_name()),
        (ErrorField::Position, state.position()),
        (ErrorField::ExperienceLevel, state.experience_level()),
        (ErrorField::Location, state.location()),
    ];
    for (field, value) in required {
        if is_blank(value) {
            errors.flag(field);
        }
    }
    if !is_valid_email(state.email()) {
        errors.flag(ErrorField::Email);
    }
    if !is_valid_phone_number(state.phone_number()) {
        errors.flag(ErrorField::PhoneNumber);
    }
    if state.start_date() >= state.end_date() {
        errors.flag(ErrorField::Dates);
    }
    if state.skills().is_empty() {
        errors.flag(ErrorField::Skills);
    }
    errors
}
