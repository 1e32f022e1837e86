use std::str::FromStr;

use super::error::FieldError;

/// Slots of the talent field store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    FirstName,
    LastName,
    Position,
    ExperienceLevel,
    Location,
    Email,
    PhoneNumber,
    StartDate,
    EndDate,
    DraftSkill,
}

impl FieldName {
    pub const ALL: [FieldName; 10] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Position,
        FieldName::ExperienceLevel,
        FieldName::Location,
        FieldName::Email,
        FieldName::PhoneNumber,
        FieldName::StartDate,
        FieldName::EndDate,
        FieldName::DraftSkill,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::FirstName => "firstName",
            FieldName::LastName => "lastName",
            FieldName::Position => "position",
            FieldName::ExperienceLevel => "experienceLevel",
            FieldName::Location => "location",
            FieldName::Email => "email",
            FieldName::PhoneNumber => "phoneNumber",
            FieldName::StartDate => "startDate",
            FieldName::EndDate => "endDate",
            FieldName::DraftSkill => "draftSkill",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldName::FirstName => "First Name",
            FieldName::LastName => "Last Name",
            FieldName::Position => "Position",
            FieldName::ExperienceLevel => "Experience Level",
            FieldName::Location => "Location",
            FieldName::Email => "Email",
            FieldName::PhoneNumber => "Phone Number",
            FieldName::StartDate => "Start Date",
            FieldName::EndDate => "End Date",
            FieldName::DraftSkill => "Add Skill",
        }
    }

    pub fn is_date(self) -> bool {
        matches!(self, FieldName::StartDate | FieldName::EndDate)
    }

    pub fn parse(raw: &str) -> Result<Self, FieldError> {
        FieldName::ALL
            .into_iter()
            .find(|name| name.as_str() == raw)
            .ok_or_else(|| FieldError::UnknownField(raw.to_string()))
    }
}

impl FromStr for FieldName {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::parse(s)
    }
}

impl std::fmt::Display for FieldName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
