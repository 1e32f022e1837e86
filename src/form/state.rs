use chrono::NaiveDate;

use super::{error::FieldError, field::FieldName, skills::SkillSet};

pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Current values of every talent input.
///
/// Setters are crate-private: outside callers mutate through
/// [`TalentForm`](super::TalentForm) so every change is followed by a full
/// re-validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    first_name: String,
    last_name: String,
    position: String,
    experience_level: String,
    location: String,
    email: String,
    phone_number: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    skills: SkillSet,
    draft_skill: String,
}

impl FormState {
    pub fn fresh(today: NaiveDate) -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            position: String::new(),
            experience_level: String::new(),
            location: String::new(),
            email: String::new(),
            phone_number: String::new(),
            start_date: today,
            end_date: today,
            skills: SkillSet::new(),
            draft_skill: String::new(),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn experience_level(&self) -> &str {
        &self.experience_level
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn skills(&self) -> &SkillSet {
        &self.skills
    }

    pub fn draft_skill(&self) -> &str {
        &self.draft_skill
    }

    /// Text value of a slot. Date slots render as `YYYY-MM-DD`.
    pub fn display_value(&self, name: FieldName) -> String {
        match name {
            FieldName::StartDate => self.start_date.format(DATE_INPUT_FORMAT).to_string(),
            FieldName::EndDate => self.end_date.format(DATE_INPUT_FORMAT).to_string(),
            other => self.text_slot(other).map(str::to_string).unwrap_or_default(),
        }
    }

    fn text_slot(&self, name: FieldName) -> Option<&str> {
        let value = match name {
            FieldName::FirstName => &self.first_name,
            FieldName::LastName => &self.last_name,
            FieldName::Position => &self.position,
            FieldName::ExperienceLevel => &self.experience_level,
            FieldName::Location => &self.location,
            FieldName::Email => &self.email,
            FieldName::PhoneNumber => &self.phone_number,
            FieldName::DraftSkill => &self.draft_skill,
            FieldName::StartDate | FieldName::EndDate => return None,
        };
        Some(value)
    }

    fn text_slot_mut(&mut self, name: FieldName) -> Option<&mut String> {
        let value = match name {
            FieldName::FirstName => &mut self.first_name,
            FieldName::LastName => &mut self.last_name,
            FieldName::Position => &mut self.position,
            FieldName::ExperienceLevel => &mut self.experience_level,
            FieldName::Location => &mut self.location,
            FieldName::Email => &mut self.email,
            FieldName::PhoneNumber => &mut self.phone_number,
            FieldName::DraftSkill => &mut self.draft_skill,
            FieldName::StartDate | FieldName::EndDate => return None,
        };
        Some(value)
    }

    /// Replaces one slot. Date slots expect `YYYY-MM-DD` and are left untouched
    /// when the input does not parse.
    pub(crate) fn set(&mut self, name: FieldName, value: &str) -> Result<(), FieldError> {
        if let Some(slot) = self.text_slot_mut(name) {
            *slot = value.to_string();
            return Ok(());
        }
        let date = parse_date(name, value)?;
        match name {
            FieldName::StartDate => self.start_date = date,
            _ => self.end_date = date,
        }
        Ok(())
    }

    pub(crate) fn set_start_date(&mut self, date: NaiveDate) {
        self.start_date = date;
    }

    pub(crate) fn set_end_date(&mut self, date: NaiveDate) {
        self.end_date = date;
    }

    pub(crate) fn skills_mut(&mut self) -> &mut SkillSet {
        &mut self.skills
    }

    pub(crate) fn set_draft_skill(&mut self, draft: &str) {
        self.draft_skill = draft.to_string();
    }

    pub(crate) fn clear_draft_skill(&mut self) {
        self.draft_skill.clear();
    }
}

pub fn parse_date(name: FieldName, input: &str) -> Result<NaiveDate, FieldError> {
    NaiveDate::parse_from_str(input.trim(), DATE_INPUT_FORMAT).map_err(|_| {
        FieldError::InvalidDate {
            field: name.as_str(),
            input: input.to_string(),
        }
    })
}
