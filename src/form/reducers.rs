use chrono::Days;

use super::{
    actions::FormCommand,
    error::FieldError,
    field::FieldName,
    record::TalentRecord,
    skills::AddOutcome,
    talent::{SubmitOutcome, TalentForm},
};

/// What a dispatched command changed, for the caller's status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Edited(FieldName),
    SkillAdded(String),
    /// The skill was already selected; the draft box was still cleared.
    SkillDuplicate(String),
    SkillRejected,
    SkillToggled { skill: String, selected: bool },
    Submitted(TalentRecord),
    SubmitRejected(SubmitOutcome),
    Cleared,
}

pub struct FormEngine<'a> {
    form: &'a mut TalentForm,
}

impl<'a> FormEngine<'a> {
    pub fn new(form: &'a mut TalentForm) -> Self {
        Self { form }
    }

    pub fn dispatch(&mut self, command: FormCommand) -> Result<FormEvent, FieldError> {
        match command {
            FormCommand::SetField { name, value } => {
                self.form.set_field(name, value)?;
                Ok(FormEvent::Edited(name))
            }
            FormCommand::StepDate { name, days } => self.step_date(name, days),
            FormCommand::AddDraftSkill => {
                let draft = self.form.state().draft_skill().trim().to_string();
                Ok(match self.form.commit_draft_skill() {
                    AddOutcome::Added => FormEvent::SkillAdded(draft),
                    AddOutcome::Duplicate => FormEvent::SkillDuplicate(draft),
                    AddOutcome::Empty => FormEvent::SkillRejected,
                })
            }
            FormCommand::ToggleSkill(skill) => {
                let selected = self.form.toggle_skill(&skill);
                Ok(FormEvent::SkillToggled { skill, selected })
            }
            FormCommand::Submit => match self.form.submit() {
                SubmitOutcome::Accepted(record) => Ok(FormEvent::Submitted(record)),
                rejected => Ok(FormEvent::SubmitRejected(rejected)),
            },
            FormCommand::Reset => {
                self.form.reset();
                Ok(FormEvent::Cleared)
            }
        }
    }

    fn step_date(&mut self, name: FieldName, days: i64) -> Result<FormEvent, FieldError> {
        let state = self.form.state();
        let current = match name {
            FieldName::StartDate => state.start_date(),
            FieldName::EndDate => state.end_date(),
            other => return Err(FieldError::NotADate(other.as_str())),
        };
        let shift = Days::new(days.unsigned_abs());
        let next = if days >= 0 {
            current.checked_add_days(shift)
        } else {
            current.checked_sub_days(shift)
        };
        let Some(next) = next else {
            return Ok(FormEvent::Edited(name));
        };
        if name == FieldName::StartDate {
            self.form.set_start_date(next);
        } else {
            self.form.set_end_date(next);
        }
        Ok(FormEvent::Edited(name))
    }
}
