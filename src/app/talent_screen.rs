use crossterm::event::{KeyCode, KeyEvent};

use crate::form::{EXPERIENCE_LEVELS, FieldName, FormCommand, TalentForm};

use super::input::handle_text_edit;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TalentFocus {
    Field(FieldName),
    CatalogSkills,
    CustomSkills,
    Submit,
    Reset,
    Back,
}

const FOCUS_ORDER: [TalentFocus; 15] = [
    TalentFocus::Field(FieldName::FirstName),
    TalentFocus::Field(FieldName::LastName),
    TalentFocus::Field(FieldName::Position),
    TalentFocus::Field(FieldName::ExperienceLevel),
    TalentFocus::Field(FieldName::Location),
    TalentFocus::Field(FieldName::Email),
    TalentFocus::Field(FieldName::PhoneNumber),
    TalentFocus::Field(FieldName::StartDate),
    TalentFocus::Field(FieldName::EndDate),
    TalentFocus::Field(FieldName::DraftSkill),
    TalentFocus::CatalogSkills,
    TalentFocus::CustomSkills,
    TalentFocus::Submit,
    TalentFocus::Reset,
    TalentFocus::Back,
];

/// What Enter does on the focused element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TalentActivation {
    Command(FormCommand),
    ChooseExperienceLevel,
    Back,
    None,
}

/// View-side state of the talent screen: focus, chip cursors and half-typed
/// dates. Field values themselves live in the form.
#[derive(Debug, Clone, Default)]
pub(crate) struct TalentScreen {
    focus_index: usize,
    catalog_cursor: usize,
    custom_cursor: usize,
    date_drafts: [Option<String>; 2],
    generation: u64,
}

impl TalentScreen {
    pub(crate) fn focus(&self) -> TalentFocus {
        FOCUS_ORDER[self.focus_index]
    }

    pub(crate) fn focus_step(&mut self, delta: i32) {
        let len = FOCUS_ORDER.len() as i32;
        self.focus_index = (self.focus_index as i32 + delta).rem_euclid(len) as usize;
    }

    pub(crate) fn catalog_cursor(&self) -> usize {
        self.catalog_cursor
    }

    pub(crate) fn custom_cursor(&self) -> usize {
        self.custom_cursor
    }

    /// Drops drafts once the form has been replaced and keeps cursors in range.
    pub(crate) fn sync(&mut self, form: &TalentForm) {
        if form.generation() != self.generation {
            self.generation = form.generation();
            self.date_drafts = [None, None];
            self.custom_cursor = 0;
        }
        let view = form.skill_view();
        self.catalog_cursor = self
            .catalog_cursor
            .min(view.catalog.len().saturating_sub(1));
        self.custom_cursor = self.custom_cursor.min(view.custom.len().saturating_sub(1));
    }

    pub(crate) fn date_text(&self, form: &TalentForm, name: FieldName) -> String {
        date_slot(name)
            .and_then(|slot| self.date_drafts[slot].clone())
            .unwrap_or_else(|| form.state().display_value(name))
    }

    /// Typed date text that has not been applied to the form yet.
    pub(crate) fn date_draft_pending(&self, name: FieldName) -> bool {
        date_slot(name).is_some_and(|slot| self.date_drafts[slot].is_some())
    }

    /// Takes the focused slot's typed date as a command to apply it. Text
    /// that does not parse is dropped by the form with an error.
    pub(crate) fn take_date_draft(&mut self) -> Option<FormCommand> {
        let TalentFocus::Field(name) = self.focus() else {
            return None;
        };
        let slot = date_slot(name)?;
        let value = self.date_drafts[slot].take()?;
        Some(FormCommand::SetField { name, value })
    }

    pub(crate) fn activate(&self, form: &TalentForm) -> TalentActivation {
        match self.focus() {
            TalentFocus::Field(FieldName::ExperienceLevel) => {
                TalentActivation::ChooseExperienceLevel
            }
            TalentFocus::Field(FieldName::DraftSkill) => {
                TalentActivation::Command(FormCommand::AddDraftSkill)
            }
            // Enter in a text input submits the form.
            TalentFocus::Field(_) => TalentActivation::Command(FormCommand::Submit),
            TalentFocus::CatalogSkills => form
                .catalog()
                .get(self.catalog_cursor)
                .map(|skill| TalentActivation::Command(FormCommand::ToggleSkill(skill.to_string())))
                .unwrap_or(TalentActivation::None),
            TalentFocus::CustomSkills => form
                .skill_view()
                .custom
                .get(self.custom_cursor)
                .map(|skill| TalentActivation::Command(FormCommand::ToggleSkill(skill.to_string())))
                .unwrap_or(TalentActivation::None),
            TalentFocus::Submit => TalentActivation::Command(FormCommand::Submit),
            TalentFocus::Reset => TalentActivation::Command(FormCommand::Reset),
            TalentFocus::Back => TalentActivation::Back,
        }
    }

    /// Translates an editing key into a form command, if it produces one.
    pub(crate) fn handle_input(&mut self, form: &TalentForm, key: &KeyEvent) -> Option<FormCommand> {
        match self.focus() {
            TalentFocus::Field(FieldName::ExperienceLevel) => {
                let delta = match key.code {
                    KeyCode::Left => -1,
                    KeyCode::Right => 1,
                    _ => return None,
                };
                let value = cycle_level(form.state().experience_level(), delta);
                Some(FormCommand::SetField {
                    name: FieldName::ExperienceLevel,
                    value: value.to_string(),
                })
            }
            TalentFocus::Field(name) if name.is_date() => self.edit_date(form, name, key),
            TalentFocus::Field(name) => {
                let mut buffer = form.state().display_value(name);
                handle_text_edit(&mut buffer, key).then_some(FormCommand::SetField {
                    name,
                    value: buffer,
                })
            }
            TalentFocus::CatalogSkills => {
                let len = form.catalog().len();
                move_chip_cursor(&mut self.catalog_cursor, key, len)?;
                self.activate(form).into_command()
            }
            TalentFocus::CustomSkills => {
                let len = form.skill_view().custom.len();
                move_chip_cursor(&mut self.custom_cursor, key, len)?;
                self.activate(form).into_command()
            }
            TalentFocus::Submit | TalentFocus::Reset | TalentFocus::Back => None,
        }
    }

    fn edit_date(&mut self, form: &TalentForm, name: FieldName, key: &KeyEvent) -> Option<FormCommand> {
        let slot = date_slot(name)?;
        match key.code {
            KeyCode::Left | KeyCode::Right => {
                self.date_drafts[slot] = None;
                let days = if key.code == KeyCode::Left { -1 } else { 1 };
                Some(FormCommand::StepDate { name, days })
            }
            _ => {
                let mut draft = self.date_drafts[slot]
                    .clone()
                    .unwrap_or_else(|| form.state().display_value(name));
                if handle_text_edit(&mut draft, key) {
                    self.date_drafts[slot] = Some(draft);
                }
                None
            }
        }
    }
}

impl TalentActivation {
    fn into_command(self) -> Option<FormCommand> {
        match self {
            TalentActivation::Command(command) => Some(command),
            _ => None,
        }
    }
}

/// Moves a chip cursor on Left/Right. Returns `Some(())` when Space asks for
/// the chip under the cursor to be toggled.
fn move_chip_cursor(cursor: &mut usize, key: &KeyEvent, len: usize) -> Option<()> {
    match key.code {
        KeyCode::Left => {
            *cursor = cursor.saturating_sub(1);
            None
        }
        KeyCode::Right => {
            if *cursor + 1 < len {
                *cursor += 1;
            }
            None
        }
        KeyCode::Char(' ') => Some(()),
        _ => None,
    }
}

fn date_slot(name: FieldName) -> Option<usize> {
    match name {
        FieldName::StartDate => Some(0),
        FieldName::EndDate => Some(1),
        _ => None,
    }
}

/// Steps through the blank placeholder followed by the experience levels.
fn cycle_level(current: &str, delta: i32) -> &'static str {
    let choices: Vec<&'static str> = std::iter::once("").chain(EXPERIENCE_LEVELS).collect();
    let len = choices.len() as i32;
    let index = choices.iter().position(|c| *c == current).unwrap_or(0) as i32;
    choices[(index + delta).rem_euclid(len) as usize]
}
