use crossterm::event::{KeyCode, KeyEvent};

use crate::form::{FormCommand, FormEngine, FormEvent, SubmitOutcome};

use super::App;
use crate::app::{
    input::KeyAction,
    navigation::{Navigator, Screen},
    popup::PopupState,
    talent_screen::TalentActivation,
};

impl App {
    pub(super) fn handle_talent_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::FocusStep(delta) => {
                self.apply_date_draft();
                self.talent.focus_step(delta);
            }
            KeyAction::Submit => {
                self.apply_date_draft();
                self.dispatch_form_command(FormCommand::Submit);
            }
            KeyAction::ResetForm => self.dispatch_form_command(FormCommand::Reset),
            KeyAction::Back => self.navigate(Screen::Dashboard),
            KeyAction::Activate => {
                if !self.apply_date_draft() {
                    self.activate_talent_focus();
                }
            }
            KeyAction::Quit | KeyAction::ResetStatus => {}
        }
    }

    /// Applies a typed date on the focused slot. Returns whether there was one.
    fn apply_date_draft(&mut self) -> bool {
        match self.talent.take_date_draft() {
            Some(command) => {
                self.dispatch_form_command(command);
                true
            }
            None => false,
        }
    }

    pub(super) fn handle_talent_input(&mut self, key: &KeyEvent) {
        let Some(form) = self.form.as_ref() else {
            return;
        };
        if let Some(command) = self.talent.handle_input(form, key) {
            self.dispatch_form_command(command);
        } else {
            self.talent.sync(form);
        }
    }

    pub(super) fn handle_popup_key(&mut self, key: &KeyEvent) -> bool {
        let Some(popup) = self.popup.as_mut() else {
            return false;
        };
        match key.code {
            KeyCode::Esc => {
                self.popup = None;
                self.status.ready();
            }
            KeyCode::Up => popup.select_previous(),
            KeyCode::Down => popup.select_next(),
            KeyCode::Enter => {
                let field = popup.field();
                let value = popup.selection().unwrap_or_default().to_string();
                self.popup = None;
                self.dispatch_form_command(FormCommand::SetField { name: field, value });
            }
            _ => {}
        }
        true
    }

    fn activate_talent_focus(&mut self) {
        let Some(form) = self.form.as_ref() else {
            return;
        };
        match self.talent.activate(form) {
            TalentActivation::Command(command) => self.dispatch_form_command(command),
            TalentActivation::ChooseExperienceLevel => {
                let popup = PopupState::experience_level(form.state().experience_level());
                self.status.set_raw("Use ↑/↓ and Enter to choose");
                self.popup = Some(popup);
            }
            TalentActivation::Back => self.navigate(Screen::Dashboard),
            TalentActivation::None => {}
        }
    }

    pub(super) fn dispatch_form_command(&mut self, command: FormCommand) {
        let Some(form) = self.form.as_mut() else {
            return;
        };
        let outcome = FormEngine::new(form).dispatch(command);
        match outcome {
            Ok(FormEvent::Edited(name)) => self.status.editing(name.label()),
            Ok(FormEvent::SkillAdded(skill)) => {
                self.status.set_raw(format!("Skill '{skill}' added"))
            }
            Ok(FormEvent::SkillDuplicate(skill)) => {
                self.status.set_raw(format!("Skill '{skill}' is already selected"))
            }
            Ok(FormEvent::SkillRejected) => self.status.set_raw("Type a skill name first"),
            Ok(FormEvent::SkillToggled { skill, selected }) => {
                let verb = if selected { "Highlighted" } else { "Removed" };
                self.status.set_raw(format!("{verb} {skill}"));
            }
            Ok(FormEvent::Submitted(record)) => {
                self.submitted.push(record);
                self.status.submitted(self.options.reset_delay);
            }
            Ok(FormEvent::SubmitRejected(SubmitOutcome::ResetPending)) => {
                self.status.reset_pending()
            }
            Ok(FormEvent::SubmitRejected(_)) => self.status.issues_remaining(form.errors().len()),
            Ok(FormEvent::Cleared) => self.status.form_cleared(),
            Err(err) => self.status.set_raw(err.to_string()),
        }
        self.talent.sync(form);
    }

    #[cfg(test)]
    pub(crate) fn focus_talent_field_for_test(&mut self, name: crate::form::FieldName) {
        use crate::app::talent_screen::TalentFocus;
        for _ in 0..32 {
            if self.talent.focus() == TalentFocus::Field(name) {
                return;
            }
            self.talent.focus_step(1);
        }
    }
}
