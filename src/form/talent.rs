use std::{sync::Arc, time::Duration};

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::clock::Clock;

use super::{
    error::FieldError,
    field::FieldName,
    record::TalentRecord,
    skills::{AddOutcome, SkillCatalog, SkillView, partition},
    state::FormState,
    timer::ResetTimer,
    validation::{ValidationErrors, validate},
};

pub const SUCCESS_MESSAGE: &str = "Talent successfully added!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(TalentRecord),
    /// At least one rule fails; nothing was emitted or scheduled.
    Invalid,
    /// A previous submission is still waiting for its auto-reset.
    ResetPending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Editing,
    SuccessDisplay,
}

/// One mounted talent-intake form.
///
/// Every mutation re-derives the complete error map, so `errors()` and
/// `is_valid()` always describe the current values. After an accepted
/// submission the form clears itself once the reset delay has elapsed, driven
/// by [`TalentForm::tick`]; a manual [`TalentForm::reset`] cancels that.
pub struct TalentForm {
    state: FormState,
    catalog: SkillCatalog,
    errors: ValidationErrors,
    success_message: Option<String>,
    timer: ResetTimer,
    clock: Arc<dyn Clock>,
    /// Calendar day the current state's default dates were taken from.
    defaults_day: NaiveDate,
    generation: u64,
}

impl TalentForm {
    pub fn new(catalog: SkillCatalog, clock: Arc<dyn Clock>) -> Self {
        let defaults_day = clock.today();
        let state = FormState::fresh(defaults_day);
        let errors = validate(&state);
        Self {
            state,
            catalog,
            errors,
            success_message: None,
            timer: ResetTimer::default(),
            clock,
            defaults_day,
            generation: 0,
        }
    }

    pub fn with_reset_delay(mut self, delay: Duration) -> Self {
        self.timer = ResetTimer::new(delay);
        self
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn catalog(&self) -> &SkillCatalog {
        &self.catalog
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn skill_view(&self) -> SkillView<'_> {
        partition(&self.catalog, self.state.skills())
    }

    pub fn success_message(&self) -> Option<&str> {
        self.success_message.as_deref()
    }

    pub fn phase(&self) -> Phase {
        if self.success_message.is_some() {
            Phase::SuccessDisplay
        } else {
            Phase::Editing
        }
    }

    pub fn is_reset_pending(&self) -> bool {
        self.timer.is_pending()
    }

    pub fn reset_remaining(&self) -> Option<Duration> {
        self.timer.remaining(self.clock.now())
    }

    /// True while every slot still holds its default value.
    pub fn is_pristine(&self) -> bool {
        self.state == FormState::fresh(self.defaults_day)
    }

    /// Bumped every time the state is replaced by a fresh one.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn set_field(&mut self, name: FieldName, value: impl AsRef<str>) -> Result<(), FieldError> {
        self.state.set(name, value.as_ref())?;
        self.revalidate();
        Ok(())
    }

    pub fn set_start_date(&mut self, date: NaiveDate) {
        self.state.set_start_date(date);
        self.revalidate();
    }

    pub fn set_end_date(&mut self, date: NaiveDate) {
        self.state.set_end_date(date);
        self.revalidate();
    }

    /// Places `draft` in the add-skill box and commits it.
    pub fn add_skill(&mut self, draft: impl AsRef<str>) -> AddOutcome {
        self.state.set_draft_skill(draft.as_ref());
        self.commit_draft_skill()
    }

    /// Adds the trimmed add-skill box content. A blank box is left as typed.
    pub fn commit_draft_skill(&mut self) -> AddOutcome {
        let draft = self.state.draft_skill().to_string();
        let outcome = self.state.skills_mut().add(&draft);
        if outcome.clears_draft() {
            self.state.clear_draft_skill();
        }
        debug!(?outcome, "add skill");
        self.revalidate();
        outcome
    }

    /// Selects or deselects `skill`; returns whether it is selected afterwards.
    pub fn toggle_skill(&mut self, skill: &str) -> bool {
        let selected = self.state.skills_mut().toggle(skill);
        self.revalidate();
        selected
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if !self.is_valid() {
            debug!(errors = self.errors.len(), "submit ignored: form invalid");
            return SubmitOutcome::Invalid;
        }
        if self.timer.is_pending() {
            debug!("submit ignored: reset already pending");
            return SubmitOutcome::ResetPending;
        }
        let record = TalentRecord::snapshot(&self.state);
        self.success_message = Some(SUCCESS_MESSAGE.to_string());
        self.timer.schedule(self.clock.now());
        info!(
            skills = record.skills.len(),
            delay_ms = self.timer.delay().as_millis() as u64,
            "talent accepted"
        );
        SubmitOutcome::Accepted(record)
    }

    /// Replaces the state with defaults and cancels any pending auto-reset.
    pub fn reset(&mut self) {
        if self.timer.cancel() {
            info!("pending auto-reset cancelled");
        }
        self.replace_state();
    }

    /// Fires the auto-reset when due. Returns whether it fired.
    pub fn tick(&mut self) -> bool {
        if !self.timer.fire_if_due(self.clock.now()) {
            return false;
        }
        info!("auto-reset fired");
        self.replace_state();
        true
    }

    fn replace_state(&mut self) {
        self.defaults_day = self.clock.today();
        self.state = FormState::fresh(self.defaults_day);
        self.success_message = None;
        self.generation += 1;
        self.revalidate();
    }

    fn revalidate(&mut self) {
        self.errors = validate(&self.state);
        debug!(errors = self.errors.len(), "form revalidated");
    }
}
