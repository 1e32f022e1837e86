use crate::{
    form::{EXPERIENCE_LEVELS, FieldName},
    presentation::PopupRender,
};

/// Option chooser opened over a select-style field.
pub(crate) struct PopupState {
    field: FieldName,
    title: String,
    options: Vec<String>,
    selected: usize,
}

impl PopupState {
    pub(crate) fn experience_level(current: &str) -> Self {
        let options: Vec<String> = EXPERIENCE_LEVELS.iter().map(|s| s.to_string()).collect();
        let selected = options
            .iter()
            .position(|option| option == current)
            .unwrap_or(0);
        Self {
            field: FieldName::ExperienceLevel,
            title: FieldName::ExperienceLevel.label().to_string(),
            options,
            selected,
        }
    }

    pub(crate) fn select_previous(&mut self) {
        if self.options.is_empty() {
            return;
        }
        if self.selected == 0 {
            self.selected = self.options.len().saturating_sub(1);
        } else {
            self.selected -= 1;
        }
    }

    pub(crate) fn select_next(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.options.len();
    }

    pub(crate) fn field(&self) -> FieldName {
        self.field
    }

    pub(crate) fn selection(&self) -> Option<&str> {
        self.options.get(self.selected).map(String::as_str)
    }

    pub(crate) fn as_render(&self) -> PopupRender<'_> {
        PopupRender {
            title: &self.title,
            options: &self.options,
            selected: self.selected,
        }
    }
}
