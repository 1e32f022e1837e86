use std::time::Duration;

#[derive(Debug, Clone)]
pub struct StatusLine {
    message: String,
}

pub const READY_STATUS: &str = "Ready. Tab to move, Enter to activate.";

impl Default for StatusLine {
    fn default() -> Self {
        Self {
            message: READY_STATUS.to_string(),
        }
    }
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_raw(&mut self, msg: impl Into<String>) {
        self.message = msg.into();
    }

    pub fn ready(&mut self) {
        self.message = READY_STATUS.to_string();
    }

    pub fn editing(&mut self, label: &str) {
        self.message = format!("Editing {label}");
    }

    pub fn issues_remaining(&mut self, count: usize) {
        self.message = format!("{count} issue(s) remaining");
    }

    pub fn submitted(&mut self, delay: Duration) {
        self.message = format!(
            "Talent added. The form clears in {:.1}s (Ctrl+R clears now).",
            delay.as_secs_f32()
        );
    }

    pub fn reset_pending(&mut self) {
        self.message = "Already submitted; waiting for the form to clear.".to_string();
    }

    pub fn form_cleared(&mut self) {
        self.message = "Form cleared".to_string();
    }

    pub fn pending_exit(&mut self) {
        self.message = "Unsaved talent entry. Press Ctrl+Q again to quit.".to_string();
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
