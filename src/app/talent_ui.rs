use anyhow::{Context, Result};
use tracing::info;

use crate::{
    form::TalentRecord,
    io::{self, OutputOptions},
};

use super::{options::UiOptions, runtime::App};

pub const DEFAULT_TITLE: &str = "Talent Management System";

/// Entry point for embedding the talent-intake terminal UI.
#[derive(Debug)]
pub struct TalentUI {
    title: String,
    options: UiOptions,
    output: Option<OutputOptions>,
}

impl TalentUI {
    pub fn new() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            options: UiOptions::default(),
            output: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_options(mut self, options: UiOptions) -> Self {
        self.options = options;
        self
    }

    /// Writes the session's accepted records once the UI exits.
    pub fn with_output(mut self, output: OutputOptions) -> Self {
        self.output = Some(output);
        self
    }

    /// Runs the UI until the user quits and returns every record accepted
    /// during the session, in submission order.
    pub fn run(self) -> Result<Vec<TalentRecord>> {
        let TalentUI {
            title,
            options,
            output,
        } = self;

        let mut app = App::new(title, options);
        let records = app.run()?;
        info!(records = records.len(), "talent session finished");

        if let Some(output) = output.as_ref() {
            io::emit(&records, output).context("failed to emit talent records")?;
        }
        Ok(records)
    }
}

impl Default for TalentUI {
    fn default() -> Self {
        Self::new()
    }
}
