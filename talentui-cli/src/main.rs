use std::fmt::Write as FmtWrite;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use clap::{ArgAction, Parser};
use color_eyre::eyre::{Report, Result, WrapErr, eyre};
use tracing_subscriber::EnvFilter;

use talentui::{
    Credentials, DEFAULT_PASSWORD, DEFAULT_USERNAME, DocumentFormat, OutputDestination,
    OutputOptions, TalentUI, UiOptions, form::SkillCatalog,
};

#[derive(Debug, Parser)]
#[command(
    name = "talentui",
    version,
    about = "Collect talent entries through an interactive terminal form"
)]
struct Cli {
    /// Title shown at the top of the UI
    #[arg(long = "title", value_name = "TEXT")]
    title: Option<String>,

    /// Username accepted by the login screen
    #[arg(long = "username", value_name = "NAME", default_value = DEFAULT_USERNAME)]
    username: String,

    /// Password accepted by the login screen
    #[arg(long = "password", value_name = "SECRET", default_value = DEFAULT_PASSWORD)]
    password: String,

    /// Milliseconds the success message stays up before the form clears
    #[arg(long = "reset-delay-ms", value_name = "MS", default_value_t = 3000)]
    reset_delay_ms: u64,

    /// Predefined skill offered as a chip (repeat to build the catalog; replaces the defaults)
    #[arg(long = "skill", value_name = "NAME", action = ArgAction::Append)]
    skills: Vec<String>,

    /// Output destinations for accepted records ("-" writes to stdout). Defaults to stdout.
    #[arg(short = 'o', long = "output", value_name = "DEST", num_args = 1.., action = ArgAction::Append)]
    outputs: Vec<String>,

    /// Output format; inferred from output file extensions when omitted
    #[arg(long = "format", value_name = "FORMAT", value_parser = parse_format)]
    format: Option<DocumentFormat>,

    /// Emit compact JSON/TOML rather than pretty formatting
    #[arg(long = "no-pretty")]
    no_pretty: bool,

    /// Overwrite output files even if they already exist
    #[arg(short = 'f', long = "force", short_alias = 'y', alias = "yes")]
    force: bool,

    /// Write tracing output to this file (filtered by RUST_LOG)
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn parse_format(raw: &str) -> Result<DocumentFormat, String> {
    raw.parse::<DocumentFormat>().map_err(|err| err.to_string())
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if let Some(path) = cli.log_file.as_deref() {
        init_logging(path)?;
    }

    let mut diagnostics = DiagnosticCollector::default();
    let output = build_output_options(&cli, &mut diagnostics);
    diagnostics.into_result()?;

    let mut options = UiOptions::default()
        .with_credentials(Credentials::new(&cli.username, &cli.password))
        .with_reset_delay(Duration::from_millis(cli.reset_delay_ms));
    if !cli.skills.is_empty() {
        options = options.with_skill_catalog(SkillCatalog::new(cli.skills.iter().cloned()));
    }

    let mut ui = TalentUI::new().with_options(options).with_output(output);
    if let Some(title) = cli.title.as_ref() {
        ui = ui.with_title(title.clone());
    }

    let records = ui.run().map_err(Report::msg)?;
    tracing::info!(records = records.len(), "session complete");
    Ok(())
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|err| eyre!("failed to install log subscriber: {err}"))
}

fn build_output_options(cli: &Cli, diagnostics: &mut DiagnosticCollector) -> OutputOptions {
    let mut destinations = Vec::new();
    for raw in &cli.outputs {
        if raw.trim().is_empty() {
            diagnostics.push("output destination cannot be empty");
            continue;
        }
        destinations.push(OutputDestination::parse(raw));
    }
    if destinations.is_empty() {
        destinations.push(OutputDestination::Stdout);
    }

    let file_paths: Vec<&Path> = destinations
        .iter()
        .filter_map(|dest| match dest {
            OutputDestination::File(path) => Some(path.as_path()),
            OutputDestination::Stdout => None,
        })
        .collect();

    if !cli.force {
        for path in &file_paths {
            if path.exists() {
                diagnostics.push(format!(
                    "file {} already exists (pass --force to overwrite)",
                    path.display()
                ));
            }
        }
    }

    let format = cli
        .format
        .or_else(|| infer_format_from_files(&file_paths, diagnostics))
        .unwrap_or_default();

    OutputOptions::new(format)
        .with_pretty(!cli.no_pretty)
        .with_destinations(destinations)
}

fn infer_format_from_files(
    file_paths: &[&Path],
    diagnostics: &mut DiagnosticCollector,
) -> Option<DocumentFormat> {
    let mut detected: Option<DocumentFormat> = None;
    for path in file_paths {
        let Some(ext) = path.extension() else {
            continue;
        };
        let ext = ext.to_string_lossy();
        match ext.parse::<DocumentFormat>() {
            Ok(format) => match detected {
                Some(existing) if existing != format => diagnostics.push(format!(
                    "output file {} uses {format} but other destinations use {existing}; align extensions or pass --format",
                    path.display()
                )),
                Some(_) => {}
                None => detected = Some(format),
            },
            Err(_) if matches!(&*ext, "yaml" | "yml" | "toml") => diagnostics.push(format!(
                "output file {} needs {ext} support, but this build lacks that feature",
                path.display()
            )),
            Err(_) => {}
        }
    }
    detected
}

#[derive(Default)]
struct DiagnosticCollector {
    messages: Vec<String>,
}

impl DiagnosticCollector {
    fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    fn into_result(self) -> Result<()> {
        if self.messages.is_empty() {
            return Ok(());
        }
        let mut body = String::from("encountered output issues:\n");
        for (idx, msg) in self.messages.iter().enumerate() {
            let _ = writeln!(body, "  {}. {}", idx + 1, msg);
        }
        Err(eyre!(body))
    }
}
