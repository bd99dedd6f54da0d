//! Report command implementation

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use super::progress::ProgressSource;
use super::utils::parse_csv;
use crate::config::load_config;
use crate::domain::OutputStyle;
use crate::fetch::{Credentials, JiraClient};
use crate::pipeline::{run_report, ReportPlan};

#[derive(Args)]
pub struct ReportArgs {
    /// Path to config file (jiracsv.toml or jiracsv.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Search profile to run
    #[arg(short = 'p', long, value_name = "ID")]
    pub profile: String,

    /// Jira username (overrides instance.username from the config)
    #[arg(short = 'u', long, value_name = "USER", env = "JIRACSV_USERNAME")]
    pub username: Option<String>,

    /// Additional components to exclude (comma-separated)
    #[arg(short = 'e', long, value_name = "COMPONENTS")]
    pub exclude: Option<String>,

    /// Cell style (overrides the profile)
    #[arg(short = 's', long, value_name = "STYLE")]
    pub style: Option<StyleArg>,

    /// Write the report to this file instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StyleArg {
    /// Browse URLs and text progress bars
    #[value(alias = "text")]
    Plain,
    /// Google Sheets HYPERLINK and SPARKLINE formulas
    #[value(alias = "gsheets")]
    Sheets,
}

impl From<StyleArg> for OutputStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Plain => OutputStyle::Plain,
            StyleArg::Sheets => OutputStyle::Sheets,
        }
    }
}

pub fn run(args: ReportArgs) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed resolving current directory")?;
    let config = load_config(&cwd, args.config.as_deref())?;

    let profile = config
        .find_profile(&args.profile)
        .ok_or_else(|| anyhow::anyhow!("profile '{}' not found", args.profile))?;

    let plan = ReportPlan::from_profile(profile)
        .exclude_more(parse_csv(&args.exclude).unwrap_or_default())
        .with_style(args.style.map(OutputStyle::from));

    let username = args.username.or_else(|| config.instance.username.clone());
    let credentials = Credentials::resolve(username)?;
    let client = JiraClient::new(&config, credentials)?;
    let source = ProgressSource::new(&client);

    let summary = match args.output {
        Some(path) => run_report(&source, &plan, LazyFile::new(path))?,
        None => run_report(&source, &plan, io::stdout().lock())?,
    };
    source.finish();

    tracing::debug!("Report complete: {:?}", summary);
    Ok(())
}

/// Output file that is only created on the first write, so a run that fails
/// while fetching leaves no empty report behind.
struct LazyFile {
    path: PathBuf,
    file: Option<BufWriter<File>>,
}

impl LazyFile {
    fn new(path: PathBuf) -> Self {
        Self { path, file: None }
    }

    fn file(&mut self) -> io::Result<&mut BufWriter<File>> {
        if self.file.is_none() {
            let file = File::create(&self.path).map_err(|e| {
                io::Error::new(e.kind(), format!("{}: {}", self.path.display(), e))
            })?;
            self.file = Some(BufWriter::new(file));
        }
        self.file.as_mut().ok_or_else(|| io::Error::other("output file not open"))
    }
}

impl Write for LazyFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file()?.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.file.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}
