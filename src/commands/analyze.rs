use crate::config::{self, InterpretationConfig};
use crate::io::{self, create_writer, OutputFormat, Report};
use crate::pipeline::Interpreter;
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub struct AnalyzeConfig {
    pub extracts: Vec<PathBuf>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let settings = resolve_config(config.config.as_deref())?;
    let interpreter = Interpreter::new(settings).context("Invalid interpretation configuration")?;

    let reports = analyze_extracts(&interpreter, &config.extracts)?;
    log::info!("Interpreted {} structural extract(s)", reports.len());

    write_reports(&reports, config.format, config.output.as_deref())
}

fn resolve_config(path: Option<&Path>) -> Result<InterpretationConfig> {
    match path {
        Some(path) => config::load_config_from_path(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None => {
            let cwd = std::env::current_dir().context("Failed to read working directory")?;
            Ok(config::load_config(&cwd))
        }
    }
}

/// Interpret every extract in parallel. Reports come back in input order and
/// the first unreadable extract fails the whole run.
pub fn analyze_extracts(interpreter: &Interpreter, paths: &[PathBuf]) -> Result<Vec<Report>> {
    paths
        .par_iter()
        .map(|path| {
            let extract = io::read_extract(path)?;
            Ok(Report {
                source: path.display().to_string(),
                interpretation: interpreter.interpret(&extract),
            })
        })
        .collect()
}

fn write_reports(reports: &[Report], format: OutputFormat, output: Option<&Path>) -> Result<()> {
    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(std::io::stdout().lock())),
    };

    let mut writer = create_writer(format, sink);
    writer.write_reports(reports)
}
