use crate::pipeline::Interpretation;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}

/// One analyzed extract and where it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub source: String,
    pub interpretation: Interpretation,
}

pub trait OutputWriter {
    fn write_reports(&mut self, reports: &[Report]) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_reports(&mut self, reports: &[Report]) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(reports)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

pub struct YamlWriter<W: Write> {
    writer: W,
}

impl<W: Write> YamlWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for YamlWriter<W> {
    fn write_reports(&mut self, reports: &[Report]) -> anyhow::Result<()> {
        let yaml = serde_yaml::to_string(reports)?;
        self.writer.write_all(yaml.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}

pub fn create_writer<'w>(format: OutputFormat, writer: Box<dyn Write + 'w>) -> Box<dyn OutputWriter + 'w> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Yaml => Box::new(YamlWriter::new(writer)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> Report {
        Report {
            source: "extract.json".to_string(),
            interpretation: Interpretation::default(),
        }
    }

    #[test]
    fn test_json_writer() {
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer)
            .write_reports(&[report()])
            .unwrap();

        let parsed: Vec<Report> = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed, vec![report()]);
    }

    #[test]
    fn test_yaml_writer() {
        let mut buffer = Vec::new();
        YamlWriter::new(&mut buffer)
            .write_reports(&[report()])
            .unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("source: extract.json"));
        assert!(text.contains("rhythm_signature"));
    }
}
