// src/converter/mod.rs
//! Runs poppler's `pdftotext`/`pdftohtml` to turn a benchmark PDF into text.

use crate::utils::error::ConvertError;
use std::fs;
use std::path::Path;
use std::process::Command;
use std::str::FromStr;

/// Rendering requested from the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Html,
}

impl OutputFormat {
    fn binary(self) -> &'static str {
        match self {
            OutputFormat::Text => "pdftotext",
            OutputFormat::Html => "pdftohtml",
        }
    }

    fn output_name(self) -> &'static str {
        match self {
            OutputFormat::Text => "pdf-out.text",
            OutputFormat::Html => "pdf-out.html",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Html => "html",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "html" => Ok(OutputFormat::Html),
            other => Err(ConvertError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Converts the document at `path` and returns the rendered text.
///
/// The converter writes into a scratch directory that is removed on return.
/// A non-zero exit status is fatal and carries the converter's stderr.
pub fn convert_document(path: &Path, format: OutputFormat) -> Result<String, ConvertError> {
    let binary = format.binary();
    let scratch = tempfile::tempdir()?;
    let output_file = scratch.path().join(format.output_name());

    tracing::info!("Converting {} with {}", path.display(), binary);
    let output = Command::new(binary)
        .arg(path)
        .arg(&output_file)
        .output()
        .map_err(|source| ConvertError::Spawn { binary, source })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        tracing::error!("{} exited with {}: {}", binary, output.status, stderr);
        return Err(ConvertError::Failed {
            binary,
            status: output.status,
            stderr,
        });
    }

    let bytes = fs::read(&output_file)?;
    let text = String::from_utf8_lossy(&bytes).into_owned();
    tracing::debug!("Read {} bytes of converted {}", text.len(), format.as_str());
    Ok(text)
}
