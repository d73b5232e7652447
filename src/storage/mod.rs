// src/storage/mod.rs
use crate::extractors::Benchmark;
use crate::utils::error::StorageError;
use std::fs;
use std::path::{Path, PathBuf};

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(StorageError::IoError)?;
        }

        Ok(Self { base_dir: base_path })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Saves every control as a JSON array to `<stem>_controls.json`
    pub fn save_controls(
        &self,
        stem: &str,
        benchmark: &Benchmark,
    ) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(format!("{}_controls.json", stem));

        let controls: Vec<_> = benchmark.controls().collect();
        let json = serde_json::to_string_pretty(&controls)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        fs::write(&file_path, json).map_err(StorageError::IoError)?;

        tracing::info!("Saved {} controls to {}", controls.len(), file_path.display());

        Ok(file_path)
    }

    /// Saves metadata about the extraction in JSON format
    pub fn save_metadata(
        &self,
        stem: &str,
        source: &Path,
        format: &str,
        benchmark: &Benchmark,
    ) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(format!("{}_meta.json", stem));

        let metadata = serde_json::json!({
            "source": source.display().to_string(),
            "format": format,
            "control_count": benchmark.len(),
            "sections": benchmark.sections().collect::<Vec<_>>(),
            "extraction_timestamp": chrono::Utc::now().to_rfc3339(),
        });

        let metadata_str = serde_json::to_string_pretty(&metadata)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        fs::write(&file_path, metadata_str).map_err(StorageError::IoError)?;

        tracing::info!("Saved metadata to {}", file_path.display());

        Ok(file_path)
    }
}
