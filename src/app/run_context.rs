use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use chrono::Local;

use crate::models::Holding;

/// Per-run output directory plus the two append-only sinks inside it.
/// Created once per invocation and passed to everything that writes.
#[derive(Clone, Debug)]
pub struct RunContext {
    dir: PathBuf,
}

impl RunContext {
    pub fn create(base: &Path) -> Result<Self> {
        let stamp = Local::now().format("%d-%m-%Y").to_string();
        Self::at(base.join(format!("run-{}", stamp)))
    }

    pub fn at(dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn report_path(&self) -> PathBuf {
        self.dir.join("portfolio.csv")
    }

    pub fn log_path(&self) -> PathBuf {
        self.dir.join("log.txt")
    }

    pub fn result_path(&self) -> PathBuf {
        self.dir.join("result.json")
    }

    /// One anomaly or progress line.
    pub fn append_log(&self, line: &str) -> Result<()> {
        self.append(&self.log_path(), &format!("{}\n", line))
    }

    /// The holding's final record for this run, one JSON line.
    pub fn append_result(&self, holding: &Holding) -> Result<()> {
        let json = serde_json::to_string(holding)?;
        self.append(&self.result_path(), &format!("{}\n", json))
    }

    fn append(&self, path: &Path, content: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open {}", path.display()))?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }
}
