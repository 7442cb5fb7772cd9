use anyhow::Result;
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct Config {
    pub provider: ProviderSection,
    pub beta: BetaSection,
    pub history: HistorySection,
}

#[derive(Debug, Deserialize)]
pub struct ProviderSection {
    pub endpoint: String,
    pub timeout_sec: u64,
}

#[derive(Debug, Deserialize)]
pub struct BetaSection {
    pub benchmark: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub symbols: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct HistorySection {
    pub files: Vec<PathBuf>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }
}
