pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_name, validate_path, Validate};
use clap::Parser;
use toml_config::TomlConfig;

pub const DEFAULT_DATA_DIR: &str = ".";
pub const DEFAULT_DATA_FILE: &str = "stores.dat";

/// Command-line flags. The run mode itself is read from the first line of stdin.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "storekeeper")]
#[command(about = "Record stores and their products, persisted between runs")]
pub struct CliConfig {
    /// Directory holding the data file [default: .]
    #[arg(long)]
    pub data_dir: Option<String>,

    /// Name of the data file inside the data directory [default: stores.dat]
    #[arg(long)]
    pub data_file: Option<String>,

    /// Optional TOML settings file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Layers flags over the TOML file over the built-in defaults.
    pub fn resolve(self, file: Option<&TomlConfig>) -> AppConfig {
        let storage = file.and_then(|f| f.storage.as_ref());
        let logging = file.and_then(|f| f.logging.as_ref());

        AppConfig {
            data_dir: self
                .data_dir
                .or_else(|| storage.and_then(|s| s.data_dir.clone()))
                .unwrap_or_else(|| DEFAULT_DATA_DIR.to_string()),
            data_file: self
                .data_file
                .or_else(|| storage.and_then(|s| s.data_file.clone()))
                .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string()),
            verbose: self.verbose || logging.and_then(|l| l.verbose).unwrap_or(false),
        }
    }
}

/// Effective settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: String,
    pub data_file: String,
    pub verbose: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        CliConfig::default().resolve(None)
    }
}

impl ConfigProvider for AppConfig {
    fn data_dir(&self) -> &str {
        &self.data_dir
    }

    fn data_file(&self) -> &str {
        &self.data_file
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_path("data_dir", &self.data_dir)?;
        validate_file_name("data_file", &self.data_file)
    }
}
