use std::path::PathBuf;

use clap::Parser;
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/jumantik.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory `laporan.csv` is written to.
    pub export_dir: String,
    /// JSON dataset replacing the built-in demo data.
    pub seed_path: Option<String>,
    pub log_file: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            export_dir: ".".to_string(),
            seed_path: None,
            log_file: "jumantik_tui.log".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn export_dir(&self) -> PathBuf {
        PathBuf::from(&self.export_dir)
    }

    pub fn seed_path(&self) -> Option<PathBuf> {
        self.seed_path.as_ref().map(PathBuf::from)
    }
}

#[derive(Debug, Parser)]
#[command(name = "jumantik_tui", about = "Jumantik admin console")]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override the export directory.
    #[arg(long)]
    export_dir: Option<String>,
    /// Load accounts and reports from a JSON dataset.
    #[arg(long)]
    seed: Option<String>,
    /// Override the log file path.
    #[arg(long)]
    log_file: Option<String>,
    /// Override the log level (error, warn, info, debug, trace).
    #[arg(long)]
    log_level: Option<String>,
}

pub fn load() -> Result<AppConfig> {
    let args = Args::parse();

    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("JUMANTIK"));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(export_dir) = args.export_dir {
        settings.export_dir = export_dir;
    }
    if let Some(seed) = args.seed {
        settings.seed_path = Some(seed);
    }
    if let Some(log_file) = args.log_file {
        settings.log_file = log_file;
    }
    if let Some(log_level) = args.log_level {
        settings.log_level = log_level;
    }

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_working_dir() {
        let config = AppConfig::default();
        assert_eq!(config.export_dir(), PathBuf::from("."));
        assert_eq!(config.seed_path(), None);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn file_values_override_defaults() {
        let settings: AppConfig = config::Config::builder()
            .add_source(config::File::from_str(
                "export_dir = \"out\"\nseed_path = \"data.json\"",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(settings.export_dir(), PathBuf::from("out"));
        assert_eq!(settings.seed_path(), Some(PathBuf::from("data.json")));
        assert_eq!(settings.log_file, "jumantik_tui.log");
    }
}
