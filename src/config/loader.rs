//! Config file loading

use crate::domain::Config;
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

const CANDIDATES: [&str; 6] = [
    "jiracsv.toml",
    ".jiracsv.toml",
    "jiracsv.yml",
    ".jiracsv.yml",
    "jiracsv.yaml",
    ".jiracsv.yaml",
];

/// Name of the optional table wrapping the configuration.
const SECTION: &str = "jiracsv";

/// Load the configuration from `config_path`, or from the first candidate file
/// found in `search_dir` when no path is given.
pub fn load_config(search_dir: &Path, config_path: Option<&Path>) -> Result<Config> {
    let config_file = match config_path {
        Some(path) => path.to_path_buf(),
        None => discover_config(search_dir)
            .ok_or_else(|| anyhow::anyhow!("configuration file not specified"))?,
    };
    tracing::debug!("Loading config from {}", config_file.display());

    let content = fs::read_to_string(&config_file)
        .with_context(|| format!("Failed reading config file: {}", config_file.display()))?;

    let ext = config_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();

    let config = match ext.as_str() {
        "toml" => parse_toml_config(&content, &config_file)?,
        "yaml" | "yml" => parse_yaml_config(&content, &config_file)?,
        other => anyhow::bail!(
            "Unsupported config extension '.{}' for file {}",
            other,
            config_file.display()
        ),
    };

    validate(&config).with_context(|| format!("Invalid config: {}", config_file.display()))?;
    Ok(config)
}

fn parse_toml_config(content: &str, config_file: &Path) -> Result<Config> {
    let raw: toml::Value = toml::from_str(content)
        .with_context(|| format!("Invalid TOML syntax: {}", config_file.display()))?;

    let config_val = match raw.get(SECTION) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    config_val.try_into().with_context(|| format!("Invalid TOML config: {}", config_file.display()))
}

fn parse_yaml_config(content: &str, config_file: &Path) -> Result<Config> {
    let raw: serde_yaml::Value = serde_yaml::from_str(content)
        .with_context(|| format!("Invalid YAML syntax: {}", config_file.display()))?;

    let config_val = match raw.get(SECTION) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    serde_yaml::from_value(config_val)
        .with_context(|| format!("Invalid YAML config: {}", config_file.display()))
}

fn validate(config: &Config) -> Result<()> {
    if config.instance.url.trim().is_empty() {
        anyhow::bail!("instance.url must be set");
    }

    let mut seen = HashSet::new();
    for profile in &config.profiles {
        if profile.id.trim().is_empty() {
            anyhow::bail!("every profile needs an id");
        }
        if !seen.insert(profile.id.as_str()) {
            anyhow::bail!("duplicate profile id '{}'", profile.id);
        }
        if profile.jql.trim().is_empty() {
            tracing::warn!("Profile '{}' has an empty JQL query", profile.id);
        }
    }
    Ok(())
}

fn discover_config(search_dir: &Path) -> Option<PathBuf> {
    CANDIDATES.iter().map(|candidate| search_dir.join(candidate)).find(|path| path.exists())
}
