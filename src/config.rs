use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

/// File name looked up when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = "reisekosten.toml";

/// Top-level configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Skip Dec 24 and Dec 27-31 in addition to official holidays.
    #[serde(default = "default_true")]
    pub holiday_period_exclusion: bool,

    /// Outgoing mail server.
    pub smtp: SmtpToml,

    /// Sender and recipient.
    pub email: EmailToml,

    /// Reimbursement rates.
    #[serde(default)]
    pub rates: RatesToml,

    /// Customers in rotation order.
    #[serde(default)]
    pub customers: Vec<CustomerToml>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SmtpToml {
    pub host: String,
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub pass: String,
}

fn default_true() -> bool {
    true
}
fn default_smtp_port() -> u16 {
    587
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmailToml {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RatesToml {
    #[serde(default = "default_km_rate")]
    pub km: f64,
    #[serde(default = "default_meal_allowance")]
    pub meal_allowance: f64,
}

impl Default for RatesToml {
    fn default() -> Self {
        Self {
            km: default_km_rate(),
            meal_allowance: default_meal_allowance(),
        }
    }
}

fn default_km_rate() -> f64 {
    reisekosten_workdays::KM_RATE_PER_KM
}
fn default_meal_allowance() -> f64 {
    reisekosten_workdays::MEAL_ALLOWANCE_PER_DAY
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomerToml {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
    #[serde(default)]
    pub reason: String,
    /// One-way distance in kilometres.
    pub distance: u32,
    /// Two-letter state code; unknown codes fall back to BW.
    #[serde(default)]
    pub province: String,
}

/// Resolves the configuration file path.
///
/// An explicit path wins. Otherwise [`CONFIG_FILE_NAME`] is looked up in the
/// working directory and then next to the executable.
pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    let mut candidates = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Some(dir) = env::current_exe().ok().as_deref().and_then(Path::parent) {
        candidates.push(dir.join(CONFIG_FILE_NAME));
    }

    match candidates.iter().find(|p| p.is_file()) {
        Some(path) => Ok(path.clone()),
        None => bail!(
            "no {CONFIG_FILE_NAME} found in the working directory or next to the executable; \
             pass --config"
        ),
    }
}

/// Reads and validates the configuration at `path`.
pub fn load(path: &Path) -> Result<Config> {
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let config: Config = toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse TOML config: {}", path.display()))?;

    if config.customers.is_empty() {
        bail!("no customers configured in {}", path.display());
    }
    Ok(config)
}
