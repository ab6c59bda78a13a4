use std::str::FromStr;
use crate::error::ConfigError;

pub const DEFAULT_API_HOST: &str = "http://localhost:8080";
pub const DEFAULT_PRODUCT_ID: &str = "1_7613513";

/// How the loader schedules the three fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadMode {
    /// One task per endpoint, joined before the record is assembled.
    #[default]
    Concurrent,
    /// Name, price, then shipping, one after another.
    Sequential,
}

impl FromStr for LoadMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "concurrent" => Ok(LoadMode::Concurrent),
            "sequential" => Ok(LoadMode::Sequential),
            _ => Err(ConfigError::InvalidLoadMode(s.to_string())),
        }
    }
}

/// What the loader does with the first failed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Print the error and terminate the process with exit code 1.
    #[default]
    Exit,
    /// Cancel the remaining fetches and return the error to the caller.
    Propagate,
}

impl FromStr for ErrorPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exit" => Ok(ErrorPolicy::Exit),
            "propagate" => Ok(ErrorPolicy::Propagate),
            _ => Err(ConfigError::InvalidErrorPolicy(s.to_string())),
        }
    }
}

/// Everything a [`ProductLoader`](super::ProductLoader) needs to know about a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub base_url: String,
    pub product_id: String,
    pub mode: LoadMode,
    pub on_error: ErrorPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_API_HOST, DEFAULT_PRODUCT_ID)
    }
}

impl Config {
    pub fn new(base_url: impl Into<String>, product_id: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            product_id: product_id.into(),
            mode: LoadMode::default(),
            on_error: ErrorPolicy::default(),
        }
    }

    #[cfg(test)]
    pub fn with_mode(mut self, mode: LoadMode) -> Self {
        self.mode = mode;
        self
    }

    #[cfg(test)]
    pub fn with_error_policy(mut self, on_error: ErrorPolicy) -> Self {
        self.on_error = on_error;
        self
    }

    /// Reads `PRODUCT_API_HOST`, `PRODUCT_ID`, `PRODUCT_LOAD_MODE` and
    /// `PRODUCT_ON_ERROR`, falling back to defaults for unset or blank values.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mut config = Self::new(
            get("PRODUCT_API_HOST").unwrap_or_else(|| DEFAULT_API_HOST.to_string()),
            get("PRODUCT_ID").unwrap_or_else(|| DEFAULT_PRODUCT_ID.to_string()),
        );
        if let Some(mode) = get("PRODUCT_LOAD_MODE") {
            config.mode = mode.parse()?;
        }
        if let Some(policy) = get("PRODUCT_ON_ERROR") {
            config.on_error = policy.parse()?;
        }
        Ok(config)
    }
}
