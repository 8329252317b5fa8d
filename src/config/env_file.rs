use crate::utils::error::Result;
use crate::utils::validation::validate_non_empty_string;
use std::path::Path;

pub const TARGET_URL: &str = "TARGET_URL";

/// Values the run needs from the environment file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvConfig {
    pub target_url: String,
}

impl EnvConfig {
    /// Exports the dotenv file at `path` into the process environment and resolves `TARGET_URL`.
    ///
    /// Variables already set in the environment keep their value. Must be called before
    /// any other thread reads the environment.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        dotenvy::from_path(path)?;
        tracing::debug!("Loaded environment from {}", path.display());
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let target_url = lookup(TARGET_URL).unwrap_or_default();
        validate_non_empty_string(TARGET_URL, &target_url)?;

        Ok(Self {
            target_url: target_url.trim().to_string(),
        })
    }
}
