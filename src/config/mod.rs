#[cfg(feature = "cli")]
pub mod cli;
pub mod env_file;

use crate::domain::model::NumberSource;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_url, Validate};
use serde::{Deserialize, Serialize};

pub use env_file::{EnvConfig, TARGET_URL};

pub const DEFAULT_SOURCE: &str = "stdin";
pub const DEFAULT_OUTPUT_FILE: &str = "output.txt";
pub const DEFAULT_LOG_FILE: &str = "app.log";
pub const DEFAULT_CONFIG_FILE: &str = ".env";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, clap::Parser)]
#[command(name = "sum-report")]
#[command(about = "Sums a JSON array of integers and checks a configured URL")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_SOURCE, help = "Input: 'stdin' or a path to a JSON file")]
    pub source: String,

    #[arg(long, default_value = DEFAULT_OUTPUT_FILE, help = "File the result is written to")]
    pub output: String,

    #[arg(long, default_value = DEFAULT_LOG_FILE, help = "File log lines are appended to")]
    pub log: String,

    #[arg(long, default_value = DEFAULT_CONFIG_FILE, help = "Environment file providing TARGET_URL")]
    pub config: String,

    #[arg(long, help = "Enable debug logging")]
    pub verbose: bool,
}

/// Everything one run needs, assembled from the flags and the environment file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    pub source: NumberSource,
    pub output_path: String,
    pub log_path: String,
    pub target_url: String,
}

impl RunConfig {
    #[cfg(feature = "cli")]
    pub fn from_parts(cli: &CliConfig, env: EnvConfig) -> Self {
        Self {
            source: NumberSource::from(cli.source.as_str()),
            output_path: cli.output.clone(),
            log_path: cli.log.clone(),
            target_url: env.target_url,
        }
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validate_url(TARGET_URL, &self.target_url)?;
        validate_path("output", &self.output_path)?;
        validate_path("log", &self.log_path)?;
        if let NumberSource::File(path) = &self.source {
            validate_path("source", &path.to_string_lossy())?;
        }
        Ok(())
    }
}

impl ConfigProvider for RunConfig {
    fn source(&self) -> &NumberSource {
        &self.source
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn target_url(&self) -> &str {
        &self.target_url
    }
}
