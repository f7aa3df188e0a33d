pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::ColumnMap;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use toml_config::TomlConfig;

/// Run parameters for library callers.
#[derive(Debug, Clone)]
pub struct FormatOptions {
    pub input_path: String,
    pub n_samples: String,
    pub output_path: String,
    pub columns: ColumnMap,
}

impl FormatOptions {
    pub fn new(
        input_path: impl Into<String>,
        n_samples: impl Into<String>,
        output_path: impl Into<String>,
    ) -> Self {
        Self {
            input_path: input_path.into(),
            n_samples: n_samples.into(),
            output_path: output_path.into(),
            columns: ColumnMap::default(),
        }
    }

    pub fn with_columns(mut self, columns: ColumnMap) -> Self {
        self.columns = columns;
        self
    }
}

impl ConfigProvider for FormatOptions {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn n_samples(&self) -> &str {
        &self.n_samples
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn columns(&self) -> &ColumnMap {
        &self.columns
    }
}

impl Validate for FormatOptions {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input_path)?;
        validate_path("output", &self.output_path)?;
        self.columns.validate()
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "format-sumstats")]
#[command(about = "Format harmonized summary stats for LDSC/LAVA")]
pub struct CliConfig {
    /// Input file (harmonized summary stats)
    pub input: String,

    /// Sample size to include
    #[arg(value_name = "N_samples")]
    pub n_samples: String,

    /// Output file path
    pub output: String,

    /// TOML file with column mapping and monitoring settings
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU and memory usage after each phase")]
    pub monitor: bool,

    #[arg(long, help = "Validate the input without writing output")]
    pub dry_run: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[arg(skip)]
    pub columns: ColumnMap,

    #[arg(skip)]
    pub log_level: Option<String>,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Folds settings from a TOML file into the command line values.
    /// Flags given on the command line win.
    pub fn apply_toml(&mut self, toml: TomlConfig) {
        self.monitor = self.monitor || toml.monitoring_enabled();
        self.log_level = toml.log_level().map(str::to_string);
        self.columns = toml.columns;
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn n_samples(&self) -> &str {
        &self.n_samples
    }

    fn output_path(&self) -> &str {
        &self.output
    }

    fn columns(&self) -> &ColumnMap {
        &self.columns
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        validate_path("output", &self.output)?;
        self.columns.validate()
    }
}
