pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::storage::LocalStorage;
pub use config::{toml_config::TomlConfig, FormatOptions};
pub use crate::core::{
    etl::{EtlEngine, RunReport},
    pipeline::SumstatsPipeline,
};
pub use utils::error::{Result, SumstatsError};

use utils::validation::Validate;

/// Formats `input_path` into the LDSC/LAVA layout at `output_path`.
///
/// `n_samples` is written verbatim into the `N` column. Nothing is written
/// unless the whole input reads, validates and coerces cleanly.
pub fn format_sumstats(input_path: &str, n_samples: &str, output_path: &str) -> Result<RunReport> {
    let options = FormatOptions::new(input_path, n_samples, output_path);
    options.validate()?;

    let pipeline = SumstatsPipeline::new(LocalStorage::new(), options);
    EtlEngine::new(pipeline).run()
}
