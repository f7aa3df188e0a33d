use clap::Parser;
use sumstats_format::utils::{logger, validation::Validate};
use sumstats_format::{CliConfig, EtlEngine, LocalStorage, SumstatsError, SumstatsPipeline, TomlConfig};

fn fail(e: &SumstatsError) -> ! {
    // stderr carries exactly one user-facing line; the rest is debug detail.
    tracing::debug!("Formatting failed (Category: {:?}): {}", e.category(), e);
    tracing::debug!("Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(e.category().exit_code());
}

fn main() {
    let mut config = CliConfig::parse();

    // The config file is read before the logger starts so its log_level applies.
    let toml = config
        .config
        .as_deref()
        .map(|path| TomlConfig::from_file(path).and_then(|t| t.validate().map(|_| t)))
        .transpose();
    if let Ok(Some(toml)) = &toml {
        config.apply_toml(toml.clone());
    }

    if config.json_logs {
        logger::init_json_logger(config.verbose, config.log_level.as_deref());
    } else {
        logger::init_cli_logger(config.verbose, config.log_level.as_deref());
    }

    tracing::info!("Starting format-sumstats");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = toml {
        fail(&e);
    }
    if let Err(e) = config.validate() {
        fail(&e);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }
    let dry_run = config.dry_run;

    let pipeline = SumstatsPipeline::new(LocalStorage::new(), config);
    let engine = EtlEngine::new_with_monitoring(pipeline, monitor_enabled);

    let outcome = if dry_run { engine.dry_run() } else { engine.run() };

    match outcome {
        Ok(report) => match report.output_path {
            Some(output_path) => {
                tracing::info!("✅ Formatted {} rows", report.rows);
                println!("✅ Formatted {} rows", report.rows);
                println!("📁 Output saved to: {}", output_path);
            }
            None => {
                println!("✅ Input is valid: {} rows would be written", report.rows);
            }
        },
        Err(e) => fail(&e),
    }
}
