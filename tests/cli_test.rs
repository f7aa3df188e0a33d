#![cfg(feature = "cli")]

use anyhow::Result;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

const HEADER: &str = "variant_id\teffect_allele\tother_allele\tbeta\tstandard_error\tp_value";

fn format_sumstats() -> Command {
    Command::new(env!("CARGO_BIN_EXE_format-sumstats"))
}

#[test]
fn test_cli_formats_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("in.tsv");
    let output = temp_dir.path().join("out.tsv");
    fs::write(&input, format!("{HEADER}\nrs1\tA\tG\t0.4\t0.2\t0.05\n")).unwrap();

    let status = format_sumstats()
        .arg(&input)
        .arg("1000")
        .arg(&output)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(status.status.success());
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "SNP\tN\tZ\tA1\tA2\tP\nrs1\t1000\t2.0\tA\tG\t0.05\n"
    );
}

#[test]
fn test_cli_reports_missing_columns() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("in.tsv");
    let output = temp_dir.path().join("out.tsv");
    fs::write(&input, "variant_id\tbeta\nrs1\t0.4\n").unwrap();

    let result = format_sumstats()
        .arg(&input)
        .arg("1000")
        .arg(&output)
        .output()
        .unwrap();

    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains(
        "❌ Missing required columns: effect_allele, other_allele, standard_error, p_value"
    ));
    assert!(!output.exists());
}

#[test]
fn test_cli_verbose_failure_prints_one_error_line() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("in.tsv");
    let output = temp_dir.path().join("out.tsv");
    fs::write(&input, "variant_id\tbeta\nrs1\t0.4\n").unwrap();

    let result = format_sumstats()
        .arg("--verbose")
        .arg(&input)
        .arg("1000")
        .arg(&output)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert_eq!(stderr.lines().filter(|l| l.contains("❌")).count(), 1, "{stderr}");
    assert!(stderr.contains("Starting format-sumstats"), "{stderr}");
}

#[test]
fn test_cli_default_level_logs_binary_events() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("in.tsv");
    let output = temp_dir.path().join("out.tsv");
    fs::write(&input, format!("{HEADER}\nrs1\tA\tG\t0.4\t0.2\t0.05\n")).unwrap();

    let result = format_sumstats()
        .arg(&input)
        .arg("1000")
        .arg(&output)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Starting format-sumstats"), "{stderr}");
    assert!(!stderr.contains("❌"), "{stderr}");
}

#[test]
fn test_cli_config_file_maps_columns() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("in.tsv");
    let output = temp_dir.path().join("out.tsv");
    let config = temp_dir.path().join("columns.toml");
    fs::write(&input, "SNP\tA1\tA2\tBETA\tSE\tP\nrs1\tA\tG\t0.4\t0.2\t0.05\n")?;
    fs::write(
        &config,
        "[columns]\nvariant_id = \"SNP\"\neffect_allele = \"A1\"\nother_allele = \"A2\"\n\
         beta = \"BETA\"\nstandard_error = \"SE\"\np_value = \"P\"\n",
    )?;

    let result = format_sumstats()
        .arg("--config")
        .arg(&config)
        .arg(&input)
        .arg("1000")
        .arg(&output)
        .output()?;

    assert!(result.status.success());
    assert_eq!(
        fs::read_to_string(&output)?,
        "SNP\tN\tZ\tA1\tA2\tP\nrs1\t1000\t2.0\tA\tG\t0.05\n"
    );
    Ok(())
}

#[test]
fn test_cli_bad_config_exits_with_config_code() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("in.tsv");
    let output = temp_dir.path().join("out.tsv");
    let config = temp_dir.path().join("columns.toml");
    fs::write(&input, format!("{HEADER}\nrs1\tA\tG\t0.4\t0.2\t0.05\n"))?;
    fs::write(&config, "[columns]\nzscore = \"Z\"\n")?;

    let result = format_sumstats()
        .arg("--config")
        .arg(&config)
        .arg(&input)
        .arg("1000")
        .arg(&output)
        .output()?;

    assert_eq!(result.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&result.stderr).contains("❌ Configuration error"));
    assert!(!output.exists());
    Ok(())
}

#[test]
fn test_cli_dry_run_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("in.tsv");
    let output = temp_dir.path().join("out.tsv");
    fs::write(&input, format!("{HEADER}\nrs1\tA\tG\t0.4\t0.2\t0.05\n")).unwrap();

    let result = format_sumstats()
        .arg("--dry-run")
        .arg(&input)
        .arg("1000")
        .arg(&output)
        .output()
        .unwrap();

    assert!(result.status.success());
    assert!(String::from_utf8_lossy(&result.stdout).contains("1 rows would be written"));
    assert!(!output.exists());
}
