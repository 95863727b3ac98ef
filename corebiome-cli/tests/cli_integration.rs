use anyhow::Result;
use assert_cmd::Command;
use corebiome_core::Config;
use corebiome_test::{chain_scenario, DatasetBuilder, TestEnvironment};
use predicates::prelude::*;

/// Command isolated from the user's home configuration
fn corebiome_cmd(env: &TestEnvironment) -> Command {
    let mut cmd = Command::cargo_bin("corebiome").unwrap();
    cmd.env("COREBIOME_HOME", env.root()).env_remove("COREBIOME_LOG");
    cmd
}

#[test]
fn test_cli_help_command() -> Result<()> {
    let env = TestEnvironment::new()?;
    corebiome_cmd(&env)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("compute"))
        .stdout(predicate::str::contains("thresholds"))
        .stdout(predicate::str::contains("config"));
    Ok(())
}

#[test]
fn test_compute_chain_text() -> Result<()> {
    let env = TestEnvironment::new()?;
    let dataset = env.write_dataset("chain.json", &chain_scenario())?;

    corebiome_cmd(&env)
        .arg("compute")
        .arg(&dataset)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Core Biome\n"))
        .stdout(predicate::str::contains("Biome size: 13"))
        .stdout(predicate::str::contains("Taxonomy detection thresholds"));
    Ok(())
}

#[test]
fn test_compute_json_output() -> Result<()> {
    let env = TestEnvironment::new()?;
    let dataset = env.write_dataset("chain.json", &chain_scenario())?;

    let output = corebiome_cmd(&env)
        .arg("compute")
        .arg(&dataset)
        .args(["--samples", "S2", "--format", "json", "--no-thresholds"])
        .output()?;
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(report["title"], "Core Biome");
    assert_eq!(report["command"], "compute");
    // summary plus the Taxonomy table
    assert_eq!(report["sections"].as_array().map(Vec::len), Some(2));
    let rows = report["sections"][1]["body"]["classes"]
        .as_array()
        .cloned()
        .unwrap_or_default();
    // Only S2 selected: node 10 has [0] own and [3] summarized, node 11 has [3]
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["class_id"], 10);
    assert_eq!(rows[0]["own_count"], 0);
    assert_eq!(rows[1]["own_count"], 3);
    Ok(())
}

#[test]
fn test_compute_rare_mode_flag() -> Result<()> {
    let env = TestEnvironment::new()?;
    let dataset = env.write_dataset("chain.json", &chain_scenario())?;

    corebiome_cmd(&env)
        .arg("compute")
        .arg(&dataset)
        .args(["--max-samples", "1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Rare Biome\n"))
        .stdout(predicate::str::contains("Biome size: 0"));
    Ok(())
}

#[test]
fn test_compute_writes_output_file() -> Result<()> {
    let env = TestEnvironment::new()?;
    let dataset = env.write_dataset("chain.json", &chain_scenario())?;
    let report = env.root().join("report.txt");

    corebiome_cmd(&env)
        .arg("compute")
        .arg(&dataset)
        .arg("--output")
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let contents = std::fs::read_to_string(&report)?;
    assert!(contents.contains("Biome size: 13"));
    Ok(())
}

#[test]
fn test_config_file_selects_rare_mode() -> Result<()> {
    let env = TestEnvironment::new()?;
    let dataset = env.write_dataset("chain.json", &chain_scenario())?;
    let mut config = Config::default();
    config.biome.upper_bound = true;
    config.biome.samples_threshold = 2;
    let config_path = env.write_config("custom.toml", &config)?;

    corebiome_cmd(&env)
        .arg("compute")
        .arg(&dataset)
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Rare Biome\n"))
        .stdout(predicate::str::contains("Maximum samples: 2"))
        .stdout(predicate::str::contains("Biome size: 13"));
    Ok(())
}

#[test]
fn test_default_config_from_home() -> Result<()> {
    let env = TestEnvironment::new()?;
    let dataset = env.write_dataset("chain.json", &chain_scenario())?;
    env.write_file("config.toml", "[output]\nformat = \"json\"\n")?;

    let output = corebiome_cmd(&env).arg("compute").arg(&dataset).output()?;
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(report["title"], "Core Biome");
    Ok(())
}

#[test]
fn test_unknown_sample_exit_code() -> Result<()> {
    let env = TestEnvironment::new()?;
    let dataset = env.write_dataset("chain.json", &chain_scenario())?;

    corebiome_cmd(&env)
        .arg("compute")
        .arg(&dataset)
        .args(["--samples", "S1,S9"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Unknown sample: S9"));
    Ok(())
}

#[test]
fn test_missing_dataset_exit_code() -> Result<()> {
    let env = TestEnvironment::new()?;

    corebiome_cmd(&env)
        .arg("compute")
        .arg(env.root().join("missing.json"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to load dataset"));
    Ok(())
}

#[test]
fn test_malformed_dataset_exit_code() -> Result<()> {
    let env = TestEnvironment::new()?;
    let dataset = env.write_file("broken.json", "{ not json")?;

    corebiome_cmd(&env)
        .arg("compute")
        .arg(&dataset)
        .assert()
        .code(4);
    Ok(())
}

#[test]
fn test_invalid_config_exit_code() -> Result<()> {
    let env = TestEnvironment::new()?;
    let dataset = env.write_dataset("chain.json", &chain_scenario())?;
    let config = env.write_file("bad.toml", "[biome]\nsamples_threshold = \"many\"\n")?;

    corebiome_cmd(&env)
        .arg("compute")
        .arg(&dataset)
        .arg("--config")
        .arg(&config)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Configuration error"));
    Ok(())
}

#[test]
fn test_missing_explicit_config_fails() -> Result<()> {
    let env = TestEnvironment::new()?;
    let dataset = env.write_dataset("chain.json", &chain_scenario())?;

    corebiome_cmd(&env)
        .arg("compute")
        .arg(&dataset)
        .arg("--config")
        .arg(env.root().join("nope.toml"))
        .assert()
        .code(3);
    Ok(())
}

#[test]
fn test_unknown_format_rejected() -> Result<()> {
    let env = TestEnvironment::new()?;
    let dataset = env.write_dataset("chain.json", &chain_scenario())?;

    corebiome_cmd(&env)
        .arg("compute")
        .arg(&dataset)
        .args(["--format", "html"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Unknown format"));
    Ok(())
}

#[test]
fn test_unknown_primary_flag_is_not_found() -> Result<()> {
    let env = TestEnvironment::new()?;
    let dataset = env.write_dataset("chain.json", &chain_scenario())?;

    corebiome_cmd(&env)
        .arg("compute")
        .arg(&dataset)
        .args(["--primary", "KEGG"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Not found: classification 'KEGG'"));
    Ok(())
}

#[test]
fn test_configured_primary_falls_back() -> Result<()> {
    let env = TestEnvironment::new()?;
    let dataset = env.write_dataset("chain.json", &chain_scenario())?;
    let mut config = Config::default();
    config.biome.primary_classification = "KEGG".to_string();
    let config_path = env.write_config("kegg.toml", &config)?;

    corebiome_cmd(&env)
        .arg("compute")
        .arg(&dataset)
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Biome size: 13"));
    Ok(())
}

#[test]
fn test_thresholds_reject_non_finite_percent() -> Result<()> {
    let env = TestEnvironment::new()?;
    let dataset = env.write_dataset("chain.json", &chain_scenario())?;

    for percent in ["inf", "NaN"] {
        corebiome_cmd(&env)
            .arg("thresholds")
            .arg(&dataset)
            .args(["--detection-percent", percent])
            .assert()
            .code(5)
            .stderr(predicate::str::contains("must be finite"));
    }
    Ok(())
}

#[test]
fn test_thresholds_command() -> Result<()> {
    let env = TestEnvironment::new()?;
    let dataset = DatasetBuilder::new(&["A", "B"])
        .classification("Taxonomy", 1)
        .node(1, 2, &[100, 1000])
        .node(2, 3, &[100, 1000])
        .build()?;
    let dataset = env.write_dataset("data.json", &dataset)?;

    corebiome_cmd(&env)
        .arg("thresholds")
        .arg(&dataset)
        .args(["--detection-percent", "10"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Detection Thresholds\n"))
        .stdout(predicate::str::contains("Detection threshold: 10%"))
        .stdout(predicate::str::contains("  A       20\n"))
        .stdout(predicate::str::contains("  B       200\n"));
    Ok(())
}

#[test]
fn test_config_init_and_show() -> Result<()> {
    let env = TestEnvironment::new()?;

    corebiome_cmd(&env)
        .args(["config", "init"])
        .assert()
        .success();
    assert!(env.root().join("config.toml").exists());

    corebiome_cmd(&env)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("samples_threshold = 1"))
        .stdout(predicate::str::contains("primary_classification = \"Taxonomy\""));

    corebiome_cmd(&env)
        .args(["config", "init"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    corebiome_cmd(&env)
        .args(["config", "init", "--force"])
        .assert()
        .success();
    Ok(())
}
