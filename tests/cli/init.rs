use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Created .keycheckrc.json"));

    let content = test.read_file(".keycheckrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["manifest"], "extension.json");
    assert_eq!(parsed["catalog"], "i18n/en.json");
    assert_eq!(parsed["excludeDirs"], serde_json::json!(["node_modules", "vendor"]));

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".keycheckrc.json", "{}")?;

    let output = run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains(".keycheckrc.json already exists"));
    assert_eq!(test.read_file(".keycheckrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::with_extension(r#"{ "namemsg": "foo-name" }"#, r#"{ "foo-name": "Foo" }"#)?;

    test.command().arg("init").output()?;
    assert!(test.root().join(".keycheckrc.json").exists());

    let output = run(test.check_command())?;
    assert_eq!(output.code, Some(0), "stderr: {}", output.stderr);

    Ok(())
}
