use anyhow::Result;
use insta::assert_snapshot;
use serde_json::Value;

use crate::{CliTest, run};

const CATALOG_WITH_UNUSED: &str = r#"{
    "@metadata": { "authors": ["Someone"] },
    "foo-desc": "A foo extension",
    "action-read": "read foo",
    "right-read": "Read foo",
    "unused-key": "Never shown"
}"#;

#[test]
fn test_unused_key_fails() -> Result<()> {
    let test = CliTest::with_extension(
        r#"{ "descriptionmsg": "foo-desc", "AvailableRights": ["read"] }"#,
        CATALOG_WITH_UNUSED,
    )?;
    test.write_file("includes/Hooks.php", "<?php\nclass Hooks {}\n")?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert_snapshot!(output.stdout, @r"
    Starting i18n key check for: .
    Could not find uses of the following keys:
      - unused-key
    ✘ 1 problem (4 catalog keys, 1 searched)
    ");

    Ok(())
}

#[test]
fn test_referenced_key_passes() -> Result<()> {
    let test = CliTest::with_extension(
        r#"{ "name": "Foo" }"#,
        r#"{ "@metadata": {}, "greeting-msg": "Hello" }"#,
    )?;
    test.write_file(
        "resources/ext.foo.js",
        "mw.notify( mw.msg( 'greeting-msg' ) );\n",
    )?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert_snapshot!(output.stdout, @r"
    Starting i18n key check for: .
    ✓ All keys found successfully! (1 catalog key, 1 searched)
    ");

    Ok(())
}

#[test]
fn test_undefined_manifest_key_fails_even_if_referenced() -> Result<()> {
    let test = CliTest::with_extension(
        r#"{ "namemsg": "ext-name" }"#,
        r#"{ "@metadata": {} }"#,
    )?;
    test.write_file("includes/Setup.php", "$name = wfMessage( 'ext-name' );\n")?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert_snapshot!(output.stdout, @r"
    Starting i18n key check for: .
    The following keys used by extension.json are undefined:
      - ext-name
    ✘ 1 problem (0 catalog keys, 0 searched)
    ");

    Ok(())
}

#[test]
fn test_substring_is_not_a_reference() -> Result<()> {
    let test = CliTest::with_extension("{}", r#"{ "ok": "OK" }"#)?;
    test.write_file("src/lexer.js", "function tokenize( input ) {}\n")?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("  - ok\n"));

    Ok(())
}

#[test]
fn test_vendored_reference_is_ignored() -> Result<()> {
    let test = CliTest::with_extension("{}", r#"{ "vendored-msg": "x" }"#)?;
    test.write_file("vendor/acme/lib/Widget.php", "wfMessage( 'vendored-msg' );\n")?;
    test.write_file("node_modules/acme/index.js", "mw.msg( 'vendored-msg' );\n")?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("  - vendored-msg\n"));

    Ok(())
}

#[test]
fn test_special_page_keys_are_optional() -> Result<()> {
    let test = CliTest::with_extension(
        r#"{ "SpecialPages": { "FooList": "SpecialFooList", "FooEdit": "SpecialFooEdit" } }"#,
        r#"{ "foolist": "Foo list" }"#,
    )?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(0), "stdout: {}", output.stdout);

    Ok(())
}

#[test]
fn test_json_format() -> Result<()> {
    let test = CliTest::with_extension(
        r#"{ "descriptionmsg": "foo-desc", "AvailableRights": ["read"] }"#,
        CATALOG_WITH_UNUSED,
    )?;

    let output = run({
        let mut cmd = test.check_command();
        cmd.args(["--format", "json"]);
        cmd
    })?;

    assert_eq!(output.code, Some(1));
    let report: Value = serde_json::from_str(&output.stdout)?;
    assert_eq!(report["passed"], false);
    assert_eq!(report["undefinedKeys"], serde_json::json!([]));
    assert_eq!(report["unusedKeys"], serde_json::json!(["unused-key"]));
    assert_eq!(report["searchFailures"], serde_json::json!([]));
    assert_eq!(report["catalogKeyCount"], 4);
    assert_eq!(report["searchedKeyCount"], 1);

    Ok(())
}

#[test]
fn test_config_exclude_dirs() -> Result<()> {
    let test = CliTest::with_extension("{}", r#"{ "lib-msg": "x", "app-msg": "y" }"#)?;
    test.write_file(".keycheckrc.json", r#"{ "excludeDirs": ["resources/lib"] }"#)?;
    test.write_file("resources/lib/bundle.js", "'lib-msg'\n")?;
    test.write_file("resources/app.js", "'app-msg'\n")?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("  - lib-msg\n"));
    assert!(!output.stdout.contains("app-msg"));

    Ok(())
}

#[test]
fn test_catalog_beside_sources() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("extension.json", "{}")?;
    test.write_file(".keycheckrc.json", r#"{ "catalog": "resources/lang/en.json" }"#)?;
    test.write_file(
        "resources/lang/en.json",
        r#"{
            "@metadata": {},
            "loader-msg": "Loading",
            "zeta-msg": "z",
            "alpha-msg": "a"
        }"#,
    )?;
    test.write_file("resources/lang/qqq.json", r#"{ "alpha-msg": "Doc" }"#)?;
    test.write_file("resources/lang/loader.js", "mw.msg( 'loader-msg' );\n")?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert_snapshot!(output.stdout, @r"
    Starting i18n key check for: .
    Could not find uses of the following keys:
      - zeta-msg
      - alpha-msg
    ✘ 2 problems (3 catalog keys, 3 searched)
    ");

    Ok(())
}

#[test]
fn test_exclude_dir_flag() -> Result<()> {
    let test = CliTest::with_extension("{}", r#"{ "build-msg": "x" }"#)?;
    test.write_file("build/out.js", "'build-msg'\n")?;

    let passing = run(test.check_command())?;
    assert_eq!(passing.code, Some(0));

    let output = run({
        let mut cmd = test.check_command();
        cmd.args(["--exclude-dir", "build"]);
        cmd
    })?;
    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("  - build-msg\n"));

    Ok(())
}

#[test]
fn test_invalid_manifest_is_input_error() -> Result<()> {
    let test = CliTest::with_extension("{ \"namemsg\": ", r#"{ "foo": "bar" }"#)?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("Failed to parse manifest file"));
    assert!(output.stderr.contains("extension.json"));
    assert!(!output.stdout.contains("Could not find uses"));

    Ok(())
}

#[test]
fn test_missing_catalog_is_input_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("extension.json", "{}")?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("Failed to read catalog file"));
    assert!(output.stderr.contains("en.json"));

    Ok(())
}

#[test]
fn test_missing_component_is_input_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = run({
        let mut cmd = test.command();
        cmd.args(["check", "extensions/Missing"]);
        cmd
    })?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("Extension directory not found"));

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Usage:"));
    assert!(output.stdout.contains("check"));

    Ok(())
}
