use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["roots"], serde_json::json!(["app", "resources/views"]));
    assert_eq!(parsed["testRoots"], serde_json::json!(["tests/translations"]));
    assert_eq!(parsed["extensions"], serde_json::json!(["php"]));
    assert_eq!(parsed["dumpDir"], "resources/lang/dump");
    assert_eq!(parsed["catalogDir"], "resources/lang");
    assert_eq!(parsed["catalogName"], "messages");

    assert!(
        content.contains("\n  \"roots\""),
        "Config should use 2-space indentation"
    );
    assert!(content.ends_with("}\n"));

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim_end(), "\u{2713} Created .transcollect.json");

    let content = test.read_file(".transcollect.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_config_exists() -> Result<()> {
    let test = CliTest::with_file(".transcollect.json", r#"{ "roots": ["src"] }"#)?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("error: .transcollect.json already exists"));
    // Existing config is left untouched
    assert_eq!(test.read_file(".transcollect.json")?, r#"{ "roots": ["src"] }"#);

    Ok(())
}

#[test]
fn test_init_config_is_picked_up_by_collect() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("app/a.php", "trans('from.app')")?;
    test.write_file("resources/views/v.php", "trans('from.view')")?;

    let init = test.command().arg("init").output()?;
    assert!(init.status.success());

    let output = test.collect_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(test.root().join("resources/lang/dump/app.tcat").exists());
    assert!(
        test.root()
            .join("resources/lang/dump/resources-views.tcat")
            .exists()
    );

    Ok(())
}
