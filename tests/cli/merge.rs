use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

const EN_CATALOG: &str = r#"# THIS FILE IS GENERATED. DO NOT CHANGE IT.
#% trans-catalog 1

"greeting" = "Hello!"
"#;

fn project_with_catalog() -> Result<CliTest> {
    let test = CliTest::with_file("resources/lang/en/messages.tcat", EN_CATALOG)?;
    test.write_file("app/a.php", "trans('greeting'); trans('farewell');")?;
    Ok(test)
}

#[test]
fn test_append_keeps_existing_and_adds_new_keys() -> Result<()> {
    let test = project_with_catalog()?;

    let output = test
        .collect_command()
        .args(["--root", "app", "--append"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_file("resources/lang/en/messages.tcat")?,
        r#"# THIS FILE WAS UPDATED BY TRANSLATION COLLECTOR.
#% trans-catalog 1

"greeting" = "Hello!"
"farewell" = "farewell"
"#
    );
    assert!(stdout(&output).contains("Updated"));
    assert!(stdout(&output).contains("en/messages.tcat"));

    Ok(())
}

#[test]
fn test_append_twice_adds_nothing_new() -> Result<()> {
    let test = project_with_catalog()?;

    test.collect_command()
        .args(["--root", "app", "--append"])
        .output()?;
    let first = test.read_file("resources/lang/en/messages.tcat")?;

    let output = test
        .collect_command()
        .args(["--root", "app", "--append", "--verbose"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file("resources/lang/en/messages.tcat")?, first);
    assert!(!stdout(&output).contains("+ farewell"));

    Ok(())
}

#[test]
fn test_verbose_append_lists_added_keys() -> Result<()> {
    let test = project_with_catalog()?;

    let output = test
        .collect_command()
        .args(["--root", "app", "--append", "-v"])
        .output()?;

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("  + farewell"));
    assert!(!out.contains("+ greeting"));

    Ok(())
}

#[test]
fn test_append_into_json_catalog() -> Result<()> {
    let test = project_with_catalog()?;
    test.write_file(
        "resources/lang/fr/messages.json",
        r#"{ "greeting": "Bonjour !" }"#,
    )?;

    let output = test
        .collect_command()
        .args(["--root", "app", "--append"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_file("resources/lang/fr/messages.json")?,
        "{\n  \"greeting\": \"Bonjour !\",\n  \"farewell\": \"farewell\"\n}\n"
    );

    Ok(())
}

#[test]
fn test_broken_catalog_fails_but_others_are_updated() -> Result<()> {
    let test = project_with_catalog()?;
    test.write_file("resources/lang/de/messages.tcat", "this is not a catalog\n")?;

    let output = test
        .collect_command()
        .args(["--root", "app", "--append"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("cannot load catalog"));
    assert_eq!(
        test.read_file("resources/lang/de/messages.tcat")?,
        "this is not a catalog\n"
    );
    assert!(
        test.read_file("resources/lang/en/messages.tcat")?
            .contains("\"farewell\" = \"farewell\"")
    );

    Ok(())
}

#[test]
fn test_other_catalog_names_are_not_touched() -> Result<()> {
    let test = project_with_catalog()?;
    test.write_file("resources/lang/en/validation.tcat", EN_CATALOG)?;

    let output = test
        .collect_command()
        .args(["--root", "app", "--append"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(
        test.read_file("resources/lang/en/validation.tcat")?,
        EN_CATALOG
    );

    Ok(())
}

#[test]
fn test_dump_named_like_catalog_is_not_a_merge_target() -> Result<()> {
    let test = CliTest::with_file("messages/a.php", "trans('from.messages')")?;

    let output = test
        .collect_command()
        .args(["--root", "messages", "--append"])
        .output()?;

    // Only the dump exists, so there is nothing to merge into.
    assert!(output.status.success());
    assert!(stderr(&output).contains("warning:"));
    assert_eq!(
        test.read_file("resources/lang/dump/messages.tcat")?,
        "# THIS FILE IS GENERATED. DO NOT CHANGE IT.\n#% trans-catalog 1\n\n\"from.messages\" = \"from.messages\"\n"
    );

    Ok(())
}

#[test]
fn test_missing_catalog_dir_is_a_warning() -> Result<()> {
    let test = project_with_catalog()?;

    let output = test
        .collect_command()
        .args(["--root", "app", "--append", "--catalog-dir", "lang"])
        .output()?;

    assert!(output.status.success());
    assert!(stderr(&output).contains("warning: No messages catalogs found under"));
    assert_eq!(test.read_file("resources/lang/en/messages.tcat")?, EN_CATALOG);

    Ok(())
}

#[test]
fn test_dump_failure_does_not_stop_merge() -> Result<()> {
    let test = project_with_catalog()?;
    test.write_file("resources/lang/dump", "")?;

    let output = test
        .collect_command()
        .args(["--root", "app", "--append"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("error: cannot write"));
    assert!(
        test.read_file("resources/lang/en/messages.tcat")?
            .contains("\"farewell\" = \"farewell\"")
    );

    Ok(())
}

#[cfg(unix)]
#[test]
fn test_unreadable_locale_dir_is_an_error() -> Result<()> {
    use std::{fs, os::unix::fs::PermissionsExt};

    let test = project_with_catalog()?;
    test.write_file("resources/lang/de/messages.tcat", EN_CATALOG)?;
    let locked = test.root().join("resources/lang/de");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000))?;

    // Permission bits do not stop root; nothing to observe then.
    let readable = fs::read_dir(&locked).is_ok();
    let output = test
        .collect_command()
        .args(["--root", "app", "--append"])
        .output()?;
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))?;
    if readable {
        return Ok(());
    }

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("error: cannot load catalog"));
    assert!(!stderr(&output).contains("No messages catalogs found"));
    assert!(
        test.read_file("resources/lang/en/messages.tcat")?
            .contains("\"farewell\" = \"farewell\"")
    );

    Ok(())
}

#[test]
fn test_without_append_catalogs_are_untouched() -> Result<()> {
    let test = project_with_catalog()?;

    let output = test.collect_command().args(["--root", "app"]).output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file("resources/lang/en/messages.tcat")?, EN_CATALOG);

    Ok(())
}
