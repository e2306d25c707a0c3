use anyhow::Result;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_embedded_catalogs_are_clean() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["check"])?;
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert!(stdout(&output).contains("no issues found"));

    Ok(())
}

#[test]
fn test_missing_key_in_scanned_directory() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "messages/en.json",
        r#"{"nav": {"about": "About", "home": "Home"}}"#,
    )?;
    test.write_file("messages/pt.json", r#"{"nav": {"about": "Sobre"}}"#)?;

    let output = test.run(&["check", "--messages-root", "messages", "--reference", "en"])?;
    assert_eq!(output.status.code(), Some(1));

    let out = stdout(&output);
    assert!(out.contains("missing-key"));
    assert!(out.contains("nav.home"));
    assert!(out.contains("problems"));

    Ok(())
}

#[test]
fn test_orphan_key_in_scanned_directory() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("messages/en.json", r#"{"nav": {"about": "About"}}"#)?;
    test.write_file(
        "messages/pt.json",
        r#"{"nav": {"about": "Sobre"}, "legacy": {"banner": "Promo"}}"#,
    )?;

    let output = test.run(&["check", "--messages-root", "messages", "--reference", "en"])?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("orphan-key"));
    assert!(stdout(&output).contains("legacy.banner"));

    Ok(())
}

#[test]
fn test_shape_mismatch_in_scanned_directory() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("messages/en.json", r#"{"tags": ["a", "b"]}"#)?;
    test.write_file("messages/pt.json", r#"{"tags": "a, b"}"#)?;

    let output = test.run(&["check", "--messages-root", "messages", "--reference", "en"])?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("shape-mismatch"));

    Ok(())
}

#[test]
fn test_untranslated_alone_is_a_warning_not_a_failure() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("messages/en.json", r#"{"hero": {"role": "Developer"}}"#)?;
    test.write_file("messages/pt.json", r#"{"hero": {"role": "Developer"}}"#)?;

    let output = test.run(&["check", "--messages-root", "messages", "--reference", "en"])?;
    // Warnings alone do not fail the run.
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("untranslated"));
    assert!(stdout(&output).contains("hero.role"));

    Ok(())
}

#[test]
fn test_selected_rules_only() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("messages/en.json", r#"{"a": "Same", "b": "Only"}"#)?;
    test.write_file("messages/pt.json", r#"{"a": "Same"}"#)?;

    // Only the untranslated rule runs; the missing key is not reported.
    let output = test.run(&[
        "check",
        "untranslated",
        "--messages-root",
        "messages",
        "--reference",
        "en",
    ])?;
    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("untranslated"));
    assert!(!out.contains("missing-key"));

    Ok(())
}

#[test]
fn test_unparseable_locale_file_warns() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("messages/en.json", r#"{"a": "A"}"#)?;
    test.write_file("messages/pt.json", "{ broken")?;

    let output = test.run(&["check", "--messages-root", "messages", "--reference", "en"])?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("could not be parsed"));

    Ok(())
}

#[test]
fn test_unknown_reference_is_an_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("messages/en.json", r#"{"a": "A"}"#)?;

    let output = test.run(&["check", "--messages-root", "messages", "--reference", "xx"])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Error:"));
    assert!(stderr(&output).contains("xx"));

    Ok(())
}

#[test]
fn test_missing_messages_directory_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["check", "--messages-root", "missing-dir"])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("does not exist"));

    Ok(())
}

#[test]
fn test_config_file_supplies_messages_root() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".glossarc.json",
        r#"{"messagesRoot": "./messages", "referenceLocale": "en"}"#,
    )?;
    test.write_file("messages/en.json", r#"{"a": "A", "b": "B"}"#)?;
    test.write_file("messages/pt.json", r#"{"a": "Um"}"#)?;

    let output = test.run(&["check"])?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("missing-key"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["--help"])?;
    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("check"));
    assert!(out.contains("resolve"));

    Ok(())
}
