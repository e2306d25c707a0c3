use anyhow::Result;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_resolves_in_default_locale() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["resolve", "nav.home"])?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "Início\n");

    Ok(())
}

#[test]
fn test_resolves_in_requested_locale() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["resolve", "nav.home", "--locale", "en-US"])?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "Home\n");

    Ok(())
}

#[test]
fn test_resolves_list_index() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["resolve", "skills.stack.1", "--locale", "en-US"])?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "TypeScript\n");

    Ok(())
}

#[test]
fn test_miss_prints_raw_key_and_fails() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["resolve", "nav.missing"])?;
    assert_eq!(output.status.code(), Some(1));
    // Stdout carries the fallback the page would render; stderr says why.
    assert_eq!(stdout(&output), "nav.missing\n");
    assert!(stderr(&output).contains("does not resolve"));

    Ok(())
}

#[test]
fn test_out_of_range_index_is_a_miss() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["resolve", "projects.features.9"])?;
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "projects.features.9\n");

    Ok(())
}

#[test]
fn test_unsupported_locale_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["resolve", "nav.home", "--locale", "de-DE"])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Error:"));

    Ok(())
}
