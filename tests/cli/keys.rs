use anyhow::Result;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_lists_default_locale_keys() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["keys"])?;
    assert_eq!(output.status.code(), Some(0));

    let out = stdout(&output);
    assert!(out.contains("nav.home"));
    assert!(out.contains("Início"));
    assert!(out.contains("skills.stack"));

    Ok(())
}

#[test]
fn test_lists_requested_locale() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["keys", "--locale", "en-US"])?;
    assert_eq!(output.status.code(), Some(0));

    let out = stdout(&output);
    assert!(out.contains("nav.home"));
    assert!(out.contains("Home"));
    // Lists are shown joined under their own key.
    assert!(out.contains("React, TypeScript"));

    Ok(())
}

#[test]
fn test_unsupported_locale_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["keys", "--locale", "fr-FR"])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Error:"));

    Ok(())
}
