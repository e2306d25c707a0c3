use anyhow::Result;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_creates_default_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["init"])?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Created .glossarc.json"));

    let content = std::fs::read_to_string(test.root().join(".glossarc.json"))?;
    let config: Value = serde_json::from_str(&content)?;
    assert_eq!(config["defaultLocale"], "pt-BR");

    Ok(())
}

#[test]
fn test_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".glossarc.json", "{}")?;

    let output = test.run(&["init"])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("already exists"));

    Ok(())
}
