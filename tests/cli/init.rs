use anyhow::{Context, Result};
use serde_json::Value;

use crate::{STYLE_CSS, SiteTest};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = SiteTest::new()?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("✓ Created .themeportrc.json"));

    let content = test.read_file(".themeportrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(
        parsed.get("themeDir").and_then(Value::as_str),
        Some("./theme")
    );
    assert_eq!(
        parsed.get("customizationsDir").and_then(Value::as_str),
        Some("./customizations")
    );
    assert!(
        content.contains("  "),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = SiteTest::new()?;
    test.write_file(".themeportrc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains(".themeportrc.json already exists"));
    assert_eq!(test.read_file(".themeportrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = SiteTest::new()?;
    test.command().arg("init").output()?;

    test.write_file("theme/style.css", STYLE_CSS)?;
    test.write_file(
        "theme/templates/index.html",
        "<!-- wp:paragraph --><p>Hello</p><!-- /wp:paragraph -->",
    )?;

    let output = test.export_command().output()?;
    assert!(
        output.status.success(),
        "Export should work with the initialized config. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    Ok(())
}
