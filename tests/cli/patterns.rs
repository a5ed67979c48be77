use anyhow::Result;

use crate::SiteTest;

const HERO_PATTERN: &str = concat!(
    "<?php\n",
    "/**\n",
    "* Title: Hero\n",
    "* Slug: mytheme/hero\n",
    "* Categories: featured, banner\n",
    "* Synced: no\n",
    "*/\n",
    "?>\n",
    "<!-- wp:paragraph --><p>Hi there</p><!-- /wp:paragraph -->",
);

fn pattern_file(title: &str, slug: &str) -> String {
    format!(
        "<?php\n/**\n* Title: {title}\n* Slug: {slug}\n* Synced: no\n*/\n?>\n<!-- wp:paragraph --><p>Body</p><!-- /wp:paragraph -->"
    )
}

fn site_with_pattern() -> Result<SiteTest> {
    let test = SiteTest::with_theme()?;
    test.write_file("theme/patterns/hero.php", HERO_PATTERN)?;
    Ok(test)
}

fn listed_id(test: &SiteTest) -> Result<String> {
    let output = test.patterns_command().arg("list").output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(stdout
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string())
}

#[test]
fn test_patterns_list_shows_derived_ids() -> Result<()> {
    let test = site_with_pattern()?;

    let output = test.patterns_command().arg("list").output()?;

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("mytheme/hero"));
    assert!(stdout.contains("Hero"));
    let id = stdout.split_whitespace().next().unwrap_or_default();
    assert!(id.starts_with("8888"));
    assert!(id[4..].chars().all(|c| c.is_ascii_digit()));

    Ok(())
}

#[test]
fn test_patterns_get_prints_header_and_body() -> Result<()> {
    let test = site_with_pattern()?;
    let id = listed_id(&test)?;

    let output = test.patterns_command().args(["get", &id]).output()?;

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Slug: mytheme/hero"));
    assert!(stdout.contains("Title: Hero"));
    assert!(stdout.contains("Categories: featured, banner"));
    assert!(stdout.contains("Synced: no"));
    assert!(stdout.contains("<p>Hi there</p>"));

    Ok(())
}

#[test]
fn test_patterns_get_unknown_id_is_an_error() -> Result<()> {
    let test = site_with_pattern()?;

    let output = test.patterns_command().args(["get", "123"]).output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error: No pattern with id 123"));

    Ok(())
}

#[test]
fn test_patterns_update_replaces_the_body() -> Result<()> {
    let test = site_with_pattern()?;
    let id = listed_id(&test)?;
    test.write_file(
        "new-body.html",
        "<!-- wp:paragraph --><p>Rewritten</p><!-- /wp:paragraph -->",
    )?;

    let output = test
        .patterns_command()
        .args(["update", &id, "--file", "new-body.html"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("✓ Updated pattern mytheme/hero"));
    let file = test.read_file("theme/patterns/hero.php")?;
    assert!(file.contains("* Title: Hero"));
    assert!(file.contains("<p>Rewritten</p>"));
    assert!(!file.contains("Hi there"));

    Ok(())
}

#[test]
fn test_patterns_delete_removes_the_file() -> Result<()> {
    let test = site_with_pattern()?;
    let id = listed_id(&test)?;

    let output = test.patterns_command().args(["delete", &id]).output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("✓ Deleted pattern mytheme/hero"));
    assert!(!test.root().join("theme/patterns/hero.php").exists());

    Ok(())
}

#[test]
fn test_patterns_active_theme_shadows_parent() -> Result<()> {
    let test = site_with_pattern()?;
    test.write_file(".themeportrc.json", r#"{"parentThemeDir":"./parent"}"#)?;
    test.write_file(
        "parent/patterns/hero.php",
        &pattern_file("Parent Hero", "mytheme/hero"),
    )?;
    test.write_file(
        "parent/patterns/footer.php",
        &pattern_file("Footer", "mytheme/footer"),
    )?;

    let output = test.patterns_command().arg("list").output()?;

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("mytheme/hero").count(), 1);
    assert!(stdout.contains("mytheme/footer"));
    assert!(!stdout.contains("Parent Hero"));

    Ok(())
}
