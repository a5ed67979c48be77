use anyhow::Result;

use crate::SiteTest;

fn site_with_customizations() -> Result<SiteTest> {
    let test = SiteTest::with_theme()?;
    test.write_file(
        "customizations/templates/home.html",
        "<!-- wp:paragraph --><p>Draft</p><!-- /wp:paragraph -->",
    )?;
    test.write_file("customizations/parts/header.html", "<!-- wp:site-title /-->")?;
    Ok(test)
}

#[test]
fn test_clear_previews_without_yes() -> Result<()> {
    let test = site_with_customizations()?;

    let output = test.clear_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Would remove 2 customization files."));
    assert!(stdout.contains("Run with --yes to remove them."));
    assert!(stdout.contains("parts/header.html"));
    assert!(test.root().join("customizations/templates/home.html").exists());
    assert!(test.root().join("customizations/parts/header.html").exists());

    Ok(())
}

#[test]
fn test_clear_yes_deletes_the_files() -> Result<()> {
    let test = site_with_customizations()?;

    let output = test.clear_command().arg("--yes").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("✓ Removed 2 customization files"));
    assert!(!test.root().join("customizations/templates/home.html").exists());
    assert!(!test.root().join("customizations/parts/header.html").exists());
    // The theme's own files are never touched.
    assert!(test.root().join("theme/templates/index.html").exists());

    Ok(())
}

#[test]
fn test_clear_with_nothing_saved() -> Result<()> {
    let test = SiteTest::with_theme()?;

    let output = test.clear_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("✓ No saved customizations found"));

    Ok(())
}
