use anyhow::Result;

use crate::{HEADER_PART, SiteTest};

#[test]
fn test_export_writes_a_complete_package() -> Result<()> {
    let test = SiteTest::with_theme()?;

    let output = test.export_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("✓ Exported My Fancy Theme to ./theme-export (1 template, 1 part, 1 pattern)"),
        "unexpected stdout: {stdout}"
    );

    let style = test.read_file("theme-export/style.css")?;
    assert!(style.contains("Theme Name: My Fancy Theme"));
    assert!(style.contains("Version: 2.0.0"));
    assert!(style.contains("Text Domain: mytheme"));

    let readme = test.read_file("theme-export/readme.txt")?;
    assert!(readme.starts_with("=== My Fancy Theme ==="));

    // The part has no translatable text and survives verbatim. The
    // template gains a gettext call, so it moves into a pattern and
    // leaves a reference behind.
    assert_eq!(test.read_file("theme-export/parts/header.html")?, HEADER_PART);
    assert_eq!(
        test.read_file("theme-export/templates/index.html")?,
        r#"<!-- wp:pattern {"slug":"mytheme/index"} /-->"#
    );
    let pattern = test.read_file("theme-export/patterns/index.php")?;
    assert!(pattern.contains("* Slug: mytheme/index"));
    assert!(pattern.contains("<?php echo __('Welcome to our site', 'mytheme');?>"));

    Ok(())
}

#[test]
fn test_export_verbose_lists_artifacts() -> Result<()> {
    let test = SiteTest::with_theme()?;

    let output = test.export_command().arg("--verbose").output()?;

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--> templates/index.html"));
    assert!(stdout.contains("--> patterns/index.php"));
    assert!(stdout.contains("--> style.css"));

    Ok(())
}

#[test]
fn test_export_user_scope_exports_only_customizations() -> Result<()> {
    let test = SiteTest::with_theme()?;
    test.write_file(
        "customizations/templates/home.html",
        "<!-- wp:paragraph --><p>Saved draft</p><!-- /wp:paragraph -->",
    )?;

    let output = test.export_command().args(["--scope", "user"]).output()?;

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("(1 template, 0 parts, 1 pattern)"));
    assert!(test.root().join("theme-export/templates/home.html").exists());
    assert!(!test.root().join("theme-export/templates/index.html").exists());
    assert!(!test.root().join("theme-export/parts/header.html").exists());

    Ok(())
}

#[test]
fn test_export_strips_attachment_identity() -> Result<()> {
    let test = SiteTest::with_theme()?;
    test.write_file(
        "theme/templates/gallery.html",
        concat!(
            r#"<!-- wp:image {"id":42,"sizeSlug":"large","className":"wp-image-42 rounded"} -->"#,
            r#"<figure class="wp-block-image size-large"><img src="local.png" alt=""/></figure>"#,
            "<!-- /wp:image -->",
        ),
    )?;

    let output = test.export_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        test.read_file("theme-export/templates/gallery.html")?,
        concat!(
            r#"<!-- wp:image {"sizeSlug":"large","className":"rounded"} -->"#,
            r#"<figure class="wp-block-image size-large"><img src="local.png" alt=""/></figure>"#,
            "<!-- /wp:image -->",
        )
    );

    Ok(())
}

#[test]
fn test_export_refuses_an_occupied_target() -> Result<()> {
    let test = SiteTest::with_theme()?;
    test.write_file("theme-export/old.txt", "stale")?;

    let output = test.export_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Output directory already exists: ./theme-export"));
    assert!(stderr.contains("--force"));
    assert_eq!(test.read_file("theme-export/old.txt")?, "stale");

    Ok(())
}

#[test]
fn test_export_force_replaces_the_target() -> Result<()> {
    let test = SiteTest::with_theme()?;
    test.write_file("theme-export/old.txt", "stale")?;

    let output = test.export_command().arg("--force").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(!test.root().join("theme-export/old.txt").exists());
    assert!(test.root().join("theme-export/style.css").exists());

    Ok(())
}

#[test]
fn test_export_rename_rewrites_the_namespace() -> Result<()> {
    let test = SiteTest::with_theme()?;

    let output = test.export_command().args(["--name", "Night Owl"]).output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Exported Night Owl"));

    let style = test.read_file("theme-export/style.css")?;
    assert!(style.contains("Theme Name: Night Owl"));
    assert!(style.contains("Text Domain: night-owl"));

    assert_eq!(
        test.read_file("theme-export/templates/index.html")?,
        r#"<!-- wp:pattern {"slug":"night-owl/index"} /-->"#
    );
    let pattern = test.read_file("theme-export/patterns/index.php")?;
    assert!(pattern.contains("* Slug: night-owl/index"));
    assert!(pattern.contains("'night-owl'"));
    assert!(!pattern.contains("mytheme"));

    Ok(())
}

#[test]
fn test_export_flattens_global_styles() -> Result<()> {
    let test = SiteTest::with_theme()?;
    test.write_file(
        "customizations/global-styles.json",
        r##"{"version":2,"styles":{"color":{"user":{"background":"#111"},"theme":{"background":"#fff"}}}}"##,
    )?;

    let output = test.export_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("theme.json"));
    assert_eq!(
        test.read_file("theme-export/theme.json")?,
        concat!(
            "{\n",
            "  \"version\": 2,\n",
            "  \"styles\": {\n",
            "    \"color\": {\n",
            "      \"background\": \"#111\"\n",
            "    }\n",
            "  }\n",
            "}",
        )
    );

    Ok(())
}

#[test]
fn test_export_missing_media_is_a_warning() -> Result<()> {
    let test = SiteTest::with_theme()?;
    test.write_file(
        ".themeportrc.json",
        r#"{"uploadsDir":"./uploads","uploadsBaseUrl":"https://site.example/wp-content/uploads"}"#,
    )?;
    test.write_file(
        "theme/templates/team.html",
        concat!(
            "<!-- wp:image -->",
            r#"<figure class="wp-block-image"><img src="https://site.example/wp-content/uploads/2024/07/team.png" alt=""/></figure>"#,
            "<!-- /wp:image -->",
        ),
    )?;

    let output = test.export_command().output()?;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(
        "warning: Media not found locally: https://site.example/wp-content/uploads/2024/07/team.png"
    ));

    // The reference is localized even though the file could not be copied.
    let pattern = test.read_file("theme-export/patterns/team.php")?;
    assert!(pattern.contains(
        "<?php echo esc_url( get_stylesheet_directory_uri() ); ?>/assets/images/team.png"
    ));
    assert!(!test.root().join("theme-export/assets/images/team.png").exists());

    Ok(())
}

#[test]
fn test_export_copies_local_media() -> Result<()> {
    let test = SiteTest::with_theme()?;
    test.write_file(
        ".themeportrc.json",
        r#"{"uploadsDir":"./uploads","uploadsBaseUrl":"https://site.example/wp-content/uploads"}"#,
    )?;
    test.write_file(
        "theme/templates/team.html",
        concat!(
            "<!-- wp:image -->",
            r#"<figure class="wp-block-image"><img src="https://site.example/wp-content/uploads/2024/07/team.png" alt=""/></figure>"#,
            "<!-- /wp:image -->",
        ),
    )?;
    test.write_file("uploads/2024/07/team.png", "png-bytes")?;

    let output = test.export_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("1 image"));
    assert_eq!(
        test.read_file("theme-export/assets/images/team.png")?,
        "png-bytes"
    );

    Ok(())
}

#[test]
fn test_export_clear_customizations_flag() -> Result<()> {
    let test = SiteTest::with_theme()?;
    test.write_file(
        "customizations/templates/home.html",
        "<!-- wp:paragraph --><p>Draft</p><!-- /wp:paragraph -->",
    )?;

    let output = test
        .export_command()
        .arg("--clear-customizations")
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("✓ Removed 1 customization file"));
    assert!(!test.root().join("customizations/templates/home.html").exists());

    Ok(())
}

#[test]
fn test_export_bad_config_is_an_error() -> Result<()> {
    let test = SiteTest::with_theme()?;
    test.write_file(".themeportrc.json", "{ not json")?;

    let output = test.export_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("Error: Failed to parse config file")
    );

    Ok(())
}

#[test]
fn test_export_without_a_theme_is_an_error() -> Result<()> {
    let test = SiteTest::new()?;

    let output = test.export_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Failed to read file:"));
    assert!(stderr.contains("style.css"));

    Ok(())
}
