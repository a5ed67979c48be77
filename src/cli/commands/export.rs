use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use super::super::args::ExportCommand;
use super::{CommandResult, CommandSummary, ExportSummary, clear};
use crate::config::load_config;
use crate::pipeline::{
    self,
    context::{ExportContext, TargetMeta},
};
use crate::theme::media::{ASSETS_SUBDIR, LocalMedia, Media, MediaRef};
use crate::theme::meta::{self, ThemeMeta};
use crate::theme::store::DocumentStore;
use crate::theme::theme_json;
use crate::theme::writer::PackageWriter;
use crate::utils::slugify;

pub fn export(cmd: ExportCommand) -> Result<CommandResult> {
    let start_dir = env::current_dir().context("Failed to resolve current directory")?;
    let config = load_config(&start_dir)?.config;

    let theme_dir = PathBuf::from(&config.theme_dir);
    let theme = ThemeMeta::from_theme_dir(&theme_dir)?;
    let target = target_meta(&cmd, &theme);
    let namespace = (target.slug != theme.text_domain).then(|| target.slug.clone());

    let ctx = ExportContext {
        scope: cmd.scope,
        theme,
        target,
        namespace,
        theme_dir,
        parent_theme_dir: config.parent_theme_dir.as_ref().map(PathBuf::from),
        customizations_dir: PathBuf::from(&config.customizations_dir),
        uploads_dir: config.uploads_dir.as_ref().map(PathBuf::from),
        uploads_base_url: config.uploads_base_url.clone(),
        verbose: cmd.common.verbose,
    };

    // Refuse an occupied target before any pipeline work happens.
    let writer = PackageWriter::create(&cmd.out, cmd.force)?;

    let store = DocumentStore::new(
        &ctx.theme_dir,
        ctx.parent_theme_dir.as_deref(),
        &ctx.customizations_dir,
    );
    let docs = store.list_all()?;

    let media = LocalMedia::new(ctx.uploads_dir.clone(), ctx.uploads_base_url.clone());
    let output = pipeline::export(&ctx, &media, docs);

    let mut artifacts = Vec::new();
    let mut manifest: Vec<MediaRef> = Vec::new();
    for doc in output.templates.iter().chain(output.parts.iter()) {
        writer.write_document(doc.kind, &doc.slug, &doc.content)?;
        artifacts.push(format!("{}/{}.html", doc.kind.dir_name(), doc.slug));
        if let Some(pattern) = &doc.pattern {
            writer.write_pattern(&doc.slug, pattern)?;
            artifacts.push(format!("patterns/{}.php", doc.slug));
        }
        for entry in &doc.media {
            if !manifest.contains(entry) {
                manifest.push(entry.clone());
            }
        }
    }
    for entry in &manifest {
        artifacts.push(format!("{}/{}", ASSETS_SUBDIR, entry.file_name));
    }

    let mut warnings = media.materialize(&manifest, &writer.staging_dir().join(ASSETS_SUBDIR))?;

    writer.write_root_file("style.css", &meta::style_css(&ctx.target))?;
    artifacts.push("style.css".to_string());
    writer.write_root_file("readme.txt", &meta::readme_txt(&ctx.target))?;
    artifacts.push("readme.txt".to_string());

    let theme_json_written =
        match theme_json::export_theme_json(&ctx.customizations_dir, &ctx.theme_dir)? {
            Some(json) => {
                writer.write_root_file("theme.json", &json)?;
                artifacts.push("theme.json".to_string());
                true
            }
            None => false,
        };

    let out_dir = writer.publish()?;

    let mut cleared_customizations = 0;
    if cmd.clear_customizations {
        let (removed, clear_warnings) =
            clear::remove_customizations(&ctx.theme_dir, &ctx.customizations_dir)?;
        cleared_customizations = removed.len();
        warnings.extend(clear_warnings);
    }

    let pattern_count = output
        .templates
        .iter()
        .chain(output.parts.iter())
        .filter(|doc| doc.pattern.is_some())
        .count();

    Ok(CommandResult {
        summary: CommandSummary::Export(ExportSummary {
            theme_name: ctx.target.name.clone(),
            out_dir,
            template_count: output.templates.len(),
            part_count: output.parts.len(),
            pattern_count,
            media_count: manifest.len(),
            theme_json_written,
            cleared_customizations,
            artifacts,
        }),
        warnings,
    })
}

/// New-theme metadata from the flags, falling back to the active
/// theme's own header values field by field.
fn target_meta(cmd: &ExportCommand, theme: &ThemeMeta) -> TargetMeta {
    let name = match &cmd.name {
        Some(name) => name.clone(),
        None if !theme.name.is_empty() => theme.name.clone(),
        None => theme.text_domain.clone(),
    };
    let slug = match &cmd.slug {
        Some(slug) => slug.clone(),
        None => match &cmd.name {
            Some(name) => slugify(name),
            None => theme.text_domain.clone(),
        },
    };
    TargetMeta {
        name,
        slug,
        description: cmd
            .description
            .clone()
            .unwrap_or_else(|| theme.description.clone()),
        author: cmd.author.clone().unwrap_or_else(|| theme.author.clone()),
        author_uri: cmd
            .author_uri
            .clone()
            .unwrap_or_else(|| theme.author_uri.clone()),
        theme_uri: cmd
            .theme_uri
            .clone()
            .unwrap_or_else(|| theme.theme_uri.clone()),
        version: theme.version.clone(),
    }
}
