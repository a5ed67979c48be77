use std::path::PathBuf;
use std::{env, fs};

use anyhow::{Context, Result, bail};

use super::super::args::{PatternsAction, PatternsCommand};
use super::{CommandResult, CommandSummary, PatternListEntry, PatternsSummary};
use crate::config::load_config;
use crate::theme::patterns::PatternRegistry;

pub fn patterns(cmd: PatternsCommand) -> Result<CommandResult> {
    let start_dir = env::current_dir().context("Failed to resolve current directory")?;
    let config = load_config(&start_dir)?.config;
    let theme_dir = PathBuf::from(&config.theme_dir);
    let parent_theme_dir = config.parent_theme_dir.as_ref().map(PathBuf::from);

    let mut registry = PatternRegistry::scan(&theme_dir, parent_theme_dir.as_deref())?;

    let summary = match cmd.action {
        PatternsAction::List => {
            let entries = registry
                .list()
                .iter()
                .map(|registered| PatternListEntry {
                    id: registered.id.clone(),
                    slug: registered.pattern.slug.clone(),
                    title: registered.pattern.title.clone(),
                })
                .collect();
            PatternsSummary::List(entries)
        }
        PatternsAction::Get { id } => {
            let Some(registered) = registry.get(&id) else {
                bail!("No pattern with id {}", id);
            };
            PatternsSummary::Get(Box::new(registered.clone()))
        }
        PatternsAction::Update { id, file } => {
            let body = fs::read_to_string(&file)
                .with_context(|| format!("Failed to read file: {}", file.display()))?;
            let updated = registry.update(&id, &body)?;
            PatternsSummary::Updated {
                slug: updated.pattern.slug.clone(),
                path: updated.path.clone(),
            }
        }
        PatternsAction::Delete { id } => {
            let deleted = registry.delete(&id)?;
            PatternsSummary::Deleted {
                slug: deleted.pattern.slug.clone(),
                path: deleted.path,
            }
        }
    };

    Ok(CommandResult::ok(CommandSummary::Patterns(summary)))
}
