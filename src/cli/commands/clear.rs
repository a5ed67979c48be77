use std::env;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::{fs, io};

use anyhow::{Context, Result};

use super::super::args::ClearCommand;
use super::{ClearSummary, CommandResult, CommandSummary};
use crate::config::load_config;
use crate::theme::store::DocumentStore;

pub fn clear_customizations(cmd: ClearCommand) -> Result<CommandResult> {
    let start_dir = env::current_dir().context("Failed to resolve current directory")?;
    let config = load_config(&start_dir)?.config;
    let theme_dir = PathBuf::from(&config.theme_dir);
    let customizations_dir = PathBuf::from(&config.customizations_dir);

    if !cmd.yes {
        let store = DocumentStore::new(&theme_dir, None, &customizations_dir);
        let pending = store.user_customized_paths()?;
        return Ok(CommandResult::ok(CommandSummary::Clear(ClearSummary {
            removed: pending,
            is_apply: false,
        })));
    }

    let (removed, warnings) = remove_customizations(&theme_dir, &customizations_dir)?;
    Ok(CommandResult {
        summary: CommandSummary::Clear(ClearSummary {
            removed,
            is_apply: true,
        }),
        warnings,
    })
}

/// Delete every saved customization document, parts before templates.
///
/// A file that disappeared between listing and deletion is not a
/// problem; any other failure is collected as a warning so the rest of
/// the files still get removed.
pub(super) fn remove_customizations(
    theme_dir: &Path,
    customizations_dir: &Path,
) -> Result<(Vec<PathBuf>, Vec<String>)> {
    let store = DocumentStore::new(theme_dir, None, customizations_dir);
    let mut removed = Vec::new();
    let mut warnings = Vec::new();

    for path in store.user_customized_paths()? {
        match fs::remove_file(&path) {
            Ok(()) => removed.push(path),
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(err) => warnings.push(describe_failure(&path, &err)),
        }
    }

    Ok((removed, warnings))
}

fn describe_failure(path: &Path, err: &io::Error) -> String {
    format!("Failed to remove {}: {}", path.display(), err)
}
