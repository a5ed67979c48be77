use std::path::PathBuf;

use crate::cli::exit_status::ExitStatus;
use crate::theme::patterns::RegisteredPattern;

#[derive(Debug)]
pub enum CommandSummary {
    Export(ExportSummary),
    Clear(ClearSummary),
    Patterns(PatternsSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ExportSummary {
    pub theme_name: String,
    pub out_dir: PathBuf,
    pub template_count: usize,
    pub part_count: usize,
    pub pattern_count: usize,
    pub media_count: usize,
    pub theme_json_written: bool,
    /// Customization files removed by `--clear-customizations`.
    pub cleared_customizations: usize,
    /// Package-relative paths of every written artifact, for verbose output.
    pub artifacts: Vec<String>,
}

#[derive(Debug)]
pub struct ClearSummary {
    /// Files removed, or files that would be removed in a dry run.
    pub removed: Vec<PathBuf>,
    pub is_apply: bool,
}

#[derive(Debug)]
pub enum PatternsSummary {
    List(Vec<PatternListEntry>),
    Get(Box<RegisteredPattern>),
    Updated { slug: String, path: PathBuf },
    Deleted { slug: String, path: PathBuf },
}

#[derive(Debug)]
pub struct PatternListEntry {
    pub id: String,
    pub slug: String,
    pub title: String,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running a themeport command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Problems that did not stop the command: media files that could
    /// not be found, customization files that could not be deleted.
    pub warnings: Vec<String>,
}

impl CommandResult {
    pub fn ok(summary: CommandSummary) -> Self {
        Self {
            summary,
            warnings: Vec::new(),
        }
    }

    pub fn exit_status(&self) -> ExitStatus {
        if !self.warnings.is_empty() {
            return ExitStatus::Failure;
        }
        match &self.summary {
            CommandSummary::Init(init) if !init.created => ExitStatus::Failure,
            _ => ExitStatus::Success,
        }
    }
}
