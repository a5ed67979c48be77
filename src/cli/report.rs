//! Report formatting and printing for command results.
//!
//! Kept separate from command logic so every command prints through
//! the same conventions and output stays easy to exercise in tests.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    ClearSummary, CommandResult, CommandSummary, ExportSummary, InitSummary, PatternListEntry,
    PatternsSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::theme::patterns::RegisteredPattern;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a command's report to stdout and its warnings to stderr.
pub fn print(result: &CommandResult, verbose: bool) {
    print_to(result, verbose, &mut io::stdout().lock());
    print_warnings(&result.warnings, &mut io::stderr().lock());
}

fn print_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    match &result.summary {
        CommandSummary::Export(summary) => print_export(summary, verbose, writer),
        CommandSummary::Clear(summary) => print_clear(summary, verbose, writer),
        CommandSummary::Patterns(summary) => print_patterns(summary, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

fn print_warnings<W: Write>(warnings: &[String], writer: &mut W) {
    for warning in warnings {
        let _ = writeln!(writer, "{} {}", "warning:".bold().yellow(), warning);
    }
}

fn print_export<W: Write>(summary: &ExportSummary, verbose: bool, writer: &mut W) {
    if verbose {
        for artifact in &summary.artifacts {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), artifact);
        }
    }

    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Exported {} to {} ({})",
            summary.theme_name,
            summary.out_dir.display(),
            describe_counts(summary)
        )
        .green()
    );

    if summary.cleared_customizations > 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Removed {} customization {}",
                summary.cleared_customizations,
                if summary.cleared_customizations == 1 {
                    "file"
                } else {
                    "files"
                }
            )
            .green()
        );
    }
}

fn describe_counts(summary: &ExportSummary) -> String {
    let mut parts = vec![
        count_noun(summary.template_count, "template"),
        count_noun(summary.part_count, "part"),
    ];
    if summary.pattern_count > 0 {
        parts.push(count_noun(summary.pattern_count, "pattern"));
    }
    if summary.media_count > 0 {
        parts.push(count_noun(summary.media_count, "image"));
    }
    if summary.theme_json_written {
        parts.push("theme.json".to_string());
    }
    parts.join(", ")
}

fn count_noun(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, if count == 1 { "" } else { "s" })
}

fn print_clear<W: Write>(summary: &ClearSummary, verbose: bool, writer: &mut W) {
    if summary.is_apply {
        if verbose {
            for path in &summary.removed {
                let _ = writeln!(writer, "  {} {}", "-->".blue(), path.display());
            }
        }
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Removed {} customization {}",
                summary.removed.len(),
                if summary.removed.len() == 1 {
                    "file"
                } else {
                    "files"
                }
            )
            .green()
        );
    } else if summary.removed.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "No saved customizations found".green()
        );
    } else {
        for path in &summary.removed {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), path.display());
        }
        let _ = writeln!(
            writer,
            "{} {} customization {}.",
            "Would remove".yellow().bold(),
            summary.removed.len(),
            if summary.removed.len() == 1 {
                "file"
            } else {
                "files"
            }
        );
        let _ = writeln!(writer, "Run with {} to remove them.", "--yes".cyan());
    }
}

fn print_patterns<W: Write>(summary: &PatternsSummary, writer: &mut W) {
    match summary {
        PatternsSummary::List(entries) => print_pattern_list(entries, writer),
        PatternsSummary::Get(registered) => print_pattern(registered, writer),
        PatternsSummary::Updated { slug, path } => {
            let _ = writeln!(
                writer,
                "{} {}",
                SUCCESS_MARK.green(),
                format!("Updated pattern {} ({})", slug, path.display()).green()
            );
        }
        PatternsSummary::Deleted { slug, path } => {
            let _ = writeln!(
                writer,
                "{} {}",
                SUCCESS_MARK.green(),
                format!("Deleted pattern {} ({})", slug, path.display()).green()
            );
        }
    }
}

fn print_pattern_list<W: Write>(entries: &[PatternListEntry], writer: &mut W) {
    if entries.is_empty() {
        let _ = writeln!(writer, "No patterns found");
        return;
    }

    let id_width = column_width(entries.iter().map(|entry| entry.id.as_str()));
    let slug_width = column_width(entries.iter().map(|entry| entry.slug.as_str()));
    for entry in entries {
        let _ = writeln!(
            writer,
            "{}  {}  {}",
            pad(&entry.id, id_width).cyan(),
            pad(&entry.slug, slug_width),
            entry.title.dimmed()
        );
    }
}

fn print_pattern<W: Write>(registered: &RegisteredPattern, writer: &mut W) {
    let pattern = &registered.pattern;
    let _ = writeln!(writer, "{} {}", "Id:".bold(), registered.id);
    let _ = writeln!(writer, "{} {}", "Slug:".bold(), pattern.slug);
    let _ = writeln!(writer, "{} {}", "Title:".bold(), pattern.title);
    if !registered.description.is_empty() {
        let _ = writeln!(writer, "{} {}", "Description:".bold(), registered.description);
    }
    let _ = writeln!(
        writer,
        "{} {}",
        "Categories:".bold(),
        pattern.categories.join(", ")
    );
    let _ = writeln!(writer, "{} {}", "Synced:".bold(), pattern.sync.as_header());
    let _ = writeln!(writer, "{} {}", "File:".bold(), registered.path.display());
    let _ = writeln!(writer);
    let _ = writeln!(writer, "{}", pattern.content);
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} already exists",
            FAILURE_MARK.red(),
            CONFIG_FILE_NAME
        );
    }
}

/// Pad before colorizing so color codes never skew column alignment.
fn pad(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(UnicodeWidthStr::width(text));
    format!("{}{}", text, " ".repeat(padding))
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>) -> usize {
    values.map(UnicodeWidthStr::width).max().unwrap_or(0)
}
