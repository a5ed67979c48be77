//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all
//! themeport commands. It uses clap's derive API for declarative
//! argument parsing.
//!
//! ## Commands
//!
//! - `export`: Run the transformation pipeline and write a theme package
//! - `clear-customizations`: Delete saved template and part customizations
//! - `patterns`: Inspect and edit the active theme's pattern files
//! - `init`: Initialize themeport configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::pipeline::context::Scope;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Export(cmd)) => cmd.common.verbose,
            Some(Command::ClearCustomizations(cmd)) => cmd.common.verbose,
            Some(Command::Patterns(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ExportCommand {
    /// Which documents to export
    #[arg(long, value_enum, default_value = "all")]
    pub scope: Scope,

    /// Output directory for the theme package
    #[arg(long, default_value = "./theme-export")]
    pub out: PathBuf,

    /// Name of the exported theme (defaults to the active theme's name)
    #[arg(long)]
    pub name: Option<String>,

    /// Slug of the exported theme (defaults to the slugified name)
    #[arg(long)]
    pub slug: Option<String>,

    /// Description written into style.css (defaults to the active theme's)
    #[arg(long)]
    pub description: Option<String>,

    /// Author written into style.css (defaults to the active theme's)
    #[arg(long)]
    pub author: Option<String>,

    /// Author URI written into style.css (defaults to the active theme's)
    #[arg(long)]
    pub author_uri: Option<String>,

    /// Theme URI written into style.css (defaults to the active theme's)
    #[arg(long)]
    pub theme_uri: Option<String>,

    /// Replace the output directory if it already exists
    #[arg(long)]
    pub force: bool,

    /// Delete saved customizations after a successful export
    #[arg(long)]
    pub clear_customizations: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ClearCommand {
    /// Actually delete the files (default is a dry-run preview)
    #[arg(long)]
    pub yes: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct PatternsCommand {
    #[command(subcommand)]
    pub action: PatternsAction,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum PatternsAction {
    /// List registered patterns with their derived ids
    List,
    /// Print one pattern's header fields and body
    Get {
        /// Pattern id as shown by `patterns list`
        id: String,
    },
    /// Replace a pattern's body, keeping its header identity
    Update {
        /// Pattern id as shown by `patterns list`
        id: String,
        /// File holding the new body markup
        #[arg(long)]
        file: PathBuf,
    },
    /// Delete a pattern file
    Delete {
        /// Pattern id as shown by `patterns list`
        id: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Export templates and parts into a portable theme package
    Export(ExportCommand),
    /// Delete user-saved template and part customizations
    ClearCustomizations(ClearCommand),
    /// Inspect and edit the active theme's pattern files
    Patterns(PatternsCommand),
    /// Initialize a new .themeportrc.json configuration file
    Init,
}
