//! # themeport
//!
//! Exports a site's block templates, parts, styles, and media into a
//! portable block theme package.
//!
//! ## Module Structure
//!
//! - `block`: Block comment tree parsing and serialization
//! - `cli`: Command line interface and command implementations
//! - `config`: Configuration file handling
//! - `pipeline`: The export transformation stages
//! - `theme`: Theme-side concerns (documents, metadata, patterns, output)
//! - `utils`: Common utility functions

pub mod block;
pub mod cli;
pub mod config;
pub mod pipeline;
pub mod theme;
pub mod utils;
