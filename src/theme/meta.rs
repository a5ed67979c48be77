//! Theme identity: the active theme's header and the generated
//! metadata files of the exported package.

use std::path::Path;

use anyhow::Result;

use crate::pipeline::context::TargetMeta;
use crate::theme::headers;

/// Identity of the active theme, read from its `style.css` header.
#[derive(Debug, Clone, Default)]
pub struct ThemeMeta {
    pub name: String,
    pub description: String,
    pub author: String,
    pub author_uri: String,
    pub theme_uri: String,
    pub text_domain: String,
    pub version: String,
}

impl ThemeMeta {
    /// Read `<theme_dir>/style.css`. A missing Text Domain falls back
    /// to the theme directory's name, the same resolution the live
    /// platform applies.
    pub fn from_theme_dir(theme_dir: &Path) -> Result<Self> {
        let block = headers::read_header_block(&theme_dir.join("style.css"))?;
        let fields = headers::header_fields(&block);

        let mut text_domain = headers::field(&fields, "Text Domain").to_string();
        if text_domain.is_empty() {
            if let Some(dir_name) = theme_dir.file_name().and_then(|name| name.to_str()) {
                text_domain = dir_name.to_string();
            }
        }

        Ok(Self {
            name: headers::field(&fields, "Theme Name").to_string(),
            description: headers::field(&fields, "Description").to_string(),
            author: headers::field(&fields, "Author").to_string(),
            author_uri: headers::field(&fields, "Author URI").to_string(),
            theme_uri: headers::field(&fields, "Theme URI").to_string(),
            version: headers::field(&fields, "Version").to_string(),
            text_domain,
        })
    }
}

/// Render the exported theme's `style.css` header block.
pub fn style_css(target: &TargetMeta) -> String {
    let version = if target.version.is_empty() {
        "1.0.0"
    } else {
        target.version.as_str()
    };
    format!(
        "/*\n\
         Theme Name: {name}\n\
         Theme URI: {theme_uri}\n\
         Author: {author}\n\
         Author URI: {author_uri}\n\
         Description: {description}\n\
         Requires at least: 5.8\n\
         Tested up to: 5.8\n\
         Requires PHP: 5.7\n\
         Version: {version}\n\
         License: GNU General Public License v2 or later\n\
         License URI: https://raw.githubusercontent.com/Automattic/themes/trunk/LICENSE\n\
         Text Domain: {slug}\n\
         Tags: one-column, custom-colors, custom-menu, custom-logo, editor-style, featured-images, full-site-editing, rtl-language-support, theme-options, threaded-comments, translation-ready, wide-blocks\n\
         */",
        name = target.name,
        theme_uri = target.theme_uri,
        author = target.author,
        author_uri = target.author_uri,
        description = target.description,
        version = version,
        slug = target.slug,
    )
}

/// Render the exported theme's `readme.txt`.
pub fn readme_txt(target: &TargetMeta) -> String {
    format!(
        "=== {name} ===\n\
         Contributors: {author}\n\
         Requires at least: 5.8\n\
         Tested up to: 5.8\n\
         Requires PHP: 5.7\n\
         License: GPLv2 or later\n\
         License URI: http://www.gnu.org/licenses/gpl-2.0.html\n\
         \n\
         == Description ==\n\
         \n\
         {description}\n\
         \n\
         == Changelog ==\n\
         \n\
         = 1.0.0 =\n\
         * Initial release\n\
         \n\
         == Copyright ==\n\
         \n\
         {name} WordPress Theme, (C) {author}\n\
         {name} is distributed under the terms of the GNU GPL.\n\
         \n\
         This program is free software: you can redistribute it and/or modify\n\
         it under the terms of the GNU General Public License as published by\n\
         the Free Software Foundation, either version 2 of the License, or\n\
         (at your option) any later version.\n\
         \n\
         This program is distributed in the hope that it will be useful,\n\
         but WITHOUT ANY WARRANTY; without even the implied warranty of\n\
         MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the\n\
         GNU General Public License for more details.\n",
        name = target.name,
        author = target.author,
        description = target.description,
    )
}
