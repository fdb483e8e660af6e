//! Which masters to edit, and how to indent new entries.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::editor::Editor;
use crate::write::WriteOptions;
use crate::Error;

static DEFAULT_MASTERS: &[&str] = &[
    "RomanMasters/SourceCodePro_0.ufo/",
    "RomanMasters/SourceCodePro_2.ufo/",
    "ItalicMasters/SourceCodePro-Italic_0.ufo/",
    "ItalicMasters/SourceCodePro-Italic_2.ufo/",
];

/// Editor configuration.
///
/// A config file is a plist dictionary:
///
/// ```xml
/// <plist version="1.0">
/// <dict>
///     <key>masters</key>
///     <array>
///         <string>Roman/Font-Light.ufo</string>
///         <string>Roman/Font-Bold.ufo</string>
///     </array>
///     <key>indent</key>
///     <string>  </string>
/// </dict>
/// </plist>
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Master directories, in processing order.
    pub masters: Vec<PathBuf>,
    /// The indentation unit for appended entries.
    #[serde(default = "default_indent")]
    pub indent: String,
}

fn default_indent() -> String {
    "    ".into()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            masters: DEFAULT_MASTERS.iter().map(PathBuf::from).collect(),
            indent: default_indent(),
        }
    }
}

impl Config {
    /// Reads a config from the plist file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Config, Error> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::MissingFile(path.to_owned()));
        }
        let config: Config = plist::from_file(path)?;
        config.write_options()?;
        Ok(config)
    }

    /// Resolves relative master paths against `root`.
    pub fn resolve(mut self, root: &Path) -> Config {
        self.masters = self.masters.into_iter().map(|master| root.join(master)).collect();
        self
    }

    /// The [`WriteOptions`] for the configured indentation.
    pub fn write_options(&self) -> Result<WriteOptions, Error> {
        WriteOptions::default().indent(self.indent.clone())
    }

    /// Returns an [`Editor`] for the configured masters.
    pub fn editor(&self) -> Result<Editor, Error> {
        Ok(Editor::new(self.masters.iter().cloned()).with_options(self.write_options()?))
    }
}
