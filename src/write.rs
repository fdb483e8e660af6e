//! Customize serialization behaviour, and choose where output goes.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::Error;

/// Options used when appending entries to a plist.
///
/// You construct `WriteOptions` using builder semantics:
///
/// ```
/// # use glyphreg::WriteOptions;
/// let four_spaces = WriteOptions::default();
///
/// let one_tab = WriteOptions::default().indent("\t").unwrap();
/// assert_eq!(one_tab.array_indent(), "\t\t");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOptions {
    indent_str: Cow<'static, str>,
    array_indent: String,
}

impl Default for WriteOptions {
    fn default() -> Self {
        WriteOptions { indent_str: "    ".into(), array_indent: " ".repeat(8) }
    }
}

impl WriteOptions {
    /// Builder-style method to customize the indentation unit.
    ///
    /// By default, we indent with four spaces.
    ///
    /// The string can contain any number of *a single whitespace character*,
    /// but must not contain multiple different characters. As an example,
    /// "\t\t" is fine, but "\t  \t" is not, because it contains both tabs and
    /// spaces.
    pub fn indent(mut self, indent_str: impl Into<Cow<'static, str>>) -> Result<Self, Error> {
        let indent_str = indent_str.into();
        let first = indent_str.chars().next().filter(|c| *c == ' ' || *c == '\t');
        match first {
            Some(c) if indent_str.chars().all(|other| other == c) => {
                self.array_indent = indent_str.repeat(2);
                self.indent_str = indent_str;
                Ok(self)
            }
            _ => Err(Error::InvalidIndent(indent_str.into_owned())),
        }
    }

    /// The indentation of entries in the top-level dict.
    pub fn dict_indent(&self) -> &str {
        &self.indent_str
    }

    /// The indentation of items in an array nested in the top-level dict.
    pub fn array_indent(&self) -> &str {
        &self.array_indent
    }
}

/// Somewhere to put serialized plist files.
pub trait OutputSink {
    /// Store `data` as the new contents of the file at `path`.
    fn write(&mut self, path: &Path, data: &[u8]) -> Result<(), Error>;
}

/// Writes files to disk, replacing their previous contents.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSink;

impl OutputSink for FileSink {
    fn write(&mut self, path: &Path, data: &[u8]) -> Result<(), Error> {
        log::debug!("writing {} bytes to '{}'", data.len(), path.display());
        close_already::fs::write(path, data).map_err(|e| Error::io(path, e))
    }
}

/// Keeps written files in memory, leaving the disk untouched.
///
/// Files are kept in the order they were first written. Writing the same path
/// again replaces the earlier data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySink {
    files: IndexMap<PathBuf, Vec<u8>>,
}

impl MemorySink {
    /// The data most recently written to `path`.
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&[u8]> {
        self.files.get(path.as_ref()).map(Vec::as_slice)
    }

    /// The number of distinct paths written.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns `true` if nothing was written.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Iterate over written paths and their data, in first-write order.
    pub fn iter(&self) -> impl Iterator<Item = (&Path, &[u8])> + '_ {
        self.files.iter().map(|(path, data)| (path.as_path(), data.as_slice()))
    }
}

impl OutputSink for MemorySink {
    fn write(&mut self, path: &Path, data: &[u8]) -> Result<(), Error> {
        log::debug!("keeping {} bytes for '{}' in memory", data.len(), path.display());
        self.files.insert(path.to_owned(), data.to_vec());
        Ok(())
    }
}
