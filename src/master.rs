//! A single font master: one UFO directory.

use std::path::{Path, PathBuf};

use crate::document::PlistDocument;
use crate::name::GlyphName;
use crate::write::{OutputSink, WriteOptions};
use crate::{contents, glyph_order, Error};

static LIB_FILE: &str = "lib.plist";
static CONTENTS_FILE: &str = "contents.plist";
static DEFAULT_GLYPHS_DIRNAME: &str = "glyphs";

/// What happened to one file when a glyph was added or removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// The glyph was added and the file rewritten.
    Added,
    /// The glyph was removed and the file rewritten.
    Removed,
    /// The glyph was to be added, but was already there.
    AlreadyPresent,
    /// The glyph was to be removed, but was not there.
    NotFound,
}

impl Change {
    /// Returns `true` if the file was rewritten.
    pub fn is_modified(self) -> bool {
        matches!(self, Change::Added | Change::Removed)
    }

    /// Returns `true` if this outcome was reported as a warning.
    pub fn is_warning(self) -> bool {
        !self.is_modified()
    }
}

/// The outcome of adding or removing one glyph in one master.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MasterReport {
    /// The master directory.
    pub master: PathBuf,
    /// What happened to `glyphs/contents.plist`.
    pub contents: Change,
    /// What happened to `lib.plist`.
    pub glyph_order: Change,
}

/// A UFO directory holding `glyphs/contents.plist` and `lib.plist`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontMaster {
    path: PathBuf,
}

impl FontMaster {
    /// Returns a master rooted at `path`. Nothing is read until it is edited.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FontMaster { path: path.into() }
    }

    /// The master directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The path of the default layer's `contents.plist`.
    pub fn contents_path(&self) -> PathBuf {
        self.path.join(DEFAULT_GLYPHS_DIRNAME).join(CONTENTS_FILE)
    }

    /// The path of the font's `lib.plist`.
    pub fn lib_path(&self) -> PathBuf {
        self.path.join(LIB_FILE)
    }

    /// Adds `glyph` to this master (`present == true`) or removes it.
    ///
    /// `contents.plist` is handled completely before `lib.plist` is read. Each
    /// file is written to `sink` only if it changed. A missing file, or a
    /// `lib.plist` without a glyph order, is an error; in that case files
    /// already written stay written.
    pub fn set_glyph_presence(
        &self,
        glyph: &GlyphName,
        present: bool,
        sink: &mut dyn OutputSink,
        options: &WriteOptions,
    ) -> Result<MasterReport, Error> {
        let contents = edit_file(&self.contents_path(), sink, |doc| {
            Ok(contents::set_glyph(doc, glyph, present, options))
        })?;
        let glyph_order = edit_file(&self.lib_path(), sink, |doc| {
            glyph_order::set_glyph(doc, glyph, present, options)
        })?;
        Ok(MasterReport { master: self.path.clone(), contents, glyph_order })
    }
}

fn edit_file(
    path: &Path,
    sink: &mut dyn OutputSink,
    edit: impl FnOnce(&mut PlistDocument) -> Result<Change, Error>,
) -> Result<Change, Error> {
    log::info!("Processing file '{}'.", path.display());
    let mut doc = PlistDocument::load(path)?;
    let change = edit(&mut doc)?;
    if change.is_modified() {
        doc.save(sink)?;
    }
    Ok(change)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::write::MemorySink;

    fn write_master(dir: &Path) {
        fs::create_dir_all(dir.join("glyphs")).unwrap();
        fs::write(
            dir.join("glyphs/contents.plist"),
            "<plist version=\"1.0\">\n<dict>\n    <key>A</key>\n    <string>A.glif</string>\n</dict>\n</plist>\n",
        )
        .unwrap();
        fs::write(
            dir.join("lib.plist"),
            "<plist version=\"1.0\">\n<dict>\n    <key>public.glyphOrder</key>\n    <array>\n        <string>A</string>\n    </array>\n</dict>\n</plist>\n",
        )
        .unwrap();
    }

    #[test]
    fn paths() {
        let master = FontMaster::new("RomanMasters/SourceCodePro_0.ufo/");
        assert_eq!(
            master.contents_path(),
            Path::new("RomanMasters/SourceCodePro_0.ufo/glyphs/contents.plist")
        );
        assert_eq!(master.lib_path(), Path::new("RomanMasters/SourceCodePro_0.ufo/lib.plist"));
    }

    #[test]
    fn only_changed_files_are_written() {
        let dir = tempfile::tempdir().unwrap();
        write_master(dir.path());
        let master = FontMaster::new(dir.path());
        let mut sink = MemorySink::default();
        let glyph = GlyphName::new("A").unwrap();
        let report =
            master.set_glyph_presence(&glyph, true, &mut sink, &WriteOptions::default()).unwrap();
        assert_eq!(report.contents, Change::AlreadyPresent);
        assert_eq!(report.glyph_order, Change::AlreadyPresent);
        assert!(sink.is_empty());

        let glyph = GlyphName::new("B").unwrap();
        let report =
            master.set_glyph_presence(&glyph, true, &mut sink, &WriteOptions::default()).unwrap();
        assert_eq!(report.contents, Change::Added);
        assert_eq!(report.glyph_order, Change::Added);
        assert_eq!(sink.len(), 2);
        let written: Vec<_> = sink.iter().map(|(path, _)| path.to_owned()).collect();
        assert_eq!(written, vec![master.contents_path(), master.lib_path()]);
    }

    #[test]
    fn missing_lib_after_contents_written() {
        let dir = tempfile::tempdir().unwrap();
        write_master(dir.path());
        fs::remove_file(dir.path().join("lib.plist")).unwrap();

        let master = FontMaster::new(dir.path());
        let mut sink = MemorySink::default();
        let glyph = GlyphName::new("B").unwrap();
        let result = master.set_glyph_presence(&glyph, true, &mut sink, &WriteOptions::default());
        assert!(matches!(result, Err(Error::MissingFile(path)) if path == master.lib_path()));
        assert!(sink.get(master.contents_path()).is_some());
    }

    #[test]
    fn change_flags() {
        assert!(Change::Added.is_modified());
        assert!(Change::Removed.is_modified());
        assert!(Change::AlreadyPresent.is_warning());
        assert!(Change::NotFound.is_warning());
    }
}
