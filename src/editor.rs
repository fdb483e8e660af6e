//! Adding and removing glyphs across a set of font masters.

use std::path::PathBuf;

use crate::command::Command;
use crate::master::{FontMaster, MasterReport};
use crate::name::GlyphName;
use crate::write::{OutputSink, WriteOptions};
use crate::Error;

/// Edits the glyph registry of every master in a font family.
///
/// # Examples
///
/// ```no_run
/// use glyphreg::{Editor, FileSink, GlyphName};
///
/// let editor = Editor::new(["Roman/Font-Light.ufo", "Roman/Font-Bold.ufo"]);
/// let glyphs = [GlyphName::new("f_f_i").unwrap()];
/// let report = editor.add_glyphs(&glyphs, &mut FileSink).expect("failed to add glyphs");
/// println!("{} files rewritten", report.modified_files());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Editor {
    masters: Vec<FontMaster>,
    options: WriteOptions,
}

/// Everything that happened during one editor run, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    entries: Vec<(GlyphName, MasterReport)>,
}

impl BatchReport {
    /// Iterate over (glyph, master report) pairs.
    pub fn iter(&self) -> impl Iterator<Item = &(GlyphName, MasterReport)> + '_ {
        self.entries.iter()
    }

    /// The number of files that were rewritten.
    pub fn modified_files(&self) -> usize {
        self.entries
            .iter()
            .flat_map(|(_, report)| [report.contents, report.glyph_order])
            .filter(|change| change.is_modified())
            .count()
    }

    /// The number of warnings that were logged.
    pub fn warnings(&self) -> usize {
        self.entries
            .iter()
            .flat_map(|(_, report)| [report.contents, report.glyph_order])
            .filter(|change| change.is_warning())
            .count()
    }
}

impl Editor {
    /// Returns an editor for the masters at the given paths, in order.
    pub fn new<P: Into<PathBuf>>(masters: impl IntoIterator<Item = P>) -> Self {
        Editor {
            masters: masters.into_iter().map(FontMaster::new).collect(),
            options: WriteOptions::default(),
        }
    }

    /// Builder-style method to set the [`WriteOptions`].
    pub fn with_options(mut self, options: WriteOptions) -> Self {
        self.options = options;
        self
    }

    /// The masters, in processing order.
    pub fn masters(&self) -> &[FontMaster] {
        &self.masters
    }

    /// Adds (`present == true`) or removes each glyph in every master.
    ///
    /// Glyphs are handled in the order given, and for each glyph the masters
    /// in their configured order. The first error stops the whole run.
    pub fn set_glyphs_presence(
        &self,
        glyphs: &[GlyphName],
        present: bool,
        sink: &mut dyn OutputSink,
    ) -> Result<BatchReport, Error> {
        let mut report = BatchReport::default();
        for glyph in glyphs {
            for master in &self.masters {
                let master_report =
                    master.set_glyph_presence(glyph, present, sink, &self.options)?;
                report.entries.push((glyph.clone(), master_report));
            }
        }
        Ok(report)
    }

    /// Adds each glyph to every master.
    pub fn add_glyphs(
        &self,
        glyphs: &[GlyphName],
        sink: &mut dyn OutputSink,
    ) -> Result<BatchReport, Error> {
        self.set_glyphs_presence(glyphs, true, sink)
    }

    /// Removes each glyph from every master.
    pub fn remove_glyphs(
        &self,
        glyphs: &[GlyphName],
        sink: &mut dyn OutputSink,
    ) -> Result<BatchReport, Error> {
        self.set_glyphs_presence(glyphs, false, sink)
    }

    /// Adds a ligature of `glyphs` drawn by `ligature`. Not implemented.
    pub fn add_ligature(&self, _glyphs: &[GlyphName], _ligature: &GlyphName) -> Result<(), Error> {
        Err(Error::NotImplemented("add ligature"))
    }

    /// Removes the ligature of `glyphs`. Not implemented.
    pub fn remove_ligature(&self, _glyphs: &[GlyphName]) -> Result<(), Error> {
        Err(Error::NotImplemented("remove ligature"))
    }

    /// Runs a parsed command line.
    pub fn run(&self, command: &Command, sink: &mut dyn OutputSink) -> Result<BatchReport, Error> {
        match command {
            Command::AddGlyphs(glyphs) => self.add_glyphs(glyphs, sink),
            Command::RemoveGlyphs(glyphs) => self.remove_glyphs(glyphs, sink),
            Command::AddLigature { glyphs, ligature } => {
                self.add_ligature(glyphs, ligature).map(|_| BatchReport::default())
            }
            Command::RemoveLigature(glyphs) => {
                self.remove_ligature(glyphs).map(|_| BatchReport::default())
            }
        }
    }
}
