//! Add and remove glyphs across the masters of a [Unified Font Object][ufo] family.
//!
//! Each master is a UFO directory. A glyph is registered in two places: the
//! default layer's `glyphs/contents.plist`, which maps the glyph name to its
//! `.glif` file, and the `public.glyphOrder` array in `lib.plist`. This crate
//! edits both files in place, as XML trees, so everything it doesn't touch is
//! written back the way it was read.
//!
//! [ufo]: http://unifiedfontobject.org/versions/ufo3
//!
//! # Basic usage:
//!
//! ```no_run
//! use glyphreg::{Config, FileSink, GlyphName};
//!
//! let editor = Config::default().editor().expect("bad config");
//! let glyph = GlyphName::new("f_f_i").expect("bad glyph name");
//! let report = editor.add_glyphs(&[glyph], &mut FileSink).expect("failed to add glyph");
//! assert_eq!(report.warnings(), 0);
//! ```

#![deny(rustdoc::broken_intra_doc_links)]

pub mod command;
pub mod config;
pub mod contents;
mod dict;
mod document;
mod editor;
pub mod error;
pub mod glyph_order;
mod master;
mod name;
mod write;
pub mod xml;

pub use command::{Command, UsageError};
pub use config::Config;
pub use dict::{Dict, Entry};
pub use document::{PlistDocument, XML_PREAMBLE};
pub use editor::{BatchReport, Editor};
pub use error::Error;
pub use master::{Change, FontMaster, MasterReport};
pub use name::GlyphName;
pub use write::{FileSink, MemorySink, OutputSink, WriteOptions};
