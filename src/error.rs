//! Error types.

use std::io::Error as IoError;
use std::path::PathBuf;

use plist::Error as PlistError;
use quick_xml::encoding::EncodingError;
use quick_xml::events::attributes::AttrError;
use quick_xml::Error as QuickXmlError;

/// Errors that occur while editing the glyph registry of a font master.
///
/// Every variant is fatal: the editor stops at the first error, leaving files
/// rewritten earlier in the run as they are.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An expected plist file is missing from a font master.
    #[error("bad format: no file '{}'", .0.display())]
    MissingFile(PathBuf),
    /// The `plist` root element does not contain a `dict`.
    #[error("bad format in file '{}': no top-level 'dict' element", .0.display())]
    MissingDict(PathBuf),
    /// A `dict` element whose children do not alternate between `key` and value.
    #[error("bad format in file '{}': {reason}", .path.display())]
    MalformedDict {
        /// The file containing the dict.
        path: PathBuf,
        /// What was wrong with it.
        reason: DictError,
    },
    /// `lib.plist` has no `public.glyphOrder` key.
    #[error("bad format in file '{}', 'public.glyphOrder' array not found", .0.display())]
    MissingGlyphOrder(PathBuf),
    /// The `public.glyphOrder` value is something other than an `array`.
    #[error("bad format in file '{}', 'public.glyphOrder' is not an array", .0.display())]
    ExpectedArray(PathBuf),
    /// The file is not well-formed XML.
    #[error("failed to parse '{}': {source}", .path.display())]
    Xml {
        /// The file being parsed.
        path: PathBuf,
        /// The underlying error.
        source: XmlError,
    },
    /// An input/output problem while reading or writing a file.
    #[error("failed to access '{}': {source}", .path.display())]
    Io {
        /// The file being accessed.
        path: PathBuf,
        /// The underlying error.
        source: IoError,
    },
    /// A config file could not be read.
    #[error("failed to load config: {0}")]
    Plist(#[from] PlistError),
    /// A glyph name that is empty or contains control characters.
    #[error("invalid glyph name '{0}'")]
    InvalidName(String),
    /// An indentation string that is empty or mixes different characters.
    #[error("invalid indentation {0:?}: expected one repeated whitespace character")]
    InvalidIndent(String),
    /// The requested operation exists only as a placeholder.
    #[error("'{0}' is not implemented")]
    NotImplemented(&'static str),
}

/// The ways in which a `dict` element can be malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DictError {
    /// A value element was found where a `key` was expected.
    #[error("expected a 'key' element, found '{0}'")]
    ExpectedKey(String),
    /// The last `key` has no value following it.
    #[error("key '{0}' has no value")]
    MissingValue(String),
}

/// An error that occurs while reading or writing plist XML.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum XmlError {
    /// The underlying reader or writer failed.
    #[error(transparent)]
    Reader(#[from] QuickXmlError),
    /// An attribute could not be parsed.
    #[error(transparent)]
    Attribute(#[from] AttrError),
    /// Text could not be decoded as UTF-8.
    #[error(transparent)]
    Encoding(#[from] EncodingError),
    /// An entity reference that is neither predefined nor a character reference.
    #[error("unknown entity '&{0};'")]
    UnknownEntity(String),
    /// A closing tag without a matching opening tag.
    #[error("unexpected closing tag '{0}'")]
    UnexpectedClose(String),
    /// The document ended while elements were still open.
    #[error("unexpected end of document")]
    UnexpectedEof,
    /// The document has no root element.
    #[error("missing root element")]
    MissingRoot,
    /// The root element is not `plist`.
    #[error("expected a 'plist' root element, found '{0}'")]
    WrongRoot(String),
}

impl Error {
    pub(crate) fn xml(path: impl Into<PathBuf>, source: impl Into<XmlError>) -> Self {
        Error::Xml { path: path.into(), source: source.into() }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: IoError) -> Self {
        Error::Io { path: path.into(), source }
    }
}
