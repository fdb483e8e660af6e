//! Loading and saving plist files as editable XML trees.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use quick_xml::Writer;

use crate::dict::Dict;
use crate::error::XmlError;
use crate::write::OutputSink;
use crate::xml::Element;
use crate::Error;

/// The declaration and doctype written at the top of every saved plist.
pub static XML_PREAMBLE: &str = concat!(
    "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
    "<!DOCTYPE plist PUBLIC \"-//Apple Computer//DTD PLIST 1.0//EN\" ",
    "\"http://www.apple.com/DTDs/PropertyList-1.0.dtd\">\n",
);

/// A plist file whose root is a `<plist>` element holding a `<dict>`.
///
/// Only the parts of the tree that are edited change when the document is
/// written back; everything else is reproduced as it was read, apart from the
/// XML declaration and doctype, which are replaced by [`XML_PREAMBLE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlistDocument {
    path: PathBuf,
    // the `plist` element; the child at `dict_index` is an empty stand-in for `dict`
    root: Element,
    dict_index: usize,
    dict: Dict,
}

impl PlistDocument {
    /// Reads and parses the plist file at `path`.
    ///
    /// A missing file is reported as [`Error::MissingFile`].
    pub fn load(path: impl AsRef<Path>) -> Result<PlistDocument, Error> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::MissingFile(path.to_owned()));
        }
        let xml = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        PlistDocument::from_xml(path, &xml)
    }

    /// Parses `xml` as the contents of the file at `path`.
    ///
    /// The path is used for error messages and as the destination when the
    /// document is saved.
    pub fn from_xml(path: impl Into<PathBuf>, xml: &str) -> Result<PlistDocument, Error> {
        let path = path.into();
        let mut root = match Element::parse(xml) {
            Ok(root) if root.name == "plist" => root,
            Ok(root) => return Err(Error::xml(path, XmlError::WrongRoot(root.name))),
            Err(e) => return Err(Error::xml(path, e)),
        };
        let Some(dict_index) = root.children.iter().position(|child| child.name == "dict") else {
            return Err(Error::MissingDict(path));
        };
        let dict_element = std::mem::take(&mut root.children[dict_index]);
        let dict = match Dict::from_element(dict_element) {
            Ok(dict) => dict,
            Err(reason) => return Err(Error::MalformedDict { path, reason }),
        };
        Ok(PlistDocument { path, root, dict_index, dict })
    }

    /// The file this document was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The top-level dict.
    pub fn dict(&self) -> &Dict {
        &self.dict
    }

    /// A mutable reference to the top-level dict.
    pub fn dict_mut(&mut self) -> &mut Dict {
        &mut self.dict
    }

    /// Serialize the document, preamble included.
    pub fn write_to<W: Write>(&self, writer: W) -> io::Result<()> {
        let mut writer = Writer::new(writer);
        writer.get_mut().write_all(XML_PREAMBLE.as_bytes())?;
        self.root.write_with(&mut writer, true, |writer| {
            for (i, child) in self.root.children.iter().enumerate() {
                if i == self.dict_index {
                    self.dict.write(writer)?;
                } else {
                    child.write(writer)?;
                }
            }
            Ok(())
        })
    }

    /// The serialized document, as UTF-8 bytes.
    pub fn to_xml(&self) -> Result<Vec<u8>, Error> {
        let mut buf = Vec::new();
        self.write_to(&mut buf).map_err(|e| Error::io(&self.path, e))?;
        Ok(buf)
    }

    /// Serialize the document and hand it to `sink`, under its own path.
    pub fn save(&self, sink: &mut dyn OutputSink) -> Result<(), Error> {
        let data = self.to_xml()?;
        sink.write(&self.path, &data)
    }
}
