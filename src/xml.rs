//! A small XML element tree.
//!
//! Each element owns the text between its start tag and its first child
//! (`text`), and the text between its end tag and whatever follows it
//! (`tail`). Editing the tree and writing it back therefore leaves the
//! formatting of untouched regions alone.
//!
//! The XML declaration, doctype, comments and processing instructions are not
//! part of the tree; plist files get a fixed preamble when they are written.

use std::io::{self, Write};

use quick_xml::escape::{partial_escape, resolve_xml_entity};
use quick_xml::events::{BytesEnd, BytesRef, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::error::XmlError;

/// An XML element, with the whitespace around its children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// The tag name.
    pub name: String,
    /// Attributes in document order, unescaped.
    pub attributes: Vec<(String, String)>,
    /// Text before the first child (or all the text, for leaf elements).
    pub text: String,
    /// Text after the end tag, before the next sibling or the parent's end tag.
    pub tail: String,
    /// Child elements.
    pub children: Vec<Element>,
    // whether the element was written as `<name/>` in the source
    pub(crate) empty_tag: bool,
}

impl Element {
    /// Returns a new element with no attributes, text or children.
    pub fn new(name: impl Into<String>) -> Self {
        Element { name: name.into(), ..Default::default() }
    }

    /// Returns a new leaf element holding `text`.
    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Element { name: name.into(), text: text.into(), ..Default::default() }
    }

    /// The first child with the given tag name.
    pub fn find(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Appends `child` as the last child, keeping the indentation consistent.
    ///
    /// The previous last child's tail becomes a newline followed by `indent`,
    /// and the new child takes over the whitespace that used to precede the
    /// parent's closing tag. A parent with no children and no text (such as
    /// `<array/>`) gets its closing tag on a line of its own.
    pub fn append_child(&mut self, mut child: Element, indent: &str) {
        let separator = format!("\n{indent}");
        child.tail = match self.children.last_mut() {
            Some(last) => std::mem::replace(&mut last.tail, separator),
            None => closing_whitespace(std::mem::replace(&mut self.text, separator)),
        };
        self.children.push(child);
    }

    /// Removes and returns the child at `index`.
    ///
    /// If the last child is removed, its tail is handed to the new last child
    /// (or the parent's text), so the closing tag keeps its indentation.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove_child(&mut self, index: usize) -> Element {
        let removed = self.children.remove(index);
        if index == self.children.len() {
            match self.children.last_mut() {
                Some(last) => last.tail = removed.tail.clone(),
                None => self.text = removed.tail.clone(),
            }
        }
        removed
    }

    /// Parses `xml` and returns its root element.
    ///
    /// Whitespace following the root element is kept as its tail.
    pub fn parse(xml: &str) -> Result<Element, XmlError> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().allow_unmatched_ends = true;
        // the bottom of the stack collects the root element and stray text
        let mut stack = vec![Element::default()];

        loop {
            match reader.read_event()? {
                Event::Start(start) => stack.push(element_from_start(&reader, &start)?),
                Event::Empty(start) => {
                    let mut element = element_from_start(&reader, &start)?;
                    element.empty_tag = true;
                    attach(&mut stack, element);
                }
                Event::End(end) => {
                    if stack.len() < 2 {
                        let name = reader.decoder().decode(end.name().as_ref())?.into_owned();
                        return Err(XmlError::UnexpectedClose(name));
                    }
                    if let Some(element) = stack.pop() {
                        attach(&mut stack, element);
                    }
                }
                Event::Text(text) => push_text(&mut stack, &text.decode()?),
                Event::CData(data) => push_text(&mut stack, &data.decode()?),
                Event::GeneralRef(reference) => {
                    push_text(&mut stack, &resolve_reference(&reference)?)
                }
                Event::Eof => break,
                _ => (),
            }
        }

        if stack.len() > 1 {
            return Err(XmlError::UnexpectedEof);
        }
        stack
            .pop()
            .and_then(|document| document.children.into_iter().next())
            .ok_or(XmlError::MissingRoot)
    }

    /// Writes this element, its children and its tail.
    pub(crate) fn write<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        self.write_with(writer, !self.children.is_empty(), |writer| {
            self.children.iter().try_for_each(|child| child.write(writer))
        })
    }

    /// Writes this element and its tail, with `write_children` producing
    /// everything between the text and the end tag.
    pub(crate) fn write_with<W, F>(
        &self,
        writer: &mut Writer<W>,
        has_children: bool,
        write_children: F,
    ) -> io::Result<()>
    where
        W: Write,
        F: FnOnce(&mut Writer<W>) -> io::Result<()>,
    {
        let mut start = BytesStart::new(self.name.as_str());
        for (key, value) in &self.attributes {
            start.push_attribute((key.as_str(), value.as_str()));
        }

        if self.empty_tag && self.text.is_empty() && !has_children {
            writer.write_event(Event::Empty(start))?;
        } else {
            writer.write_event(Event::Start(start))?;
            write_text(writer, &self.text)?;
            write_children(writer)?;
            writer.write_event(Event::End(BytesEnd::new(self.name.as_str())))?;
        }
        write_text(writer, &self.tail)
    }
}

/// The whitespace before a closing tag once the first child is added.
pub(crate) fn closing_whitespace(text: String) -> String {
    if text.is_empty() {
        "\n".into()
    } else {
        text
    }
}

fn element_from_start(reader: &Reader<&[u8]>, start: &BytesStart) -> Result<Element, XmlError> {
    let decoder = reader.decoder();
    let mut element = Element::new(decoder.decode(start.name().as_ref())?);
    for attr in start.attributes() {
        let attr = attr?;
        let key = decoder.decode(attr.key.as_ref())?.into_owned();
        let value = attr.unescape_value()?.into_owned();
        element.attributes.push((key, value));
    }
    Ok(element)
}

fn attach(stack: &mut [Element], element: Element) {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element);
    }
}

fn push_text(stack: &mut [Element], text: &str) {
    let Some(current) = stack.last_mut() else {
        return;
    };
    match current.children.last_mut() {
        Some(last) => last.tail.push_str(text),
        None => current.text.push_str(text),
    }
}

fn resolve_reference(reference: &BytesRef) -> Result<String, XmlError> {
    if let Some(ch) = reference.resolve_char_ref()? {
        return Ok(ch.to_string());
    }
    let name = reference.decode()?;
    resolve_xml_entity(&name)
        .map(String::from)
        .ok_or_else(|| XmlError::UnknownEntity(name.into_owned()))
}

fn write_text<W: Write>(writer: &mut Writer<W>, text: &str) -> io::Result<()> {
    if text.is_empty() {
        return Ok(());
    }
    writer.write_event(Event::Text(BytesText::from_escaped(partial_escape(text))))
}
