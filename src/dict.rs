//! Plist dictionaries as ordered key/value entries.

use std::io::{self, Write};

use quick_xml::Writer;

use crate::error::DictError;
use crate::xml::{closing_whitespace, Element};

/// A plist `<dict>` element.
///
/// In the XML a value is simply the sibling following its `<key>`; here each
/// key is paired with its value when the dict is built, so the two can only
/// be added or removed together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dict {
    // the `dict` element itself; its children live in `entries`.
    element: Element,
    entries: Vec<Entry>,
}

/// One key and its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    key: Element,
    value: Element,
}

impl Entry {
    /// The key text.
    pub fn key(&self) -> &str {
        &self.key.text
    }

    /// The value element.
    pub fn value(&self) -> &Element {
        &self.value
    }

    /// A mutable reference to the value element.
    pub fn value_mut(&mut self) -> &mut Element {
        &mut self.value
    }
}

impl Dict {
    /// Pairs up the children of a `dict` element.
    pub fn from_element(mut element: Element) -> Result<Dict, DictError> {
        let mut children = std::mem::take(&mut element.children).into_iter();
        let mut entries = Vec::new();
        while let Some(key) = children.next() {
            if key.name != "key" {
                return Err(DictError::ExpectedKey(key.name));
            }
            let value = children.next().ok_or_else(|| DictError::MissingValue(key.text.clone()))?;
            entries.push(Entry { key, value });
        }
        Ok(Dict { element, entries })
    }

    /// The number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the dict has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the entries, in document order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.entries.iter()
    }

    /// Iterate over the keys, in document order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(Entry::key)
    }

    /// Returns `true` if an entry with this key exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// The index of the first entry with this key.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.key() == key)
    }

    /// The value for `key`.
    pub fn get(&self, key: &str) -> Option<&Element> {
        self.entries.iter().find(|entry| entry.key() == key).map(Entry::value)
    }

    /// A mutable reference to the value for `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Element> {
        self.entries.iter_mut().find(|entry| entry.key() == key).map(Entry::value_mut)
    }

    /// Appends a new entry, indenting it with `indent`.
    ///
    /// This does not check for an existing entry with the same key. An empty
    /// `<dict/>` gets its closing tag on a line of its own.
    pub fn push(&mut self, key: &str, mut value: Element, indent: &str) {
        let separator = format!("\n{indent}");
        let closing = match self.entries.last_mut() {
            Some(last) => std::mem::replace(&mut last.value.tail, separator.clone()),
            None => {
                closing_whitespace(std::mem::replace(&mut self.element.text, separator.clone()))
            }
        };
        let mut key = Element::with_text("key", key);
        key.tail = separator;
        value.tail = closing;
        self.entries.push(Entry { key, value });
    }

    /// Removes the first entry with this key, returning it.
    pub fn remove(&mut self, key: &str) -> Option<Entry> {
        let index = self.position(key)?;
        let removed = self.entries.remove(index);
        if index == self.entries.len() {
            let closing = removed.value.tail.clone();
            match self.entries.last_mut() {
                Some(last) => last.value.tail = closing,
                None => self.element.text = closing,
            }
        }
        Some(removed)
    }

    pub(crate) fn write<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        self.element.write_with(writer, !self.entries.is_empty(), |writer| {
            for entry in &self.entries {
                entry.key.write(writer)?;
                entry.value.write(writer)?;
            }
            Ok(())
        })
    }
}
