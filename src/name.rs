//! Glyph names

use std::str::FromStr;
use std::sync::Arc;

use crate::Error;

/// The name of a glyph, as it appears in `contents.plist` and `public.glyphOrder`.
///
/// Names must be at least one character long, and cannot contain control
/// characters (`0x00..=0x1F`, `0x7F`, and `0x80..=0x9F`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GlyphName(Arc<str>);

impl GlyphName {
    /// Creates a new `GlyphName` if the given value isn't empty and contains no control characters.
    pub fn new(name: &str) -> Result<GlyphName, Error> {
        if is_valid(name) {
            Ok(GlyphName(name.into()))
        } else {
            Err(Error::InvalidName(name.into()))
        }
    }

    /// Returns a string slice containing the name.
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }

    /// The file name used for this glyph in a layer's `contents.plist`.
    pub fn file_name(&self) -> String {
        format!("{}.glif", self.0)
    }
}

fn is_valid(name: &str) -> bool {
    !(name.is_empty()
        // Important: check the chars(), not the bytes(), as UTF-8 encoding
        // bytes of course contain control characters.
        || name.chars().any(|b| {
            (0x0..=0x1f).contains(&(b as u32))
                || (0x80..=0x9f).contains(&(b as u32))
                || b as u32 == 0x7f
        }))
}

impl AsRef<str> for GlyphName {
    fn as_ref(&self) -> &str {
        self.0.as_ref()
    }
}

impl std::ops::Deref for GlyphName {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

// so that assert_eq! macros work
impl<'a> PartialEq<&'a str> for GlyphName {
    fn eq(&self, other: &&'a str) -> bool {
        self.0.as_ref() == *other
    }
}

impl std::fmt::Display for GlyphName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        std::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for GlyphName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GlyphName::new(s)
    }
}
