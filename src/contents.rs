//! The glyph name to file name mapping in a layer's `contents.plist`.

use crate::document::PlistDocument;
use crate::master::Change;
use crate::name::GlyphName;
use crate::write::WriteOptions;
use crate::xml::Element;

/// Adds `glyph` to the mapping (`present == true`) or removes it.
///
/// A new glyph is mapped to `<glyph>.glif` and appended after the existing
/// entries. Adding a glyph that is already mapped, or removing one that is
/// not, leaves the document untouched and logs a warning.
pub fn set_glyph(
    doc: &mut PlistDocument,
    glyph: &GlyphName,
    present: bool,
    options: &WriteOptions,
) -> Change {
    let path = doc.path().display().to_string();
    let dict = doc.dict_mut();
    match (dict.contains_key(glyph), present) {
        (true, true) => {
            log::warn!("glyph '{glyph}' already found in '{path}'.");
            Change::AlreadyPresent
        }
        (false, true) => {
            log::info!("Adding glyph '{glyph}' to '{path}'.");
            let value = Element::with_text("string", glyph.file_name());
            dict.push(glyph, value, options.dict_indent());
            Change::Added
        }
        (true, false) => {
            log::info!("Removing glyph '{glyph}' from '{path}'.");
            dict.remove(glyph);
            Change::Removed
        }
        (false, false) => {
            log::warn!("glyph '{glyph}' not found in file '{path}'.");
            Change::NotFound
        }
    }
}

/// The (glyph name, file name) pairs of the mapping, in document order.
pub fn glyph_files(doc: &PlistDocument) -> Vec<(&str, &str)> {
    doc.dict().iter().map(|entry| (entry.key(), entry.value().text.as_str())).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    static CONTENTS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple Computer//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
  <dict>
    <key>A</key>
    <string>A_.glif</string>
    <key>B</key>
    <string>B_.glif</string>
  </dict>
</plist>
"#;

    fn name(name: &str) -> GlyphName {
        GlyphName::new(name).unwrap()
    }

    fn load() -> PlistDocument {
        PlistDocument::from_xml("glyphs/contents.plist", CONTENTS).unwrap()
    }

    #[test]
    fn add_appends_mapping() {
        let mut doc = load();
        let change = set_glyph(&mut doc, &name("C"), true, &WriteOptions::default());
        assert_eq!(change, Change::Added);
        assert_eq!(glyph_files(&doc), vec![("A", "A_.glif"), ("B", "B_.glif"), ("C", "C.glif")]);

        let xml = String::from_utf8(doc.to_xml().unwrap()).unwrap();
        assert!(xml.contains(
            "<string>B_.glif</string>\n    <key>C</key>\n    <string>C.glif</string>\n  </dict>"
        ));
    }

    #[test]
    fn add_existing_is_a_no_op() {
        let mut doc = load();
        let before = doc.clone();
        let change = set_glyph(&mut doc, &name("A"), true, &WriteOptions::default());
        assert_eq!(change, Change::AlreadyPresent);
        assert_eq!(doc, before);
    }

    #[test]
    fn remove_takes_key_and_value() {
        let mut doc = load();
        let change = set_glyph(&mut doc, &name("A"), false, &WriteOptions::default());
        assert_eq!(change, Change::Removed);
        assert_eq!(glyph_files(&doc), vec![("B", "B_.glif")]);

        let change = set_glyph(&mut doc, &name("A"), false, &WriteOptions::default());
        assert_eq!(change, Change::NotFound);
    }

    #[test]
    fn add_then_remove_restores_document() {
        let mut doc = load();
        let before = doc.to_xml().unwrap();
        set_glyph(&mut doc, &name("f_f_i"), true, &WriteOptions::default());
        set_glyph(&mut doc, &name("f_f_i"), false, &WriteOptions::default());
        assert_eq!(doc.to_xml().unwrap(), before);
    }
}
