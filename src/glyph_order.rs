//! The `public.glyphOrder` array in a font's `lib.plist`.

use crate::document::PlistDocument;
use crate::master::Change;
use crate::name::GlyphName;
use crate::write::WriteOptions;
use crate::xml::Element;
use crate::Error;

/// The lib key holding the glyph order.
pub static GLYPH_ORDER_KEY: &str = "public.glyphOrder";

/// Adds `glyph` to the end of the glyph order (`present == true`) or removes it.
///
/// Adding a glyph that is already listed, or removing one that is not, leaves
/// the document untouched and logs a warning.
///
/// Fails if the document has no `public.glyphOrder` array.
pub fn set_glyph(
    doc: &mut PlistDocument,
    glyph: &GlyphName,
    present: bool,
    options: &WriteOptions,
) -> Result<Change, Error> {
    let path = doc.path().display().to_string();
    let array = glyph_order_mut(doc)?;
    let position = array.children.iter().position(|item| is_glyph(item, glyph));
    let change = match (position, present) {
        (Some(_), true) => {
            log::warn!("glyph '{glyph}' already found in '{path}'.");
            Change::AlreadyPresent
        }
        (None, true) => {
            log::info!("Adding glyph '{glyph}' to '{path}'.");
            array.append_child(Element::with_text("string", glyph.as_str()), options.array_indent());
            Change::Added
        }
        (Some(index), false) => {
            log::info!("Removing glyph '{glyph}' from '{path}'.");
            array.remove_child(index);
            Change::Removed
        }
        (None, false) => {
            log::warn!("glyph '{glyph}' not found in file '{path}'.");
            Change::NotFound
        }
    };
    Ok(change)
}

/// The glyph names in the order they are listed.
pub fn glyph_order(doc: &PlistDocument) -> Result<Vec<&str>, Error> {
    let array = match doc.dict().get(GLYPH_ORDER_KEY) {
        Some(value) if value.name == "array" => value,
        Some(_) => return Err(Error::ExpectedArray(doc.path().to_owned())),
        None => return Err(Error::MissingGlyphOrder(doc.path().to_owned())),
    };
    Ok(array.children.iter().map(|item| item.text.as_str()).collect())
}

fn glyph_order_mut(doc: &mut PlistDocument) -> Result<&mut Element, Error> {
    let path = doc.path().to_owned();
    match doc.dict_mut().get_mut(GLYPH_ORDER_KEY) {
        Some(value) if value.name == "array" => Ok(value),
        Some(_) => Err(Error::ExpectedArray(path)),
        None => Err(Error::MissingGlyphOrder(path)),
    }
}

fn is_glyph(item: &Element, glyph: &GlyphName) -> bool {
    item.name == "string" && item.text == glyph.as_str()
}
