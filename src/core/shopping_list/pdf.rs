//! Rendering of the shopping list as a one column A4 document:
//!
//! ```text
//! Shopping list:
//!
//! 1) Eggs - 4 pcs
//! 2) Flour - 300 g
//! ```
//!
//! The text is written with the configured TrueType font, embedded in the
//! document. The default one covers Latin and Cyrillic. Without a font the
//! built-in Helvetica font is used, which only covers Latin text.
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use foodgram_located_error::{DynError, LocatedError};
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};

use super::ShoppingListItem;

pub const HEADER: &str = "Shopping list:";
pub const HEADER_FONT_SIZE: f32 = 18.0;
pub const LINE_FONT_SIZE: f32 = 14.0;

const PAGE_WIDTH: Mm = Mm(210.0);
const PAGE_HEIGHT: Mm = Mm(297.0);
const LAYER: &str = "Layer 1";
const MARGIN_LEFT: f32 = 20.0;
const FIRST_ROW: f32 = 272.0;
const ROW_AFTER_HEADER: f32 = 15.0;
const ROW_HEIGHT: f32 = 10.0;
const LAST_ROW: f32 = 20.0;

#[derive(thiserror::Error, Debug, Clone)]
pub enum Error {
    #[error("Unable to load the font {path}: {source}")]
    Font {
        path: Utf8PathBuf,
        source: LocatedError<'static, dyn std::error::Error + Send + Sync>,
    },

    #[error("Unable to render the shopping list: {source}")]
    Render {
        source: LocatedError<'static, dyn std::error::Error + Send + Sync>,
    },
}

impl From<printpdf::Error> for Error {
    #[track_caller]
    fn from(err: printpdf::Error) -> Self {
        Self::Render {
            source: (Arc::new(err) as DynError).into(),
        }
    }
}

/// It renders the items in the given order, one per row. Rows continue on a
/// new page when a page is full.
///
/// # Errors
///
/// Will return `Err` if the font cannot be loaded or the document cannot be
/// serialized.
pub fn render(items: &[ShoppingListItem], font_path: Option<&Utf8Path>) -> Result<Vec<u8>, Error> {
    let (document, page, layer) = PdfDocument::new(HEADER.trim_end_matches(':'), PAGE_WIDTH, PAGE_HEIGHT, LAYER);

    let font = load_font(&document, font_path)?;

    let mut layer = document.get_page(page).get_layer(layer);
    let mut row = FIRST_ROW;

    layer.use_text(HEADER, HEADER_FONT_SIZE, Mm(MARGIN_LEFT), Mm(row), &font);
    row -= ROW_AFTER_HEADER;

    for (position, item) in items.iter().enumerate() {
        if row < LAST_ROW {
            layer = new_page(&document);
            row = FIRST_ROW;
        }

        layer.use_text(line(position + 1, item), LINE_FONT_SIZE, Mm(MARGIN_LEFT), Mm(row), &font);
        row -= ROW_HEIGHT;
    }

    Ok(document.save_to_bytes()?)
}

/// A numbered row: `3) Flour - 300 g`.
#[must_use]
pub fn line(number: usize, item: &ShoppingListItem) -> String {
    format!(
        "{number}) {} - {} {}",
        capitalize(&item.name),
        item.amount,
        item.measurement_unit
    )
}

fn load_font(document: &PdfDocumentReference, font_path: Option<&Utf8Path>) -> Result<IndirectFontRef, Error> {
    let Some(path) = font_path else {
        return Ok(document.add_builtin_font(BuiltinFont::Helvetica)?);
    };

    let font_error = |err: DynError| Error::Font {
        path: path.to_path_buf(),
        source: err.into(),
    };

    let file = std::fs::File::open(path).map_err(|err| font_error(Arc::new(err) as DynError))?;

    document.add_external_font(file).map_err(|err| font_error(Arc::new(err) as DynError))
}

fn new_page(document: &PdfDocumentReference) -> PdfLayerReference {
    let (page, layer) = document.add_page(PAGE_WIDTH, PAGE_HEIGHT, LAYER);
    document.get_page(page).get_layer(layer)
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
