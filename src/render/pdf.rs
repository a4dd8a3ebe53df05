//! PDF emission of a [`DocumentLayout`] via printpdf.

use std::io::BufWriter;

use printpdf::{BuiltinFont, Image, ImageTransform, Mm, PdfDocument, PdfLayerReference};

use super::layout::{DocumentLayout, LayoutElement, PAGE_HEIGHT_MM, PAGE_WIDTH_MM};
use crate::core::FactuurError;

/// Render the layout into PDF bytes.
///
/// `title` becomes the document title in the PDF metadata. Failures in
/// font setup or serialization surface as [`FactuurError::Render`];
/// a malformed logo payload is silently omitted instead.
pub fn render_pdf(layout: &DocumentLayout, title: &str) -> Result<Vec<u8>, FactuurError> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        title,
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );

    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| FactuurError::Render(e.to_string()))?;
    let font_bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| FactuurError::Render(e.to_string()))?;

    for (index, page) in layout.pages.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_index, layer_index) =
                doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
            doc.get_page(page_index).get_layer(layer_index)
        };

        for element in &page.elements {
            match element {
                LayoutElement::Text {
                    x,
                    y,
                    size,
                    bold,
                    content,
                } => {
                    let face = if *bold { &font_bold } else { &font };
                    layer.use_text(content, *size, Mm(*x), Mm(*y), face);
                }
                LayoutElement::Rule { x1, x2, y } => {
                    layer.add_line(printpdf::Line {
                        points: vec![
                            (printpdf::Point::new(Mm(*x1), Mm(*y)), false),
                            (printpdf::Point::new(Mm(*x2), Mm(*y)), false),
                        ],
                        is_closed: false,
                    });
                }
                LayoutElement::LogoSlot { x, y, width } => {
                    if let Some(bytes) = &layout.logo {
                        place_logo(&layer, bytes, *x, *y, *width);
                    }
                }
            }
        }
    }

    let mut writer = BufWriter::new(Vec::new());
    doc.save(&mut writer)
        .map_err(|e| FactuurError::Render(e.to_string()))?;
    writer
        .into_inner()
        .map_err(|e| FactuurError::Render(e.to_string()))
}

/// Decode and place the logo. Undecodable payloads are omitted so a bad
/// upload never blocks an export.
fn place_logo(layer: &PdfLayerReference, bytes: &[u8], x: f32, y: f32, width_mm: f32) {
    let Ok(decoded) = printpdf::image_crate::load_from_memory(bytes) else {
        return;
    };

    let dpi = 300.0_f32;
    let natural_width_mm = decoded.width() as f32 / dpi * 25.4;
    let scale = if natural_width_mm > 0.0 {
        width_mm / natural_width_mm
    } else {
        1.0
    };

    let image = Image::from_dynamic_image(&decoded);
    image.add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(Mm(x)),
            translate_y: Some(Mm(y)),
            scale_x: Some(scale),
            scale_y: Some(scale),
            dpi: Some(dpi),
            ..Default::default()
        },
    );
}
