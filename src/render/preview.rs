//! Plain-text projection of a [`DocumentLayout`].
//!
//! The preview consumes the exact layout the PDF target consumes, so
//! whatever amounts the preview shows are the amounts the PDF prints.

use super::layout::{DocumentLayout, LayoutElement, LayoutPage};

const CHARS_PER_MM: f32 = 0.4;
const LINE_WIDTH: usize = 72;
const LEFT_MM: f32 = 15.0;

/// Render the layout as monospace text, one string for all pages.
pub fn render_text(layout: &DocumentLayout) -> String {
    let mut out = String::new();
    for (index, page) in layout.pages.iter().enumerate() {
        if index > 0 {
            out.push_str(&format!("\n=== Pagina {} ===\n\n", index + 1));
        }
        render_page(page, &mut out);
    }
    out
}

fn render_page(page: &LayoutPage, out: &mut String) {
    // Project elements onto text rows: group by descending y, place each
    // element at a character column derived from its x position.
    let mut rows: Vec<(f32, Vec<(f32, String)>)> = Vec::new();

    for element in &page.elements {
        match element {
            LayoutElement::Text { x, y, content, .. } => {
                place(&mut rows, *y, *x, content.clone());
            }
            LayoutElement::Rule { y, .. } => {
                place(&mut rows, *y, LEFT_MM, "-".repeat(LINE_WIDTH));
            }
            LayoutElement::LogoSlot { .. } => {}
        }
    }

    rows.sort_by(|a, b| b.0.total_cmp(&a.0));

    for (_, mut cells) in rows {
        cells.sort_by(|a, b| a.0.total_cmp(&b.0));
        let mut line = String::new();
        for (x, content) in cells {
            let column = ((x - LEFT_MM) * CHARS_PER_MM).max(0.0) as usize;
            let width = line.chars().count();
            if width < column {
                line.push_str(&" ".repeat(column - width));
            } else if !line.is_empty() {
                line.push_str("  ");
            }
            line.push_str(&content);
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
}

fn place(rows: &mut Vec<(f32, Vec<(f32, String)>)>, y: f32, x: f32, content: String) {
    // Elements within half a row step share one text row.
    if let Some((_, cells)) = rows.iter_mut().find(|(row_y, _)| (row_y - y).abs() < 2.0) {
        cells.push((x, content));
    } else {
        rows.push((y, vec![(x, content)]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{calculate_totals, DocumentBuilder, DocumentKind, DueTerm};
    use crate::render::layout::layout_document;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn preview_shows_totals_and_labels() {
        let document = DocumentBuilder::new(
            DocumentKind::Invoice,
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        )
        .number("F-2025-0001")
        .due(DueTerm::DaysAfterIssue(14))
        .line("Advieswerk maart", dec!(8), dec!(85), dec!(21))
        .build_unchecked();
        let totals = calculate_totals(&document);
        let text = render_text(&layout_document(&document, &totals));

        assert!(text.contains("FACTUUR"));
        assert!(text.contains("Advieswerk maart"));
        assert!(text.contains("€ 680,00"));
        assert!(text.contains("€ 142,80"));
        assert!(text.contains("€ 822,80"));
    }

    #[test]
    fn multi_page_previews_are_separated() {
        let mut builder = DocumentBuilder::new(
            DocumentKind::Invoice,
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        )
        .number("F-2025-0002");
        for i in 0..80 {
            builder = builder.line(format!("Regel {i}"), dec!(1), dec!(10), dec!(21));
        }
        let document = builder.build_unchecked();
        let totals = calculate_totals(&document);
        let text = render_text(&layout_document(&document, &totals));
        assert!(text.contains("=== Pagina 2 ==="));
    }
}
