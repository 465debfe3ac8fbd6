//! Sheet composers.
//!
//! One submodule per drawing type, plus the shared sheet furniture every
//! composer uses (title block, scale legend, north arrow, stacked text):
//! - `room`: per-room walls, doors, windows and labels
//! - `floor_plan`: a whole floor laid out on one sheet
//! - `elevation`: exterior views derived from the plan footprint
//! - `section`: the vertical cut
//! - `roof_plan`: ridge, hips and slope callouts
//! - `site_plan`: the whole property at the coarser site scale

pub mod elevation;
pub mod floor_plan;
pub mod roof_plan;
pub mod room;
pub mod section;
pub mod site_plan;

use crate::svg::{self, Style, TextAnchor};
use crate::theme::StyleSheet;

/// Blank border around the sheet content, in pixels.
pub(crate) const MARGIN: f64 = 50.0;

/// Height of the title band at the top of every sheet, in pixels.
pub(crate) const TITLE_HEIGHT: f64 = 40.0;

/// Scale notation for the building-detail sheets.
pub(crate) const DETAIL_SCALE_NOTE: &str = "Scale: 1/4\" = 1'-0\"";

/// Scale notation for the site plan, which uses the coarser site ratio.
pub(crate) const SITE_SCALE_NOTE: &str = "Scale: 1\" = 16'-0\"";

/// White sheet background, title text and the rule line under it.
pub(crate) fn sheet_frame(width: f64, height: f64, title: &str, styles: &StyleSheet) -> String {
    [
        svg::rect(0.0, 0.0, width, height, &Style::new().fill("white")),
        svg::text(MARGIN, 30.0, title, &styles.title_block),
        svg::line(
            MARGIN,
            TITLE_HEIGHT,
            width - MARGIN,
            TITLE_HEIGHT,
            &Style::new().stroke("black").stroke_width(1.0),
        ),
    ]
    .join("\n")
}

/// Scale notation in the bottom-right corner.
pub(crate) fn scale_legend(width: f64, height: f64, note: &str) -> String {
    svg::text(
        width - MARGIN - 80.0,
        height - 15.0,
        note,
        &Style::new().font_size(8.0).text_anchor(TextAnchor::Start),
    )
}

/// North arrow: a vertical shaft pointing up with an `N` above it.
pub(crate) fn north_arrow(x: f64, y: f64) -> String {
    [
        svg::line(x, y + 20.0, x, y, &Style::new().stroke("black").stroke_width(2.0)),
        svg::text(x, y - 5.0, "N", &Style::new().font_size(12.0).text_anchor(TextAnchor::Middle)),
    ]
    .join("\n")
}

/// Multi-line text centered vertically around `y`, one `<text>` per line.
pub(crate) fn stacked_text(x: f64, y: f64, line_height: f64, lines: &[&str], style: &Style) -> String {
    let n = lines.len();
    lines
        .iter()
        .enumerate()
        .map(|(i, l)| {
            let offset = (i as f64 - (n as f64 - 1.0) / 2.0) * line_height;
            svg::text(x, y + offset, l, style)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_carries_the_title() {
        let styles = StyleSheet::architectural();
        let frame = sheet_frame(400.0, 300.0, "Roof Plan", &styles);
        assert!(frame.contains(">Roof Plan</text>"));
        assert!(frame.contains(r#"fill="white""#));
    }

    #[test]
    fn stacked_text_centers_odd_and_even_counts() {
        let style = Style::new().font_size(8.0);
        let one = stacked_text(0.0, 100.0, 12.0, &["ONLY"], &style);
        assert!(one.contains(r#"y="100""#));

        let two = stacked_text(0.0, 100.0, 12.0, &["TOP", "BOTTOM"], &style);
        assert!(two.contains(r#"y="94""#));
        assert!(two.contains(r#"y="106""#));
    }
}
