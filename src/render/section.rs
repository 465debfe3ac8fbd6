//! Section composition: the vertical cut through the house.
//!
//! The section is drawn from fixed constants that track the reference
//! design's general proportions, not from live room data.

use glam::dvec2;

use super::{scale_legend, sheet_frame, stacked_text, DETAIL_SCALE_NOTE, MARGIN, TITLE_HEIGHT};
use crate::svg::{self, Style, TextAnchor};
use crate::theme::Theme;

/// Cut span, feet.
const HOUSE_WIDTH: f64 = 48.0;
/// Ground floor storey height, feet.
const GROUND_HEIGHT: f64 = 10.0;
/// Upper floor storey height, feet.
const UPPER_HEIGHT: f64 = 9.0;
/// Apex height of the vaulted living-room ceiling, feet.
const VAULTED_HEIGHT: f64 = 14.0;

/// Compose the section sheet.
pub fn section(title: &str, theme: &Theme) -> String {
    let s = theme.detail;

    let content_width = s.px(HOUSE_WIDTH + 10.0);
    let content_height = s.px(GROUND_HEIGHT + VAULTED_HEIGHT + 10.0);
    let width = content_width + MARGIN * 2.0;
    let height = content_height + MARGIN * 2.0 + TITLE_HEIGHT;

    let mut elements = vec![sheet_frame(width, height, title, &theme.styles)];

    let base_x = MARGIN + s.px(5.0);
    let ground_y = height - MARGIN - s.px(2.0);
    let span = s.px(HOUSE_WIDTH);

    // Ground line
    elements.push(svg::line(
        MARGIN,
        ground_y,
        width - MARGIN,
        ground_y,
        &Style::new().stroke("black").stroke_width(2.0),
    ));

    // Foundation strip
    elements.push(svg::rect(
        base_x,
        ground_y,
        span,
        s.px(1.0),
        &Style::new().fill("#888").stroke("black").stroke_width(1.0),
    ));

    // Ground floor wall verticals and ceiling
    let gf_top = ground_y - s.px(GROUND_HEIGHT);
    let heavy = Style::new().stroke("black").stroke_width(3.0);
    let medium = Style::new().stroke("black").stroke_width(2.0);
    elements.push(svg::line(base_x, ground_y, base_x, gf_top, &heavy));
    elements.push(svg::line(base_x + span, ground_y, base_x + span, gf_top, &heavy));
    elements.push(svg::line(base_x, gf_top, base_x + span, gf_top, &medium));

    // Floor hatch band between storeys
    elements.push(svg::rect(
        base_x,
        gf_top - s.px(1.0),
        span,
        s.px(1.0),
        &Style::new().fill("#ddd").stroke("black").stroke_width(1.0),
    ));

    // Partial upper floor volume, offset inward from both edges
    let upper_width = s.px(26.0);
    let upper_x = base_x + s.px(22.0);
    let uf_top = gf_top - s.px(UPPER_HEIGHT);
    elements.push(svg::line(upper_x, gf_top - s.px(1.0), upper_x, uf_top, &medium));
    elements.push(svg::line(upper_x + upper_width, gf_top - s.px(1.0), upper_x + upper_width, uf_top, &medium));
    elements.push(svg::line(upper_x, uf_top, upper_x + upper_width, uf_top, &medium));

    // Vaulted ceiling over the rear span
    let vault_peak = gf_top - s.px(VAULTED_HEIGHT);
    let vault_left = base_x + s.px(30.0);
    let vault_right = base_x + span;
    elements.push(svg::line(vault_left, gf_top, vault_left, gf_top - s.px(4.0), &medium));
    elements.push(svg::polyline(
        &[
            dvec2(vault_left, gf_top - s.px(4.0)),
            dvec2((vault_left + vault_right) / 2.0, vault_peak),
            dvec2(vault_right, gf_top - s.px(4.0)),
        ],
        &Style::new().fill("none").stroke("black").stroke_width(2.0),
    ));

    // Main roof silhouette
    let roof_peak = gf_top - s.px(VAULTED_HEIGHT + 2.0);
    elements.push(svg::polyline(
        &[
            dvec2(base_x - s.px(2.0), gf_top),
            dvec2(base_x + s.px(HOUSE_WIDTH / 2.0), roof_peak),
            dvec2(base_x + span + s.px(2.0), gf_top),
        ],
        &Style::new().fill("none").stroke("black").stroke_width(2.0),
    ));

    // Floor-level labels
    let label_end = Style::new().font_size(8.0).text_anchor(TextAnchor::End);
    let label_mid = Style::new().font_size(8.0).text_anchor(TextAnchor::Middle);
    elements.push(stacked_text(
        base_x - 30.0,
        ground_y - s.px(GROUND_HEIGHT / 2.0),
        9.0,
        &["GROUND", "FLOOR"],
        &label_end,
    ));
    elements.push(stacked_text(
        upper_x - 10.0,
        uf_top + s.px(UPPER_HEIGHT / 2.0),
        9.0,
        &["UPPER", "FLOOR"],
        &label_end,
    ));
    elements.push(stacked_text(
        vault_left + s.px(8.0),
        gf_top - s.px(8.0),
        9.0,
        &["VAULTED", "LIVING"],
        &label_mid,
    ));

    // Dimension leader for the ground-floor height
    let dim_x = base_x + span + 20.0;
    elements.push(svg::line(dim_x, ground_y, dim_x, gf_top, &theme.styles.dimension));
    elements.push(svg::line(dim_x - 5.0, ground_y, dim_x + 5.0, ground_y, &theme.styles.dimension));
    elements.push(svg::line(dim_x - 5.0, gf_top, dim_x + 5.0, gf_top, &theme.styles.dimension));
    elements.push(svg::text(
        dim_x + 15.0,
        ground_y - s.px(GROUND_HEIGHT / 2.0),
        "10'-0\"",
        &Style::new().font_size(7.0).text_anchor(TextAnchor::Start),
    ));

    elements.push(scale_legend(width, height, DETAIL_SCALE_NOTE));

    svg::svg_doc(width, height, &elements.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_carries_title_and_height_annotation() {
        let svg = section("Section A-A", &Theme::default());
        assert!(svg.contains(">Section A-A</text>"));
        assert!(svg.contains("10'-0\""));
    }

    #[test]
    fn storey_labels_are_stacked() {
        let svg = section("Section A-A", &Theme::default());
        for word in ["GROUND", "FLOOR", "UPPER", "VAULTED", "LIVING"] {
            assert!(svg.contains(&format!(">{word}</text>")), "missing {word}");
        }
    }

    #[test]
    fn sheet_dimensions_follow_the_fixed_cut_constants() {
        // content: (48+10) ft wide, (10+14+10) ft tall at 12 px/ft
        let svg = section("Section A-A", &Theme::default());
        assert!(svg.contains(r#"width="796""#));
        assert!(svg.contains(r#"height="548""#));
    }
}
