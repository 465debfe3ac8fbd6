//! Roof-plan composition: ridges, hips, slope callouts and the chimney.
//!
//! Drawn from the fixed building footprint (with overhangs), not from
//! floor data.

use super::{north_arrow, scale_legend, sheet_frame, stacked_text, DETAIL_SCALE_NOTE, MARGIN, TITLE_HEIGHT};
use crate::svg::{self, Style, TextAnchor};
use crate::theme::Theme;

/// Roof footprint including overhangs, feet.
const ROOF_WIDTH: f64 = 52.0;
const ROOF_DEPTH: f64 = 54.0;
/// How far each hip line runs inward from its corner to meet the ridge, feet.
const HIP_RUN: f64 = 20.0;
/// Pitch callout on the slope arrows.
const PITCH_LABEL: &str = "8:12";

/// Compose the roof-plan sheet.
pub fn roof_plan(title: &str, theme: &Theme) -> String {
    let s = theme.detail;

    let content_width = s.px(ROOF_WIDTH);
    let content_height = s.px(ROOF_DEPTH);
    let width = content_width + MARGIN * 2.0;
    let height = content_height + MARGIN * 2.0 + TITLE_HEIGHT;

    let mut elements = vec![sheet_frame(width, height, title, &theme.styles)];

    let base_x = MARGIN;
    let base_y = MARGIN + TITLE_HEIGHT;

    // Roof field
    elements.push(svg::rect(
        base_x,
        base_y,
        content_width,
        content_height,
        &Style::new().fill("#f0f0f0").stroke("black").stroke_width(2.0),
    ));

    // Main ridge, running east-west at mid-depth
    let ridge = Style::new().stroke("black").stroke_width(2.0);
    let ridge_y = base_y + content_height / 2.0;
    elements.push(svg::line(base_x, ridge_y, base_x + content_width, ridge_y, &ridge));

    // Cross-gable ridge, bounded to a sub-span
    let cross_x = base_x + s.px(36.0);
    elements.push(svg::line(cross_x, base_y + s.px(10.0), cross_x, base_y + s.px(30.0), &ridge));

    // Hip lines from each corner to the ridge
    let hip = Style::new().stroke("black").stroke_width(1.0);
    let hip_run = s.px(HIP_RUN);
    elements.push(svg::line(base_x, base_y, base_x + hip_run, ridge_y, &hip));
    elements.push(svg::line(base_x, base_y + content_height, base_x + hip_run, ridge_y, &hip));
    elements.push(svg::line(base_x + content_width, base_y, base_x + content_width - hip_run, ridge_y, &hip));
    elements.push(svg::line(
        base_x + content_width,
        base_y + content_height,
        base_x + content_width - hip_run,
        ridge_y,
        &hip,
    ));

    // Slope direction indicators, one per face, each with a pitch label
    let pitch_style = Style::new().font_size(8.0).text_anchor(TextAnchor::Start);
    let arrow_x = base_x + s.px(26.0);
    let north_face_y = base_y + s.px(15.0);
    elements.push(svg::line(arrow_x, north_face_y, arrow_x, north_face_y - s.px(8.0), &hip));
    elements.push(svg::text(base_x + s.px(28.0), north_face_y - s.px(4.0), PITCH_LABEL, &pitch_style));
    let south_face_y = base_y + content_height - s.px(15.0);
    elements.push(svg::line(arrow_x, south_face_y, arrow_x, south_face_y + s.px(8.0), &hip));
    elements.push(svg::text(base_x + s.px(28.0), south_face_y + s.px(4.0), PITCH_LABEL, &pitch_style));

    // Material callout
    let callout = Style::new().font_size(10.0).text_anchor(TextAnchor::Middle);
    let cx = base_x + content_width / 2.0;
    let cy = base_y + content_height / 2.0;
    elements.push(stacked_text(cx, cy - 10.0, 20.0, &["STANDING SEAM", "METAL ROOF"], &callout));
    elements.push(svg::text(
        cx,
        cy + 15.0,
        "(CHARCOAL)",
        &Style::new().font_size(8.0).text_anchor(TextAnchor::Middle),
    ));

    // Chimney footprint
    let chim_x = base_x + s.px(40.0);
    let chim_y = base_y + s.px(25.0);
    elements.push(svg::rect(
        chim_x,
        chim_y,
        s.px(3.0),
        s.px(4.0),
        &Style::new().fill("#999").stroke("black").stroke_width(1.0),
    ));
    elements.push(svg::text(
        chim_x + s.px(1.5),
        chim_y + s.px(2.0),
        "CH",
        &Style::new().font_size(6.0).text_anchor(TextAnchor::Middle),
    ));

    elements.push(north_arrow(width - MARGIN - 30.0, MARGIN + TITLE_HEIGHT + 40.0));
    elements.push(scale_legend(width, height, DETAIL_SCALE_NOTE));

    svg::svg_doc(width, height, &elements.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roof_plan_has_ridge_hips_and_callouts() {
        let svg = roof_plan("Roof Plan", &Theme::default());
        assert!(svg.contains(">Roof Plan</text>"));
        assert!(svg.contains(">STANDING SEAM</text>"));
        assert!(svg.contains(">METAL ROOF</text>"));
        assert!(svg.contains(">(CHARCOAL)</text>"));
        assert!(svg.contains(">CH</text>"));
        assert!(svg.contains(">N</text>"));
        assert_eq!(svg.matches(">8:12</text>").count(), 2);
    }

    #[test]
    fn sheet_size_follows_the_fixed_footprint() {
        // 52x54 ft at 12 px/ft plus margins and the title band
        let svg = roof_plan("Roof Plan", &Theme::default());
        assert!(svg.contains(r#"width="724""#));
        assert!(svg.contains(r#"height="788""#));
    }
}
