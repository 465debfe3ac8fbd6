//! Site-plan composition: the whole property at the coarser site scale.
//!
//! Building footprints here are fixed-constant rectangles placed by the
//! site placement table; the buildings' own floor-local layouts are not
//! consulted for overall positioning.

use super::{north_arrow, scale_legend, sheet_frame, stacked_text, MARGIN, SITE_SCALE_NOTE, TITLE_HEIGHT};
use crate::errors::SheetError;
use crate::model::{Site, SitePlacements};
use crate::svg::{self, Style, TextAnchor};
use crate::theme::Theme;

/// Main house footprint on the site (excluding the garage), feet.
const MAIN_HOUSE_FOOTPRINT: (f64, f64) = (38.0, 50.0);
/// Attached garage footprint, feet.
const GARAGE_FOOTPRINT: (f64, f64) = (24.0, 24.0);
/// Casita footprint, feet.
const CASITA_FOOTPRINT: (f64, f64) = (24.0, 26.0);

/// Compose the site-plan sheet.
///
/// The driveway polygon must have at least 4 points and be axis-aligned
/// through its first three points; anything else is rejected rather than
/// silently drawn wrong.
pub fn site_plan(
    site: &Site,
    placements: &SitePlacements,
    title: &str,
    theme: &Theme,
) -> Result<String, SheetError> {
    let s = theme.site;

    let content_width = s.px(site.dimensions.width);
    let content_height = s.px(site.dimensions.height);
    let width = content_width + MARGIN * 2.0;
    let height = content_height + MARGIN * 2.0 + TITLE_HEIGHT;

    let base_x = MARGIN;
    let base_y = MARGIN + TITLE_HEIGHT;

    let mut elements = vec![sheet_frame(width, height, title, &theme.styles)];

    // Property boundary
    elements.push(svg::rect(
        base_x,
        base_y,
        content_width,
        content_height,
        &Style::new().fill("#f5f5f0").stroke("black").stroke_width(2.0),
    ));

    // Street along the front boundary
    elements.push(svg::text(
        base_x + content_width / 2.0,
        base_y - 10.0,
        "STREET",
        &Style::new().font_size(10.0).text_anchor(TextAnchor::Middle),
    ));

    // Driveway, derived from the first three polygon points
    let driveway = &site.driveway;
    if driveway.len() < 4 {
        return Err(SheetError::DrivewayTooShort { count: driveway.len() });
    }
    if driveway[1].y != driveway[0].y || driveway[2].x != driveway[1].x {
        return Err(SheetError::DrivewayNotRectilinear);
    }
    let drive_x = base_x + s.px(driveway[0].x);
    let drive_y = base_y + s.px(driveway[0].y);
    let drive_w = s.px(driveway[1].x - driveway[0].x);
    let drive_h = s.px(driveway[2].y - driveway[0].y);
    elements.push(svg::rect(
        drive_x,
        drive_y,
        drive_w,
        drive_h,
        &Style::new().fill("#ccc").stroke("black").stroke_width(1.0),
    ));
    elements.push(svg::text(
        drive_x + drive_w / 2.0,
        drive_y + drive_h / 2.0,
        "DRIVEWAY",
        &Style::new().font_size(8.0).text_anchor(TextAnchor::Middle),
    ));

    // Main house footprint at its configured placement
    let (house_w, house_h) = (s.px(MAIN_HOUSE_FOOTPRINT.0), s.px(MAIN_HOUSE_FOOTPRINT.1));
    let house_x = base_x + s.px(placements.main_house.x);
    let house_y = base_y + s.px(placements.main_house.y);
    elements.push(svg::rect(
        house_x,
        house_y,
        house_w,
        house_h,
        &Style::new().fill("#e8e8e8").stroke("black").stroke_width(2.0),
    ));
    elements.push(svg::text(
        house_x + house_w / 2.0,
        house_y + house_h / 2.0 - 10.0,
        "MAIN HOUSE",
        &Style::new().font_size(10.0).text_anchor(TextAnchor::Middle),
    ));
    elements.push(svg::text(
        house_x + house_w / 2.0,
        house_y + house_h / 2.0 + 5.0,
        "(1.5 story)",
        &Style::new().font_size(8.0).text_anchor(TextAnchor::Middle),
    ));

    // Garage attached to the trailing edge of the main house
    let (garage_w, garage_h) = (s.px(GARAGE_FOOTPRINT.0), s.px(GARAGE_FOOTPRINT.1));
    let garage_x = house_x + house_w;
    let garage_y = house_y;
    elements.push(svg::rect(
        garage_x,
        garage_y,
        garage_w,
        garage_h,
        &Style::new().fill("#ddd").stroke("black").stroke_width(1.0),
    ));
    elements.push(svg::text(
        garage_x + garage_w / 2.0,
        garage_y + garage_h / 2.0,
        "GARAGE",
        &Style::new().font_size(7.0).text_anchor(TextAnchor::Middle),
    ));

    // Walkways; covered ones get the warmer tint
    for walkway in &site.walkways {
        let wx = base_x + s.px(walkway.start.x);
        let wy = base_y + s.px(walkway.start.y);
        let ww = s.px(walkway.width);
        let wh = s.px(walkway.end.y - walkway.start.y);
        let fill = if walkway.covered { "#d4c4a8" } else { "#ccc" };
        elements.push(svg::rect(wx, wy, ww, wh, &Style::new().fill(fill).stroke("black").stroke_width(1.0)));
        let label: &[&str] = if walkway.covered { &["COVERED", "WALKWAY"] } else { &["WALKWAY"] };
        elements.push(stacked_text(
            wx + ww / 2.0,
            wy + wh / 2.0,
            7.0,
            label,
            &Style::new().font_size(6.0).text_anchor(TextAnchor::Middle),
        ));
    }

    // Casita footprint
    let (casita_w, casita_h) = (s.px(CASITA_FOOTPRINT.0), s.px(CASITA_FOOTPRINT.1));
    let casita_x = base_x + s.px(placements.casita.x);
    let casita_y = base_y + s.px(placements.casita.y);
    elements.push(svg::rect(
        casita_x,
        casita_y,
        casita_w,
        casita_h,
        &Style::new().fill("#e8e8e8").stroke("black").stroke_width(2.0),
    ));
    elements.push(stacked_text(
        casita_x + casita_w / 2.0,
        casita_y + casita_h / 2.0,
        9.0,
        &["MASTER", "CASITA"],
        &Style::new().font_size(8.0).text_anchor(TextAnchor::Middle),
    ));

    // Private garden strip, only when the casita placement leaves a margin
    // to the property edge
    if placements.casita.x > 0.0 {
        elements.push(svg::rect(
            base_x,
            casita_y,
            s.px(placements.casita.x),
            casita_h,
            &Style::new().fill("#90EE90").stroke("green").stroke_width(1.0),
        ));
        elements.push(svg::text(
            base_x + s.px(placements.casita.x / 2.0),
            casita_y + casita_h / 2.0,
            "GARDEN",
            &Style::new().font_size(6.0).text_anchor(TextAnchor::Middle),
        ));
    }

    // Backyard label behind the main house
    elements.push(svg::text(
        house_x + house_w / 2.0 + s.px(15.0),
        house_y + house_h + s.px(20.0),
        "BACKYARD",
        &Style::new().font_size(12.0).text_anchor(TextAnchor::Middle),
    ));

    // Patio off the far edge of the main footprint
    let patio_x = house_x + s.px(5.0);
    let patio_y = house_y + house_h;
    elements.push(svg::rect(
        patio_x,
        patio_y,
        s.px(28.0),
        s.px(15.0),
        &Style::new().fill("#ddd").stroke("black").stroke_width(1.0).stroke_dasharray("2,2"),
    ));
    elements.push(svg::text(
        patio_x + s.px(14.0),
        patio_y + s.px(8.0),
        "PATIO",
        &Style::new().font_size(8.0).text_anchor(TextAnchor::Middle),
    ));

    elements.push(north_arrow(width - MARGIN - 30.0, base_y + 40.0));
    elements.push(scale_legend(width, height, SITE_SCALE_NOTE));

    Ok(svg::svg_doc(width, height, &elements.join("\n")))
}
