//! Elevation composition: exterior views derived from the plan footprint.
//!
//! There is no 3D model; everything is derived from the ground floor's
//! extents plus a handful of architectural constants (floor heights, roof
//! pitch). The roof apex is damped so it stays proportionate to the span.

use glam::dvec2;

use super::{scale_legend, sheet_frame, DETAIL_SCALE_NOTE, MARGIN, TITLE_HEIGHT};
use crate::errors::SheetError;
use crate::model::Building;
use crate::svg::{self, Style};
use crate::theme::Theme;

/// Ground floor storey height, feet.
const GROUND_FLOOR_HEIGHT: f64 = 10.0;
/// Upper floor storey height, feet.
const UPPER_FLOOR_HEIGHT: f64 = 9.0;
/// Roof pitch, rise over run (8:12).
const ROOF_PITCH: f64 = 8.0 / 12.0;
/// Damping applied to the roof-rise term so the apex stays plausible
/// without true rafter geometry.
const ROOF_RISE_DAMPING: f64 = 0.5;
/// The 1.5-story upper volume renders at this fixed width, feet.
const UPPER_VOLUME_WIDTH: f64 = 28.0;
/// One ground-floor window band per this many feet of view width.
const WINDOW_SPACING_FEET: f64 = 12.0;

/// Which exterior face the elevation shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElevationSide {
    Front,
    Rear,
    Left,
    Right,
}

impl ElevationSide {
    /// A side view is the plan footprint rotated 90°, so it uses the
    /// orthogonal footprint dimension for its width.
    fn view_width(self, footprint_width: f64, footprint_depth: f64) -> f64 {
        match self {
            ElevationSide::Front | ElevationSide::Rear => footprint_width,
            ElevationSide::Left | ElevationSide::Right => footprint_depth,
        }
    }
}

/// Compose an elevation sheet for one side of the building.
///
/// The plan footprint comes from the ground floor's room extents; a
/// building without a level-0 floor is a precondition failure.
pub fn elevation(
    building: &Building,
    side: ElevationSide,
    title: &str,
    theme: &Theme,
) -> Result<String, SheetError> {
    let ground = building
        .floor_at(0)
        .ok_or_else(|| SheetError::MissingFloor { building: building.name.clone(), level: 0 })?;
    let footprint = ground.bounds();

    let s = theme.detail;
    let view_width = side.view_width(footprint.width, footprint.height);
    let total_height =
        GROUND_FLOOR_HEIGHT + UPPER_FLOOR_HEIGHT + (view_width / 2.0) * ROOF_PITCH * ROOF_RISE_DAMPING;

    let content_width = s.px(view_width);
    let content_height = s.px(total_height);
    let width = content_width + MARGIN * 2.0;
    let height = content_height + MARGIN * 2.0 + TITLE_HEIGHT + 50.0;

    let mut elements = vec![sheet_frame(width, height, title, &theme.styles)];

    let ground_y = MARGIN + TITLE_HEIGHT + content_height + 30.0;
    elements.push(svg::line(
        MARGIN - 20.0,
        ground_y,
        width - MARGIN + 20.0,
        ground_y,
        &Style::new().stroke("black").stroke_width(2.0),
    ));

    let bx = MARGIN;
    let gf_height = s.px(GROUND_FLOOR_HEIGHT);
    let uf_height = s.px(UPPER_FLOOR_HEIGHT);
    let volume = Style::new().fill("none").stroke("black").stroke_width(2.0);

    // Ground floor volume
    elements.push(svg::rect(bx, ground_y - gf_height, content_width, gf_height, &volume));

    // Partial upper floor volume, centered (structural set-back)
    let upper_width = s.px(UPPER_VOLUME_WIDTH);
    let upper_x = bx + (content_width - upper_width) / 2.0;
    let upper_y = ground_y - gf_height - uf_height;
    elements.push(svg::rect(upper_x, upper_y, upper_width, uf_height, &volume));

    // Main gable over the full span
    let main_peak = upper_y - s.px(8.0);
    elements.push(svg::polyline(
        &[
            dvec2(bx - 10.0, ground_y - gf_height),
            dvec2(bx + content_width / 2.0, main_peak),
            dvec2(bx + content_width + 10.0, ground_y - gf_height),
        ],
        &volume,
    ));

    // Cross gable over the upper volume
    let upper_peak = upper_y - s.px(6.0);
    elements.push(svg::polyline(
        &[
            dvec2(upper_x - 5.0, upper_y),
            dvec2(upper_x + upper_width / 2.0, upper_peak),
            dvec2(upper_x + upper_width + 5.0, upper_y),
        ],
        &volume,
    ));

    // Evenly spaced ground-floor window bands. Integer division means a
    // non-multiple view width leaves asymmetric end margins; accepted.
    let window_y = ground_y - s.px(6.0);
    let window_h = s.px(4.0);
    let window_w = s.px(3.0);
    let num_windows = (view_width / WINDOW_SPACING_FEET).floor() as usize;
    let window_spacing = content_width / (num_windows as f64 + 1.0);
    for i in 1..=num_windows {
        let wx = bx + window_spacing * i as f64 - window_w / 2.0;
        elements.push(four_light_window(wx, window_y, window_w, window_h, theme));
    }

    // Two fixed upper-floor windows
    let uf_window_y = upper_y + s.px(2.0);
    for i in 0..2 {
        let wx = upper_x + s.px(4.0) + i as f64 * s.px(16.0);
        elements.push(four_light_window(wx, uf_window_y, window_w, window_h, theme));
    }

    // Street-facing insertions, one explicit case per side
    match side {
        ElevationSide::Front => {
            // Entry door near the foyer
            let door_x = bx + s.px(5.0) - s.px(1.5);
            let door_h = s.px(7.0);
            elements.push(svg::rect(
                door_x,
                ground_y - door_h,
                s.px(3.0),
                door_h,
                &Style::new().fill("#8B4513").stroke("black").stroke_width(1.0),
            ));

            // Garage door with carriage split
            let garage_x = bx + s.px(35.0);
            let garage_h = s.px(8.0);
            let garage_w = s.px(16.0);
            elements.push(svg::rect(
                garage_x,
                ground_y - garage_h,
                garage_w,
                garage_h,
                &Style::new().fill("#d4a76a").stroke("black").stroke_width(1.0),
            ));
            elements.push(svg::line(
                garage_x + garage_w / 2.0,
                ground_y - garage_h,
                garage_x + garage_w / 2.0,
                ground_y,
                &Style::new().stroke("black").stroke_width(1.0),
            ));
        }
        ElevationSide::Rear => {}
        ElevationSide::Left => {}
        ElevationSide::Right => {}
    }

    // Horizontal siding lap lines
    let siding = Style::new().stroke("#ddd").stroke_width(0.3);
    let mut sy = ground_y - s.px(1.0);
    while sy > upper_y {
        elements.push(svg::line(bx + 2.0, sy, bx + content_width - 2.0, sy, &siding));
        sy -= s.px(0.8);
    }

    // Stone wainscot band at the base
    elements.push(svg::rect(
        bx,
        ground_y - s.px(2.0),
        content_width,
        s.px(2.0),
        &Style::new().fill("none").stroke("black").stroke_width(1.0).stroke_dasharray("2,1"),
    ));

    elements.push(scale_legend(width, height, DETAIL_SCALE_NOTE));

    Ok(svg::svg_doc(width, height, &elements.join("\n")))
}

/// A window band with the 4-light farmhouse grid overlay.
fn four_light_window(x: f64, y: f64, w: f64, h: f64, theme: &Theme) -> String {
    let muntin = Style::new().stroke("black").stroke_width(0.5);
    [
        svg::rect(x, y, w, h, &theme.styles.window),
        svg::line(x + w / 2.0, y, x + w / 2.0, y + h, &muntin),
        svg::line(x, y + h / 2.0, x + w, y + h / 2.0, &muntin),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Dimensions, Floor, Point, Room};

    fn test_building(width: f64, depth: f64) -> Building {
        Building {
            name: "House".into(),
            floors: vec![Floor {
                name: "Ground".into(),
                level: 0,
                rooms: vec![Room {
                    name: "Hall".into(),
                    position: Point::new(0.0, 0.0),
                    dimensions: Dimensions::new(width, depth),
                    walls: vec![],
                    doors: vec![],
                    windows: vec![],
                    vaulted: false,
                    label: None,
                }],
            }],
        }
    }

    #[test]
    fn missing_ground_floor_is_a_precondition_failure() {
        let building = Building { name: "Shed".into(), floors: vec![] };
        let err = elevation(&building, ElevationSide::Front, "Front", &Theme::default()).unwrap_err();
        assert!(matches!(err, SheetError::MissingFloor { level: 0, .. }));
    }

    #[test]
    fn front_has_exactly_one_door_and_one_garage_insertion() {
        let building = test_building(54.0, 50.0);
        let svg = elevation(&building, ElevationSide::Front, "Front Elevation", &Theme::default()).unwrap();
        assert_eq!(svg.matches("#8B4513").count(), 1);
        assert_eq!(svg.matches("#d4a76a").count(), 1);
    }

    #[test]
    fn rear_has_neither_door_nor_garage() {
        let building = test_building(54.0, 50.0);
        let svg = elevation(&building, ElevationSide::Rear, "Rear Elevation", &Theme::default()).unwrap();
        assert!(!svg.contains("#8B4513"));
        assert!(!svg.contains("#d4a76a"));
    }

    #[test]
    fn side_views_use_footprint_depth() {
        let building = test_building(54.0, 30.0);
        let theme = Theme::default();
        let left = elevation(&building, ElevationSide::Left, "Left", &theme).unwrap();
        // 30 ft depth at 12 px/ft plus two margins
        assert!(left.contains(r#"width="460""#), "got: {left}");
        let front = elevation(&building, ElevationSide::Front, "Front", &theme).unwrap();
        assert!(front.contains(r#"width="748""#));
    }

    #[test]
    fn window_count_follows_integer_division_of_view_width() {
        let building = test_building(54.0, 50.0);
        let svg = elevation(&building, ElevationSide::Rear, "Rear", &Theme::default()).unwrap();
        // floor(54 / 12) = 4 ground windows + 2 upper windows, each carrying
        // the window style (the sheet background is fill-only)
        assert_eq!(svg.matches(r#"fill="white" stroke="black""#).count(), 6);
    }

    #[test]
    fn roof_rise_is_damped_and_proportional_to_span() {
        let building = test_building(48.0, 48.0);
        let svg = elevation(&building, ElevationSide::Front, "Front", &Theme::default()).unwrap();
        // total = 10 + 9 + 24 * (8/12) * 0.5 = 27 ft -> 324 px content
        // height = 324 + 100 + 40 + 50
        assert!(svg.contains(r#"height="514""#), "got: {svg}");
    }
}
