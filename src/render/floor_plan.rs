//! Floor-plan composition: one floor's rooms laid out on a titled sheet.

use super::{room, scale_legend, sheet_frame, DETAIL_SCALE_NOTE, MARGIN, TITLE_HEIGHT};
use crate::errors::SheetError;
use crate::model::Floor;
use crate::svg::{self, num};
use crate::theme::Theme;

/// Compose a complete floor-plan sheet.
///
/// Room bodies and labels are drawn in two full passes: all bodies first,
/// then all labels, so a label is never occluded by an adjacent room's
/// walls.
pub fn floor_plan(floor: &Floor, title: &str, theme: &Theme) -> Result<String, SheetError> {
    if floor.rooms.is_empty() {
        return Err(SheetError::EmptyFloor { floor: floor.name.clone() });
    }

    let clashes = floor.overlapping_rooms();
    if !clashes.is_empty() {
        crate::log::warn!(floor = %floor.name, ?clashes, "rooms overlap beyond the seam tolerance");
    }

    let bounds = floor.bounds();
    let content_width = theme.detail.px(bounds.width);
    let content_height = theme.detail.px(bounds.height);
    let width = content_width + MARGIN * 2.0;
    let height = content_height + MARGIN * 2.0 + TITLE_HEIGHT;

    let mut elements = vec![sheet_frame(width, height, title, &theme.styles)];

    // Bodies first, labels second
    let mut content = Vec::with_capacity(floor.rooms.len() * 2);
    for r in &floor.rooms {
        content.push(room::body(r, theme));
    }
    for r in &floor.rooms {
        let label = room::label(r, theme);
        if !label.is_empty() {
            content.push(label);
        }
    }
    let translate = format!("translate({}, {})", num(MARGIN), num(MARGIN + TITLE_HEIGHT));
    elements.push(svg::group(&content.join("\n"), Some(&translate)));

    elements.push(scale_legend(width, height, DETAIL_SCALE_NOTE));

    Ok(svg::svg_doc(width, height, &elements.join("\n")))
}
