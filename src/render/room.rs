//! Per-room rendering: walls, door symbols, window markers and labels.
//!
//! Bodies and labels are separate entry points on purpose: the floor-plan
//! composer draws every room's body first and every label second, so a
//! label never ends up underneath a neighboring room's walls.

use crate::model::{Room, Swing, WallSide};
use crate::svg::{self, num, Style};
use crate::theme::Theme;

/// Vertical distance between label lines, in pixels.
const LABEL_LINE_HEIGHT: f64 = 12.0;

/// Render one room's geometry (outline, walls, doors, windows) at its
/// absolute pixel position.
pub fn body(room: &Room, theme: &Theme) -> String {
    let s = theme.detail;
    let x = s.px(room.position.x);
    let y = s.px(room.position.y);
    let w = s.px(room.dimensions.width);
    let h = s.px(room.dimensions.height);

    let mut elements = Vec::new();

    // Faint full outline for visual reference
    elements.push(svg::rect(x, y, w, h, &theme.styles.room_outline));

    // Walls: a filled thickness rectangle along the declared side
    for wall in &room.walls {
        let style = if wall.exterior {
            &theme.styles.exterior_wall
        } else {
            &theme.styles.interior_wall
        };
        let t = s.px(wall.thickness);
        let r = match wall.side {
            WallSide::Top => svg::rect(x, y, w, t, style),
            WallSide::Bottom => svg::rect(x, y + h - t, w, t, style),
            WallSide::Left => svg::rect(x, y, t, h, style),
            WallSide::Right => svg::rect(x + w - t, y, t, h, style),
        };
        elements.push(r);
    }

    for door in &room.doors {
        let dx = x + s.px(door.position.x);
        let dy = y + s.px(door.position.y);
        let dw = s.px(door.width);

        if door.sliding_glass {
            // Sliding panel track: two parallel offset lines, no swing arc
            elements.push(svg::line(dx, dy, dx + dw, dy, &Style::new().stroke("black").stroke_width(2.0)));
            elements.push(svg::line(
                dx,
                dy - 2.0,
                dx + dw,
                dy - 2.0,
                &Style::new().stroke("black").stroke_width(1.0),
            ));
        } else {
            elements.push(svg::line(dx, dy, dx + dw, dy, &theme.styles.door));
            elements.push(svg::path(&swing_arc(dx, dy, dw, door.swing), &theme.styles.door_swing));
        }
    }

    for window in &room.windows {
        let wx = x + s.px(window.position.x);
        let wy = y + s.px(window.position.y);
        let ww = s.px(window.width);
        // Sill indicator plus centerline stroke
        elements.push(svg::rect(wx - 1.0, wy - 1.0, ww + 2.0, 4.0, &theme.styles.window));
        elements.push(svg::line(wx, wy, wx + ww, wy, &Style::new().stroke("black").stroke_width(1.0)));
    }

    elements.join("\n")
}

/// Quarter-circle swing arc starting at the door position. The endpoint and
/// sweep flag together give the conventional architectural door symbol:
/// down/right sweep clockwise, up/left counter-clockwise.
fn swing_arc(dx: f64, dy: f64, radius: f64, swing: Swing) -> String {
    let r = num(radius);
    match swing {
        Swing::Down => format!(
            "M {} {} A {r} {r} 0 0 1 {} {}",
            num(dx),
            num(dy),
            num(dx + radius),
            num(dy + radius)
        ),
        Swing::Up => format!(
            "M {} {} A {r} {r} 0 0 0 {} {}",
            num(dx),
            num(dy),
            num(dx + radius),
            num(dy - radius)
        ),
        Swing::Left => format!(
            "M {} {} A {r} {r} 0 0 0 {} {}",
            num(dx),
            num(dy),
            num(dx - radius),
            num(dy + radius)
        ),
        Swing::Right => format!(
            "M {} {} A {r} {r} 0 0 1 {} {}",
            num(dx),
            num(dy),
            num(dx + radius),
            num(dy + radius)
        ),
    }
}

/// Render the room's label block: the label lines (or the room name when no
/// label is set) centered on the centroid, then a `W' × H'` dimension line.
/// Emits nothing when the room has neither label nor name.
pub fn label(room: &Room, theme: &Theme) -> String {
    let text = room.label.as_deref().unwrap_or(&room.name);
    if text.is_empty() {
        return String::new();
    }

    let s = theme.detail;
    let center = room.center();
    let cx = s.px(center.x);
    let cy = s.px(center.y);

    let lines: Vec<&str> = text.split('\n').collect();
    let mut elements = vec![super::stacked_text(cx, cy, LABEL_LINE_HEIGHT, &lines, &theme.styles.room_label)];

    let dims = format!("{}' × {}'", num(room.dimensions.width), num(room.dimensions.height));
    elements.push(svg::text(
        cx,
        cy + lines.len() as f64 * (LABEL_LINE_HEIGHT / 2.0) + 10.0,
        &dims,
        &theme.styles.room_dimension,
    ));

    elements.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Dimensions, Door, Point, Window};

    fn room_at_origin() -> Room {
        Room {
            name: "Test Room".into(),
            position: Point::new(0.0, 0.0),
            dimensions: Dimensions::new(10.0, 12.0),
            walls: vec![],
            doors: vec![],
            windows: vec![],
            vaulted: false,
            label: None,
        }
    }

    #[test]
    fn swing_down_sweeps_clockwise_to_plus_plus() {
        // Door at (5,0), width 3 ft, detail scale 12 px/ft:
        // start (60,0), end offset (+36,+36), clockwise sweep flag.
        let mut room = room_at_origin();
        room.doors.push(Door::hinged(5.0, 0.0, 3.0, Swing::Down));
        let body = body(&room, &Theme::default());
        assert!(body.contains("M 60 0 A 36 36 0 0 1 96 36"), "got: {body}");
    }

    #[test]
    fn swing_up_sweeps_counter_clockwise_to_plus_minus() {
        let mut room = room_at_origin();
        room.doors.push(Door::hinged(5.0, 0.0, 3.0, Swing::Up));
        let body = body(&room, &Theme::default());
        assert!(body.contains("M 60 0 A 36 36 0 0 0 96 -36"), "got: {body}");
    }

    #[test]
    fn swing_left_and_right_mirror_each_other() {
        assert_eq!(swing_arc(60.0, 0.0, 36.0, Swing::Left), "M 60 0 A 36 36 0 0 0 24 36");
        assert_eq!(swing_arc(60.0, 0.0, 36.0, Swing::Right), "M 60 0 A 36 36 0 0 1 96 36");
    }

    #[test]
    fn sliding_glass_renders_track_lines_not_an_arc() {
        let mut room = room_at_origin();
        room.doors.push(Door::sliding(2.0, 12.0, 8.0));
        let body = body(&room, &Theme::default());
        assert!(!body.contains("<path"));
        // Two parallel lines, the second offset 2px above the first
        assert!(body.contains(r#"<line x1="24" y1="144" x2="120" y2="144""#));
        assert!(body.contains(r#"<line x1="24" y1="142" x2="120" y2="142""#));
    }

    #[test]
    fn walls_sit_on_their_declared_side() {
        let mut room = room_at_origin();
        room.walls.push(crate::model::Wall::exterior(WallSide::Bottom, 0.5));
        let body = body(&room, &Theme::default());
        // 12 ft tall room, 0.5 ft wall: rectangle from y = 144 - 6
        assert!(body.contains(r#"<rect x="0" y="138" width="120" height="6""#));
    }

    #[test]
    fn window_gets_sill_and_centerline() {
        let mut room = room_at_origin();
        room.windows.push(Window::new(2.0, 0.0, 4.0));
        let body = body(&room, &Theme::default());
        assert!(body.contains(r#"<rect x="23" y="-1" width="50" height="4""#));
        assert!(body.contains(r#"<line x1="24" y1="0" x2="72" y2="0""#));
    }

    #[test]
    fn label_falls_back_to_room_name() {
        let room = room_at_origin();
        let label = label(&room, &Theme::default());
        assert!(label.contains(">Test Room</text>"));
        assert!(label.contains("10' × 12'"));
    }

    #[test]
    fn multi_line_label_is_stacked() {
        let mut room = room_at_origin();
        room.label = Some("MUD\nROOM".into());
        let label = label(&room, &Theme::default());
        assert!(label.contains(">MUD</text>"));
        assert!(label.contains(">ROOM</text>"));
    }

    #[test]
    fn nameless_unlabeled_room_emits_nothing() {
        let mut room = room_at_origin();
        room.name = String::new();
        assert!(label(&room, &Theme::default()).is_empty());
    }
}
