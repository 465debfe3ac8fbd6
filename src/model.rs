//! Architectural data model.
//!
//! All entities are plain immutable value data in real-world feet. Rooms
//! live in floor-local coordinates, floors in building-local coordinates,
//! and buildings are placed on the site by a separate side table of
//! site-local offsets; the renderers never mutate any of it.
//!
//! Walls are not shared between adjoining rooms: each room independently
//! declares its bordering walls, and omitting one signals an open
//! connection.

/// Overlap allowance, in feet, between adjoining rooms' rectangles.
/// Anything up to this in either axis is a shared-wall seam, not a clash.
pub const SEAM_TOLERANCE: f64 = 0.5;

/// A point in feet; floor-local or site-local depending on context.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// Width/height extents in feet.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub const fn new(width: f64, height: f64) -> Self {
        Dimensions { width, height }
    }
}

/// Which side of its room a wall runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallSide {
    Top,
    Right,
    Bottom,
    Left,
}

/// The rotational direction a door symbol's swing arc sweeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swing {
    Left,
    Right,
    Up,
    Down,
}

/// One wall of one room. `thickness` is in feet; exterior walls render
/// heavier than interior ones.
#[derive(Debug, Clone, PartialEq)]
pub struct Wall {
    pub side: WallSide,
    pub thickness: f64,
    pub exterior: bool,
}

impl Wall {
    pub const fn exterior(side: WallSide, thickness: f64) -> Self {
        Wall { side, thickness, exterior: true }
    }

    pub const fn interior(side: WallSide, thickness: f64) -> Self {
        Wall { side, thickness, exterior: false }
    }
}

/// A door opening. `position` is a room-local offset along the wall.
#[derive(Debug, Clone, PartialEq)]
pub struct Door {
    pub position: Point,
    pub width: f64,
    pub swing: Swing,
    pub sliding_glass: bool,
}

impl Door {
    /// A hinged door with the conventional swing-arc symbol.
    pub const fn hinged(x: f64, y: f64, width: f64, swing: Swing) -> Self {
        Door { position: Point::new(x, y), width, swing, sliding_glass: false }
    }

    /// A sliding glass door, drawn as a double-line panel track.
    pub const fn sliding(x: f64, y: f64, width: f64) -> Self {
        Door { position: Point::new(x, y), width, swing: Swing::Down, sliding_glass: true }
    }
}

/// A window marker. `position` is a room-local offset along the wall.
#[derive(Debug, Clone, PartialEq)]
pub struct Window {
    pub position: Point,
    pub width: f64,
}

impl Window {
    pub const fn new(x: f64, y: f64, width: f64) -> Self {
        Window { position: Point::new(x, y), width }
    }
}

/// One room of a floor, positioned in floor-local feet.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub name: String,
    pub position: Point,
    pub dimensions: Dimensions,
    pub walls: Vec<Wall>,
    pub doors: Vec<Door>,
    pub windows: Vec<Window>,
    pub vaulted: bool,
    /// Display label, possibly multi-line (embedded `\n`). Falls back to
    /// `name` when absent.
    pub label: Option<String>,
}

impl Room {
    /// The room's centroid in floor-local feet.
    pub fn center(&self) -> Point {
        Point::new(
            self.position.x + self.dimensions.width / 2.0,
            self.position.y + self.dimensions.height / 2.0,
        )
    }

    /// Axis-aligned overlap with another room, in feet per axis.
    /// Negative values mean a gap.
    fn overlap(&self, other: &Room) -> (f64, f64) {
        let ox = (self.position.x + self.dimensions.width).min(other.position.x + other.dimensions.width)
            - self.position.x.max(other.position.x);
        let oy = (self.position.y + self.dimensions.height).min(other.position.y + other.dimensions.height)
            - self.position.y.max(other.position.y);
        (ox, oy)
    }
}

/// One storey of a building. `level` 0 is the ground floor; levels are
/// unique within a building and ordered by elevation.
#[derive(Debug, Clone, PartialEq)]
pub struct Floor {
    pub name: String,
    pub level: u32,
    pub rooms: Vec<Room>,
}

impl Floor {
    /// Smallest rectangle containing every room footprint, i.e. the maximum
    /// of position + dimension over all rooms in both axes.
    pub fn bounds(&self) -> Dimensions {
        let mut max_x: f64 = 0.0;
        let mut max_y: f64 = 0.0;
        for room in &self.rooms {
            max_x = max_x.max(room.position.x + room.dimensions.width);
            max_y = max_y.max(room.position.y + room.dimensions.height);
        }
        Dimensions::new(max_x, max_y)
    }

    /// Diagnostic check of the layout invariant: sibling rooms must not
    /// overlap by more than [`SEAM_TOLERANCE`] in both axes simultaneously.
    ///
    /// Returns the offending name pairs. This only reports; it never
    /// repairs or rejects the layout.
    pub fn overlapping_rooms(&self) -> Vec<(&str, &str)> {
        let mut clashes = Vec::new();
        for (i, a) in self.rooms.iter().enumerate() {
            for b in &self.rooms[i + 1..] {
                let (ox, oy) = a.overlap(b);
                if ox > SEAM_TOLERANCE && oy > SEAM_TOLERANCE {
                    clashes.push((a.name.as_str(), b.name.as_str()));
                }
            }
        }
        clashes
    }
}

/// A building: an ordered collection of independently laid out floors.
/// Upper floors may have a smaller footprint than the ground floor.
#[derive(Debug, Clone, PartialEq)]
pub struct Building {
    pub name: String,
    pub floors: Vec<Floor>,
}

impl Building {
    /// Look up a floor by level. Callers that require a level to exist
    /// treat `None` as a precondition failure.
    pub fn floor_at(&self, level: u32) -> Option<&Floor> {
        self.floors.iter().find(|f| f.level == level)
    }
}

/// A pedestrian path between two site-local points.
#[derive(Debug, Clone, PartialEq)]
pub struct Walkway {
    pub start: Point,
    pub end: Point,
    pub width: f64,
    pub covered: bool,
}

/// The whole property: lot extents, buildings, driveway polygon and
/// walkways, all in site-local feet.
#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    pub dimensions: Dimensions,
    pub buildings: Vec<Building>,
    /// At least 4 points forming a rectilinear, axis-aligned polygon.
    pub driveway: Vec<Point>,
    pub walkways: Vec<Walkway>,
}

/// Site-local placement offsets for each building footprint, consumed only
/// by the site-plan composer. Intra-building room coordinates are never
/// affected by these.
#[derive(Debug, Clone, PartialEq)]
pub struct SitePlacements {
    pub main_house: Point,
    pub casita: Point,
    pub garage: Point,
}
