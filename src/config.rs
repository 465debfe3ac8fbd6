//! The reference design: a modern farmhouse (main house + detached casita)
//! on a 100' × 150' lot.
//!
//! This is pure configuration payload, decoupled from the composers; an
//! alternate house design is a new set of tables, not a rendering change.
//! Coordinates are floor-local feet with the origin at the front-left
//! corner, y increasing toward the backyard.

use std::sync::LazyLock;

use crate::model::{
    Building, Dimensions, Door, Floor, Point, Room, Site, SitePlacements, Swing, Walkway, Wall,
    WallSide, Window,
};

fn ground_floor_rooms() -> Vec<Room> {
    vec![
        Room {
            name: "Foyer".into(),
            position: Point::new(0.0, 0.0),
            dimensions: Dimensions::new(10.0, 12.0),
            walls: vec![Wall::exterior(WallSide::Top, 0.5), Wall::exterior(WallSide::Left, 0.5)],
            // front door
            doors: vec![Door::hinged(5.0, 0.0, 3.0, Swing::Down)],
            windows: vec![],
            vaulted: false,
            label: Some("FOYER".into()),
        },
        Room {
            name: "Living Room".into(),
            position: Point::new(10.0, 0.0),
            dimensions: Dimensions::new(20.0, 22.0),
            walls: vec![Wall::exterior(WallSide::Top, 0.5), Wall::exterior(WallSide::Right, 0.5)],
            doors: vec![],
            windows: vec![Window::new(5.0, 0.0, 6.0), Window::new(14.0, 0.0, 6.0)],
            vaulted: true,
            label: Some("LIVING ROOM\n(vaulted)".into()),
        },
        Room {
            name: "Garage".into(),
            position: Point::new(30.0, 0.0),
            dimensions: Dimensions::new(24.0, 24.0),
            walls: vec![
                Wall::exterior(WallSide::Top, 0.5),
                Wall::exterior(WallSide::Right, 0.5),
                Wall::exterior(WallSide::Bottom, 0.5),
            ],
            // side-entry garage door
            doors: vec![Door::hinged(0.0, 12.0, 16.0, Swing::Left)],
            windows: vec![],
            vaulted: false,
            label: Some("GARAGE\n24×24".into()),
        },
        Room {
            name: "Mud Room".into(),
            position: Point::new(0.0, 12.0),
            dimensions: Dimensions::new(10.0, 10.0),
            walls: vec![Wall::exterior(WallSide::Left, 0.5)],
            // side entry from the driveway, plus the door through to the garage
            doors: vec![
                Door::hinged(0.0, 5.0, 3.0, Swing::Right),
                Door::hinged(10.0, 5.0, 3.0, Swing::Left),
            ],
            windows: vec![],
            vaulted: false,
            label: Some("MUD\nROOM".into()),
        },
        Room {
            name: "Main Bath".into(),
            position: Point::new(0.0, 22.0),
            dimensions: Dimensions::new(10.0, 10.0),
            walls: vec![
                Wall::exterior(WallSide::Left, 0.5),
                Wall::interior(WallSide::Top, 0.5),
                Wall::interior(WallSide::Right, 0.5),
                Wall::interior(WallSide::Bottom, 0.5),
            ],
            doors: vec![Door::hinged(10.0, 5.0, 2.5, Swing::Left)],
            windows: vec![],
            vaulted: false,
            label: Some("BATH".into()),
        },
        Room {
            name: "Dining Room".into(),
            position: Point::new(10.0, 22.0),
            dimensions: Dimensions::new(14.0, 14.0),
            // open to living and kitchen
            walls: vec![],
            doors: vec![],
            windows: vec![],
            vaulted: false,
            label: Some("DINING ROOM".into()),
        },
        Room {
            name: "Family Room".into(),
            position: Point::new(24.0, 24.0),
            dimensions: Dimensions::new(14.0, 14.0),
            walls: vec![Wall::exterior(WallSide::Right, 0.5)],
            doors: vec![Door::sliding(7.0, 16.0, 8.0)],
            windows: vec![Window::new(14.0, 8.0, 5.0)],
            vaulted: false,
            label: Some("FAMILY\nROOM".into()),
        },
        Room {
            name: "Kitchen".into(),
            position: Point::new(0.0, 36.0),
            dimensions: Dimensions::new(18.0, 14.0),
            walls: vec![Wall::exterior(WallSide::Left, 0.5), Wall::exterior(WallSide::Bottom, 0.5)],
            doors: vec![Door::sliding(9.0, 18.0, 8.0)],
            windows: vec![Window::new(0.0, 9.0, 4.0)],
            vaulted: false,
            label: Some("KITCHEN".into()),
        },
    ]
}

// The upper floor sits above the left portion of the ground floor only
// (never above the vaulted living room); footprint roughly 28' × 26'.
fn upper_floor_rooms() -> Vec<Room> {
    vec![
        Room {
            name: "Kids Bedroom 1".into(),
            position: Point::new(0.0, 0.0),
            dimensions: Dimensions::new(12.0, 14.0),
            walls: vec![Wall::exterior(WallSide::Top, 0.5), Wall::exterior(WallSide::Left, 0.5)],
            doors: vec![Door::hinged(12.0, 7.0, 2.5, Swing::Left)],
            windows: vec![Window::new(0.0, 7.0, 4.0), Window::new(6.0, 0.0, 4.0)],
            vaulted: false,
            label: Some("KIDS BEDROOM 1".into()),
        },
        Room {
            name: "Kids Bedroom 2".into(),
            position: Point::new(12.0, 0.0),
            dimensions: Dimensions::new(12.0, 14.0),
            walls: vec![Wall::exterior(WallSide::Top, 0.5), Wall::exterior(WallSide::Right, 0.5)],
            doors: vec![Door::hinged(0.0, 7.0, 2.5, Swing::Right)],
            windows: vec![Window::new(12.0, 7.0, 4.0), Window::new(6.0, 0.0, 4.0)],
            vaulted: false,
            label: Some("KIDS BEDROOM 2".into()),
        },
        Room {
            name: "Hallway".into(),
            position: Point::new(24.0, 0.0),
            dimensions: Dimensions::new(4.0, 14.0),
            walls: vec![Wall::exterior(WallSide::Right, 0.5)],
            doors: vec![],
            windows: vec![],
            vaulted: false,
            label: Some("HALL".into()),
        },
        Room {
            name: "Kids Bath".into(),
            position: Point::new(0.0, 14.0),
            dimensions: Dimensions::new(10.0, 10.0),
            walls: vec![
                Wall::exterior(WallSide::Left, 0.5),
                Wall::exterior(WallSide::Bottom, 0.5),
                Wall::interior(WallSide::Top, 0.5),
                Wall::interior(WallSide::Right, 0.5),
            ],
            doors: vec![Door::hinged(10.0, 5.0, 2.5, Swing::Left)],
            windows: vec![Window::new(0.0, 5.0, 3.0)],
            vaulted: false,
            label: Some("BATH".into()),
        },
        Room {
            name: "Bonus Room".into(),
            position: Point::new(10.0, 14.0),
            dimensions: Dimensions::new(14.0, 12.0),
            walls: vec![Wall::exterior(WallSide::Right, 0.5), Wall::exterior(WallSide::Bottom, 0.5)],
            // open to hallway
            doors: vec![],
            windows: vec![Window::new(14.0, 6.0, 5.0)],
            vaulted: false,
            label: Some("BONUS ROOM".into()),
        },
    ]
}

// Casita footprint: 24' × 26', origin at its own top-left corner.
fn casita_rooms() -> Vec<Room> {
    vec![
        Room {
            name: "Walk-in Closet".into(),
            position: Point::new(0.0, 0.0),
            dimensions: Dimensions::new(8.0, 12.0),
            walls: vec![Wall::exterior(WallSide::Top, 0.5), Wall::exterior(WallSide::Left, 0.5)],
            doors: vec![Door::hinged(8.0, 6.0, 2.5, Swing::Left)],
            windows: vec![],
            vaulted: false,
            label: Some("CLOSET".into()),
        },
        Room {
            name: "Master Bedroom".into(),
            position: Point::new(8.0, 0.0),
            dimensions: Dimensions::new(16.0, 18.0),
            walls: vec![Wall::exterior(WallSide::Top, 0.5), Wall::exterior(WallSide::Right, 0.5)],
            // to the bathroom
            doors: vec![Door::hinged(0.0, 18.0, 3.0, Swing::Up)],
            windows: vec![Window::new(8.0, 0.0, 6.0), Window::new(16.0, 9.0, 5.0)],
            vaulted: false,
            label: Some("MASTER\nBEDROOM".into()),
        },
        Room {
            name: "Master Bath".into(),
            position: Point::new(0.0, 12.0),
            dimensions: Dimensions::new(8.0, 14.0),
            walls: vec![Wall::exterior(WallSide::Left, 0.5), Wall::exterior(WallSide::Bottom, 0.5)],
            doors: vec![Door::hinged(4.0, 0.0, 2.5, Swing::Down)],
            windows: vec![Window::new(0.0, 7.0, 3.0)],
            vaulted: false,
            label: Some("MASTER\nBATH".into()),
        },
        Room {
            name: "Entry Vestibule".into(),
            position: Point::new(12.0, 18.0),
            dimensions: Dimensions::new(6.0, 8.0),
            walls: vec![Wall::exterior(WallSide::Right, 0.5), Wall::exterior(WallSide::Bottom, 0.5)],
            // entry from the covered walkway
            doors: vec![Door::hinged(3.0, 8.0, 3.0, Swing::Up)],
            windows: vec![],
            vaulted: false,
            label: Some("ENTRY".into()),
        },
    ]
}

/// The 1.5-story main house.
pub static MAIN_HOUSE: LazyLock<Building> = LazyLock::new(|| Building {
    name: "Main House".into(),
    floors: vec![
        Floor { name: "Ground Floor".into(), level: 0, rooms: ground_floor_rooms() },
        Floor { name: "Upper Floor".into(), level: 1, rooms: upper_floor_rooms() },
    ],
});

/// The detached master suite at the rear of the lot.
pub static CASITA: LazyLock<Building> = LazyLock::new(|| Building {
    name: "Master Casita".into(),
    floors: vec![Floor { name: "Casita Floor".into(), level: 0, rooms: casita_rooms() }],
});

/// The whole property: main house at the front, casita rear-left,
/// connected by a covered walkway. The driveway runs along the left side
/// to the garage.
pub static SITE: LazyLock<Site> = LazyLock::new(|| Site {
    dimensions: Dimensions::new(100.0, 150.0),
    buildings: vec![MAIN_HOUSE.clone(), CASITA.clone()],
    driveway: vec![
        Point::new(0.0, 0.0),
        Point::new(20.0, 0.0),
        Point::new(20.0, 35.0),
        Point::new(0.0, 35.0),
    ],
    walkways: vec![Walkway {
        start: Point::new(5.0, 65.0),
        end: Point::new(5.0, 90.0),
        width: 7.0,
        covered: true,
    }],
});

/// Building placements on the site: 15' front and left setback for the
/// main house, 5' side setback for the casita at the rear.
pub static SITE_PLACEMENTS: LazyLock<SitePlacements> = LazyLock::new(|| SitePlacements {
    main_house: Point::new(15.0, 15.0),
    casita: Point::new(5.0, 95.0),
    garage: Point::new(45.0, 15.0),
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_layouts_respect_the_seam_tolerance() {
        for building in [&*MAIN_HOUSE, &*CASITA] {
            for floor in &building.floors {
                assert!(
                    floor.overlapping_rooms().is_empty(),
                    "{} / {} has overlapping rooms",
                    building.name,
                    floor.name
                );
            }
        }
    }

    #[test]
    fn ground_floor_footprint_is_54_by_50() {
        let bounds = MAIN_HOUSE.floor_at(0).unwrap().bounds();
        assert_eq!((bounds.width, bounds.height), (54.0, 50.0));
    }

    #[test]
    fn upper_floor_is_set_back_from_the_ground_footprint() {
        let ground = MAIN_HOUSE.floor_at(0).unwrap().bounds();
        let upper = MAIN_HOUSE.floor_at(1).unwrap().bounds();
        assert!(upper.width < ground.width);
        assert!(upper.height < ground.height);
    }

    #[test]
    fn site_driveway_is_rectilinear() {
        let d = &SITE.driveway;
        assert!(d.len() >= 4);
        assert_eq!(d[0].y, d[1].y);
        assert_eq!(d[1].x, d[2].x);
    }
}
