//! Integration tests over the reference farmhouse configuration.

use regex_lite::Regex;

use drafthorse::render::elevation::{elevation, ElevationSide};
use drafthorse::render::floor_plan::floor_plan;
use drafthorse::render::roof_plan::roof_plan;
use drafthorse::render::section::section;
use drafthorse::render::site_plan::site_plan;
use drafthorse::{catalog, config, Compose, Theme};

fn theme() -> Theme {
    Theme::default()
}

/// Every drawing type must yield a standalone document: one svg open/close
/// pair, explicit width/height, and the literal title.
#[test]
fn every_sheet_is_a_complete_document_with_its_title() {
    let theme = theme();
    let dimensions = Regex::new(r#"<svg [^>]*width="[0-9.]+" height="[0-9.]+""#).unwrap();

    let titled: Vec<(String, &str)> = vec![
        (
            floor_plan(&config::MAIN_HOUSE.floors[0], "Ground Floor Plan - Main House", &theme).unwrap(),
            "Ground Floor Plan - Main House",
        ),
        (
            elevation(&config::MAIN_HOUSE, ElevationSide::Rear, "Rear Elevation", &theme).unwrap(),
            "Rear Elevation",
        ),
        (section("Section A-A", &theme), "Section A-A"),
        (roof_plan("Roof Plan", &theme), "Roof Plan"),
        (
            site_plan(&config::SITE, &config::SITE_PLACEMENTS, "Site Plan", &theme).unwrap(),
            "Site Plan",
        ),
    ];

    for (svg, title) in titled {
        assert_eq!(svg.matches("<svg ").count(), 1);
        assert_eq!(svg.matches("</svg>").count(), 1);
        assert!(dimensions.is_match(&svg), "no explicit dimensions for {title}");
        assert!(svg.contains(title), "missing title {title}");
    }
}

#[test]
fn ground_floor_plan_names_all_principal_rooms() {
    let svg = floor_plan(&config::MAIN_HOUSE.floors[0], "Ground Floor Plan", &theme()).unwrap();
    let lower = svg.to_lowercase();
    for name in ["living room", "kitchen", "dining room", "foyer", "garage"] {
        assert!(lower.contains(name), "missing room name {name}");
    }
}

#[test]
fn upper_floor_plan_names_all_principal_rooms() {
    let svg = floor_plan(&config::MAIN_HOUSE.floors[1], "Upper Floor Plan", &theme()).unwrap();
    let lower = svg.to_lowercase();
    for name in ["kids bedroom 1", "kids bedroom 2", "bonus room"] {
        assert!(lower.contains(name), "missing room name {name}");
    }
}

#[test]
fn floor_plan_label_pass_contains_every_label_or_name() {
    let theme = theme();
    for floor in config::MAIN_HOUSE.floors.iter().chain(config::CASITA.floors.iter()) {
        let svg = floor_plan(floor, &floor.name, &theme).unwrap();
        for room in &floor.rooms {
            let expected = room.label.as_deref().unwrap_or(&room.name);
            for line in expected.split('\n') {
                assert!(svg.contains(line), "{}: missing label line {line}", floor.name);
            }
        }
    }
}

#[test]
fn room_dimension_annotations_use_the_multiplication_sign() {
    let svg = floor_plan(&config::MAIN_HOUSE.floors[0], "Ground Floor Plan", &theme()).unwrap();
    // e.g. the foyer: 10' × 12'
    assert!(svg.contains("10' × 12'"));
}

#[test]
fn front_elevation_is_the_only_one_with_entry_features() {
    let theme = theme();
    let mut door_counts = Vec::new();
    for side in [ElevationSide::Front, ElevationSide::Rear, ElevationSide::Left, ElevationSide::Right] {
        let svg = elevation(&config::MAIN_HOUSE, side, "Elevation", &theme).unwrap();
        door_counts.push((svg.matches("#8B4513").count(), svg.matches("#d4a76a").count()));
    }
    assert_eq!(door_counts[0], (1, 1), "front needs one door and one garage");
    assert_eq!(&door_counts[1..], &[(0, 0), (0, 0), (0, 0)]);
}

#[test]
fn site_plan_boundary_tracks_site_dimensions_at_site_scale() {
    let svg = site_plan(&config::SITE, &config::SITE_PLACEMENTS, "Site Plan", &theme()).unwrap();
    // 100 x 150 ft at 6 px/ft
    assert!(svg.contains(r#"width="600" height="900""#));
    // covered walkway tint present and distinct from plain paving
    assert!(svg.contains(r##"fill="#d4c4a8""##));
}

#[test]
fn detail_and_site_sheets_declare_different_scales() {
    let theme = theme();
    let plan = floor_plan(&config::MAIN_HOUSE.floors[0], "Plan", &theme).unwrap();
    let site = site_plan(&config::SITE, &config::SITE_PLACEMENTS, "Site Plan", &theme).unwrap();
    assert!(plan.contains("Scale: 1/4\" = 1'-0\""));
    assert!(site.contains("Scale: 1\" = 16'-0\""));
}

#[test]
fn catalog_output_is_deterministic() {
    let theme = theme();
    for ((name_a, sheet_a), (_, sheet_b)) in catalog().into_iter().zip(catalog()) {
        assert_eq!(
            sheet_a.compose(&theme).unwrap(),
            sheet_b.compose(&theme).unwrap(),
            "{name_a} must compose identically every run"
        );
    }
}
