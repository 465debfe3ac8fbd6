//! drafthorse: a static-data-driven generator of architectural drawing
//! sheets.
//!
//! The crate maps architectural entities (rooms, walls, doors, windows,
//! floors, buildings, site) in real-world feet to SVG primitives in pixel
//! space, one complete standalone document per drawing type: floor plans,
//! elevations, a section, the roof plan and the site plan. The driver
//! binary writes each sheet as `.svg` and exports a matching `.pdf`.
//!
//! Composers are pure: they read immutable input entities plus an injected
//! [`Theme`] and return a finished document string. All I/O lives in the
//! driver and the [`export`] wrapper.

pub mod config;
pub mod errors;
pub mod export;
pub mod log;
pub mod model;
pub mod render;
pub mod svg;
pub mod theme;
pub mod types;

use enum_dispatch::enum_dispatch;

pub use errors::{ExportError, SheetError};
pub use render::elevation::ElevationSide;
pub use theme::Theme;

use model::{Building, Floor, Site, SitePlacements};

/// A drawing sheet that can compose itself into a finished SVG document.
#[enum_dispatch]
pub trait Compose {
    fn compose(&self, theme: &Theme) -> Result<String, SheetError>;
}

/// One floor's rooms laid out on a titled sheet.
pub struct FloorPlanSheet {
    pub floor: &'static Floor,
    pub title: &'static str,
}

impl Compose for FloorPlanSheet {
    fn compose(&self, theme: &Theme) -> Result<String, SheetError> {
        render::floor_plan::floor_plan(self.floor, self.title, theme)
    }
}

/// An exterior view of one side of a building.
pub struct ElevationSheet {
    pub building: &'static Building,
    pub side: ElevationSide,
    pub title: &'static str,
}

impl Compose for ElevationSheet {
    fn compose(&self, theme: &Theme) -> Result<String, SheetError> {
        render::elevation::elevation(self.building, self.side, self.title, theme)
    }
}

/// The vertical cut through the house.
pub struct SectionSheet {
    pub title: &'static str,
}

impl Compose for SectionSheet {
    fn compose(&self, theme: &Theme) -> Result<String, SheetError> {
        Ok(render::section::section(self.title, theme))
    }
}

/// Ridges, hips and slope callouts seen from above.
pub struct RoofPlanSheet {
    pub title: &'static str,
}

impl Compose for RoofPlanSheet {
    fn compose(&self, theme: &Theme) -> Result<String, SheetError> {
        Ok(render::roof_plan::roof_plan(self.title, theme))
    }
}

/// The whole property at the coarser site scale.
pub struct SitePlanSheet {
    pub site: &'static Site,
    pub placements: &'static SitePlacements,
    pub title: &'static str,
}

impl Compose for SitePlanSheet {
    fn compose(&self, theme: &Theme) -> Result<String, SheetError> {
        render::site_plan::site_plan(self.site, self.placements, self.title, theme)
    }
}

/// Any drawing sheet in the set.
#[enum_dispatch(Compose)]
pub enum Sheet {
    FloorPlan(FloorPlanSheet),
    Elevation(ElevationSheet),
    Section(SectionSheet),
    RoofPlan(RoofPlanSheet),
    SitePlan(SitePlanSheet),
}

/// The full drawing set for the reference farmhouse design, in output
/// order, keyed by file stem.
pub fn catalog() -> Vec<(&'static str, Sheet)> {
    vec![
        (
            "floor-plan-ground",
            FloorPlanSheet { floor: &config::MAIN_HOUSE.floors[0], title: "Ground Floor Plan - Main House" }
                .into(),
        ),
        (
            "floor-plan-upper",
            FloorPlanSheet { floor: &config::MAIN_HOUSE.floors[1], title: "Upper Floor Plan - Main House" }
                .into(),
        ),
        (
            "floor-plan-casita",
            FloorPlanSheet { floor: &config::CASITA.floors[0], title: "Floor Plan - Master Casita" }.into(),
        ),
        (
            "elevation-front",
            ElevationSheet {
                building: &*config::MAIN_HOUSE,
                side: ElevationSide::Front,
                title: "Front Elevation",
            }
            .into(),
        ),
        (
            "elevation-rear",
            ElevationSheet {
                building: &*config::MAIN_HOUSE,
                side: ElevationSide::Rear,
                title: "Rear Elevation",
            }
            .into(),
        ),
        (
            "elevation-left",
            ElevationSheet {
                building: &*config::MAIN_HOUSE,
                side: ElevationSide::Left,
                title: "Left Side Elevation",
            }
            .into(),
        ),
        (
            "elevation-right",
            ElevationSheet {
                building: &*config::MAIN_HOUSE,
                side: ElevationSide::Right,
                title: "Right Side Elevation",
            }
            .into(),
        ),
        (
            "site-plan",
            SitePlanSheet { site: &*config::SITE, placements: &*config::SITE_PLACEMENTS, title: "Site Plan" }
                .into(),
        ),
        ("section-aa", SectionSheet { title: "Section A-A" }.into()),
        ("roof-plan", RoofPlanSheet { title: "Roof Plan" }.into()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_the_full_drawing_set() {
        let names: Vec<_> = catalog().into_iter().map(|(name, _)| name).collect();
        assert_eq!(names.len(), 10);
        for expected in ["floor-plan-ground", "elevation-front", "site-plan", "section-aa", "roof-plan"] {
            assert!(names.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn every_catalog_sheet_composes() {
        let theme = Theme::default();
        for (name, sheet) in catalog() {
            let svg = sheet.compose(&theme).unwrap_or_else(|e| panic!("{name} failed: {e}"));
            assert!(svg.starts_with("<?xml"), "{name} is not a standalone document");
            assert!(svg.ends_with("</svg>"), "{name} is not closed");
        }
    }
}
