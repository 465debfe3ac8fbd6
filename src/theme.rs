//! Drawing theme: scale factors and the architectural style table.
//!
//! Composers take a [`Theme`] by reference instead of reaching for global
//! state, so they stay pure and testable in isolation.

use crate::svg::{Style, TextAnchor};
use crate::types::Scale;

/// Detail sheets (floor plans, elevations, sections, roof plan) render at
/// 12 px per foot, matching a 1/4" = 1'-0" paper scale.
pub const DETAIL_PIXELS_PER_FOOT: f64 = 12.0;

/// The site plan renders the whole property at a coarser 6 px per foot.
pub const SITE_PIXELS_PER_FOOT: f64 = 6.0;

/// Named line weights and text treatments shared by every sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleSheet {
    pub exterior_wall: Style,
    pub interior_wall: Style,
    pub door: Style,
    pub door_swing: Style,
    pub window: Style,
    pub dimension: Style,
    pub dimension_text: Style,
    pub room_label: Style,
    pub room_dimension: Style,
    pub title_block: Style,
    pub hidden: Style,
    /// Faint full-rectangle room outline drawn under the walls.
    pub room_outline: Style,
}

impl StyleSheet {
    /// The standard architectural line-weight convention.
    pub fn architectural() -> Self {
        StyleSheet {
            exterior_wall: Style::new().fill("black").stroke("black").stroke_width(3.0),
            interior_wall: Style::new().fill("black").stroke("black").stroke_width(2.0),
            door: Style::new().fill("none").stroke("black").stroke_width(1.0),
            door_swing: Style::new()
                .fill("none")
                .stroke("black")
                .stroke_width(1.0)
                .stroke_dasharray("4,2"),
            window: Style::new().fill("white").stroke("black").stroke_width(1.0),
            dimension: Style::new().fill("none").stroke("black").stroke_width(0.5),
            dimension_text: Style::new().font_size(8.0).text_anchor(TextAnchor::Middle),
            room_label: Style::new().font_size(10.0).text_anchor(TextAnchor::Middle),
            room_dimension: Style::new().font_size(7.0).text_anchor(TextAnchor::Middle),
            title_block: Style::new().font_size(14.0).text_anchor(TextAnchor::Start),
            hidden: Style::new()
                .fill("none")
                .stroke("gray")
                .stroke_width(1.0)
                .stroke_dasharray("2,2"),
            room_outline: Style::new().fill("none").stroke("#ccc").stroke_width(0.5),
        }
    }
}

/// The complete injected drawing configuration: one scale per drawing
/// family plus the shared style table.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Building-detail scale used by floor plans, elevations, sections and
    /// the roof plan.
    pub detail: Scale,
    /// Coarser scale used only by the site plan.
    pub site: Scale,
    pub styles: StyleSheet,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            detail: Scale::new(DETAIL_PIXELS_PER_FOOT),
            site: Scale::new(SITE_PIXELS_PER_FOOT),
            styles: StyleSheet::architectural(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_has_two_distinct_scales() {
        let theme = Theme::default();
        assert_eq!(theme.detail.pixels_per_foot, 12.0);
        assert_eq!(theme.site.pixels_per_foot, 6.0);
        assert_ne!(theme.detail, theme.site);
    }

    #[test]
    fn exterior_walls_are_heavier_than_interior() {
        let styles = StyleSheet::architectural();
        assert!(styles.exterior_wall.stroke_width > styles.interior_wall.stroke_width);
    }
}
