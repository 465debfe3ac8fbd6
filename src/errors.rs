//! Error types with diagnostics using miette.
//!
//! The composers operate on trusted in-memory data, so the failure surface
//! is narrow: violated preconditions on the input graph, plus I/O and
//! conversion failures in the export wrapper.

use miette::Diagnostic;
use thiserror::Error;

// ============================================================================
// Composition Errors
// ============================================================================

/// Errors raised while composing a drawing sheet
#[derive(Error, Diagnostic, Debug)]
pub enum SheetError {
    /// The building is missing a floor the composer requires.
    #[error("building '{building}' has no floor at level {level}")]
    #[diagnostic(
        code(drafthorse::sheet::missing_floor),
        help("the caller must supply a building with the expected floor levels present")
    )]
    MissingFloor { building: String, level: u32 },

    /// A floor with no rooms cannot define sheet bounds.
    #[error("floor '{floor}' has no rooms")]
    #[diagnostic(
        code(drafthorse::sheet::empty_floor),
        help("an empty floor is not a supported input for a floor plan")
    )]
    EmptyFloor { floor: String },

    /// The driveway polygon has too few points to derive a rectangle.
    #[error("driveway polygon has {count} points, need at least 4")]
    #[diagnostic(code(drafthorse::sheet::driveway_too_short))]
    DrivewayTooShort { count: usize },

    /// The driveway polygon is not axis-aligned.
    #[error("driveway polygon is not rectilinear")]
    #[diagnostic(
        code(drafthorse::sheet::driveway_not_rectilinear),
        help(
            "the site plan derives the driveway rectangle from the first three points; \
             consecutive points must share an axis"
        )
    )]
    DrivewayNotRectilinear,
}

// ============================================================================
// Export Errors
// ============================================================================

/// Errors raised by the SVG → PDF export wrapper
#[derive(Error, Diagnostic, Debug)]
pub enum ExportError {
    #[error("failed to parse SVG document: {0}")]
    #[diagnostic(code(drafthorse::export::svg_parse))]
    SvgParse(String),

    #[error("failed to convert SVG to PDF: {0}")]
    #[diagnostic(code(drafthorse::export::pdf_convert))]
    PdfConvert(String),

    #[error("failed to write {path}")]
    #[diagnostic(code(drafthorse::export::write))]
    Write {
        path: camino::Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
}
