//! SVG → PDF export.
//!
//! A thin wrapper over the `usvg`/`svg2pdf` rendering stack. The core hands
//! this module a finished, self-contained SVG document string; everything
//! past that point (parsing, conversion, writing) is the collaborator's
//! problem and failures propagate unchanged.

use camino::Utf8Path;
use svg2pdf::usvg;

use crate::errors::ExportError;

/// Convert a finished SVG document to PDF and write it to `path`.
pub fn svg_to_pdf(svg: &str, path: &Utf8Path) -> Result<(), ExportError> {
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &options).map_err(|e| ExportError::SvgParse(e.to_string()))?;

    let pdf = svg2pdf::to_pdf(
        &tree,
        svg2pdf::ConversionOptions::default(),
        svg2pdf::PageOptions::default(),
    )
    .map_err(|e| ExportError::PdfConvert(format!("{e:?}")))?;

    std::fs::write(path, pdf).map_err(|source| ExportError::Write { path: path.to_owned(), source })?;

    crate::log::debug!(%path, "exported PDF");
    Ok(())
}
