//! Driver: generate every sheet in the catalog as SVG + PDF.

use camino::Utf8PathBuf;
use miette::{IntoDiagnostic, Result, WrapErr};

use drafthorse::{catalog, export, Compose, Theme};

fn main() -> Result<()> {
    let out_dir = std::env::args()
        .nth(1)
        .map(Utf8PathBuf::from)
        .unwrap_or_else(|| Utf8PathBuf::from("output"));

    std::fs::create_dir_all(&out_dir)
        .into_diagnostic()
        .wrap_err_with(|| format!("creating output directory {out_dir}"))?;

    println!("drafthorse - architectural sheet generator");
    println!("==========================================\n");

    let theme = Theme::default();
    for (name, sheet) in catalog() {
        println!("Generating {name}...");

        let svg = sheet.compose(&theme)?;

        let svg_path = out_dir.join(format!("{name}.svg"));
        std::fs::write(&svg_path, &svg)
            .into_diagnostic()
            .wrap_err_with(|| format!("writing {svg_path}"))?;
        println!("  wrote {svg_path}");

        let pdf_path = out_dir.join(format!("{name}.pdf"));
        export::svg_to_pdf(&svg, &pdf_path)?;
        println!("  wrote {pdf_path}");
    }

    println!("\nDone.");
    Ok(())
}
