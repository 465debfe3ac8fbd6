//! SVG primitive emitters.
//!
//! Stateless builders for rectangle, line, text, path, polyline, group and
//! the document wrapper. Each takes explicit pixel-space geometry plus an
//! optional [`Style`] and returns a self-contained markup fragment; style
//! attributes that are unset are omitted from the output entirely.
//!
//! All callers are trusted internal code, so there are no error paths here.

use glam::DVec2;
use std::fmt::Write;

/// Horizontal anchoring for text elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    fn as_str(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// Optional presentation attributes for a primitive.
///
/// Only the attributes actually set are emitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
    pub stroke_dasharray: Option<String>,
    pub font_size: Option<f64>,
    pub font_family: Option<String>,
    pub text_anchor: Option<TextAnchor>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    pub fn stroke(mut self, stroke: impl Into<String>) -> Self {
        self.stroke = Some(stroke.into());
        self
    }

    pub fn stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = Some(width);
        self
    }

    pub fn stroke_dasharray(mut self, dashes: impl Into<String>) -> Self {
        self.stroke_dasharray = Some(dashes.into());
        self
    }

    pub fn font_size(mut self, size: f64) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    pub fn text_anchor(mut self, anchor: TextAnchor) -> Self {
        self.text_anchor = Some(anchor);
        self
    }

    /// Serialize the set attributes, space-separated. Empty when nothing is set.
    fn attrs(&self) -> String {
        let mut out = String::new();
        if let Some(fill) = &self.fill {
            write!(out, r#" fill="{fill}""#).unwrap();
        }
        if let Some(stroke) = &self.stroke {
            write!(out, r#" stroke="{stroke}""#).unwrap();
        }
        if let Some(width) = self.stroke_width {
            write!(out, r#" stroke-width="{}""#, num(width)).unwrap();
        }
        if let Some(dashes) = &self.stroke_dasharray {
            write!(out, r#" stroke-dasharray="{dashes}""#).unwrap();
        }
        if let Some(size) = self.font_size {
            write!(out, r#" font-size="{}""#, num(size)).unwrap();
        }
        if let Some(family) = &self.font_family {
            write!(out, r#" font-family="{family}""#).unwrap();
        }
        if let Some(anchor) = self.text_anchor {
            write!(out, r#" text-anchor="{}""#, anchor.as_str()).unwrap();
        }
        out
    }
}

/// Format a pixel coordinate compactly: integers stay integral, fractional
/// values keep at most two decimals with trailing zeros trimmed.
pub fn num(v: f64) -> String {
    if v == v.trunc() && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        let s = format!("{v:.2}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Escape text content for XML.
fn escape(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    for c in content.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn rect(x: f64, y: f64, width: f64, height: f64, style: &Style) -> String {
    format!(
        r#"<rect x="{}" y="{}" width="{}" height="{}"{}/>"#,
        num(x),
        num(y),
        num(width),
        num(height),
        style.attrs()
    )
}

pub fn line(x1: f64, y1: f64, x2: f64, y2: f64, style: &Style) -> String {
    format!(
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}"{}/>"#,
        num(x1),
        num(y1),
        num(x2),
        num(y2),
        style.attrs()
    )
}

pub fn text(x: f64, y: f64, content: &str, style: &Style) -> String {
    format!(
        r#"<text x="{}" y="{}"{}>{}</text>"#,
        num(x),
        num(y),
        style.attrs(),
        escape(content)
    )
}

pub fn path(d: &str, style: &Style) -> String {
    format!(r#"<path d="{}"{}/>"#, d, style.attrs())
}

pub fn polyline(points: &[DVec2], style: &Style) -> String {
    let mut coords = String::new();
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            coords.push(' ');
        }
        write!(coords, "{},{}", num(p.x), num(p.y)).unwrap();
    }
    format!(r#"<polyline points="{}"{}/>"#, coords, style.attrs())
}

pub fn group(content: &str, transform: Option<&str>) -> String {
    match transform {
        Some(t) => format!(r#"<g transform="{t}">{content}</g>"#),
        None => format!("<g>{content}</g>"),
    }
}

/// Wrap content into a complete standalone SVG document with embedded
/// default typography.
pub fn svg_doc(width: f64, height: f64, content: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n\
         <style>\n  text {{ font-family: 'Helvetica Neue', Arial, sans-serif; }}\n</style>\n\
         {content}\n</svg>",
        w = num(width),
        h = num(height),
    )
}
