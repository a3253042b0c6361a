use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::style::Style;
use crate::surface::{Point, Surface};

/// SVG document canvas
///
/// Edges land in a back layer and nodes in a front layer, so a line drawn
/// after a circle still ends up underneath it.
///
/// # Example
/// ```rust
/// use bst_canvas::style::Style;
/// use bst_canvas::surface::{Point, Surface};
/// use bst_canvas::svg::SvgSurface;
/// let mut svg = SvgSurface::new(200.0, 100.0);
/// svg.draw_node(Point::new(100.0, 30.0), 20.0, "42", &Style::default());
/// assert!(svg.to_svg().contains(">42</text>"));
/// ```
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    edges: Vec<String>,
    nodes: Vec<String>,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            edges: Vec::new(),
            nodes: Vec::new(),
        }
    }

    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height,
        );
        out.push_str("  <g class=\"edges\">\n");
        for edge in &self.edges {
            let _ = writeln!(out, "    {edge}");
        }
        out.push_str("  </g>\n  <g class=\"nodes\">\n");
        for node in &self.nodes {
            let _ = writeln!(out, "    {node}");
        }
        out.push_str("  </g>\n</svg>\n");
        out
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_svg()).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(
            path = %path.display(),
            edges = self.edges.len(),
            nodes = self.nodes.len(),
            "saved svg"
        );
        Ok(())
    }
}

impl Surface for SvgSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear(&mut self) {
        self.edges.clear();
        self.nodes.clear();
    }

    fn draw_edge(&mut self, from: Point, to: Point, style: &Style) {
        self.edges.push(format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
            from.x,
            from.y,
            to.x,
            to.y,
            escape(&style.stroke),
            style.line_width,
        ));
    }

    fn draw_node(&mut self, center: Point, radius: f64, label: &str, style: &Style) {
        self.nodes.push(format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
            center.x,
            center.y,
            radius,
            escape(&style.fill),
            escape(&style.stroke),
            style.line_width,
        ));
        // label stroke is painted under the fill as a halo
        self.nodes.push(format!(
            r#"<text x="{}" y="{}" text-anchor="middle" dominant-baseline="middle" font-family="{}" font-size="{}" fill="{}" stroke="{}" paint-order="stroke">{}</text>"#,
            center.x,
            center.y,
            escape(&style.font_family),
            style.font_size,
            escape(&style.label_fill),
            escape(&style.label_stroke),
            escape(label),
        ));
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
