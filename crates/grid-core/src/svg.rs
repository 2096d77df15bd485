// File: crates/grid-core/src/svg.rs
// Summary: SVG text backend for grid scenes (`<g>` group or standalone document).

use std::fmt::Write;

use crate::geometry::{Rect, Segment};
use crate::scene::{Renderer, Scene};
use crate::style::{kebab_case, StyleMap};
use crate::types::Transform;

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Accumulates SVG markup. Attribute names are converted to kebab-case and
/// geometry attributes come first, so style entries can override them.
#[derive(Debug, Default)]
pub struct SvgWriter {
    out: String,
    depth: usize,
}

impl SvgWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn element(&mut self, name: &str, attrs: &StyleMap, self_closing: bool) {
        for _ in 0..self.depth {
            self.out.push_str("  ");
        }
        self.out.push('<');
        self.out.push_str(name);
        for (k, v) in attrs.iter() {
            let _ = write!(self.out, " {}=\"{}\"", kebab_case(k), escape(&v.to_string()));
        }
        self.out.push_str(if self_closing { "/>\n" } else { ">\n" });
    }

    fn close(&mut self, name: &str) {
        for _ in 0..self.depth {
            self.out.push_str("  ");
        }
        let _ = writeln!(self.out, "</{name}>");
    }
}

impl Renderer for SvgWriter {
    fn begin_group(&mut self, attributes: &StyleMap, transform: &Transform) {
        let mut attrs = attributes.clone();
        if !transform.is_identity() {
            attrs.set("transform", transform.to_svg());
        }
        self.element("g", &attrs, false);
        self.depth += 1;
    }

    fn rect(&mut self, rect: Rect, style: &StyleMap) {
        let attrs = StyleMap::new()
            .with("x", rect.x)
            .with("y", rect.y)
            .with("width", rect.width)
            .with("height", rect.height)
            .merged(style);
        self.element("rect", &attrs, true);
    }

    fn line(&mut self, segment: Segment, style: &StyleMap) {
        let attrs = StyleMap::new()
            .with("x1", segment.x1)
            .with("y1", segment.y1)
            .with("x2", segment.x2)
            .with("y2", segment.y2)
            .merged(style);
        self.element("line", &attrs, true);
    }

    fn end_group(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.close("g");
    }
}

/// Render the scene as a single `<g>` element.
pub fn render_group(scene: &Scene) -> String {
    let mut w = SvgWriter::new();
    scene.draw(&mut w);
    w.finish()
}

/// Wrap the scene's group in an `<svg>` root of the given pixel size.
pub fn render_document(scene: &Scene, width: f64, height: f64) -> String {
    let mut w = SvgWriter::new();
    let root = StyleMap::new()
        .with("xmlns", SVG_NS)
        .with("width", width)
        .with("height", height);
    w.element("svg", &root, false);
    w.depth += 1;
    scene.draw(&mut w);
    w.depth -= 1;
    w.close("svg");
    w.finish()
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
