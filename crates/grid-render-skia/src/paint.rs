// File: crates/grid-render-skia/src/paint.rs
// Summary: Translate SVG-style attribute maps into Skia stroke/fill paints.
// Notes:
// - Follows SVG presentation defaults: lines have no stroke unless one is given,
//   rectangles fill black unless `fill` says otherwise.

use grid_core::StyleMap;
use log::warn;
use skia_safe as skia;

/// Parse a CSS color, scaling its alpha by `opacity`. `none`/`transparent` yield `None`.
pub fn parse_color(value: &str, opacity: f32) -> Option<skia::Color> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("none") || value.eq_ignore_ascii_case("transparent") {
        return None;
    }
    match csscolorparser::parse(value) {
        Ok(c) => {
            let [r, g, b, a] = c.to_rgba8();
            let a = (a as f32 * opacity.clamp(0.0, 1.0)).round() as u8;
            Some(skia::Color::from_argb(a, r, g, b))
        }
        Err(e) => {
            warn!("unrecognized color '{value}': {e}");
            None
        }
    }
}

/// Dash intervals from `"4 1"` / `"4,1"`. Odd lists repeat once, as SVG does.
pub fn parse_dasharray(value: &str) -> Vec<f32> {
    if value.trim().eq_ignore_ascii_case("none") {
        return Vec::new();
    }
    let mut v: Vec<f32> = value
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.parse::<f32>().ok())
        .collect();
    if v.iter().any(|d| *d < 0.0) || v.iter().all(|d| *d == 0.0) {
        return Vec::new();
    }
    if v.len() % 2 == 1 {
        v.extend(v.clone());
    }
    v
}

fn number(style: &StyleMap, name: &str) -> Option<f32> {
    style.number(name).map(|v| v as f32)
}

fn opacity(style: &StyleMap, specific: &str) -> f32 {
    number(style, "opacity").unwrap_or(1.0) * number(style, specific).unwrap_or(1.0)
}

/// Stroke paint for the style, or `None` when nothing would be visible.
pub fn stroke_paint(style: &StyleMap) -> Option<skia::Paint> {
    let color = parse_color(&style.property("stroke")?, opacity(style, "stroke-opacity"))?;
    let width = number(style, "stroke-width").unwrap_or(1.0);
    if width <= 0.0 {
        return None;
    }
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    if let Some(dash) = style.property("stroke-dasharray") {
        let intervals = parse_dasharray(&dash);
        if !intervals.is_empty() {
            paint.set_path_effect(skia::PathEffect::dash(&intervals, 0.0));
        }
    }
    Some(paint)
}

/// Fill paint for closed shapes; black when unspecified.
pub fn fill_paint(style: &StyleMap) -> Option<skia::Paint> {
    let fill = style.property("fill").unwrap_or_else(|| "black".to_string());
    let color = parse_color(&fill, opacity(style, "fill-opacity"))?;
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    Some(paint)
}
