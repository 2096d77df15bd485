// File: crates/grid-demo/src/main.rs
// Summary: Demo loads a grid config (TOML/JSON) and writes the grid as an SVG document,
// a transformed SVG group, and a PNG raster.

use anyhow::{Context, Result};
use grid_core::svg::{render_document, render_group};
use grid_core::{Direction, Grid, GridConfig, Layer, Point, Scene, StyleMap, Transform};
use grid_render_skia::RasterOptions;
use log::{info, warn};
use std::path::{Path, PathBuf};

const REFERENCE_CONFIG: &str = include_str!("../config/reference.toml");
const CANVAS: f64 = 700.0;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Accept a config path from the CLI or fall back to the bundled reference grid
    let (config, base) = match std::env::args().nth(1) {
        Some(raw) => {
            let (path, used_alt) = resolve_path(&raw)?;
            info!("Using config file: {}", path.display());
            if used_alt {
                info!("  (extension swapped between .toml/.json)");
            }
            let cfg = GridConfig::load(&path)
                .with_context(|| format!("failed to load config '{}'", path.display()))?;
            let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
            (cfg, output_base(stem))
        }
        None => {
            info!("No config given; using the bundled reference grid");
            (GridConfig::from_toml_str(REFERENCE_CONFIG)?, output_base(""))
        }
    };

    // 1) Plain document built straight from the config
    let scene = Scene::from_config(&config)?;
    info!(
        "Scene: {} axes, {} major, {} minor lines",
        scene.count(Layer::Axis),
        scene.count(Layer::Major),
        scene.count(Layer::Minor)
    );
    let mut flat = scene.clone();
    flat.transform = Transform::default();
    let out_doc = out_name_with(&base, "svg");
    write_text(&out_doc, &render_document(&flat, CANVAS, CANVAS))?;
    info!("Wrote {}", out_doc.display());

    // 2) Same grid as a transformed group inside a document
    let mut grouped = scene.clone();
    if grouped.transform.is_identity() {
        grouped.transform = Transform { translate: None, scale: Some(0.5), rotate: Some(-5.0) };
    }
    let out_group = out_name_with(&format!("{base}_group"), "svg");
    write_text(&out_group, &wrap_group(&render_group(&grouped)))?;
    info!("Wrote {} (transform: {})", out_group.display(), grouped.transform.to_svg());

    // 3) Raster
    let out_png = out_name_with(&base, "png");
    grid_render_skia::render_to_png(&scene, &RasterOptions::default(), &out_png)?;
    info!("Wrote {}", out_png.display());

    // 4) Programmatic use of the grid API, without a config
    let out_api = out_name_with(&format!("{base}_api"), "svg");
    write_text(&out_api, &render_document(&api_scene(&config)?, CANVAS, CANVAS))?;
    info!("Wrote {}", out_api.display());

    Ok(())
}

/// Rebuild the config's grid by calling `Grid` directly: center-anchored axes,
/// majors and a single layer of minors in every direction.
fn api_scene(config: &GridConfig) -> Result<Scene> {
    let g = &config.geometry;
    let mut grid = Grid::new(g.xmin, g.ymin, g.width, g.height)?;
    grid.anchor_origin(Point::new(0.5, 0.5));

    let distance = config.major_lines.as_ref().map_or(50.0, |l| l.configuration.distance);
    let mut scene = Scene::default();
    let bounds = StyleMap::new().with("fill", "none").with("stroke", "#000000").with("stroke-width", 2.0);
    scene.push_rect(Layer::Bounds, grid.bounding_rectangle(), &bounds);

    match grid.axes() {
        Some(axes) => {
            let style = StyleMap::new().with("stroke", "#FF0000").with("stroke-width", 2.0);
            for segment in axes.segments() {
                scene.push_line(Layer::Axis, segment, &style);
            }
        }
        None => warn!("origin missing, axes skipped"),
    }

    let major = StyleMap::new().with("stroke", "#00FF00").with("stroke-width", 1.0);
    let minor = StyleMap::new().with("stroke", "#0000FF").with("stroke-width", 0.1);
    for dir in Direction::BOTH {
        scene.push_lines(Layer::Major, grid.major_lines(distance, true, true, dir)?, &major);
        scene.push_lines(Layer::Minor, grid.minor_lines(1, distance, dir)?, &minor);
    }
    Ok(scene)
}

fn wrap_group(group: &str) -> String {
    let mut out = format!(
        "<svg xmlns=\"{}\" width=\"{CANVAS}\" height=\"{CANVAS}\">\n",
        grid_core::svg::SVG_NS
    );
    for line in group.lines() {
        out.push_str("  ");
        out.push_str(line);
        out.push('\n');
    }
    out.push_str("</svg>\n");
    out
}

fn write_text(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))
}

/// Resolve path, trying .toml/.json swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(raw: &str) -> Result<(PathBuf, bool)> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

/// Output base name: `grid` for the bundled reference, `grid_<stem>` for a config file.
fn output_base(stem: &str) -> String {
    if stem.is_empty() {
        "grid".to_string()
    } else {
        format!("grid_{stem}")
    }
}

/// Produce output file name like target/out/<base>.<ext>
fn out_name_with(base: &str, ext: &str) -> PathBuf {
    let mut out = PathBuf::from("target/out");
    out.push(format!("{base}.{ext}"));
    out
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "toml" => {
            alt.set_extension("json");
            Some(alt)
        }
        "json" => {
            alt.set_extension("toml");
            Some(alt)
        }
        _ => None,
    }
}
