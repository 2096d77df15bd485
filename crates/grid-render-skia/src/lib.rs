// File: crates/grid-render-skia/src/lib.rs
// Summary: Skia CPU raster backend; draws grid scenes to RGBA8 buffers and PNG files.

pub mod paint;

use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use grid_core::{Rect, Renderer, Scene, Segment, StyleMap, Transform};
use log::debug;
use skia_safe as skia;

/// Default surface width in pixels.
pub const WIDTH: i32 = 700;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 700;

pub struct RasterOptions {
    pub width: i32,
    pub height: i32,
    /// `None` leaves the surface transparent.
    pub background: Option<skia::Color>,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            background: Some(skia::Color::WHITE),
        }
    }
}

/// [`Renderer`] drawing straight onto a Skia canvas.
pub struct SkiaRenderer<'a> {
    canvas: &'a skia::Canvas,
}

impl<'a> SkiaRenderer<'a> {
    pub fn new(canvas: &'a skia::Canvas) -> Self {
        Self { canvas }
    }
}

impl Renderer for SkiaRenderer<'_> {
    fn begin_group(&mut self, _attributes: &StyleMap, transform: &Transform) {
        self.canvas.save();
        if let Some((tx, ty)) = transform.translate {
            self.canvas.translate((tx as f32, ty as f32));
        }
        if let Some(s) = transform.scale {
            self.canvas.scale((s as f32, s as f32));
        }
        if let Some(deg) = transform.rotate {
            self.canvas.rotate(deg as f32, None);
        }
    }

    fn rect(&mut self, rect: Rect, style: &StyleMap) {
        let r = skia::Rect::from_xywh(rect.x as f32, rect.y as f32, rect.width as f32, rect.height as f32);
        if let Some(fill) = paint::fill_paint(style) {
            self.canvas.draw_rect(r, &fill);
        }
        if let Some(stroke) = paint::stroke_paint(style) {
            self.canvas.draw_rect(r, &stroke);
        }
    }

    fn line(&mut self, segment: Segment, style: &StyleMap) {
        if let Some(stroke) = paint::stroke_paint(style) {
            self.canvas.draw_line(
                (segment.x1 as f32, segment.y1 as f32),
                (segment.x2 as f32, segment.y2 as f32),
                &stroke,
            );
        }
    }

    fn end_group(&mut self) {
        self.canvas.restore();
    }
}

/// Rasterize `scene` and read it back as unpremultiplied RGBA8.
/// Returns (pixels, width, height, row stride in bytes).
pub fn render_to_rgba8(scene: &Scene, opts: &RasterOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
    if opts.width <= 0 || opts.height <= 0 {
        anyhow::bail!("invalid surface size {}x{}", opts.width, opts.height);
    }
    let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
    {
        let canvas = surface.canvas();
        canvas.clear(opts.background.unwrap_or(skia::Color::TRANSPARENT));
        scene.draw(&mut SkiaRenderer::new(canvas));
    }

    let info = skia::ImageInfo::new(
        (opts.width, opts.height),
        skia::ColorType::RGBA8888,
        skia::AlphaType::Unpremul,
        None,
    );
    let stride = opts.width as usize * 4;
    let mut pixels = vec![0u8; stride * opts.height as usize];
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        anyhow::bail!("failed to read back raster pixels");
    }
    debug!(
        "rasterized {} primitives onto {}x{} surface",
        scene.primitives.len(),
        opts.width,
        opts.height
    );
    Ok((pixels, opts.width as u32, opts.height as u32, stride))
}

pub fn render_to_png_bytes(scene: &Scene, opts: &RasterOptions) -> Result<Vec<u8>> {
    let (pixels, w, h, _) = render_to_rgba8(scene, opts)?;
    let img = image::RgbaImage::from_raw(w, h, pixels)
        .ok_or_else(|| anyhow::anyhow!("pixel buffer does not match {w}x{h}"))?;
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .context("encode PNG failed")?;
    Ok(bytes)
}

/// Render `scene` to a PNG at `output_png_path`, creating parent directories.
pub fn render_to_png(scene: &Scene, opts: &RasterOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
    let path = output_png_path.as_ref();
    let bytes = render_to_png_bytes(scene, opts)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes).with_context(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}
