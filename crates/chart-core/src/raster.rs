// File: crates/chart-core/src/raster.rs
// Summary: Headless rendering of a chart scene using Skia CPU raster surfaces (PNG / RGBA8).

use std::path::Path;

use anyhow::{Context, Result};
use skia_safe as skia;

use crate::scene::{Primitive, Scene};
use crate::text::TextShaper;

/// Paint every primitive of `scene` onto `canvas`. The hit area is input-only and not drawn.
pub fn paint_scene(canvas: &skia::Canvas, scene: &Scene, shaper: &TextShaper) {
    for item in &scene.items {
        match item {
            Primitive::Rect { x, y, w, h, fill } => {
                let mut paint = skia::Paint::default();
                paint.set_color(fill.to_skia());
                canvas.draw_rect(skia::Rect::from_xywh(*x, *y, *w, *h), &paint);
            }
            Primitive::Polyline { points, stroke, width } => {
                let Some(&(x0, y0)) = points.first() else { continue };
                let mut path = skia::Path::new();
                path.move_to((x0, y0));
                for &(x, y) in points.iter().skip(1) {
                    path.line_to((x, y));
                }
                let mut paint = stroke_paint(stroke.to_skia(), *width);
                paint.set_stroke_cap(skia::paint::Cap::Round);
                paint.set_stroke_join(skia::paint::Join::Round);
                canvas.draw_path(&path, &paint);
            }
            Primitive::HitArea { .. } => {}
            Primitive::Line { from, to, stroke, width, dash } => {
                let mut paint = stroke_paint(stroke.to_skia(), *width);
                if let Some((on, off)) = dash {
                    paint.set_path_effect(skia::PathEffect::dash(&[*on, *off], 0.0));
                }
                canvas.draw_line(*from, *to, &paint);
            }
            Primitive::Circle { cx, cy, r, fill, stroke, stroke_width } => {
                let mut paint = skia::Paint::default();
                paint.set_anti_alias(true);
                paint.set_style(skia::paint::Style::Fill);
                paint.set_color(fill.to_skia());
                canvas.draw_circle((*cx, *cy), *r, &paint);
                if *stroke_width > 0.0 {
                    let ring = stroke_paint(stroke.to_skia(), *stroke_width);
                    canvas.draw_circle((*cx, *cy), *r, &ring);
                }
            }
            Primitive::Label { text, x, y, anchor, size, color, background, .. } => {
                shaper.draw_label(canvas, text, *x, *y, *anchor, *size, *color, *background);
            }
        }
    }
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn dimensions(scene: &Scene) -> (i32, i32) {
    (scene.width.max(1) as i32, scene.height.max(1) as i32)
}

/// Encode `scene` as PNG bytes.
pub fn render_to_png_bytes(scene: &Scene) -> Result<Vec<u8>> {
    let mut surface = skia::surfaces::raster_n32_premul(dimensions(scene))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
    let shaper = TextShaper::new();
    paint_scene(surface.canvas(), scene, &shaper);

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render `scene` into a tightly packed RGBA8 buffer: `(pixels, width, height, row_bytes)`.
pub fn render_to_rgba8(scene: &Scene) -> Result<(Vec<u8>, u32, u32, usize)> {
    let (w, h) = dimensions(scene);
    let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let row_bytes = info.min_row_bytes();
    let mut pixels = vec![0u8; row_bytes * h as usize];
    {
        let canvas = skia::Canvas::from_raster_direct(&info, &mut pixels, row_bytes, None)
            .ok_or_else(|| anyhow::anyhow!("failed to wrap RGBA buffer in a canvas"))?;
        let shaper = TextShaper::new();
        paint_scene(&canvas, scene, &shaper);
    }
    Ok((pixels, w as u32, h as u32, row_bytes))
}

/// Render `scene` to a PNG file, creating parent directories as needed.
pub fn render_to_png(scene: &Scene, output_png_path: impl AsRef<Path>) -> Result<()> {
    let path = output_png_path.as_ref();
    let bytes = render_to_png_bytes(scene)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
