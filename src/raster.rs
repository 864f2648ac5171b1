//! Rasterizes the clipped avatar to a fixed-size square bitmap.

use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbaImage};
use tiny_skia::{FillRule, Mask, Path, PathBuilder, Transform};

use crate::error::{PfpError, Result};
use crate::image_ops::encode_png;
use crate::polygon::PolygonPath;

fn skia_path(polygon: &PolygonPath) -> Option<Path> {
    let mut pb = PathBuilder::new();
    pb.move_to(polygon.start.x as f32, polygon.start.y as f32);
    for s in &polygon.segments {
        pb.cubic_to(
            s.c1.x as f32,
            s.c1.y as f32,
            s.c2.x as f32,
            s.c2.y as f32,
            s.end.x as f32,
            s.end.y as f32,
        );
    }
    pb.close();
    pb.finish()
}

/// Anti-aliased `size * size` alpha mask of the polygon, filled with the non-zero rule.
///
/// Returns `None` for a zero size or a path tiny-skia cannot build (non-finite
/// coordinates).
pub fn coverage_mask(polygon: &PolygonPath, size: u32) -> Option<Mask> {
    let mut mask = Mask::new(size, size)?;
    let path = skia_path(polygon)?;
    let scale = (size as f64 / polygon.width) as f32;
    let ts =
        Transform::from_scale(scale, scale).pre_translate(-polygon.x as f32, -polygon.y as f32);
    mask.fill_path(&path, FillRule::Winding, true, ts);
    Some(mask)
}

/// Draws `image` over the polygon's view box (centered, aspect preserved) on a
/// `size * size` canvas and keeps only what the polygon covers.
pub fn rasterize_avatar(
    polygon: &PolygonPath,
    image: &DynamicImage,
    size: u32,
) -> Result<RgbaImage> {
    if image.width() == 0 || image.height() == 0 {
        return Err(PfpError::EmptyImage);
    }
    let fit = (size as f64 / image.width() as f64).min(size as f64 / image.height() as f64);
    let w = ((image.width() as f64 * fit).round() as u32).max(1);
    let h = ((image.height() as f64 * fit).round() as u32).max(1);
    let resized = imageops::resize(&image.to_rgba8(), w, h, FilterType::Triangle);

    let mut canvas = RgbaImage::new(size, size);
    let left = (size as i64 - w as i64) / 2;
    let top = (size as i64 - h as i64) / 2;
    imageops::replace(&mut canvas, &resized, left, top);

    match coverage_mask(polygon, size) {
        Some(mask) => {
            for (px, &coverage) in canvas.pixels_mut().zip(mask.data()) {
                px[3] = ((px[3] as u16 * coverage as u16 + 127) / 255) as u8;
            }
        }
        None => {
            log::warn!("polygon could not be rasterized, exporting an empty avatar");
            for px in canvas.pixels_mut() {
                px[3] = 0;
            }
        }
    }
    log::debug!(
        "rasterized {}-sided avatar at {}px (bounds {})",
        polygon.sides(),
        size,
        polygon.bounds
    );
    Ok(canvas)
}

pub fn export_png(polygon: &PolygonPath, image: &DynamicImage, size: u32) -> Result<Vec<u8>> {
    let canvas = rasterize_avatar(polygon, image, size)?;
    encode_png(&canvas)
}
