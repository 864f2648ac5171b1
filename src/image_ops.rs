use std::io::Cursor;

use base64::{Engine as _, engine::general_purpose};
use image::{DynamicImage, ImageOutputFormat, RgbaImage};
use image::imageops::{self, FilterType};

use crate::error::{PfpError, Result};
use crate::types::CropRect;

/// Splits a base64 `data:` URL into its mime type and payload bytes.
pub fn decode_data_url(url: &str) -> Result<(String, Vec<u8>)> {
    let rest = url
        .strip_prefix("data:")
        .ok_or_else(|| PfpError::InvalidDataUrl("missing data: prefix".to_string()))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| PfpError::InvalidDataUrl("missing payload separator".to_string()))?;
    let mime = header
        .strip_suffix(";base64")
        .ok_or_else(|| PfpError::InvalidDataUrl("only base64 payloads are supported".to_string()))?;
    let bytes = general_purpose::STANDARD.decode(payload.trim())?;
    Ok((mime.to_string(), bytes))
}

pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, general_purpose::STANDARD.encode(bytes))
}

pub fn load_image(bytes: &[u8]) -> Result<DynamicImage> {
    let img = image::load_from_memory(bytes)?;
    if img.width() == 0 || img.height() == 0 {
        return Err(PfpError::EmptyImage);
    }
    log::debug!("decoded image {}x{}", img.width(), img.height());
    Ok(img)
}

pub fn load_data_url(url: &str) -> Result<DynamicImage> {
    let (mime, bytes) = decode_data_url(url)?;
    if !mime.starts_with("image/") {
        log::warn!("data url declares {}, decoding anyway", mime);
    }
    load_image(&bytes)
}

/// Rescales to a width of at least `min_width`, keeping the aspect ratio.
/// Images already wider than that keep their size.
pub fn scale_image(img: &DynamicImage, min_width: u32) -> Result<DynamicImage> {
    let (w, h) = (img.width(), img.height());
    if w == 0 || h == 0 {
        return Err(PfpError::EmptyImage);
    }
    let width = w.max(min_width);
    let height = ((h as f64 / w as f64) * width as f64).floor().max(1.0) as u32;
    if (width, height) == (w, h) {
        return Ok(img.clone());
    }
    log::debug!("scaling image {}x{} -> {}x{}", w, h, width, height);
    Ok(img.resize_exact(width, height, FilterType::Triangle))
}

/// Copies `rect` out of `img`. Parts of the rectangle outside the source stay transparent.
pub fn crop_image(img: &DynamicImage, rect: CropRect) -> Result<RgbaImage> {
    let width = rect.width.round();
    let height = rect.height.round();
    if !(width >= 1.0 && height >= 1.0) {
        return Err(PfpError::EmptyCrop { width: rect.width, height: rect.height });
    }
    let mut out = RgbaImage::new(width as u32, height as u32);
    imageops::replace(&mut out, &img.to_rgba8(), -rect.x.round() as i64, -rect.y.round() as i64);
    Ok(out)
}

pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut png_bytes: Vec<u8> = Vec::new();
    DynamicImage::ImageRgba8(img.clone())
        .write_to(&mut Cursor::new(&mut png_bytes), ImageOutputFormat::Png)?;
    Ok(png_bytes)
}

pub fn png_data_url(img: &RgbaImage) -> Result<String> {
    Ok(encode_data_url("image/png", &encode_png(img)?))
}
