//! JS-facing surface. Structured results are JSON strings; failures come back as
//! `{"error": "..."}` so callers can branch on a single shape.

use image::RgbaImage;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::HtmlAnchorElement;

use crate::controls;
use crate::error::{PfpError, Result};
use crate::image_ops::{crop_image, encode_data_url, load_data_url, png_data_url, scale_image};
use crate::polygon::generate;
use crate::raster::export_png;
use crate::svg;
use crate::throttle::LivePolygon;
use crate::types::{CropRect, ExportConfig};

type JsResult<T> = std::result::Result<T, JsValue>;

fn respond<T: Serialize>(result: Result<T>) -> String {
    let value = result.and_then(|v| -> Result<serde_json::Value> { Ok(serde_json::to_value(v)?) });
    match value {
        Ok(v) => v.to_string(),
        Err(e) => {
            log::warn!("request failed: {}", e);
            serde_json::json!({ "error": e.to_string() }).to_string()
        }
    }
}

fn to_js_error(e: PfpError) -> JsValue {
    log::warn!("request failed: {}", e);
    JsValue::from_str(&e.to_string())
}

/// Installs the panic hook and, on wasm, routes `log` output to the console.
#[wasm_bindgen]
pub fn init() {
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    {
        let _ = console_log::init_with_level(log::Level::Debug);
    }
}

/// `{path, x, y, width, height, viewBox, bounds}` for the given controls.
#[wasm_bindgen]
pub fn create_polygon_path(sides: u32, rotation: f64, smoothness: f64) -> String {
    respond(generate(sides, rotation, smoothness).map(|p| p.attrs()))
}

/// Same as [`create_polygon_path`] as a JS object instead of a JSON string.
#[wasm_bindgen]
pub fn create_polygon_path_object(sides: u32, rotation: f64, smoothness: f64) -> JsResult<JsValue> {
    let polygon = generate(sides, rotation, smoothness).map_err(to_js_error)?;
    Ok(serde_wasm_bindgen::to_value(&polygon.attrs())?)
}

#[wasm_bindgen]
pub fn control_parameters() -> String {
    respond(Ok(controls::parameters()))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageResponse {
    data_url: String,
    width: u32,
    height: u32,
}

impl ImageResponse {
    fn new(img: &RgbaImage) -> Result<ImageResponse> {
        Ok(ImageResponse {
            data_url: png_data_url(img)?,
            width: img.width(),
            height: img.height(),
        })
    }
}

fn scale_uploaded(data_url: &str, config_json: &str) -> Result<ImageResponse> {
    let config = ExportConfig::from_json(config_json)?;
    let scaled = scale_image(&load_data_url(data_url)?, config.min_scaled_width)?;
    ImageResponse::new(&scaled.to_rgba8())
}

/// Decodes an uploaded image and scales it up to the configured minimum width.
#[wasm_bindgen]
pub fn scale_image_data_url(data_url: &str, config_json: &str) -> String {
    respond(scale_uploaded(data_url, config_json))
}

#[wasm_bindgen]
pub fn crop_image_data_url(data_url: &str, x: f64, y: f64, width: f64, height: f64) -> String {
    let rect = CropRect {
        x,
        y,
        width,
        height,
    };
    let cropped = load_data_url(data_url).and_then(|img| crop_image(&img, rect));
    respond(cropped.and_then(|img| ImageResponse::new(&img)))
}

/// Initial crop for an image of the given size.
#[wasm_bindgen]
pub fn centered_crop(width: u32, height: u32) -> String {
    respond(Ok(CropRect::centered_square(width, height)))
}

#[wasm_bindgen]
pub fn render_avatar_svg(
    image_href: &str,
    sides: u32,
    rotation: f64,
    smoothness: f64,
) -> JsResult<String> {
    let polygon = generate(sides, rotation, smoothness).map_err(to_js_error)?;
    Ok(svg::avatar_svg(&polygon, image_href))
}

#[wasm_bindgen]
pub fn render_placeholder_svg(
    sides: u32,
    rotation: f64,
    smoothness: f64,
    touch: bool,
) -> JsResult<String> {
    let polygon = generate(sides, rotation, smoothness).map_err(to_js_error)?;
    Ok(svg::placeholder_svg(&polygon, touch))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportResponse {
    data_url: String,
    filename: String,
    size: u32,
}

fn export_avatar(
    image_data_url: &str,
    sides: u32,
    rotation: f64,
    smoothness: f64,
    config_json: &str,
) -> Result<ExportResponse> {
    let config = ExportConfig::from_json(config_json)?;
    let polygon = generate(sides, rotation, smoothness)?;
    let png = export_png(&polygon, &load_data_url(image_data_url)?, config.size)?;
    Ok(ExportResponse {
        data_url: encode_data_url("image/png", &png),
        filename: config.filename,
        size: config.size,
    })
}

/// Rasterizes the clipped avatar to a square PNG data URL.
#[wasm_bindgen]
pub fn export_png_data_url(
    image_data_url: &str,
    sides: u32,
    rotation: f64,
    smoothness: f64,
    config_json: &str,
) -> String {
    respond(export_avatar(image_data_url, sides, rotation, smoothness, config_json))
}

/// Saves a data URL through a temporary, invisible download link.
#[wasm_bindgen]
pub fn download_data_url(data_url: &str, filename: &str) -> JsResult<()> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;

    let link: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    link.set_download(filename);
    link.set_href(data_url);
    link.style().set_property("opacity", "0")?;

    body.append_child(&link)?;
    link.click();
    link.remove();
    log::debug!("download triggered for {}", filename);
    Ok(())
}

/// Slider-driven preview. Smoothness is throttled, the other controls apply at once.
#[wasm_bindgen]
pub struct LivePreview {
    inner: LivePolygon,
}

#[wasm_bindgen]
impl LivePreview {
    #[wasm_bindgen(constructor)]
    pub fn new() -> LivePreview {
        LivePreview { inner: LivePolygon::default() }
    }

    pub fn set_sides(&mut self, sides: u32) {
        self.inner.set_sides(sides);
    }

    pub fn set_rotation(&mut self, rotation: f64) {
        self.inner.set_rotation(rotation);
    }

    pub fn set_smoothness(&mut self, smoothness: f64, now_ms: f64) -> bool {
        self.inner.set_smoothness(smoothness, now_ms)
    }

    pub fn poll(&mut self, now_ms: f64) -> bool {
        self.inner.poll(now_ms)
    }

    pub fn path(&self) -> String {
        respond(self.inner.current().map(|p| p.attrs()))
    }

    pub fn labels(&self) -> String {
        let c = self.inner.controls();
        serde_json::json!({
            "rotation": c.rotation_label(),
            "smoothness": c.smoothness_label(),
            "sides": c.sides_label(),
        })
        .to_string()
    }
}

impl Default for LivePreview {
    fn default() -> Self {
        Self::new()
    }
}
