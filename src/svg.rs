use std::fmt::Write;

use crate::polygon::PolygonPath;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// The avatar: `image_href` stretched over the view box and clipped by the polygon.
pub fn avatar_svg(polygon: &PolygonPath, image_href: &str) -> String {
    format!(
        r##"<svg xmlns="{}" viewBox="{}"><defs><clipPath id="clipPath"><path d="{}" /></clipPath></defs><image href="{}" height="{}" width="{}" x="{}" y="{}" clip-path="url(#clipPath)" /></svg>"##,
        SVG_NS,
        polygon.view_box(),
        polygon.d(),
        escape_attr(image_href),
        polygon.height, polygon.width, polygon.x, polygon.y,
    )
}

/// Shown before a photo is picked: the gradient-filled shape and a prompt.
/// `touch` switches the wording from "click" to "tap".
pub fn placeholder_svg(polygon: &PolygonPath, touch: bool) -> String {
    let mut body = String::new();
    let _ = write!(
        body,
        r##"<defs><linearGradient id="Gradient1"><stop offset="0%" stop-color="#8900c8" /><stop offset="100%" stop-color="#0025cc" /></linearGradient></defs><path d="{}" fill="url(#Gradient1)" />"##,
        polygon.d()
    );
    let (verb, dx) = if touch { ("tap", 2) } else { ("click", -4) };
    let _ = write!(
        body,
        r##"<g transform="scale({})"><g transform="translate(-130 0)"><text dx="64" font-size="128">😏</text><text dy="50" dx="7" font-size="32" font-weight="bold" fill="white">this could be you</text><text dy="80" dx="{}" font-size="24" fill="white">{} here to pick a photo</text></g></g>"##,
        polygon.bounds * 0.005,
        dx,
        verb
    );
    format!(r##"<svg xmlns="{}" viewBox="{}">{}</svg>"##, SVG_NS, polygon.view_box(), body)
}
