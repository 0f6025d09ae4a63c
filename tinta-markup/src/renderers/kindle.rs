//! Kindle renderers
//!
//! E-readers support a subset of HTML. Most elements render exactly as in
//! [`super::html`]; mail addresses are shown as plain text since readers
//! cannot open mail clients, and figures avoid inline CSS.

use super::figure::ImageRequest;
use super::{html, Element, ImageScale, RenderFn};
use crate::images::Layout;
use html_escape::encode_double_quoted_attribute;

pub(crate) fn renderer(element: Element) -> RenderFn {
    match element {
        Element::Mail => mail,
        other => html::renderer(other),
    }
}

pub fn mail(content: &str, _options: &str) -> String {
    content.trim().to_string()
}

pub fn image(request: &ImageRequest<'_>, layout: &Layout) -> String {
    let width = match request.scale(layout) {
        ImageScale::Explicit { percent, .. } => format!(" width=\"{percent}%\""),
        ImageScale::FullWidth => " width=\"100%\"".to_string(),
        ImageScale::Native => String::new(),
    };

    let mut out = format!(
        "<p class=\"figure\" id=\"{}\"><img src=\"{}\"{width}/></p>",
        encode_double_quoted_attribute(request.label()),
        encode_double_quoted_attribute(request.path)
    );
    if let Some(caption) = request.caption() {
        out.push_str(&format!("\n<p class=\"caption\">{caption}</p>"));
    }
    out
}
