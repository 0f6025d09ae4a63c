//! HTML renderers
//!
//! Content reaching these functions has already been expanded by the engine,
//! so it is inserted as-is. Only text that leaves the markup language (mail
//! addresses) is encoded.

use super::figure::ImageRequest;
use super::{Element, ImageScale, RenderFn};
use crate::images::Layout;
use crate::options::Options;
use html_escape::encode_double_quoted_attribute;

pub(crate) fn renderer(element: Element) -> RenderFn {
    match element {
        Element::Bold => bold,
        Element::Italic => italic,
        Element::Underline => underline,
        Element::Code => code,
        Element::Quote => quote,
        Element::Footnote => footnote,
        Element::Title => title,
        Element::Center => center,
        Element::Link => link,
        Element::Mail => mail,
        Element::Raw => super::raw,
        Element::Paragraph => paragraph,
        Element::ListItem => list_item,
        Element::List => list,
    }
}

pub fn bold(content: &str, _options: &str) -> String {
    format!("<strong>{content}</strong>")
}

pub fn italic(content: &str, _options: &str) -> String {
    format!("<em>{content}</em>")
}

pub fn underline(content: &str, _options: &str) -> String {
    format!("<u>{content}</u>")
}

pub fn code(content: &str, _options: &str) -> String {
    format!("<code>{content}</code>")
}

/// The options carry the author
pub fn quote(content: &str, author: &str) -> String {
    let author = author.trim();
    if author.is_empty() {
        format!("<p class=\"quote\">{content}</p>")
    } else {
        format!("<p class=\"quote\">{content} <br/> --{author}</p>")
    }
}

/// The options carry the note text shown on hover
pub fn footnote(content: &str, note: &str) -> String {
    if note.trim().is_empty() {
        format!("<label>{content}<span>?</span></label>")
    } else {
        format!("<label title=\"{note}\">{content}<span>?</span></label>")
    }
}

pub fn title(content: &str, _options: &str) -> String {
    format!("<h4>{content}</h4>")
}

pub fn center(content: &str, _options: &str) -> String {
    format!("<p class=\"center\">{content}</p>")
}

pub fn link(content: &str, _options: &str) -> String {
    format!("<a href=\"{content}\">{content}</a>")
}

/// Anchor whose address is written entirely as numeric character references
pub fn mail(content: &str, _options: &str) -> String {
    let address = content.trim();
    let href = encode_entities(&format!("mailto:{address}"));
    let text = encode_entities(address);
    format!("<a href=\"{href}\">{text}</a>")
}

pub fn paragraph(content: &str, _options: &str) -> String {
    format!("<p>{content}</p>")
}

pub fn list_item(content: &str, _options: &str) -> String {
    format!("<li>{content}</li>")
}

/// `number` in the options selects an ordered list
pub fn list(items: &str, options: &str) -> String {
    let tag = list_tag(options);
    format!("<{tag}>\n{items}\n</{tag}>")
}

pub(crate) fn list_tag(options: &str) -> &'static str {
    if Options::new(options).has_flag("number") {
        "ol"
    } else {
        "ul"
    }
}

pub fn image(request: &ImageRequest<'_>, layout: &Layout) -> String {
    let label = encode_double_quoted_attribute(request.label());
    let style = match request.scale(layout) {
        ImageScale::Explicit { percent, .. } => format!(" style=\"width: {percent}%;\""),
        ImageScale::FullWidth => " style=\"width: 100%;\"".to_string(),
        ImageScale::Native => String::new(),
    };
    let alt = encode_double_quoted_attribute(request.caption().unwrap_or(request.label()));

    let mut out = format!("<div class=\"figure\" id=\"{label}\">\n");
    out.push_str(&format!(
        "<img src=\"{}\" alt=\"{alt}\"{style}/>\n",
        encode_double_quoted_attribute(request.path)
    ));
    if let Some(caption) = request.caption() {
        out.push_str(&format!("<p class=\"caption\">{caption}</p>\n"));
    }
    out.push_str("</div>");
    out
}

fn encode_entities(text: &str) -> String {
    text.chars().map(|c| format!("&#{};", u32::from(c))).collect()
}
