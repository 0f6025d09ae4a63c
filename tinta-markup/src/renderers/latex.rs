//! LaTeX renderers
//!
//! Special characters in running text are escaped by the LaTeX escape rules
//! before any of these run, so content is inserted as-is.

use super::figure::{format_mm, ImageRequest};
use super::{Element, ImageScale, RenderFn};
use crate::images::Layout;
use crate::options::Options;

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
    format!("\\textbf{{{content}}}")
}

pub fn italic(content: &str, _options: &str) -> String {
    format!("\\emph{{{content}}}")
}

pub fn underline(content: &str, _options: &str) -> String {
    format!("\\underline{{{content}}}")
}

pub fn code(content: &str, _options: &str) -> String {
    format!("\\texttt{{{content}}}")
}

pub fn quote(content: &str, author: &str) -> String {
    let author = author.trim();
    if author.is_empty() {
        format!("\\begin{{quote}}{content}\\end{{quote}}")
    } else {
        format!("\\begin{{quote}}{content}\\\\ --{author}\\end{{quote}}")
    }
}

pub fn footnote(content: &str, note: &str) -> String {
    let note = note.trim();
    if note.is_empty() {
        content.to_string()
    } else {
        format!("{content}\\footnote{{{note}}}")
    }
}

pub fn title(content: &str, _options: &str) -> String {
    format!("\\subsection*{{{content}}}")
}

pub fn center(content: &str, _options: &str) -> String {
    format!("\\begin{{center}}\n{content}\n\\end{{center}}")
}

pub fn link(content: &str, _options: &str) -> String {
    format!("\\url{{{content}}}")
}

pub fn mail(content: &str, _options: &str) -> String {
    let address = content.trim();
    format!("\\href{{mailto:{address}}}{{{address}}}")
}

pub fn paragraph(content: &str, _options: &str) -> String {
    format!("{content}\n")
}

pub fn list_item(content: &str, _options: &str) -> String {
    format!("\\item {content}")
}

pub fn list(items: &str, options: &str) -> String {
    let environment = if Options::new(options).has_flag("number") {
        "enumerate"
    } else {
        "itemize"
    };
    format!("\\begin{{{environment}}}\n{items}\n\\end{{{environment}}}")
}

pub fn image(request: &ImageRequest<'_>, layout: &Layout) -> String {
    let sizing = match request.scale(layout) {
        ImageScale::Explicit { width_mm, .. } => format!("[width={}mm]", format_mm(width_mm)),
        ImageScale::FullWidth => "[width=\\textwidth]".to_string(),
        ImageScale::Native => "[scale=1]".to_string(),
    };

    let mut out = String::from("\\begin{figure}[H]\n\\begin{center}\n");
    out.push_str(&format!(
        "\\includegraphics{sizing}{{{}}}\n",
        request.file_name()
    ));
    if let Some(caption) = request.caption() {
        out.push_str(&format!("\\caption{{{caption}}}\n"));
    }
    out.push_str(&format!("\\label{{{}}}\n", request.label()));
    out.push_str("\\end{center}\n\\end{figure}");
    out
}
