//! Renderer variants
//!
//! Every semantic element has one pure function per backend. Rule files refer
//! to elements by key (`renderer = "bold"`); the key is resolved once, at load
//! time, into a plain function pointer through [`Element::renderer`]. There is
//! no hidden state: the same `(content, options)` always renders the same
//! string.
//!
//! | Element   | HTML / Kindle                              | LaTeX                              |
//! |-----------|--------------------------------------------|------------------------------------|
//! | bold      | `<strong>x</strong>`                       | `\textbf{x}`                       |
//! | italic    | `<em>x</em>`                               | `\emph{x}`                         |
//! | underline | `<u>x</u>`                                 | `\underline{x}`                    |
//! | code      | `<code>x</code>`                           | `\texttt{x}`                       |
//! | quote     | `<p class="quote">x <br/> --a</p>`         | `quote` environment                |
//! | footnote  | `<label title="n">x<span>?</span></label>` | `x\footnote{n}`                    |
//! | title     | `<h4>x</h4>`                               | `\subsection*{x}`                  |
//! | center    | `<p class="center">x</p>`                  | `center` environment               |
//! | link      | `<a href="u">u</a>`                        | `\url{u}`                          |
//! | mail      | entity-obfuscated anchor / plain (Kindle)  | `\href{mailto:x}{x}`               |
//!
//! Images need more than `(content, options)`, so they have their own entry
//! point, [`render_image`].

mod figure;
pub mod html;
pub mod kindle;
pub mod latex;

pub use figure::{ImageRequest, ImageScale};

use crate::backend::Backend;
use crate::images::Layout;

/// A renderer: `(content, options) -> markup`
pub type RenderFn = fn(&str, &str) -> String;

/// Semantic elements a rule or chunk can be rendered as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Bold,
    Italic,
    Underline,
    Code,
    Quote,
    Footnote,
    Title,
    Center,
    Link,
    Mail,
    /// Emits the content untouched
    Raw,
    Paragraph,
    ListItem,
    List,
}

impl Element {
    pub const ALL: [Element; 14] = [
        Element::Bold,
        Element::Italic,
        Element::Underline,
        Element::Code,
        Element::Quote,
        Element::Footnote,
        Element::Title,
        Element::Center,
        Element::Link,
        Element::Mail,
        Element::Raw,
        Element::Paragraph,
        Element::ListItem,
        Element::List,
    ];

    /// Identifier used by rule files
    pub fn key(self) -> &'static str {
        match self {
            Element::Bold => "bold",
            Element::Italic => "italic",
            Element::Underline => "underline",
            Element::Code => "code",
            Element::Quote => "quote",
            Element::Footnote => "footnote",
            Element::Title => "title",
            Element::Center => "center",
            Element::Link => "link",
            Element::Mail => "mail",
            Element::Raw => "raw",
            Element::Paragraph => "paragraph",
            Element::ListItem => "list-item",
            Element::List => "list",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|element| element.key().eq_ignore_ascii_case(key.trim()))
    }

    /// Resolve the renderer for this element in the given backend
    pub fn renderer(self, backend: Backend) -> RenderFn {
        match backend {
            Backend::Html => html::renderer(self),
            Backend::Latex => latex::renderer(self),
            Backend::Kindle => kindle::renderer(self),
        }
    }
}

/// Render an image directive for the given backend
pub fn render_image(backend: Backend, request: &ImageRequest<'_>, layout: &Layout) -> String {
    match backend {
        Backend::Html => html::image(request, layout),
        Backend::Latex => latex::image(request, layout),
        Backend::Kindle => kindle::image(request, layout),
    }
}

/// The raw passthrough renderer, shared by every backend
pub(crate) fn raw(content: &str, _options: &str) -> String {
    content.to_string()
}
