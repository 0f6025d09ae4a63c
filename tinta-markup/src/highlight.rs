//! Code block highlighting
//!
//! Real highlighting is delegated to a [`SyntaxHighlighter`] chosen by the
//! caller. [`PlainHighlighter`] produces unhighlighted but well-formed output
//! for every backend: an escaped `<pre>` block for HTML and Kindle, and a
//! `minted` environment for LaTeX, which highlights at typesetting time.

use crate::backend::Backend;
use crate::error::RenderError;
use crate::options::Options;

pub trait SyntaxHighlighter: Send + Sync {
    /// Render a code block. `highlighted_lines` are 1-based and may be empty.
    fn highlight(
        &self,
        code: &str,
        language: &str,
        numbered: bool,
        highlighted_lines: &[u32],
        extra_options: &str,
    ) -> Result<String, RenderError>;
}

/// Highlight `code` with the arguments read from a code block's options
pub fn render_code(
    highlighter: &dyn SyntaxHighlighter,
    code: &str,
    options: Options<'_>,
) -> Result<String, RenderError> {
    highlighter.highlight(
        code,
        options.language(),
        options.numbered(),
        &options.highlighted_lines(),
        options.extra_options(),
    )
}

/// Backend-appropriate code block without colouring
#[derive(Debug, Clone, Copy)]
pub struct PlainHighlighter {
    backend: Backend,
}

impl PlainHighlighter {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }
}

impl SyntaxHighlighter for PlainHighlighter {
    fn highlight(
        &self,
        code: &str,
        language: &str,
        numbered: bool,
        highlighted_lines: &[u32],
        extra_options: &str,
    ) -> Result<String, RenderError> {
        Ok(match self.backend {
            Backend::Html | Backend::Kindle => pre_block(code, language, numbered, highlighted_lines),
            Backend::Latex => minted(code, language, numbered, highlighted_lines, extra_options),
        })
    }
}

fn pre_block(code: &str, language: &str, numbered: bool, highlighted_lines: &[u32]) -> String {
    let mut out = format!(
        "<pre class=\"code\" data-language=\"{}\"><code>",
        html_escape::encode_double_quoted_attribute(language)
    );
    for (index, line) in code.lines().enumerate() {
        let number = index as u32 + 1;
        if index > 0 {
            out.push('\n');
        }
        let highlighted = highlighted_lines.contains(&number);
        if highlighted {
            out.push_str("<span class=\"hll\">");
        }
        if numbered {
            out.push_str(&format!("<span class=\"lineno\">{number}</span> "));
        }
        out.push_str(&html_escape::encode_text(line));
        if highlighted {
            out.push_str("</span>");
        }
    }
    out.push_str("</code></pre>");
    out
}

fn minted(
    code: &str,
    language: &str,
    numbered: bool,
    highlighted_lines: &[u32],
    extra_options: &str,
) -> String {
    let mut settings = Vec::new();
    if numbered {
        settings.push("linenos".to_string());
    }
    if !highlighted_lines.is_empty() {
        let lines: Vec<String> = highlighted_lines.iter().map(u32::to_string).collect();
        settings.push(format!("highlightlines={{{}}}", lines.join(",")));
    }
    if !extra_options.trim().is_empty() {
        settings.push(extra_options.trim().to_string());
    }
    let settings = if settings.is_empty() {
        String::new()
    } else {
        format!("[{}]", settings.join(","))
    };
    format!("\\begin{{minted}}{settings}{{{language}}}\n{code}\n\\end{{minted}}")
}
