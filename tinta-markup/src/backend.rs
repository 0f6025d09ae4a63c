//! Output backends
//!
//! A backend selects the renderer table, the built-in rule override layer, the
//! plain code highlighter, and the escaping applied to chunks that fail to
//! render.

use crate::error::ConfigError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Supported output representations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Web markup fragment
    Html,
    /// Typesetting source fragment
    Latex,
    /// E-reader constrained markup fragment
    Kindle,
}

impl Backend {
    pub const ALL: [Backend; 3] = [Backend::Html, Backend::Latex, Backend::Kindle];

    /// The name used in configuration files and on the command line
    pub fn name(self) -> &'static str {
        match self {
            Backend::Html => "html",
            Backend::Latex => "latex",
            Backend::Kindle => "kindle",
        }
    }

    /// Escape source text so it is shown literally in this backend's output.
    ///
    /// Used for chunks that could not be rendered.
    pub fn escape_literal(self, text: &str) -> String {
        match self {
            Backend::Html | Backend::Kindle => html_escape::encode_text(text).into_owned(),
            Backend::Latex => escape_latex(text),
        }
    }
}

fn escape_latex(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\textbackslash{}"),
            '{' | '}' | '#' | '$' | '%' | '&' | '_' => {
                out.push('\\');
                out.push(c);
            }
            '~' => out.push_str("\\textasciitilde{}"),
            '^' => out.push_str("\\textasciicircum{}"),
            _ => out.push(c),
        }
    }
    out
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Backend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" | "web" => Ok(Backend::Html),
            "latex" | "tex" => Ok(Backend::Latex),
            "kindle" | "ereader" => Ok(Backend::Kindle),
            _ => Err(ConfigError::UnknownBackend(s.to_string())),
        }
    }
}
