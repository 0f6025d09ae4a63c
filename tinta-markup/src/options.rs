//! Option extraction for the attribute string trailing a tag
//!
//! Options are a freeform micro-syntax such as `w=50% label=fig1 "caption"` or
//! `java # h=1,3 options='startinline=true'`. There is no grammar: every
//! attribute is probed independently with its own pattern, so attribute order
//! never matters and unrecognized tokens are ignored. Malformed values (a
//! non-numeric width, say) read as absent.

use once_cell::sync::Lazy;
use regex::Regex;

/// Language reported when the options name none
pub const DEFAULT_LANGUAGE: &str = "text";

static WIDTH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:^|\s)w=(\d+(?:\.\d+)?)%?(?:\s|$)").expect("valid width regex"));
static LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:^|\s)label=([^\s\x22']+)").expect("valid label regex"));
static CAPTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?s)(?:^|[^=])"([^"]+)""#).expect("valid caption regex"));
static HIGHLIGHTS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:^|\s)h=(\d+(?:\s*,\s*\d+)*)").expect("valid highlight regex"));
static EXTRA: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)(?:^|\s)options=(?:'([^']*)'|"([^"]*)")"#).expect("valid options regex")
});
static NUMBERED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|\s)#(?:\s|$)").expect("valid numbering regex"));
static LANGUAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([A-Za-z][\w+.-]*)(?:\s|$)").expect("valid language regex"));

/// Read-only view over an options string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options<'a> {
    raw: &'a str,
}

impl<'a> Options<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self { raw }
    }

    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// Explicit width percentage (`w=50%`); zero reads as absent
    pub fn width_percent(&self) -> Option<f64> {
        let caps = WIDTH.captures(self.raw)?;
        let value: f64 = caps.get(1)?.as_str().parse().ok()?;
        (value > 0.0).then_some(value)
    }

    /// Explicit label (`label=fig1`)
    pub fn label(&self) -> Option<&'a str> {
        LABEL
            .captures(self.raw)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// First double-quoted string that is not the value of a `key="..."` pair
    pub fn caption(&self) -> Option<&'a str> {
        CAPTION
            .captures(self.raw)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .filter(|caption| !caption.trim().is_empty())
    }

    /// Lines to highlight (`h=1,2,5`), in the order written
    pub fn highlighted_lines(&self) -> Vec<u32> {
        let Some(list) = HIGHLIGHTS.captures(self.raw).and_then(|caps| caps.get(1)) else {
            return Vec::new();
        };
        list.as_str()
            .split(',')
            .filter_map(|n| n.trim().parse().ok())
            .collect()
    }

    /// Raw passthrough options for the highlighter (`options='...'`)
    pub fn extra_options(&self) -> &'a str {
        EXTRA
            .captures(self.raw)
            .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
            .map_or("", |m| m.as_str())
    }

    /// Whether line numbering was requested with a standalone `#`
    pub fn numbered(&self) -> bool {
        NUMBERED.is_match(self.raw)
    }

    /// Whether a bare word appears among the options (`[list number]`)
    pub fn has_flag(&self, flag: &str) -> bool {
        self.raw
            .split_whitespace()
            .any(|token| token.eq_ignore_ascii_case(flag))
    }

    /// Language named by the leading bare token, or [`DEFAULT_LANGUAGE`]
    pub fn language(&self) -> &'a str {
        LANGUAGE
            .captures(self.raw)
            .and_then(|caps| caps.get(1))
            .map_or(DEFAULT_LANGUAGE, |m| m.as_str())
    }
}
