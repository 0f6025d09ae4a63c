//! Tag rule registry
//!
//! Rules are loaded from an ordered list of TOML sources. Each source may add
//! rules, replace a rule with the same key (the whole entry), or remove an
//! inherited rule with `enabled = false`. Once loaded, the registry is
//! immutable and can be shared freely between threads.
//!
//! Tag rules are ordered by precedence, then by key. The engine relies on that
//! order to break ties between matches starting at the same position.

mod source;

pub use source::RuleSource;

use crate::backend::Backend;
use crate::error::ConfigError;
use crate::renderers::{Element, RenderFn};
use regex::{Captures, Match, Regex, RegexBuilder};
use source::{EscapeSpec, TagSpec};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Compiled size limit for a single rule pattern
const PATTERN_SIZE_LIMIT: usize = 1 << 20;

/// A pattern bound to a renderer
#[derive(Debug, Clone)]
pub struct TagRule {
    key: String,
    pattern: Regex,
    element: Element,
    precedence: i64,
    expand_options: bool,
    render: RenderFn,
}

impl TagRule {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    pub fn element(&self) -> Element {
        self.element
    }

    pub fn precedence(&self) -> i64 {
        self.precedence
    }

    /// Whether the `options` group is expanded before rendering
    pub fn expands_options(&self) -> bool {
        self.expand_options
    }

    /// Next non-empty match starting at or after `start`
    pub fn find_at<'t>(&self, text: &'t str, mut start: usize) -> Option<Match<'t>> {
        while start <= text.len() {
            let found = self.pattern.find_at(text, start)?;
            if !found.is_empty() {
                return Some(found);
            }
            start = next_char_boundary(text, found.end());
        }
        None
    }

    /// Captures of the match beginning exactly at `start`
    pub(crate) fn captures_at<'t>(&self, text: &'t str, start: usize) -> Option<Captures<'t>> {
        self.pattern
            .captures_at(text, start)
            .filter(|caps| caps.get(0).is_some_and(|m| m.start() == start))
    }

    pub fn render(&self, content: &str, options: &str) -> String {
        (self.render)(content, options)
    }
}

/// A literal rewrite applied before tag expansion
#[derive(Debug, Clone)]
pub struct EscapeRule {
    key: String,
    pattern: Regex,
    replacement: String,
    precedence: i64,
}

impl EscapeRule {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Rewrite every match, except those of the `keep` group
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.pattern.replace_all(text, |caps: &Captures<'_>| {
            let mut out = String::new();
            match caps.name("keep") {
                Some(kept) => out.push_str(kept.as_str()),
                None => caps.expand(&self.replacement, &mut out),
            }
            out
        })
    }
}

/// Ordered, immutable set of tag and escape rules for one backend
#[derive(Debug, Clone)]
pub struct RuleRegistry {
    backend: Backend,
    tags: Vec<TagRule>,
    escapes: Vec<EscapeRule>,
}

impl RuleRegistry {
    /// Load rules from `sources`, later sources overriding earlier ones
    pub fn load(backend: Backend, sources: &[RuleSource]) -> Result<Self, ConfigError> {
        let mut tag_specs: BTreeMap<String, TagSpec> = BTreeMap::new();
        let mut escape_specs: BTreeMap<String, EscapeSpec> = BTreeMap::new();

        for source in sources {
            let file = source.read()?;
            tracing::debug!(
                source = %source.name(),
                tags = file.tags.len(),
                escapes = file.escapes.len(),
                "read rule source"
            );
            for (key, spec) in file.tags {
                if spec.enabled {
                    tag_specs.insert(key, spec);
                } else {
                    tag_specs.remove(&key);
                }
            }
            for (key, spec) in file.escapes {
                if spec.enabled {
                    escape_specs.insert(key, spec);
                } else {
                    escape_specs.remove(&key);
                }
            }
        }

        let mut tags = tag_specs
            .into_iter()
            .map(|(key, spec)| compile_tag(backend, key, spec))
            .collect::<Result<Vec<_>, _>>()?;
        tags.sort_by_key(|rule| rule.precedence);

        let mut escapes = escape_specs
            .into_iter()
            .map(|(key, spec)| compile_escape(key, spec))
            .collect::<Result<Vec<_>, _>>()?;
        escapes.sort_by_key(|rule| rule.precedence);

        tracing::debug!(
            %backend,
            tags = tags.len(),
            escapes = escapes.len(),
            "loaded rule registry"
        );

        Ok(Self {
            backend,
            tags,
            escapes,
        })
    }

    /// Built-in rules for a backend
    pub fn for_backend(backend: Backend) -> Result<Self, ConfigError> {
        Self::load(backend, &RuleSource::builtin(backend))
    }

    /// Built-in rules followed by additional layers
    pub fn with_extra(backend: Backend, extra: &[RuleSource]) -> Result<Self, ConfigError> {
        let mut sources = RuleSource::builtin(backend);
        sources.extend_from_slice(extra);
        Self::load(backend, &sources)
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Tag rules in application order
    pub fn tags(&self) -> &[TagRule] {
        &self.tags
    }

    pub fn escapes(&self) -> &[EscapeRule] {
        &self.escapes
    }

    pub fn rule(&self, key: &str) -> Option<&TagRule> {
        self.tags.iter().find(|rule| rule.key == key)
    }

    /// Run every escape rule over `text`, in order
    pub fn escape<'t>(&self, text: &'t str) -> Cow<'t, str> {
        let mut out = Cow::Borrowed(text);
        for rule in &self.escapes {
            let rewritten = match rule.apply(&out) {
                Cow::Owned(rewritten) => Some(rewritten),
                Cow::Borrowed(_) => None,
            };
            if let Some(rewritten) = rewritten {
                out = Cow::Owned(rewritten);
            }
        }
        out
    }
}

fn compile_tag(backend: Backend, key: String, spec: TagSpec) -> Result<TagRule, ConfigError> {
    let renderer = spec.renderer.unwrap_or_else(|| key.clone());
    let element = Element::from_key(&renderer).ok_or_else(|| ConfigError::UnknownRenderer {
        key: key.clone(),
        renderer: renderer.clone(),
    })?;
    let pattern = compile_pattern(&key, spec.pattern.as_deref())?;
    Ok(TagRule {
        render: element.renderer(backend),
        key,
        pattern,
        element,
        precedence: spec.precedence,
        expand_options: spec.expand_options,
    })
}

fn compile_escape(key: String, spec: EscapeSpec) -> Result<EscapeRule, ConfigError> {
    let pattern = compile_pattern(&key, spec.pattern.as_deref())?;
    Ok(EscapeRule {
        key,
        pattern,
        replacement: spec.replacement,
        precedence: spec.precedence,
    })
}

fn compile_pattern(key: &str, pattern: Option<&str>) -> Result<Regex, ConfigError> {
    let pattern = pattern.ok_or_else(|| ConfigError::InvalidPattern {
        key: key.to_string(),
        message: "missing pattern".to_string(),
    })?;
    let regex = RegexBuilder::new(pattern)
        .case_insensitive(true)
        .dot_matches_new_line(true)
        .size_limit(PATTERN_SIZE_LIMIT)
        .build()
        .map_err(|err| ConfigError::InvalidPattern {
            key: key.to_string(),
            message: err.to_string(),
        })?;
    if regex.is_match("") {
        return Err(ConfigError::EmptyMatch {
            key: key.to_string(),
        });
    }
    Ok(regex)
}

fn next_char_boundary(text: &str, index: usize) -> usize {
    let mut next = index + 1;
    while next < text.len() && !text.is_char_boundary(next) {
        next += 1;
    }
    next
}
