//! Markup engine
//!
//! Expands inline tags in a single chunk. Escape rules run first over the
//! whole text, then the text is scanned left to right: at every step the
//! leftmost match among all tag rules wins, with ties going to the rule that
//! comes first in the registry. A match's `content` group is expanded before
//! the rule's renderer runs, so `**mu__n__do**` renders the underline inside
//! the bold. Rendered output is never scanned again.

use crate::backend::Backend;
use crate::error::ConfigError;
use crate::rules::{RuleRegistry, TagRule};
use regex::Captures;
use std::borrow::Cow;

/// Stateless inline expander over an immutable rule registry
#[derive(Debug, Clone)]
pub struct MarkupEngine {
    registry: RuleRegistry,
}

impl MarkupEngine {
    pub fn new(registry: RuleRegistry) -> Self {
        Self { registry }
    }

    /// Engine over the built-in rules of a backend
    pub fn for_backend(backend: Backend) -> Result<Self, ConfigError> {
        RuleRegistry::for_backend(backend).map(Self::new)
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    pub fn backend(&self) -> Backend {
        self.registry.backend()
    }

    /// Escape and expand `text`
    pub fn parse(&self, text: &str) -> String {
        let escaped = self.registry.escape(text);
        self.expand(&escaped)
    }

    fn expand(&self, text: &str) -> String {
        let rules = self.registry.tags();
        // next known match (start, end) per rule
        let mut pending: Vec<Option<(usize, usize)>> = rules
            .iter()
            .map(|rule| rule.find_at(text, 0).map(|m| (m.start(), m.end())))
            .collect();

        let mut out = String::with_capacity(text.len());
        let mut pos = 0;

        loop {
            for (rule, slot) in rules.iter().zip(pending.iter_mut()) {
                if matches!(slot, Some((start, _)) if *start < pos) {
                    *slot = rule.find_at(text, pos).map(|m| (m.start(), m.end()));
                }
            }

            let winner = pending
                .iter()
                .enumerate()
                .filter_map(|(index, slot)| slot.map(|(start, end)| (start, index, end)))
                .min();
            let Some((start, index, end)) = winner else {
                break;
            };

            out.push_str(&text[pos..start]);
            let rule = &rules[index];
            match rule.captures_at(text, start) {
                Some(caps) => out.push_str(&self.render(rule, &caps)),
                None => out.push_str(&text[start..end]),
            }
            pos = end;
        }

        out.push_str(&text[pos..]);
        out
    }

    fn render(&self, rule: &TagRule, caps: &Captures<'_>) -> String {
        let whole = caps.get(0).map_or("", |m| m.as_str());
        let content = caps.name("content").map_or(whole, |m| m.as_str());
        let options = caps.name("options").map_or("", |m| m.as_str());
        let options = if rule.expands_options() {
            Cow::Owned(self.expand(options))
        } else {
            Cow::Borrowed(options)
        };

        // a capture spanning the whole match would recurse forever
        if content.len() < whole.len() {
            rule.render(&self.expand(content), &options)
        } else {
            rule.render(content, &options)
        }
    }
}
