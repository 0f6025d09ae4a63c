//! Rule sources and their on-disk format

use crate::backend::Backend;
use crate::error::ConfigError;
use config::{Config, File, FileFormat};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

const BASE_RULES: &str = include_str!("../../rules/base.toml");
const LATEX_RULES: &str = include_str!("../../rules/latex.toml");
const KINDLE_RULES: &str = include_str!("../../rules/kindle.toml");

/// One layer of rule definitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleSource {
    /// TOML text held in memory
    Text { name: String, contents: String },
    /// A TOML file read at load time; a missing file is an error
    Path(PathBuf),
}

impl RuleSource {
    pub fn text(name: impl Into<String>, contents: impl Into<String>) -> Self {
        RuleSource::Text {
            name: name.into(),
            contents: contents.into(),
        }
    }

    pub fn path(path: impl Into<PathBuf>) -> Self {
        RuleSource::Path(path.into())
    }

    /// The generic layer every backend starts from
    pub fn base() -> Self {
        Self::text("builtin:base", BASE_RULES)
    }

    /// The built-in override layer for one backend
    pub fn overrides(backend: Backend) -> Self {
        let contents = match backend {
            Backend::Html => "",
            Backend::Latex => LATEX_RULES,
            Backend::Kindle => KINDLE_RULES,
        };
        Self::text(format!("builtin:{backend}"), contents)
    }

    /// Base layer followed by the backend layer
    pub fn builtin(backend: Backend) -> Vec<Self> {
        vec![Self::base(), Self::overrides(backend)]
    }

    pub fn name(&self) -> String {
        match self {
            RuleSource::Text { name, .. } => name.clone(),
            RuleSource::Path(path) => path.display().to_string(),
        }
    }

    pub(crate) fn read(&self) -> Result<RuleFile, ConfigError> {
        let builder = Config::builder();
        let builder = match self {
            RuleSource::Text { contents, .. } => {
                builder.add_source(File::from_str(contents, FileFormat::Toml))
            }
            RuleSource::Path(path) => builder.add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(true),
            ),
        };
        builder
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(|err| ConfigError::MalformedSource {
                source_name: self.name(),
                message: err.to_string(),
            })
    }
}

/// Deserialized contents of a single rule source
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RuleFile {
    #[serde(default)]
    pub tags: BTreeMap<String, TagSpec>,
    #[serde(default)]
    pub escapes: BTreeMap<String, EscapeSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TagSpec {
    pub pattern: Option<String>,
    pub renderer: Option<String>,
    #[serde(default)]
    pub precedence: i64,
    #[serde(default)]
    pub expand_options: bool,
    #[serde(default = "enabled")]
    pub enabled: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct EscapeSpec {
    pub pattern: Option<String>,
    #[serde(default)]
    pub replacement: String,
    #[serde(default)]
    pub precedence: i64,
    #[serde(default = "enabled")]
    pub enabled: bool,
}

fn enabled() -> bool {
    true
}
