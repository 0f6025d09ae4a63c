//! Shared configuration loader for the tinta toolchain.
//!
//! `defaults/tinta.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`TintaConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tinta_markup::{Backend, Layout, RuleSource};

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/tinta.default.toml");

/// Top-level configuration consumed by tinta applications.
#[derive(Debug, Clone, Deserialize)]
pub struct TintaConfig {
    pub layout: LayoutConfig,
    pub images: ImagesConfig,
    pub engine: EngineConfig,
    pub rules: RulesConfig,
    pub convert: ConvertConfig,
}

/// Page geometry used when sizing images.
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    pub max_width_mm: f64,
}

impl From<&LayoutConfig> for Layout {
    fn from(config: &LayoutConfig) -> Self {
        Layout {
            max_width_mm: config.max_width_mm,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImagesConfig {
    pub default_dpi: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    pub max_chunk_bytes: usize,
}

/// User rule files, layered after the built-in rules.
#[derive(Debug, Clone, Deserialize)]
pub struct RulesConfig {
    #[serde(default)]
    pub files: Vec<PathBuf>,
}

impl RulesConfig {
    pub fn sources(&self) -> Vec<RuleSource> {
        self.files.iter().cloned().map(RuleSource::path).collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub backend: Backend,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (used for command line flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<TintaConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<TintaConfig, ConfigError> {
    Loader::new().build()
}
