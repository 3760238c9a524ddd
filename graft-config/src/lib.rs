//! Shared configuration loader for the graft toolchain.
//!
//! `defaults/graft.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files
//! on top of those defaults via [`Loader`] before deserializing into
//! [`GraftConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
pub use config::ConfigError;
use graft_doc::ResolveOptions;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/graft.default.toml");

/// Top-level configuration consumed by graft applications.
#[derive(Debug, Clone, Deserialize)]
pub struct GraftConfig {
    pub resolve: ResolveConfig,
    pub convert: ConvertConfig,
}

/// Mirrors the knobs exposed by the transclusion resolver.
#[derive(Debug, Clone, Deserialize)]
pub struct ResolveConfig {
    pub auto_shift: bool,
    pub update_paths: bool,
    pub detect_cycles: bool,
    pub default_format: String,
}

impl From<ResolveConfig> for ResolveOptions {
    fn from(config: ResolveConfig) -> Self {
        ResolveOptions {
            auto_shift: config.auto_shift,
            update_paths: config.update_paths,
            detect_cycles: config.detect_cycles,
            default_format: config.default_format,
        }
    }
}

impl From<&ResolveConfig> for ResolveOptions {
    fn from(config: &ResolveConfig) -> Self {
        ResolveOptions {
            auto_shift: config.auto_shift,
            update_paths: config.update_paths,
            detect_cycles: config.detect_cycles,
            default_format: config.default_format.clone(),
        }
    }
}

/// Conversion knobs for the CLI.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub default_to: String,
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

    /// Apply a single key/value override (useful for CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<GraftConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<GraftConfig, ConfigError> {
    Loader::new().build()
}
