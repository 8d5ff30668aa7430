//! Settings for reading and writing focus trees
//!
//! The defaults live in `defaults/focus-tree.default.toml`, which is compiled in. On top of
//! them a [Loader] stacks, in call order: TOML files, `FOCUS_TREE__*` environment variables
//! and single keys set from the command line.

use crate::focus::{NumberConvention, OrderingOptions};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, Map, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/focus-tree.default.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct FocusTreeConfig {
    pub ordering: OrderingOptions,
    pub numeric: NumericConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NumericConfig {
    /// Locale name; empty defers to the environment
    pub locale: String,
}

impl NumericConfig {
    pub fn convention(&self) -> NumberConvention {
        if self.locale.trim().is_empty() {
            NumberConvention::current()
        } else {
            NumberConvention::for_locale(self.locale.trim())
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Environment variables read by [Loader::with_environment] start with this prefix, and a
/// double underscore separates sections: `FOCUS_TREE__NUMERIC__LOCALE=de_DE`.
pub const ENV_PREFIX: &str = "FOCUS_TREE";

/// Builds a [FocusTreeConfig] from the bundled defaults and whatever the caller stacks on
/// top. Later layers win key by key, so a user file that only sets `output.format` keeps
/// every other default.
#[derive(Debug, Clone)]
pub struct Loader {
    layers: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            layers: Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml)),
        }
    }

    /// Stack a TOML file; `build` fails if it cannot be read.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.toml_layer(path.as_ref(), true)
    }

    /// Stack a TOML file if it exists, such as a per-project `focus-tree.toml`.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.toml_layer(path.as_ref(), false)
    }

    /// Stack the `FOCUS_TREE__*` variables of the process environment.
    pub fn with_environment(self) -> Self {
        self.environment_layer(None)
    }

    /// Set one dotted key, e.g. `ordering.satisfaction` from `--satisfaction`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.layers = self.layers.set_override(key, value)?;
        Ok(self)
    }

    /// Resolve the stack. Unknown keys are ignored; a value of the wrong shape (an unknown
    /// satisfaction rule, a table where a string belongs) is an error.
    pub fn build(self) -> Result<FocusTreeConfig, ConfigError> {
        let config: FocusTreeConfig = self.layers.build()?.try_deserialize()?;
        tracing::debug!(
            format = %config.output.format,
            satisfaction = ?config.ordering.satisfaction,
            locale = %config.numeric.locale,
            "configuration resolved"
        );
        Ok(config)
    }

    fn toml_layer(mut self, path: &Path, required: bool) -> Self {
        let file = File::from(path).format(FileFormat::Toml).required(required);
        self.layers = self.layers.add_source(file);
        self
    }

    fn environment_layer(mut self, variables: Option<Map<String, String>>) -> Self {
        let environment = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .source(variables);
        self.layers = self.layers.add_source(environment);
        self
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The bundled defaults alone
pub fn load_defaults() -> Result<FocusTreeConfig, ConfigError> {
    Loader::new().build()
}
