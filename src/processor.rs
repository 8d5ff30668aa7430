//! File processing API for focus tree documents
//!
//! A document is read, analysed into clauses, deserialized into a [FociGridContainer] and
//! rendered in one of the [OutputFormat]s. Foci dropped while reading are reported through
//! `tracing` rather than failing the run.

use crate::clause::{Script, ScriptError};
use crate::focus::{
    canonical_order_with, deserialize_with, serialize_with, FociGridContainer, NumberConvention,
    OrderingOptions, TracingSink,
};
use crate::settings::FocusTreeConfig;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// What to produce from a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Canonical re-serialization of the focus tree
    Script,
    /// The analysed clause tree rendered back, without any focus interpretation
    Clauses,
    /// Focus names in canonical order, one per line
    Order,
    Json,
    Yaml,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 5] = [
        OutputFormat::Script,
        OutputFormat::Clauses,
        OutputFormat::Order,
        OutputFormat::Json,
        OutputFormat::Yaml,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Script => "script",
            OutputFormat::Clauses => "clauses",
            OutputFormat::Order => "order",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Script => "canonical focus tree document",
            OutputFormat::Clauses => "clause tree re-rendered verbatim",
            OutputFormat::Order => "focus names in canonical order",
            OutputFormat::Json => "focus tree model as JSON",
            OutputFormat::Yaml => "focus tree model as YAML",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ProcessingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        OutputFormat::ALL
            .into_iter()
            .find(|format| format.name() == name)
            .ok_or_else(|| ProcessingError::InvalidFormat(s.to_string()))
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A complete processing specification
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingSpec {
    pub format: OutputFormat,
    pub ordering: OrderingOptions,
    pub convention: NumberConvention,
}

impl ProcessingSpec {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            ordering: OrderingOptions::default(),
            convention: NumberConvention::current(),
        }
    }

    /// Parse a format name such as "script" or "json"
    pub fn from_string(format: &str) -> Result<Self, ProcessingError> {
        Ok(Self::new(format.parse()?))
    }

    /// Spec taken from configuration: format, ordering and number convention
    pub fn from_config(config: &FocusTreeConfig) -> Result<Self, ProcessingError> {
        Ok(Self {
            format: config.output.format.parse()?,
            ordering: config.ordering,
            convention: config.numeric.convention(),
        })
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn available_specs() -> Vec<ProcessingSpec> {
        OutputFormat::ALL.into_iter().map(ProcessingSpec::new).collect()
    }
}

/// Errors that can occur during processing
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Script error: {0}")]
    Script(#[from] ScriptError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Process a focus tree file according to the given specification
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
) -> Result<String, ProcessingError> {
    let source = read_source(file_path.as_ref())?;
    process_source(&source, spec)
}

/// Process focus tree source text according to the given specification
pub fn process_source(source: &str, spec: &ProcessingSpec) -> Result<String, ProcessingError> {
    let script = Script::analyse(source)?;
    tracing::debug!(clauses = script.len(), format = %spec.format, "analysed document");

    if spec.format == OutputFormat::Clauses {
        return Ok(script.render(0));
    }

    let container = deserialize_with(&script, &mut TracingSink, spec.convention);
    tracing::debug!(
        tree = %container.tree_id(),
        foci = container.len(),
        exclusions = container.exclusions.len(),
        "deserialized focus tree"
    );
    format_container(&container, spec)
}

/// Render an already-built container in the format of `spec`
pub fn format_container(
    container: &FociGridContainer,
    spec: &ProcessingSpec,
) -> Result<String, ProcessingError> {
    match spec.format {
        // A container has no clause tree of its own besides its serialization
        OutputFormat::Script | OutputFormat::Clauses => {
            Ok(serialize_with(container, &spec.ordering))
        }
        OutputFormat::Order => Ok(canonical_order_with(&container.foci, &spec.ordering)
            .iter()
            .map(|focus| format!("{}\n", focus.unique_name))
            .collect()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(container)? + "\n"),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(container)?),
    }
}

/// Load a JSON model and serialize it back to focus tree text
pub fn render_model<P: AsRef<Path>>(
    file_path: P,
    ordering: &OrderingOptions,
) -> Result<String, ProcessingError> {
    let source = read_source(file_path.as_ref())?;
    let container: FociGridContainer = serde_json::from_str(&source)?;
    tracing::debug!(tree = %container.tree_id(), foci = container.len(), "loaded model");
    Ok(serialize_with(&container, ordering))
}

fn read_source(path: &Path) -> Result<String, ProcessingError> {
    if !path.exists() {
        return Err(ProcessingError::FileNotFound(path.display().to_string()));
    }
    let source = fs::read_to_string(path)?;
    Ok(match source.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => source,
    })
}
