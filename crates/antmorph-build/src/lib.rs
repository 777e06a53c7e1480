//! Code generation for antecedent morph schemas.
//!
//! This crate provides:
//! - [`verify`]: checks every value against the keycode table
//! - [`MacroPlan`]: decides which values become named macros, with stable ids
//! - [`emit`]: renders the ZMK devicetree text
//! - `antmorph.toml` settings and schema document load/save
//!
//! # Pipeline
//!
//! ```text
//! Schema ──verify──▶ ok ──MacroPlan::build──▶ plan ──emit──▶ .dtsi text
//! ```
//!
//! Each phase is a pure function of the schema. Callers must not edit the
//! schema between phases; [`generate_to_string`] runs all three on one
//! borrow.
//!
//! # Settings
//!
//! ```toml
//! schema = "layout.amconf"          # required, relative to this file
//! output = "antecedent_morphs.dtsi" # optional
//! firmware = "zmk"                  # optional, only "zmk" is supported
//! prefix = "x"                      # optional, overrides the schema prefix
//! ```
//!
//! # Usage
//!
//! ```ignore
//! antmorph_build::generate("antmorph.toml")?;
//! ```

pub mod emit;
pub mod plan;
mod settings;
mod store;
mod verify;

pub use emit::emit;
pub use plan::{MacroEntry, MacroPlan};
pub use settings::{Firmware, Settings, SettingsError, DEFAULT_OUTPUT};
pub use store::{load_schema, save_schema, save_schema_as, StoreError};
pub use verify::{verify, VerifyError};

use std::path::Path;

use antmorph::Schema;

/// Verify, plan, and emit `schema` in one pass.
///
/// # Errors
///
/// Returns the first [`VerifyError`] if the schema is not generatable.
pub fn generate_to_string(schema: &Schema) -> Result<String, VerifyError> {
    verify(schema)?;
    let plan = MacroPlan::build(schema);
    Ok(emit(schema, &plan))
}

/// Main entry point: generate from an `antmorph.toml` settings file.
///
/// Loads the schema the settings name, applies the prefix override, and
/// writes the output file.
///
/// # Errors
///
/// Returns an error if:
/// - the settings file cannot be read, parsed, or names an unsupported firmware
/// - the schema document cannot be loaded
/// - the schema fails verification
/// - the output file cannot be written
pub fn generate(settings_path: impl AsRef<Path>) -> Result<GenerationSummary, GenerateError> {
    let settings = Settings::from_file(settings_path)?;
    generate_with_settings(&settings)
}

/// Generate with already-parsed settings.
pub fn generate_with_settings(settings: &Settings) -> Result<GenerationSummary, GenerateError> {
    // 1. Load the schema
    let mut schema = load_schema(settings.schema_path())?;

    // 2. Apply the prefix override
    if let Some(prefix) = &settings.prefix {
        schema.set_prefix(prefix);
    }

    // 3. Generate and write
    let summary = write_generated(&schema, &settings.output_path())?;
    Ok(summary)
}

/// Generate from a schema document straight to `output_path`, without a
/// settings file.
pub fn generate_schema_file(
    schema_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
) -> Result<GenerationSummary, GenerateError> {
    let schema = load_schema(schema_path)?;
    write_generated(&schema, output_path.as_ref())
}

fn write_generated(schema: &Schema, output_path: &Path) -> Result<GenerationSummary, GenerateError> {
    if let Err(e) = verify(schema) {
        tracing::warn!(error = %e, "schema failed verification");
        return Err(e.into());
    }
    let plan = MacroPlan::build(schema);
    let text = emit(schema, &plan);
    std::fs::write(output_path, &text)?;

    let summary = GenerationSummary {
        macros: plan.len(),
        bytes: text.len(),
    };
    tracing::info!(
        output = %output_path.display(),
        macros = summary.macros,
        bytes = summary.bytes,
        "generated antecedent morphs"
    );
    Ok(summary)
}

/// What a file-level generation run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Number of extracted macros
    pub macros: usize,
    /// Bytes written
    pub bytes: usize,
}

/// Errors that can occur during generation.
#[derive(Debug)]
pub enum GenerateError {
    /// Failed to read or parse antmorph.toml
    Settings(SettingsError),
    /// Failed to load the schema document
    Document(StoreError),
    /// The schema failed verification
    Verify(VerifyError),
    /// IO error
    Io(std::io::Error),
}

impl std::fmt::Display for GenerateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Settings(e) => write!(f, "Settings error: {}", e),
            Self::Document(e) => write!(f, "Schema error: {}", e),
            Self::Verify(e) => write!(f, "{}", e),
            Self::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for GenerateError {}

impl From<SettingsError> for GenerateError {
    fn from(e: SettingsError) -> Self {
        Self::Settings(e)
    }
}

impl From<StoreError> for GenerateError {
    fn from(e: StoreError) -> Self {
        Self::Document(e)
    }
}

impl From<VerifyError> for GenerateError {
    fn from(e: VerifyError) -> Self {
        Self::Verify(e)
    }
}

impl From<std::io::Error> for GenerateError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
