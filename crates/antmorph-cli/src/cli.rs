//! Command-line argument parsing
//!
//! Supports:
//! - Creating, inspecting, and editing schema documents
//! - Verifying a schema
//! - Generating ZMK output from a schema or an `antmorph.toml`

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use antmorph::{ContextMode, Hand, Mode};

/// Antecedent morph configurator
#[derive(Parser, Debug)]
#[command(name = "antmorph", version, about = "Antecedent morph configurator and ZMK generator")]
pub struct CliArgs {
    /// Log debug output to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new, empty schema document
    New {
        /// Where to write the document (defaults to the suggested file name)
        file: Option<PathBuf>,
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long = "schema-version", default_value = "")]
        version: String,
        #[arg(long, default_value = "")]
        prefix: String,
        /// Show all seven layers
        #[arg(long)]
        deep: bool,
    },
    /// Print the configured values of a schema
    Show {
        file: PathBuf,
        /// Only antecedents typed by this hand
        #[arg(long, value_enum)]
        hand: Option<HandArg>,
        /// Include empty values
        #[arg(long)]
        all: bool,
    },
    /// Set a morph or mod value, e.g. `A.Base.NE` or `A.Base.NE.Ctrl`
    Set {
        file: PathBuf,
        path: String,
        /// New value (ignored by `schname` mode)
        #[arg(default_value = "")]
        value: String,
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,
    },
    /// Set the note of the antecedent owning PATH
    Note {
        file: PathBuf,
        path: String,
        text: String,
    },
    /// Change schema properties
    Props {
        file: PathBuf,
        #[arg(long)]
        name: Option<String>,
        #[arg(long = "schema-version")]
        version: Option<String>,
        #[arg(long)]
        prefix: Option<String>,
        #[arg(long, value_enum)]
        context: Option<ContextArg>,
    },
    /// Check every value against the keycode table
    Verify { file: PathBuf },
    /// Generate ZMK output
    Generate {
        /// Settings file (used when --schema is not given)
        #[arg(long, default_value = "antmorph.toml", conflicts_with = "schema")]
        settings: PathBuf,
        /// Generate straight from a schema document
        #[arg(long, requires = "output")]
        schema: Option<PathBuf>,
        /// Output file (with --schema)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandArg {
    Left,
    Right,
}

impl From<HandArg> for Hand {
    fn from(hand: HandArg) -> Self {
        match hand {
            HandArg::Left => Hand::Left,
            HandArg::Right => Hand::Right,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    Text,
    Macro,
    #[value(name = "schname")]
    SchemaName,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Text => Mode::Text,
            ModeArg::Macro => Mode::MacroName,
            ModeArg::SchemaName => Mode::SchemaName,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextArg {
    Flat,
    Deep,
}

impl From<ContextArg> for ContextMode {
    fn from(context: ContextArg) -> Self {
        match context {
            ContextArg::Flat => ContextMode::Flat,
            ContextArg::Deep => ContextMode::Deep,
        }
    }
}
