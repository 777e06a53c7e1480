//! Pre-generation check of every editable value.

use std::fmt;

use antmorph::keycode;
use antmorph::{Mode, NodePath, Schema};

/// First problem found by [`verify`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyError {
    /// The schema prefix cannot be part of a devicetree node name.
    InvalidPrefix { prefix: String, symbol: char },
    /// Wrong length or shape for the value's mode.
    InvalidValue { path: NodePath, value: String },
    /// A character with no keycode.
    InvalidSymbol { path: NodePath, symbol: char },
}

impl VerifyError {
    pub fn path(&self) -> NodePath {
        match self {
            Self::InvalidPrefix { .. } => NodePath::Schema,
            Self::InvalidValue { path, .. } | Self::InvalidSymbol { path, .. } => *path,
        }
    }
}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPrefix { prefix, symbol } => write!(
                f,
                "Invalid prefix '{}': contains invalid character '{}'",
                prefix, symbol
            ),
            Self::InvalidValue { path, value } => write!(f, "[{}] Invalid value: '{}'", path, value),
            Self::InvalidSymbol { path, symbol } => write!(f, "[{}] Invalid symbol: {}", path, symbol),
        }
    }
}

impl std::error::Error for VerifyError {}

/// First character of `prefix` that may not appear in a node name.
/// Prefixes are limited to lower-case ASCII letters, digits and `_`.
pub(crate) fn invalid_prefix_char(prefix: &str) -> Option<char> {
    prefix
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_'))
}

/// Check the prefix, then every morph and mod, stopping at the first failure.
///
/// Leaves of all seven layers are walked in the schema's fixed order, so a
/// value hidden by `Flat` mode still has to be valid. A non-empty leaf must
/// pass the shape rule, and every character it will type must have a
/// keycode. For `SchemaName` leaves that is the schema's full name.
pub fn verify(schema: &Schema) -> Result<(), VerifyError> {
    if let Some(symbol) = invalid_prefix_char(schema.prefix()) {
        return Err(VerifyError::InvalidPrefix {
            prefix: schema.prefix().to_owned(),
            symbol,
        });
    }

    let full_name = schema.full_name();
    let mut checked = 0usize;

    for leaf in schema.all_leaves() {
        if leaf.value.is_empty() {
            continue;
        }
        if !leaf.value.is_valid() {
            return Err(VerifyError::InvalidValue {
                path: leaf.path,
                value: leaf.value.value().to_owned(),
            });
        }
        let text = match leaf.value.mode() {
            Mode::SchemaName => full_name.as_str(),
            Mode::Text | Mode::MacroName => leaf.value.value(),
        };
        if let Some(symbol) = keycode::first_unknown(text) {
            return Err(VerifyError::InvalidSymbol {
                path: leaf.path,
                symbol,
            });
        }
        checked += 1;
    }

    tracing::debug!(checked, "verification passed");
    Ok(())
}
