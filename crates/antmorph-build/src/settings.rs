//! TOML parser for `antmorph.toml` generator settings.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default output file name, relative to the settings file.
pub const DEFAULT_OUTPUT: &str = "antecedent_morphs.dtsi";

/// Firmware backend to generate for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Firmware {
    /// ZMK devicetree (the only backend implemented)
    #[default]
    Zmk,
}

/// Parsed generator settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Schema document path (relative paths resolved against `base_dir`)
    pub schema: PathBuf,
    /// Output file path (relative paths resolved against `base_dir`)
    pub output: PathBuf,
    /// Target firmware
    pub firmware: Firmware,
    /// Replaces the schema's own prefix when set
    pub prefix: Option<String>,
    /// Directory of the settings file
    base_dir: PathBuf,
}

/// Raw TOML structure.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSettings {
    /// Schema document
    schema: String,
    /// Optional output path
    output: Option<String>,
    /// "zmk" (default)
    firmware: Option<String>,
    /// Optional prefix override
    prefix: Option<String>,
}

impl Settings {
    /// Parse from a TOML file. Relative paths inside resolve against the
    /// file's directory.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        let mut settings = Self::from_str(&content)?;
        settings.base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(settings)
    }

    /// Parse from a TOML string. Relative paths resolve against the current
    /// directory.
    pub fn from_str(content: &str) -> Result<Self, SettingsError> {
        let raw: RawSettings =
            toml::from_str(content).map_err(|e| SettingsError::Parse(e.to_string()))?;

        if raw.schema.trim().is_empty() {
            return Err(SettingsError::Validation("Schema path must not be empty".into()));
        }

        let firmware = match raw.firmware.as_deref() {
            None | Some("zmk") => Firmware::Zmk,
            Some("qmk") => {
                return Err(SettingsError::Validation(
                    "Firmware 'qmk' is not supported: only 'zmk' can be generated".into(),
                ));
            }
            Some(other) => {
                return Err(SettingsError::Validation(format!(
                    "Invalid firmware '{}': expected 'zmk'",
                    other
                )));
            }
        };

        if let Some(prefix) = &raw.prefix {
            validate_prefix(prefix)?;
        }

        Ok(Self {
            schema: PathBuf::from(raw.schema),
            output: PathBuf::from(raw.output.unwrap_or_else(|| DEFAULT_OUTPUT.to_string())),
            firmware,
            prefix: raw.prefix,
            base_dir: PathBuf::new(),
        })
    }

    /// Resolved schema document path.
    pub fn schema_path(&self) -> PathBuf {
        self.base_dir.join(&self.schema)
    }

    /// Resolved output path.
    pub fn output_path(&self) -> PathBuf {
        self.base_dir.join(&self.output)
    }
}

/// Prefixes end up inside devicetree node names.
fn validate_prefix(prefix: &str) -> Result<(), SettingsError> {
    if let Some(c) = crate::verify::invalid_prefix_char(prefix) {
        return Err(SettingsError::Validation(format!(
            "Invalid prefix '{}': contains invalid character '{}'",
            prefix, c
        )));
    }
    Ok(())
}

/// Errors during settings parsing.
#[derive(Debug)]
pub enum SettingsError {
    /// IO error
    Io(String),
    /// TOML parse error
    Parse(String),
    /// Validation error
    Validation(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "IO error: {}", msg),
            Self::Parse(msg) => write!(f, "Parse error: {}", msg),
            Self::Validation(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_settings() {
        let settings = Settings::from_str(r#"schema = "layout.amconf""#).unwrap();
        assert_eq!(settings.schema, PathBuf::from("layout.amconf"));
        assert_eq!(settings.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(settings.firmware, Firmware::Zmk);
        assert_eq!(settings.prefix, None);
    }

    #[test]
    fn parse_full_settings() {
        let toml = r#"
schema = "schemas/colemak.amconf"
output = "config/antmorph.dtsi"
firmware = "zmk"
prefix = "c"
"#;
        let settings = Settings::from_str(toml).unwrap();
        assert_eq!(settings.output, PathBuf::from("config/antmorph.dtsi"));
        assert_eq!(settings.prefix.as_deref(), Some("c"));
    }

    #[test]
    fn qmk_is_rejected_as_unsupported() {
        let err = Settings::from_str("schema = \"a\"\nfirmware = \"qmk\"").unwrap_err();
        assert!(matches!(&err, SettingsError::Validation(msg) if msg.contains("not supported")));
    }

    #[test]
    fn unknown_firmware_is_rejected() {
        let err = Settings::from_str("schema = \"a\"\nfirmware = \"kmk\"").unwrap_err();
        assert!(matches!(err, SettingsError::Validation(_)));
    }

    #[test]
    fn missing_schema_is_a_parse_error() {
        assert!(matches!(
            Settings::from_str("output = \"x\""),
            Err(SettingsError::Parse(_))
        ));
        assert!(matches!(
            Settings::from_str("schema = \" \""),
            Err(SettingsError::Validation(_))
        ));
    }

    #[test]
    fn invalid_prefix() {
        let err = Settings::from_str("schema = \"a\"\nprefix = \"A-b\"").unwrap_err();
        assert!(err.to_string().contains("invalid character 'A'"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(
            Settings::from_str("schema = \"a\"\nlock = true"),
            Err(SettingsError::Parse(_))
        ));
    }
}
