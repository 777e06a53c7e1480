//! Editable leaf value shared by morphs and mods.

use std::fmt;

/// How a leaf value is interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Literal text typed out after the antecedent.
    #[default]
    Text,
    /// Name of an externally defined macro, referenced verbatim.
    MacroName,
    /// The schema's own "name version" string.
    SchemaName,
}

impl Mode {
    pub const ALL: [Self; 3] = [Self::Text, Self::MacroName, Self::SchemaName];

    /// Stable id used by the persisted document (`mode` key).
    pub const fn id(self) -> u8 {
        match self {
            Self::Text => 0,
            Self::MacroName => 1,
            Self::SchemaName => 2,
        }
    }

    pub const fn from_id(id: i64) -> Option<Self> {
        match id {
            0 => Some(Self::Text),
            1 => Some(Self::MacroName),
            2 => Some(Self::SchemaName),
            _ => None,
        }
    }

    /// Short label shown by editors.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::MacroName => "Macro",
            Self::SchemaName => "SchName",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Mode, text, and changed flag of a morph or mod.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeafValue {
    mode: Mode,
    value: String,
    changed: bool,
}

impl LeafValue {
    pub fn new(mode: Mode, value: impl Into<String>) -> Self {
        Self {
            mode,
            value: value.into(),
            changed: false,
        }
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// A `SchemaName` value is never empty: it always stands for the schema.
    pub fn is_empty(&self) -> bool {
        self.mode != Mode::SchemaName && self.value.is_empty()
    }

    /// Shape rule: `SchemaName`, or exactly one character of text.
    pub fn is_valid(&self) -> bool {
        self.mode == Mode::SchemaName || self.value.chars().count() == 1
    }

    /// `Text` of exactly two characters whose first one is `symbol`
    /// (case-insensitive). Such values are bound as a direct key press of
    /// the second character instead of going through a macro.
    pub fn is_single_lettered(&self, symbol: char) -> bool {
        if self.mode != Mode::Text {
            return false;
        }
        let mut chars = self.value.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(first), Some(_), None) => same_letter(first, symbol),
            _ => false,
        }
    }

    /// Second character of a single-lettered value.
    pub fn second_char(&self) -> Option<char> {
        self.value.chars().nth(1)
    }

    pub fn set_value(&mut self, value: &str) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value.to_owned();
        self.changed = true;
        true
    }

    pub fn set_mode(&mut self, mode: Mode) -> bool {
        if self.mode == mode {
            return false;
        }
        self.mode = mode;
        self.changed = true;
        true
    }

    #[inline]
    pub fn is_changed(&self) -> bool {
        self.changed
    }

    pub fn clear_changed(&mut self) {
        self.changed = false;
    }

    /// Back to `Text` with no value. Leaves the changed flag alone.
    pub(crate) fn reset(&mut self) {
        self.mode = Mode::Text;
        self.value.clear();
    }
}

/// Case-insensitive comparison of two characters.
pub fn same_letter(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}
