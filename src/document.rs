//! JSON document codec for [`Schema`].
//!
//! # Format
//!
//! ```json
//! {
//!   "format": 1,
//!   "name": "Qwerty",
//!   "version": "1",
//!   "type": 0,
//!   "prefix": "q",
//!   "antecedents": {
//!     "0": {
//!       "type": 0,
//!       "note": "",
//!       "layers": [
//!         { "type": 0, "morphs": [
//!             { "type": 0, "mode": 0, "value": "", "mods": [
//!                 { "type": 0, "mode": 0, "value": "" }, ...
//!             ] }, ...
//!         ] }, ...
//!       ]
//!     }, ...
//!   }
//! }
//! ```
//!
//! Antecedents are keyed by their stringified type id. Layers, morphs, and
//! mods are matched by their `type` key, or by array position when an entry
//! has none; entries with an unknown type are skipped. Reading is lenient:
//! a missing or mistyped key leaves that node at its default, and the only
//! hard failure is a root that is not an object. All seven layers are always written so
//! data in hidden layers survives a save.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::item::SchemaItem;
use crate::layout::{ContextMode, Direction, LayerType, ModType};
use crate::schema::{Antecedent, Layer, Morph, Schema};
use crate::value::{LeafValue, Mode};

/// Current document format number.
pub const FORMAT_VERSION: u32 = 1;

// =============================================================================
// Writing
// =============================================================================

#[derive(Serialize)]
struct SchemaDoc<'a> {
    format: u32,
    name: &'a str,
    version: &'a str,
    #[serde(rename = "type")]
    context_mode: u8,
    prefix: &'a str,
    antecedents: BTreeMap<String, AntecedentDoc<'a>>,
}

#[derive(Serialize)]
struct AntecedentDoc<'a> {
    #[serde(rename = "type")]
    kind: u8,
    note: &'a str,
    layers: Vec<LayerDoc<'a>>,
}

#[derive(Serialize)]
struct LayerDoc<'a> {
    #[serde(rename = "type")]
    kind: u8,
    morphs: Vec<MorphDoc<'a>>,
}

#[derive(Serialize)]
struct MorphDoc<'a> {
    #[serde(rename = "type")]
    kind: u8,
    mode: u8,
    value: &'a str,
    mods: Vec<ModDoc<'a>>,
}

#[derive(Serialize)]
struct ModDoc<'a> {
    #[serde(rename = "type")]
    kind: u8,
    mode: u8,
    value: &'a str,
}

impl<'a> SchemaDoc<'a> {
    fn new(schema: &'a Schema) -> Self {
        Self {
            format: FORMAT_VERSION,
            name: schema.name(),
            version: schema.version(),
            context_mode: schema.context_mode().id(),
            prefix: schema.prefix(),
            antecedents: schema
                .antecedents()
                .iter()
                .map(|a| (a.antecedent_type().id().to_string(), AntecedentDoc::new(a)))
                .collect(),
        }
    }
}

impl<'a> AntecedentDoc<'a> {
    fn new(antecedent: &'a Antecedent) -> Self {
        Self {
            kind: antecedent.antecedent_type().id(),
            note: antecedent.note(),
            layers: antecedent.layers().iter().map(LayerDoc::new).collect(),
        }
    }
}

impl<'a> LayerDoc<'a> {
    fn new(layer: &'a Layer) -> Self {
        Self {
            kind: layer.layer_type().id(),
            morphs: layer.morphs().iter().map(MorphDoc::new).collect(),
        }
    }
}

impl<'a> MorphDoc<'a> {
    fn new(morph: &'a Morph) -> Self {
        let value = morph.leaf_value();
        Self {
            kind: morph.direction().id(),
            mode: value.mode().id(),
            value: value.value(),
            mods: morph
                .mods()
                .iter()
                .map(|m| ModDoc {
                    kind: m.mod_type().id(),
                    mode: m.leaf_value().mode().id(),
                    value: m.leaf_value().value(),
                })
                .collect(),
        }
    }
}

// =============================================================================
// Reading
// =============================================================================

fn int_field(object: &Map<String, Value>, key: &str) -> Option<i64> {
    object.get(key).and_then(Value::as_i64)
}

fn str_field<'v>(object: &'v Map<String, Value>, key: &str) -> &'v str {
    object.get(key).and_then(Value::as_str).unwrap_or_default()
}

fn array_field<'v>(object: &'v Map<String, Value>, key: &str) -> &'v [Value] {
    object
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

fn load_leaf(value: &mut LeafValue, json: &Value) {
    let Some(object) = json.as_object() else {
        return;
    };
    let mode = int_field(object, "mode")
        .and_then(Mode::from_id)
        .unwrap_or_default();
    *value = LeafValue::new(mode, str_field(object, "value"));
}

/// Where an array entry of `layers`, `morphs`, or `mods` belongs.
enum Slot<K> {
    /// Its `type` key names an existing node.
    Keyed(K),
    /// No `type` key: fall back to the array position.
    Position(usize),
    /// Its `type` key is unknown.
    Skip,
}

fn slot<K>(json: &Value, index: usize, from_id: impl Fn(i64) -> Option<K>) -> Slot<K> {
    match json.as_object().and_then(|object| object.get("type")) {
        None => Slot::Position(index),
        Some(kind) => match kind.as_i64().and_then(from_id) {
            Some(key) => Slot::Keyed(key),
            None => Slot::Skip,
        },
    }
}

fn load_morph(morph: &mut Morph, json: &Value) {
    load_leaf(morph.leaf_value_mut(), json);
    let Some(object) = json.as_object() else {
        return;
    };
    for (index, json) in array_field(object, "mods").iter().enumerate() {
        let target = match slot(json, index, ModType::from_id) {
            Slot::Keyed(mod_type) => Some(morph.modifier_mut(mod_type)),
            Slot::Position(row) => morph.mods_mut().get_mut(row),
            Slot::Skip => None,
        };
        match target {
            Some(target) => load_leaf(target.leaf_value_mut(), json),
            None => tracing::debug!(index, "ignoring mod entry"),
        }
    }
}

fn load_layer(layer: &mut Layer, json: &Value) {
    let Some(object) = json.as_object() else {
        return;
    };
    let layer_type = layer.layer_type();
    for (index, json) in array_field(object, "morphs").iter().enumerate() {
        // A direction the layer does not carry resolves to no slot.
        let target = match slot(json, index, Direction::from_id) {
            Slot::Keyed(direction) => layer.morph_mut(direction),
            Slot::Position(row) => layer.morphs_mut().get_mut(row),
            Slot::Skip => None,
        };
        match target {
            Some(target) => load_morph(target, json),
            None => tracing::debug!(layer = %layer_type, index, "ignoring morph entry"),
        }
    }
}

fn load_antecedent(antecedent: &mut Antecedent, json: &Value) {
    let Some(object) = json.as_object() else {
        tracing::debug!(antecedent = %antecedent.antecedent_type(), "antecedent entry is not an object");
        return;
    };
    antecedent.set_note(str_field(object, "note"));
    let antecedent_type = antecedent.antecedent_type();
    for (index, json) in array_field(object, "layers").iter().enumerate() {
        let target = match slot(json, index, LayerType::from_id) {
            Slot::Keyed(layer_type) => Some(antecedent.layer_mut(layer_type)),
            Slot::Position(row) => antecedent.layers_mut().get_mut(row),
            Slot::Skip => None,
        };
        match target {
            Some(target) => load_layer(target, json),
            None => tracing::debug!(antecedent = %antecedent_type, index, "ignoring layer entry"),
        }
    }
}

impl Schema {
    /// Serialize the whole tree.
    pub fn to_document(&self) -> Value {
        match serde_json::to_value(SchemaDoc::new(self)) {
            Ok(value) => value,
            Err(e) => unreachable!("document structs always serialize: {e}"),
        }
    }

    /// Pretty-printed JSON text of [`Schema::to_document`].
    pub fn to_json_string(&self) -> String {
        match serde_json::to_string_pretty(&SchemaDoc::new(self)) {
            Ok(text) => text,
            Err(e) => unreachable!("document structs always serialize: {e}"),
        }
    }

    /// Replace the tree's contents with `doc`.
    ///
    /// The file path is kept. Everything else is reset first, so keys missing
    /// from `doc` end up at their defaults. On success no changed flag is set.
    pub fn from_document(&mut self, doc: &Value) -> Result<(), DocumentError> {
        let root = doc.as_object().ok_or(DocumentError::NotAnObject)?;

        let file_path = self.file_path().map(ToOwned::to_owned);
        self.clear();
        if let Some(path) = file_path {
            self.set_file_path(path);
        }

        if let Some(format) = int_field(root, "format")
            && format != i64::from(FORMAT_VERSION)
        {
            tracing::debug!(format, "unexpected document format, loading anyway");
        }

        self.set_name(str_field(root, "name"));
        self.set_version(str_field(root, "version"));
        self.set_prefix(str_field(root, "prefix"));
        self.set_context_mode(
            int_field(root, "type")
                .and_then(ContextMode::from_id)
                .unwrap_or_default(),
        );

        let antecedents = root.get("antecedents").and_then(Value::as_object);
        let mut loaded = 0usize;
        if let Some(antecedents) = antecedents {
            for antecedent in self.antecedents_mut() {
                let key = antecedent.antecedent_type().id().to_string();
                if let Some(json) = antecedents.get(&key) {
                    load_antecedent(antecedent, json);
                    loaded += 1;
                }
            }
        }
        tracing::debug!(loaded, "document loaded");

        self.clear_changed();
        Ok(())
    }

    /// Parse `text` and load it with [`Schema::from_document`].
    pub fn from_json_str(&mut self, text: &str) -> Result<(), DocumentError> {
        let doc: Value =
            serde_json::from_str(text).map_err(|e| DocumentError::Parse(e.to_string()))?;
        self.from_document(&doc)
    }
}

/// Errors while loading a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// The text is not JSON.
    Parse(String),
    /// The JSON root is not an object.
    NotAnObject,
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "Parse error: {}", msg),
            Self::NotAnObject => write!(f, "Document root is not an object"),
        }
    }
}

impl std::error::Error for DocumentError {}
