//! ZMK devicetree emission.
//!
//! Output layout:
//!
//! ```text
//! // {name} schema version {version}
//! // Automatically generated by Antecedent Morph Configurator
//!
//! / {
//!     behaviors {
//!         // Mod-Morphs            three-step modifier cascade per (layer, direction)
//!         // Antecedent Morphs     one behavior per (layer, direction[, modifier])
//!     };
//!     macros {
//!         // 'A'                   one banner per run of macros with the same owner
//!         ...
//!     };
//! };
//! ```
//!
//! Every node name is built from fixed fragments (prefix, layer, direction,
//! modifier postfix), so the text is stable across runs. Downstream firmware
//! sources reference these names; do not change the templates.

use antmorph::keycode::zmk_keycode;
use antmorph::{
    AntecedentType, ContextMode, Direction, LayerType, LeafValue, ModType, Mode, NodePath,
    PhysicalModifier, Schema,
};

use crate::plan::{MacroEntry, MacroPlan};

const INDENT: &str = "    ";
const INDENT2: &str = "        ";
const INDENT3: &str = "            ";

/// Antecedent list used when a behavior has no bindings.
const NO_ANTECEDENTS: &str = "0x070100";
const NO_BINDINGS: &str = "<&none>";

/// Deep-mode mod-morph chains, right-hand layers first.
const DEEP_MOD_MORPH_LAYERS: [LayerType; 6] = [
    LayerType::Mouse,
    LayerType::Navigation,
    LayerType::Media,
    LayerType::Symbol,
    LayerType::Number,
    LayerType::Function,
];

/// Deep-mode behaviors, in layer id order.
const DEEP_BEHAVIOR_LAYERS: [LayerType; 6] = [
    LayerType::Mouse,
    LayerType::Navigation,
    LayerType::Media,
    LayerType::Function,
    LayerType::Number,
    LayerType::Symbol,
];

// =============================================================================
// Naming fragments
// =============================================================================

/// Layer fragment of node labels (`mos`, `nav`, ...). Empty for Base.
pub const fn layer_fragment(layer: LayerType) -> &'static str {
    match layer {
        LayerType::Base => "",
        LayerType::Mouse => "mos",
        LayerType::Navigation => "nav",
        LayerType::Media => "med",
        LayerType::Function => "fun",
        LayerType::Number => "num",
        LayerType::Symbol => "sym",
    }
}

/// Direction fragment of node labels.
pub const fn direction_fragment(direction: Direction) -> &'static str {
    match direction {
        Direction::NorthEast => "ne",
        Direction::East => "e",
        Direction::SouthEast => "se",
        Direction::NorthWest => "nw",
        Direction::West => "w",
        Direction::SouthWest => "sw",
    }
}

/// Modifier postfix of node labels.
pub const fn mod_postfix(mod_type: ModType) -> &'static str {
    match mod_type {
        ModType::Control => "c",
        ModType::Alt => "a",
        ModType::Gui => "g",
    }
}

/// Names of one antecedent-morph behavior node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BehaviorNames {
    /// `am{p}{lay}{dir}{post}`, referenced by the mod-morph chain.
    pub node_label: String,
    /// `am_{p}_{lay}_{dir}_{post}`.
    pub node_name: String,
    /// `AM_{P}_{LAY}_{DIR}_{POST}`.
    pub label: String,
}

impl BehaviorNames {
    pub fn new(prefix: &str, layer: LayerType, direction: Direction, mod_type: Option<ModType>) -> Self {
        let lay = layer_fragment(layer);
        let dir = direction_fragment(direction);

        let mut node_label = format!("am{prefix}{lay}{dir}");
        let mut node_name = format!("am_{prefix}_");
        let mut label = format!("AM_{}_", prefix.to_uppercase());
        if !lay.is_empty() {
            node_name.push_str(&format!("{lay}_"));
            label.push_str(&format!("{}_", lay.to_uppercase()));
        }
        node_name.push_str(dir);
        label.push_str(&dir.to_uppercase());

        if let Some(m) = mod_type {
            let post = mod_postfix(m);
            node_label.push_str(post);
            node_name.push_str(&format!("_{post}"));
            label.push_str(&format!("_{}", post.to_uppercase()));
        }

        Self {
            node_label,
            node_name,
            label,
        }
    }
}

/// Label of a planned macro node.
pub fn macro_label(prefix: &str, id: &str) -> String {
    format!("am{prefix}_{id}")
}

// =============================================================================
// Emitter
// =============================================================================

/// Render the full devicetree text for `schema`.
///
/// `plan` must come from [`MacroPlan::build`] on the same, verified schema.
///
/// # Panics
///
/// If a leaf that needs a macro has none in `plan`, or a character that
/// verification should have rejected has no keycode.
pub fn emit(schema: &Schema, plan: &MacroPlan) -> String {
    let emitter = Emitter { schema, plan };
    let mut out = String::new();

    emitter.header(&mut out);
    out.push_str("/ {\n");
    out.push_str(&format!("{INDENT}behaviors {{\n"));
    emitter.mod_morphs(&mut out);
    emitter.behaviors(&mut out);
    out.push_str(&format!("{INDENT}}};\n"));
    emitter.macros(&mut out);
    out.push_str("};\n");

    tracing::debug!(bytes = out.len(), macros = plan.len(), "emitted devicetree");
    out
}

struct Emitter<'a> {
    schema: &'a Schema,
    plan: &'a MacroPlan,
}

impl Emitter<'_> {
    fn prefix(&self) -> &str {
        self.schema.prefix()
    }

    fn header(&self, out: &mut String) {
        out.push_str(&format!(
            "// {} schema version {}\n",
            self.schema.name(),
            self.schema.version()
        ));
        out.push_str("// Automatically generated by Antecedent Morph Configurator\n\n");
    }

    // -------------------------------------------------------------------------
    // Mod-morph chains
    // -------------------------------------------------------------------------

    fn mod_morphs(&self, out: &mut String) {
        out.push_str(&format!("{INDENT2}// Mod-Morphs\n"));
        self.mod_morph_layer(out, LayerType::Base);
        if self.schema.context_mode() == ContextMode::Deep {
            for layer in DEEP_MOD_MORPH_LAYERS {
                self.mod_morph_layer(out, layer);
            }
        }
    }

    fn mod_morph_layer(&self, out: &mut String, layer: LayerType) {
        out.push_str(&format!("{INDENT2}// {} layer\n", layer.name()));
        for &direction in layer.directions() {
            out.push_str(&format!("{INDENT2}// {}\n", direction.name()));
            self.mod_morph_chain(out, layer, direction);
        }
    }

    /// `{n}agm` → `{n}cagm` → `{n}m`: each step adds one held modifier to
    /// the mask and falls back to the previous step.
    fn mod_morph_chain(&self, out: &mut String, layer: LayerType, direction: Direction) {
        let base = format!(
            "am{}{}{}",
            self.prefix(),
            layer_fragment(layer),
            direction_fragment(direction)
        );
        let mask = |mods: &[ModType]| -> String {
            let masks: Vec<&str> = mods
                .iter()
                .map(|m| m.physical(direction).zmk_mask())
                .collect();
            format!("<({})>", masks.join("|"))
        };

        mod_morph_node(
            out,
            &format!("{base}agm"),
            &format!("{base}a"),
            &format!("{base}g"),
            &mask(&[ModType::Gui]),
        );
        mod_morph_node(
            out,
            &format!("{base}cagm"),
            &format!("{base}c"),
            &format!("{base}agm"),
            &mask(&[ModType::Alt, ModType::Gui]),
        );
        mod_morph_node(
            out,
            &format!("{base}m"),
            &base,
            &format!("{base}cagm"),
            &mask(&[ModType::Control, ModType::Alt, ModType::Gui]),
        );
    }

    // -------------------------------------------------------------------------
    // Antecedent-morph behaviors
    // -------------------------------------------------------------------------

    fn behaviors(&self, out: &mut String) {
        out.push_str(&format!("{INDENT2}// Antecedent Morphs\n"));
        self.behavior_layer(out, LayerType::Base);
        if self.schema.context_mode() == ContextMode::Deep {
            for layer in DEEP_BEHAVIOR_LAYERS {
                self.behavior_layer(out, layer);
            }
        }
    }

    fn behavior_layer(&self, out: &mut String, layer: LayerType) {
        for &direction in layer.directions() {
            self.behavior(out, layer, direction, None);
            for mod_type in ModType::ALL {
                self.behavior(out, layer, direction, Some(mod_type));
            }
        }
    }

    fn behavior(&self, out: &mut String, layer: LayerType, direction: Direction, mod_type: Option<ModType>) {
        let mut bindings = Vec::new();
        let mut antecedents = Vec::new();

        for antecedent in self.schema.antecedents() {
            let a = antecedent.antecedent_type();
            let path = match mod_type {
                Some(m) => NodePath::Mod(a, layer, direction, m),
                None => NodePath::Morph(a, layer, direction),
            };
            let Some(value) = self.schema.leaf(path) else {
                panic!("{path} is not allocated");
            };
            if value.is_empty() {
                continue;
            }
            bindings.push(self.binding(a, path, value));
            antecedents.push(a.zmk_code());
        }

        let names = BehaviorNames::new(self.prefix(), layer, direction, mod_type);
        let bindings = if bindings.is_empty() {
            NO_BINDINGS.to_owned()
        } else {
            bindings.join(", ")
        };
        let antecedents = if antecedents.is_empty() {
            NO_ANTECEDENTS.to_owned()
        } else {
            antecedents.join(" ")
        };

        out.push_str(&format!("{INDENT2}{}: {} {{\n", names.node_label, names.node_name));
        out.push_str(&format!("{INDENT3}compatible = \"zmk,behavior-antecedent-morph\";\n"));
        out.push_str(&format!("{INDENT3}label = \"{}\";\n", names.label));
        out.push_str(&format!("{INDENT3}#binding-cells = <0>;\n"));
        out.push_str(&format!("{INDENT3}defaults = <&none>;\n"));
        out.push_str(&format!("{INDENT3}bindings = {bindings};\n"));
        out.push_str(&format!("{INDENT3}antecedents = <{antecedents}>;\n"));
        out.push_str(&format!("{INDENT3}max-delay-ms = <U_ANTMORPH_DELAY>;\n"));
        out.push_str(&format!("{INDENT2}}};\n"));
    }

    fn binding(&self, antecedent: AntecedentType, path: NodePath, value: &LeafValue) -> String {
        if value.mode() == Mode::MacroName {
            return format!("<&amstdm_{}>", value.value());
        }
        if value.is_single_lettered(antecedent.symbol()) {
            let second = value
                .second_char()
                .unwrap_or_else(|| unreachable!("single-lettered values have two characters"));
            return format!("<&kp {}>", keycode_for(second, path));
        }
        match self.plan.get(path) {
            Some(entry) => format!("<&{}>", macro_label(self.prefix(), &entry.id)),
            None => panic!("no macro planned for {path}"),
        }
    }

    // -------------------------------------------------------------------------
    // Macros
    // -------------------------------------------------------------------------

    fn macros(&self, out: &mut String) {
        out.push_str(&format!("{INDENT}macros {{\n"));
        let mut current: Option<AntecedentType> = None;
        for entry in self.plan.entries() {
            if current != Some(entry.owner) {
                current = Some(entry.owner);
                out.push_str(&format!("{INDENT2}// '{}'\n", entry.owner_symbol()));
            }
            self.macro_body(out, entry);
        }
        out.push_str(&format!("{INDENT}}};\n"));
    }

    fn macro_body(&self, out: &mut String, entry: &MacroEntry) {
        let Some(value) = self.schema.leaf(entry.leaf) else {
            panic!("macro {} points at unallocated {}", entry.id, entry.leaf);
        };
        let full_name;
        let text = match value.mode() {
            Mode::Text => value.value(),
            Mode::SchemaName => {
                full_name = self.schema.full_name();
                full_name.as_str()
            }
            Mode::MacroName => panic!("{} references an external macro and cannot be planned", entry.leaf),
        };

        let symbol = entry.owner_symbol();
        let mut chars = text.chars();
        let first = chars.next();
        let (marker, typed, first_op) = match first {
            Some(c) if antmorph::value::same_letter(c, symbol) => {
                (format!("({})", c.to_lowercase()), chars.as_str(), "")
            }
            _ => (format!("[{}]", symbol.to_lowercase()), text, "&kp BSPC "),
        };

        let taps: Vec<String> = typed
            .chars()
            .map(|c| format!("&kp {}", keycode_for(c, entry.leaf)))
            .collect();
        let taps = format!("<&macro_tap {}>", format!("{first_op}{}", taps.join(" ")).trim());
        let sequence = if entry.is_mod() {
            format!("{}, {taps}", release_all_modifiers())
        } else {
            taps
        };

        let label = macro_label(self.prefix(), &entry.id);
        out.push_str(&format!("{INDENT2}{label}: {label} {{\n"));
        out.push_str(&format!("{INDENT3}compatible = \"zmk,behavior-macro\";\n"));
        out.push_str(&format!("{INDENT3}#binding-cells = <0>;\n"));
        out.push_str(&format!("{INDENT3}wait-ms = <U_ANTMORPH_MACRO_WAIT>;\n"));
        out.push_str(&format!("{INDENT3}tap-ms = <U_ANTMORPH_MACRO_TAP>;\n"));
        out.push_str(&format!("{INDENT3}// {marker}{typed}\n"));
        out.push_str(&format!("{INDENT3}bindings = {sequence};\n"));
        out.push_str(&format!("{INDENT2}}};\n"));
    }
}

fn mod_morph_node(out: &mut String, name: &str, plain: &str, held: &str, mods: &str) {
    out.push_str(&format!("{INDENT2}{name}: {name} {{\n"));
    out.push_str(&format!("{INDENT3}compatible = \"zmk,behavior-mod-morph\";\n"));
    out.push_str(&format!("{INDENT3}#binding-cells = <0>;\n"));
    out.push_str(&format!("{INDENT3}bindings = <&{plain}>, <&{held}>;\n"));
    out.push_str(&format!("{INDENT3}mods = {mods};\n"));
    out.push_str(&format!("{INDENT2}}};\n"));
}

/// `<&macro_release &kp LCTRL ... &kp RGUI>`.
fn release_all_modifiers() -> String {
    let keys: Vec<String> = PhysicalModifier::ALL
        .iter()
        .map(|m| format!("&kp {}", m.zmk_keycode()))
        .collect();
    format!("<&macro_release {}>", keys.join(" "))
}

fn keycode_for(c: char, path: NodePath) -> &'static str {
    match zmk_keycode(c) {
        Some(code) => code,
        None => panic!("{path}: {c:?} has no keycode; verify the schema before emitting"),
    }
}
