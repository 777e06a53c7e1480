//! Macro planning: which leaves get an extracted macro, and under what id.
//!
//! Ids are derived from the text a macro types and made unique with a
//! numeric suffix. Collisions are resolved first-come-first-served in the
//! schema's fixed leaf order, so the same schema always yields the same ids.

use std::collections::{HashMap, HashSet};

use antmorph::{AntecedentType, Leaf, Mode, NodePath, Schema};

/// Longest id stem, in characters.
pub const MAX_ID_LEN: usize = 15;

/// Id used when the text has nothing to slug.
pub const FALLBACK_ID: &str = "m";

/// One extracted macro.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroEntry {
    /// Unique id within the plan (`hello`, `hello1`, ...).
    pub id: String,
    /// Antecedent the leaf belongs to.
    pub owner: AntecedentType,
    /// The morph or mod the macro was planned for.
    pub leaf: NodePath,
}

impl MacroEntry {
    pub fn owner_symbol(&self) -> char {
        self.owner.symbol()
    }

    /// Whether the macro fires from a modifier override.
    pub fn is_mod(&self) -> bool {
        matches!(self.leaf, NodePath::Mod(..))
    }
}

/// Ordered list of macros, indexed by leaf.
#[derive(Debug, Clone, Default)]
pub struct MacroPlan {
    entries: Vec<MacroEntry>,
    by_leaf: HashMap<NodePath, usize>,
}

impl MacroPlan {
    /// Plan macros for every leaf of `schema`, hidden layers included, so
    /// ids do not depend on the context mode.
    ///
    /// The schema is only read; the plan is a side table keyed by path.
    pub fn build(schema: &Schema) -> Self {
        let full_name = schema.full_name();
        let mut plan = Self::default();
        let mut used: HashSet<String> = HashSet::new();

        for leaf in schema.all_leaves() {
            if !needs_macro(&leaf) {
                continue;
            }
            let text = match leaf.value.mode() {
                Mode::SchemaName => full_name.as_str(),
                Mode::Text | Mode::MacroName => leaf.value.value(),
            };
            let id = build_id(text, &used);
            used.insert(id.clone());
            plan.push(MacroEntry {
                id,
                owner: leaf.antecedent(),
                leaf: leaf.path,
            });
        }

        tracing::debug!(macros = plan.len(), "macro plan built");
        plan
    }

    fn push(&mut self, entry: MacroEntry) {
        self.by_leaf.insert(entry.leaf, self.entries.len());
        self.entries.push(entry);
    }

    /// Entries in planning order.
    pub fn entries(&self) -> &[MacroEntry] {
        &self.entries
    }

    /// Macro planned for `leaf`, if any.
    pub fn get(&self, leaf: NodePath) -> Option<&MacroEntry> {
        self.by_leaf.get(&leaf).map(|&i| &self.entries[i])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Whether `leaf` is bound through an extracted macro.
///
/// Empty leaves bind nothing, `MacroName` leaves reference an external macro
/// verbatim, and single-lettered leaves become a direct key press.
pub fn needs_macro(leaf: &Leaf<'_>) -> bool {
    !leaf.value.is_empty()
        && leaf.value.mode() != Mode::MacroName
        && !leaf.value.is_single_lettered(leaf.symbol())
}

/// Reduce `text` to an id stem.
///
/// Lower-cased and trimmed; characters outside `[a-z0-9 -]` dropped; each
/// run of spaces and hyphens becomes one `_`; cut to [`MAX_ID_LEN`]
/// characters. Falls back to [`FALLBACK_ID`] when nothing is left.
///
/// ```
/// use antmorph_build::plan::slug;
///
/// assert_eq!(slug("  Hello, World!  "), "hello_world");
/// assert_eq!(slug("a -- b"), "a_b");
/// assert_eq!(slug("###"), "m");
/// ```
pub fn slug(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    let kept: String = lowered
        .chars()
        .filter(|c| matches!(c, 'a'..='z' | '0'..='9' | ' ' | '-'))
        .collect();

    let mut id = String::with_capacity(kept.len());
    let mut in_separator = false;
    for c in kept.trim().chars() {
        if c == ' ' || c == '-' {
            if !in_separator {
                id.push('_');
            }
            in_separator = true;
        } else {
            id.push(c);
            in_separator = false;
        }
    }

    id.truncate(MAX_ID_LEN);
    if id.is_empty() {
        FALLBACK_ID.to_owned()
    } else {
        id
    }
}

/// Slug `text` and append the smallest suffix (none, then 1, 2, ...) that
/// is not in `used`.
pub fn build_id(text: &str, used: &HashSet<String>) -> String {
    let stem = slug(text);
    if !used.contains(&stem) {
        return stem;
    }
    (1u32..)
        .map(|n| format!("{stem}{n}"))
        .find(|candidate| !used.contains(candidate))
        .unwrap_or_else(|| unreachable!("suffix space exhausted"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use antmorph::{ContextMode, Direction, LayerType, ModType};

    fn set(schema: &mut Schema, path: NodePath, mode: Mode, value: &str) {
        let mut node = schema.item_mut(path).expect("visible path");
        node.set_mode(mode);
        node.set_value(value);
    }

    fn morph(a: AntecedentType, d: Direction) -> NodePath {
        NodePath::Morph(a, LayerType::Base, d)
    }

    #[test]
    fn slug_rules() {
        assert_eq!(slug("Hello"), "hello");
        assert_eq!(slug("hello   there"), "hello_there");
        assert_eq!(slug("x - y"), "x_y");
        assert_eq!(slug("caf\u{00E9} au lait"), "caf_au_lait");
        assert_eq!(slug("a very long phrase indeed"), "a_very_long_phr");
        assert_eq!(slug(""), "m");
        assert_eq!(slug("{}"), "m");
    }

    #[test]
    fn ids_get_smallest_free_suffix() {
        let mut used = HashSet::new();
        for expected in ["hello", "hello1", "hello2"] {
            let id = build_id("Hello", &used);
            assert_eq!(id, expected);
            used.insert(id);
        }
        used.remove("hello1");
        assert_eq!(build_id("hello", &used), "hello1");
    }

    #[test]
    fn duplicate_texts_get_distinct_ids() {
        let mut schema = Schema::default();
        set(&mut schema, morph(AntecedentType::A, Direction::East), Mode::Text, "Hello");
        set(&mut schema, morph(AntecedentType::B, Direction::East), Mode::Text, "Hello");

        let plan = MacroPlan::build(&schema);
        let ids: Vec<&str> = plan.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["hello", "hello1"]);
        assert_eq!(plan.entries()[1].owner_symbol(), 'B');
    }

    #[test]
    fn single_lettered_values_are_not_planned() {
        let mut schema = Schema::default();
        set(&mut schema, morph(AntecedentType::A, Direction::East), Mode::Text, "ab");
        set(&mut schema, morph(AntecedentType::A, Direction::West), Mode::Text, "ba");

        let plan = MacroPlan::build(&schema);
        assert_eq!(plan.len(), 1);
        assert!(plan.get(morph(AntecedentType::A, Direction::East)).is_none());
        assert_eq!(plan.get(morph(AntecedentType::A, Direction::West)).unwrap().id, "ba");
    }

    #[test]
    fn macro_names_and_empty_leaves_are_not_planned() {
        let mut schema = Schema::default();
        set(&mut schema, morph(AntecedentType::C, Direction::East), Mode::MacroName, "copy");
        let mod_path = NodePath::Mod(AntecedentType::C, LayerType::Base, Direction::East, ModType::Alt);
        set(&mut schema, mod_path, Mode::Text, "Cut");

        let plan = MacroPlan::build(&schema);
        assert_eq!(plan.len(), 1);
        let entry = plan.get(mod_path).unwrap();
        assert!(entry.is_mod());
        assert_eq!(entry.id, "cut");
    }

    #[test]
    fn schema_name_uses_full_name() {
        let mut schema = Schema::default();
        schema.set_name("My Layout");
        schema.set_version("2");
        set(&mut schema, morph(AntecedentType::Q, Direction::SouthWest), Mode::SchemaName, "");

        let plan = MacroPlan::build(&schema);
        assert_eq!(plan.entries()[0].id, "my_layout_2");
    }

    #[test]
    fn order_follows_traversal() {
        let mut schema = Schema::new(ContextMode::Deep);
        let deep = NodePath::Morph(AntecedentType::A, LayerType::Symbol, Direction::West);
        set(&mut schema, deep, Mode::Text, "same");
        set(&mut schema, morph(AntecedentType::A, Direction::East), Mode::Text, "same");
        set(&mut schema, morph(AntecedentType::N0, Direction::East), Mode::Text, "same");

        let plan = MacroPlan::build(&schema);
        assert_eq!(plan.get(morph(AntecedentType::A, Direction::East)).unwrap().id, "same");
        assert_eq!(plan.get(deep).unwrap().id, "same1");
        assert_eq!(plan.get(morph(AntecedentType::N0, Direction::East)).unwrap().id, "same2");
    }

    #[test]
    fn hidden_leaves_still_claim_ids() {
        let mut schema = Schema::new(ContextMode::Deep);
        let hidden = NodePath::Morph(AntecedentType::A, LayerType::Mouse, Direction::East);
        set(&mut schema, hidden, Mode::Text, "x");
        set(&mut schema, morph(AntecedentType::B, Direction::East), Mode::Text, "x");
        schema.set_context_mode(ContextMode::Flat);

        let plan = MacroPlan::build(&schema);
        assert_eq!(plan.get(hidden).unwrap().id, "x");
        assert_eq!(plan.get(morph(AntecedentType::B, Direction::East)).unwrap().id, "x1");
    }
}
