//! The configuration tree.
//!
//! ```text
//! Schema ── Antecedent ×62 ── Layer ×7 ── Morph ×3|6 ── Mod ×3
//! ```
//!
//! Every slot is allocated when the schema is built and never resized.
//! The context mode only changes how many layers are *visible*; data in
//! hidden layers is kept.
//!
//! All setters return `true` only when the stored value actually changed,
//! which is also the only time a changed flag is raised. A container is
//! changed if it or anything below it is.

use std::path::{Path, PathBuf};

use crate::antecedents::AntecedentType;
use crate::item::{ItemKind, NodeMut, NodePath, NodeRef, SchemaItem};
use crate::layout::{ContextMode, Direction, Hand, LayerType, ModType, PhysicalModifier};
use crate::value::LeafValue;

// =============================================================================
// Mod
// =============================================================================

/// Per-modifier override of a morph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mod {
    mod_type: ModType,
    direction: Direction,
    value: LeafValue,
}

impl Mod {
    fn new(mod_type: ModType, direction: Direction) -> Self {
        Self {
            mod_type,
            direction,
            value: LeafValue::default(),
        }
    }

    pub fn mod_type(&self) -> ModType {
        self.mod_type
    }

    /// Direction of the owning morph.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Concrete key held while this override fires.
    pub fn physical(&self) -> PhysicalModifier {
        self.mod_type.physical(self.direction)
    }

    pub fn leaf_value(&self) -> &LeafValue {
        &self.value
    }

    pub fn leaf_value_mut(&mut self) -> &mut LeafValue {
        &mut self.value
    }
}

impl SchemaItem for Mod {
    fn kind(&self) -> ItemKind {
        ItemKind::Mod
    }

    fn stable_id(&self) -> u8 {
        self.mod_type.id()
    }

    fn display_name(&self) -> String {
        self.mod_type.name().to_owned()
    }

    fn child_count(&self, _mode: ContextMode) -> usize {
        0
    }

    fn leaf(&self) -> Option<&LeafValue> {
        Some(&self.value)
    }

    fn leaf_mut(&mut self) -> Option<&mut LeafValue> {
        Some(&mut self.value)
    }

    fn is_changed(&self) -> bool {
        self.value.is_changed()
    }

    fn clear_changed(&mut self) {
        self.value.clear_changed();
    }
}

// =============================================================================
// Morph
// =============================================================================

/// Gesture in one direction, with its three modifier overrides.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Morph {
    direction: Direction,
    value: LeafValue,
    mods: [Mod; 3],
}

impl Morph {
    fn new(direction: Direction) -> Self {
        Self {
            direction,
            value: LeafValue::default(),
            mods: ModType::ALL.map(|m| Mod::new(m, direction)),
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn leaf_value(&self) -> &LeafValue {
        &self.value
    }

    pub fn leaf_value_mut(&mut self) -> &mut LeafValue {
        &mut self.value
    }

    /// Overrides in `ModType` order.
    pub fn mods(&self) -> &[Mod] {
        &self.mods
    }

    pub fn mods_mut(&mut self) -> &mut [Mod] {
        &mut self.mods
    }

    pub fn modifier(&self, mod_type: ModType) -> &Mod {
        &self.mods[mod_type.id() as usize]
    }

    pub fn modifier_mut(&mut self, mod_type: ModType) -> &mut Mod {
        &mut self.mods[mod_type.id() as usize]
    }

    fn reset(&mut self) {
        self.value.reset();
        for m in &mut self.mods {
            m.value.reset();
        }
    }
}

impl SchemaItem for Morph {
    fn kind(&self) -> ItemKind {
        ItemKind::Morph
    }

    fn stable_id(&self) -> u8 {
        self.direction.id()
    }

    fn display_name(&self) -> String {
        self.direction.name().to_owned()
    }

    fn child_count(&self, _mode: ContextMode) -> usize {
        self.mods.len()
    }

    fn leaf(&self) -> Option<&LeafValue> {
        Some(&self.value)
    }

    fn leaf_mut(&mut self) -> Option<&mut LeafValue> {
        Some(&mut self.value)
    }

    fn is_changed(&self) -> bool {
        self.value.is_changed() || self.mods.iter().any(Mod::is_changed)
    }

    fn clear_changed(&mut self) {
        self.value.clear_changed();
        self.mods.iter_mut().for_each(Mod::clear_changed);
    }
}

// =============================================================================
// Layer
// =============================================================================

/// Gesture layer: three or six morphs depending on its hand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layer {
    layer_type: LayerType,
    morphs: Vec<Morph>,
}

impl Layer {
    fn new(layer_type: LayerType) -> Self {
        Self {
            layer_type,
            morphs: layer_type.directions().iter().copied().map(Morph::new).collect(),
        }
    }

    pub fn layer_type(&self) -> LayerType {
        self.layer_type
    }

    /// Morphs in ascending direction order.
    pub fn morphs(&self) -> &[Morph] {
        &self.morphs
    }

    pub fn morphs_mut(&mut self) -> &mut [Morph] {
        &mut self.morphs
    }

    /// `None` if this layer does not carry `direction`.
    pub fn morph(&self, direction: Direction) -> Option<&Morph> {
        self.layer_type
            .direction_row(direction)
            .map(|row| &self.morphs[row])
    }

    pub fn morph_mut(&mut self, direction: Direction) -> Option<&mut Morph> {
        self.layer_type
            .direction_row(direction)
            .map(|row| &mut self.morphs[row])
    }
}

impl SchemaItem for Layer {
    fn kind(&self) -> ItemKind {
        ItemKind::Layer
    }

    fn stable_id(&self) -> u8 {
        self.layer_type.id()
    }

    fn display_name(&self) -> String {
        self.layer_type.name().to_owned()
    }

    fn child_count(&self, _mode: ContextMode) -> usize {
        self.morphs.len()
    }

    fn is_changed(&self) -> bool {
        self.morphs.iter().any(Morph::is_changed)
    }

    fn clear_changed(&mut self) {
        self.morphs.iter_mut().for_each(Morph::clear_changed);
    }
}

// =============================================================================
// Antecedent
// =============================================================================

/// One antecedent character with its seven layers and a free-text note.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Antecedent {
    antecedent_type: AntecedentType,
    note: String,
    changed: bool,
    layers: [Layer; 7],
}

impl Antecedent {
    fn new(antecedent_type: AntecedentType) -> Self {
        Self {
            antecedent_type,
            note: String::new(),
            changed: false,
            layers: LayerType::ALL.map(Layer::new),
        }
    }

    pub fn antecedent_type(&self) -> AntecedentType {
        self.antecedent_type
    }

    pub fn symbol(&self) -> char {
        self.antecedent_type.symbol()
    }

    pub fn hand(&self) -> Hand {
        self.antecedent_type.hand()
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn set_note(&mut self, note: &str) -> bool {
        if self.note == note {
            return false;
        }
        self.note = note.to_owned();
        self.changed = true;
        true
    }

    /// All seven layers, visible or not.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layers_mut(&mut self) -> &mut [Layer] {
        &mut self.layers
    }

    /// Layers reported under `mode`.
    pub fn visible_layers(&self, mode: ContextMode) -> &[Layer] {
        &self.layers[..mode.layer_count()]
    }

    pub fn layer(&self, layer_type: LayerType) -> &Layer {
        &self.layers[layer_type.id() as usize]
    }

    pub fn layer_mut(&mut self, layer_type: LayerType) -> &mut Layer {
        &mut self.layers[layer_type.id() as usize]
    }

    pub fn morph(&self, layer_type: LayerType, direction: Direction) -> Option<&Morph> {
        self.layer(layer_type).morph(direction)
    }

    pub fn morph_mut(&mut self, layer_type: LayerType, direction: Direction) -> Option<&mut Morph> {
        self.layer_mut(layer_type).morph_mut(direction)
    }

    fn reset(&mut self) {
        self.note.clear();
        self.layers
            .iter_mut()
            .flat_map(|l| l.morphs.iter_mut())
            .for_each(Morph::reset);
    }
}

impl SchemaItem for Antecedent {
    fn kind(&self) -> ItemKind {
        ItemKind::Antecedent
    }

    fn stable_id(&self) -> u8 {
        self.antecedent_type.id()
    }

    fn display_name(&self) -> String {
        self.symbol().to_string()
    }

    fn child_count(&self, mode: ContextMode) -> usize {
        mode.layer_count()
    }

    fn is_changed(&self) -> bool {
        self.changed || self.layers.iter().any(Layer::is_changed)
    }

    fn clear_changed(&mut self) {
        self.changed = false;
        self.layers.iter_mut().for_each(Layer::clear_changed);
    }
}

// =============================================================================
// Schema
// =============================================================================

/// Root of the tree: document metadata plus the 62 antecedents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schema {
    file_path: Option<PathBuf>,
    name: String,
    version: String,
    context_mode: ContextMode,
    prefix: String,
    changed: bool,
    antecedents: Vec<Antecedent>,
}

impl Default for Schema {
    fn default() -> Self {
        Self::new(ContextMode::default())
    }
}

impl Schema {
    pub fn new(context_mode: ContextMode) -> Self {
        Self {
            file_path: None,
            name: String::new(),
            version: String::new(),
            context_mode,
            prefix: String::new(),
            changed: false,
            antecedents: AntecedentType::ALL.iter().copied().map(Antecedent::new).collect(),
        }
    }

    /// Reset to an unsaved, empty `Flat` schema with no changed flags.
    pub fn clear(&mut self) {
        self.file_path = None;
        self.name.clear();
        self.version.clear();
        self.context_mode = ContextMode::Flat;
        self.prefix.clear();
        self.antecedents.iter_mut().for_each(Antecedent::reset);
        self.clear_changed();
    }

    // -------------------------------------------------------------------------
    // Metadata
    // -------------------------------------------------------------------------

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Record where the document lives. Does not mark the schema changed.
    pub fn set_file_path(&mut self, path: impl Into<PathBuf>) -> bool {
        let path = path.into();
        if self.file_path.as_ref() == Some(&path) {
            return false;
        }
        self.file_path = Some(path);
        true
    }

    /// `true` until the schema has been saved to or loaded from a file.
    pub fn is_new(&self) -> bool {
        self.file_path.is_none()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) -> bool {
        set_field(&mut self.name, name, &mut self.changed)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn set_version(&mut self, version: &str) -> bool {
        set_field(&mut self.version, version, &mut self.changed)
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn set_prefix(&mut self, prefix: &str) -> bool {
        set_field(&mut self.prefix, prefix, &mut self.changed)
    }

    pub fn context_mode(&self) -> ContextMode {
        self.context_mode
    }

    pub fn set_context_mode(&mut self, mode: ContextMode) -> bool {
        if self.context_mode == mode {
            return false;
        }
        self.context_mode = mode;
        self.changed = true;
        true
    }

    /// `"{name} {version}"`, the text `SchemaName` leaves stand for.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.version)
    }

    pub fn suggested_file_name(&self) -> String {
        format!("Antecedent Morph {} Schema {}.amconf", self.name, self.version)
    }

    // -------------------------------------------------------------------------
    // Structure
    // -------------------------------------------------------------------------

    /// All antecedents in ascending type id.
    pub fn antecedents(&self) -> &[Antecedent] {
        &self.antecedents
    }

    pub fn antecedents_mut(&mut self) -> &mut [Antecedent] {
        &mut self.antecedents
    }

    pub fn antecedent(&self, antecedent_type: AntecedentType) -> &Antecedent {
        &self.antecedents[antecedent_type.id() as usize]
    }

    pub fn antecedent_mut(&mut self, antecedent_type: AntecedentType) -> &mut Antecedent {
        &mut self.antecedents[antecedent_type.id() as usize]
    }

    /// Antecedents typed by `hand`.
    pub fn antecedents_for(&self, hand: Hand) -> impl Iterator<Item = &Antecedent> {
        self.antecedents.iter().filter(move |a| a.hand() == hand)
    }

    /// Resolve `path` under the current context mode.
    ///
    /// Returns `None` for hidden layers and for directions a layer does not
    /// carry.
    pub fn item(&self, path: NodePath) -> Option<NodeRef<'_>> {
        if let Some(layer) = path.layer()
            && !layer.is_visible(self.context_mode)
        {
            return None;
        }
        Some(match path {
            NodePath::Schema => NodeRef::Schema(self),
            NodePath::Antecedent(a) => NodeRef::Antecedent(self.antecedent(a)),
            NodePath::Layer(a, l) => NodeRef::Layer(a, self.antecedent(a).layer(l)),
            NodePath::Morph(a, l, d) => NodeRef::Morph(a, l, self.antecedent(a).morph(l, d)?),
            NodePath::Mod(a, l, d, m) => {
                NodeRef::Mod(a, l, self.antecedent(a).morph(l, d)?.modifier(m))
            }
        })
    }

    /// Mutable counterpart of [`Schema::item`].
    pub fn item_mut(&mut self, path: NodePath) -> Option<NodeMut<'_>> {
        if let Some(layer) = path.layer()
            && !layer.is_visible(self.context_mode)
        {
            return None;
        }
        Some(match path {
            NodePath::Schema => NodeMut::Schema(self),
            NodePath::Antecedent(a) => NodeMut::Antecedent(self.antecedent_mut(a)),
            NodePath::Layer(a, l) => NodeMut::Layer(a, self.antecedent_mut(a).layer_mut(l)),
            NodePath::Morph(a, l, d) => {
                NodeMut::Morph(a, l, self.antecedent_mut(a).morph_mut(l, d)?)
            }
            NodePath::Mod(a, l, d, m) => {
                NodeMut::Mod(a, l, self.antecedent_mut(a).morph_mut(l, d)?.modifier_mut(m))
            }
        })
    }

    /// Leaf value at `path`, regardless of layer visibility.
    pub fn leaf(&self, path: NodePath) -> Option<&LeafValue> {
        let antecedent = self.antecedent(path.antecedent()?);
        let morph = antecedent.morph(path.layer()?, path.direction()?)?;
        Some(match path.mod_type() {
            Some(m) => morph.modifier(m).leaf_value(),
            None => morph.leaf_value(),
        })
    }

    /// Note of the antecedent owning `path`.
    pub fn note(&self, path: NodePath) -> Option<&str> {
        path.antecedent().map(|a| self.antecedent(a).note())
    }

    /// Set the note of the antecedent owning `path`. `false` for the schema
    /// path or an unchanged note.
    pub fn set_note(&mut self, path: NodePath, note: &str) -> bool {
        match path.antecedent() {
            Some(a) => self.antecedent_mut(a).set_note(note),
            None => false,
        }
    }

    /// Every visible morph and mod, in the fixed traversal order: antecedents
    /// by id, layers by id, each morph followed by its mods.
    pub fn leaves(&self) -> impl Iterator<Item = Leaf<'_>> {
        self.leaves_in(self.context_mode.layer_count())
    }

    /// Every morph and mod of all seven layers, hidden or not, in the same
    /// order as [`Schema::leaves`]. Verification and macro planning walk this.
    pub fn all_leaves(&self) -> impl Iterator<Item = Leaf<'_>> {
        self.leaves_in(LayerType::ALL.len())
    }

    fn leaves_in(&self, layer_count: usize) -> impl Iterator<Item = Leaf<'_>> {
        self.antecedents.iter().flat_map(move |a| {
            let at = a.antecedent_type;
            a.layers[..layer_count].iter().flat_map(move |l| {
                let lt = l.layer_type;
                l.morphs.iter().flat_map(move |m| {
                    let d = m.direction;
                    std::iter::once(Leaf {
                        path: NodePath::Morph(at, lt, d),
                        value: &m.value,
                    })
                    .chain(m.mods.iter().map(move |md| Leaf {
                        path: NodePath::Mod(at, lt, d, md.mod_type),
                        value: &md.value,
                    }))
                })
            })
        })
    }
}

fn set_field(field: &mut String, value: &str, changed: &mut bool) -> bool {
    if field == value {
        return false;
    }
    *field = value.to_owned();
    *changed = true;
    true
}

impl SchemaItem for Schema {
    fn kind(&self) -> ItemKind {
        ItemKind::Schema
    }

    fn stable_id(&self) -> u8 {
        0
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn child_count(&self, _mode: ContextMode) -> usize {
        self.antecedents.len()
    }

    fn is_changed(&self) -> bool {
        self.changed || self.antecedents.iter().any(Antecedent::is_changed)
    }

    fn clear_changed(&mut self) {
        self.changed = false;
        self.antecedents
            .iter_mut()
            .for_each(Antecedent::clear_changed);
    }
}

/// A morph or mod value with its location.
#[derive(Clone, Copy, Debug)]
pub struct Leaf<'a> {
    pub path: NodePath,
    pub value: &'a LeafValue,
}

impl Leaf<'_> {
    pub fn antecedent(&self) -> AntecedentType {
        match self.path.antecedent() {
            Some(a) => a,
            None => unreachable!("leaf paths always name an antecedent"),
        }
    }

    /// Display symbol of the owning antecedent.
    pub fn symbol(&self) -> char {
        self.antecedent().symbol()
    }

    /// Whether the leaf is a modifier override rather than a morph.
    pub fn is_mod(&self) -> bool {
        self.path.kind() == ItemKind::Mod
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Mode;

    fn base_ne(a: AntecedentType) -> NodePath {
        NodePath::Morph(a, LayerType::Base, Direction::NorthEast)
    }

    #[test]
    fn shape_is_fixed() {
        let schema = Schema::new(ContextMode::Deep);
        assert_eq!(schema.antecedents().len(), 62);
        let a = schema.antecedent(AntecedentType::K);
        assert_eq!(a.layers().len(), 7);
        assert_eq!(a.layer(LayerType::Base).morphs().len(), 6);
        assert_eq!(a.layer(LayerType::Mouse).morphs().len(), 3);
        assert_eq!(a.layer(LayerType::Symbol).morphs()[0].direction(), Direction::NorthWest);
        assert!(a.layers().iter().flat_map(|l| l.morphs()).all(|m| m.mods().len() == 3));
    }

    #[test]
    fn child_counts_follow_context_mode() {
        let mut schema = Schema::new(ContextMode::Flat);
        let a = schema.antecedent(AntecedentType::A);
        assert_eq!(a.child_count(ContextMode::Flat), 1);
        assert_eq!(a.child_count(ContextMode::Deep), 7);
        assert_eq!(schema.leaves().count(), 62 * 6 * 4);

        schema.set_context_mode(ContextMode::Deep);
        assert_eq!(schema.leaves().count(), 62 * (6 + 6 * 3) * 4);
    }

    #[test]
    fn all_leaves_include_hidden_layers() {
        let schema = Schema::new(ContextMode::Flat);
        assert_eq!(schema.all_leaves().count(), 62 * (6 + 6 * 3) * 4);
        let paths: Vec<String> = schema
            .all_leaves()
            .skip(6 * 4)
            .take(2)
            .map(|l| l.path.to_string())
            .collect();
        assert_eq!(paths, ["A.Mouse.NE", "A.Mouse.NE.Ctrl"]);
    }

    #[test]
    fn leaves_walk_in_fixed_order() {
        let schema = Schema::new(ContextMode::Flat);
        let paths: Vec<String> = schema.leaves().take(5).map(|l| l.path.to_string()).collect();
        assert_eq!(
            paths,
            ["A.Base.NE", "A.Base.NE.Ctrl", "A.Base.NE.Alt", "A.Base.NE.GUI", "A.Base.E"]
        );
        let last = schema.leaves().last().unwrap();
        assert_eq!(last.path.to_string(), "-.Base.SW.GUI");
    }

    #[test]
    fn mods_know_their_physical_key() {
        let schema = Schema::default();
        let morph = schema
            .antecedent(AntecedentType::A)
            .morph(LayerType::Base, Direction::West)
            .unwrap();
        assert_eq!(morph.modifier(ModType::Alt).physical(), PhysicalModifier::RightAlt);
    }

    #[test]
    fn changed_propagates_up_and_clears_down() {
        let mut schema = Schema::default();
        assert!(!schema.is_changed());

        let mut node = schema.item_mut(base_ne(AntecedentType::B)).unwrap();
        assert!(node.set_value("x"));
        assert!(schema.is_changed());
        assert!(schema.antecedent(AntecedentType::B).is_changed());
        assert!(!schema.antecedent(AntecedentType::C).is_changed());

        schema.clear_changed();
        assert!(!schema.is_changed());

        assert!(schema.set_note(base_ne(AntecedentType::C), "home row"));
        assert_eq!(schema.antecedent(AntecedentType::C).note(), "home row");
        assert!(schema.is_changed());
        schema.clear_changed();

        assert!(!schema.set_name(""));
        assert!(!schema.is_changed());
        assert!(schema.set_name("Colemak"));
        assert!(schema.is_changed());
    }

    #[test]
    fn hidden_layers_are_not_addressable() {
        let mut schema = Schema::new(ContextMode::Flat);
        let path = NodePath::Morph(AntecedentType::A, LayerType::Mouse, Direction::East);
        assert!(schema.item(path).is_none());
        assert!(schema.item_mut(path).is_none());
        assert!(schema.leaf(path).is_some());

        schema.set_context_mode(ContextMode::Deep);
        assert!(schema.item(path).is_some());
        let missing = NodePath::Morph(AntecedentType::A, LayerType::Mouse, Direction::West);
        assert!(schema.item(missing).is_none());
    }

    #[test]
    fn node_rows_and_children() {
        let schema = Schema::new(ContextMode::Deep);
        let path = NodePath::Mod(AntecedentType::Z, LayerType::Number, Direction::SouthWest, ModType::Gui);
        let node = schema.item(path).unwrap();
        assert_eq!(node.row(), 2);
        assert_eq!(node.path(), path);
        let morph = schema.item(node.parent_path().unwrap()).unwrap();
        assert_eq!(morph.row(), 2);
        assert_eq!(morph.item().display_name(), "SW");

        let root = schema.item(NodePath::Schema).unwrap();
        let z = root.child(AntecedentType::Z.id() as usize, ContextMode::Deep).unwrap();
        assert_eq!(z.children(ContextMode::Deep).count(), 7);
        assert_eq!(z.children(ContextMode::Flat).count(), 1);
        assert!(z.child(1, ContextMode::Flat).is_none());
    }

    #[test]
    fn containers_ignore_value_edits() {
        let mut schema = Schema::default();
        let mut node = schema.item_mut(NodePath::Antecedent(AntecedentType::A)).unwrap();
        assert!(!node.set_value("x"));
        assert!(!node.set_mode(Mode::SchemaName));
        assert!(node.item_mut().available_modes().is_empty());
        assert!(!schema.is_changed());
    }

    #[test]
    fn display_value() {
        let mut schema = Schema::default();
        schema.set_name("Qwerty");
        schema.set_version("2");
        let path = base_ne(AntecedentType::A);
        schema.item_mut(path).unwrap().set_value("a b");
        assert_eq!(schema.item(path).unwrap().display_value(&schema), "a\u{00B7}b");
        schema.item_mut(path).unwrap().set_mode(Mode::SchemaName);
        assert_eq!(schema.item(path).unwrap().display_value(&schema), "Qwerty 2");
    }

    #[test]
    fn clear_resets_everything() {
        let mut schema = Schema::new(ContextMode::Deep);
        schema.set_file_path("layout.amconf");
        schema.set_prefix("x");
        schema
            .antecedent_mut(AntecedentType::Q)
            .morph_mut(LayerType::Media, Direction::East)
            .unwrap()
            .leaf_value_mut()
            .set_value("v");
        schema.clear();

        assert!(schema.is_new());
        assert!(!schema.is_changed());
        assert_eq!(schema.context_mode(), ContextMode::Flat);
        assert_eq!(schema.prefix(), "");
        assert_eq!(schema, Schema::default());
    }

    #[test]
    fn names() {
        let mut schema = Schema::default();
        schema.set_name("Dvorak");
        schema.set_version("1.2");
        assert_eq!(schema.full_name(), "Dvorak 1.2");
        assert_eq!(schema.suggested_file_name(), "Antecedent Morph Dvorak Schema 1.2.amconf");
    }

    #[test]
    fn hand_filter() {
        let schema = Schema::default();
        let left: Vec<char> = schema.antecedents_for(Hand::Left).map(Antecedent::symbol).collect();
        assert!(left.contains(&'A'));
        assert!(!left.contains(&'J'));
        let right = schema.antecedents_for(Hand::Right).count();
        assert_eq!(left.len() + right, 62);
    }
}
