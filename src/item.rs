//! Generic access to tree nodes.
//!
//! [`SchemaItem`] is the capability set every node shares. [`NodePath`]
//! addresses a node by its stable enum keys, and [`NodeRef`] / [`NodeMut`]
//! are the resolved tagged unions. Ancestor context travels inside the
//! reference instead of as a stored back-pointer.

use std::fmt;

use crate::antecedents::AntecedentType;
use crate::layout::{ContextMode, Direction, LayerType, ModType};
use crate::schema::{Antecedent, Layer, Mod, Morph, Schema};
use crate::value::{LeafValue, Mode};

/// Node category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Schema,
    Antecedent,
    Layer,
    Morph,
    Mod,
}

impl ItemKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Schema => "schema",
            Self::Antecedent => "antecedent",
            Self::Layer => "layer",
            Self::Morph => "morph",
            Self::Mod => "mod",
        }
    }

    pub const fn is_leaf(self) -> bool {
        matches!(self, Self::Morph | Self::Mod)
    }
}

/// Capabilities shared by every node of the tree.
///
/// Containers report no modes and ignore value edits.
pub trait SchemaItem {
    fn kind(&self) -> ItemKind;

    /// Stable id of the node's own enum value (0 for the schema).
    fn stable_id(&self) -> u8;

    fn display_name(&self) -> String;

    /// Visible children under `mode`.
    fn child_count(&self, mode: ContextMode) -> usize;

    fn leaf(&self) -> Option<&LeafValue> {
        None
    }

    fn leaf_mut(&mut self) -> Option<&mut LeafValue> {
        None
    }

    fn is_editable(&self) -> bool {
        self.leaf().is_some()
    }

    fn value(&self) -> &str {
        self.leaf().map_or("", LeafValue::value)
    }

    fn set_value(&mut self, value: &str) -> bool {
        self.leaf_mut().is_some_and(|v| v.set_value(value))
    }

    fn mode(&self) -> Option<Mode> {
        self.leaf().map(LeafValue::mode)
    }

    fn available_modes(&self) -> &'static [Mode] {
        let modes: &'static [Mode] = &Mode::ALL;
        if self.is_editable() { modes } else { &modes[..0] }
    }

    fn set_mode(&mut self, mode: Mode) -> bool {
        self.leaf_mut().is_some_and(|v| v.set_mode(mode))
    }

    fn is_changed(&self) -> bool;

    fn clear_changed(&mut self);
}

// =============================================================================
// NodePath
// =============================================================================

/// Address of a node by stable keys.
///
/// Displays as the dotted chain of display names, e.g. `A.Base.NE.Ctrl`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodePath {
    Schema,
    Antecedent(AntecedentType),
    Layer(AntecedentType, LayerType),
    Morph(AntecedentType, LayerType, Direction),
    Mod(AntecedentType, LayerType, Direction, ModType),
}

impl NodePath {
    pub const fn kind(&self) -> ItemKind {
        match self {
            Self::Schema => ItemKind::Schema,
            Self::Antecedent(..) => ItemKind::Antecedent,
            Self::Layer(..) => ItemKind::Layer,
            Self::Morph(..) => ItemKind::Morph,
            Self::Mod(..) => ItemKind::Mod,
        }
    }

    pub const fn antecedent(&self) -> Option<AntecedentType> {
        match *self {
            Self::Schema => None,
            Self::Antecedent(a)
            | Self::Layer(a, _)
            | Self::Morph(a, _, _)
            | Self::Mod(a, _, _, _) => Some(a),
        }
    }

    pub const fn layer(&self) -> Option<LayerType> {
        match *self {
            Self::Layer(_, l) | Self::Morph(_, l, _) | Self::Mod(_, l, _, _) => Some(l),
            _ => None,
        }
    }

    pub const fn direction(&self) -> Option<Direction> {
        match *self {
            Self::Morph(_, _, d) | Self::Mod(_, _, d, _) => Some(d),
            _ => None,
        }
    }

    pub const fn mod_type(&self) -> Option<ModType> {
        match *self {
            Self::Mod(_, _, _, m) => Some(m),
            _ => None,
        }
    }

    pub const fn parent(&self) -> Option<Self> {
        match *self {
            Self::Schema => None,
            Self::Antecedent(_) => Some(Self::Schema),
            Self::Layer(a, _) => Some(Self::Antecedent(a)),
            Self::Morph(a, l, _) => Some(Self::Layer(a, l)),
            Self::Mod(a, l, d, _) => Some(Self::Morph(a, l, d)),
        }
    }

    /// Whether the path names a slot that exists in the fixed shape
    /// (the direction belongs to the layer).
    pub fn is_allocated(&self) -> bool {
        match (self.layer(), self.direction()) {
            (Some(l), Some(d)) => l.direction_row(d).is_some(),
            _ => true,
        }
    }

    /// Parse a dotted path such as `A.Base.NE.Ctrl`.
    ///
    /// The first segment is always a single antecedent symbol (which may
    /// itself be `.`); the remaining segments are matched case-insensitively.
    /// An empty string addresses the schema.
    pub fn parse(text: &str) -> Result<Self, PathParseError> {
        let mut chars = text.chars();
        let Some(symbol) = chars.next() else {
            return Ok(Self::Schema);
        };
        let antecedent = AntecedentType::from_symbol(symbol)
            .ok_or_else(|| PathParseError::UnknownSegment(symbol.to_string()))?;

        let rest = chars.as_str();
        if rest.is_empty() {
            return Ok(Self::Antecedent(antecedent));
        }
        let rest = rest
            .strip_prefix('.')
            .ok_or_else(|| PathParseError::UnknownSegment(text.to_owned()))?;

        let mut segments = rest.split('.');
        let mut path = Self::Antecedent(antecedent);
        for segment in segments.by_ref().take(3) {
            path = match path {
                Self::Antecedent(a) => Self::Layer(a, parse_segment(segment, LayerType::from_name)?),
                Self::Layer(a, l) => {
                    let d = parse_segment(segment, Direction::from_name)?;
                    if l.direction_row(d).is_none() {
                        return Err(PathParseError::NotAllocated(text.to_owned()));
                    }
                    Self::Morph(a, l, d)
                }
                Self::Morph(a, l, d) => Self::Mod(a, l, d, parse_segment(segment, ModType::from_name)?),
                Self::Schema | Self::Mod(..) => unreachable!("at most three segments follow the antecedent"),
            };
        }
        if segments.next().is_some() {
            return Err(PathParseError::TooLong(text.to_owned()));
        }
        Ok(path)
    }
}

fn parse_segment<T>(segment: &str, parse: impl Fn(&str) -> Option<T>) -> Result<T, PathParseError> {
    parse(segment).ok_or_else(|| PathParseError::UnknownSegment(segment.to_owned()))
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Schema => f.write_str("Schema"),
            Self::Antecedent(a) => write!(f, "{a}"),
            Self::Layer(a, l) => write!(f, "{a}.{l}"),
            Self::Morph(a, l, d) => write!(f, "{a}.{l}.{d}"),
            Self::Mod(a, l, d, m) => write!(f, "{a}.{l}.{d}.{m}"),
        }
    }
}

/// Errors from [`NodePath::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathParseError {
    /// A segment names no antecedent, layer, direction, or modifier.
    UnknownSegment(String),
    /// The direction does not exist on that layer.
    NotAllocated(String),
    /// More than four segments.
    TooLong(String),
}

impl fmt::Display for PathParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSegment(s) => write!(f, "Unknown path segment '{}'", s),
            Self::NotAllocated(s) => write!(f, "Path '{}' names a direction the layer does not carry", s),
            Self::TooLong(s) => write!(f, "Path '{}' has too many segments", s),
        }
    }
}

impl std::error::Error for PathParseError {}

// =============================================================================
// NodeRef / NodeMut
// =============================================================================

/// Shared reference to a node together with its ancestor keys.
#[derive(Clone, Copy, Debug)]
pub enum NodeRef<'a> {
    Schema(&'a Schema),
    Antecedent(&'a Antecedent),
    Layer(AntecedentType, &'a Layer),
    Morph(AntecedentType, LayerType, &'a Morph),
    Mod(AntecedentType, LayerType, &'a Mod),
}

impl<'a> NodeRef<'a> {
    pub fn item(&self) -> &'a dyn SchemaItem {
        match *self {
            Self::Schema(s) => s,
            Self::Antecedent(a) => a,
            Self::Layer(_, l) => l,
            Self::Morph(_, _, m) => m,
            Self::Mod(_, _, m) => m,
        }
    }

    pub fn path(&self) -> NodePath {
        match *self {
            Self::Schema(_) => NodePath::Schema,
            Self::Antecedent(a) => NodePath::Antecedent(a.antecedent_type()),
            Self::Layer(a, l) => NodePath::Layer(a, l.layer_type()),
            Self::Morph(a, l, m) => NodePath::Morph(a, l, m.direction()),
            Self::Mod(a, l, m) => NodePath::Mod(a, l, m.direction(), m.mod_type()),
        }
    }

    /// Index of this node among its parent's children.
    pub fn row(&self) -> usize {
        match *self {
            Self::Schema(_) => 0,
            Self::Antecedent(a) => a.antecedent_type().id() as usize,
            Self::Layer(_, l) => l.layer_type().id() as usize,
            Self::Morph(_, l, m) => l
                .direction_row(m.direction())
                .unwrap_or_else(|| panic!("{} has no {} morph", l, m.direction())),
            Self::Mod(_, _, m) => m.mod_type().id() as usize,
        }
    }

    pub fn parent_path(&self) -> Option<NodePath> {
        self.path().parent()
    }

    /// Child at `row`, if visible under `mode`.
    pub fn child(&self, row: usize, mode: ContextMode) -> Option<NodeRef<'a>> {
        match *self {
            Self::Schema(s) => s.antecedents().get(row).map(NodeRef::Antecedent),
            Self::Antecedent(a) => a
                .visible_layers(mode)
                .get(row)
                .map(|l| NodeRef::Layer(a.antecedent_type(), l)),
            Self::Layer(a, l) => l
                .morphs()
                .get(row)
                .map(|m| NodeRef::Morph(a, l.layer_type(), m)),
            Self::Morph(a, l, m) => m.mods().get(row).map(|md| NodeRef::Mod(a, l, md)),
            Self::Mod(..) => None,
        }
    }

    pub fn children(&self, mode: ContextMode) -> impl Iterator<Item = NodeRef<'a>> + '_ {
        (0..self.item().child_count(mode)).filter_map(move |row| self.child(row, mode))
    }

    /// Value as an editor shows it: the schema's full name for
    /// `SchemaName` leaves, spaces rendered as `·`.
    pub fn display_value(&self, schema: &Schema) -> String {
        match self.item().leaf() {
            Some(v) if v.mode() == Mode::SchemaName => schema.full_name(),
            Some(v) => v.value().replace(' ', "\u{00B7}"),
            None => String::new(),
        }
    }

    pub fn leaf(&self) -> Option<&'a LeafValue> {
        match *self {
            Self::Morph(_, _, m) => Some(m.leaf_value()),
            Self::Mod(_, _, m) => Some(m.leaf_value()),
            _ => None,
        }
    }
}

/// Mutable counterpart of [`NodeRef`].
#[derive(Debug)]
pub enum NodeMut<'a> {
    Schema(&'a mut Schema),
    Antecedent(&'a mut Antecedent),
    Layer(AntecedentType, &'a mut Layer),
    Morph(AntecedentType, LayerType, &'a mut Morph),
    Mod(AntecedentType, LayerType, &'a mut Mod),
}

impl NodeMut<'_> {
    pub fn item_mut(&mut self) -> &mut dyn SchemaItem {
        match self {
            Self::Schema(s) => &mut **s,
            Self::Antecedent(a) => &mut **a,
            Self::Layer(_, l) => &mut **l,
            Self::Morph(_, _, m) => &mut **m,
            Self::Mod(_, _, m) => &mut **m,
        }
    }

    pub fn set_value(&mut self, value: &str) -> bool {
        self.item_mut().set_value(value)
    }

    pub fn set_mode(&mut self, mode: Mode) -> bool {
        self.item_mut().set_mode(mode)
    }
}
