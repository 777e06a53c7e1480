//! Fixed tree shape: layers, gesture directions, modifiers, and context mode.
//!
//! Nothing in here is stored per document. Every child count and every
//! layer → direction assignment is derived from these tables.
//!
//! ## Shape
//!
//! ```text
//! Antecedent ──┬── Base        NE E SE NW W SW   (both hands)
//!              ├── Mouse       NE E SE           (right hand)
//!              ├── Navigation  NE E SE           (right hand)
//!              ├── Media       NE E SE           (right hand)
//!              ├── Function             NW W SW  (left hand)
//!              ├── Number               NW W SW  (left hand)
//!              └── Symbol               NW W SW  (left hand)
//!
//! Morph ── Ctrl Alt GUI
//! ```

use std::fmt;

/// Which hand performs a gesture (or owns an antecedent key).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Hand {
    Left,
    Right,
}

impl Hand {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Global switch for how much of the tree is visible.
///
/// Hidden layers keep their data; they simply stop being reported as children.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ContextMode {
    /// Only the Base layer is visible.
    #[default]
    Flat,
    /// All seven layers are visible.
    Deep,
}

impl ContextMode {
    pub const ALL: [Self; 2] = [Self::Flat, Self::Deep];

    /// Stable id used by the persisted document (`type` key).
    pub const fn id(self) -> u8 {
        match self {
            Self::Flat => 0,
            Self::Deep => 1,
        }
    }

    pub const fn from_id(id: i64) -> Option<Self> {
        match id {
            0 => Some(Self::Flat),
            1 => Some(Self::Deep),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Flat => "Flat",
            Self::Deep => "Deep",
        }
    }

    /// Number of layers an antecedent reports under this mode.
    pub const fn layer_count(self) -> usize {
        match self {
            Self::Flat => 1,
            Self::Deep => LayerType::ALL.len(),
        }
    }
}

impl fmt::Display for ContextMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Layers
// =============================================================================

/// Gesture layer of an antecedent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LayerType {
    Base,
    Mouse,
    Navigation,
    Media,
    Function,
    Number,
    Symbol,
}

impl LayerType {
    /// All layers in ascending id order (also the allocation order).
    pub const ALL: [Self; 7] = [
        Self::Base,
        Self::Mouse,
        Self::Navigation,
        Self::Media,
        Self::Function,
        Self::Number,
        Self::Symbol,
    ];

    pub const fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: i64) -> Option<Self> {
        usize::try_from(id).ok().and_then(|i| Self::ALL.get(i).copied())
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Base => "Base",
            Self::Mouse => "Mouse",
            Self::Navigation => "Navigation",
            Self::Media => "Media",
            Self::Function => "Function",
            Self::Number => "Number",
            Self::Symbol => "Symbol",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|l| l.name().eq_ignore_ascii_case(name))
    }

    /// Position of `direction` among this layer's morphs.
    pub fn direction_row(self, direction: Direction) -> Option<usize> {
        self.directions().iter().position(|&d| d == direction)
    }

    /// Hand that gestures on this layer. `None` for Base, which carries both.
    pub const fn hand(self) -> Option<Hand> {
        match self {
            Self::Base => None,
            Self::Mouse | Self::Navigation | Self::Media => Some(Hand::Right),
            Self::Function | Self::Number | Self::Symbol => Some(Hand::Left),
        }
    }

    /// Directions allocated under this layer, ascending by direction id.
    pub const fn directions(self) -> &'static [Direction] {
        match self.hand() {
            None => &Direction::ALL,
            Some(Hand::Right) => &Direction::EAST,
            Some(Hand::Left) => &Direction::WEST,
        }
    }

    /// Whether the layer is visible under `mode`.
    pub const fn is_visible(self, mode: ContextMode) -> bool {
        (self as usize) < mode.layer_count()
    }
}

impl fmt::Display for LayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Directions
// =============================================================================

/// Side of the compass a direction points to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    East,
    West,
}

/// Gesture direction of a morph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    NorthEast,
    East,
    SouthEast,
    NorthWest,
    West,
    SouthWest,
}

impl Direction {
    pub const ALL: [Self; 6] = [
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::NorthWest,
        Self::West,
        Self::SouthWest,
    ];
    pub const EAST: [Self; 3] = [Self::NorthEast, Self::East, Self::SouthEast];
    pub const WEST: [Self; 3] = [Self::NorthWest, Self::West, Self::SouthWest];

    pub const fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: i64) -> Option<Self> {
        usize::try_from(id).ok().and_then(|i| Self::ALL.get(i).copied())
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::NorthEast => "NE",
            Self::East => "E",
            Self::SouthEast => "SE",
            Self::NorthWest => "NW",
            Self::West => "W",
            Self::SouthWest => "SW",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(name))
    }

    pub const fn side(self) -> Side {
        match self {
            Self::NorthEast | Self::East | Self::SouthEast => Side::East,
            Self::NorthWest | Self::West | Self::SouthWest => Side::West,
        }
    }

    /// Hand whose modifier keys are held while gesturing this direction.
    ///
    /// East gestures are made by the right hand, so the left hand holds the
    /// modifiers, and vice versa.
    pub const fn modifier_hand(self) -> Hand {
        match self.side() {
            Side::East => Hand::Left,
            Side::West => Hand::Right,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Modifiers
// =============================================================================

/// Modifier override slot of a morph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ModType {
    Control,
    Alt,
    Gui,
}

impl ModType {
    pub const ALL: [Self; 3] = [Self::Control, Self::Alt, Self::Gui];

    pub const fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: i64) -> Option<Self> {
        usize::try_from(id).ok().and_then(|i| Self::ALL.get(i).copied())
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Control => "Ctrl",
            Self::Alt => "Alt",
            Self::Gui => "GUI",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(name))
    }

    /// Physical key this slot stands for when gesturing in `direction`.
    pub const fn physical(self, direction: Direction) -> PhysicalModifier {
        let left = matches!(direction.modifier_hand(), Hand::Left);
        match (self, left) {
            (Self::Control, true) => PhysicalModifier::LeftCtrl,
            (Self::Control, false) => PhysicalModifier::RightCtrl,
            (Self::Alt, true) => PhysicalModifier::LeftAlt,
            (Self::Alt, false) => PhysicalModifier::RightAlt,
            (Self::Gui, true) => PhysicalModifier::LeftGui,
            (Self::Gui, false) => PhysicalModifier::RightGui,
        }
    }
}

impl fmt::Display for ModType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A concrete modifier key on the keyboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PhysicalModifier {
    LeftCtrl,
    RightCtrl,
    LeftAlt,
    RightAlt,
    LeftGui,
    RightGui,
}

impl PhysicalModifier {
    /// Release order used by macros that fire while a modifier is held.
    pub const ALL: [Self; 6] = [
        Self::LeftCtrl,
        Self::RightCtrl,
        Self::LeftAlt,
        Self::RightAlt,
        Self::LeftGui,
        Self::RightGui,
    ];

    /// ZMK key-press token (`&kp LCTRL`).
    pub const fn zmk_keycode(self) -> &'static str {
        match self {
            Self::LeftCtrl => "LCTRL",
            Self::RightCtrl => "RCTRL",
            Self::LeftAlt => "LALT",
            Self::RightAlt => "RALT",
            Self::LeftGui => "LGUI",
            Self::RightGui => "RGUI",
        }
    }

    /// ZMK modifier-mask token (`MOD_LCTL`).
    pub const fn zmk_mask(self) -> &'static str {
        match self {
            Self::LeftCtrl => "MOD_LCTL",
            Self::RightCtrl => "MOD_RCTL",
            Self::LeftAlt => "MOD_LALT",
            Self::RightAlt => "MOD_RALT",
            Self::LeftGui => "MOD_LGUI",
            Self::RightGui => "MOD_RGUI",
        }
    }
}
