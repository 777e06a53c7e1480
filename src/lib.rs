//! # Antecedent Morph configuration model (antmorph)
//!
//! An *antecedent morph* is a gesture shortcut keyed off the character typed
//! just before it: type `a`, then swipe north-east, and the keyboard types a
//! configured snippet instead. This crate holds the configuration tree that
//! describes every such shortcut, plus the static tables the firmware code
//! generator needs.
//!
//! ## Tree
//!
//! ```text
//! Schema
//! └── Antecedent ×62          (A-Z, 0-9, 26 symbols)
//!     └── Layer ×7            (Base, Mouse, Navigation, Media, Function, Number, Symbol)
//!         └── Morph ×3|6      (Base: NE E SE NW W SW, right-hand layers: NE E SE, left-hand: NW W SW)
//!             └── Mod ×3      (Ctrl, Alt, GUI)
//! ```
//!
//! The shape is fixed at construction. [`ContextMode::Flat`] hides every
//! layer except Base without touching the stored data.
//!
//! ## Editing
//!
//! ```
//! use antmorph::{AntecedentType, Direction, LayerType, NodePath, Schema, SchemaItem};
//!
//! let mut schema = Schema::default();
//! let path = NodePath::Morph(AntecedentType::A, LayerType::Base, Direction::East);
//! schema.item_mut(path).unwrap().set_value("x");
//! assert!(schema.is_changed());
//! ```
//!
//! ## Persistence
//!
//! [`Schema::to_document`] / [`Schema::from_document`] convert to and from
//! the JSON document format. This crate performs no file I/O; see
//! `antmorph-build` for loading, saving, and code generation.

pub mod antecedents;
pub mod document;
pub mod item;
pub mod keycode;
pub mod layout;
pub mod schema;
pub mod value;

pub use antecedents::{AntecedentInfo, AntecedentType, ANTECEDENT_TABLE};
pub use document::{DocumentError, FORMAT_VERSION};
pub use item::{ItemKind, NodeMut, NodePath, NodeRef, PathParseError, SchemaItem};
pub use keycode::zmk_keycode;
pub use layout::{ContextMode, Direction, Hand, LayerType, ModType, PhysicalModifier, Side};
pub use schema::{Antecedent, Layer, Leaf, Mod, Morph, Schema};
pub use value::{LeafValue, Mode};
