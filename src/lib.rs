#![doc = include_str!("../README.md")]

// `tagmap_derive` emits `tagmap::` paths; this alias lets the generated code
// resolve inside this crate's own tests and doctests.
extern crate self as tagmap;

// -----------------------------------------------------------------------------
// Modules

mod impls;
mod reflection;

pub mod coerce;
pub mod info;
pub mod mapper;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use mapper::{ApplyError, ExtractOption, Mapper, TagMap, ValueMap};
pub use mapper::{tags_of, to_value_map};
pub use mapper::{without_embedded, without_empty, without_minus};
pub use reflection::{Field, FieldMut, FieldRef, Leaf, Record};

pub use tagmap_derive as derive;
