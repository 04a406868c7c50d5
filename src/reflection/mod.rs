//! The access traits every mappable type implements.
//!
//! [`Field`] is the object-safe base: it classifies a value as either a
//! [`Record`] (walked further) or a [`Leaf`] (read, cloned, or assigned from
//! text). Leaf types get their implementation through [`Coerce`]; record
//! types through the [`Record`](crate::derive::Record) derive.
//!
//! [`Coerce`]: crate::coerce::Coerce

mod field;
mod leaf;
mod record;

pub use field::{Field, FieldMut, FieldRef};
pub use leaf::Leaf;
pub use record::Record;
