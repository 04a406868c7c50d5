//! Static descriptors attached to each record type.
//!
//! A [`RecordInfo`] describes one record type at compile time: its name plus
//! one [`FieldInfo`] per field in declaration order. Descriptors are produced
//! once by the derive macro and accessed through [`Described`].

mod field_info;
mod record_info;

pub use field_info::FieldInfo;
pub use record_info::{Described, RecordInfo};
