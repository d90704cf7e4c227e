//! Open records hydrated from loosely-typed key/value input.
//!
//! An [`Entity`] stores attribute values under snake_case names and
//! serializes the attributes set through its dynamic accessors back out
//! under camelCase names, as an ordered map, JSON text, or CBOR.

pub mod entity;
pub mod error;
pub mod field_value;
pub mod naming;
pub mod types;

pub use entity::{Entity, Record};
pub use error::RecordError;
pub use field_value::{FieldNumber, FieldValue};
pub use smol_str::SmolStr;
pub use types::{Attributes, Call};
