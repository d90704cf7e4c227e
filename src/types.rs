use super::field_value::FieldValue;
use indexmap::IndexMap;
use rustc_hash::FxHasher;
use smol_str::SmolStr;
use std::hash::BuildHasherDefault;

pub type FastMap<K, V> = std::collections::HashMap<K, V, BuildHasherDefault<FxHasher>>;

/// Field Store: internal attribute name → current value.
pub type FieldStore = FastMap<SmolStr, FieldValue>;

/// Serializer output: external attribute name → value, in the order the
/// names were first set through the dynamic accessors.
pub type Attributes = IndexMap<SmolStr, FieldValue>;

// ─── Call ───────────────────────────────────────────────────────────────────

/// Outcome of a named accessor call.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    /// Write form: the first argument was stored and the name registered.
    Set,
    /// Read form: the current value, `FieldValue::Null` when unset.
    Get(FieldValue),
}

impl Call {
    /// The value read, if this was a read.
    pub fn into_value(self) -> Option<FieldValue> {
        match self {
            Call::Get(v) => Some(v),
            Call::Set => None,
        }
    }
}
