use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use smol_str::SmolStr;
use std::convert::TryFrom;

/// Nested objects keep the key order they were built or decoded with.
pub type ObjectMap = IndexMap<SmolStr, FieldValue>;

// ─── FieldNumber ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, PartialEq)]
pub enum FieldNumber {
    I64(i64),
    U64(u64),
    F64(f64),
}

impl std::fmt::Debug for FieldNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldNumber::I64(i) => write!(f, "I64({})", i),
            FieldNumber::U64(u) => write!(f, "U64({})", u),
            FieldNumber::F64(v) => write!(f, "F64({})", v),
        }
    }
}

impl FieldNumber {
    pub fn as_f64(self) -> f64 {
        match self {
            FieldNumber::I64(i) => i as f64,
            FieldNumber::U64(u) => u as f64,
            FieldNumber::F64(f) => f,
        }
    }

    pub fn as_i64(self) -> Option<i64> {
        match self {
            FieldNumber::I64(i) => Some(i),
            FieldNumber::U64(u) => i64::try_from(u).ok(),
            FieldNumber::F64(f) => {
                if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
                    Some(f as i64)
                } else {
                    None
                }
            }
        }
    }

    pub fn as_u64(self) -> Option<u64> {
        match self {
            FieldNumber::U64(u) => Some(u),
            FieldNumber::I64(i) => u64::try_from(i).ok(),
            FieldNumber::F64(f) => {
                if f.fract() == 0.0 && f >= 0.0 && f <= u64::MAX as f64 {
                    Some(f as u64)
                } else {
                    None
                }
            }
        }
    }

    /// JSON has no encoding for NaN or the infinities.
    #[inline]
    pub fn is_finite(self) -> bool {
        match self {
            FieldNumber::F64(f) => f.is_finite(),
            _ => true,
        }
    }
}

// ─── FieldValue ─────────────────────────────────────────────────────────────

/// A loosely-typed attribute value. Any JSON document fits.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldValue {
    #[default]
    Null,
    Bool(bool),
    Number(FieldNumber),
    Str(SmolStr),
    Array(Vec<FieldValue>),
    Object(ObjectMap),
}

impl FieldValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            FieldValue::Number(n) => n.as_u64(),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectMap> {
        match self {
            FieldValue::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut ObjectMap> {
        match self {
            FieldValue::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<FieldValue>> {
        match self {
            FieldValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.as_object()?.get(key)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// False if a non-finite float sits anywhere inside the value.
    pub fn is_json_representable(&self) -> bool {
        match self {
            FieldValue::Number(n) => n.is_finite(),
            FieldValue::Array(arr) => arr.iter().all(FieldValue::is_json_representable),
            FieldValue::Object(map) => map.values().all(FieldValue::is_json_representable),
            _ => true,
        }
    }
}

// ─── Serialize ──────────────────────────────────────────────────────────────

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Null => serializer.serialize_none(),
            FieldValue::Bool(b) => serializer.serialize_bool(*b),
            FieldValue::Number(n) => match n {
                FieldNumber::I64(i) => serializer.serialize_i64(*i),
                FieldNumber::U64(u) => serializer.serialize_u64(*u),
                FieldNumber::F64(f) => serializer.serialize_f64(*f),
            },
            FieldValue::Str(s) => serializer.serialize_str(s.as_str()),
            FieldValue::Array(arr) => {
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for v in arr {
                    seq.serialize_element(v)?;
                }
                seq.end()
            }
            FieldValue::Object(map) => {
                let mut m = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map {
                    m.serialize_entry(k.as_str(), v)?;
                }
                m.end()
            }
        }
    }
}

// ─── From impls ─────────────────────────────────────────────────────────────

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(FieldNumber::F64(n))
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Number(FieldNumber::I64(n))
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        FieldValue::Number(FieldNumber::I64(n as i64))
    }
}

impl From<u64> for FieldValue {
    fn from(n: u64) -> Self {
        FieldValue::Number(FieldNumber::U64(n))
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Str(SmolStr::from(s))
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Str(SmolStr::from(s))
    }
}

impl From<SmolStr> for FieldValue {
    fn from(s: SmolStr) -> Self {
        FieldValue::Str(s)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(FieldValue::Null, Into::into)
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(v: Vec<T>) -> Self {
        FieldValue::Array(v.into_iter().map(Into::into).collect())
    }
}

// ─── From<cbor4ii::core::Value> ─────────────────────────────────────────────

impl From<cbor4ii::core::Value> for FieldValue {
    fn from(v: cbor4ii::core::Value) -> Self {
        use cbor4ii::core::Value;
        match v {
            Value::Null => FieldValue::Null,
            Value::Bool(b) => FieldValue::Bool(b),
            Value::Integer(i) => {
                if let Ok(val) = i64::try_from(i) {
                    FieldValue::Number(FieldNumber::I64(val))
                } else if let Ok(val) = u64::try_from(i) {
                    FieldValue::Number(FieldNumber::U64(val))
                } else {
                    FieldValue::Number(FieldNumber::F64(i as f64))
                }
            }
            Value::Float(f) => FieldValue::Number(FieldNumber::F64(f)),
            Value::Text(s) => FieldValue::Str(SmolStr::from(s)),
            Value::Bytes(bytes) => FieldValue::Array(
                bytes
                    .into_iter()
                    .map(|b| FieldValue::Number(FieldNumber::I64(b as i64)))
                    .collect(),
            ),
            Value::Array(arr) => {
                FieldValue::Array(arr.into_iter().map(FieldValue::from).collect())
            }
            Value::Map(map) => FieldValue::Object(
                map.into_iter()
                    .map(|(k, v)| (cbor_key(k), FieldValue::from(v)))
                    .collect(),
            ),
            Value::Tag(_, inner) => FieldValue::from(*inner),
            #[allow(unreachable_patterns)]
            _ => FieldValue::Null,
        }
    }
}

/// Text keys are taken as-is, integer keys are stringified.
pub(crate) fn cbor_key(k: cbor4ii::core::Value) -> SmolStr {
    match k {
        cbor4ii::core::Value::Text(s) => SmolStr::from(s),
        cbor4ii::core::Value::Integer(i) => SmolStr::from(i.to_string()),
        other => SmolStr::from(format!("{:?}", other)),
    }
}

// ─── From/Into serde_json::Value ────────────────────────────────────────────

impl From<serde_json::Value> for FieldValue {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => FieldValue::Null,
            serde_json::Value::Bool(b) => FieldValue::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    FieldValue::Number(FieldNumber::I64(i))
                } else if let Some(u) = n.as_u64() {
                    FieldValue::Number(FieldNumber::U64(u))
                } else {
                    FieldValue::Number(FieldNumber::F64(n.as_f64().unwrap_or(0.0)))
                }
            }
            serde_json::Value::String(s) => FieldValue::Str(SmolStr::from(s)),
            serde_json::Value::Array(arr) => {
                FieldValue::Array(arr.into_iter().map(FieldValue::from).collect())
            }
            serde_json::Value::Object(obj) => FieldValue::Object(
                obj.into_iter()
                    .map(|(k, v)| (SmolStr::from(k), FieldValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<FieldValue> for serde_json::Value {
    fn from(val: FieldValue) -> Self {
        match val {
            FieldValue::Null => serde_json::Value::Null,
            FieldValue::Bool(b) => serde_json::Value::Bool(b),
            FieldValue::Number(n) => match n {
                FieldNumber::I64(i) => serde_json::json!(i),
                FieldNumber::U64(u) => serde_json::json!(u),
                // Non-finite floats collapse to null here.
                FieldNumber::F64(f) => serde_json::json!(f),
            },
            FieldValue::Str(s) => serde_json::Value::String(s.to_string()),
            FieldValue::Array(arr) => {
                serde_json::Value::Array(arr.into_iter().map(|v| v.into()).collect())
            }
            FieldValue::Object(obj) => serde_json::Value::Object(
                obj.into_iter()
                    .map(|(k, v)| (k.to_string(), v.into()))
                    .collect(),
            ),
        }
    }
}

/// Build a [`FieldValue::Object`] from `key => value` pairs. Values may be
/// nested `{ ... }` blocks or any expression convertible into a `FieldValue`.
#[macro_export]
macro_rules! record_object {
    ({ $($key:expr => $val:tt),* $(,)? }) => {{
        let mut map = $crate::field_value::ObjectMap::default();
        $(
            map.insert(
                $crate::SmolStr::new($key),
                $crate::field_value::FieldValue::from($crate::record_object!(@value $val)),
            );
        )*
        $crate::field_value::FieldValue::Object(map)
    }};

    (@value { $($inner:tt)* }) => {
        $crate::record_object!({ $($inner)* })
    };

    (@value $val:expr) => {
        $val
    };
}
