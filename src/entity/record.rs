use crate::error::RecordError;
use crate::field_value::{FieldValue, cbor_key};
use crate::naming::to_snake_case;
use crate::types::FieldStore;
use smol_str::SmolStr;

// ─── Entity ─────────────────────────────────────────────────────────────────

/// An open record: any attribute name, any JSON-compatible value.
///
/// Values live in the field store under their internal (snake_case) name.
/// Only names written through [`Entity::set`] / [`Entity::invoke`] are
/// tracked for serialization; attributes passed at construction are stored
/// but stay out of [`Entity::to_map`] until set again.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Entity {
    pub(crate) fields: FieldStore,
    /// Append-only, duplicates kept. Fixes serialization order.
    pub(crate) hydrated: Vec<SmolStr>,
}

impl Entity {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(externalName, value)` pairs.
    pub fn from_attributes<I, K, V>(attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<FieldValue>,
    {
        let mut entity = Self::new();
        entity.hydrate(attributes);
        entity
    }

    /// Build from decoded JSON. The top level must be an object.
    pub fn from_json_value(value: serde_json::Value) -> Result<Self, RecordError> {
        match value {
            serde_json::Value::Object(obj) => Ok(Self::from_attributes(obj)),
            _ => Err(RecordError::NotAnObject),
        }
    }

    pub fn from_json_str(text: &str) -> Result<Self, RecordError> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        Self::from_json_value(value)
    }

    /// Build from a CBOR document whose top level is a map.
    pub fn from_cbor(bytes: &[u8]) -> Result<Self, RecordError> {
        let value: cbor4ii::core::Value = cbor4ii::serde::from_slice(bytes)
            .map_err(|e| RecordError::CborError(format!("{e:?}")))?;
        match value {
            cbor4ii::core::Value::Map(entries) => Ok(Self::from_attributes(
                entries
                    .into_iter()
                    .map(|(k, v)| (cbor_key(k), FieldValue::from(v))),
            )),
            _ => Err(RecordError::NotAnObject),
        }
    }

    /// Bulk write straight into the field store. Does not register names.
    fn hydrate<I, K, V>(&mut self, attributes: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<FieldValue>,
    {
        let mut count = 0usize;
        for (key, value) in attributes {
            self.fields
                .insert(SmolStr::from(to_snake_case(key.as_ref())), value.into());
            count += 1;
        }
        tracing::debug!(attributes = count, "hydrated entity");
        self
    }

    // ════════════════════════════════════════════════════════════════════════
    // Inspection
    // ════════════════════════════════════════════════════════════════════════

    #[inline]
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Raw handle into the field store. Writes through it are picked up by
    /// the serializer only if the name is already tracked.
    #[inline]
    pub fn field_mut(&mut self, name: &str) -> Option<&mut FieldValue> {
        self.fields.get_mut(name)
    }

    /// All stored fields, unordered, tracked or not.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[inline]
    pub fn hydrated_names(&self) -> &[SmolStr] {
        &self.hydrated
    }
}
