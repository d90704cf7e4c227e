use super::record::Entity;
use crate::error::RecordError;
use crate::naming::to_camel_case;
use crate::types::Attributes;
use smol_str::SmolStr;

impl Entity {
    /// Tracked attributes under their external names, in first-set order.
    /// A name tracked twice keeps its first position.
    pub fn to_map(&self) -> Attributes {
        let mut out = Attributes::with_capacity(self.hydrated.len());
        for name in &self.hydrated {
            if let Some(value) = self.fields.get(name) {
                out.insert(SmolStr::from(to_camel_case(name)), value.clone());
            }
        }
        out
    }

    pub fn to_json(&self) -> Result<String, RecordError> {
        let map = self.to_map();
        if let Some((field, _)) = map.iter().find(|(_, v)| !v.is_json_representable()) {
            tracing::warn!(field = %field, "value not representable as JSON");
            return Err(RecordError::Unrepresentable {
                field: field.clone(),
            });
        }
        Ok(serde_json::to_string(&map)?)
    }

    /// Same projection as [`Entity::to_map`], encoded as a CBOR map.
    pub fn to_cbor(&self) -> Result<Vec<u8>, RecordError> {
        cbor4ii::serde::to_vec(Vec::new(), &self.to_map())
            .map_err(|e| RecordError::CborError(format!("{e:?}")))
    }
}
