use super::record::Entity;
use crate::error::RecordError;
use crate::field_value::FieldValue;
use crate::naming::to_snake_case;
use crate::types::{Attributes, Call};
use smol_str::SmolStr;

impl Entity {
    /// Store `value` under the internal `name` and register the name for
    /// serialization. The name is used as given.
    pub fn set(&mut self, name: impl Into<SmolStr>, value: impl Into<FieldValue>) -> &mut Self {
        let name = name.into();
        tracing::trace!(field = %name, "set attribute");
        self.fields.insert(name.clone(), value.into());
        self.hydrated.push(name);
        self
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Named accessor call: `method` is translated to its internal name, then
    /// a non-empty `args` sets the first argument and an empty one reads.
    pub fn invoke(&mut self, method: &str, args: Vec<FieldValue>) -> Call {
        let attribute = to_snake_case(method);
        match args.into_iter().next() {
            Some(value) => {
                self.set(attribute, value);
                Call::Set
            }
            None => Call::Get(self.get(&attribute).cloned().unwrap_or_default()),
        }
    }

    /// Accessor-style read, `entity.attr("firstName")`.
    #[inline]
    pub fn attr(&self, method: &str) -> Option<&FieldValue> {
        self.get(&to_snake_case(method))
    }

    /// Accessor-style write, `entity.set_attr("firstName", "Ann")`.
    #[inline]
    pub fn set_attr(&mut self, method: &str, value: impl Into<FieldValue>) -> &mut Self {
        self.set(to_snake_case(method), value)
    }
}

// ─── Record ─────────────────────────────────────────────────────────────────

/// Concrete record types wrap an [`Entity`] and may declare their own typed
/// accessors. Named calls try those first and fall back to the entity.
pub trait Record {
    fn entity(&self) -> &Entity;
    fn entity_mut(&mut self) -> &mut Entity;

    /// Accessors declared by the concrete type. `None` means `method` is not
    /// one of them.
    fn call_declared(&mut self, _method: &str, _args: &[FieldValue]) -> Option<Call> {
        None
    }

    fn call(&mut self, method: &str, args: Vec<FieldValue>) -> Call {
        if let Some(call) = self.call_declared(method, &args) {
            return call;
        }
        self.entity_mut().invoke(method, args)
    }

    fn to_map(&self) -> Attributes {
        self.entity().to_map()
    }

    fn to_json(&self) -> Result<String, RecordError> {
        self.entity().to_json()
    }
}

impl Record for Entity {
    #[inline]
    fn entity(&self) -> &Entity {
        self
    }

    #[inline]
    fn entity_mut(&mut self) -> &mut Entity {
        self
    }
}
