mod accessor;
pub mod record;
mod serialize_op;

pub use accessor::Record;
pub use record::Entity;
