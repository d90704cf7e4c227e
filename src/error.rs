// ─── Error ──────────────────────────────────────────────────────────────────
use smol_str::SmolStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Field `{field}` holds a value JSON can't represent")]
    Unrepresentable { field: SmolStr },
    #[error("CBOR error: {0}")]
    CborError(String),
    #[error("Can't hydrate from none Object Types")]
    NotAnObject,
}
