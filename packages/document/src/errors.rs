//! Error types for document operations

use sitecraft_schema::BlockId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Duplicate block id: {0}")]
    DuplicateBlockId(BlockId),

    #[error("Index {index} out of range for document of {len} blocks")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Block not found: {0}")]
    BlockNotFound(BlockId),

    #[error("Invalid payload: {0}")]
    Payload(#[from] serde_json::Error),
}

impl DocumentError {
    /// Stable code for surfacing the error in a UI
    pub fn code(&self) -> &'static str {
        match self {
            Self::DuplicateBlockId(_) => "duplicate_block_id",
            Self::IndexOutOfRange { .. } => "index_out_of_range",
            Self::BlockNotFound(_) => "block_not_found",
            Self::Payload(_) => "invalid_payload",
        }
    }
}
