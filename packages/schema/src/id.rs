use crate::BlockKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque block identifier, stable for the lifetime of the block
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(String);

impl BlockId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh id of the form `<tag>-<unix millis>-<counter>`.
    ///
    /// The counter is process-wide, so two ids generated in the same
    /// millisecond for the same kind still differ.
    pub fn generate(kind: &BlockKind) -> Self {
        let counter = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        let tag = match kind.as_str() {
            "" => "block",
            tag => tag,
        };
        Self(format!(
            "{}-{}-{}",
            tag,
            chrono::Utc::now().timestamp_millis(),
            counter
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BlockId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for BlockId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for BlockId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for BlockId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for BlockId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generated_ids_are_unique() {
        let ids: HashSet<BlockId> = (0..1000)
            .map(|_| BlockId::generate(&BlockKind::Hero))
            .collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_generated_id_carries_tag() {
        let id = BlockId::generate(&BlockKind::Services);
        assert!(id.as_str().starts_with("services-"));

        let id = BlockId::generate(&BlockKind::Other(String::new()));
        assert!(id.as_str().starts_with("block-"));
    }

    #[test]
    fn test_serializes_transparently() {
        let id = BlockId::from("hero-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"hero-1\"");
        assert_eq!(id, "hero-1");
    }
}
