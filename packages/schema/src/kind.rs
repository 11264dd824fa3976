use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Block type tag.
///
/// The known set grows over time. Tags this build does not know about are
/// kept verbatim in [`BlockKind::Other`] so documents written by a newer
/// editor still load, round-trip and render (as a placeholder).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Hero,
    About,
    Services,
    Contact,
    Gallery,
    Testimonials,
    Products,
    Footer,
    Other(String),
}

impl BlockKind {
    /// Known kinds in the order the block palette offers them
    pub fn palette() -> [BlockKind; 8] {
        [
            BlockKind::Hero,
            BlockKind::About,
            BlockKind::Services,
            BlockKind::Contact,
            BlockKind::Gallery,
            BlockKind::Testimonials,
            BlockKind::Products,
            BlockKind::Footer,
        ]
    }

    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "hero" => BlockKind::Hero,
            "about" => BlockKind::About,
            "services" => BlockKind::Services,
            "contact" => BlockKind::Contact,
            "gallery" => BlockKind::Gallery,
            "testimonials" => BlockKind::Testimonials,
            "products" => BlockKind::Products,
            "footer" => BlockKind::Footer,
            other => BlockKind::Other(other.to_string()),
        }
    }

    /// Wire tag, as stored in the `type` field of a block
    pub fn as_str(&self) -> &str {
        match self {
            BlockKind::Hero => "hero",
            BlockKind::About => "about",
            BlockKind::Services => "services",
            BlockKind::Contact => "contact",
            BlockKind::Gallery => "gallery",
            BlockKind::Testimonials => "testimonials",
            BlockKind::Products => "products",
            BlockKind::Footer => "footer",
            BlockKind::Other(tag) => tag,
        }
    }

    /// Palette label, falling back to the tag for unknown kinds
    pub fn label(&self) -> &str {
        match self {
            BlockKind::Hero => "Hero Section",
            BlockKind::About => "About Us",
            BlockKind::Services => "Services",
            BlockKind::Contact => "Contact",
            BlockKind::Gallery => "Gallery",
            BlockKind::Testimonials => "Testimonials",
            BlockKind::Products => "Products",
            BlockKind::Footer => "Footer",
            BlockKind::Other(tag) => tag,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, BlockKind::Other(_))
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_tag(s))
    }
}

impl Serialize for BlockKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BlockKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_tag(&tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags_round_trip() {
        for kind in BlockKind::palette() {
            assert_eq!(BlockKind::from_tag(kind.as_str()), kind);
            assert!(kind.is_known());
        }
    }

    #[test]
    fn test_unknown_tag_is_preserved() {
        let kind = BlockKind::from_tag("pricing-table");
        assert_eq!(kind, BlockKind::Other("pricing-table".to_string()));
        assert_eq!(kind.as_str(), "pricing-table");
        assert_eq!(kind.label(), "pricing-table");
        assert!(!kind.is_known());
    }

    #[test]
    fn test_serializes_as_bare_string() {
        let json = serde_json::to_string(&BlockKind::Gallery).unwrap();
        assert_eq!(json, "\"gallery\"");

        let kind: BlockKind = serde_json::from_str("\"countdown\"").unwrap();
        assert_eq!(kind, BlockKind::Other("countdown".to_string()));
    }
}
