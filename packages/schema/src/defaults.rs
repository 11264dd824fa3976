use crate::{BlockKind, ContentMap};
use serde_json::{json, Value};

/// Default content for a freshly created block.
///
/// Total over the known kinds. Unknown kinds get an empty map. Every default
/// string is non-empty so a new block always renders something.
pub fn default_content(kind: &BlockKind) -> ContentMap {
    let value = match kind {
        BlockKind::Hero => json!({
            "title": "Welcome to Our Website",
            "subtitle": "We create amazing experiences for our customers",
            "buttonText": "Get Started",
            "buttonUrl": "#contact",
            "backgroundImage": "https://images.unsplash.com/photo-1497366216548-37526070297c?w=1600",
        }),
        BlockKind::About => json!({
            "title": "About Us",
            "description": "Tell your visitors who you are, what you do and why it matters.",
            "image": "https://images.unsplash.com/photo-1522071820081-009f0129c71c?w=800",
        }),
        BlockKind::Services => json!({
            "title": "Our Services",
            "services": [
                { "name": "Web Design", "description": "Beautiful, responsive websites that convert." },
                { "name": "Development", "description": "Fast, reliable applications built to last." },
                { "name": "Marketing", "description": "Campaigns that bring the right people to you." },
            ],
        }),
        BlockKind::Contact => json!({
            "title": "Contact Us",
            "email": "hello@example.com",
            "phone": "+1 (555) 123-4567",
            "address": "123 Main Street, Anytown",
        }),
        BlockKind::Gallery => json!({
            "title": "Gallery",
            "images": [
                { "url": "https://images.unsplash.com/photo-1497366754035-f200968a6e72?w=600", "alt": "Office space" },
                { "url": "https://images.unsplash.com/photo-1497366811353-6870744d04b2?w=600", "alt": "Meeting room" },
                { "url": "https://images.unsplash.com/photo-1497215728101-856f4ea42174?w=600", "alt": "Workspace" },
            ],
        }),
        BlockKind::Testimonials => json!({
            "title": "What Our Clients Say",
            "testimonials": [
                { "quote": "Working with this team was a fantastic experience.", "author": "Jane Doe", "role": "CEO, Acme" },
                { "quote": "They delivered on time and beyond expectations.", "author": "John Smith", "role": "Founder, Globex" },
            ],
        }),
        BlockKind::Products => json!({
            "title": "Our Products",
            "products": [
                { "name": "Starter", "price": "$19", "image": "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=400" },
                { "name": "Professional", "price": "$49", "image": "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=400" },
                { "name": "Enterprise", "price": "$99", "image": "https://images.unsplash.com/photo-1526170375885-4d8ecf77b99f?w=400" },
            ],
        }),
        BlockKind::Footer => json!({
            "companyName": "Your Company",
            "description": "Building great experiences, one page at a time.",
            "backgroundColor": "#111827",
        }),
        BlockKind::Other(_) => Value::Object(ContentMap::new()),
    };

    match value {
        Value::Object(map) => map,
        _ => ContentMap::new(),
    }
}

/// Default record for one item of a list field (`services`, `images`, ...).
///
/// Used when the property panel appends an item and when a stored item is
/// missing one of its fields.
pub fn default_item(kind: &BlockKind, list_field: &str) -> ContentMap {
    let value = match (kind, list_field) {
        (BlockKind::Services, "services") => json!({
            "name": "New Service",
            "description": "Describe this service.",
        }),
        (BlockKind::Gallery, "images") => json!({
            "url": "https://images.unsplash.com/photo-1497366216548-37526070297c?w=600",
            "alt": "Gallery image",
        }),
        (BlockKind::Testimonials, "testimonials") => json!({
            "quote": "Share what a happy customer said.",
            "author": "Happy Customer",
            "role": "Customer",
        }),
        (BlockKind::Products, "products") => json!({
            "name": "New Product",
            "price": "$0",
            "image": "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=400",
        }),
        _ => Value::Null,
    };

    match value {
        Value::Object(map) => map,
        _ => ContentMap::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields;

    #[test]
    fn test_defaults_cover_every_schema_field() {
        for kind in BlockKind::palette() {
            let content = default_content(&kind);
            for spec in fields(&kind) {
                assert!(
                    content.contains_key(spec.name),
                    "{} default is missing {}",
                    kind,
                    spec.name
                );
            }
        }
    }

    #[test]
    fn test_default_strings_are_non_empty() {
        fn check(value: &Value) {
            match value {
                Value::String(s) => assert!(!s.is_empty()),
                Value::Array(items) => {
                    assert!(!items.is_empty());
                    items.iter().for_each(check);
                }
                Value::Object(map) => map.values().for_each(check),
                other => panic!("unexpected default value {:?}", other),
            }
        }

        for kind in BlockKind::palette() {
            default_content(&kind).values().for_each(check);
        }
    }

    #[test]
    fn test_unknown_kind_defaults_to_empty() {
        assert!(default_content(&BlockKind::from_tag("newsletter")).is_empty());
        assert!(default_item(&BlockKind::Hero, "title").is_empty());
    }

    #[test]
    fn test_default_items_match_item_fields() {
        for kind in BlockKind::palette() {
            for spec in fields(&kind).iter().filter(|f| f.kind.is_list()) {
                let item = default_item(&kind, spec.name);
                for item_field in spec.item_fields() {
                    assert!(item.contains_key(item_field.name));
                }
            }
        }
    }
}
