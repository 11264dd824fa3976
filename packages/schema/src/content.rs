//! Typed, defaulted views of block content.
//!
//! Resolution never fails. A field that is missing, blank, or of the wrong
//! shape reads as the kind's default. List fields that are not arrays, or
//! that hold no records, read as the default list. Items that are not
//! objects are dropped and missing item fields read from the item default.

use crate::{default_content, default_item, BlockKind, ContentMap};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroContent {
    pub title: String,
    pub subtitle: String,
    pub button_text: String,
    pub button_url: String,
    pub background_image: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutContent {
    pub title: String,
    pub description: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceItem {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServicesContent {
    pub title: String,
    pub services: Vec<ServiceItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactContent {
    pub title: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryImage {
    pub url: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryContent {
    pub title: String,
    pub images: Vec<GalleryImage>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestimonialsContent {
    pub title: String,
    pub testimonials: Vec<Testimonial>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub name: String,
    pub price: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductsContent {
    pub title: String,
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterContent {
    pub company_name: String,
    pub description: String,
    pub background_color: String,
}

/// Content of a block, one variant per known kind
#[derive(Debug, Clone, PartialEq)]
pub enum TypedContent {
    Hero(HeroContent),
    About(AboutContent),
    Services(ServicesContent),
    Contact(ContactContent),
    Gallery(GalleryContent),
    Testimonials(TestimonialsContent),
    Products(ProductsContent),
    Footer(FooterContent),
    /// Kind this build does not know; content kept as stored
    Unknown(ContentMap),
}

/// Text of a scalar value. Blank strings, nulls, lists and records read as
/// absent; numbers are accepted and printed.
pub fn scalar_text(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

/// Records of a list value; anything that is not a list of objects yields none
pub fn record_items(value: Option<&Value>) -> Vec<&ContentMap> {
    value
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_object).collect())
        .unwrap_or_default()
}

struct FieldReader<'a> {
    stored: &'a ContentMap,
    fallback: &'a ContentMap,
}

impl<'a> FieldReader<'a> {
    fn text(&self, field: &str) -> String {
        scalar_text(self.stored.get(field))
            .or_else(|| scalar_text(self.fallback.get(field)))
            .unwrap_or_default()
    }

    fn items(&self, field: &str, item_fallback: &'a ContentMap) -> Vec<FieldReader<'a>> {
        let mut items = record_items(self.stored.get(field));
        if items.is_empty() {
            items = record_items(self.fallback.get(field));
        }
        items
            .into_iter()
            .map(|stored| FieldReader {
                stored,
                fallback: item_fallback,
            })
            .collect()
    }
}

impl TypedContent {
    pub fn resolve(kind: &BlockKind, content: &ContentMap) -> Self {
        let defaults = default_content(kind);
        let r = FieldReader {
            stored: content,
            fallback: &defaults,
        };

        match kind {
            BlockKind::Hero => TypedContent::Hero(HeroContent {
                title: r.text("title"),
                subtitle: r.text("subtitle"),
                button_text: r.text("buttonText"),
                button_url: r.text("buttonUrl"),
                background_image: r.text("backgroundImage"),
            }),
            BlockKind::About => TypedContent::About(AboutContent {
                title: r.text("title"),
                description: r.text("description"),
                image: r.text("image"),
            }),
            BlockKind::Services => {
                let item = default_item(kind, "services");
                TypedContent::Services(ServicesContent {
                    title: r.text("title"),
                    services: r
                        .items("services", &item)
                        .iter()
                        .map(|i| ServiceItem {
                            name: i.text("name"),
                            description: i.text("description"),
                        })
                        .collect(),
                })
            }
            BlockKind::Contact => TypedContent::Contact(ContactContent {
                title: r.text("title"),
                email: r.text("email"),
                phone: r.text("phone"),
                address: r.text("address"),
            }),
            BlockKind::Gallery => {
                let item = default_item(kind, "images");
                TypedContent::Gallery(GalleryContent {
                    title: r.text("title"),
                    images: r
                        .items("images", &item)
                        .iter()
                        .map(|i| GalleryImage {
                            url: i.text("url"),
                            alt: i.text("alt"),
                        })
                        .collect(),
                })
            }
            BlockKind::Testimonials => {
                let item = default_item(kind, "testimonials");
                TypedContent::Testimonials(TestimonialsContent {
                    title: r.text("title"),
                    testimonials: r
                        .items("testimonials", &item)
                        .iter()
                        .map(|i| Testimonial {
                            quote: i.text("quote"),
                            author: i.text("author"),
                            role: i.text("role"),
                        })
                        .collect(),
                })
            }
            BlockKind::Products => {
                let item = default_item(kind, "products");
                TypedContent::Products(ProductsContent {
                    title: r.text("title"),
                    products: r
                        .items("products", &item)
                        .iter()
                        .map(|i| Product {
                            name: i.text("name"),
                            price: i.text("price"),
                            image: i.text("image"),
                        })
                        .collect(),
                })
            }
            BlockKind::Footer => TypedContent::Footer(FooterContent {
                company_name: r.text("companyName"),
                description: r.text("description"),
                background_color: r.text("backgroundColor"),
            }),
            BlockKind::Other(_) => TypedContent::Unknown(content.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> ContentMap {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_empty_content_resolves_to_defaults() {
        let resolved = TypedContent::resolve(&BlockKind::Hero, &ContentMap::new());
        let TypedContent::Hero(hero) = resolved else {
            panic!("expected hero");
        };
        assert_eq!(hero.title, "Welcome to Our Website");
        assert_eq!(hero.button_text, "Get Started");
    }

    #[test]
    fn test_stored_values_win_over_defaults() {
        let content = map(json!({ "title": "Welcome", "buttonUrl": "/signup" }));
        let TypedContent::Hero(hero) = TypedContent::resolve(&BlockKind::Hero, &content) else {
            panic!("expected hero");
        };
        assert_eq!(hero.title, "Welcome");
        assert_eq!(hero.button_url, "/signup");
        assert_eq!(hero.subtitle, "We create amazing experiences for our customers");
    }

    #[test]
    fn test_blank_and_malformed_scalars_use_defaults() {
        let content = map(json!({
            "title": "   ",
            "description": { "nested": true },
            "image": null,
        }));
        let TypedContent::About(about) = TypedContent::resolve(&BlockKind::About, &content) else {
            panic!("expected about");
        };
        assert_eq!(about.title, "About Us");
        assert!(about.description.starts_with("Tell your visitors"));
        assert!(about.image.starts_with("https://"));
    }

    #[test]
    fn test_numbers_are_printed() {
        let content = map(json!({ "products": [{ "name": "Mug", "price": 12 }] }));
        let TypedContent::Products(products) =
            TypedContent::resolve(&BlockKind::Products, &content)
        else {
            panic!("expected products");
        };
        assert_eq!(products.products.len(), 1);
        assert_eq!(products.products[0].price, "12");
        assert!(products.products[0].image.starts_with("https://"));
    }

    #[test]
    fn test_malformed_list_uses_default_list() {
        let content = map(json!({ "title": "What we do", "services": "web, apps" }));
        let TypedContent::Services(services) =
            TypedContent::resolve(&BlockKind::Services, &content)
        else {
            panic!("expected services");
        };
        assert_eq!(services.title, "What we do");
        assert_eq!(services.services.len(), 3);
        assert_eq!(services.services[0].name, "Web Design");
    }

    #[test]
    fn test_non_record_items_are_dropped() {
        let content = map(json!({
            "images": ["https://x/1.png", { "url": "https://x/2.png" }, 42]
        }));
        let TypedContent::Gallery(gallery) = TypedContent::resolve(&BlockKind::Gallery, &content)
        else {
            panic!("expected gallery");
        };
        assert_eq!(gallery.images.len(), 1);
        assert_eq!(gallery.images[0].url, "https://x/2.png");
        assert_eq!(gallery.images[0].alt, "Gallery image");
    }

    #[test]
    fn test_unknown_kind_keeps_raw_content() {
        let content = map(json!({ "headline": "Soon" }));
        let resolved = TypedContent::resolve(&BlockKind::from_tag("banner"), &content);
        assert_eq!(resolved, TypedContent::Unknown(content));
    }
}
