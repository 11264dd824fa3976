//! # Sitecraft Schema
//!
//! Block types, their content shape and their default content.
//!
//! A page is made of blocks. Every block has a [`BlockKind`] tag and a
//! free-form content map. The schema knows, for each known kind, which fields
//! the content carries ([`fields`]) and what they contain when a block is
//! freshly created ([`default_content`]).
//!
//! Stored content is never trusted. [`TypedContent::resolve`] reads a content
//! map into a typed record, falling back to the kind's defaults for any field
//! that is missing, empty or of the wrong shape:
//!
//! ```rust
//! use serde_json::json;
//! use sitecraft_schema::{create_block, BlockKind, TypedContent};
//!
//! let mut block = create_block(BlockKind::Hero);
//! block.content.insert("title".into(), json!("Welcome"));
//! block.content.insert("subtitle".into(), json!(["not", "a", "string"]));
//!
//! match block.typed() {
//!     TypedContent::Hero(hero) => {
//!         assert_eq!(hero.title, "Welcome");
//!         assert!(!hero.subtitle.is_empty());
//!     }
//!     _ => unreachable!(),
//! }
//! ```

mod block;
mod content;
mod defaults;
mod fields;
mod id;
mod kind;
mod url;

pub use block::{create_block, Block, ContentMap};
pub use content::{
    record_items, scalar_text, AboutContent, ContactContent, FooterContent, GalleryContent,
    GalleryImage, HeroContent, Product, ProductsContent, ServiceItem, ServicesContent, Testimonial,
    TestimonialsContent, TypedContent,
};
pub use defaults::{default_content, default_item};
pub use fields::{field_spec, fields, FieldKind, FieldSpec};
pub use id::BlockId;
pub use kind::BlockKind;
pub use url::is_script_url;
