//! Per-kind field tables.
//!
//! The tables drive the property panel (one control per field) and the
//! linter (fields outside the table are flagged). The renderer does not read
//! them; it goes through [`TypedContent`](crate::TypedContent).

use crate::BlockKind;

/// Semantic type of a content field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line string
    Text,
    /// Multi-line string
    MultilineText,
    /// CSS color string
    Color,
    /// Link target
    Url,
    /// Image reference, populated by the upload collaborator
    ImageUrl,
    /// Repeating group of records
    List { item: &'static [FieldSpec] },
}

impl FieldKind {
    pub fn is_list(&self) -> bool {
        matches!(self, FieldKind::List { .. })
    }

    pub fn is_url(&self) -> bool {
        matches!(self, FieldKind::Url | FieldKind::ImageUrl)
    }
}

/// One field of a block's content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { name, label, kind }
    }

    /// Item fields of a list field, empty for scalars
    pub fn item_fields(&self) -> &'static [FieldSpec] {
        match self.kind {
            FieldKind::List { item } => item,
            _ => &[],
        }
    }
}

const HERO: &[FieldSpec] = &[
    FieldSpec::new("title", "Title", FieldKind::Text),
    FieldSpec::new("subtitle", "Subtitle", FieldKind::MultilineText),
    FieldSpec::new("buttonText", "Button Text", FieldKind::Text),
    FieldSpec::new("buttonUrl", "Button Link", FieldKind::Url),
    FieldSpec::new("backgroundImage", "Background Image", FieldKind::ImageUrl),
];

const ABOUT: &[FieldSpec] = &[
    FieldSpec::new("title", "Title", FieldKind::Text),
    FieldSpec::new("description", "Description", FieldKind::MultilineText),
    FieldSpec::new("image", "Image", FieldKind::ImageUrl),
];

const SERVICE_ITEM: &[FieldSpec] = &[
    FieldSpec::new("name", "Name", FieldKind::Text),
    FieldSpec::new("description", "Description", FieldKind::MultilineText),
];

const SERVICES: &[FieldSpec] = &[
    FieldSpec::new("title", "Title", FieldKind::Text),
    FieldSpec::new("services", "Services", FieldKind::List { item: SERVICE_ITEM }),
];

const CONTACT: &[FieldSpec] = &[
    FieldSpec::new("title", "Title", FieldKind::Text),
    FieldSpec::new("email", "Email", FieldKind::Text),
    FieldSpec::new("phone", "Phone", FieldKind::Text),
    FieldSpec::new("address", "Address", FieldKind::MultilineText),
];

const GALLERY_IMAGE: &[FieldSpec] = &[
    FieldSpec::new("url", "Image", FieldKind::ImageUrl),
    FieldSpec::new("alt", "Alt Text", FieldKind::Text),
];

const GALLERY: &[FieldSpec] = &[
    FieldSpec::new("title", "Title", FieldKind::Text),
    FieldSpec::new("images", "Images", FieldKind::List { item: GALLERY_IMAGE }),
];

const TESTIMONIAL: &[FieldSpec] = &[
    FieldSpec::new("quote", "Quote", FieldKind::MultilineText),
    FieldSpec::new("author", "Author", FieldKind::Text),
    FieldSpec::new("role", "Role", FieldKind::Text),
];

const TESTIMONIALS: &[FieldSpec] = &[
    FieldSpec::new("title", "Title", FieldKind::Text),
    FieldSpec::new(
        "testimonials",
        "Testimonials",
        FieldKind::List { item: TESTIMONIAL },
    ),
];

const PRODUCT: &[FieldSpec] = &[
    FieldSpec::new("name", "Name", FieldKind::Text),
    FieldSpec::new("price", "Price", FieldKind::Text),
    FieldSpec::new("image", "Image", FieldKind::ImageUrl),
];

const PRODUCTS: &[FieldSpec] = &[
    FieldSpec::new("title", "Title", FieldKind::Text),
    FieldSpec::new("products", "Products", FieldKind::List { item: PRODUCT }),
];

const FOOTER: &[FieldSpec] = &[
    FieldSpec::new("companyName", "Company Name", FieldKind::Text),
    FieldSpec::new("description", "Description", FieldKind::MultilineText),
    FieldSpec::new("backgroundColor", "Background Color", FieldKind::Color),
];

/// Field table for a kind; empty for unknown kinds
pub fn fields(kind: &BlockKind) -> &'static [FieldSpec] {
    match kind {
        BlockKind::Hero => HERO,
        BlockKind::About => ABOUT,
        BlockKind::Services => SERVICES,
        BlockKind::Contact => CONTACT,
        BlockKind::Gallery => GALLERY,
        BlockKind::Testimonials => TESTIMONIALS,
        BlockKind::Products => PRODUCTS,
        BlockKind::Footer => FOOTER,
        BlockKind::Other(_) => &[],
    }
}

pub fn field_spec(kind: &BlockKind, name: &str) -> Option<&'static FieldSpec> {
    fields(kind).iter().find(|spec| spec.name == name)
}
