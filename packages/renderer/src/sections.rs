//! Per-kind section builders shared by every render mode.
//!
//! Builders read through [`TypedContent`], so missing or malformed fields
//! already carry their defaults by the time they get here.

use crate::VNode;
use sitecraft_schema::{
    is_script_url, AboutContent, Block, ContactContent, FooterContent, GalleryContent,
    HeroContent, ProductsContent, ServicesContent, TestimonialsContent, TypedContent,
};

/// Section for one block
pub(crate) fn section(block: &Block) -> VNode {
    let node = match block.typed() {
        TypedContent::Hero(hero) => hero_section(&hero),
        TypedContent::About(about) => about_section(&about),
        TypedContent::Services(services) => services_section(&services),
        TypedContent::Contact(contact) => contact_section(&contact),
        TypedContent::Gallery(gallery) => gallery_section(&gallery),
        TypedContent::Testimonials(testimonials) => testimonials_section(&testimonials),
        TypedContent::Products(products) => products_section(&products),
        TypedContent::Footer(footer) => footer_section(&footer),
        TypedContent::Unknown(_) => placeholder_section(block),
    };

    node.with_attr("data-block-type", block.kind.as_str())
        .with_key(block.id.as_str())
}

fn base(tag: &str, kind: &str) -> VNode {
    VNode::element(tag)
        .with_class("sc-section")
        .with_class(format!("sc-{}", kind))
}

fn heading(title: &str) -> VNode {
    VNode::text_element("h2", title).with_class("sc-title")
}

/// Link target with script schemes neutralised
pub(crate) fn safe_url(url: &str) -> String {
    if is_script_url(url) {
        "#".to_string()
    } else {
        url.trim().to_string()
    }
}

fn css_url(url: &str) -> String {
    let escaped: String = safe_url(url)
        .chars()
        .filter(|c| !c.is_control())
        .map(|c| match c {
            '"' => "%22".to_string(),
            '\'' => "%27".to_string(),
            '(' => "%28".to_string(),
            ')' => "%29".to_string(),
            '\\' => "%5C".to_string(),
            c => c.to_string(),
        })
        .collect();
    format!("url(\"{}\")", escaped)
}

/// Colour values are limited to what hex, named and functional notations use
fn css_color(value: &str) -> Option<String> {
    let value = value.trim();
    let allowed = |c: char| c.is_ascii_alphanumeric() || matches!(c, '#' | '(' | ')' | ',' | '.' | '%' | ' ');
    if !value.is_empty() && value.len() <= 64 && value.chars().all(allowed) {
        Some(value.to_string())
    } else {
        None
    }
}

fn image(url: &str, alt: &str) -> VNode {
    VNode::element("img")
        .with_attr("src", safe_url(url))
        .with_attr("alt", alt)
        .with_attr("loading", "lazy")
}

fn hero_section(hero: &HeroContent) -> VNode {
    base("section", "hero")
        .with_style("background-image", css_url(&hero.background_image))
        .with_child(
            VNode::element("div")
                .with_class("sc-hero-inner")
                .with_child(VNode::text_element("h1", &hero.title).with_class("sc-title"))
                .with_child(VNode::text_element("p", &hero.subtitle).with_class("sc-subtitle"))
                .with_child(
                    VNode::text_element("a", &hero.button_text)
                        .with_class("sc-button")
                        .with_attr("href", safe_url(&hero.button_url)),
                ),
        )
}

fn about_section(about: &AboutContent) -> VNode {
    base("section", "about")
        .with_child(
            VNode::element("div")
                .with_class("sc-about-text")
                .with_child(heading(&about.title))
                .with_children(paragraphs(&about.description)),
        )
        .with_child(image(&about.image, &about.title).with_class("sc-about-image"))
}

fn services_section(services: &ServicesContent) -> VNode {
    base("section", "services")
        .with_child(heading(&services.title))
        .with_child(
            VNode::element("div").with_class("sc-grid").with_children(
                services.services.iter().map(|service| {
                    VNode::element("div")
                        .with_class("sc-card")
                        .with_child(VNode::text_element("h3", &service.name))
                        .with_child(VNode::text_element("p", &service.description))
                }),
            ),
        )
}

fn contact_section(contact: &ContactContent) -> VNode {
    let phone_target: String = contact
        .phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();

    base("section", "contact")
        .with_child(heading(&contact.title))
        .with_child(
            VNode::element("ul")
                .with_class("sc-contact-list")
                .with_child(
                    VNode::element("li").with_class("sc-contact-email").with_child(
                        VNode::text_element("a", &contact.email)
                            .with_attr("href", format!("mailto:{}", contact.email.trim())),
                    ),
                )
                .with_child(
                    VNode::element("li").with_class("sc-contact-phone").with_child(
                        VNode::text_element("a", &contact.phone)
                            .with_attr("href", format!("tel:{}", phone_target)),
                    ),
                )
                .with_child(
                    VNode::element("li")
                        .with_class("sc-contact-address")
                        .with_children(paragraphs(&contact.address)),
                ),
        )
}

fn gallery_section(gallery: &GalleryContent) -> VNode {
    base("section", "gallery")
        .with_child(heading(&gallery.title))
        .with_child(
            VNode::element("div").with_class("sc-grid").with_children(
                gallery.images.iter().map(|img| {
                    VNode::element("figure")
                        .with_class("sc-gallery-item")
                        .with_child(image(&img.url, &img.alt))
                }),
            ),
        )
}

fn testimonials_section(testimonials: &TestimonialsContent) -> VNode {
    base("section", "testimonials")
        .with_child(heading(&testimonials.title))
        .with_child(
            VNode::element("div").with_class("sc-grid").with_children(
                testimonials.testimonials.iter().map(|t| {
                    VNode::element("blockquote")
                        .with_class("sc-testimonial")
                        .with_child(VNode::text_element("p", &t.quote))
                        .with_child(
                            VNode::element("cite")
                                .with_child(VNode::text_element("strong", &t.author))
                                .with_child(VNode::text_element("span", &t.role)),
                        )
                }),
            ),
        )
}

fn products_section(products: &ProductsContent) -> VNode {
    base("section", "products")
        .with_child(heading(&products.title))
        .with_child(
            VNode::element("div").with_class("sc-grid").with_children(
                products.products.iter().map(|product| {
                    VNode::element("div")
                        .with_class("sc-card")
                        .with_class("sc-product")
                        .with_child(image(&product.image, &product.name))
                        .with_child(VNode::text_element("h3", &product.name))
                        .with_child(
                            VNode::text_element("p", &product.price).with_class("sc-price"),
                        )
                }),
            ),
        )
}

fn footer_section(footer: &FooterContent) -> VNode {
    let mut node = base("footer", "footer")
        .with_child(VNode::text_element("strong", &footer.company_name).with_class("sc-company"))
        .with_children(paragraphs(&footer.description));

    if let Some(color) = css_color(&footer.background_color) {
        node = node.with_style("background-color", color);
    }
    node
}

/// Neutral stand-in for kinds this build cannot render
fn placeholder_section(block: &Block) -> VNode {
    base("div", "placeholder")
        .with_child(VNode::text_element("p", block.display_name()).with_class("sc-placeholder-name"))
}

/// One `<p>` per non-blank line
fn paragraphs(text: &str) -> Vec<VNode> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| VNode::text_element("p", line))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use sitecraft_schema::{create_block, BlockKind};

    #[test]
    fn test_section_is_keyed_by_block_id() {
        let block = create_block(BlockKind::About);
        let node = section(&block);
        assert_eq!(node.key(), Some(block.id.as_str()));
        assert_eq!(node.attr("data-block-type"), Some("about"));
    }

    #[test]
    fn test_script_urls_are_neutralised() {
        let block = create_block(BlockKind::Hero).with_field("buttonUrl", "javascript:alert(1)");
        let node = section(&block);
        let button = node.find(&|n| n.has_class("sc-button")).unwrap();
        assert_eq!(button.attr("href"), Some("#"));
    }

    #[test]
    fn test_css_url_escapes_breakout_characters() {
        assert_eq!(
            css_url("https://x/a\"b(c).png"),
            "url(\"https://x/a%22b%28c%29.png\")"
        );
    }

    #[test]
    fn test_invalid_colour_is_dropped() {
        let block = create_block(BlockKind::Footer).with_field("backgroundColor", "red; position: fixed");
        let node = section(&block);
        match node {
            VNode::Element { styles, .. } => assert!(styles.get("background-color").is_none()),
            _ => panic!("expected element"),
        }

        let block = create_block(BlockKind::Footer).with_field("backgroundColor", "rgb(0, 0, 0)");
        match section(&block) {
            VNode::Element { styles, .. } => {
                assert_eq!(styles.get("background-color").map(String::as_str), Some("rgb(0, 0, 0)"))
            }
            _ => panic!("expected element"),
        }
    }

    #[test]
    fn test_multiline_text_splits_into_paragraphs() {
        let block = create_block(BlockKind::About)
            .with_field("description", json!("First line\n\nSecond line"));
        let node = section(&block);
        let text = node.find(&|n| n.has_class("sc-about-text")).unwrap();
        let paragraphs: Vec<_> = text.children().iter().filter(|n| n.tag() == Some("p")).collect();
        assert_eq!(paragraphs.len(), 2);
    }

    #[test]
    fn test_contact_links() {
        let block = create_block(BlockKind::Contact);
        let node = section(&block);
        let phone = node.find(&|n| n.attr("href").map_or(false, |h| h.starts_with("tel:"))).unwrap();
        assert_eq!(phone.attr("href"), Some("tel:+15551234567"));
    }
}
