use crate::{render, RenderOptions, VNode, VirtualPage};
use sitecraft_document::Document;
use tracing::info;

/// Options for HTML output
#[derive(Debug, Clone, PartialEq)]
pub struct HtmlOptions {
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
    /// Document `<title>` for full pages
    pub title: String,
    /// Optional stylesheet linked from full pages
    pub stylesheet: Option<String>,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
            title: "My Website".to_string(),
            stylesheet: None,
        }
    }
}

impl HtmlOptions {
    pub fn compact() -> Self {
        Self {
            pretty: false,
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

struct Context<'a> {
    options: &'a HtmlOptions,
    depth: usize,
    buffer: String,
}

impl<'a> Context<'a> {
    fn new(options: &'a HtmlOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        self.newline();
    }

    fn add_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.options.indent);
        }
    }

    fn newline(&mut self) {
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Serialize rendered nodes as an HTML fragment
pub fn to_html(page: &VirtualPage, options: &HtmlOptions) -> String {
    let mut ctx = Context::new(options);
    for node in &page.nodes {
        write_node(node, &mut ctx);
    }
    ctx.get_output()
}

/// Full published page for a document: `<!DOCTYPE html>` through `</html>`
pub fn render_public_html(doc: &Document, options: &HtmlOptions) -> String {
    let page = render(doc, &RenderOptions::public());
    let mut ctx = Context::new(options);

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line("<html lang=\"en\">");
    ctx.indent();

    ctx.add_line("<head>");
    ctx.indent();
    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    ctx.add_line(&format!("<title>{}</title>", escape_html(&options.title)));
    if let Some(stylesheet) = &options.stylesheet {
        ctx.add_line(&format!(
            "<link rel=\"stylesheet\" href=\"{}\">",
            escape_html(stylesheet)
        ));
    }
    ctx.dedent();
    ctx.add_line("</head>");

    ctx.add_line("<body>");
    ctx.indent();
    for node in &page.nodes {
        write_node(node, &mut ctx);
    }
    ctx.dedent();
    ctx.add_line("</body>");

    ctx.dedent();
    ctx.add_line("</html>");

    let html = ctx.get_output();
    info!(blocks = doc.list_visible().len(), bytes = html.len(), "Rendered public page");
    html
}

fn write_node(node: &VNode, ctx: &mut Context) {
    match node {
        VNode::Element {
            tag,
            attributes,
            styles,
            children,
            ..
        } => {
            if ctx.options.pretty {
                ctx.add_indent();
            }
            ctx.add(&format!("<{}", tag));

            for (name, value) in attributes {
                ctx.add(&format!(" {}=\"{}\"", name, escape_html(value)));
            }

            if !styles.is_empty() {
                let declarations: Vec<String> = styles
                    .iter()
                    .map(|(key, value)| format!("{}: {}", key, value))
                    .collect();
                ctx.add(&format!(" style=\"{};\"", escape_html(&declarations.join("; "))));
            }

            // Self-closing tags
            if children.is_empty() && is_self_closing(tag) {
                ctx.add(" />");
                ctx.newline();
                return;
            }

            ctx.add(">");

            if has_element_children(children) {
                ctx.newline();
                ctx.indent();
                for child in children {
                    write_node(child, ctx);
                }
                ctx.dedent();
                if ctx.options.pretty {
                    ctx.add_indent();
                }
            } else {
                // Text-only children stay on the tag's line
                for child in children {
                    write_inline(child, ctx);
                }
            }

            ctx.add(&format!("</{}>", tag));
            ctx.newline();
        }

        VNode::Text { content } => {
            ctx.add_line(&escape_html(content));
        }

        VNode::Comment { content } => {
            ctx.add_line(&format!("<!-- {} -->", escape_comment(content)));
        }
    }
}

fn write_inline(node: &VNode, ctx: &mut Context) {
    match node {
        VNode::Text { content } => ctx.add(&escape_html(content)),
        VNode::Comment { content } => ctx.add(&format!("<!-- {} -->", escape_comment(content))),
        VNode::Element { .. } => write_node(node, ctx),
    }
}

pub(crate) fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn escape_comment(text: &str) -> String {
    text.replace("--", "- -")
}

fn is_self_closing(tag: &str) -> bool {
    matches!(
        tag,
        "img"
            | "input"
            | "br"
            | "hr"
            | "meta"
            | "link"
            | "area"
            | "base"
            | "col"
            | "embed"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

fn has_element_children(children: &[VNode]) -> bool {
    children
        .iter()
        .any(|child| matches!(child, VNode::Element { .. }))
}
