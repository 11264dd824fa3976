//! # Sitecraft Renderer
//!
//! Turns a [`Document`](sitecraft_document::Document) into something to look
//! at. There is one render function, parameterized by [`RenderMode`]:
//!
//! - **Edit**: the editor canvas. Every block, in document order, framed with
//!   selection and drag affordances. Hidden blocks stay on the canvas.
//! - **Preview**: the editor's preview toggle. Visible blocks only, no
//!   affordances.
//! - **Public**: the published page. Same filtering as preview.
//!
//! Output is a virtual node tree ([`VirtualPage`]) that the browser editor
//! can reconcile, or HTML via [`to_html`] / [`render_public_html`].
//!
//! The [`PropertyPanel`] renders one selected block as a form and turns
//! edits into field-granular [`FieldEdit`]s.
//!
//! Rendering never fails: unknown block types render a placeholder with the
//! block's name, and missing or malformed content falls back to defaults.

mod canvas;
mod html;
mod mode;
mod panel;
mod render;
mod sections;
mod vdom;

pub use canvas::{apply_drop, resolve_drop, CanvasAction};
pub use html::{render_public_html, to_html, HtmlOptions};
pub use mode::{RenderMode, RenderOptions};
pub use panel::{Control, FieldEdit, Input, PropertyPanel};
pub use render::{render, COMING_SOON_TEXT, COMING_SOON_TITLE, EMPTY_CANVAS_TEXT};
pub use vdom::{VNode, VirtualPage};
