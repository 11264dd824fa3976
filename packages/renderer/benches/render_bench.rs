use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sitecraft_document::Document;
use sitecraft_renderer::{render, render_public_html, HtmlOptions, RenderOptions};
use sitecraft_schema::{create_block, BlockKind};

fn landing_page(copies: usize) -> Document {
    let blocks = (0..copies)
        .flat_map(|_| BlockKind::palette())
        .map(create_block)
        .collect();
    Document::from_blocks(blocks).unwrap()
}

fn render_edit_canvas(c: &mut Criterion) {
    let doc = landing_page(1);
    let options = RenderOptions::edit();

    c.bench_function("render_edit_canvas", |b| {
        b.iter(|| render(black_box(&doc), black_box(&options)))
    });
}

fn render_public_page(c: &mut Criterion) {
    let doc = landing_page(1);
    let options = HtmlOptions::default();

    c.bench_function("render_public_page", |b| {
        b.iter(|| render_public_html(black_box(&doc), black_box(&options)))
    });
}

fn render_large_document(c: &mut Criterion) {
    let doc = landing_page(25);
    let options = RenderOptions::public();

    c.bench_function("render_large_document", |b| {
        b.iter(|| render(black_box(&doc), black_box(&options)))
    });
}

criterion_group!(
    benches,
    render_edit_canvas,
    render_public_page,
    render_large_document
);
criterion_main!(benches);
