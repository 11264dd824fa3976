//! Behavioural properties of the document model

use serde_json::json;
use sitecraft_document::{Block, BlockId, BlockKind, Document, DocumentError};
use sitecraft_schema::create_block;

fn sample() -> Document {
    Document::from_blocks(
        BlockKind::palette()
            .into_iter()
            .map(create_block)
            .collect(),
    )
    .unwrap()
}

#[test]
fn test_operations_never_mutate_receiver() {
    let doc = sample();
    let snapshot = doc.clone();
    let first = doc.blocks[0].id.clone();

    let _ = doc.insert(create_block(BlockKind::Hero), Some(0)).unwrap();
    let _ = doc.reorder(0, 3).unwrap();
    let _ = doc.update_content(&first, "title", json!("Changed")).unwrap();
    let _ = doc.set_visible(&first, false).unwrap();
    let _ = doc.remove(&first);

    assert_eq!(doc, snapshot);
}

#[test]
fn test_swap_two_blocks() {
    let a = Block::new("A", BlockKind::Hero);
    let b = Block::new("B", BlockKind::About);
    let doc = Document::from_blocks(vec![a, b]).unwrap();

    let swapped = doc.reorder(0, 1).unwrap();
    let ids: Vec<_> = swapped.ids().into_iter().map(BlockId::as_str).collect();
    assert_eq!(ids, vec!["B", "A"]);
}

#[test]
fn test_reorder_keeps_relative_order_of_others() {
    let doc = sample();
    let moved = doc.reorder(1, 6).unwrap();

    let others_before: Vec<_> = doc
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != 1)
        .map(|(_, b)| b.id.clone())
        .collect();
    let others_after: Vec<_> = moved
        .iter()
        .filter(|b| b.id != doc.blocks[1].id)
        .map(|b| b.id.clone())
        .collect();

    assert_eq!(others_before, others_after);
    assert_eq!(moved.blocks[6].id, doc.blocks[1].id);
}

#[test]
fn test_failed_operations_report_precise_errors() {
    let doc = sample();
    let missing = BlockId::from("missing");

    assert!(matches!(
        doc.update_content(&missing, "title", json!("x")),
        Err(DocumentError::BlockNotFound(_))
    ));
    assert!(matches!(
        doc.set_visible(&missing, false),
        Err(DocumentError::BlockNotFound(_))
    ));
    assert!(matches!(
        doc.reorder(0, doc.len()),
        Err(DocumentError::IndexOutOfRange { .. })
    ));
    let existing = doc.blocks[0].clone();
    assert!(matches!(
        doc.insert(existing, None),
        Err(DocumentError::DuplicateBlockId(_))
    ));
}

#[test]
fn test_saved_payload_reloads_identically() {
    let doc = sample();
    let hidden = doc.blocks[2].id.clone();
    let doc = doc.set_visible(&hidden, false).unwrap();
    let reloaded = Document::from_json(&doc.to_json_pretty().unwrap()).unwrap();
    assert_eq!(reloaded, doc);
}
