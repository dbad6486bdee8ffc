// tests/create_page_serialization.rs
//! Wire-shape tests for page-creation requests.
//!
//! These pin the serialized body to exactly what the create endpoint
//! accepts: optional keys omitted (never null), children in order, and the
//! observed property shapes.

use notion_pagewriter::{
    Block, DatabaseId, PageId, PageProperties, PageProperty, PageRequest, RichTextItem,
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn database_id() -> DatabaseId {
    DatabaseId::parse("550e8400-e29b-41d4-a716-446655440000").unwrap()
}

#[test]
fn missing_parent_omits_the_key_entirely() {
    let request = PageRequest::new(PageProperties::new().with_title("Name", "row"));
    let body = serde_json::to_value(&request).unwrap();

    let keys: Vec<&str> = body.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["properties"]);
}

#[test]
fn missing_children_never_serializes_null() {
    let request = PageRequest::new(PageProperties::new().with_title("Name", "row"))
        .in_database(database_id());
    let body = serde_json::to_string(&request).unwrap();
    assert!(!body.contains("children"));
    assert!(!body.contains("null"));
}

#[test]
fn full_request_matches_the_api_document_shape() {
    let request = PageRequest::new(
        PageProperties::new()
            .with_title("Imp Name", "Trial 1")
            .with_number("Crazy Number", 1234.0)
            .with_select("Options", "Option 1"),
    )
    .in_database(database_id());

    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({
            "parent": {
                "type": "database_id",
                "database_id": "550e8400e29b41d4a716446655440000"
            },
            "properties": {
                "Imp Name": {
                    "title": [{ "text": { "content": "Trial 1" } }]
                },
                "Crazy Number": { "number": 1234.0 },
                "Options": { "select": { "name": "Option 1" } }
            }
        })
    );
}

#[test]
fn page_parent_serializes_with_page_id_tag() {
    let page_id = PageId::parse("0e5f48abcd1a4d4f9200aaaaaaaaaaaa").unwrap();
    let request =
        PageRequest::new(PageProperties::new().with_title("Name", "row")).under_page(page_id);
    let body = serde_json::to_value(&request).unwrap();
    assert_eq!(body["parent"]["type"], "page_id");
}

#[test]
fn children_array_preserves_ordering_exactly() {
    let children = vec![
        Block::heading_1("Heading"),
        Block::paragraph("First paragraph"),
        Block::bulleted_list_item("Point one"),
        Block::bulleted_list_item("Point two"),
        Block::divider(),
        Block::paragraph("Closing"),
    ];
    let expected: Vec<Option<&str>> = children.iter().map(Block::block_type).collect();

    let request = PageRequest::new(PageProperties::new().with_title("Name", "row"))
        .in_database(database_id())
        .with_children(children);

    let body = serde_json::to_value(&request).unwrap();
    let serialized: Vec<Option<&str>> = body["children"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["type"].as_str())
        .collect();

    assert_eq!(serialized, expected);
}

#[test]
fn title_supports_multiple_ordered_segments() {
    let property = PageProperty::title_segments(vec![
        RichTextItem::plain_text("Trial "),
        RichTextItem::plain_text("1"),
    ]);
    assert_eq!(
        serde_json::to_value(&property).unwrap(),
        json!({
            "title": [
                { "text": { "content": "Trial " } },
                { "text": { "content": "1" } }
            ]
        })
    );
}

#[test]
fn serialization_round_trip_is_idempotent() {
    let request = PageRequest::new(
        PageProperties::new()
            .with_title("Imp Name", "Trial 1")
            .with_number("Crazy Number", 1234.0)
            .with_select("Options", "Option 1")
            .with("Extra", PageProperty::Other(json!({ "checkbox": true }))),
    )
    .in_database(database_id())
    .with_children(vec![
        Block::toggle("details").with_children(vec![Block::paragraph("inner")]),
        Block::to_do("task", true),
        Block::raw(json!({ "type": "child_database", "child_database": { "title": "t" } })),
    ]);

    let first = serde_json::to_string(&request).unwrap();
    let reparsed: PageRequest = serde_json::from_str(&first).unwrap();
    assert_eq!(reparsed, request);

    let second = serde_json::to_string(&reparsed).unwrap();
    assert_eq!(first, second);
}
