//! Integration tests for style extraction.

use serde_json::{json, Value};

use figstyle::model::{AutoLayout, LayoutMode, TextMetric};
use figstyle::{
    extract_styles, style_response, DocumentSnapshot, Error, ExtractOptions, ExtractionStats,
    JsonFormat, Node, NodeType, Paint, StyleExtractor, TextProperties, Variable,
};

const CARD_SNAPSHOT: &str = r##"{
    "document": {
        "id": "0:1", "name": "Page 1", "type": "PAGE",
        "children": [{
            "id": "1:2", "name": "Card", "type": "FRAME",
            "x": 0, "y": 0, "width": 200.4, "height": 99.6,
            "fills": [{"type": "SOLID", "color": {"r": 1, "g": 0, "b": 0}, "opacity": 1}],
            "layoutMode": "HORIZONTAL", "itemSpacing": 8,
            "children": [{
                "id": "1:3", "name": "Label", "type": "TEXT",
                "x": 0, "y": 0, "width": 20, "height": 17,
                "characters": "Hi", "fontSize": 14,
                "fontName": {"family": "Inter", "style": "Regular"},
                "lineHeight": {"unit": "AUTO"},
                "letterSpacing": {"value": 0, "unit": "PIXELS"},
                "textAlignHorizontal": "LEFT", "textAlignVertical": "TOP",
                "textDecoration": "NONE", "textCase": "ORIGINAL"
            }]
        }]
    },
    "variables": {
        "VariableID:1": {"id": "VariableID:1", "name": "color/primary", "resolvedType": "COLOR"}
    }
}"##;

fn styles_json(snapshot: &DocumentSnapshot, id: &str) -> Value {
    let record = extract_styles(snapshot, id).unwrap();
    serde_json::to_value(&record).unwrap()
}

#[test]
fn test_frame_with_text_child() {
    let snapshot = DocumentSnapshot::from_json(CARD_SNAPSHOT).unwrap();
    let value = styles_json(&snapshot, "1:2");

    assert_eq!(value["type"], "FRAME");
    assert_eq!(value["width"], 200);
    assert_eq!(value["height"], 100);
    assert_eq!(
        value["fills"],
        json!([{"type": "solid", "color": "#ff0000", "opacity": 1}])
    );
    assert_eq!(value["layout"]["direction"], "row");
    assert_eq!(value["layout"]["gap"], 8);
    assert_eq!(
        value["layout"]["padding"],
        json!({"top": 0, "right": 0, "bottom": 0, "left": 0})
    );

    let children = value["children"].as_array().unwrap();
    assert_eq!(children.len(), 1);
    let text = &children[0]["text"];
    assert_eq!(text["content"], "Hi");
    assert_eq!(text["fontSize"], 14);
    assert_eq!(text["fontFamily"], "Inter");
    assert_eq!(text["fontWeight"], "Regular");
    assert_eq!(text["lineHeight"], Value::Null);
    assert_eq!(text["letterSpacing"], json!({"value": 0, "unit": "PIXELS"}));
    assert_eq!(text["textDecoration"], Value::Null);
    assert_eq!(text["textCase"], Value::Null);
}

#[test]
fn test_sparse_rectangle() {
    let snapshot = DocumentSnapshot::new(
        Node::new("0:1", "Page", NodeType::Page)
            .with_child(Node::new("2:1", "Box", NodeType::Rectangle).with_size(10.0, 10.0)),
    );
    let value = styles_json(&snapshot, "2:1");

    assert_eq!(
        value,
        json!({
            "id": "2:1", "name": "Box", "type": "RECTANGLE",
            "width": 10, "height": 10, "x": 0, "y": 0
        })
    );
}

#[test]
fn test_not_found_payload() {
    let snapshot = DocumentSnapshot::from_json(CARD_SNAPSHOT).unwrap();
    let response = style_response(&snapshot, "99:99", &ExtractOptions::default());

    assert!(!response.is_ok());
    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({"error": "Node not found: 99:99"})
    );
}

#[test]
fn test_depth_cap_stub() {
    let mut node = Node::new("n9", "Leaf", NodeType::Rectangle);
    for level in (0..9).rev() {
        node = Node::new(format!("n{}", level), format!("Level {}", level), NodeType::Frame)
            .with_child(node);
    }
    let snapshot = DocumentSnapshot::new(node);

    let value = styles_json(&snapshot, "n0");
    let mut cursor = &value;
    for _ in 0..8 {
        cursor = &cursor["children"][0];
    }
    assert_eq!(cursor["id"], "n8");
    assert!(cursor.get("truncated").is_none());

    let stub = &cursor["children"][0];
    assert_eq!(
        stub,
        &json!({"id": "n9", "name": "Leaf", "type": "RECTANGLE", "truncated": true})
    );
}

#[test]
fn test_hidden_layers_are_filtered_in_order() {
    let snapshot = DocumentSnapshot::new(
        Node::new("1", "Layers", NodeType::Rectangle)
            .with_fill(Paint::solid(figstyle::Color::rgb(1.0, 0.0, 0.0)))
            .with_fill(Paint::solid(figstyle::Color::rgb(0.0, 1.0, 0.0)).hidden())
            .with_fill(Paint::solid(figstyle::Color::rgb(0.0, 0.0, 1.0)).with_opacity(0.5)),
    );
    let value = styles_json(&snapshot, "1");

    assert_eq!(
        value["fills"],
        json!([
            {"type": "solid", "color": "#ff0000", "opacity": 1},
            {"type": "solid", "color": "#0000ff", "opacity": 0.5}
        ])
    );
}

#[test]
fn test_bound_variables_resolved() {
    let json = r#"{
        "document": {
            "id": "1:1", "name": "Button", "type": "FRAME",
            "boundVariables": {
                "fills": [{"type": "VARIABLE_ALIAS", "id": "VariableID:1"}],
                "itemSpacing": {"type": "VARIABLE_ALIAS", "id": "VariableID:2"},
                "paddingLeft": {"type": "VARIABLE_ALIAS", "id": "VariableID:404"}
            }
        },
        "variables": {
            "VariableID:1": {"id": "VariableID:1", "name": "color/primary"},
            "VariableID:2": {"id": "VariableID:2", "name": "space/sm"}
        }
    }"#;
    let snapshot = DocumentSnapshot::from_json(json).unwrap();
    let value = styles_json(&snapshot, "1:1");

    assert_eq!(
        value["boundVariables"],
        json!({"fills": "color/primary", "itemSpacing": "space/sm"})
    );
}

#[test]
fn test_vector_and_image_hints() {
    let snapshot = DocumentSnapshot::new(
        Node::new("1", "Root", NodeType::Frame)
            .with_child(Node::new("2", "Icon", NodeType::Vector))
            .with_child(
                Node::new("3", "Photo", NodeType::Rectangle).with_fill(Paint::image("FILL")),
            )
            .with_child(Node::new("4", "Badge", NodeType::Ellipse).with_fill(Paint::image("FIT"))),
    );
    let value = styles_json(&snapshot, "1");
    let children = value["children"].as_array().unwrap();

    assert_eq!(children[0]["isSvgCandidate"], true);
    assert_eq!(
        children[0]["exportHint"],
        "Use SVG export to get inline SVG code for this node"
    );

    assert_eq!(children[1]["hasImageFill"], true);
    assert_eq!(
        children[1]["exportHint"],
        "Use raw export to get this as PNG/SVG asset"
    );

    assert_eq!(children[2]["isSvgCandidate"], true);
    assert_eq!(children[2]["hasImageFill"], true);
    assert_eq!(
        children[2]["exportHint"],
        "Use raw export to get this as PNG/SVG asset"
    );
}

#[test]
fn test_extractor_without_hints() {
    let snapshot = DocumentSnapshot::new(Node::new("1", "Icon", NodeType::Star));
    let record = StyleExtractor::new(&snapshot)
        .with_hints(false)
        .extract("1")
        .unwrap();
    let style = record.as_node().unwrap();

    assert_eq!(style.is_svg_candidate, Some(true));
    assert!(style.export_hint.is_none());
}

#[test]
fn test_builder_model_matches_snapshot_json() {
    let built = DocumentSnapshot::new(
        Node::new("0:1", "Page 1", NodeType::Page).with_child(
            Node::new("1:2", "Card", NodeType::Frame)
                .with_size(200.4, 99.6)
                .with_fill(Paint::solid(figstyle::Color::rgb(1.0, 0.0, 0.0)).with_opacity(1.0))
                .with_auto_layout(AutoLayout::new(LayoutMode::Horizontal).with_spacing(8.0))
                .with_child(
                    Node::text(
                        "1:3",
                        "Label",
                        TextProperties::new("Hi", 14.0)
                            .with_font("Inter", "Regular")
                            .with_line_height(TextMetric::Auto)
                            .with_letter_spacing(TextMetric::Pixels(0.0)),
                    )
                    .with_size(20.0, 17.0),
                ),
        ),
    )
    .with_variable(Variable::new("VariableID:1", "color/primary"));
    let parsed = DocumentSnapshot::from_json(CARD_SNAPSHOT).unwrap();

    let a = styles_json(&built, "1:2");
    let b = styles_json(&parsed, "1:2");
    assert_eq!(a["fills"], b["fills"]);
    assert_eq!(a["layout"]["direction"], b["layout"]["direction"]);
    assert_eq!(a["children"][0]["text"]["content"], b["children"][0]["text"]["content"]);
}

#[test]
fn test_batch_keeps_order() {
    let snapshot = DocumentSnapshot::from_json(CARD_SNAPSHOT).unwrap();
    let results = StyleExtractor::new(&snapshot).extract_batch(&["1:3", "nope", "1:2", ""]);

    assert_eq!(results.len(), 4);
    assert_eq!(results[0].as_ref().unwrap().id(), "1:3");
    assert!(matches!(results[1], Err(Error::NodeNotFound(_))));
    assert_eq!(results[2].as_ref().unwrap().id(), "1:2");
    assert!(matches!(results[3], Err(Error::NoTarget)));
}

#[test]
fn test_sequential_batch_matches_parallel() {
    let snapshot = DocumentSnapshot::from_json(CARD_SNAPSHOT).unwrap();
    let ids = vec!["0:1".to_string(), "1:2".to_string(), "1:3".to_string()];

    let parallel = StyleExtractor::new(&snapshot).extract_batch(&ids);
    let sequential = StyleExtractor::new(&snapshot).sequential().extract_batch(&ids);

    for (a, b) in parallel.iter().zip(&sequential) {
        assert_eq!(a.as_ref().unwrap(), b.as_ref().unwrap());
    }
}

#[test]
fn test_stats_for_card() {
    let snapshot = DocumentSnapshot::from_json(CARD_SNAPSHOT).unwrap();
    let record = extract_styles(&snapshot, "0:1").unwrap();
    let stats = ExtractionStats::from_record(&record);

    assert_eq!(stats.node_count, 3);
    assert_eq!(stats.text_count, 1);
    assert_eq!(stats.truncated_count, 0);
    assert_eq!(stats.max_depth, 2);
}

#[test]
fn test_compact_json_output() {
    let snapshot = DocumentSnapshot::from_json(CARD_SNAPSHOT).unwrap();
    let record = extract_styles(&snapshot, "1:3").unwrap();
    let json = figstyle::to_json(&record, JsonFormat::Compact).unwrap();

    assert!(json.starts_with(r#"{"id":"1:3","name":"Label","type":"TEXT","width":20,"height":17"#));
    assert!(!json.contains('\n'));
}

#[test]
fn test_gradient_without_stops_omits_key() {
    let json = r#"{
        "document": {
            "id": "1:1", "name": "Sky", "type": "RECTANGLE",
            "fills": [
                {"type": "GRADIENT_LINEAR"},
                {"type": "GRADIENT_RADIAL", "gradientStops": []}
            ]
        }
    }"#;
    let snapshot = DocumentSnapshot::from_json(json).unwrap();
    let value = styles_json(&snapshot, "1:1");

    assert_eq!(
        value["fills"],
        json!([
            {"type": "linear-gradient"},
            {"type": "radial-gradient", "stops": []}
        ])
    );
}
