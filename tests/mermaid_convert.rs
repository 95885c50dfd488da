// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mermaid-bridge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs;
use std::path::{Path, PathBuf};

use mermaid_bridge::format::mermaid::{
    convert, convert_with_report, from_mermaid, ConvertOptions, FlowDirection, MermaidParseError,
};
use mermaid_bridge::model::{Diagram, DiagramKind, NodeData, Position, ShapeKind};
use rstest::rstest;

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("mermaid_convert")
}

fn read_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    fs::read_to_string(&path).unwrap_or_else(|err| panic!("failed to read {path:?}: {err}"))
}

fn load_diagram(name: &str) -> Diagram {
    let raw = read_fixture(name);
    serde_json::from_str(&raw).unwrap_or_else(|err| panic!("failed to decode {name}: {err}"))
}

#[rstest]
#[case("flowchart_checkout", &[])]
#[case("sequence_login", &[])]
#[case("class_animals", &["r4"])]
#[case("state_order", &[])]
#[case("er_shop", &["rel2"])]
fn fixture_exports_match_expected_markup(#[case] name: &str, #[case] skipped: &[&str]) {
    let diagram = load_diagram(&format!("{name}.json"));
    let expected = read_fixture(&format!("{name}.mmd"));

    let conversion = convert_with_report(&diagram.nodes, &diagram.edges, &ConvertOptions::default())
        .unwrap_or_else(|err| panic!("expected {name} to convert, got error: {err}"));

    assert_eq!(conversion.markup, expected.trim_end_matches('\n'), "{name}");
    let skipped_ids = conversion
        .skipped_edges
        .iter()
        .map(|id| id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(skipped_ids, skipped, "{name}");
}

#[test]
fn gantt_fixture_uses_configured_title() {
    let diagram = load_diagram("gantt_release.json");
    let expected = read_fixture("gantt_release.mmd");
    let options = ConvertOptions::default().with_gantt_title("Release 1.0");

    let markup = convert(&diagram.nodes, &diagram.edges, &options).expect("convert gantt");

    assert_eq!(markup, expected.trim_end_matches('\n'));
}

#[test]
fn flowchart_direction_is_configurable() {
    let diagram = load_diagram("flowchart_checkout.json");
    let options = ConvertOptions::default().with_direction(FlowDirection::RightLeft);

    let markup = convert(&diagram.nodes, &diagram.edges, &options).expect("convert flowchart");

    assert!(markup.starts_with("```mermaid\nflowchart RL\n"), "got:\n{markup}");
}

#[test]
fn exported_flowchart_imports_back() {
    let diagram = load_diagram("flowchart_checkout.json");
    let markup = read_fixture("flowchart_checkout.mmd");

    let parsed = from_mermaid(&markup).expect("import flowchart");

    assert_eq!(parsed.kind(), Ok(DiagramKind::Flowchart));
    let view = |diagram: &Diagram| {
        diagram
            .nodes
            .iter()
            .map(|node| (node.id.to_string(), node.label.clone(), node.shape_or_default()))
            .collect::<Vec<_>>()
    };
    assert_eq!(view(&parsed), view(&diagram));

    let edges = parsed
        .edges
        .iter()
        .map(|edge| {
            (
                edge.source.as_str(),
                edge.target.as_str(),
                edge.label(),
                edge.animated,
            )
        })
        .collect::<Vec<_>>();
    assert_eq!(
        edges,
        vec![
            ("start", "cart", None, false),
            ("cart", "pay", Some("checkout"), false),
            ("pay", "cart", Some("retry"), true),
            ("pay", "done", None, false),
        ]
    );
}

#[test]
fn exported_sequence_imports_back_on_one_row() {
    let diagram = load_diagram("sequence_login.json");
    let markup = read_fixture("sequence_login.mmd");

    let parsed = from_mermaid(&markup).expect("import sequence");

    let participants = parsed
        .nodes
        .iter()
        .map(|node| match &node.data {
            NodeData::Sequence(data) => (node.id.as_str(), node.label.as_str(), data.actor),
            other => panic!("expected sequence node, got {other:?}"),
        })
        .collect::<Vec<_>>();
    assert_eq!(
        participants,
        vec![
            ("user", "User", true),
            ("web", "Web App", false),
            ("db", "Database", false)
        ]
    );
    assert_eq!(
        parsed.nodes.iter().map(|node| node.position).collect::<Vec<_>>(),
        vec![
            Position::new(100.0, 100.0),
            Position::new(300.0, 100.0),
            Position::new(500.0, 100.0)
        ]
    );

    assert_eq!(parsed.edges.len(), diagram.edges.len());
    assert_eq!(parsed.edges[0].label(), Some("login"));
    assert_eq!(parsed.edges[2].label(), None);
}

#[test]
fn handwritten_graph_is_imported_with_grid_positions() {
    let markup = read_fixture("graph_handwritten.mmd");

    let parsed = from_mermaid(&markup).expect("import graph");

    let nodes = parsed
        .nodes
        .iter()
        .map(|node| (node.id.as_str(), node.label.as_str(), node.shape_or_default()))
        .collect::<Vec<_>>();
    assert_eq!(
        nodes,
        vec![
            ("A", "Christmas", ShapeKind::Rectangle),
            ("B", "Go shopping", ShapeKind::Rectangle),
            ("C", "Let me think", ShapeKind::Diamond),
            ("D", "Laptop", ShapeKind::Circle),
            ("E", "Car", ShapeKind::Parallelogram),
        ]
    );
    assert_eq!(parsed.nodes[4].position, Position::new(300.0, 250.0));

    let edge_ids = parsed
        .edges
        .iter()
        .map(|edge| edge.id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(edge_ids, vec!["A-B", "B-C", "C-D", "C-E", "C-A"]);
    assert_eq!(parsed.edges[0].label(), Some("Get money"));
    assert!(parsed.edges[3].animated);
}

#[rstest]
#[case("class_animals.mmd", DiagramKind::Class)]
#[case("state_order.mmd", DiagramKind::State)]
#[case("er_shop.mmd", DiagramKind::Er)]
#[case("gantt_release.mmd", DiagramKind::Gantt)]
fn exported_markup_of_other_dialects_is_rejected_on_import(
    #[case] name: &str,
    #[case] kind: DiagramKind,
) {
    let markup = read_fixture(name);
    assert_eq!(
        from_mermaid(&markup),
        Err(MermaidParseError::UnimplementedParser { kind })
    );
}

#[test]
fn diagram_json_survives_a_serde_round_trip() {
    for name in [
        "flowchart_checkout.json",
        "sequence_login.json",
        "class_animals.json",
        "state_order.json",
        "er_shop.json",
        "gantt_release.json",
    ] {
        let diagram = load_diagram(name);
        let encoded = serde_json::to_string(&diagram).expect("encode diagram");
        let decoded: Diagram = serde_json::from_str(&encoded).expect("decode diagram");
        assert_eq!(decoded, diagram, "{name}");
    }
}
