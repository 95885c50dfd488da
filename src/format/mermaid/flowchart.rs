// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mermaid-bridge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::OnceLock;

use regex::Regex;

use super::{parse_id, FlowDirection, MermaidLine, MermaidParseError, Typed, INDENT};
use crate::model::{
    Diagram, Edge, FlowchartData, MarkerKind, Node, NodeData, NodeId, ShapeKind,
};

const ARROW: &str = "-->";
const ANIMATED_ARROW: &str = "-..->";

/// Opening and closing delimiters for each shape. Order matters when decoding: longer openers
/// must be tried before their one-character prefixes.
const SHAPE_DELIMITERS: [(&str, &str, ShapeKind); 6] = [
    ("((", "))", ShapeKind::Circle),
    ("{{", "}}", ShapeKind::Hexagon),
    ("[/", "/]", ShapeKind::Parallelogram),
    ("[\\", "\\]", ShapeKind::Triangle),
    ("{", "}", ShapeKind::Diamond),
    ("[", "]", ShapeKind::Rectangle),
];

fn shape_delimiters(shape: ShapeKind) -> (&'static str, &'static str) {
    match shape {
        ShapeKind::Rectangle => ("[", "]"),
        ShapeKind::Circle => ("((", "))"),
        ShapeKind::Diamond => ("{", "}"),
        ShapeKind::Hexagon => ("{{", "}}"),
        ShapeKind::Parallelogram => ("[/", "/]"),
        ShapeKind::Triangle => ("[\\", "\\]"),
    }
}

/// Emit a `flowchart` body.
///
/// Every node becomes `<id><open><label><close>` using its shape's delimiters; every edge becomes
/// `<source><arrow><target>` followed by `|<label>|` when labelled. Animated edges use the dotted
/// arrow. Edges are emitted even when their endpoints are not among `nodes`.
pub fn export_flowchart(
    nodes: &[Typed<'_, FlowchartData>],
    edges: &[Edge],
    direction: FlowDirection,
) -> String {
    let mut out = String::new();
    out.push_str("flowchart ");
    out.push_str(direction.as_str());
    out.push('\n');

    for node in nodes {
        let (open, close) = shape_delimiters(node.node.shape_or_default());
        out.push_str(INDENT);
        out.push_str(node.id());
        out.push_str(open);
        out.push_str(node.label());
        out.push_str(close);
        out.push('\n');
    }

    for edge in edges {
        out.push_str(INDENT);
        out.push_str(edge.source.as_str());
        out.push_str(if edge.animated { ANIMATED_ARROW } else { ARROW });
        out.push_str(edge.target.as_str());
        if let Some(label) = edge.label() {
            out.push('|');
            out.push_str(label);
            out.push('|');
        }
        out.push('\n');
    }

    out
}

fn node_regex() -> &'static Regex {
    static NODE: OnceLock<Regex> = OnceLock::new();
    NODE.get_or_init(|| {
        Regex::new(r"^(\w+)([\[\](){}<>].*[\[\](){}<>])").expect("valid flowchart node regex")
    })
}

fn edge_regex() -> &'static Regex {
    static EDGE: OnceLock<Regex> = OnceLock::new();
    EDGE.get_or_init(|| {
        Regex::new(
            r"^(\w+)\s*(-\.\.->|-\.->|--?-?[>x]|==?>)\s*(?:\|([^|]*)\|\s*)?(\w+)\s*(?:\|(.*?)\|)?",
        )
        .expect("valid flowchart edge regex")
    })
}

/// Split a delimited node token (`((Start))`, `{Ok?}`, ...) into shape and label.
///
/// Unknown delimiter pairs fall back to a rectangle with one character stripped from each end.
fn decode_shape(token: &str) -> (ShapeKind, &str) {
    for (open, close, shape) in SHAPE_DELIMITERS {
        if token.len() < open.len() + close.len() {
            continue;
        }
        if let Some(label) = token.strip_prefix(open).and_then(|rest| rest.strip_suffix(close)) {
            return (shape, label);
        }
    }

    let mut chars = token.chars();
    chars.next();
    chars.next_back();
    (ShapeKind::Rectangle, chars.as_str())
}

fn parse_edge(
    captures: &regex::Captures<'_>,
    line_no: usize,
) -> Result<Edge, MermaidParseError> {
    let source = &captures[1];
    let connector = &captures[2];
    let target = &captures[4];
    let label = captures
        .get(5)
        .or_else(|| captures.get(3))
        .map(|m| m.as_str().trim())
        .filter(|label| !label.is_empty());

    let mut edge = Edge::new(
        parse_id(&format!("{source}-{target}"), line_no)?,
        parse_id(source, line_no)?,
        parse_id(target, line_no)?,
    )
    .with_animated(connector.contains('.'))
    .with_marker(MarkerKind::ArrowClosed);
    if let Some(label) = label {
        edge = edge.with_label(label);
    }
    Ok(edge)
}

/// Parse the body lines of a `flowchart`/`graph` diagram (header already consumed).
///
/// Recognized per line:
/// - node declarations `<id><open><label><close>`, shape decoded from the delimiters
/// - edges `<source><arrow><target>` with an optional `|label|` after the target or right after
///   the arrow; arrows are `-->`, `--->`, `->`, `--x`, `==>`, `-.->` and `-..->`
///
/// Anything else is ignored. Nodes only mentioned by edges are not created.
pub fn parse_flowchart(lines: &[MermaidLine<'_>]) -> Result<Diagram, MermaidParseError> {
    let mut diagram = Diagram::default();

    for line in lines {
        if let Some(captures) = node_regex().captures(line.text) {
            let id: NodeId = parse_id(&captures[1], line.line_no)?;
            let (shape, label) = decode_shape(&captures[2]);
            diagram.nodes.push(
                Node::new(id, label, NodeData::Flowchart(FlowchartData::default()))
                    .with_shape(shape),
            );
        }

        if let Some(captures) = edge_regex().captures(line.text) {
            diagram.edges.push(parse_edge(&captures, line.line_no)?);
        }
    }

    Ok(diagram)
}
