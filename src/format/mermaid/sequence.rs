// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mermaid-bridge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::OnceLock;

use regex::Regex;

use super::{parse_id, MermaidLine, MermaidParseError, Typed, INDENT};
use crate::model::{Diagram, Edge, MarkerKind, Node, NodeData, SequenceData};

/// Emit a `sequenceDiagram` body.
///
/// Participants are declared in node order (`actor` or `participant`, `<id> as <label>`), then one
/// `->>` message per edge in edge order. Edge order is the message order; nothing is sorted.
pub fn export_sequence(nodes: &[Typed<'_, SequenceData>], edges: &[Edge]) -> String {
    let mut out = String::new();
    out.push_str("sequenceDiagram\n");

    for node in nodes {
        out.push_str(INDENT);
        out.push_str(if node.data.actor { "actor" } else { "participant" });
        out.push(' ');
        out.push_str(node.id());
        out.push_str(" as ");
        out.push_str(node.label());
        out.push('\n');
    }

    for edge in edges {
        out.push_str(INDENT);
        out.push_str(edge.source.as_str());
        out.push_str("->>");
        out.push_str(edge.target.as_str());
        out.push_str(": ");
        out.push_str(edge.label().unwrap_or_default());
        out.push('\n');
    }

    out
}

fn participant_regex() -> &'static Regex {
    static PARTICIPANT: OnceLock<Regex> = OnceLock::new();
    PARTICIPANT.get_or_init(|| {
        Regex::new(r"^(participant|actor)\s+(\w+)(?:\s+as\s+(.+))?")
            .expect("valid participant regex")
    })
}

fn message_regex() -> &'static Regex {
    static MESSAGE: OnceLock<Regex> = OnceLock::new();
    MESSAGE.get_or_init(|| {
        Regex::new(r"^(\w+)(->>|-->|-)(\w+):(.+)?").expect("valid message regex")
    })
}

/// Parse the body lines of a `sequenceDiagram` (header already consumed).
///
/// The first pass collects `participant|actor <id> [as <label>]` declarations, the second pass
/// collects `<source><arrow><target>: <label>` messages with arrows `->>`, `-->` or `-`.
/// Participants only mentioned by messages are not created.
pub fn parse_sequence(lines: &[MermaidLine<'_>]) -> Result<Diagram, MermaidParseError> {
    let mut diagram = Diagram::default();

    for line in lines {
        let Some(captures) = participant_regex().captures(line.text) else {
            continue;
        };
        let id = parse_id(&captures[2], line.line_no)?;
        let label = captures
            .get(3)
            .map(|m| m.as_str().trim())
            .unwrap_or(&captures[2])
            .to_owned();
        let actor = &captures[1] == "actor";
        diagram
            .nodes
            .push(Node::new(id, label, NodeData::Sequence(SequenceData { actor })));
    }

    for line in lines {
        let Some(captures) = message_regex().captures(line.text) else {
            continue;
        };
        let source = &captures[1];
        let arrow = &captures[2];
        let target = &captures[3];
        let index = diagram.edges.len();

        let mut edge = Edge::new(
            parse_id(&format!("{source}-{target}-{index}"), line.line_no)?,
            parse_id(source, line.line_no)?,
            parse_id(target, line.line_no)?,
        )
        .with_animated(arrow.contains("--"))
        .with_marker(MarkerKind::ArrowClosed);
        if let Some(label) = captures
            .get(4)
            .map(|m| m.as_str().trim())
            .filter(|label| !label.is_empty())
        {
            edge = edge.with_label(label);
        }
        diagram.edges.push(edge);
    }

    Ok(diagram)
}
