// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mermaid-bridge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::{
    label_index, ExportReport, MermaidLine, MermaidParseError, Typed, BLOCK_INDENT, INDENT,
};
use crate::model::{ClassData, Diagram, DiagramKind, Edge, MarkerKind};

/// How a class edge is drawn, derived from its end marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassRelation {
    Inheritance,
    Composition,
    Association,
}

impl ClassRelation {
    pub fn from_edge(edge: &Edge) -> Self {
        match edge.marker_kind() {
            Some(MarkerKind::ArrowClosed) => Self::Inheritance,
            Some(MarkerKind::Diamond) => Self::Composition,
            Some(MarkerKind::Other) | None => Self::Association,
        }
    }

    pub fn operator(self) -> &'static str {
        match self {
            Self::Inheritance => "--|>",
            Self::Composition => "*--",
            Self::Association => "-->",
        }
    }
}

/// Emit a `classDiagram` body.
///
/// One `class <label> { ... }` block per node with properties before methods, written verbatim.
/// Relationships reference classes by label; edges whose endpoints do not resolve are recorded in
/// `report` and left out.
pub fn export_class(
    nodes: &[Typed<'_, ClassData>],
    edges: &[Edge],
    report: &mut ExportReport,
) -> String {
    let mut out = String::new();
    out.push_str("classDiagram\n");

    for node in nodes {
        out.push_str(INDENT);
        out.push_str("class ");
        out.push_str(node.label());
        out.push_str(" {\n");
        for member in node.data.properties.iter().chain(&node.data.methods) {
            out.push_str(BLOCK_INDENT);
            out.push_str(member);
            out.push('\n');
        }
        out.push_str(INDENT);
        out.push_str("}\n");
    }

    let labels = label_index(nodes);
    for edge in edges {
        let (Some(source), Some(target)) = (
            labels.get(edge.source.as_str()),
            labels.get(edge.target.as_str()),
        ) else {
            report.skip_edge(edge, "class relationship endpoint does not resolve");
            continue;
        };

        out.push_str(INDENT);
        out.push_str(source);
        out.push(' ');
        out.push_str(ClassRelation::from_edge(edge).operator());
        out.push(' ');
        out.push_str(target);
        out.push('\n');
    }

    out
}

/// Class diagrams cannot be imported yet.
pub fn parse_class(_lines: &[MermaidLine<'_>]) -> Result<Diagram, MermaidParseError> {
    Err(MermaidParseError::UnimplementedParser {
        kind: DiagramKind::Class,
    })
}
