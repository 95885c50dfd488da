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
use crate::model::{Diagram, DiagramKind, Edge, ErAttribute, ErData};

/// Every relationship is drawn as exactly-one to zero-or-many.
pub const RELATIONSHIP: &str = "||--o{";

fn push_attribute(out: &mut String, attribute: &ErAttribute) {
    out.push_str(BLOCK_INDENT);
    out.push_str(&attribute.data_type);
    out.push(' ');
    out.push_str(&attribute.name);
    if let Some(key) = attribute.key {
        out.push(' ');
        out.push_str(key.marker());
    }
    out.push('\n');
}

/// Emit an `erDiagram` body.
///
/// One `<label> { ... }` block per entity, attributes written as `<type> <name>` plus a `PK`/`FK`
/// marker when keyed. Unkeyed attributes end at the name, without the trailing space an empty key
/// slot would leave. Relationships reference entities by label; edges whose endpoints do not
/// resolve are recorded in `report` and left out.
pub fn export_er(nodes: &[Typed<'_, ErData>], edges: &[Edge], report: &mut ExportReport) -> String {
    let mut out = String::new();
    out.push_str("erDiagram\n");

    for node in nodes {
        out.push_str(INDENT);
        out.push_str(node.label());
        out.push_str(" {\n");
        for attribute in &node.data.attributes {
            push_attribute(&mut out, attribute);
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
            report.skip_edge(edge, "entity relationship endpoint does not resolve");
            continue;
        };

        out.push_str(INDENT);
        out.push_str(source);
        out.push(' ');
        out.push_str(RELATIONSHIP);
        out.push(' ');
        out.push_str(target);
        out.push_str(" : \"");
        out.push_str(edge.label().unwrap_or_default());
        out.push_str("\"\n");
    }

    out
}

/// ER diagrams cannot be imported yet.
pub fn parse_er(_lines: &[MermaidLine<'_>]) -> Result<Diagram, MermaidParseError> {
    Err(MermaidParseError::UnimplementedParser {
        kind: DiagramKind::Er,
    })
}
