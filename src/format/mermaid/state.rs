// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mermaid-bridge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use tracing::debug;

use super::{MermaidLine, MermaidParseError, Typed, BLOCK_INDENT, INDENT};
use crate::model::{Diagram, DiagramKind, Edge, StateData};

pub const PSEUDO_STATE: &str = "[*]";

/// Role a state node plays, inferred from its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateRole {
    Initial,
    Final,
    Regular,
}

impl StateRole {
    pub fn from_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case("initial") {
            Self::Initial
        } else if label.eq_ignore_ascii_case("final") {
            Self::Final
        } else {
            Self::Regular
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

fn push_state_declaration(out: &mut String, node: &Typed<'_, StateData>) {
    out.push_str(INDENT);
    out.push_str("state ");
    out.push_str(node.label());

    let description = non_empty(node.node.description.as_deref());
    let entry = non_empty(node.data.entry_action.as_deref());
    let exit = non_empty(node.data.exit_action.as_deref());
    if description.is_none() && entry.is_none() && exit.is_none() {
        out.push('\n');
        return;
    }

    out.push_str(" {\n");
    for (prefix, value) in [("description: ", description), ("entry/ ", entry), ("exit/ ", exit)] {
        if let Some(value) = value {
            out.push_str(BLOCK_INDENT);
            out.push_str(prefix);
            out.push_str(value);
            out.push('\n');
        }
    }
    out.push_str(INDENT);
    out.push_str("}\n");
}

/// Emit a `stateDiagram-v2` body.
///
/// A node labelled `initial` (any case) becomes `[*] --> <target>` using its first outgoing
/// edge; a node labelled `final` becomes `<source> --> [*]` using its first incoming edge. When no
/// such edge exists the pseudo-transition is omitted. Every other node is declared with
/// `state <label>` plus an optional block of description, entry and exit actions.
///
/// Transitions are then emitted for every edge whose endpoints are not the literal `[*]`, by node
/// id. Edges already used for a pseudo-transition are emitted again as plain transitions.
pub fn export_state(nodes: &[Typed<'_, StateData>], edges: &[Edge]) -> String {
    let mut out = String::new();
    out.push_str("stateDiagram-v2\n");

    for node in nodes {
        match StateRole::from_label(node.label()) {
            StateRole::Initial => {
                match edges.iter().find(|edge| edge.source.as_str() == node.id()) {
                    Some(edge) => {
                        out.push_str(INDENT);
                        out.push_str(PSEUDO_STATE);
                        out.push_str(" --> ");
                        out.push_str(edge.target.as_str());
                        out.push('\n');
                    }
                    None => debug!(node_id = node.id(), "initial state has no outgoing edge"),
                }
            }
            StateRole::Final => {
                match edges.iter().find(|edge| edge.target.as_str() == node.id()) {
                    Some(edge) => {
                        out.push_str(INDENT);
                        out.push_str(edge.source.as_str());
                        out.push_str(" --> ");
                        out.push_str(PSEUDO_STATE);
                        out.push('\n');
                    }
                    None => debug!(node_id = node.id(), "final state has no incoming edge"),
                }
            }
            StateRole::Regular => push_state_declaration(&mut out, node),
        }
    }

    for edge in edges {
        if edge.source.as_str() == PSEUDO_STATE || edge.target.as_str() == PSEUDO_STATE {
            continue;
        }
        out.push_str(INDENT);
        out.push_str(edge.source.as_str());
        out.push_str(" --> ");
        out.push_str(edge.target.as_str());
        if let Some(label) = edge.label() {
            out.push_str(": ");
            out.push_str(label);
        }
        out.push('\n');
    }

    out
}

/// State diagrams cannot be imported yet.
pub fn parse_state(_lines: &[MermaidLine<'_>]) -> Result<Diagram, MermaidParseError> {
    Err(MermaidParseError::UnimplementedParser {
        kind: DiagramKind::State,
    })
}
