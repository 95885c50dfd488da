// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mermaid-bridge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::edge::Edge;
use super::node::Node;

/// The type of diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DiagramKind {
    Flowchart,
    Sequence,
    Class,
    State,
    Er,
    Gantt,
    Architecture,
}

impl DiagramKind {
    pub const ALL: [DiagramKind; 7] = [
        Self::Flowchart,
        Self::Sequence,
        Self::Class,
        Self::State,
        Self::Er,
        Self::Gantt,
        Self::Architecture,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Flowchart => "flowchart",
            Self::Sequence => "sequence",
            Self::Class => "class",
            Self::State => "state",
            Self::Er => "er",
            Self::Gantt => "gantt",
            Self::Architecture => "architecture",
        }
    }
}

impl fmt::Display for DiagramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a node collection does not describe a single diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagramKindError {
    Empty,
    Mixed {
        first: DiagramKind,
        second: DiagramKind,
    },
}

impl fmt::Display for DiagramKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("no nodes provided"),
            Self::Mixed { first, second } => write!(
                f,
                "mixed diagram types are not supported (found {first} and {second})"
            ),
        }
    }
}

impl std::error::Error for DiagramKindError {}

/// Determine the single kind shared by every node.
///
/// `second` in [`DiagramKindError::Mixed`] is the first node kind (in input order)
/// that differs from the first node's kind.
pub fn resolve_diagram_kind(nodes: &[Node]) -> Result<DiagramKind, DiagramKindError> {
    let mut kinds = nodes.iter().map(Node::kind);
    let first = kinds.next().ok_or(DiagramKindError::Empty)?;
    match kinds.find(|kind| *kind != first) {
        Some(second) => Err(DiagramKindError::Mixed { first, second }),
        None => Ok(first),
    }
}

/// The node/edge collection exchanged with the canvas layer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Diagram {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl Diagram {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    pub fn kind(&self) -> Result<DiagramKind, DiagramKindError> {
        resolve_diagram_kind(&self.nodes)
    }

    pub fn node(&self, node_id: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id.as_str() == node_id)
    }
}
