// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mermaid-bridge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mermaid export and import for canvas diagrams.
//!
//! Export resolves the single [`DiagramKind`] of the node collection, narrows every node to its
//! kind-specific payload, runs that dialect's emitter and wraps the body in a ```` ```mermaid ````
//! fence. Import strips the fence, detects the dialect from the header line and hands the
//! remaining lines to that dialect's parser. Only flowchart and sequence markup can be imported.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::layout::assign_positions;
use crate::model::{
    resolve_diagram_kind, Diagram, DiagramKind, Edge, EdgeId, Id, Node, NodeData,
};

pub mod class;
pub mod er;
mod error;
pub mod flowchart;
pub mod gantt;
mod options;
pub mod sequence;
pub mod state;

pub use error::{MermaidExportError, MermaidParseError};
pub use options::{ConvertOptions, FlowDirection, ParseFlowDirectionError, DEFAULT_GANTT_TITLE};

pub const FENCE_OPEN: &str = "```mermaid";
pub const FENCE_CLOSE: &str = "```";

pub(crate) const INDENT: &str = "    ";
pub(crate) const BLOCK_INDENT: &str = "        ";

/// A node together with its payload, already narrowed to one diagram kind.
#[derive(Debug)]
pub struct Typed<'a, T> {
    pub node: &'a Node,
    pub data: &'a T,
}

impl<'a, T> Typed<'a, T> {
    pub fn id(&self) -> &'a str {
        self.node.id.as_str()
    }

    pub fn label(&self) -> &'a str {
        &self.node.label
    }
}

fn narrow<'a, T>(
    nodes: &'a [Node],
    project: impl Fn(&'a NodeData) -> Option<&'a T>,
) -> Vec<Typed<'a, T>> {
    nodes
        .iter()
        .filter_map(|node| project(&node.data).map(|data| Typed { node, data }))
        .collect()
}

/// Node id to label, first occurrence wins. Empty labels do not resolve.
pub(crate) fn label_index<'a, T>(nodes: &[Typed<'a, T>]) -> BTreeMap<&'a str, &'a str> {
    let mut index = BTreeMap::new();
    for node in nodes {
        if node.label().is_empty() {
            continue;
        }
        index.entry(node.id()).or_insert(node.label());
    }
    index
}

/// Edges an emitter dropped because an endpoint did not resolve to a node.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExportReport {
    skipped_edges: Vec<EdgeId>,
}

impl ExportReport {
    pub(crate) fn skip_edge(&mut self, edge: &Edge, reason: &'static str) {
        debug!(
            edge_id = %edge.id,
            source = %edge.source,
            target = %edge.target,
            reason,
            "skipping edge"
        );
        self.skipped_edges.push(edge.id.clone());
    }

    pub fn skipped_edges(&self) -> &[EdgeId] {
        &self.skipped_edges
    }
}

/// Fenced markup plus the ids of edges left out of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub markup: String,
    pub skipped_edges: Vec<EdgeId>,
}

/// Convert a homogeneous node/edge collection to fenced Mermaid markup.
///
/// Node order and edge order define emission order. Fails when `nodes` is empty, mixes diagram
/// kinds, or resolves to a kind without an emitter (architecture).
pub fn convert(
    nodes: &[Node],
    edges: &[Edge],
    options: &ConvertOptions,
) -> Result<String, MermaidExportError> {
    convert_with_report(nodes, edges, options).map(|conversion| conversion.markup)
}

/// Like [`convert`], but also reports which edges were dropped for unresolved endpoints.
pub fn convert_with_report(
    nodes: &[Node],
    edges: &[Edge],
    options: &ConvertOptions,
) -> Result<Conversion, MermaidExportError> {
    let kind = resolve_diagram_kind(nodes)?;
    debug!(%kind, nodes = nodes.len(), edges = edges.len(), "exporting diagram");

    let mut report = ExportReport::default();
    let body = match kind {
        DiagramKind::Flowchart => {
            let nodes = narrow(nodes, |data| match data {
                NodeData::Flowchart(inner) => Some(inner),
                _ => None,
            });
            flowchart::export_flowchart(&nodes, edges, options.direction)
        }
        DiagramKind::Sequence => {
            let nodes = narrow(nodes, |data| match data {
                NodeData::Sequence(inner) => Some(inner),
                _ => None,
            });
            sequence::export_sequence(&nodes, edges)
        }
        DiagramKind::Class => {
            let nodes = narrow(nodes, |data| match data {
                NodeData::Class(inner) => Some(inner),
                _ => None,
            });
            class::export_class(&nodes, edges, &mut report)
        }
        DiagramKind::State => {
            let nodes = narrow(nodes, |data| match data {
                NodeData::State(inner) => Some(inner),
                _ => None,
            });
            state::export_state(&nodes, edges)
        }
        DiagramKind::Er => {
            let nodes = narrow(nodes, |data| match data {
                NodeData::Er(inner) => Some(inner),
                _ => None,
            });
            er::export_er(&nodes, edges, &mut report)
        }
        DiagramKind::Gantt => {
            let nodes = narrow(nodes, |data| match data {
                NodeData::Gantt(inner) => Some(inner),
                _ => None,
            });
            gantt::export_gantt(&nodes, &options.gantt_title)
        }
        DiagramKind::Architecture => {
            return Err(MermaidExportError::UnsupportedDiagramType { kind });
        }
    };

    Ok(Conversion {
        markup: fence(&body),
        skipped_edges: report.skipped_edges,
    })
}

/// Wrap an emitter body in the three-part fence. A single trailing newline is dropped first.
pub fn fence(body: &str) -> String {
    let body = body.strip_suffix('\n').unwrap_or(body);
    [FENCE_OPEN, body, FENCE_CLOSE].join("\n")
}

fn fence_regex() -> &'static Regex {
    static FENCE: OnceLock<Regex> = OnceLock::new();
    FENCE.get_or_init(|| Regex::new(r"(?s)```mermaid\r?\n(.*?)```").expect("valid fence regex"))
}

/// Remove the first ```` ```mermaid ```` fence, keeping its content. Unfenced input is returned as is.
pub fn strip_fence(markup: &str) -> Cow<'_, str> {
    fence_regex().replace(markup, "$1")
}

/// One trimmed, non-empty input line with its 1-based line number in the unfenced text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MermaidLine<'a> {
    pub line_no: usize,
    pub text: &'a str,
}

fn significant_lines(content: &str) -> Vec<MermaidLine<'_>> {
    content
        .lines()
        .enumerate()
        .map(|(idx, raw)| MermaidLine {
            line_no: idx + 1,
            text: raw.trim(),
        })
        .filter(|line| !line.text.is_empty())
        .collect()
}

pub(crate) fn parse_id<T>(value: &str, line_no: usize) -> Result<Id<T>, MermaidParseError> {
    Id::new(value).map_err(|reason| MermaidParseError::InvalidId {
        line_no,
        value: value.to_owned(),
        reason,
    })
}

/// Detect the dialect from a header line by case-insensitive prefix.
pub fn detect_dialect(header: &str) -> Result<DiagramKind, MermaidParseError> {
    let lowered = header.trim().to_lowercase();
    const PREFIXES: [(&str, DiagramKind); 7] = [
        ("flowchart", DiagramKind::Flowchart),
        ("graph", DiagramKind::Flowchart),
        ("sequencediagram", DiagramKind::Sequence),
        ("classdiagram", DiagramKind::Class),
        ("statediagram", DiagramKind::State),
        ("erdiagram", DiagramKind::Er),
        ("gantt", DiagramKind::Gantt),
    ];

    PREFIXES
        .iter()
        .find(|(prefix, _)| lowered.starts_with(prefix))
        .map(|(_, kind)| *kind)
        .ok_or_else(|| MermaidParseError::UnsupportedDiagramType {
            header: header.trim().to_owned(),
        })
}

/// Parse fenced or bare Mermaid markup back into a node/edge collection.
///
/// Positions are synthesized by [`crate::layout`]; the markup carries none.
pub fn from_mermaid(markup: &str) -> Result<Diagram, MermaidParseError> {
    let content = strip_fence(markup);
    let lines = significant_lines(&content);
    let Some(header) = lines.first() else {
        return Err(MermaidParseError::EmptyDiagram);
    };

    let kind = detect_dialect(header.text)?;
    debug!(%kind, lines = lines.len(), "importing diagram");

    let body = &lines[1..];
    let mut diagram = match kind {
        DiagramKind::Flowchart => flowchart::parse_flowchart(body)?,
        DiagramKind::Sequence => sequence::parse_sequence(body)?,
        DiagramKind::Class => class::parse_class(body)?,
        DiagramKind::State => state::parse_state(body)?,
        DiagramKind::Er => er::parse_er(body)?,
        DiagramKind::Gantt => gantt::parse_gantt(body)?,
        DiagramKind::Architecture => {
            return Err(MermaidParseError::UnsupportedDiagramType {
                header: header.text.to_owned(),
            })
        }
    };

    assign_positions(kind, &mut diagram.nodes);
    Ok(diagram)
}
