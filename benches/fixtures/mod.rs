// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mermaid-bridge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use mermaid_bridge::model::{
    ClassData, Diagram, Edge, EdgeId, ErAttribute, ErData, FlowchartData, GanttData, KeyKind,
    MarkerKind, Node, NodeData, NodeId, SequenceData, ShapeKind, StateData,
};

#[derive(Debug, Clone, Copy)]
pub enum Case {
    Small,
    Medium,
    LargeLongLabels,
}

impl Case {
    pub const ALL: [Case; 3] = [Case::Small, Case::Medium, Case::LargeLongLabels];

    pub fn id(self) -> &'static str {
        match self {
            Case::Small => "small",
            Case::Medium => "medium",
            Case::LargeLongLabels => "large_long_labels",
        }
    }

    fn node_count(self) -> usize {
        match self {
            Case::Small => 8,
            Case::Medium => 64,
            Case::LargeLongLabels => 512,
        }
    }

    fn label_len(self) -> usize {
        match self {
            Case::Small | Case::Medium => 12,
            Case::LargeLongLabels => 96,
        }
    }
}

fn ascii_repeat_to_len(prefix: &str, fill: char, target_len: usize) -> String {
    if prefix.len() >= target_len {
        return prefix[..target_len].to_owned();
    }

    let mut out = String::with_capacity(target_len);
    out.push_str(prefix);
    while out.len() < target_len {
        out.push(fill);
    }
    out
}

fn node_id(idx: usize) -> NodeId {
    NodeId::new(format!("n{idx}")).expect("valid node id")
}

fn edge_id(idx: usize) -> EdgeId {
    EdgeId::new(format!("e{idx}")).expect("valid edge id")
}

fn label(case: Case, idx: usize) -> String {
    ascii_repeat_to_len(&format!("Node{idx}"), 'x', case.label_len())
}

/// Chain every node to its successor, plus a skip edge every third node.
fn chain_edges(case: Case) -> Vec<Edge> {
    let n = case.node_count();
    let mut edges = Vec::new();
    for idx in 1..n {
        let marker = if idx % 2 == 0 {
            MarkerKind::ArrowClosed
        } else {
            MarkerKind::Diamond
        };
        let edge = Edge::new(edge_id(edges.len()), node_id(idx - 1), node_id(idx))
            .with_label(format!("step {idx}"))
            .with_animated(idx % 4 == 0)
            .with_marker(marker);
        edges.push(edge);
        if idx % 3 == 0 {
            edges.push(Edge::new(edge_id(edges.len()), node_id(idx - 3), node_id(idx)));
        }
    }
    edges
}

fn diagram(case: Case, data: impl Fn(usize) -> NodeData) -> Diagram {
    let nodes = (0..case.node_count())
        .map(|idx| Node::new(node_id(idx), label(case, idx), data(idx)))
        .collect();
    Diagram::new(nodes, chain_edges(case))
}

pub fn flowchart(case: Case) -> Diagram {
    const SHAPES: [ShapeKind; 6] = [
        ShapeKind::Rectangle,
        ShapeKind::Circle,
        ShapeKind::Diamond,
        ShapeKind::Hexagon,
        ShapeKind::Parallelogram,
        ShapeKind::Triangle,
    ];
    let mut diagram = diagram(case, |_| NodeData::Flowchart(FlowchartData::default()));
    for (idx, node) in diagram.nodes.iter_mut().enumerate() {
        node.shape = Some(SHAPES[idx % SHAPES.len()]);
    }
    diagram
}

pub fn sequence(case: Case) -> Diagram {
    diagram(case, |idx| NodeData::Sequence(SequenceData { actor: idx % 5 == 0 }))
}

pub fn class(case: Case) -> Diagram {
    diagram(case, |idx| {
        NodeData::Class(ClassData {
            methods: vec![format!("+ method{idx}(): void")],
            properties: vec![format!("- field{idx}: string"), "- id: int".to_owned()],
            stereotype: None,
        })
    })
}

pub fn state(case: Case) -> Diagram {
    diagram(case, |idx| {
        NodeData::State(StateData {
            entry_action: (idx % 2 == 0).then(|| format!("enter{idx}()")),
            exit_action: None,
        })
    })
}

pub fn er(case: Case) -> Diagram {
    diagram(case, |idx| {
        NodeData::Er(ErData {
            attributes: vec![
                ErAttribute::new("id", "int").with_key(KeyKind::Primary),
                ErAttribute::new(format!("ref{idx}"), "int").with_key(KeyKind::Foreign),
                ErAttribute::new("name", "string"),
            ],
        })
    })
}

pub fn gantt(case: Case) -> Diagram {
    diagram(case, |idx| {
        NodeData::Gantt(GanttData {
            start_date: (idx % 3 == 0).then(|| "2024-01-01".to_owned()),
            end_date: (idx % 3 == 0).then(|| "2024-01-31".to_owned()),
            dependencies: (idx > 0).then(|| vec![node_id(idx / 4)]),
            progress: Some((idx * 10 % 110) as f64),
        })
    })
}

pub fn checksum_diagram(diagram: &Diagram) -> u64 {
    let mut acc = 0u64;
    for node in &diagram.nodes {
        acc = acc
            .wrapping_mul(131)
            .wrapping_add(node.id.as_str().len() as u64);
        acc = acc.wrapping_mul(131).wrapping_add(node.label.len() as u64);
    }
    for edge in &diagram.edges {
        acc = acc
            .wrapping_mul(131)
            .wrapping_add(edge.source.as_str().len() as u64);
        acc = acc
            .wrapping_mul(131)
            .wrapping_add(edge.target.as_str().len() as u64);
        acc = acc
            .wrapping_mul(131)
            .wrapping_add(edge.label().map_or(0, str::len) as u64);
    }
    acc
}
