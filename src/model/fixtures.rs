// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mermaid-bridge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::edge::Edge;
use super::ids::{EdgeId, NodeId};
use super::node::{
    ClassData, ErAttribute, ErData, FlowchartData, GanttData, Node, NodeData, SequenceData,
    ShapeKind, StateData,
};

pub(crate) fn nid(value: &str) -> NodeId {
    NodeId::new(value).expect("node id")
}

pub(crate) fn eid(value: &str) -> EdgeId {
    EdgeId::new(value).expect("edge id")
}

pub(crate) fn edge(id: &str, source: &str, target: &str) -> Edge {
    Edge::new(eid(id), nid(source), nid(target))
}

pub(crate) fn flow_node(id: &str, label: &str, shape: ShapeKind) -> Node {
    Node::new(nid(id), label, NodeData::Flowchart(FlowchartData::default())).with_shape(shape)
}

pub(crate) fn seq_node(id: &str, label: &str, actor: bool) -> Node {
    Node::new(nid(id), label, NodeData::Sequence(SequenceData { actor }))
}

pub(crate) fn class_node(id: &str, label: &str, properties: &[&str], methods: &[&str]) -> Node {
    let data = ClassData {
        methods: methods.iter().map(|m| (*m).to_owned()).collect(),
        properties: properties.iter().map(|p| (*p).to_owned()).collect(),
        stereotype: None,
    };
    Node::new(nid(id), label, NodeData::Class(data))
}

pub(crate) fn state_node(id: &str, label: &str) -> Node {
    Node::new(nid(id), label, NodeData::State(StateData::default()))
}

pub(crate) fn er_node(id: &str, label: &str, attributes: Vec<ErAttribute>) -> Node {
    Node::new(nid(id), label, NodeData::Er(ErData { attributes }))
}

pub(crate) fn gantt_node(id: &str, label: &str, data: GanttData) -> Node {
    Node::new(nid(id), label, NodeData::Gantt(data))
}

/// `Start((Start)) --> Process[Process]` with a labelled edge.
pub(crate) fn flowchart_start_process() -> (Vec<Node>, Vec<Edge>) {
    let nodes = vec![
        flow_node("a", "Start", ShapeKind::Circle),
        flow_node("b", "Process", ShapeKind::Rectangle),
    ];
    let edges = vec![edge("e1", "a", "b").with_label("next")];
    (nodes, edges)
}
