// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mermaid-bridge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A diagram is a flat collection of typed nodes plus the edges between them, exactly as the
//! canvas layer hands it over. Every node carries a kind-specific payload; a well-formed diagram
//! uses a single kind throughout.

pub mod diagram;
pub mod edge;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod ids;
pub mod node;

pub use diagram::{resolve_diagram_kind, Diagram, DiagramKind, DiagramKindError};
pub use edge::{Edge, MarkerEnd, MarkerKind};
pub use ids::{EdgeId, Id, IdError, NodeId};
pub use node::{
    ArchitectureData, ClassData, ErAttribute, ErData, FlowchartData, GanttData, KeyKind, Node,
    NodeData, NodeStyle, Position, SequenceData, ShapeKind, StateData,
};
