// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mermaid-bridge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ids::{EdgeId, NodeId};

/// Arrow head drawn at the target end of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    ArrowClosed,
    Diamond,
    /// Any marker the editor knows about but the converter does not distinguish.
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MarkerEnd {
    #[serde(rename = "type")]
    pub kind: MarkerKind,
}

impl MarkerEnd {
    pub fn new(kind: MarkerKind) -> Self {
        Self { kind }
    }
}

/// A directed connection between two nodes.
///
/// Endpoints are plain node ids and may dangle; emitters decide what to do with
/// unresolved references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub animated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker_end: Option<MarkerEnd>,
}

impl Edge {
    pub fn new(id: EdgeId, source: NodeId, target: NodeId) -> Self {
        Self {
            id,
            source,
            target,
            label: None,
            animated: false,
            marker_end: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    pub fn with_marker(mut self, kind: MarkerKind) -> Self {
        self.marker_end = Some(MarkerEnd::new(kind));
        self
    }

    /// The label, treating an empty string the same as no label.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref().filter(|label| !label.is_empty())
    }

    pub fn marker_kind(&self) -> Option<MarkerKind> {
        self.marker_end.map(|marker| marker.kind)
    }
}
