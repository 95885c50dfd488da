// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mermaid-bridge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::diagram::DiagramKind;
use super::ids::NodeId;

/// Visual outline of a node. Only the flowchart dialect encodes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    #[default]
    Rectangle,
    Circle,
    Diamond,
    Hexagon,
    Parallelogram,
    Triangle,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NodeStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dash_array: Option<String>,
}

/// Canvas coordinates. Forward conversion ignores them; the reverse path synthesizes them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct FlowchartData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct SequenceData {
    #[serde(default)]
    pub actor: bool,
}

/// Class members are pre-formatted by the editor, visibility sigil included.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct ClassData {
    #[serde(default)]
    pub methods: Vec<String>,
    #[serde(default)]
    pub properties: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stereotype: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StateData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_action: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum KeyKind {
    Primary,
    Foreign,
}

impl KeyKind {
    pub fn marker(self) -> &'static str {
        match self {
            Self::Primary => "PK",
            Self::Foreign => "FK",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ErAttribute {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<KeyKind>,
}

impl ErAttribute {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            key: None,
        }
    }

    pub fn with_key(mut self, key: KeyKind) -> Self {
        self.key = Some(key);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct ErData {
    #[serde(default)]
    pub attributes: Vec<ErAttribute>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GanttData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<NodeId>>,
    /// Completion percentage, 0 to 100.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArchitectureData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technology: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scalability: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reliability: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_flow: Option<String>,
}

/// Kind-specific payload, tagged by the node's `type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodeData {
    Flowchart(FlowchartData),
    Sequence(SequenceData),
    Class(ClassData),
    State(StateData),
    Er(ErData),
    Gantt(GanttData),
    Architecture(ArchitectureData),
}

impl NodeData {
    pub fn kind(&self) -> DiagramKind {
        match self {
            Self::Flowchart(_) => DiagramKind::Flowchart,
            Self::Sequence(_) => DiagramKind::Sequence,
            Self::Class(_) => DiagramKind::Class,
            Self::State(_) => DiagramKind::State,
            Self::Er(_) => DiagramKind::Er,
            Self::Gantt(_) => DiagramKind::Gantt,
            Self::Architecture(_) => DiagramKind::Architecture,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Node {
    pub id: NodeId,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<ShapeKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<NodeStyle>,
    #[serde(default)]
    pub position: Position,
    #[serde(flatten)]
    pub data: NodeData,
}

impl Node {
    pub fn new(id: NodeId, label: impl Into<String>, data: NodeData) -> Self {
        Self {
            id,
            label: label.into(),
            description: None,
            shape: None,
            style: None,
            position: Position::default(),
            data,
        }
    }

    pub fn with_shape(mut self, shape: ShapeKind) -> Self {
        self.shape = Some(shape);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn kind(&self) -> DiagramKind {
        self.data.kind()
    }

    pub fn shape_or_default(&self) -> ShapeKind {
        self.shape.unwrap_or_default()
    }
}
