// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mermaid-bridge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

pub const DEFAULT_GANTT_TITLE: &str = "Project Timeline";

/// Flowchart layout direction written into the `flowchart <dir>` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FlowDirection {
    #[default]
    TopBottom,
    BottomTop,
    LeftRight,
    RightLeft,
}

impl FlowDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TopBottom => "TB",
            Self::BottomTop => "BT",
            Self::LeftRight => "LR",
            Self::RightLeft => "RL",
        }
    }
}

impl fmt::Display for FlowDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFlowDirectionError {
    value: String,
}

impl fmt::Display for ParseFlowDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid flowchart direction: {} (expected TB/TD/BT/LR/RL)",
            self.value
        )
    }
}

impl std::error::Error for ParseFlowDirectionError {}

impl FromStr for FlowDirection {
    type Err = ParseFlowDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TB" | "TD" => Ok(Self::TopBottom),
            "BT" => Ok(Self::BottomTop),
            "LR" => Ok(Self::LeftRight),
            "RL" => Ok(Self::RightLeft),
            _ => Err(ParseFlowDirectionError {
                value: s.to_owned(),
            }),
        }
    }
}

/// Knobs for the forward direction. Each option only affects the dialect it names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    pub direction: FlowDirection,
    pub gantt_title: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            direction: FlowDirection::default(),
            gantt_title: DEFAULT_GANTT_TITLE.to_owned(),
        }
    }
}

impl ConvertOptions {
    pub fn with_direction(mut self, direction: FlowDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_gantt_title(mut self, title: impl Into<String>) -> Self {
        self.gantt_title = title.into();
        self
    }
}
