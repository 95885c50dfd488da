// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mermaid-bridge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use crate::model::{DiagramKind, DiagramKindError, IdError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MermaidExportError {
    EmptyDiagram,
    MixedTypes {
        first: DiagramKind,
        second: DiagramKind,
    },
    UnsupportedDiagramType {
        kind: DiagramKind,
    },
}

impl fmt::Display for MermaidExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDiagram => f.write_str("no nodes provided"),
            Self::MixedTypes { first, second } => write!(
                f,
                "mixed diagram types are not supported (found {first} and {second})"
            ),
            Self::UnsupportedDiagramType { kind } => {
                write!(f, "unsupported diagram type: {kind}")
            }
        }
    }
}

impl std::error::Error for MermaidExportError {}

impl From<DiagramKindError> for MermaidExportError {
    fn from(err: DiagramKindError) -> Self {
        match err {
            DiagramKindError::Empty => Self::EmptyDiagram,
            DiagramKindError::Mixed { first, second } => Self::MixedTypes { first, second },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MermaidParseError {
    EmptyDiagram,
    UnsupportedDiagramType {
        header: String,
    },
    UnimplementedParser {
        kind: DiagramKind,
    },
    InvalidId {
        line_no: usize,
        value: String,
        reason: IdError,
    },
}

impl fmt::Display for MermaidParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDiagram => f.write_str("empty Mermaid diagram"),
            Self::UnsupportedDiagramType { header } => {
                write!(f, "unsupported diagram type: {header}")
            }
            Self::UnimplementedParser { kind } => {
                write!(f, "{kind} diagram parsing not implemented yet")
            }
            Self::InvalidId {
                line_no,
                value,
                reason,
            } => write!(f, "invalid id on line {line_no}: {value:?} ({reason})"),
        }
    }
}

impl std::error::Error for MermaidParseError {}

#[cfg(test)]
mod tests {
    use super::{MermaidExportError, MermaidParseError};
    use crate::model::{DiagramKind, DiagramKindError};

    #[test]
    fn kind_errors_map_onto_export_errors() {
        assert_eq!(
            MermaidExportError::from(DiagramKindError::Empty),
            MermaidExportError::EmptyDiagram
        );
        assert_eq!(
            MermaidExportError::from(DiagramKindError::Mixed {
                first: DiagramKind::Flowchart,
                second: DiagramKind::Sequence,
            }),
            MermaidExportError::MixedTypes {
                first: DiagramKind::Flowchart,
                second: DiagramKind::Sequence,
            }
        );
    }

    #[test]
    fn messages_name_the_offending_kind() {
        let err = MermaidExportError::MixedTypes {
            first: DiagramKind::Flowchart,
            second: DiagramKind::Sequence,
        };
        assert_eq!(
            err.to_string(),
            "mixed diagram types are not supported (found flowchart and sequence)"
        );

        let err = MermaidParseError::UnimplementedParser {
            kind: DiagramKind::Gantt,
        };
        assert_eq!(err.to_string(), "gantt diagram parsing not implemented yet");
    }
}
