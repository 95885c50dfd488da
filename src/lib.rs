// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mermaid-bridge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mermaid bridge: typed canvas diagrams to Mermaid markup and back.
//!
//! The forward direction covers every dialect with an emitter (flowchart, sequence, class, state,
//! ER, Gantt). The reverse direction parses flowchart and sequence markup; the other dialects are
//! detected and rejected with [`format::mermaid::MermaidParseError::UnimplementedParser`].

pub mod format;
pub mod layout;
pub mod model;

pub use format::mermaid::{
    convert, convert_with_report, from_mermaid, Conversion, ConvertOptions, FlowDirection,
    MermaidExportError, MermaidParseError,
};
pub use model::{Diagram, DiagramKind, Edge, Node};
