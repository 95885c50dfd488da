// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mermaid-bridge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use indexmap::IndexMap;

use super::{MermaidLine, MermaidParseError, Typed, INDENT};
use crate::model::{Diagram, DiagramKind, GanttData};

pub const DATE_FORMAT: &str = "YYYY-MM-DD";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Done,
    Active,
    Pending,
}

impl TaskStatus {
    /// `100` is done, anything above zero is active, missing or zero is pending.
    pub fn from_progress(progress: Option<f64>) -> Self {
        match progress {
            Some(value) if value == 100.0 => Self::Done,
            Some(value) if value > 0.0 => Self::Active,
            _ => Self::Pending,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Done => "done",
            Self::Active => "active",
            Self::Pending => "pending",
        }
    }
}

/// Section key: dependency ids joined with `,` in their given order. No dependencies is `""`.
fn dependency_key(data: &GanttData) -> String {
    data.dependencies
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|id| id.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

fn push_task(out: &mut String, task: &Typed<'_, GanttData>, key: &str) {
    let status = TaskStatus::from_progress(task.data.progress);
    out.push_str(INDENT);
    out.push_str(task.label());
    out.push_str(": ");
    out.push_str(status.as_str());
    out.push_str(", ");

    let start = task.data.start_date.as_deref().filter(|date| !date.is_empty());
    let end = task.data.end_date.as_deref().filter(|date| !date.is_empty());
    match (start, end) {
        (Some(start), Some(end)) => {
            out.push_str(start);
            out.push_str(", ");
            out.push_str(end);
        }
        _ => {
            out.push_str("after ");
            out.push_str(if key.is_empty() { "start" } else { key });
        }
    }
    out.push('\n');
}

/// Emit a `gantt` body.
///
/// Tasks are grouped into sections by their joined dependency list, sections ordered by first
/// appearance. The key is compared verbatim, so `[a, b]` and `[b, a]` open different sections.
pub fn export_gantt(nodes: &[Typed<'_, GanttData>], title: &str) -> String {
    let mut sections: IndexMap<String, Vec<&Typed<'_, GanttData>>> = IndexMap::new();
    for node in nodes {
        sections.entry(dependency_key(node.data)).or_default().push(node);
    }

    let mut out = String::new();
    out.push_str("gantt\n");
    out.push_str(INDENT);
    out.push_str("dateFormat ");
    out.push_str(DATE_FORMAT);
    out.push('\n');
    out.push_str(INDENT);
    out.push_str("title ");
    out.push_str(title);
    out.push('\n');

    for (key, tasks) in &sections {
        out.push_str(INDENT);
        if key.is_empty() {
            out.push_str("section Start\n");
        } else {
            out.push_str("section After ");
            out.push_str(key);
            out.push('\n');
        }
        for task in tasks {
            push_task(&mut out, task, key);
        }
    }

    out
}

/// Gantt charts cannot be imported yet.
pub fn parse_gantt(_lines: &[MermaidLine<'_>]) -> Result<Diagram, MermaidParseError> {
    Err(MermaidParseError::UnimplementedParser {
        kind: DiagramKind::Gantt,
    })
}
