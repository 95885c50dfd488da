// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mermaid-bridge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Synthesized node placement for imported diagrams.
//!
//! Mermaid markup carries no coordinates, so imported nodes are placed by insertion index:
//! sequence participants on one row, Gantt tasks in one column, everything else on a square-ish
//! grid. Coordinates are not preserved across an export/import round trip.

use crate::model::{DiagramKind, Node, Position};

pub const HORIZONTAL_SPACING: f64 = 200.0;
pub const VERTICAL_SPACING: f64 = 150.0;
pub const ORIGIN_OFFSET: f64 = 100.0;

/// Grid cell for `index` when `total` nodes are laid out in `ceil(sqrt(total))` columns.
pub fn grid_position(index: usize, total: usize) -> Position {
    let columns = grid_columns(total);
    let col = index % columns;
    let row = index / columns;
    Position::new(
        col as f64 * HORIZONTAL_SPACING + ORIGIN_OFFSET,
        row as f64 * VERTICAL_SPACING + ORIGIN_OFFSET,
    )
}

fn grid_columns(total: usize) -> usize {
    let mut columns = 1usize;
    while columns.saturating_mul(columns) < total {
        columns += 1;
    }
    columns
}

pub fn node_position(kind: DiagramKind, index: usize, total: usize) -> Position {
    match kind {
        DiagramKind::Sequence => {
            Position::new(index as f64 * HORIZONTAL_SPACING + ORIGIN_OFFSET, ORIGIN_OFFSET)
        }
        DiagramKind::Gantt => {
            Position::new(ORIGIN_OFFSET, index as f64 * VERTICAL_SPACING + ORIGIN_OFFSET)
        }
        _ => grid_position(index, total),
    }
}

/// Overwrite every node's position according to its index in `nodes`.
pub fn assign_positions(kind: DiagramKind, nodes: &mut [Node]) {
    let total = nodes.len();
    for (index, node) in nodes.iter_mut().enumerate() {
        node.position = node_position(kind, index, total);
    }
}
