// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mermaid-bridge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Diagram text formats.
//!
//! Mermaid is the only one so far.

pub mod mermaid;
