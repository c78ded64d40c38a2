// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Blameview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Typed view-model of a rendered blame report.
//!
//! A document owns tabs; each tab owns a radio group of table variants and an append-only
//! container of the tables loaded so far.

pub mod document;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod filter;
pub mod ids;
pub mod table;

pub use document::{LayoutMetrics, ReportDocument, Tab, TabChrome, TableVariant};
pub use filter::{row_hidden, FilterKind, FilterState, UnknownFilterKind, ACTIVE_MARKER_CLASS};
pub use ids::{Id, IdError, SessionId, TabId, TableId, RADIO_ID_PREFIX};
pub use table::{BlameTable, HeaderRow, Row, CODE_COLUMN_CLASS, SPECIAL_AUTHOR_MARKER};
