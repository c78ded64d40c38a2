// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Blameview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smallvec::SmallVec;
use smol_str::SmolStr;

use super::filter::{FilterKind, FilterState};
use super::ids::TableId;

/// Marker in the author cell that keeps a zero-count row visible.
pub const SPECIAL_AUTHOR_MARKER: char = '*';

/// Class of the header cell above the code column.
pub const CODE_COLUMN_CLASS: &str = "code-col";

/// One body row. Content never changes after insertion, so the filter inputs are derived once.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    cells: SmallVec<[SmolStr; 8]>,
    is_empty_line: bool,
    is_excluded_author: bool,
    hidden: bool,
}

impl Row {
    /// `code_column` comes from the header; without one the last cell holds the code.
    pub fn new<I, S>(cells: I, code_column: Option<usize>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        let cells: SmallVec<[SmolStr; 8]> = cells.into_iter().map(Into::into).collect();
        let is_empty_line = code_column
            .or_else(|| cells.len().checked_sub(1))
            .and_then(|idx| cells.get(idx))
            .is_some_and(|code| code.trim().is_empty());
        let is_excluded_author = match (cells.first(), cells.get(1)) {
            (Some(count), Some(author)) => {
                count.trim() == "0" && !author.contains(SPECIAL_AUTHOR_MARKER)
            }
            _ => false,
        };
        Self {
            cells,
            is_empty_line,
            is_excluded_author,
            hidden: false,
        }
    }

    pub fn cells(&self) -> &[SmolStr] {
        &self.cells
    }

    pub fn is_empty_line(&self) -> bool {
        self.is_empty_line
    }

    pub fn is_excluded_author(&self) -> bool {
        self.is_excluded_author
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub(crate) fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }
}

/// The sticky column-header row of a table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeaderRow {
    column_classes: Vec<String>,
    sticky_top: Option<f64>,
}

impl HeaderRow {
    pub fn new(column_classes: Vec<String>) -> Self {
        Self {
            column_classes,
            sticky_top: None,
        }
    }

    pub fn column_classes(&self) -> &[String] {
        &self.column_classes
    }

    /// Index of the code column, or the last column when no header is marked as code.
    pub fn code_column(&self) -> Option<usize> {
        self.column_classes
            .iter()
            .position(|class| class.split_ascii_whitespace().any(|c| c == CODE_COLUMN_CLASS))
            .or_else(|| self.column_classes.len().checked_sub(1))
    }

    pub fn sticky_top(&self) -> Option<f64> {
        self.sticky_top
    }

    pub(crate) fn set_sticky_top(&mut self, top: f64) {
        self.sticky_top = Some(top);
    }
}

/// A per-file blame table. Once inserted into a tab container it stays there for the session.
#[derive(Debug, Clone, PartialEq)]
pub struct BlameTable {
    table_id: TableId,
    header: Option<HeaderRow>,
    rows: Vec<Row>,
    filters: FilterState,
    colors_hidden: bool,
    displayed: bool,
}

impl BlameTable {
    pub fn new(
        table_id: TableId,
        header: Option<HeaderRow>,
        rows: Vec<Row>,
        filters: FilterState,
    ) -> Self {
        Self {
            table_id,
            header,
            rows,
            filters,
            colors_hidden: false,
            displayed: true,
        }
    }

    pub fn table_id(&self) -> &TableId {
        &self.table_id
    }

    pub(crate) fn set_table_id(&mut self, table_id: TableId) {
        self.table_id = table_id;
    }

    pub fn header(&self) -> Option<&HeaderRow> {
        self.header.as_ref()
    }

    pub(crate) fn header_mut(&mut self) -> Option<&mut HeaderRow> {
        self.header.as_mut()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub(crate) fn filters_mut(&mut self) -> &mut FilterState {
        &mut self.filters
    }

    pub fn colors_hidden(&self) -> bool {
        self.colors_hidden
    }

    pub fn is_displayed(&self) -> bool {
        self.displayed
    }

    pub(crate) fn set_displayed(&mut self, displayed: bool) {
        self.displayed = displayed;
    }

    pub fn visible_row_count(&self) -> usize {
        self.rows.iter().filter(|row| !row.is_hidden()).count()
    }

    /// Re-evaluates every row against this table's own filter state.
    pub(crate) fn apply_filters(&mut self) {
        let filters = self.filters;
        for row in &mut self.rows {
            row.set_hidden(filters.hides(row.is_empty_line(), row.is_excluded_author()));
        }
        self.colors_hidden = filters.is_active(FilterKind::HideColors);
    }
}
