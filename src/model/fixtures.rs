// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Blameview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::document::{LayoutMetrics, ReportDocument, Tab, TabChrome, TableVariant};
use super::filter::{FilterKind, FilterState};
use super::ids::{TabId, TableId};
use super::table::{BlameTable, HeaderRow, Row};

fn tab_id(value: &str) -> TabId {
    TabId::new(value).expect("tab id")
}

pub(crate) fn table_id(value: &str) -> TableId {
    TableId::new(value).expect("table id")
}

pub(crate) fn blame_header() -> HeaderRow {
    HeaderRow::new(
        [
            "id_col",
            "author-col",
            "date-col",
            "message-col",
            "sha-col number-col",
            "commit-number-col number-col",
            "line-col number-col",
            "code-col",
        ]
        .into_iter()
        .map(str::to_owned)
        .collect(),
    )
}

pub(crate) fn all_controls() -> FilterState {
    FilterKind::ALL
        .into_iter()
        .fold(FilterState::default(), |state, kind| state.with_control(kind, false))
}

fn blame_row(count: &str, author: &str, code: &str) -> Row {
    Row::new([count, author, "2024-01-01", "msg", "abc123", "1", "1", code], Some(7))
}

/// A table of `rows` lines none of the filters touch.
pub(crate) fn blame_table(id: &str, rows: usize) -> BlameTable {
    let rows = (0..rows).map(|i| blame_row("1", "Alice", &format!("line {i}"))).collect();
    BlameTable::new(table_id(id), Some(blame_header()), rows, all_controls())
}

/// Bob's zero-count line followed by a starred author's empty line.
pub(crate) fn zero_author_and_empty_line_table(id: &str) -> BlameTable {
    let rows = vec![blame_row("0", "Bob", "int x=1;"), blame_row("5", "Alice*", "")];
    BlameTable::new(table_id(id), Some(blame_header()), rows, all_controls())
}

pub(crate) fn two_tab_document() -> ReportDocument {
    let metrics = LayoutMetrics::default();
    let mut doc = ReportDocument::new(metrics, Some(metrics.nav_bar_height));

    let chrome = TabChrome {
        tab_bar_height: metrics.nav_bar_height,
        toolbar_height: Some(metrics.toolbar_height),
    };
    doc.push_tab(Tab::new(tab_id("author-view"), "author view", chrome).with_variants(vec![
        TableVariant::new(table_id("f1.py"), "1"),
        TableVariant::new(table_id("f2.py"), "2"),
    ]));

    let chrome = TabChrome {
        tab_bar_height: metrics.nav_bar_height,
        toolbar_height: None,
    };
    doc.push_tab(
        Tab::new(tab_id("src_main_py"), "src/main.py", chrome)
            .with_variants(vec![TableVariant::new(table_id("file-1-sha-0"), "0")]),
    );

    doc
}
