// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Blameview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Deterministic report fixtures (no RNG): every row kind recurs on a fixed stride.

use blameview::markup::{ReportOutline, TabOutline};
use blameview::model::{
    BlameTable, FilterKind, FilterState, HeaderRow, Row, TabId, TableId, TableVariant,
};

#[derive(Debug, Clone, Copy)]
pub enum Case {
    Small,
    Medium,
    Large,
}

impl Case {
    pub fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    pub fn rows(self) -> usize {
        match self {
            Self::Small => 200,
            Self::Medium => 2_000,
            Self::Large => 20_000,
        }
    }

    pub fn tables(self) -> usize {
        match self {
            Self::Small => 2,
            Self::Medium => 8,
            Self::Large => 24,
        }
    }
}

const HEADER: &str = r#"<thead class="sticky headerRow"><tr><th class="id_col">ID</th><th class="author-col">Author</th><th class="date-col">Date</th><th class="line-col number-col">Line</th><th class="code-col">Code<button class="blame-exclusions-button">x</button><button class="blame-empty-lines-button">e</button><button class="hide-colors-button">c</button></th></tr></thead>"#;

fn cells(i: usize) -> [String; 5] {
    let count = if i % 7 == 0 { "0" } else { "3" };
    let author = if i % 11 == 0 { "Alice*" } else { "Bob" };
    let code = if i % 5 == 0 { "&nbsp;".to_owned() } else { format!("let v{i}&nbsp;=&nbsp;{i};") };
    [count.to_owned(), author.to_owned(), "2024-01-01".to_owned(), (i + 1).to_string(), code]
}

/// A `/load-table` response body with `rows` body rows.
pub fn fragment(rows: usize) -> String {
    let mut html = String::with_capacity(rows * 160);
    html.push_str("<table>");
    html.push_str(HEADER);
    html.push_str("<tbody>");
    for i in 0..rows {
        html.push_str("<tr>");
        for cell in cells(i) {
            html.push_str("<td>");
            html.push_str(&cell);
            html.push_str("</td>");
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");
    html
}

fn table(id: &str, rows: usize) -> BlameTable {
    let header = HeaderRow::new(
        ["id_col", "author-col", "date-col", "line-col number-col", "code-col"]
            .into_iter()
            .map(str::to_owned)
            .collect(),
    );
    let rows = (0..rows)
        .map(|i| Row::new(cells(i).map(|cell| cell.replace("&nbsp;", " ")), Some(4)))
        .collect();
    let filters = FilterKind::ALL
        .into_iter()
        .fold(FilterState::default(), |state, kind| state.with_control(kind, false));
    BlameTable::new(TableId::new(id).expect("table id"), Some(header), rows, filters)
}

/// One tab holding `case.tables()` embedded tables of `case.rows()` rows each.
pub fn outline(case: Case) -> ReportOutline {
    let tables: Vec<BlameTable> =
        (0..case.tables()).map(|i| table(&format!("file-{i}-sha-0"), case.rows())).collect();
    let variants = tables
        .iter()
        .map(|table| TableVariant::new(table.table_id().clone(), table.table_id().as_str()))
        .collect();
    ReportOutline {
        has_nav_bar: true,
        tabs: vec![TabOutline {
            tab_id: TabId::new("blame").expect("tab id"),
            label: "blame".to_owned(),
            has_toolbar: true,
            variants,
            tables,
        }],
    }
}
