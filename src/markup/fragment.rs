// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Blameview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Parsing of `/load-table` responses into blame tables.

use std::cell::RefCell;
use std::fmt;

use lol_html::{element, rewrite_str, text, RewriteStrSettings};
use smol_str::SmolStr;

use super::entities::decode_entities;
use crate::model::{
    BlameTable, FilterKind, FilterState, HeaderRow, Row, TableId, ACTIVE_MARKER_CLASS,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FragmentError {
    Rewrite(String),
    NoTable,
    MultipleTables(usize),
}

impl fmt::Display for FragmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rewrite(reason) => write!(f, "cannot parse table markup: {reason}"),
            Self::NoTable => f.write_str("fragment contains no table"),
            Self::MultipleTables(count) => {
                write!(f, "fragment contains {count} tables, expected exactly one")
            }
        }
    }
}

impl std::error::Error for FragmentError {}

/// Accumulates one `<table>` while the rewriter walks the markup in document order.
#[derive(Debug, Default)]
pub(crate) struct TableBuilder {
    id: Option<String>,
    has_header: bool,
    header_classes: Vec<String>,
    controls: Vec<(FilterKind, bool)>,
    rows: Vec<Vec<String>>,
}

impl TableBuilder {
    pub(crate) fn with_id(id: Option<String>) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub(crate) fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub(crate) fn start_header(&mut self) {
        self.has_header = true;
    }

    pub(crate) fn push_header_cell(&mut self, class_list: Option<String>) {
        self.header_classes.push(class_list.unwrap_or_default());
    }

    pub(crate) fn push_control(&mut self, class_list: &str) {
        if let Some(kind) = FilterKind::from_class_list(class_list) {
            let active = class_list.split_ascii_whitespace().any(|c| c == ACTIVE_MARKER_CLASS);
            self.controls.push((kind, active));
        }
    }

    pub(crate) fn start_row(&mut self) {
        self.rows.push(Vec::new());
    }

    pub(crate) fn start_cell(&mut self) {
        if self.rows.is_empty() {
            self.start_row();
        }
        if let Some(row) = self.rows.last_mut() {
            row.push(String::new());
        }
    }

    /// Raw text is kept as-is; references are decoded once the row is complete, so a chunk
    /// boundary inside `&nbsp;` is harmless.
    pub(crate) fn push_text(&mut self, raw: &str) {
        if let Some(cell) = self.rows.last_mut().and_then(|row| row.last_mut()) {
            cell.push_str(raw);
        }
    }

    pub(crate) fn finish(self, table_id: TableId) -> BlameTable {
        let header = self.has_header.then(|| HeaderRow::new(self.header_classes));
        let code_column = header.as_ref().and_then(HeaderRow::code_column);
        let rows = self
            .rows
            .iter()
            .map(|cells| {
                Row::new(cells.iter().map(|raw| SmolStr::new(decode_entities(raw))), code_column)
            })
            .collect();
        let filters = self
            .controls
            .into_iter()
            .fold(FilterState::default(), |state, (kind, active)| state.with_control(kind, active));
        BlameTable::new(table_id, header, rows, filters)
    }
}

/// Parses a response body that must hold exactly one table and assigns it `table_id`.
pub fn parse_table_fragment(html: &str, table_id: TableId) -> Result<BlameTable, FragmentError> {
    let tables = RefCell::new(0usize);
    let builder = RefCell::new(TableBuilder::default());

    rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers: vec![
                element!("table", |_el| {
                    *tables.borrow_mut() += 1;
                    Ok(())
                }),
                element!("thead", |_el| {
                    builder.borrow_mut().start_header();
                    Ok(())
                }),
                element!("thead th", |el| {
                    builder.borrow_mut().push_header_cell(el.get_attribute("class"));
                    Ok(())
                }),
                element!("thead button", |el| {
                    if let Some(class_list) = el.get_attribute("class") {
                        builder.borrow_mut().push_control(&class_list);
                    }
                    Ok(())
                }),
                element!("tbody tr", |_el| {
                    builder.borrow_mut().start_row();
                    Ok(())
                }),
                element!("tbody td", |_el| {
                    builder.borrow_mut().start_cell();
                    Ok(())
                }),
                text!("tbody td", |chunk| {
                    builder.borrow_mut().push_text(chunk.as_str());
                    Ok(())
                }),
            ],
            ..RewriteStrSettings::default()
        },
    )
    .map_err(|err| FragmentError::Rewrite(err.to_string()))?;

    match tables.into_inner() {
        0 => Err(FragmentError::NoTable),
        1 => Ok(builder.into_inner().finish(table_id)),
        count => Err(FragmentError::MultipleTables(count)),
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_table_fragment, FragmentError};
    use crate::model::{FilterKind, TableId};

    const FRAGMENT: &str = r#"<table id="file-0-sha-3"><thead class="sticky headerRow"><tr class="bg-th-green"><th class="id_col">ID</th><th class="author-col">Author</th><th class="line-col number-col">Line</th><th class="code-col">Code<button class="blame-exclusions-button pressed">Hide blame exclusions</button><button class="blame-empty-lines-button">Hide empty lines</button><button class="hide-colors-button">Hide colors</button></th></tr></thead><tbody><tr class="bg-white"><td class="id_col">0</td><td class="author-col">Bob</td><td class="line-col number-col">1</td><td class="code-col">int&nbsp;x=1;</td></tr><tr class="bg-author-light-green"><td class="id_col">5</td><td class="author-col">Alice*</td><td class="line-col number-col">2</td><td class="comment-col">&nbsp;</td></tr></tbody></table>"#;

    fn table_id(value: &str) -> TableId {
        TableId::new(value).unwrap()
    }

    #[test]
    fn parses_rows_header_and_controls() {
        let table = parse_table_fragment(FRAGMENT, table_id("f1.py")).unwrap();

        assert_eq!(table.table_id().as_str(), "f1.py");
        assert_eq!(table.header().and_then(|h| h.code_column()), Some(3));
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.rows()[0].cells()[3], "int\u{a0}x=1;");
        assert!(table.rows()[0].is_excluded_author());
        assert!(table.rows()[1].is_empty_line());
        assert!(!table.rows()[1].is_excluded_author());

        let filters = table.filters();
        assert!(filters.is_active(FilterKind::ExcludeZeroAuthorRows));
        assert!(filters.has_control(FilterKind::HideEmptyLines));
        assert!(!filters.is_active(FilterKind::HideEmptyLines));
        assert!(filters.has_control(FilterKind::HideColors));
    }

    #[test]
    fn empty_body_is_malformed() {
        assert_eq!(parse_table_fragment("", table_id("x")), Err(FragmentError::NoTable));
        assert_eq!(
            parse_table_fragment("<p>Invalid browser ID</p>", table_id("x")),
            Err(FragmentError::NoTable)
        );
    }

    #[test]
    fn two_tables_are_malformed() {
        let html = "<table></table><table></table>";
        assert_eq!(parse_table_fragment(html, table_id("x")), Err(FragmentError::MultipleTables(2)));
    }

    #[test]
    fn headerless_table_has_inactive_filters_and_last_column_code() {
        let html = "<table><tbody><tr><td>0</td><td>Bob</td><td></td></tr><tr><td>1</td><td>Ann</td><td>x</td></tr></tbody></table>";
        let table = parse_table_fragment(html, table_id("x")).unwrap();
        assert!(table.header().is_none());
        assert_eq!(table.filters().controls().count(), 0);
        assert!(table.rows()[0].is_empty_line());
        assert!(!table.rows()[1].is_empty_line());
    }
}
