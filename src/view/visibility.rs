// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Blameview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashSet;

use tracing::debug;

use crate::model::{FilterKind, ReportDocument, TabId, TableId};

use super::loader::TableInsertionHook;

/// Owns the click wiring of every filter control and re-evaluates row visibility.
#[derive(Debug, Default)]
pub struct RowVisibilityController {
    wired: HashSet<(TableId, FilterKind)>,
}

impl RowVisibilityController {
    /// Attaches a handler to each control that has none yet. Returns the number of new handlers.
    pub fn wire_controls(&mut self, doc: &ReportDocument) -> usize {
        let mut added = 0;
        for table in doc.tables() {
            for (kind, _) in table.filters().controls() {
                if self.wired.insert((table.table_id().clone(), kind)) {
                    added += 1;
                }
            }
        }
        if added > 0 {
            debug!(added, total = self.wired.len(), "wired filter controls");
        }
        added
    }

    pub fn is_wired(&self, table_id: &TableId, kind: FilterKind) -> bool {
        self.wired.contains(&(table_id.clone(), kind))
    }

    pub fn wired_count(&self) -> usize {
        self.wired.len()
    }

    /// Handles a click on one table's control: flips its marker, then re-evaluates every table.
    /// Returns the control's new state, or `None` when the control has no handler.
    pub fn click(
        &mut self,
        doc: &mut ReportDocument,
        table_id: &TableId,
        kind: FilterKind,
    ) -> Option<bool> {
        if !self.is_wired(table_id, kind) {
            return None;
        }
        let active = doc.table_mut(table_id)?.filters_mut().toggle(kind)?;
        Self::reapply_all(doc);
        Some(active)
    }

    /// Recomputes row visibility and color suppression for every table in the document, each
    /// against its own controls. Returns the number of hidden rows.
    pub fn reapply_all(doc: &mut ReportDocument) -> usize {
        let mut hidden = 0;
        for table in doc.tables_mut() {
            table.apply_filters();
            hidden += table.rows().len() - table.visible_row_count();
        }
        doc.scroll_to(doc.scroll_top());
        hidden
    }
}

impl TableInsertionHook for RowVisibilityController {
    fn table_inserted(&mut self, doc: &mut ReportDocument, _tab_id: &TabId, _table_id: &TableId) {
        self.wire_controls(doc);
        Self::reapply_all(doc);
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::RowVisibilityController;
    use crate::model::{fixtures, FilterKind, ReportDocument, TabId};

    fn document_with(tables: Vec<crate::model::BlameTable>) -> (ReportDocument, TabId) {
        let mut doc = fixtures::two_tab_document();
        let tab_id = doc.tabs()[0].tab_id().clone();
        let tab = doc.tab_mut(&tab_id).unwrap();
        for table in tables {
            tab.append_table(table);
        }
        (doc, tab_id)
    }

    fn visible(doc: &ReportDocument, tab_id: &TabId, table: &str) -> usize {
        doc.tab(tab_id)
            .and_then(|tab| tab.table(&fixtures::table_id(table)))
            .map_or(0, |table| table.visible_row_count())
    }

    #[test]
    fn wiring_is_idempotent() {
        let (doc, _) = document_with(vec![fixtures::blame_table("a", 2)]);
        let mut controller = RowVisibilityController::default();
        assert_eq!(controller.wire_controls(&doc), 3);
        assert_eq!(controller.wire_controls(&doc), 0);
        assert_eq!(controller.wired_count(), 3);
    }

    #[rstest]
    #[case(FilterKind::ExcludeZeroAuthorRows, 1)]
    #[case(FilterKind::HideEmptyLines, 1)]
    #[case(FilterKind::HideColors, 2)]
    fn single_toggle_hides_matching_rows(#[case] kind: FilterKind, #[case] expected: usize) {
        let (mut doc, tab_id) = document_with(vec![fixtures::zero_author_and_empty_line_table("a")]);
        let mut controller = RowVisibilityController::default();
        controller.wire_controls(&doc);

        assert_eq!(controller.click(&mut doc, &fixtures::table_id("a"), kind), Some(true));
        assert_eq!(visible(&doc, &tab_id, "a"), expected);
    }

    #[test]
    fn both_toggles_hide_both_rows_and_untoggling_restores_them() {
        let (mut doc, tab_id) = document_with(vec![fixtures::zero_author_and_empty_line_table("a")]);
        let mut controller = RowVisibilityController::default();
        controller.wire_controls(&doc);
        let a = fixtures::table_id("a");

        controller.click(&mut doc, &a, FilterKind::ExcludeZeroAuthorRows);
        controller.click(&mut doc, &a, FilterKind::HideEmptyLines);
        assert_eq!(visible(&doc, &tab_id, "a"), 0);

        controller.click(&mut doc, &a, FilterKind::ExcludeZeroAuthorRows);
        assert_eq!(visible(&doc, &tab_id, "a"), 1);
        controller.click(&mut doc, &a, FilterKind::HideEmptyLines);
        assert_eq!(visible(&doc, &tab_id, "a"), 2);
    }

    #[test]
    fn each_table_follows_its_own_controls() {
        let (mut doc, tab_id) = document_with(vec![
            fixtures::zero_author_and_empty_line_table("a"),
            fixtures::zero_author_and_empty_line_table("b"),
        ]);
        let mut controller = RowVisibilityController::default();
        controller.wire_controls(&doc);

        controller.click(&mut doc, &fixtures::table_id("a"), FilterKind::HideEmptyLines);
        assert_eq!(visible(&doc, &tab_id, "a"), 1);
        assert_eq!(visible(&doc, &tab_id, "b"), 2);
    }

    #[test]
    fn hide_colors_only_suppresses_coloring() {
        let (mut doc, tab_id) = document_with(vec![fixtures::zero_author_and_empty_line_table("a")]);
        let mut controller = RowVisibilityController::default();
        controller.wire_controls(&doc);

        controller.click(&mut doc, &fixtures::table_id("a"), FilterKind::HideColors);
        let table = doc.tab(&tab_id).unwrap().table(&fixtures::table_id("a")).unwrap();
        assert!(table.colors_hidden());
        assert_eq!(table.visible_row_count(), 2);
    }

    #[test]
    fn unwired_control_ignores_clicks() {
        let (mut doc, _) = document_with(vec![fixtures::zero_author_and_empty_line_table("a")]);
        let mut controller = RowVisibilityController::default();
        assert_eq!(
            controller.click(&mut doc, &fixtures::table_id("a"), FilterKind::HideEmptyLines),
            None
        );
    }

    #[test]
    fn zero_row_table_is_harmless() {
        let (mut doc, _) = document_with(vec![fixtures::blame_table("empty", 0)]);
        let mut controller = RowVisibilityController::default();
        controller.wire_controls(&doc);
        let clicked =
            controller.click(&mut doc, &fixtures::table_id("empty"), FilterKind::HideEmptyLines);
        assert_eq!(clicked, Some(true));
        assert_eq!(RowVisibilityController::reapply_all(&mut doc), 0);
    }
}
