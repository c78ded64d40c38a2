// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Blameview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{ReportDocument, Tab, TabChrome, TableId};

/// Sticky offsets for header rows and toolbars, stacked below the fixed navigation bar.
pub struct HeaderPositionManager;

impl HeaderPositionManager {
    pub fn header_top(chrome: &TabChrome) -> f64 {
        chrome.tab_bar_height + chrome.toolbar_height.unwrap_or(0.0)
    }

    /// Pins the tab's toolbar and the table's header row. Returns the header offset, or `None`
    /// when the table or its header row is missing.
    pub fn adjust(tab: &mut Tab, table_id: &TableId) -> Option<f64> {
        let chrome = *tab.chrome();
        tab.set_toolbar_sticky_top(chrome.toolbar_height.map(|_| chrome.tab_bar_height));

        let top = Self::header_top(&chrome);
        tab.table_mut(table_id)?.header_mut()?.set_sticky_top(top);
        Some(top)
    }

    /// Initial pass over every header row already in the page.
    pub fn adjust_all(doc: &mut ReportDocument) -> usize {
        let mut adjusted = 0;
        for tab in doc.tabs_mut() {
            let table_ids: Vec<TableId> =
                tab.tables().iter().map(|table| table.table_id().clone()).collect();
            adjusted += table_ids
                .iter()
                .filter(|table_id| Self::adjust(tab, table_id).is_some())
                .count();
        }
        adjusted
    }
}
