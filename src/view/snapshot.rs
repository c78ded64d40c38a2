// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Blameview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::Serialize;

use crate::model::{BlameTable, FilterKind, ReportDocument, SessionId, Tab, TabId, TableId};

/// Serializable view of a session, printed by the command-line viewer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSnapshot {
    pub session_id: SessionId,
    pub active_tab: Option<TabId>,
    pub scroll_top: f64,
    pub total_height: f64,
    pub tabs: Vec<TabSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabSnapshot {
    pub tab_id: TabId,
    pub label: String,
    pub activated: bool,
    pub selected: Option<TableId>,
    pub displayed: Option<TableId>,
    pub toolbar_sticky_top: Option<f64>,
    pub tables: Vec<TableSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSnapshot {
    pub table_id: TableId,
    pub displayed: bool,
    pub total_rows: usize,
    pub visible_rows: usize,
    pub colors_hidden: bool,
    pub header_sticky_top: Option<f64>,
    pub controls: Vec<ControlSnapshot>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ControlSnapshot {
    pub kind: FilterKind,
    pub active: bool,
}

impl ReportSnapshot {
    pub(crate) fn capture(
        session_id: &SessionId,
        doc: &ReportDocument,
        activated: impl Fn(&TabId) -> bool,
    ) -> Self {
        Self {
            session_id: session_id.clone(),
            active_tab: doc.active_tab().cloned(),
            scroll_top: doc.scroll_top(),
            total_height: doc.total_height(),
            tabs: doc
                .tabs()
                .iter()
                .map(|tab| TabSnapshot::capture(tab, activated(tab.tab_id())))
                .collect(),
        }
    }

    pub fn tab(&self, tab_id: &TabId) -> Option<&TabSnapshot> {
        self.tabs.iter().find(|tab| &tab.tab_id == tab_id)
    }
}

impl TabSnapshot {
    fn capture(tab: &Tab, activated: bool) -> Self {
        Self {
            tab_id: tab.tab_id().clone(),
            label: tab.label().to_owned(),
            activated,
            selected: tab.selected().cloned(),
            displayed: tab.displayed_table().map(|table| table.table_id().clone()),
            toolbar_sticky_top: tab.toolbar_sticky_top(),
            tables: tab.tables().iter().map(TableSnapshot::capture).collect(),
        }
    }
}

impl TableSnapshot {
    fn capture(table: &BlameTable) -> Self {
        Self {
            table_id: table.table_id().clone(),
            displayed: table.is_displayed(),
            total_rows: table.rows().len(),
            visible_rows: table.visible_row_count(),
            colors_hidden: table.colors_hidden(),
            header_sticky_top: table.header().and_then(|header| header.sticky_top()),
            controls: table
                .filters()
                .controls()
                .map(|(kind, active)| ControlSnapshot { kind, active })
                .collect(),
        }
    }
}
