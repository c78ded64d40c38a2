// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Blameview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use tracing::debug;

use crate::markup::ReportOutline;
use crate::model::{
    FilterKind, LayoutMetrics, ReportDocument, SessionId, Tab, TabChrome, TabId, TableId,
};

use super::header::HeaderPositionManager;
use super::labels::truncate_labels;
use super::loader::{Completion, FetchTicket, LoadError, SelectError, Selection, TabTableLoader};
use super::snapshot::ReportSnapshot;
use super::visibility::RowVisibilityController;

/// Page-level settings a session is built with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionOptions {
    pub metrics: LayoutMetrics,
    /// Start every table with its exclusion control active.
    pub hide_exclusions: bool,
    pub max_tab_label: usize,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            metrics: LayoutMetrics::default(),
            hide_exclusions: false,
            max_tab_label: 160,
        }
    }
}

/// All per-page state of one opened report: the document, the loader's activation and fetch
/// bookkeeping, and the filter wiring.
#[derive(Debug)]
pub struct ReportSession {
    session_id: SessionId,
    document: ReportDocument,
    loader: TabTableLoader,
    visibility: RowVisibilityController,
}

impl ReportSession {
    pub fn new(session_id: SessionId, outline: ReportOutline, options: &SessionOptions) -> Self {
        let metrics = options.metrics;
        let nav_bar_height = outline.has_nav_bar.then_some(metrics.nav_bar_height);
        let mut document = ReportDocument::new(metrics, nav_bar_height);
        let loader = TabTableLoader::new(options.hide_exclusions);

        let labels: Vec<String> = outline.tabs.iter().map(|tab| tab.label.clone()).collect();
        let labels = truncate_labels(&labels, options.max_tab_label);

        for (tab, label) in outline.tabs.into_iter().zip(labels) {
            let chrome = TabChrome {
                tab_bar_height: nav_bar_height.unwrap_or(0.0),
                toolbar_height: tab.has_toolbar.then_some(metrics.toolbar_height),
            };
            let mut pane = Tab::new(tab.tab_id, label, chrome).with_variants(tab.variants);
            for mut table in tab.tables {
                loader.prepare_table(&mut table);
                // First activation selects the variant to show.
                if pane.has_variant(table.table_id()) {
                    table.set_displayed(false);
                }
                pane.append_table(table);
            }
            document.push_tab(pane);
        }
        if let Some(first) = document.tabs().first().map(|tab| tab.tab_id().clone()) {
            document.set_active_tab(first);
        }

        let mut visibility = RowVisibilityController::default();
        visibility.wire_controls(&document);
        RowVisibilityController::reapply_all(&mut document);
        let pinned = HeaderPositionManager::adjust_all(&mut document);
        debug!(session = %session_id, tabs = document.tabs().len(), pinned, "report session ready");

        Self {
            session_id,
            document,
            loader,
            visibility,
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn document(&self) -> &ReportDocument {
        &self.document
    }

    pub fn loader(&self) -> &TabTableLoader {
        &self.loader
    }

    pub fn visibility(&self) -> &RowVisibilityController {
        &self.visibility
    }

    pub fn is_tab_activated(&self, tab_id: &TabId) -> bool {
        self.loader.is_activated(tab_id)
    }

    /// Shows a tab. The first time, this also selects its first variant.
    pub fn activate_tab(&mut self, tab_id: &TabId) -> Result<Option<Selection>, SelectError> {
        match self.loader.activate_tab(&mut self.document, tab_id)? {
            Some(first) => self.begin_selection(tab_id, &first).map(Some),
            None => Ok(None),
        }
    }

    pub fn begin_selection(
        &mut self,
        tab_id: &TabId,
        table_id: &TableId,
    ) -> Result<Selection, SelectError> {
        self.loader.begin_selection(&mut self.document, tab_id, table_id)
    }

    /// Selects the variant behind a `button-<tableId>` radio input.
    pub fn select_radio(&mut self, radio_id: &str) -> Result<Selection, SelectError> {
        let unknown = || SelectError::UnknownRadio(radio_id.to_owned());
        let table_id = TableId::from_radio_id(radio_id).ok_or_else(unknown)?;
        let tab_id = self
            .document
            .tab_for_table(&table_id)
            .map(|tab| tab.tab_id().clone())
            .ok_or_else(unknown)?;
        self.begin_selection(&tab_id, &table_id)
    }

    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        response: Result<String, LoadError>,
    ) -> Completion {
        self.loader
            .complete_fetch(&mut self.document, ticket, response, &mut self.visibility)
    }

    /// Clicks a filter control. Returns its new state, or `None` if the table has no such control.
    pub fn click_filter(&mut self, table_id: &TableId, kind: FilterKind) -> Option<bool> {
        self.visibility.click(&mut self.document, table_id, kind)
    }

    pub fn scroll_to(&mut self, offset: f64) -> f64 {
        self.document.scroll_to(offset)
    }

    pub fn snapshot(&self) -> ReportSnapshot {
        ReportSnapshot::capture(&self.session_id, &self.document, |tab_id| {
            self.loader.is_activated(tab_id)
        })
    }
}
