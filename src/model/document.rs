// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Blameview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::ids::{TabId, TableId};
use super::table::BlameTable;

/// Pixel measurements a browser would take from the rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutMetrics {
    pub nav_bar_height: f64,
    pub toolbar_height: f64,
    pub header_row_height: f64,
    pub row_height: f64,
    pub page_chrome_height: f64,
    pub viewport_height: f64,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            nav_bar_height: 56.0,
            toolbar_height: 40.0,
            header_row_height: 28.0,
            row_height: 20.0,
            page_chrome_height: 0.0,
            viewport_height: 900.0,
        }
    }
}

/// Fixed chrome above a tab's tables, measured once when the tab is built.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TabChrome {
    pub tab_bar_height: f64,
    pub toolbar_height: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableVariant {
    table_id: TableId,
    label: String,
}

impl TableVariant {
    pub fn new(table_id: TableId, label: impl Into<String>) -> Self {
        Self {
            table_id,
            label: label.into(),
        }
    }

    pub fn table_id(&self) -> &TableId {
        &self.table_id
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// A tab pane: its radio variants plus the container that caches their tables.
#[derive(Debug, Clone, PartialEq)]
pub struct Tab {
    tab_id: TabId,
    label: String,
    chrome: TabChrome,
    variants: Vec<TableVariant>,
    container: Vec<BlameTable>,
    selected: Option<TableId>,
    toolbar_sticky_top: Option<f64>,
}

impl Tab {
    pub fn new(tab_id: TabId, label: impl Into<String>, chrome: TabChrome) -> Self {
        Self {
            tab_id,
            label: label.into(),
            chrome,
            variants: Vec::new(),
            container: Vec::new(),
            selected: None,
            toolbar_sticky_top: None,
        }
    }

    pub fn with_variants(mut self, variants: Vec<TableVariant>) -> Self {
        self.variants = variants;
        self
    }

    pub fn tab_id(&self) -> &TabId {
        &self.tab_id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub(crate) fn set_label(&mut self, label: String) {
        self.label = label;
    }

    pub fn chrome(&self) -> &TabChrome {
        &self.chrome
    }

    pub fn variants(&self) -> &[TableVariant] {
        &self.variants
    }

    pub fn has_variant(&self, table_id: &TableId) -> bool {
        self.variants.iter().any(|variant| variant.table_id() == table_id)
    }

    pub fn tables(&self) -> &[BlameTable] {
        &self.container
    }

    pub(crate) fn tables_mut(&mut self) -> &mut [BlameTable] {
        &mut self.container
    }

    pub fn table(&self, table_id: &TableId) -> Option<&BlameTable> {
        self.container.iter().find(|table| table.table_id() == table_id)
    }

    pub(crate) fn table_mut(&mut self, table_id: &TableId) -> Option<&mut BlameTable> {
        self.container.iter_mut().find(|table| table.table_id() == table_id)
    }

    /// Appends a table to the container. The cache is append-only, so an id that is already
    /// present is left untouched and `false` is returned.
    pub(crate) fn append_table(&mut self, table: BlameTable) -> bool {
        if self.table(table.table_id()).is_some() {
            return false;
        }
        self.container.push(table);
        true
    }

    pub fn selected(&self) -> Option<&TableId> {
        self.selected.as_ref()
    }

    pub(crate) fn set_selected(&mut self, table_id: Option<TableId>) {
        self.selected = table_id;
    }

    pub fn displayed_table(&self) -> Option<&BlameTable> {
        self.container.iter().find(|table| table.is_displayed())
    }

    pub(crate) fn hide_all_tables(&mut self) {
        for table in &mut self.container {
            table.set_displayed(false);
        }
    }

    pub fn toolbar_sticky_top(&self) -> Option<f64> {
        self.toolbar_sticky_top
    }

    pub(crate) fn set_toolbar_sticky_top(&mut self, top: Option<f64>) {
        self.toolbar_sticky_top = top;
    }

    fn content_height(&self, metrics: &LayoutMetrics) -> f64 {
        let tables: f64 = self
            .container
            .iter()
            .filter(|table| table.is_displayed())
            .map(|table| table_height(table, metrics))
            .sum();
        self.chrome.toolbar_height.unwrap_or(0.0) + tables
    }
}

fn table_height(table: &BlameTable, metrics: &LayoutMetrics) -> f64 {
    let header = if table.header().is_some() { metrics.header_row_height } else { 0.0 };
    header + table.visible_row_count() as f64 * metrics.row_height
}

/// The single rendered report page.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportDocument {
    metrics: LayoutMetrics,
    nav_bar_height: Option<f64>,
    tabs: Vec<Tab>,
    active_tab: Option<TabId>,
    scroll_top: f64,
}

impl ReportDocument {
    pub fn new(metrics: LayoutMetrics, nav_bar_height: Option<f64>) -> Self {
        Self {
            metrics,
            nav_bar_height,
            tabs: Vec::new(),
            active_tab: None,
            scroll_top: 0.0,
        }
    }

    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    pub fn nav_bar_height(&self) -> Option<f64> {
        self.nav_bar_height
    }

    pub fn push_tab(&mut self, tab: Tab) {
        self.tabs.push(tab);
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub(crate) fn tabs_mut(&mut self) -> &mut [Tab] {
        &mut self.tabs
    }

    pub fn tab(&self, tab_id: &TabId) -> Option<&Tab> {
        self.tabs.iter().find(|tab| tab.tab_id() == tab_id)
    }

    pub(crate) fn tab_mut(&mut self, tab_id: &TabId) -> Option<&mut Tab> {
        self.tabs.iter_mut().find(|tab| tab.tab_id() == tab_id)
    }

    /// The tab whose radio group offers `table_id`.
    pub fn tab_for_table(&self, table_id: &TableId) -> Option<&Tab> {
        self.tabs
            .iter()
            .find(|tab| tab.has_variant(table_id) || tab.table(table_id).is_some())
    }

    pub fn tables(&self) -> impl Iterator<Item = &BlameTable> + '_ {
        self.tabs.iter().flat_map(|tab| tab.tables().iter())
    }

    pub(crate) fn tables_mut(&mut self) -> impl Iterator<Item = &mut BlameTable> + '_ {
        self.tabs.iter_mut().flat_map(|tab| tab.tables_mut().iter_mut())
    }

    pub(crate) fn table_mut(&mut self, table_id: &TableId) -> Option<&mut BlameTable> {
        self.tabs.iter_mut().find_map(|tab| tab.table_mut(table_id))
    }

    pub fn active_tab(&self) -> Option<&TabId> {
        self.active_tab.as_ref()
    }

    pub(crate) fn set_active_tab(&mut self, tab_id: TabId) {
        self.active_tab = Some(tab_id);
        self.scroll_to(self.scroll_top);
    }

    /// Height of everything currently laid out: page chrome, the navigation bar and the
    /// active tab's pane. Inactive panes are not rendered.
    pub fn total_height(&self) -> f64 {
        let pane = self
            .active_tab
            .as_ref()
            .and_then(|tab_id| self.tab(tab_id))
            .map_or(0.0, |tab| tab.content_height(&self.metrics));
        self.metrics.page_chrome_height + self.nav_bar_height.unwrap_or(0.0) + pane
    }

    pub fn max_scroll(&self) -> f64 {
        (self.total_height() - self.metrics.viewport_height).max(0.0)
    }

    pub fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    /// Jumps to `offset` without animation, clamped to the scrollable range.
    pub fn scroll_to(&mut self, offset: f64) -> f64 {
        let offset = if offset.is_finite() { offset } else { 0.0 };
        self.scroll_top = offset.clamp(0.0, self.max_scroll());
        self.scroll_top
    }
}
