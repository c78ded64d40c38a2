// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Blameview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{HashMap, HashSet};
use std::fmt;

use tracing::{debug, info, warn};

use crate::markup::{parse_table_fragment, FragmentError};
use crate::model::{BlameTable, FilterKind, ReportDocument, TabId, TableId};

use super::header::HeaderPositionManager;
use super::scroll::ScrollAnchor;

/// Runs right after a fetched table has been appended to its tab container.
pub trait TableInsertionHook {
    fn table_inserted(&mut self, doc: &mut ReportDocument, tab_id: &TabId, table_id: &TableId);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    Request(String),
    Status(u16),
    Malformed(FragmentError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request(message) => write!(f, "table request failed: {message}"),
            Self::Status(status) => write!(f, "table request returned status {status}"),
            Self::Malformed(err) => write!(f, "table fragment is malformed: {err}"),
        }
    }
}

impl std::error::Error for LoadError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectError {
    UnknownTab(TabId),
    UnknownVariant { tab_id: TabId, table_id: TableId },
    UnknownRadio(String),
}

impl fmt::Display for SelectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTab(tab_id) => write!(f, "unknown tab: {tab_id}"),
            Self::UnknownVariant { tab_id, table_id } => {
                write!(f, "tab {tab_id} offers no table {table_id}")
            }
            Self::UnknownRadio(radio_id) => write!(f, "unknown radio button: {radio_id}"),
        }
    }
}

impl std::error::Error for SelectError {}

/// A fetch the caller must perform and hand back to [`TabTableLoader::complete_fetch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    tab_id: TabId,
    table_id: TableId,
}

impl FetchTicket {
    pub fn tab_id(&self) -> &TabId {
        &self.tab_id
    }

    pub fn table_id(&self) -> &TableId {
        &self.table_id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// The table was already in the container and is now the displayed one.
    Shown { scroll_top: f64 },
    Fetch(FetchTicket),
    /// A fetch for this table is already in flight; its completion will display it.
    AwaitingFetch,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    Shown { scroll_top: f64 },
    /// Cached hidden because another variant was selected while the fetch ran.
    Superseded,
    Failed,
}

/// Lazy per-tab table loading: first-activation auto-select and variant switching.
#[derive(Debug, Default)]
pub struct TabTableLoader {
    activated: HashSet<TabId>,
    in_flight: HashSet<TableId>,
    anchors: HashMap<TabId, ScrollAnchor>,
    hide_exclusions: bool,
    fetches: usize,
}

impl TabTableLoader {
    /// `hide_exclusions` starts every inserted table with its exclusion control active.
    pub fn new(hide_exclusions: bool) -> Self {
        Self {
            hide_exclusions,
            ..Self::default()
        }
    }

    pub fn is_activated(&self, tab_id: &TabId) -> bool {
        self.activated.contains(tab_id)
    }

    pub fn is_in_flight(&self, table_id: &TableId) -> bool {
        self.in_flight.contains(table_id)
    }

    /// Number of fetches issued this session.
    pub fn fetches(&self) -> usize {
        self.fetches
    }

    pub fn hides_exclusions(&self) -> bool {
        self.hide_exclusions
    }

    /// Applies the initial control state to a table about to enter a container.
    pub(crate) fn prepare_table(&self, table: &mut BlameTable) {
        if self.hide_exclusions && table.filters().has_control(FilterKind::ExcludeZeroAuthorRows) {
            table.filters_mut().insert_control(FilterKind::ExcludeZeroAuthorRows, true);
        }
    }

    /// Makes `tab_id` the shown pane. On its first activation only, returns the first variant
    /// to auto-select.
    pub fn activate_tab(
        &mut self,
        doc: &mut ReportDocument,
        tab_id: &TabId,
    ) -> Result<Option<TableId>, SelectError> {
        let tab = doc.tab(tab_id).ok_or_else(|| SelectError::UnknownTab(tab_id.clone()))?;
        let first = tab.variants().first().map(|variant| variant.table_id().clone());
        doc.set_active_tab(tab_id.clone());

        if !self.activated.insert(tab_id.clone()) {
            return Ok(None);
        }
        info!(tab = %tab_id, first = ?first.as_ref().map(TableId::as_str), "first tab activation");
        Ok(first)
    }

    /// Selects a variant: hides the tab's tables, then shows the cached one or asks for a fetch.
    pub fn begin_selection(
        &mut self,
        doc: &mut ReportDocument,
        tab_id: &TabId,
        table_id: &TableId,
    ) -> Result<Selection, SelectError> {
        let anchor = ScrollAnchor::capture(doc);
        let tab = doc.tab_mut(tab_id).ok_or_else(|| SelectError::UnknownTab(tab_id.clone()))?;
        if !tab.has_variant(table_id) && tab.table(table_id).is_none() {
            return Err(SelectError::UnknownVariant {
                tab_id: tab_id.clone(),
                table_id: table_id.clone(),
            });
        }

        tab.set_selected(Some(table_id.clone()));
        tab.hide_all_tables();

        if let Some(table) = tab.table_mut(table_id) {
            table.set_displayed(true);
            HeaderPositionManager::adjust(tab, table_id);
            self.anchors.remove(tab_id);
            debug!(tab = %tab_id, table = %table_id, "showing cached table");
            return Ok(Selection::Shown {
                scroll_top: anchor.restore(doc),
            });
        }

        doc.scroll_to(doc.scroll_top());
        self.anchors.insert(tab_id.clone(), anchor);
        if !self.in_flight.insert(table_id.clone()) {
            debug!(tab = %tab_id, table = %table_id, "fetch already in flight");
            return Ok(Selection::AwaitingFetch);
        }
        self.fetches += 1;
        Ok(Selection::Fetch(FetchTicket {
            tab_id: tab_id.clone(),
            table_id: table_id.clone(),
        }))
    }

    /// Inserts a fetched table. It is appended, handed to `hook`, given its header offset, and
    /// displayed only if it is still the tab's selection.
    pub fn complete_fetch(
        &mut self,
        doc: &mut ReportDocument,
        ticket: FetchTicket,
        response: Result<String, LoadError>,
        hook: &mut impl TableInsertionHook,
    ) -> Completion {
        let FetchTicket { tab_id, table_id } = ticket;
        self.in_flight.remove(&table_id);

        let parsed = response.and_then(|body| {
            parse_table_fragment(&body, table_id.clone()).map_err(LoadError::Malformed)
        });
        let mut table = match parsed {
            Ok(table) => table,
            Err(err) => {
                warn!(tab = %tab_id, table = %table_id, error = %err, "table load failed");
                return Completion::Failed;
            }
        };

        self.prepare_table(&mut table);

        let Some(tab) = doc.tab_mut(&tab_id) else {
            warn!(tab = %tab_id, table = %table_id, "tab vanished before table arrived");
            return Completion::Failed;
        };
        let current = tab.selected() == Some(&table_id);
        table.set_displayed(current);
        if !tab.append_table(table) {
            debug!(tab = %tab_id, table = %table_id, "table already present");
        }

        hook.table_inserted(doc, &tab_id, &table_id);
        if let Some(tab) = doc.tab_mut(&tab_id) {
            HeaderPositionManager::adjust(tab, &table_id);
        }

        if !current {
            debug!(tab = %tab_id, table = %table_id, "selection moved on, caching table hidden");
            return Completion::Superseded;
        }
        let anchor = self
            .anchors
            .remove(&tab_id)
            .unwrap_or_else(|| ScrollAnchor::capture(doc));
        Completion::Shown {
            scroll_top: anchor.restore(doc),
        }
    }
}

/// Whether the tab displays exactly its selected table.
#[cfg(test)]
pub(crate) fn selected_is_displayed(tab: &crate::model::Tab) -> bool {
    match (tab.selected(), tab.displayed_table()) {
        (Some(selected), Some(table)) => table.table_id() == selected,
        (None, None) => true,
        _ => false,
    }
}
