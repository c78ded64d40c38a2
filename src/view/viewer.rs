// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Blameview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::cell::RefCell;

use url::Url;

use crate::model::{FilterKind, SessionId, TabId, TableId};

use super::loader::{Completion, LoadError, SelectError, Selection};
use super::session::ReportSession;
use super::snapshot::ReportSnapshot;
use super::termination::{Delivery, SessionTerminationSignal, ShutdownTransport};

/// Where fetched table fragments come from.
#[allow(async_fn_in_trait)]
pub trait TableSource {
    /// Fetches the HTML fragment of one table for `session_id`.
    async fn load_table(&self, table_id: &TableId, session_id: &SessionId)
        -> Result<String, LoadError>;
}

/// How a selection ended from the user's point of view.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionOutcome {
    Displayed { scroll_top: f64 },
    /// Another in-flight fetch for the same table will display it.
    AwaitingFetch,
    /// The table arrived after the user moved on; it is cached but hidden.
    Superseded,
    LoadFailed,
}

impl From<Completion> for SelectionOutcome {
    fn from(completion: Completion) -> Self {
        match completion {
            Completion::Shown { scroll_top } => Self::Displayed { scroll_top },
            Completion::Superseded => Self::Superseded,
            Completion::Failed => Self::LoadFailed,
        }
    }
}

/// Drives a [`ReportSession`] against a table source on a single-threaded runtime, and sends
/// the termination signal when closed or dropped.
///
/// Session state is never borrowed across a fetch, so overlapping selections on the same
/// viewer interleave only at fetch boundaries.
pub struct ReportViewer<S: TableSource, T: ShutdownTransport> {
    session: RefCell<ReportSession>,
    source: S,
    transport: T,
    termination: RefCell<SessionTerminationSignal>,
}

impl<S: TableSource, T: ShutdownTransport> ReportViewer<S, T> {
    pub fn new(session: ReportSession, source: S, transport: T, shutdown_url: Url) -> Self {
        Self {
            session: RefCell::new(session),
            source,
            transport,
            termination: RefCell::new(SessionTerminationSignal::new(shutdown_url)),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn snapshot(&self) -> ReportSnapshot {
        self.session.borrow().snapshot()
    }

    /// Runs `f` against the session state.
    pub fn with_session<R>(&self, f: impl FnOnce(&ReportSession) -> R) -> R {
        f(&self.session.borrow())
    }

    /// Activates the first tab, the way the page does right after loading.
    pub async fn open(&self) -> Result<Option<SelectionOutcome>, SelectError> {
        let first = self
            .session
            .borrow()
            .document()
            .tabs()
            .first()
            .map(|tab| tab.tab_id().clone());
        match first {
            Some(tab_id) => self.activate_tab(&tab_id).await,
            None => Ok(None),
        }
    }

    pub async fn activate_tab(
        &self,
        tab_id: &TabId,
    ) -> Result<Option<SelectionOutcome>, SelectError> {
        let selection = self.session.borrow_mut().activate_tab(tab_id)?;
        match selection {
            Some(selection) => Ok(Some(self.drive(selection).await)),
            None => Ok(None),
        }
    }

    pub async fn select_variant(
        &self,
        tab_id: &TabId,
        table_id: &TableId,
    ) -> Result<SelectionOutcome, SelectError> {
        let selection = self.session.borrow_mut().begin_selection(tab_id, table_id)?;
        Ok(self.drive(selection).await)
    }

    /// Selects a table by id, in whichever tab offers it.
    pub async fn select_table(&self, table_id: &TableId) -> Result<SelectionOutcome, SelectError> {
        self.select_radio(&table_id.radio_id()).await
    }

    pub async fn select_radio(&self, radio_id: &str) -> Result<SelectionOutcome, SelectError> {
        let selection = self.session.borrow_mut().select_radio(radio_id)?;
        Ok(self.drive(selection).await)
    }

    pub fn click_filter(&self, table_id: &TableId, kind: FilterKind) -> Option<bool> {
        self.session.borrow_mut().click_filter(table_id, kind)
    }

    pub fn scroll_to(&self, offset: f64) -> f64 {
        self.session.borrow_mut().scroll_to(offset)
    }

    /// Sends the termination signal. Later calls, and the drop, do nothing.
    pub fn close(&self) -> Delivery {
        self.termination.borrow_mut().fire(&self.transport)
    }

    async fn drive(&self, selection: Selection) -> SelectionOutcome {
        let ticket = match selection {
            Selection::Shown { scroll_top } => return SelectionOutcome::Displayed { scroll_top },
            Selection::AwaitingFetch => return SelectionOutcome::AwaitingFetch,
            Selection::Fetch(ticket) => ticket,
        };
        let session_id = self.session.borrow().session_id().clone();
        let response = self.source.load_table(ticket.table_id(), &session_id).await;
        self.session.borrow_mut().complete_fetch(ticket, response).into()
    }
}

impl<S: TableSource, T: ShutdownTransport> Drop for ReportViewer<S, T> {
    fn drop(&mut self) {
        self.termination.get_mut().fire(&self.transport);
    }
}
