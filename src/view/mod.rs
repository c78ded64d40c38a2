// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Blameview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Client-side behavior of an opened report: lazy table loading, row filtering, sticky
//! headers, scroll preservation and the session lifecycle signals.

pub mod header;
pub mod labels;
pub mod loader;
pub mod reload;
pub mod scroll;
pub mod session;
pub mod snapshot;
pub mod termination;
pub mod viewer;
pub mod visibility;


pub use header::HeaderPositionManager;
pub use labels::truncate_labels;
pub use loader::{
    Completion, FetchTicket, LoadError, SelectError, Selection, TabTableLoader, TableInsertionHook,
};
pub use reload::{ReloadDecision, ReloadGuard, FRESHNESS_PARAM};
pub use scroll::ScrollAnchor;
pub use session::{ReportSession, SessionOptions};
pub use snapshot::{ControlSnapshot, ReportSnapshot, TabSnapshot, TableSnapshot};
pub use termination::{Delivery, DeliveryError, SessionTerminationSignal, ShutdownTransport};
pub use viewer::{ReportViewer, SelectionOutcome, TableSource};
pub use visibility::RowVisibilityController;
