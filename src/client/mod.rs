// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Blameview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! HTTP side of the viewer: the two report-server endpoints and the initial page.

pub mod endpoints;
pub mod http;

pub use endpoints::{load_table_url, shutdown_url};
pub use http::{HttpShutdownTransport, HttpTableSource, PageError};
