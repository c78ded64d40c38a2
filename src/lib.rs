// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Blameview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Blameview: headless viewer engine for locally served git blame reports.
//!
//! A report page holds tabs of per-file blame tables that are fetched lazily from the
//! server that rendered the page. This crate models that page and reproduces its client-side
//! behavior: table loading and caching, row filters, sticky header offsets, scroll
//! preservation and the session shutdown notice.

pub mod client;
pub mod config;
pub mod logging;
pub mod markup;
pub mod model;
pub mod view;
