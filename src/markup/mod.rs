// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Blameview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Report markup: the initial page and the lazily loaded table fragments.

pub mod entities;
pub mod fragment;
pub mod page;

pub use entities::decode_entities;
pub use fragment::{parse_table_fragment, FragmentError};
pub use page::{parse_report_page, ReportOutline, TabOutline};
