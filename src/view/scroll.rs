// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Blameview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::ReportDocument;

/// Relative scroll position carried across a table swap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnchor {
    fraction: f64,
}

impl ScrollAnchor {
    pub fn capture(doc: &ReportDocument) -> Self {
        let height = doc.total_height();
        let fraction = if height > 0.0 { doc.scroll_top() / height } else { 0.0 };
        Self { fraction }
    }

    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    /// Scrolls to the same fraction of the current document height, without animation.
    pub fn restore(self, doc: &mut ReportDocument) -> f64 {
        let target = self.fraction * doc.total_height();
        doc.scroll_to(target)
    }
}
