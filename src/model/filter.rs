// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Blameview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Per-table row filters and their toggle controls.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Class that marks a filter control as pressed.
pub const ACTIVE_MARKER_CLASS: &str = "pressed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterKind {
    /// Hide rows whose author count is `0`, unless the author carries the `*` marker.
    ExcludeZeroAuthorRows,
    /// Hide rows whose code cell is blank.
    HideEmptyLines,
    /// Suppress author color coding for the whole table.
    HideColors,
}

impl FilterKind {
    pub const ALL: [FilterKind; 3] =
        [Self::ExcludeZeroAuthorRows, Self::HideEmptyLines, Self::HideColors];

    pub fn button_class(self) -> &'static str {
        match self {
            Self::ExcludeZeroAuthorRows => "blame-exclusions-button",
            Self::HideEmptyLines => "blame-empty-lines-button",
            Self::HideColors => "hide-colors-button",
        }
    }

    /// Finds the filter a button controls from its `class` attribute.
    pub fn from_class_list(class_list: &str) -> Option<Self> {
        class_list
            .split_ascii_whitespace()
            .find_map(|class| Self::ALL.into_iter().find(|kind| kind.button_class() == class))
    }

    fn index(self) -> usize {
        match self {
            Self::ExcludeZeroAuthorRows => 0,
            Self::HideEmptyLines => 1,
            Self::HideColors => 2,
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ExcludeZeroAuthorRows => "exclusions",
            Self::HideEmptyLines => "empty-lines",
            Self::HideColors => "colors",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFilterKind(pub String);

impl fmt::Display for UnknownFilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown filter '{}' (expected exclusions, empty-lines or colors)", self.0)
    }
}

impl std::error::Error for UnknownFilterKind {}

impl FromStr for FilterKind {
    type Err = UnknownFilterKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exclusions" => Ok(Self::ExcludeZeroAuthorRows),
            "empty-lines" => Ok(Self::HideEmptyLines),
            "colors" => Ok(Self::HideColors),
            other => Err(UnknownFilterKind(other.to_owned())),
        }
    }
}

/// The three toggles a table carries. A missing control reads as inactive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterState {
    controls: [Option<bool>; 3],
}

impl FilterState {
    pub fn with_control(mut self, kind: FilterKind, active: bool) -> Self {
        self.controls[kind.index()] = Some(active);
        self
    }

    pub fn has_control(&self, kind: FilterKind) -> bool {
        self.controls[kind.index()].is_some()
    }

    pub fn is_active(&self, kind: FilterKind) -> bool {
        self.controls[kind.index()].unwrap_or(false)
    }

    pub fn controls(&self) -> impl Iterator<Item = (FilterKind, bool)> + '_ {
        FilterKind::ALL
            .into_iter()
            .filter_map(|kind| self.controls[kind.index()].map(|active| (kind, active)))
    }

    pub(crate) fn insert_control(&mut self, kind: FilterKind, active: bool) {
        self.controls[kind.index()] = Some(active);
    }

    /// Flips the active marker of a control and returns its new state.
    pub(crate) fn toggle(&mut self, kind: FilterKind) -> Option<bool> {
        let control = self.controls[kind.index()].as_mut()?;
        *control = !*control;
        Some(*control)
    }

    pub fn hides(&self, is_empty_line: bool, is_excluded_author: bool) -> bool {
        row_hidden(
            is_empty_line,
            is_excluded_author,
            self.is_active(FilterKind::ExcludeZeroAuthorRows),
            self.is_active(FilterKind::HideEmptyLines),
        )
    }
}

pub fn row_hidden(
    is_empty_line: bool,
    is_excluded_author: bool,
    exclude_zero_author_rows: bool,
    hide_empty_lines: bool,
) -> bool {
    (is_excluded_author && exclude_zero_author_rows) || (is_empty_line && hide_empty_lines)
}
