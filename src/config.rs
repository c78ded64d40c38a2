// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Blameview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Viewer settings read from `config.toml`.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::model::LayoutMetrics;
use crate::view::SessionOptions;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub layout: LayoutMetrics,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// [server] section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

/// Initial state of the blame exclusion controls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlameExclusions {
    /// Excluded rows start hidden.
    Hide,
    #[default]
    Show,
    /// The report carries no exclusion controls.
    None,
}

/// [report] section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub blame_exclusions: BlameExclusions,
    #[serde(default = "default_max_tab_label")]
    pub max_tab_label: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            blame_exclusions: BlameExclusions::default(),
            max_tab_label: default_max_tab_label(),
        }
    }
}

/// [logging] section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directives; `RUST_LOG` wins when set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_request_timeout_ms() -> u64 {
    5000
}

fn default_max_tab_label() -> usize {
    160
}

fn default_log_filter() -> String {
    "info".into()
}

impl ViewerConfig {
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            metrics: self.layout,
            hide_exclusions: self.report.blame_exclusions == BlameExclusions::Hide,
            max_tab_label: self.report.max_tab_label,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "cannot read config {}: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "invalid config {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}

/// `<config dir>/blameview/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("blameview").join("config.toml"))
}

/// Reads `explicit` if given, else the default location if a file exists there, else defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<ViewerConfig, ConfigError> {
    if let Some(path) = explicit {
        return read_config(path);
    }
    match default_config_path().filter(|path| path.is_file()) {
        Some(path) => read_config(&path),
        None => Ok(ViewerConfig::default()),
    }
}

pub fn read_config(path: &Path) -> Result<ViewerConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
