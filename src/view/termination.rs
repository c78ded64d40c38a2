// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Blameview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use tracing::{debug, info};
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryError {
    message: String,
}

impl DeliveryError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for DeliveryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "shutdown delivery failed: {}", self.message)
    }
}

impl std::error::Error for DeliveryError {}

/// How a shutdown notice leaves the process.
pub trait ShutdownTransport {
    /// Queues a fire-and-forget POST that outlives the caller. Returns `false` when no such
    /// mechanism is available.
    fn send_beacon(&self, url: &Url) -> bool;

    /// Synchronous POST used when no beacon could be queued.
    fn send_blocking(&self, url: &Url) -> Result<(), DeliveryError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Beacon,
    Blocking,
    /// Both mechanisms failed. Nothing is reported to the user.
    Dropped,
    AlreadyFired,
}

/// Tells the report server the viewer is going away. Fires at most once.
#[derive(Debug, Clone)]
pub struct SessionTerminationSignal {
    url: Url,
    fired: bool,
}

impl SessionTerminationSignal {
    pub fn new(url: Url) -> Self {
        Self { url, fired: false }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    pub fn fire(&mut self, transport: &impl ShutdownTransport) -> Delivery {
        if self.fired {
            return Delivery::AlreadyFired;
        }
        self.fired = true;

        if transport.send_beacon(&self.url) {
            info!(url = %self.url, "shutdown queued as beacon");
            return Delivery::Beacon;
        }
        match transport.send_blocking(&self.url) {
            Ok(()) => {
                info!(url = %self.url, "shutdown sent synchronously");
                Delivery::Blocking
            }
            Err(err) => {
                debug!(url = %self.url, error = %err, "shutdown notice dropped");
                Delivery::Dropped
            }
        }
    }
}
